use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::models::lighthouse::PageSpeedResponse;
use crate::models::MeasurementRecord;
use crate::services::site_audit_service::compute::to_measurement;
use log::{info, warn};
use reqwest::Client;
use std::time::Duration;

const CATEGORIES: [&str; 4] = ["performance", "seo", "accessibility", "best-practices"];

/// Calls the PageSpeed Insights API and maps the payload into a
/// [`MeasurementRecord`]. Never fails: errors become a degraded record.
#[derive(Debug, Clone)]
pub struct MeasurementFetcher {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl MeasurementFetcher {
    pub fn new(client: Client, config: &AuditConfig) -> Self {
        Self {
            client,
            endpoint: config.pagespeed_endpoint.clone(),
            api_key: config.pagespeed_api_key.clone(),
            timeout: config.measurement_timeout,
        }
    }

    pub async fn fetch(&self, url: &str) -> MeasurementRecord {
        info!("Requesting performance data for {}", url);

        let outcome = match tokio::time::timeout(self.timeout, self.request(url)).await {
            Ok(result) => result,
            Err(_) => Err(AuditError::Timeout(self.timeout)),
        };

        match outcome {
            Ok(payload) => {
                let record = to_measurement(&payload);
                info!(
                    "Performance data for {}: performance={} seo={} opportunities={}",
                    url,
                    record.performance_score,
                    record.seo_score,
                    record.opportunities.len()
                );
                record
            }
            Err(e) => {
                let degraded = AuditError::MeasurementUnavailable(e.to_string());
                warn!("{} ({}), continuing with default measurement", degraded, url);
                MeasurementRecord::unavailable(degraded.to_string())
            }
        }
    }

    async fn request(&self, url: &str) -> Result<PageSpeedResponse> {
        let mut query: Vec<(&str, &str)> = vec![("url", url), ("strategy", "desktop")];
        query.extend(CATEGORIES.iter().map(|c| ("category", *c)));
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            query.push(("key", key));
        }

        let response = self.client.get(&self.endpoint).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuditError::Api {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        Ok(response.json::<PageSpeedResponse>().await?)
    }
}
