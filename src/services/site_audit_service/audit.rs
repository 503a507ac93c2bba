use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::models::{AuditReport, CurrencyCode, MeasurementRecord};
use crate::services::report_service::normalize;
use crate::services::site_audit_service::lighthouse::MeasurementFetcher;
use crate::services::synthesis_service::{
    build_prompt, parse_candidate, GeminiClient, GenerationBackend, ModelController,
};
use crate::utils::{audit_log, display_domain, normalize_url};
use log::{error, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Result of one successful run. `warnings` carries the measurement
/// diagnostics shown as a soft warning next to the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditOutcome {
    pub report: AuditReport,
    pub measurement: MeasurementRecord,
    pub warnings: Vec<String>,
}

/// Runs measurement, synthesis and normalization for one URL.
pub struct Auditor<B> {
    config: AuditConfig,
    fetcher: MeasurementFetcher,
    controller: ModelController<B>,
}

impl Auditor<GeminiClient> {
    pub fn new(client: Client, config: AuditConfig) -> Result<Self> {
        let backend = GeminiClient::new(client.clone(), &config)?;
        Ok(Self::with_backend(client, config, backend))
    }
}

impl<B: GenerationBackend> Auditor<B> {
    pub fn with_backend(client: Client, config: AuditConfig, backend: B) -> Self {
        Self {
            fetcher: MeasurementFetcher::new(client, &config),
            controller: ModelController::new(backend, &config),
            config,
        }
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    pub async fn run(&self, url: &str) -> Result<AuditOutcome> {
        if !self.config.has_generation_credential() {
            return Err(AuditError::CredentialMissing);
        }

        let domain = display_domain(url);
        let target = normalize_url(url);
        let currency = self.config.currency;

        self.progress(&domain, &format!("Fetching performance data for {}", target));
        let measurement = self.fetcher.fetch(&target).await;
        if measurement.is_degraded() {
            self.progress(&domain, "Performance data unavailable, using defaults");
        }

        self.progress(&domain, "Synthesizing report");
        let prompt = build_prompt(&target, currency);
        let raw = self
            .controller
            .generate(&prompt, &self.config.preferred_model, &measurement)
            .await
            .inspect_err(|e| {
                error!("Report generation failed for {}: {}", target, e);
                self.progress(&domain, "Report generation failed");
            })?;

        let candidate = parse_candidate(&raw).inspect_err(|e| {
            error!("Could not parse model output for {}: {}", target, e);
            self.progress(&domain, "Report synthesis failed");
        })?;

        let report = normalize(&candidate, &measurement, url, currency);
        info!(
            "Audit complete for {}: overall score {}",
            target, report.executive_summary.overall_score
        );
        self.progress(&domain, "Report ready");

        Ok(AuditOutcome {
            report,
            warnings: measurement.errors.clone(),
            measurement,
        })
    }

    fn progress(&self, domain: &str, text: &str) {
        if let Some(dir) = &self.config.log_dir {
            let _ = audit_log(dir, domain, text);
        }
    }
}

/// Single entry point for a run with explicit credentials and preferences.
pub async fn run_audit(
    url: &str,
    api_credential: &str,
    measurement_credential: &str,
    preferred_model: &str,
    currency: CurrencyCode,
) -> Result<AuditOutcome> {
    let non_empty = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());
    let config = AuditConfig {
        gemini_api_key: non_empty(api_credential),
        pagespeed_api_key: non_empty(measurement_credential),
        preferred_model: non_empty(preferred_model)
            .unwrap_or_else(|| AuditConfig::default().preferred_model),
        currency,
        ..AuditConfig::default()
    };
    Auditor::new(Client::new(), config)?.run(url).await
}
