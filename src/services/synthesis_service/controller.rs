use super::backend::GenerationBackend;
use super::prompt::measurement_context;
use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::models::MeasurementRecord;
use log::{info, warn};
use std::time::Duration;

/// Walks an ordered queue of models until one answers.
///
/// Attempts are strictly sequential, each bounded by `timeout`. The first
/// success ends the run; a failure moves straight to the next model.
pub struct ModelController<B> {
    backend: B,
    fallback_models: Vec<String>,
    timeout: Duration,
}

impl<B: GenerationBackend> ModelController<B> {
    pub fn new(backend: B, config: &AuditConfig) -> Self {
        Self::with_fallbacks(
            backend,
            config.fallback_models.clone(),
            config.generation_timeout,
        )
    }

    pub fn with_fallbacks(backend: B, fallback_models: Vec<String>, timeout: Duration) -> Self {
        Self {
            backend,
            fallback_models,
            timeout,
        }
    }

    /// Preferred model first, then the fallbacks, without duplicates.
    pub fn candidate_queue(&self, preferred: &str) -> Vec<String> {
        let mut queue: Vec<String> = Vec::with_capacity(self.fallback_models.len() + 1);
        let preferred = preferred.trim();
        let candidates = std::iter::once(preferred).chain(self.fallback_models.iter().map(String::as_str));
        for model in candidates {
            if !model.is_empty() && !queue.iter().any(|m| m == model) {
                queue.push(model.to_string());
            }
        }
        queue
    }

    pub async fn generate(
        &self,
        prompt: &str,
        preferred: &str,
        measurement: &MeasurementRecord,
    ) -> Result<String> {
        let full_prompt = format!("{}\n\n{}", prompt, measurement_context(measurement));
        let queue = self.candidate_queue(preferred);

        let mut last_failure: Option<(String, String)> = None;
        for model in &queue {
            info!("Requesting report synthesis from {}", model);
            let attempt = tokio::time::timeout(
                self.timeout,
                self.backend.generate_content(model, &full_prompt),
            )
            .await;

            let err = match attempt {
                Ok(Ok(text)) => {
                    info!("{} answered ({} chars)", model, text.len());
                    return Ok(text);
                }
                Ok(Err(e)) => e,
                Err(_) => AuditError::Timeout(self.timeout),
            };

            warn!("Model {} failed: {}", model, err);
            last_failure = Some((model.clone(), err.to_string()));
        }

        let (model, reason) =
            last_failure.unwrap_or_else(|| ("none".to_string(), "no models configured".to_string()));
        Err(AuditError::GenerationExhausted { model, reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Scripted {
        succeed_on: Vec<&'static str>,
        attempts: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(succeed_on: Vec<&'static str>) -> Self {
            Self {
                succeed_on,
                attempts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GenerationBackend for Scripted {
        async fn generate_content(&self, model: &str, _prompt: &str) -> Result<String> {
            self.attempts.lock().unwrap().push(model.to_string());
            if self.succeed_on.contains(&model) {
                Ok(format!("{{\"model\":\"{}\"}}", model))
            } else {
                Err(AuditError::Api {
                    status: 503,
                    body: format!("{} overloaded", model),
                })
            }
        }
    }

    fn controller(backend: Scripted, fallbacks: &[&str]) -> ModelController<Scripted> {
        ModelController::with_fallbacks(
            backend,
            fallbacks.iter().map(|m| m.to_string()).collect(),
            Duration::from_secs(5),
        )
    }

    fn measurement() -> MeasurementRecord {
        MeasurementRecord::unavailable("offline")
    }

    #[test]
    fn queue_is_deduplicated_in_order() {
        let c = controller(Scripted::new(vec![]), &["b", "a", "c", "b"]);
        assert_eq!(c.candidate_queue("a"), vec!["a", "b", "c"]);
        assert_eq!(c.candidate_queue(""), vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn falls_through_to_first_success() {
        let c = controller(Scripted::new(vec!["c"]), &["a", "b", "c"]);
        let text = c.generate("prompt", "a", &measurement()).await.unwrap();

        assert_eq!(text, "{\"model\":\"c\"}");
        assert_eq!(*c.backend.attempts.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn stops_at_first_success() {
        let c = controller(Scripted::new(vec!["a", "b"]), &["a", "b", "c"]);
        c.generate("prompt", "a", &measurement()).await.unwrap();
        assert_eq!(*c.backend.attempts.lock().unwrap(), vec!["a"]);
    }

    #[tokio::test]
    async fn exhaustion_names_last_model() {
        let c = controller(Scripted::new(vec![]), &["a", "b"]);
        let err = c.generate("prompt", "a", &measurement()).await.unwrap_err();

        match err {
            AuditError::GenerationExhausted { model, reason } => {
                assert_eq!(model, "b");
                assert!(reason.contains("b overloaded"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
