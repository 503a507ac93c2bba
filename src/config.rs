use crate::error::{AuditError, Result};
use crate::models::CurrencyCode;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const PAGESPEED_ENDPOINT: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";
pub const GENERATION_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const FALLBACK_MODELS: [&str; 3] = ["gemini-2.5-flash", "gemini-2.0-flash", "gemini-1.5-flash"];
/// Cheaper model suggested when a run fails and the user retries.
pub const FAST_RETRY_MODEL: &str = "gemini-2.0-flash-lite";

pub const MEASUREMENT_TIMEOUT: Duration = Duration::from_secs(60);
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(180);

pub const KEY_PAGESPEED: &str = "pagespeed_api_key";
pub const KEY_GEMINI: &str = "gemini_api_key";
pub const KEY_CURRENCY: &str = "currency";
pub const KEY_MODEL: &str = "model";
pub const KEY_THEME: &str = "theme";

const KNOWN_KEYS: [&str; 5] = [KEY_PAGESPEED, KEY_GEMINI, KEY_CURRENCY, KEY_MODEL, KEY_THEME];

/// Persisted user preferences: one plain string per key, stored as a flat
/// JSON object. Loaded once at startup, written through on every change.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl SettingsStore {
    /// A missing or unreadable file yields an empty store.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, serde_json::Value>>(&raw) {
                Ok(map) => map
                    .into_iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                    .collect(),
                Err(e) => {
                    warn!("Ignoring unreadable settings file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(_) => {
                debug!("No settings file at {}, using defaults", path.display());
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if !KNOWN_KEYS.contains(&key) {
            return Err(AuditError::UnknownSetting(key.to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = std::fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(file, &self.values)?;
        Ok(())
    }
}

/// Session configuration, built once and passed by reference into the
/// fetcher, the model controller and the normalizer.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub pagespeed_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub currency: CurrencyCode,
    pub preferred_model: String,
    pub theme: String,
    pub fallback_models: Vec<String>,
    pub pagespeed_endpoint: String,
    pub generation_endpoint: String,
    pub measurement_timeout: Duration,
    pub generation_timeout: Duration,
    pub log_dir: Option<PathBuf>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            pagespeed_api_key: None,
            gemini_api_key: None,
            currency: CurrencyCode::Usd,
            preferred_model: DEFAULT_MODEL.to_string(),
            theme: "light".to_string(),
            fallback_models: FALLBACK_MODELS.iter().map(|m| m.to_string()).collect(),
            pagespeed_endpoint: PAGESPEED_ENDPOINT.to_string(),
            generation_endpoint: GENERATION_ENDPOINT.to_string(),
            measurement_timeout: MEASUREMENT_TIMEOUT,
            generation_timeout: GENERATION_TIMEOUT,
            log_dir: None,
        }
    }
}

impl AuditConfig {
    /// Reads deployment-level values from the environment. Called once at
    /// startup; the core never consults the environment afterwards.
    pub fn from_env() -> Self {
        let env = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let mut config = Self {
            pagespeed_api_key: env("PAGESPEED_API_KEY"),
            gemini_api_key: env("GEMINI_API_KEY"),
            log_dir: env("AUDIT_LOG_DIR").map(PathBuf::from),
            ..Self::default()
        };
        if let Some(code) = env("AUDIT_CURRENCY") {
            config.currency = CurrencyCode::from_code(&code);
        }
        if let Some(model) = env("AUDIT_MODEL") {
            config.preferred_model = model;
        }
        config
    }

    /// Overlays the persisted user settings; keys that are absent keep the
    /// current value.
    pub fn with_settings(mut self, store: &SettingsStore) -> Self {
        if let Some(key) = store.get(KEY_PAGESPEED) {
            self.pagespeed_api_key = Some(key.to_string());
        }
        if let Some(key) = store.get(KEY_GEMINI) {
            self.gemini_api_key = Some(key.to_string());
        }
        if let Some(code) = store.get(KEY_CURRENCY) {
            self.currency = CurrencyCode::from_code(code);
        }
        if let Some(model) = store.get(KEY_MODEL) {
            self.preferred_model = model.to_string();
        }
        if let Some(theme) = store.get(KEY_THEME) {
            self.theme = theme.to_string();
        }
        self
    }

    pub fn has_generation_credential(&self) -> bool {
        self.gemini_api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }
}
