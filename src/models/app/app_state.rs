use crate::config::{AuditConfig, SettingsStore};
use crate::services::AuditOutcome;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tokio::task::AbortHandle;

pub struct AppState {
    pub client: Client,
    /// Deployment-level configuration; user settings are overlaid per run.
    pub base_config: AuditConfig,
    pub settings: Mutex<SettingsStore>,
    /// Latest completed run; replaced wholesale by the next one.
    pub latest: Mutex<Option<AuditOutcome>>,
    /// Generation of the most recently started run.
    run_generation: AtomicU64,
    /// The run in flight, tagged with its generation.
    active_run: Mutex<Option<(u64, AbortHandle)>>,
    pub export_dir: PathBuf,
}

impl AppState {
    pub fn new(
        client: Client,
        base_config: AuditConfig,
        settings: SettingsStore,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            client,
            base_config,
            settings: Mutex::new(settings),
            latest: Mutex::new(None),
            run_generation: AtomicU64::new(0),
            active_run: Mutex::new(None),
            export_dir,
        }
    }

    /// Configuration for the next run: base values with the current user
    /// settings on top.
    pub async fn run_config(&self) -> AuditConfig {
        let settings = self.settings.lock().await;
        self.base_config.clone().with_settings(&settings)
    }

    pub fn next_generation(&self) -> u64 {
        self.run_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.run_generation.load(Ordering::SeqCst) == generation
    }

    /// Marks a run as in flight and aborts the one it replaces. A run that
    /// registers after a newer one is aborted instead.
    pub async fn track_run(&self, generation: u64, handle: AbortHandle) {
        let mut active = self.active_run.lock().await;
        match active.as_ref() {
            Some((newer, _)) if *newer > generation => handle.abort(),
            _ => {
                if let Some((_, previous)) = active.replace((generation, handle)) {
                    previous.abort();
                }
            }
        }
    }

    pub async fn finish_run(&self, generation: u64) {
        let mut active = self.active_run.lock().await;
        if active.as_ref().is_some_and(|(g, _)| *g == generation) {
            *active = None;
        }
    }

    /// Stores the outcome unless a newer run has started since. Returns
    /// whether it was stored.
    pub async fn publish(&self, generation: u64, outcome: AuditOutcome) -> bool {
        let mut latest = self.latest.lock().await;
        if !self.is_current(generation) {
            return false;
        }
        *latest = Some(outcome);
        true
    }
}
