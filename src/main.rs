use anyhow::Context;
use lightreport::api;
use lightreport::config::{AuditConfig, SettingsStore};
use lightreport::models::AppState;
use lightreport::utils::init_logging;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    let settings_path =
        std::env::var("AUDIT_SETTINGS_PATH").unwrap_or_else(|_| "settings.json".to_string());
    let export_dir = std::env::var("AUDIT_EXPORT_DIR").unwrap_or_else(|_| "reports".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3043".to_string());

    let settings = SettingsStore::load(&settings_path);
    let base_config = AuditConfig::from_env();
    if !base_config.clone().with_settings(&settings).has_generation_credential() {
        info!("No Gemini API key configured yet; set one via POST /settings");
    }

    let client = reqwest::Client::builder()
        .user_agent(concat!("lightreport/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;
    let shared_state = Arc::new(AppState::new(
        client,
        base_config,
        settings,
        PathBuf::from(export_dir),
    ));

    let app = api::router(shared_state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    println!("🚀 Server running on http://{}", addr);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
