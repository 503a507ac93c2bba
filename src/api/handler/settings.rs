use super::audit::error_response;
use crate::models::{AppState, SettingInput, SettingParams, SettingsResponse};
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::info;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Credentials are never echoed back in full; short ones not at all.
fn mask(key: &str, value: &str) -> String {
    if !key.ends_with("_api_key") {
        return value.to_string();
    }
    let len = value.chars().count();
    if len <= 4 {
        return "****".to_string();
    }
    let tail: String = value.chars().skip(len - 4).collect();
    format!("****{}", tail)
}

pub async fn get_settings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SettingParams>,
) -> impl IntoResponse {
    let store = state.settings.lock().await;

    let values: BTreeMap<String, String> = store
        .entries()
        .iter()
        .filter(|(k, _)| params.key.as_deref().is_none_or(|wanted| wanted == k.as_str()))
        .map(|(k, v)| (k.clone(), mask(k, v)))
        .collect();

    let status = if values.is_empty() && params.key.is_some() {
        "Key not found"
    } else {
        "OK"
    };
    let code = if status == "OK" {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    (
        code,
        Json(SettingsResponse {
            values,
            status: status.to_string(),
        }),
    )
}

pub async fn set_setting(
    State(state): State<Arc<AppState>>,
    Json(input): Json<SettingInput>,
) -> Response {
    let mut store = state.settings.lock().await;
    match store.set(&input.key, &input.value) {
        Ok(()) => {
            info!("Updated setting {}", input.key);
            let mut values = BTreeMap::new();
            values.insert(input.key.clone(), mask(&input.key, &input.value));
            (
                StatusCode::OK,
                Json(SettingsResponse {
                    values,
                    status: "OK".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::mask;

    #[test]
    fn credentials_show_only_last_four() {
        assert_eq!(mask("gemini_api_key", "abcdef123456"), "****3456");
        assert_eq!(mask("pagespeed_api_key", "abcde"), "****bcde");
    }

    #[test]
    fn short_credentials_are_fully_hidden() {
        assert_eq!(mask("gemini_api_key", "abcd"), "****");
        assert_eq!(mask("gemini_api_key", "ab"), "****");
        assert_eq!(mask("gemini_api_key", ""), "****");
    }

    #[test]
    fn other_settings_are_echoed() {
        assert_eq!(mask("currency", "GBP"), "GBP");
    }
}
