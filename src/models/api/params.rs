use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ParamsRunAudit {
    pub url: String,
    pub model: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SettingParams {
    pub key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SettingInput {
    pub key: String,
    pub value: String,
}
