use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Gbp,
    Aud,
    Cad,
    Eur,
}

impl CurrencyCode {
    /// Unrecognized codes fall back to USD.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "GBP" => CurrencyCode::Gbp,
            "AUD" => CurrencyCode::Aud,
            "CAD" => CurrencyCode::Cad,
            "EUR" => CurrencyCode::Eur,
            _ => CurrencyCode::Usd,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Aud => "AUD",
            CurrencyCode::Cad => "CAD",
            CurrencyCode::Eur => "EUR",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CurrencyCode::Usd => "$",
            CurrencyCode::Gbp => "£",
            CurrencyCode::Aud => "A$",
            CurrencyCode::Cad => "C$",
            CurrencyCode::Eur => "€",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
