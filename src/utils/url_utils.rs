use url::Url;

/// Adds an `https://` scheme to bare hosts such as `example.com`.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Upper-cased host without `www.`, used as the display name of a site.
/// Falls back to the raw input when it does not parse as a URL.
pub fn display_domain(raw: &str) -> String {
    let host = Url::parse(&normalize_url(raw))
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| {
            raw.trim()
                .trim_start_matches("https://")
                .trim_start_matches("http://")
                .split('/')
                .next()
                .unwrap_or_default()
                .to_string()
        });

    host.trim_start_matches("www.").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_scheme() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com/a"), "http://example.com/a");
    }

    #[test]
    fn domain_is_uppercased_host() {
        assert_eq!(display_domain("https://acme.io"), "ACME.IO");
        assert_eq!(display_domain("example.com"), "EXAMPLE.COM");
        assert_eq!(display_domain("https://www.shop.co.uk/cart?x=1"), "SHOP.CO.UK");
    }
}
