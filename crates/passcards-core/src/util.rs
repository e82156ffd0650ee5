//! Small text helpers shared by config and the HTTP client.

/// Longest response body kept in an [`Error::Status`](crate::Error::Status).
pub const MAX_ERROR_BODY_CHARS: usize = 180;

/// Trimmed value, or `None` when missing or blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_owned)
}

pub fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// First [`MAX_ERROR_BODY_CHARS`] characters of a trimmed response body.
pub fn error_snippet(body: &str) -> String {
    body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_drops_missing_and_whitespace() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" \t\n".to_string())), None);
        assert_eq!(
            non_blank(Some("  https://cards.local/ ".to_string())),
            Some("https://cards.local/".to_string())
        );
    }

    #[test]
    fn has_http_scheme_requires_http_or_https() {
        assert!(has_http_scheme("http://localhost:8080"));
        assert!(has_http_scheme("https://cards.local"));
        assert!(!has_http_scheme("ftp://cards.local"));
        assert!(!has_http_scheme("localhost:8080"));
    }

    #[test]
    fn error_snippet_trims_and_caps() {
        let body = "e".repeat(MAX_ERROR_BODY_CHARS * 3);
        assert_eq!(error_snippet(&body).chars().count(), MAX_ERROR_BODY_CHARS);
        assert_eq!(error_snippet("\n not found \n"), "not found");
    }
}
