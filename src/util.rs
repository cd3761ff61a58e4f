//! Utility functions for docrefs

/// Returns whether URL points off-site.
///
/// Only the scheme is inspected: `http://` and `https://` (any case) are
/// external. Relative paths, anchors and other schemes are not.
///
/// # Arguments
///
/// * `url`: Link target or reference text
pub fn is_external_url(url: &str) -> bool {
    has_prefix_ignore_case(url, "http://") || has_prefix_ignore_case(url, "https://")
}

/// Returns whether link target uses a scheme that must not be rendered.
///
/// Mirrors comrak's safe URL check: `javascript:`, `vbscript:` and `file:`
/// are rejected, as is `data:` unless it carries a common image type.
pub fn is_dangerous_url(url: &str) -> bool {
    const SAFE_DATA: [&str; 4] = [
        "data:image/png",
        "data:image/gif",
        "data:image/jpeg",
        "data:image/webp",
    ];

    let url = url.trim_start();
    if has_prefix_ignore_case(url, "data:") {
        return !SAFE_DATA.iter().any(|safe| has_prefix_ignore_case(url, safe));
    }

    ["javascript:", "vbscript:", "file:"]
        .iter()
        .any(|scheme| has_prefix_ignore_case(url, scheme))
}

fn has_prefix_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_http_schemes() {
        assert!(is_external_url("http://example.com"));
        assert!(is_external_url("https://example.com/page"));
        assert!(is_external_url("HTTPS://EXAMPLE.COM"));
        assert!(is_external_url("Http://example.com"));
    }

    #[test]
    fn test_internal_targets() {
        assert!(!is_external_url("/docs/page"));
        assert!(!is_external_url("./relative.md"));
        assert!(!is_external_url("#section"));
        assert!(!is_external_url("mailto:user@example.com"));
        assert!(!is_external_url("ftp://example.com"));
        assert!(!is_external_url("http:"));
        assert!(!is_external_url(""));
    }

    #[test]
    fn test_external_ignores_multibyte_prefix() {
        assert!(!is_external_url("héllo wörld"));
    }

    #[test]
    fn test_dangerous_schemes() {
        assert!(is_dangerous_url("javascript:alert(1)"));
        assert!(is_dangerous_url("JavaScript:alert(1)"));
        assert!(is_dangerous_url("vbscript:msgbox"));
        assert!(is_dangerous_url("file:///etc/passwd"));
        assert!(is_dangerous_url("data:text/html;base64,AAAA"));
    }

    #[test]
    fn test_safe_schemes() {
        assert!(!is_dangerous_url("https://example.com"));
        assert!(!is_dangerous_url("/docs"));
        assert!(!is_dangerous_url("data:image/png;base64,AAAA"));
    }
}
