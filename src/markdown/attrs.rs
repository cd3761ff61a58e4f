//! Trailing link attribute blocks.
//!
//! Parses the `{key=value key2="value two"}` block that may directly follow
//! a link: `[text](url){target=_self}`.

/// Parses attribute block at the start of `text`.
///
/// Supports `key=value`, `key="value"` and `key='value'`. Keys must be
/// plain attribute names; `href` and event handler keys (`on*`) are
/// dropped. A block that yields no attributes is not treated as one, so
/// ordinary braces after a link stay in the text.
///
/// # Arguments
///
/// * `text`: Text immediately following the link
///
/// # Returns
///
/// Attributes in source order and the byte length of the block including
/// braces, or `None` when `text` does not start with a usable block
pub fn parse_attr_block(text: &str) -> Option<(Vec<(String, String)>, usize)> {
    let inner_start = text.strip_prefix('{')?;
    let close = inner_start.find(['}', '\n'])?;
    if !inner_start[close..].starts_with('}') {
        return None;
    }

    let mut attrs = Vec::new();
    let mut remaining = inner_start[..close].trim();

    while !remaining.is_empty() {
        match parse_key_value(remaining) {
            Some((key, value, rest)) => {
                if is_allowed_key(key) {
                    attrs.push((key.to_ascii_lowercase(), value.to_string()));
                }
                remaining = rest.trim_start();
            }
            None => {
                // Skip unrecognized token
                let end = remaining
                    .find(char::is_whitespace)
                    .unwrap_or(remaining.len());
                remaining = remaining[end..].trim_start();
            }
        }
    }

    if attrs.is_empty() {
        return None;
    }

    Some((attrs, close + 2))
}

fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq_pos = s.find('=')?;
    let key = &s[..eq_pos];
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    let after_eq = &s[eq_pos + 1..];

    if let Some(stripped) = after_eq.strip_prefix('"') {
        let end_quote = stripped.find('"')?;
        Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]))
    } else if let Some(stripped) = after_eq.strip_prefix('\'') {
        let end_quote = stripped.find('\'')?;
        Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]))
    } else {
        let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
        Some((key, &after_eq[..end], &after_eq[end..]))
    }
}

fn is_allowed_key(key: &str) -> bool {
    let mut chars = key.chars();
    let valid_name = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'));

    let lower = key.to_ascii_lowercase();
    valid_name && lower != "href" && !lower.starts_with("on")
}
