//! Shared URL/form parsing utilities for route handlers.

use crate::error::ScoreboardError;

/// Parse URL-encoded form body into key-value pairs.
/// Handles `key=value&key2=value2` format (from HTMX POST bodies).
pub fn parse_form_body(body: &str) -> Vec<(String, String)> {
    if body.is_empty() {
        return Vec::new();
    }
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, val) = pair.split_once('=').unwrap_or((pair, ""));
            (percent_decode(key), percent_decode(val))
        })
        .collect()
}

/// Percent-decode a URL-encoded value.
///
/// Decodes to bytes first so multi-byte UTF-8 sequences (Thai names and
/// labels arrive as `%E0%B8%...`) come back intact. Malformed escapes are
/// kept literally.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = bytes
                    .get(i + 1..i + 3)
                    .filter(|h| h.iter().all(u8::is_ascii_hexdigit))
                    .and_then(|h| core::str::from_utf8(h).ok())
                    .and_then(|h| u8::from_str_radix(h, 16).ok());
                match hex {
                    Some(val) => {
                        out.push(val);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Parse a query string into key-value pairs.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let q = query.strip_prefix('?').unwrap_or(query);
    parse_form_body(q)
}

/// Helper to get a value by key from a list of key-value pairs.
pub fn get_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Like [`get_param`], but a missing or empty value is an error.
pub fn require_param<'a>(
    params: &'a [(String, String)],
    key: &'static str,
) -> Result<&'a str, ScoreboardError> {
    match get_param(params, key) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ScoreboardError::MissingParam(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_form_body_works() {
        let pairs = parse_form_body("target=self&points=7&label=black");
        assert_eq!(pairs.len(), 3);
        assert_eq!(get_param(&pairs, "target"), Some("self"));
        assert_eq!(get_param(&pairs, "points"), Some("7"));
    }

    #[test]
    fn parse_form_body_empty() {
        assert!(parse_form_body("").is_empty());
        assert!(parse_form_body("&&").is_empty());
    }

    #[test]
    fn key_without_value() {
        let pairs = parse_form_body("confirmed");
        assert_eq!(get_param(&pairs, "confirmed"), Some(""));
    }

    #[test]
    fn percent_decode_plus_as_space() {
        assert_eq!(percent_decode("hello+world"), "hello world");
    }

    #[test]
    fn percent_decode_hex() {
        assert_eq!(percent_decode("hello%20world"), "hello world");
    }

    #[test]
    fn percent_decode_utf8() {
        // "แดง"
        assert_eq!(percent_decode("%E0%B9%81%E0%B8%94%E0%B8%87"), "แดง");
        assert_eq!(
            percent_decode("%E0%B8%9C%E0%B8%B9%E0%B9%89%E0%B9%80%E0%B8%A5%E0%B9%88%E0%B8%99+A"),
            "ผู้เล่น A"
        );
    }

    #[test]
    fn percent_decode_malformed_kept() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%4"), "%4");
    }

    #[test]
    fn parse_query_strips_prefix() {
        let pairs = parse_query("?foo=bar");
        assert_eq!(get_param(&pairs, "foo"), Some("bar"));
    }

    #[test]
    fn require_param_rejects_empty() {
        let pairs = parse_form_body("target=&points=1");
        assert!(matches!(
            require_param(&pairs, "target"),
            Err(ScoreboardError::MissingParam("target"))
        ));
        assert!(require_param(&pairs, "label").is_err());
        assert_eq!(require_param(&pairs, "points").unwrap(), "1");
    }
}
