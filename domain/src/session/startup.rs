//! Startup options parsed from a URL-style query string

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Options read once when the session starts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupOptions {
    /// Start auto mode immediately
    pub auto: bool,
}

impl StartupOptions {
    /// Parse a query string such as `auto=true` or `?auto=true&x=1`.
    ///
    /// Only the exact value `true` enables auto mode. The first occurrence
    /// of a key wins. Malformed percent-escapes are an error; callers that
    /// want the lenient behavior use [`StartupOptions::from_query_or_default`].
    pub fn parse_query(query: &str) -> Result<Self, DomainError> {
        let query = query.trim().trim_start_matches('?');
        check_raw_query(query)?;

        let mut auto = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            // Lossy decoding marks invalid UTF-8 with U+FFFD
            if key.contains(char::REPLACEMENT_CHARACTER)
                || value.contains(char::REPLACEMENT_CHARACTER)
            {
                return Err(DomainError::InvalidStartupQuery(format!(
                    "non UTF-8 pair in '{}'",
                    query
                )));
            }
            if key == "auto" && auto.is_none() {
                auto = Some(value == "true");
            }
        }

        Ok(Self {
            auto: auto.unwrap_or(false),
        })
    }

    /// Parse, treating any malformed input as absent
    pub fn from_query_or_default(query: &str) -> (Self, Option<DomainError>) {
        match Self::parse_query(query) {
            Ok(options) => (options, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

/// Reject input `form_urlencoded` would decode leniently: a `%` not followed by
/// two hex digits is passed through as-is, and a literal U+FFFD would be
/// indistinguishable from a decoding failure.
fn check_raw_query(query: &str) -> Result<(), DomainError> {
    let bytes = query.as_bytes();
    let bad = bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !bytes
                .get(i + 1..i + 3)
                .is_some_and(|h| h.iter().all(u8::is_ascii_hexdigit))
    });
    if bad {
        return Err(DomainError::InvalidStartupQuery(format!(
            "bad escape in '{}'",
            query
        )));
    }
    if query.contains(char::REPLACEMENT_CHARACTER) {
        return Err(DomainError::InvalidStartupQuery(format!(
            "replacement character in '{}'",
            query
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_true() {
        assert!(StartupOptions::parse_query("auto=true").unwrap().auto);
        assert!(StartupOptions::parse_query("?theme=dark&auto=true").unwrap().auto);
    }

    #[test]
    fn test_other_values_leave_manual_mode() {
        for q in ["", "auto", "auto=", "auto=1", "auto=TRUE", "auto=false", "x=true"] {
            assert!(!StartupOptions::parse_query(q).unwrap().auto, "query {:?}", q);
        }
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert!(!StartupOptions::parse_query("auto=no&auto=true").unwrap().auto);
    }

    #[test]
    fn test_percent_decoding() {
        assert!(StartupOptions::parse_query("%61uto=%74rue").unwrap().auto);
    }

    #[test]
    fn test_malformed_is_error() {
        assert!(StartupOptions::parse_query("auto=%zz").is_err());
        assert!(StartupOptions::parse_query("auto=%E").is_err());
        assert!(StartupOptions::parse_query("auto=%FF").is_err());
    }

    #[test]
    fn test_plus_and_encoded_separators() {
        assert!(StartupOptions::parse_query("mode=a+b&auto=true").unwrap().auto);
        assert!(!StartupOptions::parse_query("x=auto%3Dtrue").unwrap().auto);
        assert!(StartupOptions::parse_query("note=100%25&auto=true").unwrap().auto);
    }

    #[test]
    fn test_invalid_utf8_escape_is_error() {
        let err = StartupOptions::parse_query("auto=true&name=%C3%28").unwrap_err();
        assert!(matches!(err, DomainError::InvalidStartupQuery(_)));
    }

    #[test]
    fn test_malformed_falls_back_to_default() {
        let (options, err) = StartupOptions::from_query_or_default("auto=true&%");
        assert!(!options.auto);
        assert!(err.is_some());
    }
}
