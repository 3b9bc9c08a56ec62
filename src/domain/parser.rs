//! Turns PayPal's plaintext replies into a [`ConfirmationResult`].
//!
//! PDT replies carry their own fields after a status line. IPN replies are a
//! bare `VERIFIED` / `INVALID`, so the details come from the payload that was
//! echoed back.

use crate::domain::response::{ConfirmationResult, Details};
use percent_encoding::percent_decode_str;
use tracing::warn;
use url::form_urlencoded;

const PDT_SUCCESS: &str = "SUCCESS";
const IPN_VERIFIED: &str = "VERIFIED";

/// Parses a PDT reply: `SUCCESS` on the first line, then `name=value` lines.
///
/// Lines without `=` are skipped. A repeated name keeps its last value.
pub fn parse_lookup(body: &str) -> ConfirmationResult {
    let mut lines = body.trim().split('\n');
    let confirmed = lines.next().map(str::trim) == Some(PDT_SUCCESS);

    let mut details = Details::new();
    for line in lines.filter(|line| !line.is_empty()) {
        let Some((name, value)) = line.split_once('=') else {
            warn!(line = line.trim(), "skipping PDT line without '='");
            continue;
        };
        details.insert(name.to_string(), decode_plus(value.trim()));
    }

    ConfirmationResult::new(confirmed, details)
}

/// Parses an IPN reply against the payload that was sent for verification.
///
/// Details are derived from `payload` whatever the verdict. A repeated key
/// keeps its first value.
pub fn parse_notification(body: &str, payload: &str) -> ConfirmationResult {
    let confirmed = body.trim() == IPN_VERIFIED;
    ConfirmationResult::new(confirmed, parse_query(payload))
}

/// Splits a query string into trimmed, decoded fields. Keys without `=` map
/// to an empty value.
pub fn parse_query(query: &str) -> Details {
    let mut details = Details::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        details
            .entry(key.into_owned())
            .or_insert_with(|| value.trim().to_string());
    }
    details
}

/// Percent-decodes `value`, reading `+` as a space.
pub fn decode_plus(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(pairs: &[(&str, &str)]) -> Details {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_lookup_success_with_fields() {
        let result = parse_lookup("SUCCESS\nfirst_name=Joe+Black\nitem_number=\n");
        assert!(result.confirmed);
        assert_eq!(
            result.details,
            details(&[("first_name", "Joe Black"), ("item_number", "")])
        );
    }

    #[test]
    fn test_lookup_fail() {
        let result = parse_lookup("FAIL");
        assert!(!result.confirmed);
        assert!(result.details.is_empty());
    }

    #[test]
    fn test_lookup_status_is_case_sensitive() {
        assert!(!parse_lookup("success\nfirst_name=Joe").confirmed);
        assert!(parse_lookup("  SUCCESS  \r\nfirst_name=Joe").confirmed);
    }

    #[test]
    fn test_lookup_skips_blank_and_malformed_lines() {
        let result = parse_lookup("SUCCESS\nfirst_name=Joe\n\ngarbage\r\nitem_number=\n");
        assert_eq!(
            result.details,
            details(&[("first_name", "Joe"), ("item_number", "")])
        );
    }

    #[test]
    fn test_lookup_decodes_values_and_keeps_last_duplicate() {
        let result =
            parse_lookup("SUCCESS\nlast_name=De%27audney\nmemo=a=b\nmemo=second+note\r\n");
        assert_eq!(
            result.details,
            details(&[("last_name", "De'audney"), ("memo", "second note")])
        );
    }

    #[test]
    fn test_notification_verified() {
        let result = parse_notification("VERIFIED", "first_name=Joe+Black&item_number=");
        assert!(result.confirmed);
        assert_eq!(
            result.details,
            details(&[("first_name", "Joe Black"), ("item_number", "")])
        );
    }

    #[test]
    fn test_notification_invalid_still_has_details() {
        let result = parse_notification("INVALID", "first_name=Joe&last_name=De%27audney");
        assert!(!result.confirmed);
        assert_eq!(
            result.details,
            details(&[("first_name", "Joe"), ("last_name", "De'audney")])
        );
    }

    #[test]
    fn test_query_trims_values_and_keeps_first_duplicate() {
        let parsed = parse_query("first_name=Joe+Black\n&item_number=\n&flag&first_name=Jane");
        assert_eq!(
            parsed,
            details(&[("first_name", "Joe Black"), ("item_number", ""), ("flag", "")])
        );
    }

    #[test]
    fn test_decode_plus() {
        assert_eq!(decode_plus("%27"), "'");
        assert_eq!(decode_plus("Joe+Black"), "Joe Black");
        assert_eq!(decode_plus("a%2Bb"), "a+b");
    }
}
