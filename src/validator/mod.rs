//! Address syntax check.
//!
//! A single regular grammar covering the usual RFC 5322 shapes: dot-atom or
//! quoted local part, dotted-label domain or bracketed address literal. No
//! network access, no normalisation. ASCII only: case folding is limited to
//! `A-Z`/`a-z`, so Unicode case variants such as `\u{212a}` never match `k`.

use std::sync::LazyLock;

use regex::Regex;

const ADDRESS_GRAMMAR: &str = concat!(
    r#"(?i-u)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*"#,
    r#"|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")"#,
    r#"@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?"#,
    r#"|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}"#,
    r#"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?"#,
    r#"|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"#,
);

static ADDRESS_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(ADDRESS_GRAMMAR).ok());

/// Returns `true` when `address` matches the address grammar as a whole.
///
/// Never panics; empty input and any non-match yield `false`.
pub fn is_valid_email(address: &str) -> bool {
    ADDRESS_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(address))
}

/// Domain part of an address: everything after the last `@`.
///
/// The domain grammar never contains `@`, so for a valid address this is the
/// same as cutting at the first `@` outside a quoted local part.
pub fn domain_of(address: &str) -> Option<&str> {
    address
        .rsplit_once('@')
        .map(|(_, domain)| domain)
        .filter(|domain| !domain.is_empty())
}
