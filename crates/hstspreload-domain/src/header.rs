//! Directive parsing for a single Strict-Transport-Security value.
//!
//! The parser only reports syntax-level findings (the empty header). Whether a directive is
//! required, and what to say when it is missing or malformed, belongs to the rule sets.

use hstspreload_types::{Issues, ids};

/// Value of the `max-age` directive as observed in the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaxAge {
    Seconds(u64),
    /// Present but not a plain decimal integer; holds the raw value text.
    Malformed(String),
}

/// Directives recognized in one header value.
///
/// Unrecognized directives are dropped; they are not errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectiveSet {
    pub max_age: Option<MaxAge>,
    pub include_sub_domains: bool,
    pub preload: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedHeader {
    pub directives: DirectiveSet,
    /// At most one warning (`header.parse.empty`), never errors.
    pub issues: Issues,
}

/// Parse a raw header value into its directives.
///
/// Rules:
/// - `""` is the empty header: one warning, every directive absent
/// - tokens are split on `;` and trimmed; empty tokens are skipped
/// - directive names are matched case-insensitively
/// - duplicate `max-age` tokens: the last one wins
pub fn parse_header(raw: &str) -> ParsedHeader {
    let mut parsed = ParsedHeader::default();

    if raw.is_empty() {
        parsed.issues.add_warning(
            ids::CODE_HEADER_PARSE_EMPTY,
            "Empty Header",
            "The HSTS header is empty.",
        );
        return parsed;
    }

    for token in raw.split(';').map(str::trim) {
        if token.is_empty() {
            continue;
        }

        let (name, value) = match token.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (token, None),
        };

        if name.eq_ignore_ascii_case("max-age") {
            parsed.directives.max_age = Some(parse_max_age(value));
        } else if value.is_none() && name.eq_ignore_ascii_case("includeSubDomains") {
            parsed.directives.include_sub_domains = true;
        } else if value.is_none() && name.eq_ignore_ascii_case("preload") {
            parsed.directives.preload = true;
        }
    }

    parsed
}

fn parse_max_age(value: Option<&str>) -> MaxAge {
    let Some(value) = value else {
        return MaxAge::Malformed(String::new());
    };

    // `u64::from_str` accepts a leading `+`; only bare digits are valid here.
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return MaxAge::Malformed(value.to_string());
    }

    match value.parse::<u64>() {
        Ok(seconds) => MaxAge::Seconds(seconds),
        Err(_) => MaxAge::Malformed(value.to_string()),
    }
}
