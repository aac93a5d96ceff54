//! Stable identifiers for issues.
//!
//! Codes are dotted namespaces: `<stage>.<mode>.<directive>.<condition>`.
//! External tooling keys off these strings, so a published code never changes meaning.

// Response extraction
pub const CODE_RESPONSE_NO_HEADER: &str = "response.no_header";
pub const CODE_RESPONSE_MULTIPLE_HEADERS: &str = "response.multiple_headers";

// Directive parsing
pub const CODE_HEADER_PARSE_EMPTY: &str = "header.parse.empty";

// Preload eligibility
pub const CODE_PRELOADABLE_PRELOAD_MISSING: &str = "header.preloadable.preload.missing";
pub const CODE_PRELOADABLE_INCLUDE_SUB_DOMAINS_MISSING: &str =
    "header.preloadable.include_sub_domains.missing";
pub const CODE_PRELOADABLE_MAX_AGE_MISSING: &str = "header.preloadable.max_age.missing";
pub const CODE_PRELOADABLE_MAX_AGE_PARSE: &str = "header.preloadable.max_age.parse";
pub const CODE_PRELOADABLE_MAX_AGE_BELOW_1_YEAR: &str = "header.preloadable.max_age.below_1_year";
pub const CODE_PRELOADABLE_MAX_AGE_BELOW_18_WEEKS: &str =
    "header.preloadable.max_age.below_18_weeks";

// Removal eligibility
pub const CODE_REMOVABLE_CONTAINS_PRELOAD: &str = "header.removable.contains.preload";
pub const CODE_REMOVABLE_MISSING_MAX_AGE: &str = "header.removable.missing.max_age";

/// Every published code, in namespace order.
pub const ALL_CODES: &[&str] = &[
    CODE_RESPONSE_NO_HEADER,
    CODE_RESPONSE_MULTIPLE_HEADERS,
    CODE_HEADER_PARSE_EMPTY,
    CODE_PRELOADABLE_PRELOAD_MISSING,
    CODE_PRELOADABLE_INCLUDE_SUB_DOMAINS_MISSING,
    CODE_PRELOADABLE_MAX_AGE_MISSING,
    CODE_PRELOADABLE_MAX_AGE_PARSE,
    CODE_PRELOADABLE_MAX_AGE_BELOW_1_YEAR,
    CODE_PRELOADABLE_MAX_AGE_BELOW_18_WEEKS,
    CODE_REMOVABLE_CONTAINS_PRELOAD,
    CODE_REMOVABLE_MISSING_MAX_AGE,
];
