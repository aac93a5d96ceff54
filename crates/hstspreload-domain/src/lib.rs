//! Pure header compliance evaluation (no IO).
//!
//! Input: a Strict-Transport-Security value, or any header source that can be asked for it.
//! Output: the header value (when exactly one was present) and the accumulated issues.

#![forbid(unsafe_code)]

pub mod checks;
pub mod header;
pub mod policy;
pub mod response;

#[cfg(test)]
mod proptest;

pub use checks::{RuleSet, eligible_header, preloadable_header, removable_header};
pub use header::{DirectiveSet, MaxAge, ParsedHeader, parse_header};
pub use policy::{PolicyThreshold, threshold};
pub use response::{
    HSTS_HEADER, HeaderSource, RawHeaders, ResponseVerdict, check_response, check_single_header,
    eligible_response, preloadable_response, removable_response,
};
