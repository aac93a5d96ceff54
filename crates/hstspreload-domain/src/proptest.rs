//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - the parser never producing errors
//! - issue accumulation and code-level matching
//! - evaluation determinism

use crate::checks::RuleSet;
use crate::header::{MaxAge, parse_header};
use crate::response::{RawHeaders, check_response};
use hstspreload_types::{Issue, Issues, PolicyType, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_directive() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("preload".to_string()),
        Just("PRELOAD".to_string()),
        Just("includeSubDomains".to_string()),
        Just("includesubdomains".to_string()),
        (0u64..100_000_000).prop_map(|n| format!("max-age={n}")),
        Just("max-age=".to_string()),
        Just("max-age=-1".to_string()),
        prop::string::string_regex("[a-z-]{1,12}(=[a-z0-9\"]{0,8})?").unwrap(),
    ]
}

fn arb_header() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::collection::vec(arb_directive(), 0..6).prop_map(|d| d.join("; ")),
        any::<String>(),
    ]
}

fn arb_rule_set() -> impl Strategy<Value = RuleSet> {
    prop_oneof![
        Just(RuleSet::Preloadable),
        Just(RuleSet::Eligible(PolicyType::Bulk18Weeks)),
        Just(RuleSet::Eligible(PolicyType::Bulk1Year)),
        Just(RuleSet::Removable),
    ]
}

fn arb_issue() -> impl Strategy<Value = Issue> {
    (
        prop::sample::select(ids::ALL_CODES),
        "[A-Za-z ]{0,10}",
        "[A-Za-z ]{0,20}",
    )
        .prop_map(|(code, summary, message)| Issue::new(code, &summary, message))
}

fn arb_issues() -> impl Strategy<Value = Issues> {
    (
        prop::collection::vec(arb_issue(), 0..4),
        prop::collection::vec(arb_issue(), 0..3),
    )
        .prop_map(|(errors, warnings)| Issues { errors, warnings })
}

// ============================================================================
// Parser
// ============================================================================

proptest! {
    #[test]
    fn parser_emits_at_most_the_empty_warning(raw in arb_header()) {
        let parsed = parse_header(&raw);
        prop_assert!(parsed.issues.errors.is_empty());
        prop_assert!(parsed.issues.warnings.len() <= 1);
        if raw.is_empty() {
            prop_assert_eq!(parsed.issues.warning_codes(), vec![ids::CODE_HEADER_PARSE_EMPTY]);
        } else {
            prop_assert!(parsed.issues.warnings.is_empty());
        }
    }

    #[test]
    fn well_formed_max_age_round_trips(n in any::<u64>()) {
        let parsed = parse_header(&format!("max-age={n}"));
        prop_assert_eq!(parsed.directives.max_age, Some(MaxAge::Seconds(n)));
    }
}

// ============================================================================
// Rule sets
// ============================================================================

proptest! {
    #[test]
    fn evaluation_is_idempotent(raw in arb_header(), rules in arb_rule_set()) {
        let first = rules.check_header(&raw);
        let second = rules.check_header(&raw);
        prop_assert!(first.matches(&second));
    }

    #[test]
    fn compliant_iff_no_errors(n in 0u64..100_000_000, policy in prop_oneof![
        Just(PolicyType::Bulk18Weeks),
        Just(PolicyType::Bulk1Year),
    ]) {
        let issues = RuleSet::Eligible(policy)
            .check_header(&format!("max-age={n}; includeSubDomains; preload"));
        let floor = crate::policy::threshold(policy).max_age_floor;
        prop_assert_eq!(issues.has_errors(), n < floor);
    }

    #[test]
    fn removal_ignores_max_age_value(n in any::<u64>()) {
        let header = format!("max-age={n}");
        prop_assert!(RuleSet::Removable.check_header(&header).is_empty());
    }

    #[test]
    fn single_header_is_returned_verbatim(raw in arb_header(), rules in arb_rule_set()) {
        let verdict = check_response(&RawHeaders::hsts(&[raw.as_str()]), rules);
        prop_assert_eq!(verdict.header.as_deref(), Some(raw.as_str()));
        prop_assert!(verdict.issues.matches(&rules.check_header(&raw)));
    }

    #[test]
    fn multiple_headers_yield_one_error(values in prop::collection::vec(arb_header(), 2..5), rules in arb_rule_set()) {
        let verdict = check_response(&RawHeaders::hsts(&values), rules);
        prop_assert_eq!(verdict.header, None);
        prop_assert_eq!(verdict.issues.error_codes(), vec![ids::CODE_RESPONSE_MULTIPLE_HEADERS]);
        prop_assert!(verdict.issues.warnings.is_empty());
    }
}

// ============================================================================
// Issue model
// ============================================================================

proptest! {
    #[test]
    fn combine_is_associative(a in arb_issues(), b in arb_issues(), c in arb_issues()) {
        let left = Issues::combine(Issues::combine(a.clone(), b.clone()), c.clone());
        let right = Issues::combine(a, Issues::combine(b, c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn combine_never_drops_issues(a in arb_issues(), b in arb_issues()) {
        let merged = Issues::combine(a.clone(), b.clone());
        prop_assert_eq!(merged.errors.len(), a.errors.len() + b.errors.len());
        prop_assert_eq!(merged.warnings.len(), a.warnings.len() + b.warnings.len());
    }

    #[test]
    fn matches_ignores_text(a in arb_issues()) {
        let mut reworded = a.clone();
        for issue in reworded.errors.iter_mut().chain(reworded.warnings.iter_mut()) {
            issue.summary = "reworded".to_string();
            issue.message = String::new();
        }
        reworded.errors.reverse();
        prop_assert!(a.matches(&reworded));
    }

    #[test]
    fn matches_detects_extra_issue(a in arb_issues(), extra in arb_issue()) {
        let mut grown = a.clone();
        grown.errors.push(extra);
        prop_assert!(!a.matches(&grown));
    }
}
