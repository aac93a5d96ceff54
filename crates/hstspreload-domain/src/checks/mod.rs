use crate::header::{DirectiveSet, parse_header};
use hstspreload_types::{Issues, PolicyType, ScanMode};

mod eligible;
mod removable;


/// Requirement set a header is held to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleSet {
    /// Preload eligibility at the strictest policy (`bulk-1-year`).
    Preloadable,
    /// Preload eligibility at a caller-chosen policy.
    Eligible(PolicyType),
    /// Eligibility for removal from the preload list.
    Removable,
}

impl RuleSet {
    pub fn check(&self, directives: &DirectiveSet) -> Issues {
        match self {
            RuleSet::Preloadable => eligible::run(directives, PolicyType::Bulk1Year),
            RuleSet::Eligible(policy) => eligible::run(directives, *policy),
            RuleSet::Removable => removable::run(directives),
        }
    }

    /// Policy the rule set compares `max-age` against, if any.
    pub fn policy(&self) -> Option<PolicyType> {
        match self {
            RuleSet::Preloadable => Some(PolicyType::Bulk1Year),
            RuleSet::Eligible(policy) => Some(*policy),
            RuleSet::Removable => None,
        }
    }

    pub fn mode(&self) -> ScanMode {
        match self {
            RuleSet::Preloadable => ScanMode::Preloadable,
            RuleSet::Eligible(_) => ScanMode::Eligible,
            RuleSet::Removable => ScanMode::Removable,
        }
    }

    /// Parse `raw` and check it; parse warnings come before rule-set findings.
    pub fn check_header(&self, raw: &str) -> Issues {
        let parsed = parse_header(raw);
        Issues::combine(parsed.issues, self.check(&parsed.directives))
    }
}

/// Check a header value against the preload requirements at `bulk-1-year`.
pub fn preloadable_header(raw: &str) -> Issues {
    RuleSet::Preloadable.check_header(raw)
}

/// Check a header value against the preload requirements at `policy`.
pub fn eligible_header(raw: &str, policy: PolicyType) -> Issues {
    RuleSet::Eligible(policy).check_header(raw)
}

/// Check a header value against the removal requirements.
pub fn removable_header(raw: &str) -> Issues {
    RuleSet::Removable.check_header(raw)
}
