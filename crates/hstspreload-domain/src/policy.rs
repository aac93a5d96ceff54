use hstspreload_types::{PolicyType, ids};

/// Minimum `max-age` a policy demands, and how to report falling short of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicyThreshold {
    pub policy: PolicyType,
    pub max_age_floor: u64,
    /// Human approximation of the floor used in messages.
    pub approx: &'static str,
    pub below_code: &'static str,
}

const BULK_18_WEEKS: PolicyThreshold = PolicyThreshold {
    policy: PolicyType::Bulk18Weeks,
    max_age_floor: 10_886_400,
    approx: "18 weeks",
    below_code: ids::CODE_PRELOADABLE_MAX_AGE_BELOW_18_WEEKS,
};

const BULK_1_YEAR: PolicyThreshold = PolicyThreshold {
    policy: PolicyType::Bulk1Year,
    max_age_floor: 31_536_000,
    approx: "1 year",
    below_code: ids::CODE_PRELOADABLE_MAX_AGE_BELOW_1_YEAR,
};

pub fn threshold(policy: PolicyType) -> &'static PolicyThreshold {
    match policy {
        PolicyType::Bulk18Weeks => &BULK_18_WEEKS,
        PolicyType::Bulk1Year => &BULK_1_YEAR,
    }
}
