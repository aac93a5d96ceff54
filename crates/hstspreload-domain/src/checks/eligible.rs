use crate::header::{DirectiveSet, MaxAge};
use crate::policy::threshold;
use hstspreload_types::{Issues, PolicyType, ids};

pub fn run(directives: &DirectiveSet, policy: PolicyType) -> Issues {
    let mut issues = Issues::new();

    if !directives.preload {
        issues.add_error(
            ids::CODE_PRELOADABLE_PRELOAD_MISSING,
            "No preload directive",
            "The header must contain the `preload` directive.",
        );
    }

    if !directives.include_sub_domains {
        issues.add_error(
            ids::CODE_PRELOADABLE_INCLUDE_SUB_DOMAINS_MISSING,
            "No includeSubDomains directive",
            "The header must contain the `includeSubDomains` directive.",
        );
    }

    match &directives.max_age {
        None => {
            issues.add_error(
                ids::CODE_PRELOADABLE_MAX_AGE_MISSING,
                "No max-age directive",
                "Header requirement error: Header must contain a valid `max-age` directive.",
            );
        }
        Some(MaxAge::Malformed(value)) => {
            issues.add_error(
                ids::CODE_PRELOADABLE_MAX_AGE_PARSE,
                "Invalid max-age directive",
                format!(
                    "The max-age value must be a non-negative decimal integer, but the header has max-age={value}."
                ),
            );
        }
        Some(MaxAge::Seconds(seconds)) => {
            let floor = threshold(policy);
            if *seconds < floor.max_age_floor {
                issues.add_error(
                    floor.below_code,
                    &format!("max-age too low for {policy}"),
                    format!(
                        "The max-age must be at least {} seconds (≈ {}), but the header currently only has max-age={}.",
                        floor.max_age_floor, floor.approx, seconds
                    ),
                );
            }
        }
    }

    issues
}
