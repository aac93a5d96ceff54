use crate::header::{DirectiveSet, MaxAge};
use hstspreload_types::{Issues, ids};

pub fn run(directives: &DirectiveSet) -> Issues {
    let mut issues = Issues::new();

    if directives.preload {
        issues.add_error(
            ids::CODE_REMOVABLE_CONTAINS_PRELOAD,
            "Contains preload directive",
            "Header requirement error: For preload list removal, the header must not contain the `preload` directive.",
        );
    }

    // Any value is acceptable for removal, but it has to be a value.
    if !matches!(directives.max_age, Some(MaxAge::Seconds(_))) {
        issues.add_error(
            ids::CODE_REMOVABLE_MISSING_MAX_AGE,
            "No max-age directive",
            "Header requirement error: Header must contain a valid `max-age` directive.",
        );
    }

    issues
}
