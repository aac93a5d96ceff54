//! Explain registry for issue codes.
//!
//! Maps issue codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for an issue code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the issue.
    pub title: &'static str,
    /// What the issue means and why it blocks the request.
    pub description: &'static str,
    /// How to fix it.
    pub remediation: &'static str,
    /// Before/after header examples.
    pub examples: ExamplePair,
}

/// Before and after header examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Header that would trigger the issue.
    pub before: &'static str,
    /// Header that does not.
    pub after: &'static str,
}

/// Look up an explanation by issue code.
///
/// Returns `None` if the code is not recognized.
pub fn lookup_explanation(code: &str) -> Option<Explanation> {
    match code {
        ids::CODE_RESPONSE_NO_HEADER => Some(explain_no_header()),
        ids::CODE_RESPONSE_MULTIPLE_HEADERS => Some(explain_multiple_headers()),
        ids::CODE_HEADER_PARSE_EMPTY => Some(explain_empty_header()),
        ids::CODE_PRELOADABLE_PRELOAD_MISSING => Some(explain_preload_missing()),
        ids::CODE_PRELOADABLE_INCLUDE_SUB_DOMAINS_MISSING => {
            Some(explain_include_sub_domains_missing())
        }
        ids::CODE_PRELOADABLE_MAX_AGE_MISSING => Some(explain_max_age_missing()),
        ids::CODE_PRELOADABLE_MAX_AGE_PARSE => Some(explain_max_age_parse()),
        ids::CODE_PRELOADABLE_MAX_AGE_BELOW_1_YEAR => Some(explain_below_1_year()),
        ids::CODE_PRELOADABLE_MAX_AGE_BELOW_18_WEEKS => Some(explain_below_18_weeks()),
        ids::CODE_REMOVABLE_CONTAINS_PRELOAD => Some(explain_removable_contains_preload()),
        ids::CODE_REMOVABLE_MISSING_MAX_AGE => Some(explain_removable_missing_max_age()),
        _ => None,
    }
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    ids::ALL_CODES
}

// --- Response extraction ---

fn explain_no_header() -> Explanation {
    Explanation {
        title: "No HSTS Header",
        description: "\
The HTTPS response did not carry a Strict-Transport-Security header.

The header is read from the first response only; redirects are not followed.
A redirect response must carry the header itself.",
        remediation: "\
Send the header on every HTTPS response from the domain, including redirects.",
        examples: ExamplePair {
            before: "(no Strict-Transport-Security header)",
            after: "Strict-Transport-Security: max-age=31536000; includeSubDomains; preload",
        },
    }
}

fn explain_multiple_headers() -> Explanation {
    Explanation {
        title: "Multiple HSTS Headers",
        description: "\
The response carried more than one Strict-Transport-Security header.

Browsers only honor the first one, so the effective policy is ambiguous. No
directives are checked until exactly one header is sent.",
        remediation: "\
Remove duplicate header configuration (e.g. both the application and a proxy
adding the header) so exactly one value is sent.",
        examples: ExamplePair {
            before: "\
Strict-Transport-Security: max-age=10
Strict-Transport-Security: max-age=31536000; includeSubDomains; preload",
            after: "Strict-Transport-Security: max-age=31536000; includeSubDomains; preload",
        },
    }
}

fn explain_empty_header() -> Explanation {
    Explanation {
        title: "Empty HSTS Header",
        description: "\
The Strict-Transport-Security header is present but its value is empty.

This is reported as a warning; every required directive is then reported missing.",
        remediation: "Fill in the header value with the required directives.",
        examples: ExamplePair {
            before: "Strict-Transport-Security: ",
            after: "Strict-Transport-Security: max-age=31536000; includeSubDomains; preload",
        },
    }
}

// --- Preload eligibility ---

fn explain_preload_missing() -> Explanation {
    Explanation {
        title: "No preload Directive",
        description: "\
Domains must opt in to preloading by sending the `preload` directive.",
        remediation: "Append `preload` to the header value.",
        examples: ExamplePair {
            before: "max-age=31536000; includeSubDomains",
            after: "max-age=31536000; includeSubDomains; preload",
        },
    }
}

fn explain_include_sub_domains_missing() -> Explanation {
    Explanation {
        title: "No includeSubDomains Directive",
        description: "\
Preloaded entries apply to every subdomain, so the header must already
cover them with `includeSubDomains`.",
        remediation: "\
Make sure every subdomain serves HTTPS, then append `includeSubDomains`.",
        examples: ExamplePair {
            before: "max-age=31536000; preload",
            after: "max-age=31536000; includeSubDomains; preload",
        },
    }
}

fn explain_max_age_missing() -> Explanation {
    Explanation {
        title: "No max-age Directive",
        description: "\
The header has no `max-age` directive, so browsers have no duration to enforce.",
        remediation: "Add `max-age=<seconds>` meeting the policy floor.",
        examples: ExamplePair {
            before: "includeSubDomains; preload",
            after: "max-age=31536000; includeSubDomains; preload",
        },
    }
}

fn explain_max_age_parse() -> Explanation {
    Explanation {
        title: "Malformed max-age Directive",
        description: "\
The `max-age` directive is present but its value is not a plain non-negative
decimal integer (e.g. it is empty, signed, quoted, or too large).",
        remediation: "Write the value as unquoted decimal seconds.",
        examples: ExamplePair {
            before: "max-age=1y; includeSubDomains; preload",
            after: "max-age=31536000; includeSubDomains; preload",
        },
    }
}

fn explain_below_1_year() -> Explanation {
    Explanation {
        title: "max-age Below 1 Year",
        description: "\
Under the `bulk-1-year` policy the `max-age` must be at least 31536000 seconds.",
        remediation: "Raise `max-age` to 31536000 or more.",
        examples: ExamplePair {
            before: "max-age=10886400; includeSubDomains; preload",
            after: "max-age=31536000; includeSubDomains; preload",
        },
    }
}

fn explain_below_18_weeks() -> Explanation {
    Explanation {
        title: "max-age Below 18 Weeks",
        description: "\
Under the `bulk-18-weeks` policy the `max-age` must be at least 10886400 seconds.",
        remediation: "Raise `max-age` to 10886400 or more.",
        examples: ExamplePair {
            before: "max-age=86400; includeSubDomains; preload",
            after: "max-age=10886400; includeSubDomains; preload",
        },
    }
}

// --- Removal eligibility ---

fn explain_removable_contains_preload() -> Explanation {
    Explanation {
        title: "Removal Requested With preload",
        description: "\
A domain cannot be removed from the preload list while its header still asks
to be preloaded.",
        remediation: "Drop the `preload` directive before requesting removal.",
        examples: ExamplePair {
            before: "max-age=15768000; includeSubDomains; preload",
            after: "max-age=15768000; includeSubDomains",
        },
    }
}

fn explain_removable_missing_max_age() -> Explanation {
    Explanation {
        title: "Removal Requested Without max-age",
        description: "\
Removal still requires a valid `max-age` directive; any value is accepted.",
        remediation: "Keep a well-formed `max-age` directive in the header.",
        examples: ExamplePair {
            before: "includeSubDomains",
            after: "max-age=15768000; includeSubDomains",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_published_code_has_an_explanation() {
        for code in all_codes() {
            assert!(lookup_explanation(code).is_some(), "missing explanation for {code}");
        }
    }

    #[test]
    fn unknown_code_is_not_explained() {
        assert!(lookup_explanation("header.preloadable.unknown").is_none());
    }
}
