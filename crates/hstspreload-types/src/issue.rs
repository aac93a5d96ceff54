use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single coded finding.
///
/// `code` is the identity of an issue. `summary` and `message` are for humans and may be
/// reworded without breaking consumers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    pub code: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub message: String,
}

impl Issue {
    pub fn new(code: &str, summary: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            summary: summary.to_string(),
            message: message.into(),
        }
    }
}

/// Errors and warnings accumulated by one evaluation.
///
/// Errors mean non-compliance. Warnings are advisory and never affect pass/fail.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Issues {
    #[serde(default)]
    pub errors: Vec<Issue>,
    #[serde(default)]
    pub warnings: Vec<Issue>,
}

/// Outcome derived from an `Issues` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

impl Issues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(
        &mut self,
        code: &str,
        summary: &str,
        message: impl Into<String>,
    ) -> &mut Self {
        self.errors.push(Issue::new(code, summary, message));
        self
    }

    pub fn add_warning(
        &mut self,
        code: &str,
        summary: &str,
        message: impl Into<String>,
    ) -> &mut Self {
        self.warnings.push(Issue::new(code, summary, message));
        self
    }

    /// Concatenate `a` and `b`: `a`'s errors first, then `b`'s; warnings likewise.
    pub fn combine(a: Issues, b: Issues) -> Issues {
        let mut out = a;
        out.extend(b);
        out
    }

    /// In-place form of [`Issues::combine`].
    pub fn extend(&mut self, other: Issues) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn verdict(&self) -> Verdict {
        if self.has_errors() {
            Verdict::Fail
        } else if !self.warnings.is_empty() {
            Verdict::Warn
        } else {
            Verdict::Pass
        }
    }

    /// Code-level equality: same error codes and same warning codes, counted with
    /// multiplicity, ignoring order and all human-readable text.
    pub fn matches(&self, expected: &Issues) -> bool {
        code_counts(&self.errors) == code_counts(&expected.errors)
            && code_counts(&self.warnings) == code_counts(&expected.warnings)
    }

    pub fn error_codes(&self) -> Vec<&str> {
        self.errors.iter().map(|i| i.code.as_str()).collect()
    }

    pub fn warning_codes(&self) -> Vec<&str> {
        self.warnings.iter().map(|i| i.code.as_str()).collect()
    }
}

fn code_counts(issues: &[Issue]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for issue in issues {
        *counts.entry(issue.code.as_str()).or_insert(0) += 1;
    }
    counts
}
