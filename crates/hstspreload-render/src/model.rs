#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableIssue {
    pub severity: RenderableSeverity,
    pub code: String,
    pub summary: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    /// Domain name, or `None` for an offline header check.
    pub domain: Option<String>,
    pub mode: String,
    pub policy: Option<String>,
    pub header: Option<String>,
    /// Errors first, then warnings.
    pub issues: Vec<RenderableIssue>,
}
