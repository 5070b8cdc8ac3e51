use serde::{Deserialize, Serialize};

/// Relative path inspected when no file argument is given.
pub const DEFAULT_WORKFLOW_PATH: &str = ".github/workflows/deploy.yml";

/// Placeholder printed when the workflow has no `name`.
pub const MISSING_NAME: &str = "N/A";

/// Placeholder printed for a step without a `name`.
pub const UNNAMED_STEP: &str = "Unnamed";

/// Diagnostic kind, in the order failures are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Syntax,
    NotFound,
    Other,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Report format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
