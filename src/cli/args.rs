use crate::core::types::{OutputFormat, DEFAULT_WORKFLOW_PATH};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct InspectArgs {
    /// Workflow file to inspect (default: .github/workflows/deploy.yml)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help_heading = "Output Options")]
    pub format: OutputFormat,

    /// Log at debug level on the console sink
    #[arg(long, help_heading = "Output Options")]
    pub verbose: bool,
}

impl InspectArgs {
    /// Explicit file argument, falling back to the deploy workflow path.
    pub fn resolved_workflow_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKFLOW_PATH))
    }
}
