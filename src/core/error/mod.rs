use crate::core::types::ErrorKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way an inspection can fail.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("{0}")]
    Syntax(#[from] serde_yaml::Error),

    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Structure(String),

    #[error("failed to write report: {0}")]
    Output(#[source] io::Error),

    #[error("{0:#}")]
    Other(#[from] anyhow::Error),
}

impl InspectError {
    pub fn structure<T: Into<String>>(message: T) -> Self {
        InspectError::Structure(message.into())
    }

    /// Classify the failure. Syntax errors win over not-found, everything else is `Other`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            InspectError::Syntax(_) => ErrorKind::Syntax,
            InspectError::NotFound(_) => ErrorKind::NotFound,
            InspectError::Read { .. }
            | InspectError::Structure(_)
            | InspectError::Output(_)
            | InspectError::Other(_) => ErrorKind::Other,
        }
    }

    /// The failure report printed on stdout.
    pub fn diagnostic(&self) -> String {
        match self.kind() {
            ErrorKind::Syntax => format!("✗ YAML 语法错误:\n{}", self),
            ErrorKind::NotFound => "✗ 文件未找到".to_string(),
            ErrorKind::Other => format!("✗ 错误: {}", self),
        }
    }

    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl From<io::Error> for InspectError {
    fn from(e: io::Error) -> Self {
        InspectError::Output(e)
    }
}
