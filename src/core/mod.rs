pub mod document;
pub mod error;
pub mod report;
pub mod summary;
pub mod types;

pub use document::{decode_document, load_document};
pub use error::InspectError;
pub use report::{JobSummary, StepSummary, SummaryCollector, TextReport, WorkflowSummary};
pub use summary::{summarize, SummarySink};
pub use types::*;
