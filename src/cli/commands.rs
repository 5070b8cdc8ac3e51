use crate::cli::args::InspectArgs;
use crate::core::document::load_document;
use crate::core::error::InspectError;
use crate::core::report::{SummaryCollector, TextReport};
use crate::core::summary::summarize;
use crate::core::types::OutputFormat;
use anyhow::Context;
use std::io::{self, Write};
use tracing::{debug, info};

/// Inspect the workflow named by `args`, printing to stdout. Returns the exit code.
pub fn inspect(args: InspectArgs) -> u8 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match inspect_to(&args, &mut out) {
        Ok(()) => 0,
        Err(err) => {
            info!(kind = %err.kind(), "workflow inspection failed: {}", err);
            // stdout may be the thing that failed; the exit code still reports it
            let _ = writeln!(out, "{}", err.diagnostic());
            let _ = out.flush();
            err.exit_code()
        }
    }
}

/// Inspect the workflow named by `args`, writing the report to `out`.
///
/// Text output is streamed, so lines written before a failure stay in `out`.
pub fn inspect_to<W: Write>(args: &InspectArgs, out: &mut W) -> Result<(), InspectError> {
    let path = args.resolved_workflow_path();
    debug!(path = %path.display(), format = ?args.format, "inspecting workflow");

    let document = load_document(&path)?;
    debug!("workflow decoded");

    match args.format {
        OutputFormat::Text => {
            let mut report = TextReport::new(&mut *out);
            summarize(&document, &mut report)?;
        }
        OutputFormat::Json => {
            let mut collector = SummaryCollector::new();
            summarize(&document, &mut collector)?;
            let summary = collector.finish();
            let json = serde_json::to_string_pretty(&summary)
                .context("failed to encode workflow summary as JSON")?;
            writeln!(out, "{}", json)?;
        }
    }

    out.flush()?;
    Ok(())
}
