use crate::core::error::InspectError;
use crate::core::types::{MISSING_NAME, UNNAMED_STEP};
use serde_yaml::{Mapping, Value};
use std::io;
use tracing::debug;

/// Receives summary events in report order.
///
/// Events arrive as soon as the walk reaches them, so a sink that writes
/// immediately keeps everything emitted before a structural error.
pub trait SummarySink {
    /// The document decoded successfully.
    fn parsed(&mut self) -> io::Result<()>;
    fn workflow_name(&mut self, name: &str) -> io::Result<()>;
    fn triggers(&mut self, triggers: &[String]) -> io::Result<()>;
    fn job_count(&mut self, count: usize) -> io::Result<()>;
    fn job(&mut self, name: &str, step_count: usize) -> io::Result<()>;
    /// `index` is 1-based.
    fn step(&mut self, index: usize, name: &str) -> io::Result<()>;
}

/// Walk a decoded workflow and feed its structure to `sink`.
pub fn summarize(document: &Value, sink: &mut dyn SummarySink) -> Result<(), InspectError> {
    sink.parsed()?;

    let root = document.as_mapping().ok_or_else(|| {
        InspectError::structure(format!(
            "workflow root must be a mapping, found {}",
            describe(document)
        ))
    })?;

    let name = lookup(root, "name")
        .map(render_scalar)
        .unwrap_or_else(|| MISSING_NAME.to_string());
    sink.workflow_name(&name)?;

    sink.triggers(&trigger_names(root))?;

    let jobs_value = lookup(root, "jobs");
    let job_count = match jobs_value {
        None => 0,
        Some(value) => entry_count(value).ok_or_else(|| {
            InspectError::structure(format!(
                "'jobs' must be a mapping, found {}",
                describe(value)
            ))
        })?,
    };
    sink.job_count(job_count)?;

    let jobs = match jobs_value {
        Some(Value::Mapping(jobs)) => Some(jobs),
        Some(other) if job_count > 0 => {
            return Err(InspectError::structure(format!(
                "'jobs' must be a mapping, found {}",
                describe(other)
            )))
        }
        _ => None,
    };

    for (job_key, job) in jobs.into_iter().flatten() {
        let job_name = render_scalar(job_key);
        summarize_job(&job_name, job, sink)?;
    }

    Ok(())
}

fn summarize_job(
    job_name: &str,
    job: &Value,
    sink: &mut dyn SummarySink,
) -> Result<(), InspectError> {
    let job = untag(job).as_mapping().ok_or_else(|| {
        InspectError::structure(format!(
            "job '{}' must be a mapping, found {}",
            job_name,
            describe(job)
        ))
    })?;

    let steps_value = lookup(job, "steps");
    let step_count = match steps_value {
        None => 0,
        Some(value) => entry_count(value).ok_or_else(|| {
            InspectError::structure(format!(
                "'steps' of job '{}' must be a sequence, found {}",
                job_name,
                describe(value)
            ))
        })?,
    };
    debug!(job = %job_name, steps = step_count, "summarizing job");
    sink.job(job_name, step_count)?;

    let steps: &[Value] = match steps_value {
        Some(Value::Sequence(steps)) => steps.as_slice(),
        Some(other) if step_count > 0 => {
            return Err(InspectError::structure(format!(
                "'steps' of job '{}' must be a sequence, found {}",
                job_name,
                describe(other)
            )))
        }
        _ => &[],
    };

    for (position, step) in steps.iter().enumerate() {
        let index = position + 1;
        let step = untag(step).as_mapping().ok_or_else(|| {
            InspectError::structure(format!(
                "step {} of job '{}' must be a mapping, found {}",
                index,
                job_name,
                describe(step)
            ))
        })?;
        let step_name = lookup(step, "name")
            .map(render_scalar)
            .unwrap_or_else(|| UNNAMED_STEP.to_string());
        sink.step(index, &step_name)?;
    }

    Ok(())
}

/// Keys of the `on` mapping in declaration order; empty when `on` is absent or not a mapping.
pub fn trigger_names(root: &Mapping) -> Vec<String> {
    match lookup(root, "on") {
        Some(Value::Mapping(triggers)) => triggers.keys().map(render_scalar).collect(),
        _ => Vec::new(),
    }
}

/// Number of entries a value holds, counting characters for strings.
///
/// Null and other scalars have no entry count. The count line is printed
/// before the entries are walked, so a non-empty value of the wrong shape
/// still reports its size before failing.
fn entry_count(value: &Value) -> Option<usize> {
    match untag(value) {
        Value::Mapping(mapping) => Some(mapping.len()),
        Value::Sequence(items) => Some(items.len()),
        Value::String(text) => Some(text.chars().count()),
        _ => None,
    }
}

/// Look up `key`. A key present with a null value is returned as `Value::Null`.
fn lookup<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Value> {
    mapping.get(key).map(untag)
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

/// Render a value for display.
///
/// Null and booleans use the `None`/`True`/`False` spelling of the original
/// report, numbers and strings print as-is, collections as compact JSON.
pub fn render_scalar(value: &Value) -> String {
    match untag(value) {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| format!("{:?}", other)),
    }
}

fn describe(value: &Value) -> &'static str {
    match untag(value) {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
