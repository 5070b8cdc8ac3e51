use crate::core::summary::SummarySink;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Streams the fixed-format text report to a writer, one line per event.
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SummarySink for TextReport<W> {
    fn parsed(&mut self) -> io::Result<()> {
        writeln!(self.out, "✓ YAML 语法检查通过")?;
        writeln!(self.out)?;
        writeln!(self.out, "工作流信息:")
    }

    fn workflow_name(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "  - 名称: {}", name)
    }

    fn triggers(&mut self, triggers: &[String]) -> io::Result<()> {
        writeln!(self.out, "  - 触发事件: {}", format_list(triggers))
    }

    fn job_count(&mut self, count: usize) -> io::Result<()> {
        writeln!(self.out, "  - 作业数: {}", count)
    }

    fn job(&mut self, name: &str, step_count: usize) -> io::Result<()> {
        writeln!(self.out, "    - '{}': {} steps", name, step_count)
    }

    fn step(&mut self, index: usize, name: &str) -> io::Result<()> {
        writeln!(self.out, "      [{}] {}", index, name)
    }
}

/// Serializable form of the report, emitted by `--format json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSummary {
    pub name: String,
    pub triggers: Vec<String>,
    pub job_count: usize,
    pub jobs: Vec<JobSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub name: String,
    pub step_count: usize,
    pub steps: Vec<StepSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSummary {
    pub index: usize,
    pub name: String,
}

/// Collects summary events into a [`WorkflowSummary`].
#[derive(Debug, Default)]
pub struct SummaryCollector {
    summary: WorkflowSummary,
}

impl SummaryCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> WorkflowSummary {
        self.summary
    }
}

impl SummarySink for SummaryCollector {
    fn parsed(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn workflow_name(&mut self, name: &str) -> io::Result<()> {
        self.summary.name = name.to_string();
        Ok(())
    }

    fn triggers(&mut self, triggers: &[String]) -> io::Result<()> {
        self.summary.triggers = triggers.to_vec();
        Ok(())
    }

    fn job_count(&mut self, count: usize) -> io::Result<()> {
        self.summary.job_count = count;
        Ok(())
    }

    fn job(&mut self, name: &str, step_count: usize) -> io::Result<()> {
        self.summary.jobs.push(JobSummary {
            name: name.to_string(),
            step_count,
            steps: Vec::with_capacity(step_count),
        });
        Ok(())
    }

    fn step(&mut self, index: usize, name: &str) -> io::Result<()> {
        let job = self.summary.jobs.last_mut().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "step reported before any job")
        })?;
        job.steps.push(StepSummary {
            index,
            name: name.to_string(),
        });
        Ok(())
    }
}

/// Format names as a bracketed list of quoted strings: `['push', 'pull_request']`.
pub fn format_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| quote(item)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Single quotes unless the text holds a `'` and no `"`.
fn quote(text: &str) -> String {
    let delimiter = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push(delimiter);
    for ch in text.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            other if other == delimiter => {
                quoted.push('\\');
                quoted.push(other);
            }
            other => quoted.push(other),
        }
    }
    quoted.push(delimiter);
    quoted
}
