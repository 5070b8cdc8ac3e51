use serde::Deserialize;
use std::fmt;
use std::io;
use std::str::FromStr;
use tracing::Subscriber;
use tracing_subscriber::fmt::{self as tracing_fmt, format, writer::BoxMakeWriter};
use tracing_subscriber::registry::LookupSpan;

/// Console sink layer. Timestamps are dropped; a run lasts milliseconds.
pub type ConsoleFmtLayer<S> =
    tracing_fmt::Layer<S, format::DefaultFields, format::Format<format::Full, ()>, BoxMakeWriter>;

/// Stream that receives console logs. The report owns stdout, hence the stderr default.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleOutput {
    Stdout,
    #[default]
    Stderr,
    None,
}

impl ConsoleOutput {
    const ALL: [ConsoleOutput; 3] = [ConsoleOutput::Stdout, ConsoleOutput::Stderr, ConsoleOutput::None];

    /// Spelling used in `logging.toml` and the environment override.
    pub fn as_str(self) -> &'static str {
        match self {
            ConsoleOutput::Stdout => "stdout",
            ConsoleOutput::Stderr => "stderr",
            ConsoleOutput::None => "none",
        }
    }
}

impl fmt::Display for ConsoleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsoleOutput {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|output| output.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|output| output.as_str()).collect();
                format!(
                    "invalid console output '{}'; supported values are {}",
                    value,
                    names.join(", ")
                )
            })
    }
}

pub fn console_layer<S>(output: ConsoleOutput) -> ConsoleFmtLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let make_writer = match output {
        ConsoleOutput::Stdout => BoxMakeWriter::new(io::stdout),
        ConsoleOutput::Stderr => BoxMakeWriter::new(io::stderr),
        ConsoleOutput::None => BoxMakeWriter::new(io::sink),
    };

    tracing_fmt::layer()
        .with_writer(make_writer)
        .without_time()
        .with_ansi(false)
        .with_target(false)
}
