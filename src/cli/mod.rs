pub mod args;
pub mod commands;

pub use args::InspectArgs;
use clap::Parser;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nARGS:\n{positionals}\n\
\nOPTIONS:\n{options}\n\
{after-help}\n";

#[derive(Parser, Debug)]
#[command(name = "workflow-inspect")]
#[command(version = crate::VERSION)]
#[command(about = "Check a CI workflow file and summarize its triggers, jobs, and steps")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Run from the repository root with no arguments to inspect .github/workflows/deploy.yml.\nExit status is 0 on success and 1 on any failure."
)]
pub struct Args {
    #[command(flatten)]
    pub inspect: InspectArgs,
}

/// Run the inspector and return the process exit code.
pub fn run(args: Args) -> u8 {
    commands::inspect(args.inspect)
}
