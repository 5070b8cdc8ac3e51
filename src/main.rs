use clap::Parser;
use std::process::ExitCode;
use workflow_inspect::cli::{self, Args};
use workflow_inspect::core::InspectError;
use workflow_inspect::logging;

fn main() -> ExitCode {
    let args = Args::parse();

    let _logging = match logging::init(&args.inspect) {
        Ok(guard) => guard,
        Err(err) => {
            let err = InspectError::from(err);
            println!("{}", err.diagnostic());
            return ExitCode::from(err.exit_code());
        }
    };

    ExitCode::from(cli::run(args))
}
