mod cli;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use cli::BlockerArgs;
use domain_filter::batch::{self, BatchError};

fn main() -> ExitCode {
    let args = BlockerArgs::from_env();

    if !args.quiet {
        // Diagnostics go to stderr, stdout carries only the verdict lines.
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    let result = run_batch(&args, &mut output)
        .and_then(|()| output.flush().map_err(BatchError::from));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Not routed through tracing so the reason survives --quiet.
            eprintln!("batch failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_batch(args: &BlockerArgs, output: &mut impl Write) -> Result<(), BatchError> {
    match &args.input {
        Some(path) => {
            let file = File::open(path)?;
            batch::run(&mut BufReader::new(file), output)
        }
        None => batch::run(&mut io::stdin().lock(), output),
    }
}
