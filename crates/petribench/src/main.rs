//! PetriBench — deterministic memory and CPU load for profiling harnesses.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use petribench_lib::{app, config, errors};

fn main() -> ExitCode {
    // Logs go to stderr; stdout is parsed by harnesses.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(u8::try_from(errors::exit_code(&err)).unwrap_or(1))
        }
    }
}
