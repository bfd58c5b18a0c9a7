//! Application configuration from CLI flags.

use clap::Parser;

use petribench_cli::OutputFormat;
use petribench_core::{BenchError, Variant, Workload};

/// PetriBench — deterministic memory and CPU load for profiling harnesses.
///
/// Run without arguments to produce the canonical benchmark output.
#[derive(Parser, Debug, Clone)]
#[command(name = "petribench", version, about)]
pub struct AppConfig {
    /// Dataset variant: records (canonical) or nested.
    #[arg(long, default_value = "records")]
    pub variant: String,

    /// Workload to run: memory or fizzbuzz.
    #[arg(long, default_value = "memory")]
    pub workload: String,

    /// Output format: text or json.
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default().to_string(),
            workload: "memory".into(),
            format: OutputFormat::default().to_string(),
        }
    }
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn variant(&self) -> Result<Variant, BenchError> {
        self.variant.parse()
    }

    pub fn workload(&self) -> Result<Workload, BenchError> {
        self.workload.parse()
    }

    pub fn format(&self) -> Result<OutputFormat, BenchError> {
        self.format.parse()
    }
}
