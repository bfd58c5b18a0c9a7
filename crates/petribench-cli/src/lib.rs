//! # petribench-cli
//!
//! Console output for PetriBench: the fixed text lines that harnesses parse,
//! and a JSON rendering of the same report.

pub mod output;
pub mod presenter;

pub use output::OutputFormat;
pub use presenter::{presenter_for, JsonPresenter, ReportPresenter, TextPresenter};
