//! PetriBench library — configuration and dispatch for the benchmark binary.

pub mod app;
pub mod config;
pub mod errors;
