//! candela CLI library
//!
//! This module exposes the CLI components for testing and reuse.

pub mod args;
pub mod csv_input;
pub mod csv_output;
pub mod error;

pub use error::{CliError, Result};
