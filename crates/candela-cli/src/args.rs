//! CLI argument parsing module.
//!
//! This module defines the command-line interface for candela using clap.
//! The CLI follows the pattern: `candela <command> <input.csv> [params] [-o output]`
//!
//! # Examples
//!
//! ```bash
//! # Simple Moving Average with default period (20)
//! candela sma input.csv
//!
//! # SMA with custom period and file output
//! candela sma input.csv 10 -o output.csv
//!
//! # EMA over an explicit column
//! candela ema input.csv 20 -c "adj close"
//!
//! # RSI with default period (14)
//! candela rsi input.csv
//!
//! # ARMA(2, 1) in-sample fitted values
//! candela arma input.csv 2,1
//!
//! # Candlestick chart
//! candela chart input.csv -o chart.png --title "ACME Corp"
//! ```

use clap::{Parser, Subcommand};

use crate::error::{CliError, Result};

/// candela: technical analysis and candlestick charts over CSV files
#[derive(Parser, Debug)]
#[command(name = "candela")]
#[command(author, version, about = "Technical analysis indicators and candlestick charts")]
#[command(long_about = "candela computes moving averages, RSI, and ARMA model fits \
    over price series read from CSV files, and renders candlestick charts to PNG. \
    Indicator output is CSV on stdout or a file.")]
pub struct Args {
    /// The operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Simple Moving Average
    #[command(about = "Simple Moving Average (SMA)")]
    Sma {
        /// Input CSV file
        input: String,

        /// Period for the moving average
        #[arg(default_value = "20")]
        period: usize,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for close prices (auto-detected if not specified)
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Exponential Moving Average
    #[command(about = "Exponential Moving Average (EMA)")]
    Ema {
        /// Input CSV file
        input: String,

        /// Period for the moving average
        #[arg(default_value = "20")]
        period: usize,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for close prices
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Relative Strength Index
    #[command(about = "Relative Strength Index (RSI)")]
    Rsi {
        /// Input CSV file
        input: String,

        /// Period for RSI calculation
        #[arg(default_value = "14")]
        period: usize,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for close prices
        #[arg(short, long)]
        column: Option<String>,
    },

    /// ARMA model fit
    #[command(about = "ARMA(p, q) in-sample fitted values")]
    Arma {
        /// Input CSV file
        input: String,

        /// Model orders: ar_order,ma_order (e.g., 1,1)
        #[arg(default_value = "1,1")]
        orders: String,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for close prices
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Candlestick chart
    #[command(about = "Render a candlestick chart to PNG")]
    Chart {
        /// Input CSV file with date, open, high, low, close columns
        input: String,

        /// Output PNG file
        #[arg(short, long)]
        output: String,

        /// Chart title
        #[arg(long, default_value = "Candlestick Chart")]
        title: String,

        /// Horizontal axis label
        #[arg(long, default_value = "Date")]
        x_label: String,

        /// Vertical axis label
        #[arg(long, default_value = "Price")]
        y_label: String,

        /// strftime pattern for date tick labels
        #[arg(long, default_value = "%Y-%m-%d")]
        date_format: String,
    },
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Get the input file path from the command.
    pub fn input_path(&self) -> &str {
        match &self.command {
            Command::Sma { input, .. } => input,
            Command::Ema { input, .. } => input,
            Command::Rsi { input, .. } => input,
            Command::Arma { input, .. } => input,
            Command::Chart { input, .. } => input,
        }
    }

    /// Get the output file path from the command, if specified.
    pub fn output_path(&self) -> Option<&str> {
        match &self.command {
            Command::Sma { output, .. } => output.as_deref(),
            Command::Ema { output, .. } => output.as_deref(),
            Command::Rsi { output, .. } => output.as_deref(),
            Command::Arma { output, .. } => output.as_deref(),
            Command::Chart { output, .. } => Some(output),
        }
    }
}

/// Parse ARMA orders from string "ar_order,ma_order".
///
/// Only the shape is validated here; zero orders are passed through and
/// rejected by the library so the error lands in the computation class.
pub fn parse_order_pair(orders: &str) -> Result<(usize, usize)> {
    let parts: Vec<&str> = orders.split(',').collect();
    if parts.len() != 2 {
        return Err(CliError::InvalidArgument {
            argument: "orders".to_string(),
            reason: format!("ARMA requires 2 orders, got {}", parts.len()),
            suggestion: Some("Use format: ar_order,ma_order (e.g., 1,1)".to_string()),
        });
    }

    let ar = parts[0].trim().parse::<usize>().map_err(|_| CliError::InvalidArgument {
        argument: "ar_order".to_string(),
        reason: format!("cannot parse '{}' as integer", parts[0]),
        suggestion: Some("Use a positive integer like 1".to_string()),
    })?;

    let ma = parts[1].trim().parse::<usize>().map_err(|_| CliError::InvalidArgument {
        argument: "ma_order".to_string(),
        reason: format!("cannot parse '{}' as integer", parts[1]),
        suggestion: Some("Use a positive integer like 1".to_string()),
    })?;

    Ok((ar, ma))
}
