//! candela command-line interface
//!
//! Computes technical analysis indicators on CSV price data and renders
//! candlestick charts to PNG. Results go to stdout or a file; errors go
//! to stderr with a class-specific exit code (1 usage, 2 data, 3
//! computation).

use std::process;

use candela::{ema, rsi, sma};
use candela::arma::arma_fit;
use candela_chart::{render, ChartStyle, PngSurface};
use clap::Parser;

use candela_cli::args::{parse_order_pair, Args, Command};
use candela_cli::csv_input::read_table;
use candela_cli::csv_output::{write_series, OutputDest};
use candela_cli::Result;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version arrive here as non-error "failures"
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(err.exit_code());
    }
}

fn run(args: &Args) -> Result<()> {
    match &args.command {
        Command::Sma {
            input,
            period,
            output,
            column,
        } => {
            let table = read_table(input)?;
            let close = table.close_prices(column.as_deref())?;
            let values = sma(close, *period)?;
            write_series(
                &values,
                &format!("sma_{period}"),
                table.dates.as_deref(),
                period.saturating_sub(1),
                &OutputDest::from_arg(output.as_deref()),
            )
        }
        Command::Ema {
            input,
            period,
            output,
            column,
        } => {
            let table = read_table(input)?;
            let close = table.close_prices(column.as_deref())?;
            let values = ema(close, *period)?;
            write_series(
                &values,
                &format!("ema_{period}"),
                table.dates.as_deref(),
                0,
                &OutputDest::from_arg(output.as_deref()),
            )
        }
        Command::Rsi {
            input,
            period,
            output,
            column,
        } => {
            let table = read_table(input)?;
            let close = table.close_prices(column.as_deref())?;
            let values = rsi(close, *period)?;
            write_series(
                &values,
                &format!("rsi_{period}"),
                table.dates.as_deref(),
                *period,
                &OutputDest::from_arg(output.as_deref()),
            )
        }
        Command::Arma {
            input,
            orders,
            output,
            column,
        } => {
            let (ar, ma) = parse_order_pair(orders)?;
            let table = read_table(input)?;
            let close = table.close_prices(column.as_deref())?;
            let values = arma_fit(close, ar, ma)?;
            write_series(
                &values,
                &format!("arma_{ar}_{ma}"),
                table.dates.as_deref(),
                0,
                &OutputDest::from_arg(output.as_deref()),
            )
        }
        Command::Chart {
            input,
            output,
            title,
            x_label,
            y_label,
            date_format,
        } => {
            let table = read_table(input)?;
            let rows = table.ohlc_rows()?;
            let style = ChartStyle {
                title: title.clone(),
                x_label: x_label.clone(),
                y_label: y_label.clone(),
                date_format: date_format.clone(),
            };
            let mut surface = PngSurface::for_path(output);
            render(&mut surface, &rows, &style)?;
            Ok(())
        }
    }
}
