//! CSV input module for reading price data.
//!
//! This module parses CSV files containing price data for indicator
//! computation and charting. Columns are detected from the header row by
//! name (case-insensitive):
//!
//! - `close`, `price`, `adj close`, `adjusted close` → close prices
//! - `open`, `high`, `low` → the remaining OHLC columns
//! - `date`, `time`, `datetime`, `timestamp`, `dt` → the date column
//!
//! Date values are kept as strings for output alignment; the `chart`
//! command additionally parses them as calendar dates, accepting
//! `%Y-%m-%d`, `%m/%d/%Y`, and `%Y/%m/%d`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use candela_chart::OhlcRow;
use chrono::NaiveDate;
use csv::ReaderBuilder;

use crate::error::{CliError, Result};

/// Date patterns accepted by [`parse_date`], tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Parsed CSV price data with column mapping.
#[derive(Debug, Clone)]
pub struct PriceTable {
    /// Column headers from the CSV.
    pub headers: Vec<String>,
    /// Mapping of normalized column name to column index.
    column_map: HashMap<String, usize>,
    /// Date column values (if found), kept verbatim.
    pub dates: Option<Vec<String>>,
    /// All numeric data columns by index.
    columns: HashMap<usize, Vec<f64>>,
    /// Number of rows parsed.
    pub row_count: usize,
}

impl PriceTable {
    /// Get a column by normalized name (e.g., "close", "high").
    pub fn get_column(&self, name: &str) -> Option<&Vec<f64>> {
        self.column_map
            .get(&normalize_header(name))
            .and_then(|idx| self.columns.get(idx))
    }

    /// Get close prices, honoring an explicit column override.
    ///
    /// Without an override, tries `close`, `price`, `adj close`, and
    /// `adjusted close` in turn.
    pub fn close_prices(&self, column: Option<&str>) -> Result<&Vec<f64>> {
        if let Some(name) = column {
            return self.get_column(name).ok_or_else(|| CliError::InvalidArgument {
                argument: "column".to_string(),
                reason: format!("column '{name}' not found in input"),
                suggestion: Some(format!("Available columns: {}", self.headers.join(", "))),
            });
        }

        self.get_column("close")
            .or_else(|| self.get_column("price"))
            .or_else(|| self.get_column("adj close"))
            .or_else(|| self.get_column("adjusted close"))
            .ok_or_else(|| CliError::CsvParseError {
                message: "no close price column found (expected 'close', 'price', or 'adj close')"
                    .to_string(),
                line: None,
            })
    }

    /// Build candlestick rows from the date, open, high, low, and close
    /// columns.
    ///
    /// # Errors
    ///
    /// Fails with `CsvParseError` if any of the five columns is missing or
    /// a date does not match an accepted pattern.
    pub fn ohlc_rows(&self) -> Result<Vec<OhlcRow>> {
        let dates = self.dates.as_ref().ok_or_else(|| CliError::CsvParseError {
            message: "no date column found (expected 'date', 'time', or similar)".to_string(),
            line: None,
        })?;

        let open = self.require_column("open")?;
        let high = self.require_column("high")?;
        let low = self.require_column("low")?;
        let close = self.close_prices(None)?;

        let mut rows = Vec::with_capacity(self.row_count);
        for i in 0..self.row_count {
            // +2 for the header row and 0-indexing
            let date = parse_date(&dates[i]).map_err(|e| match e {
                CliError::CsvParseError { message, .. } => CliError::CsvParseError {
                    message,
                    line: Some(i + 2),
                },
                other => other,
            })?;
            rows.push(OhlcRow {
                date,
                open: open[i],
                high: high[i],
                low: low[i],
                close: close[i],
            });
        }
        Ok(rows)
    }

    fn require_column(&self, name: &str) -> Result<&Vec<f64>> {
        self.get_column(name).ok_or_else(|| CliError::CsvParseError {
            message: format!("no '{name}' column found"),
            line: None,
        })
    }
}

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Check if a header represents a date column.
fn is_date_column(header: &str) -> bool {
    let normalized = normalize_header(header);
    matches!(
        normalized.as_str(),
        "date" | "time" | "datetime" | "timestamp" | "dt"
    )
}

/// Parse a date string, trying each accepted pattern in order.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    Err(CliError::CsvParseError {
        message: format!("cannot parse '{trimmed}' as a date (expected e.g. 2024-01-31)"),
        line: None,
    })
}

/// Parse a string value to f64.
fn parse_value(value: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CliError::CsvParseError {
            message: "empty value in numeric column".to_string(),
            line: None,
        });
    }
    trimmed.parse::<f64>().map_err(|_| CliError::CsvParseError {
        message: format!("cannot parse '{trimmed}' as number"),
        line: None,
    })
}

/// Parse a CSV file into a [`PriceTable`].
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be read, or
/// `CliError::CsvParseError` if the CSV is malformed.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<PriceTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::IoError {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    read_table_from(BufReader::new(file))
}

/// Parse CSV data from a reader.
///
/// This is useful for testing or parsing from non-file sources.
pub fn read_table_from<R: Read>(reader: R) -> Result<PriceTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(String::from)
        .collect();

    if headers.is_empty() {
        return Err(CliError::CsvParseError {
            message: "CSV file has no headers".to_string(),
            line: Some(1),
        });
    }

    let mut column_map = HashMap::new();
    let mut date_column_idx: Option<usize> = None;

    for (idx, header) in headers.iter().enumerate() {
        if is_date_column(header) {
            date_column_idx = Some(idx);
        } else {
            column_map.insert(normalize_header(header), idx);
        }
    }

    let mut columns: HashMap<usize, Vec<f64>> = HashMap::new();
    for &idx in column_map.values() {
        columns.insert(idx, Vec::new());
    }
    let mut dates: Vec<String> = Vec::new();

    let mut row_count = 0;
    for (line_idx, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(line_idx + 2), // +2 for header and 0-indexing
        })?;

        if let Some(date_idx) = date_column_idx {
            dates.push(record.get(date_idx).unwrap_or("").to_string());
        }

        for (&col_idx, values) in columns.iter_mut() {
            let value = record.get(col_idx).unwrap_or("");
            let parsed = parse_value(value).map_err(|e| {
                if let CliError::CsvParseError { message, .. } = e {
                    CliError::CsvParseError {
                        message,
                        line: Some(line_idx + 2),
                    }
                } else {
                    e
                }
            })?;
            values.push(parsed);
        }

        row_count += 1;
    }

    Ok(PriceTable {
        headers,
        column_map,
        dates: if dates.is_empty() { None } else { Some(dates) },
        columns,
        row_count,
    })
}
