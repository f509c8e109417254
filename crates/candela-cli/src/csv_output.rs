//! CSV output module for writing indicator results.
//!
//! Indicator outputs are compact: the library returns one value per fully
//! formed window, with no leading padding. When the input had a date
//! column, each output value is paired with the date of the observation
//! that completed its window, so the writer carries each indicator's own
//! output offset (SMA `period - 1`, EMA 0, RSI `period`, ARMA 0).

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::error::{CliError, Result};

/// Output destination: either stdout or a file.
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// Build a destination from an optional `-o` path.
    pub fn from_arg(output: Option<&str>) -> Self {
        match output {
            Some(path) => OutputDest::File(path.to_string()),
            None => OutputDest::Stdout,
        }
    }

    /// Create a writer for this output destination.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputDest::Stdout => Ok(Box::new(io::stdout())),
            OutputDest::File(path) => {
                let file = File::create(path).map_err(|e| CliError::IoError {
                    source: e,
                    path: Some(path.clone()),
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// Write a single-column indicator output to CSV.
///
/// # Arguments
///
/// * `values` - The indicator output values (compact, no padding)
/// * `header` - Column header name (e.g., "sma_20")
/// * `dates` - Optional input date column
/// * `offset` - Input index of the first output value
/// * `dest` - Output destination (stdout or file)
///
/// With dates present, row `i` of the output is paired with
/// `dates[offset + i]`; rows before the offset are not written at all.
pub fn write_series(
    values: &[f64],
    header: &str,
    dates: Option<&[String]>,
    offset: usize,
    dest: &OutputDest,
) -> Result<()> {
    let mut writer = dest.writer()?;

    if dates.is_some() {
        writeln!(writer, "date,{header}")?;
    } else {
        writeln!(writer, "{header}")?;
    }

    for (i, value) in values.iter().enumerate() {
        if let Some(dates) = dates {
            match dates.get(offset + i) {
                Some(date) => write!(writer, "{date},")?,
                None => write!(writer, ",")?,
            }
        }
        writeln!(writer, "{value}")?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_to_temp(
        name: &str,
        values: &[f64],
        header: &str,
        dates: Option<&[String]>,
        offset: usize,
    ) -> Vec<String> {
        let temp_path = std::env::temp_dir().join(name);
        let dest = OutputDest::File(temp_path.display().to_string());

        write_series(values, header, dates, offset, &dest).unwrap();

        let content = std::fs::read_to_string(&temp_path).unwrap();
        std::fs::remove_file(&temp_path).ok();
        content.lines().map(String::from).collect()
    }

    // ==========================================================================
    // Single Column Tests
    // ==========================================================================

    #[test]
    fn test_write_without_dates() {
        let lines = write_to_temp(
            "candela_out_plain.csv",
            &[44.0, 44.5, 44.0],
            "sma_3",
            None,
            2,
        );

        assert_eq!(lines, vec!["sma_3", "44", "44.5", "44"]);
    }

    #[test]
    fn test_write_with_dates_applies_offset() {
        let dates: Vec<String> = (1..=5)
            .map(|d| format!("2024-01-0{d}"))
            .collect();
        let lines = write_to_temp(
            "candela_out_dated.csv",
            &[44.0, 44.5, 45.0],
            "sma_3",
            Some(&dates),
            2,
        );

        assert_eq!(lines[0], "date,sma_3");
        assert_eq!(lines[1], "2024-01-03,44");
        assert_eq!(lines[2], "2024-01-04,44.5");
        assert_eq!(lines[3], "2024-01-05,45");
    }

    #[test]
    fn test_write_zero_offset_keeps_all_dates() {
        let dates = vec!["2024-01-01".to_string(), "2024-01-02".to_string()];
        let lines = write_to_temp(
            "candela_out_zero_offset.csv",
            &[1.0, 1.5],
            "ema_3",
            Some(&dates),
            0,
        );

        assert_eq!(lines[1], "2024-01-01,1");
        assert_eq!(lines[2], "2024-01-02,1.5");
    }

    #[test]
    fn test_write_empty_output_is_header_only() {
        let lines = write_to_temp("candela_out_empty.csv", &[], "sma_30", None, 29);

        assert_eq!(lines, vec!["sma_30"]);
    }

    #[test]
    fn test_write_out_of_range_date_is_empty_cell() {
        let dates = vec!["2024-01-01".to_string()];
        let lines = write_to_temp(
            "candela_out_short_dates.csv",
            &[1.0, 2.0],
            "x",
            Some(&dates),
            0,
        );

        assert_eq!(lines[1], "2024-01-01,1");
        assert_eq!(lines[2], ",2");
    }

    #[test]
    fn test_full_precision_output() {
        let lines = write_to_temp(
            "candela_out_precision.csv",
            &[44.123456789012345],
            "precise",
            None,
            0,
        );

        assert!(lines[1].contains("44.123456789012"));
    }

    // ==========================================================================
    // Destination Tests
    // ==========================================================================

    #[test]
    fn test_output_dest_from_arg() {
        assert!(matches!(OutputDest::from_arg(None), OutputDest::Stdout));
        assert!(matches!(
            OutputDest::from_arg(Some("out.csv")),
            OutputDest::File(_)
        ));
    }

    #[test]
    fn test_output_dest_file_creation() {
        let temp_path = std::env::temp_dir().join("candela_dest_file.csv");

        let dest = OutputDest::File(temp_path.display().to_string());
        assert!(dest.writer().is_ok());

        std::fs::remove_file(&temp_path).ok();
    }

    #[test]
    fn test_output_dest_unwritable_path() {
        let dest = OutputDest::File("/nonexistent/dir/out.csv".to_string());
        let result = dest.writer();

        assert!(result.is_err());
        if let Err(CliError::IoError { path, .. }) = result {
            assert!(path.unwrap().contains("nonexistent"));
        } else {
            panic!("Expected IoError");
        }
    }
}
