//! Report output for readings

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{RegCodecError, Result};
use crate::reading::Reading;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Summary line plus `label: value`
    #[default]
    Text,
    /// Pretty JSON array
    Json,
    /// CSV with header
    Csv,
}

impl std::str::FromStr for ReportFormat {
    type Err = RegCodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(RegCodecError::config(format!(
                "Unknown report format '{}', expected text, json or csv",
                other
            ))),
        }
    }
}

/// Report settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// Decimal places for text and CSV values
    pub precision: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            precision: 2,
        }
    }
}

/// Write readings to `out`
pub fn write_report<W: Write>(out: &mut W, readings: &[Reading], options: ReportOptions) -> Result<()> {
    match options.format {
        ReportFormat::Text => write_text(out, readings, options.precision),
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, readings)?;
            writeln!(out)?;
            Ok(())
        },
        ReportFormat::Csv => write_csv(out, readings, options.precision),
    }
}

fn write_text<W: Write>(out: &mut W, readings: &[Reading], precision: usize) -> Result<()> {
    writeln!(out, "Successfully parsed {} modbus readings", readings.len())?;

    for reading in readings {
        match reading.value {
            Some(value) => writeln!(out, "{}: {:.*}", reading.label(), precision, value)?,
            None => writeln!(
                out,
                "{}: LSR={} MSR={}",
                reading.label(),
                reading.pair.low,
                reading.pair.high
            )?,
        }
    }
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, readings: &[Reading], precision: usize) -> Result<()> {
    let decoded = readings.iter().any(Reading::is_decoded);
    let mut writer = csv::Writer::from_writer(out);

    let write_err = |source: csv::Error| RegCodecError::Io(source.into());

    if decoded {
        writer
            .write_record(["register_pair", "LSR", "MSR", "value"])
            .map_err(write_err)?;
    } else {
        writer
            .write_record(["register_pair", "LSR", "MSR"])
            .map_err(write_err)?;
    }

    for reading in readings {
        let mut record = vec![
            reading.label().to_string(),
            reading.pair.low.to_string(),
            reading.pair.high.to_string(),
        ];
        if decoded {
            record.push(
                reading
                    .value
                    .map(|v| format!("{:.*}", precision, v))
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&record).map_err(write_err)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::reading::RegisterPair;

    fn render(readings: &[Reading], options: ReportOptions) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, readings, options).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn decoded() -> Vec<Reading> {
        vec![
            Reading::decoded(RegisterPair::new("40001-40002", 0, 17530), 1000.0),
            Reading::decoded(RegisterPair::new("40003-40004", -1, -1), f32::from_bits(0xFFFF_FFFF)),
        ]
    }

    #[test]
    fn test_text_report() {
        let out = render(&decoded(), ReportOptions::default());
        assert_eq!(
            out,
            "Successfully parsed 2 modbus readings\n40001-40002: 1000.00\n40003-40004: NaN\n"
        );
    }

    #[test]
    fn test_text_report_precision() {
        let options = ReportOptions {
            precision: 4,
            ..Default::default()
        };
        let readings = [Reading::decoded(RegisterPair::new("p", 0, 0x3FA0), 1.25)];
        assert!(render(&readings, options).ends_with("p: 1.2500\n"));
    }

    #[test]
    fn test_text_report_raw() {
        let readings = [Reading::raw(RegisterPair::new("40001-40002", 0, 17530))];
        let out = render(&readings, ReportOptions::default());
        assert!(out.contains("40001-40002: LSR=0 MSR=17530"));
    }

    #[test]
    fn test_text_report_empty() {
        assert_eq!(
            render(&[], ReportOptions::default()),
            "Successfully parsed 0 modbus readings\n"
        );
    }

    #[test]
    fn test_json_report() {
        let options = ReportOptions {
            format: ReportFormat::Json,
            ..Default::default()
        };
        let out = render(&decoded(), options);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json[0]["register_pair"], "40001-40002");
        assert_eq!(json[0]["value"], 1000.0);
        assert!(json[1]["value"].is_null());
    }

    #[test]
    fn test_csv_report() {
        let options = ReportOptions {
            format: ReportFormat::Csv,
            ..Default::default()
        };
        let out = render(&decoded(), options);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "register_pair,LSR,MSR,value",
                "40001-40002,0,17530,1000.00",
                "40003-40004,-1,-1,NaN"
            ]
        );
    }

    #[test]
    fn test_csv_report_raw_has_no_value_column() {
        let options = ReportOptions {
            format: ReportFormat::Csv,
            ..Default::default()
        };
        let readings = [Reading::raw(RegisterPair::new("p", 1, 2))];
        assert_eq!(render(&readings, options), "register_pair,LSR,MSR\np,1,2\n");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("txt".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert!("xml".parse::<ReportFormat>().is_err());
    }
}
