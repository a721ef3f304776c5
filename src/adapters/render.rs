use crate::core::calculator::format_clock;
use crate::domain::model::WakeTimeReport;
use crate::domain::ports::Renderer;
use crate::utils::error::{Result, SleepCalcError};
use serde::Serialize;
use std::fmt::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
    Csv,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["json", "text", "csv"];

    pub fn renderer(self, pretty: bool) -> Box<dyn Renderer> {
        match self {
            Self::Json => Box::new(JsonRenderer { pretty }),
            Self::Text => Box::new(TextRenderer),
            Self::Csv => Box::new(CsvRenderer),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = SleepCalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            other => Err(SleepCalcError::InvalidConfigValueError {
                field: "display.output_format".to_string(),
                value: other.to_string(),
                reason: format!("Supported formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// JSON array of `{ "time", "cycles", "hours" }`.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, report: &WakeTimeReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(&report.entries)?
        } else {
            serde_json::to_string(&report.entries)?
        };
        Ok(json)
    }
}

/// The result cards of the mobile app, as plain lines.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, report: &WakeTimeReport) -> Result<String> {
        let format = &report.settings.time_format;
        let mut out = String::new();

        // writing into a String cannot fail
        let _ = writeln!(
            out,
            "Bedtime {} (asleep by {})",
            format_clock(&report.bedtime, format),
            format_clock(&report.onset, format)
        );
        let _ = writeln!(out, "Recommended wake-up times:");

        let width = report
            .entries
            .iter()
            .map(|e| e.formatted_time.len())
            .max()
            .unwrap_or(0);

        for entry in &report.entries {
            let _ = writeln!(
                out,
                "  {:<width$}  {:>4} hours ({} cycles)",
                entry.formatted_time,
                entry.formatted_hours,
                entry.cycle_count,
                width = width
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Calculations include {} minutes to fall asleep.",
            report.settings.onset_minutes
        );
        let _ = write!(
            out,
            "Each sleep cycle is {} minutes.",
            report.settings.cycle_minutes
        );

        Ok(out)
    }
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    time: &'a str,
    cycles: u32,
    hours: &'a str,
    instant: String,
}

/// `time,cycles,hours,instant` with RFC 3339 instants.
#[derive(Debug, Clone, Default)]
pub struct CsvRenderer;

impl Renderer for CsvRenderer {
    fn render(&self, report: &WakeTimeReport) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        for entry in &report.entries {
            writer.serialize(CsvRow {
                time: &entry.formatted_time,
                cycles: entry.cycle_count,
                hours: &entry.formatted_hours,
                instant: entry.instant.to_rfc3339(),
            })?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| SleepCalcError::IoError(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| {
            SleepCalcError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::WakeTimeCalculator;
    use crate::domain::model::BedTime;
    use chrono::DateTime;

    fn report() -> WakeTimeReport {
        let bedtime = DateTime::parse_from_rfc3339("2026-10-19T22:00:00+02:00").unwrap();
        WakeTimeCalculator::default().report(&BedTime::Fixed(bedtime))
    }

    #[test]
    fn test_json_shape() {
        let json = JsonRenderer::default().render(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(
            items[0],
            serde_json::json!({ "time": "11:44 PM", "cycles": 1, "hours": "1.5" })
        );
        assert_eq!(items[5]["hours"], "9.0");
    }

    #[test]
    fn test_text_lists_cards_and_footnote() {
        let text = TextRenderer.render(&report()).unwrap();

        assert!(text.starts_with("Bedtime 10:00 PM (asleep by 10:14 PM)"));
        assert!(text.contains("Recommended wake-up times:"));
        assert!(text.contains("11:44 PM   1.5 hours (1 cycles)"));
        assert!(text.contains("7:14 AM    9.0 hours (6 cycles)"));
        assert!(text.ends_with(
            "Calculations include 14 minutes to fall asleep.\nEach sleep cycle is 90 minutes."
        ));
    }

    #[test]
    fn test_csv_has_header_and_instants() {
        let csv = CsvRenderer.render(&report()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "time,cycles,hours,instant");
        assert_eq!(lines[1], "11:44 PM,1,1.5,2026-10-19T23:44:00+02:00");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
