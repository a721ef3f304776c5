use crate::utils::error::{Result, SleepCalcError};
use chrono::format::{Item, StrftimeItems};
use chrono_tz::Tz;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SleepCalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SleepCalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects strftime patterns chrono cannot render.
pub fn validate_time_format(field_name: &str, format: &str) -> Result<()> {
    validate_non_empty_string(field_name, format)?;

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(SleepCalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: "Not a valid strftime pattern".to_string(),
        });
    }
    Ok(())
}

pub fn validate_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| SleepCalcError::InvalidTimezone {
            name: name.to_string(),
        })
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(SleepCalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Supported values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("calculator.cycle_count", 6, 1, 12).is_ok());
        assert!(validate_range("calculator.cycle_count", 0, 1, 12).is_err());
        assert!(validate_range("calculator.cycle_count", 13, 1, 12).is_err());
    }

    #[test]
    fn test_validate_time_format() {
        assert!(validate_time_format("display.time_format", "%-I:%M %p").is_ok());
        assert!(validate_time_format("display.time_format", "%H:%M").is_ok());
        assert!(validate_time_format("display.time_format", "%Q").is_err());
        assert!(validate_time_format("display.time_format", "  ").is_err());
    }

    #[test]
    fn test_validate_timezone() {
        assert_eq!(validate_timezone("Europe/Berlin").unwrap(), Tz::Europe__Berlin);
        assert!(matches!(
            validate_timezone("Mars/Olympus_Mons"),
            Err(SleepCalcError::InvalidTimezone { .. })
        ));
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("display.output_format", "json", &["json", "text"]).is_ok());
        assert!(validate_one_of("display.output_format", "xml", &["json", "text"]).is_err());
    }
}
