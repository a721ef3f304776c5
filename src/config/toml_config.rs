use crate::adapters::render::OutputFormat;
use crate::core::ConfigProvider;
use crate::domain::model::{
    DEFAULT_CYCLE_COUNT, DEFAULT_CYCLE_MINUTES, DEFAULT_ONSET_MINUTES, DEFAULT_TIME_FORMAT,
};
use crate::utils::error::{Result, SleepCalcError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub calculator: CalculatorConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub onset_minutes: Option<u32>,
    pub cycle_minutes: Option<u32>,
    pub cycle_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub time_format: Option<String>,
    pub timezone: Option<String>,
    pub output_format: Option<String>,
    pub pretty_json: Option<bool>,
}

impl TomlConfig {
    /// Loads a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses config text after environment substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SleepCalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` and `${VAR:-fallback}`. Unset variables without a
    /// fallback are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").map_err(|e| {
            SleepCalcError::ConfigValidationError {
                field: "environment".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match (std::env::var(var_name), caps.get(2)) {
                (Ok(value), _) => value,
                (Err(_), Some(fallback)) => fallback.as_str().to_string(),
                (Err(_), None) => caps[0].to_string(),
            }
        });

        Ok(result.to_string())
    }

    pub fn pretty_json(&self) -> bool {
        self.display.pretty_json.unwrap_or(false)
    }

    pub fn output(&self) -> Result<OutputFormat> {
        self.output_format().parse()
    }
}

impl ConfigProvider for TomlConfig {
    fn onset_minutes(&self) -> u32 {
        self.calculator.onset_minutes.unwrap_or(DEFAULT_ONSET_MINUTES)
    }

    fn cycle_minutes(&self) -> u32 {
        self.calculator.cycle_minutes.unwrap_or(DEFAULT_CYCLE_MINUTES)
    }

    fn cycle_count(&self) -> u32 {
        self.calculator.cycle_count.unwrap_or(DEFAULT_CYCLE_COUNT)
    }

    fn time_format(&self) -> &str {
        self.display.time_format.as_deref().unwrap_or(DEFAULT_TIME_FORMAT)
    }

    fn timezone(&self) -> Option<&str> {
        self.display
            .timezone
            .as_deref()
            .map(str::trim)
            .filter(|tz| !tz.is_empty())
    }

    fn output_format(&self) -> &str {
        self.display.output_format.as_deref().unwrap_or("json")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range("calculator.onset_minutes", self.onset_minutes(), 0, 180)?;
        validation::validate_range("calculator.cycle_minutes", self.cycle_minutes(), 1, 240)?;
        validation::validate_range("calculator.cycle_count", self.cycle_count(), 1, 12)?;
        validation::validate_time_format("display.time_format", self.time_format())?;
        validation::validate_one_of(
            "display.output_format",
            &self.output_format().to_ascii_lowercase(),
            OutputFormat::NAMES,
        )?;

        if let Some(tz) = self.timezone() {
            validation::validate_timezone(tz)?;
        }

        Ok(())
    }
}
