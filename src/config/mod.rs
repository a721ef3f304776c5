pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "sleep-cycle-calc")]
#[command(about = "Recommended wake-up times from a bedtime, in 90 minute sleep cycles")]
pub struct CliConfig {
    /// Bedtime: ISO-8601 timestamp or clock time (22:30, 10:30 PM). Defaults to now.
    pub bedtime: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// IANA timezone used to read and display times (defaults to the system zone)
    #[arg(short = 'z', long)]
    pub timezone: Option<String>,

    /// Output format: json, text or csv
    #[arg(short, long)]
    pub format: Option<String>,

    #[arg(long, help = "Minutes it takes to fall asleep")]
    pub onset_minutes: Option<u32>,

    #[arg(long, help = "Length of one sleep cycle in minutes")]
    pub cycle_minutes: Option<u32>,

    #[arg(long = "cycles", help = "Number of wake-up times to list")]
    pub cycle_count: Option<u32>,

    /// strftime pattern for wake-up times, e.g. "%H:%M"
    #[arg(long)]
    pub time_format: Option<String>,

    #[arg(long, help = "Pretty-print JSON output")]
    pub pretty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Flags given on the command line win over the file.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(minutes) = self.onset_minutes {
            config.calculator.onset_minutes = Some(minutes);
        }
        if let Some(minutes) = self.cycle_minutes {
            config.calculator.cycle_minutes = Some(minutes);
        }
        if let Some(count) = self.cycle_count {
            config.calculator.cycle_count = Some(count);
        }
        if let Some(format) = &self.time_format {
            config.display.time_format = Some(format.clone());
        }
        if let Some(tz) = &self.timezone {
            config.display.timezone = Some(tz.clone());
        }
        if let Some(format) = &self.format {
            config.display.output_format = Some(format.clone());
        }
        if self.pretty {
            config.display.pretty_json = Some(true);
        }
    }

    /// Loads the config file, if any, and layers the flags on top.
    pub fn resolve(&self) -> crate::utils::error::Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }
}
