// Application layer: one CLI invocation from flags to rendered output.

use crate::config::CliConfig;
use crate::core::bedtime::{now_in, parse_bedtime, DisplayZone};
use crate::core::calculator::WakeTimeCalculator;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::NaiveDate;

/// Resolves config, reads the bedtime (now if none was given) and renders
/// the wake-up times in the configured format.
pub fn run(cli: &CliConfig) -> Result<String> {
    execute(cli, None)
}

/// Like [`run`], with clock-time inputs placed on `today`.
pub fn run_on(cli: &CliConfig, today: NaiveDate) -> Result<String> {
    execute(cli, Some(today))
}

fn execute(cli: &CliConfig, today: Option<NaiveDate>) -> Result<String> {
    let config = cli.resolve()?;
    config.validate()?;
    let output = config.output()?;

    let zone = DisplayZone::from_name(config.timezone())?;
    let bedtime = match &cli.bedtime {
        Some(input) => parse_bedtime(input, zone, today.unwrap_or_else(|| zone.today()))?,
        None => now_in(zone),
    };
    tracing::info!("🛏️ Bedtime: {}", bedtime.fixed_offset().to_rfc3339());

    let report = WakeTimeCalculator::new(config.cycle_settings()).report(&bedtime);
    output.renderer(config.pretty_json()).render(&report)
}
