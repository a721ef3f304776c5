pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::OutputFormat;
pub use crate::config::TomlConfig;
pub use crate::core::bedtime::{now_in, parse_bedtime, DisplayZone};
pub use crate::core::calculator::{compute, WakeTimeCalculator};
pub use crate::domain::model::{BedTime, CycleSettings, WakeTimeEntry, WakeTimeReport};
pub use crate::utils::error::{Result, SleepCalcError};
