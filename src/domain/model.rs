use chrono::{DateTime, FixedOffset, Local};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ONSET_MINUTES: u32 = 14;
pub const DEFAULT_CYCLE_MINUTES: u32 = 90;
pub const DEFAULT_CYCLE_COUNT: u32 = 6;
/// `h:mm a`, e.g. "6:30 AM".
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M %p";

/// A bedtime together with the zone its wake times are displayed in.
#[derive(Debug, Clone, PartialEq)]
pub enum BedTime {
    Fixed(DateTime<FixedOffset>),
    Zoned(DateTime<Tz>),
    Local(DateTime<Local>),
}

impl BedTime {
    pub fn fixed_offset(&self) -> DateTime<FixedOffset> {
        match self {
            Self::Fixed(dt) => *dt,
            Self::Zoned(dt) => dt.fixed_offset(),
            Self::Local(dt) => dt.fixed_offset(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSettings {
    pub onset_minutes: u32,
    pub cycle_minutes: u32,
    pub cycle_count: u32,
    pub time_format: String,
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self {
            onset_minutes: DEFAULT_ONSET_MINUTES,
            cycle_minutes: DEFAULT_CYCLE_MINUTES,
            cycle_count: DEFAULT_CYCLE_COUNT,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

/// One candidate wake-up time. Serializes as `{ "time", "cycles", "hours" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WakeTimeEntry {
    #[serde(rename = "time")]
    pub formatted_time: String,
    #[serde(rename = "cycles")]
    pub cycle_count: u32,
    #[serde(rename = "hours")]
    pub formatted_hours: String,
    /// Offset is the one in force at this instant in the display zone.
    #[serde(skip)]
    pub instant: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WakeTimeReport {
    pub bedtime: DateTime<FixedOffset>,
    pub onset: DateTime<FixedOffset>,
    pub settings: CycleSettings,
    pub entries: Vec<WakeTimeEntry>,
}
