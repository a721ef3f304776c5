use crate::domain::model::BedTime;
use crate::utils::error::{Result, SleepCalcError};
use chrono::{
    DateTime, Duration, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime,
    TimeZone,
};
use chrono_tz::Tz;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// ISO-8601 forms RFC 3339 rejects: no seconds, or an offset without a colon.
const OFFSET_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M%p"];

// Longest DST gap in the tz database is two hours.
const MAX_GAP_MINUTES: i64 = 180;

/// Zone naive inputs are interpreted in, and every bedtime is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    #[default]
    Local,
    Named(Tz),
}

impl DisplayZone {
    pub fn from_name(name: Option<&str>) -> Result<Self> {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => crate::utils::validation::validate_timezone(name).map(Self::Named),
            None => Ok(Self::Local),
        }
    }

    /// Today's date as seen from this zone.
    pub fn today(&self) -> NaiveDate {
        match self {
            Self::Local => Local::now().date_naive(),
            Self::Named(tz) => chrono::Utc::now().with_timezone(tz).date_naive(),
        }
    }
}

/// Parses user input into a bedtime.
///
/// Accepts ISO-8601 timestamps with or without an offset and bare clock
/// times. Clock times are placed on `today`. Naive values are read as
/// wall-clock time in `zone`; a value with an offset keeps it unless a named
/// zone is given.
pub fn parse_bedtime(input: &str, zone: DisplayZone, today: NaiveDate) -> Result<BedTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid(input, "input is empty"));
    }

    if let Some(dt) = parse_with_offset(trimmed) {
        return Ok(match zone {
            DisplayZone::Named(tz) => BedTime::Zoned(dt.with_timezone(&tz)),
            DisplayZone::Local => BedTime::Fixed(dt),
        });
    }

    let naive = parse_naive(trimmed)
        .or_else(|| parse_clock(trimmed).map(|time| today.and_time(time)))
        .ok_or_else(|| invalid(input, "expected an ISO-8601 timestamp or a clock time"))?;

    match zone {
        DisplayZone::Named(tz) => resolve_local(&tz, naive, input).map(BedTime::Zoned),
        DisplayZone::Local => resolve_local(&Local, naive, input).map(BedTime::Local),
    }
}

/// The current instant, displayed in `zone`.
pub fn now_in(zone: DisplayZone) -> BedTime {
    match zone {
        DisplayZone::Local => BedTime::Local(Local::now()),
        DisplayZone::Named(tz) => BedTime::Zoned(chrono::Utc::now().with_timezone(&tz)),
    }
}

fn parse_with_offset(input: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt);
    }

    let normalized = match input.strip_suffix(|c: char| c.eq_ignore_ascii_case(&'z')) {
        Some(rest) => format!("{}+00:00", rest),
        None => input.to_string(),
    };
    OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}

fn parse_clock(input: &str) -> Option<NaiveTime> {
    let upper = input.to_ascii_uppercase();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&upper, fmt).ok())
}

/// Ambiguous wall-clock times take the earlier instant; times inside a DST
/// gap move forward to the first minute that exists.
fn resolve_local<Z: TimeZone>(zone: &Z, naive: NaiveDateTime, input: &str) -> Result<DateTime<Z>> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => {
            tracing::debug!("bedtime '{}' is ambiguous, using earlier instant", input);
            Ok(earliest)
        }
        LocalResult::None => {
            let shifted = (1..=MAX_GAP_MINUTES).find_map(|minutes| {
                let candidate = naive.checked_add_signed(Duration::minutes(minutes))?;
                zone.from_local_datetime(&candidate).earliest()
            });
            match shifted {
                Some(dt) => {
                    tracing::debug!("bedtime '{}' falls in a DST gap, moved forward", input);
                    Ok(dt)
                }
                None => Err(invalid(input, "local time does not exist in this timezone")),
            }
        }
    }
}

fn invalid(input: &str, reason: &str) -> SleepCalcError {
    SleepCalcError::InvalidTimestamp {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
