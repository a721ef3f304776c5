//! Wake-time arithmetic.
//!
//! Instants are advanced in absolute time and only converted to wall-clock
//! text at the end, so midnight rollover and DST transitions in the display
//! zone come out right without any calendar special-casing.

use crate::domain::model::{
    BedTime, CycleSettings, WakeTimeEntry, WakeTimeReport, DEFAULT_TIME_FORMAT,
};
use crate::utils::error::{Result, SleepCalcError};
use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use std::fmt::{Display, Write};

#[derive(Debug, Clone, Default)]
pub struct WakeTimeCalculator {
    settings: CycleSettings,
}

impl WakeTimeCalculator {
    pub fn new(settings: CycleSettings) -> Self {
        Self { settings }
    }

    /// Candidate wake-up times for `bedtime`, ordered by cycle count `1..=cycle_count`.
    pub fn compute<Tz>(&self, bedtime: &DateTime<Tz>) -> Vec<WakeTimeEntry>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.onset_and_entries(bedtime).1
    }

    pub fn report(&self, bedtime: &BedTime) -> WakeTimeReport {
        let (onset, entries) = match bedtime {
            BedTime::Fixed(dt) => self.onset_and_entries(dt),
            BedTime::Zoned(dt) => self.onset_and_entries(dt),
            BedTime::Local(dt) => self.onset_and_entries(dt),
        };

        WakeTimeReport {
            bedtime: bedtime.fixed_offset(),
            onset,
            settings: self.settings.clone(),
            entries,
        }
    }

    fn onset_and_entries<Tz>(
        &self,
        bedtime: &DateTime<Tz>,
    ) -> (DateTime<FixedOffset>, Vec<WakeTimeEntry>)
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let onset = advance_or_keep(bedtime.clone(), self.settings.onset_minutes);
        let mut wake = onset.clone();
        let mut entries = Vec::with_capacity(self.settings.cycle_count as usize);

        for cycle in 1..=self.settings.cycle_count {
            wake = advance_or_keep(wake, self.settings.cycle_minutes);

            entries.push(WakeTimeEntry {
                formatted_time: format_clock(&wake, &self.settings.time_format),
                cycle_count: cycle,
                formatted_hours: format_hours(cycle, self.settings.cycle_minutes),
                instant: wake.fixed_offset(),
            });
        }

        tracing::debug!(
            bedtime = %bedtime.to_rfc3339(),
            onset = %onset.to_rfc3339(),
            entries = entries.len(),
            "computed wake times"
        );

        (onset.fixed_offset(), entries)
    }
}

/// Computes wake times with the default 14 minute onset and six 90 minute cycles.
pub fn compute<Tz>(bedtime: &DateTime<Tz>) -> Vec<WakeTimeEntry>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    WakeTimeCalculator::default().compute(bedtime)
}

pub fn add_minutes<Tz: TimeZone>(instant: &DateTime<Tz>, minutes: u32) -> Result<DateTime<Tz>> {
    let minutes = i64::from(minutes);
    instant
        .clone()
        .checked_add_signed(Duration::minutes(minutes))
        .ok_or_else(|| SleepCalcError::CalendarArithmeticOverflow {
            from: instant.naive_utc().to_string(),
            minutes,
        })
}

// Overflow falls back to the last instant that could be computed.
fn advance_or_keep<Tz: TimeZone>(instant: DateTime<Tz>, minutes: u32) -> DateTime<Tz> {
    match add_minutes(&instant, minutes) {
        Ok(next) => next,
        Err(e) => {
            tracing::warn!("{}; keeping previous instant", e);
            instant
        }
    }
}

pub fn format_clock<Tz>(instant: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    if write!(out, "{}", instant.format(pattern)).is_ok() {
        return out;
    }

    tracing::warn!("time format '{}' could not be rendered, using default", pattern);
    instant.format(DEFAULT_TIME_FORMAT).to_string()
}

pub fn format_hours(cycle: u32, cycle_minutes: u32) -> String {
    let hours = f64::from(cycle) * f64::from(cycle_minutes) / 60.0;
    format!("{:.1}", hours)
}
