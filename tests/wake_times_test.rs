use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use sleep_cycle_calc::{
    compute, parse_bedtime, BedTime, CycleSettings, DisplayZone, WakeTimeCalculator,
};

fn bedtimes() -> Vec<DateTime<Utc>> {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single().unwrap();
    // every 37 minutes over a few days hits every clock position
    (0..200).map(|i| start + Duration::minutes(37 * i)).collect()
}

#[test]
fn test_properties_hold_for_many_bedtimes() {
    for bedtime in bedtimes() {
        let entries = compute(&bedtime);

        assert_eq!(entries.len(), 6);
        for (i, entry) in entries.iter().enumerate() {
            let cycles = i as i64 + 1;
            assert_eq!(entry.cycle_count as i64, cycles);
            assert_eq!(
                entry.instant,
                bedtime + Duration::minutes(14) + Duration::minutes(90 * cycles)
            );
            assert_eq!(entry.formatted_hours, format!("{:.1}", cycles as f64 * 1.5));
        }

        for pair in entries.windows(2) {
            assert!(pair[0].instant < pair[1].instant);
            assert_eq!(pair[1].instant - pair[0].instant, Duration::minutes(90));
        }
    }
}

#[test]
fn test_compute_is_idempotent() {
    let bedtime = Utc.with_ymd_and_hms(2026, 10, 19, 22, 0, 0).single().unwrap();
    assert_eq!(compute(&bedtime), compute(&bedtime));

    let calculator = WakeTimeCalculator::default();
    let bed = BedTime::Fixed(bedtime.fixed_offset());
    assert_eq!(calculator.report(&bed), calculator.report(&bed));
}

#[test]
fn test_ten_pm_scenario_from_clock_input() -> Result<()> {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let zone = DisplayZone::Named(Tz::America__New_York);
    let bedtime = parse_bedtime("10:00 PM", zone, today)?;

    let report = WakeTimeCalculator::default().report(&bedtime);
    let onset = report.onset;
    assert_eq!((onset.hour(), onset.minute()), (22, 14));

    let times: Vec<&str> = report
        .entries
        .iter()
        .map(|e| e.formatted_time.as_str())
        .collect();
    assert_eq!(
        times,
        vec!["11:44 PM", "1:14 AM", "2:44 AM", "4:14 AM", "5:44 AM", "7:14 AM"]
    );
    Ok(())
}

#[test]
fn test_wall_clock_follows_spring_forward() -> Result<()> {
    let today = NaiveDate::from_ymd_opt(2026, 3, 28).unwrap();
    let zone = DisplayZone::Named(Tz::Europe__Berlin);
    let bedtime = parse_bedtime("22:00", zone, today)?;

    let entries = WakeTimeCalculator::default().report(&bedtime).entries;
    let times: Vec<&str> = entries.iter().map(|e| e.formatted_time.as_str()).collect();

    // clocks jump from 2:00 to 3:00 between cycle 2 and cycle 3
    assert_eq!(
        times,
        vec!["11:44 PM", "1:14 AM", "3:44 AM", "5:14 AM", "6:44 AM", "8:14 AM"]
    );
    assert_eq!(entries[1].instant.offset().local_minus_utc(), 3600);
    assert_eq!(entries[2].instant.offset().local_minus_utc(), 7200);
    assert_eq!(entries[2].instant - entries[1].instant, Duration::minutes(90));
    Ok(())
}

#[test]
fn test_wall_clock_follows_fall_back() -> Result<()> {
    let today = NaiveDate::from_ymd_opt(2026, 10, 24).unwrap();
    let zone = DisplayZone::Named(Tz::Europe__Berlin);
    let bedtime = parse_bedtime("23:00", zone, today)?;

    let entries = WakeTimeCalculator::default().report(&bedtime).entries;
    let times: Vec<&str> = entries.iter().map(|e| e.formatted_time.as_str()).collect();

    // clocks fall back from 3:00 to 2:00 between cycle 2 and cycle 3
    assert_eq!(
        times,
        vec!["12:44 AM", "2:14 AM", "2:44 AM", "4:14 AM", "5:44 AM", "7:14 AM"]
    );
    assert_eq!(entries[2].instant - entries[1].instant, Duration::minutes(90));
    Ok(())
}

#[test]
fn test_rollover_into_next_day() -> Result<()> {
    let bedtime = parse_bedtime(
        "2026-10-19T23:50:00Z",
        DisplayZone::Named(Tz::UTC),
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
    )?;

    let report = WakeTimeCalculator::default().report(&bedtime);
    let first = &report.entries[0];
    assert_eq!(first.instant.date_naive(), NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
    assert_eq!(first.formatted_time, "1:34 AM");
    Ok(())
}

#[test]
fn test_longer_cycles_with_24_hour_clock() {
    let calculator = WakeTimeCalculator::new(CycleSettings {
        onset_minutes: 20,
        cycle_minutes: 110,
        cycle_count: 4,
        time_format: "%H:%M".to_string(),
    });
    let bedtime = Utc.with_ymd_and_hms(2026, 10, 19, 22, 0, 0).single().unwrap();
    let entries = calculator.compute(&bedtime);

    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].formatted_time, "00:10");
    assert_eq!(entries[3].formatted_time, "05:40");
    assert_eq!(entries[3].formatted_hours, "7.3");
}
