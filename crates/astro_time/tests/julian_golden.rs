//! Calendar round-trip and reference-date checks for Julian Day conversion.

use astro_time::{CalendarDate, calendar_from_jd, calendar_to_jd, integer_julian_day, julian_day};

/// Minutes since midnight, rounded, so float noise in the hour drops out.
fn minute_of_day(hour: f64) -> i64 {
    (hour * 60.0).round() as i64
}

#[test]
fn reference_epochs() {
    let cases = [
        // (day, month, year, hour, gregorian, jd)
        (1, 1, 2000, 12.0, true, 2_451_545.0),
        (1, 1, 1900, 12.0, true, 2_415_021.0),
        (31, 12, 1899, 12.0, true, 2_415_020.0),
        (17, 11, 1858, 0.0, true, 2_400_000.5),
        (1, 1, -4712, 12.0, false, 0.0),
    ];
    for (d, m, y, h, greg, expected) in cases {
        let jd = julian_day(d, m, y, h, greg);
        assert!(
            (jd - expected).abs() < 1e-6,
            "{y}-{m}-{d} {h}h: jd = {jd}, expected {expected}"
        );
    }
}

#[test]
fn gregorian_round_trip_to_the_minute() {
    for year in [1583, 1700, 1899, 1900, 1969, 2000, 2024, 2100, 2400] {
        for month in 1..=12 {
            for day in [1, 9, 15, 28] {
                for (h, min) in [(0, 0), (6, 17), (12, 0), (23, 59)] {
                    let hour = h as f64 + min as f64 / 60.0;
                    let date = CalendarDate { year, month, day, hour };
                    let back = calendar_from_jd(calendar_to_jd(&date));
                    assert_eq!(
                        (back.year, back.month, back.day),
                        (year, month, day),
                        "date mismatch for {year}-{month}-{day} {h}:{min}"
                    );
                    assert_eq!(
                        minute_of_day(back.hour),
                        (h * 60 + min) as i64,
                        "time mismatch for {year}-{month}-{day} {h}:{min}"
                    );
                }
            }
        }
    }
}

#[test]
fn leap_day_round_trip() {
    for year in [1600, 1996, 2000, 2004, 2400] {
        let date = CalendarDate { year, month: 2, day: 29, hour: 18.5 };
        let back = calendar_from_jd(calendar_to_jd(&date));
        assert_eq!((back.year, back.month, back.day), (year, 2, 29));
    }
}

#[test]
fn consecutive_days_have_consecutive_indices() {
    let a = integer_julian_day(28, 2, 2024);
    let b = integer_julian_day(29, 2, 2024);
    let c = integer_julian_day(1, 3, 2024);
    assert_eq!(b - a, 1);
    assert_eq!(c - b, 1);
}
