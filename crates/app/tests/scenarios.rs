//! Acceptance scenarios for the `TimeConverter` port.
//!
//! Each scenario feeds a time string through [`ClockFormatter`] and compares
//! the full rendering, or asserts that the input is rejected.

use berlin_clock_app::ports::TimeConverter;
use berlin_clock_app::services::ClockFormatter;
use berlin_clock_domain::error::ClockError;

fn converter() -> impl TimeConverter {
    ClockFormatter::<berlin_clock_app::ports::SystemTimeSource>::default()
}

fn assert_clock(time: &str, expected: &[&str; 5]) {
    let actual = converter().convert_time(time).unwrap();
    assert_eq!(actual, expected.join("\n"), "time {time}");
}

fn assert_rejected(time: &str) {
    let result = converter().convert_time(time);
    assert!(
        matches!(result, Err(ClockError::InvalidTimeFormat { .. })),
        "time {time:?} should be rejected, got {result:?}"
    );
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn should_show_midnight() {
    assert_clock("00:00:00", &["Y", "OOOO", "OOOO", "OOOOOOOOOOO", "OOOO"]);
}

#[test]
fn should_show_middle_of_the_afternoon() {
    assert_clock("13:17:01", &["O", "RROO", "RRRO", "YYROOOOOOOO", "YYOO"]);
}

#[test]
fn should_show_just_before_midnight() {
    assert_clock("23:59:59", &["O", "RRRR", "RRRO", "YYRYYRYYRYY", "YYYY"]);
}

#[test]
fn should_show_midnight_as_hour_twenty_four() {
    assert_clock("24:00:00", &["Y", "RRRR", "RRRR", "OOOOOOOOOOO", "OOOO"]);
}

#[test]
fn should_show_first_quarter_marker() {
    assert_clock("00:15:00", &["Y", "OOOO", "OOOO", "YYROOOOOOOO", "OOOO"]);
}

#[test]
fn should_roll_single_minutes_into_five_minute_row() {
    assert_clock("00:04:00", &["Y", "OOOO", "OOOO", "OOOOOOOOOOO", "YYYY"]);
    assert_clock("00:05:00", &["Y", "OOOO", "OOOO", "YOOOOOOOOOO", "OOOO"]);
}

// ---------------------------------------------------------------------------
// Rejection
// ---------------------------------------------------------------------------

#[test]
fn should_reject_hour_above_twenty_four() {
    assert_rejected("25:00:00");
    assert_rejected("29:59:59");
}

#[test]
fn should_reject_minute_sixty() {
    assert_rejected("12:60:00");
}

#[test]
fn should_reject_non_numeric_input() {
    assert_rejected("bad:in:put");
}

#[test]
fn should_reject_single_digit_fields() {
    assert_rejected("1:2:3");
}

#[test]
fn should_reject_padded_input() {
    assert_rejected(" 12:00:00 ");
    assert_rejected("12:00:00\r\n");
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn should_convert_concurrently_from_shared_formatter() {
    let formatter = ClockFormatter::<berlin_clock_app::ports::SystemTimeSource>::default();
    let expected = formatter.convert_time("13:17:01").unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| formatter.convert_time("13:17:01").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
