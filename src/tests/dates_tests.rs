use crate::domain::dates::{days_until, format_date, normalize, serial_to_date};
use crate::domain::record::CellValue;
use crate::tests::utils::{number, text};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn serial_matches_known_reference() {
    // 45000 is a known reference pair for the 1899-12-30 epoch convention.
    assert_eq!(serial_to_date(45000.0), Some(date(2023, 3, 15)));
}

#[test]
fn serial_discards_time_of_day() {
    assert_eq!(serial_to_date(45000.73), Some(date(2023, 3, 15)));
}

#[test]
fn serial_rejects_non_finite_values() {
    assert_eq!(serial_to_date(f64::NAN), None);
    assert_eq!(serial_to_date(f64::INFINITY), None);
}

#[test]
fn numeric_cell_goes_through_serial_conversion() {
    assert_eq!(normalize(&number(45000.0)), Some(date(2023, 3, 15)));
}

#[test]
fn iso_dates_parse_in_the_general_stage() {
    assert_eq!(normalize(&text("2025-03-05")), Some(date(2025, 3, 5)));
    assert_eq!(normalize(&text("2025/03/05")), Some(date(2025, 3, 5)));
    assert_eq!(
        normalize(&text("2025-03-05T10:30:00")),
        Some(date(2025, 3, 5))
    );
}

#[test]
fn slash_dates_are_day_first() {
    // 5 March, not 3 May.
    assert_eq!(normalize(&text("05/03/2025")), Some(date(2025, 3, 5)));
    assert_eq!(normalize(&text("5/3/2025")), Some(date(2025, 3, 5)));
    assert_eq!(normalize(&text("05-03-2025")), Some(date(2025, 3, 5)));
}

#[test]
fn day_first_requires_a_four_digit_year() {
    assert_eq!(normalize(&text("05/03/25")), None);
}

#[test]
fn day_first_rejects_impossible_dates() {
    assert_eq!(normalize(&text("31/02/2025")), None);
    assert_eq!(normalize(&text("00/03/2025")), None);
}

#[test]
fn blank_and_garbage_cells_yield_no_date() {
    assert_eq!(normalize(&CellValue::Empty), None);
    assert_eq!(normalize(&text("")), None);
    assert_eq!(normalize(&text("   ")), None);
    assert_eq!(normalize(&text("not a date")), None);
}

#[test]
fn day_count_is_a_whole_day_difference() {
    let today = date(2024, 1, 1);
    assert_eq!(days_until(date(2024, 1, 31), today), 30);
    assert_eq!(days_until(date(2023, 12, 31), today), -1);
    assert_eq!(days_until(today, today), 0);
}

#[test]
fn display_format_is_day_first() {
    assert_eq!(format_date(date(2025, 3, 5)), "05/03/2025");
}
