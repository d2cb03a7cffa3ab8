use time::macros::date;

use super::*;

#[test]
fn month_year_uses_full_month_name() {
    assert_eq!(month_year(date!(2024 - 06 - 15)), "June 2024");
}

#[test]
fn short_month_year_abbreviates() {
    assert_eq!(short_month_year(date!(2024 - 09 - 01)), "Sep 2024");
    assert_eq!(short_month_year(date!(2023 - 05 - 15)), "May 2023");
}

#[test]
fn long_date_includes_day() {
    assert_eq!(long_date(date!(2024 - 01 - 05)), "January 5, 2024");
}
