//! Human-readable date labels in the `en-US` shapes the pages use.

use time::Date;

/// `June 2024`.
#[must_use]
pub fn month_year(date: Date) -> String {
    format!("{} {}", date.month(), date.year())
}

/// `Jun 2024`.
#[must_use]
pub fn short_month_year(date: Date) -> String {
    format!("{} {}", short_month(date), date.year())
}

/// `January 15, 2024`.
#[must_use]
pub fn long_date(date: Date) -> String {
    format!("{} {}, {}", date.month(), date.day(), date.year())
}

fn short_month(date: Date) -> String {
    date.month().to_string().chars().take(3).collect()
}

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;
