use chrono::{Datelike, NaiveDate, Weekday};

/// The clinic does not book weekends. Every availability query and every
/// booking attempt must go through this one check.
pub fn is_bookable_date(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
