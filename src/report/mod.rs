//! Upcoming-birthday report.
//!
//! Maps every stored birthday onto a rolling window starting today and
//! groups the matching contacts by the weekday their greeting should go
//! out on. Birthdays landing on a weekend are greeted on the following
//! Monday.

use crate::store::ContactStore;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// Length of the default reporting window, in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Compute the birthday report for the next 7 days.
///
/// Equivalent to [`upcoming_birthdays_within`] with a 7-day window: a
/// birthday counts if it falls on `today` or any of the 6 days after it.
pub fn upcoming_birthdays(store: &ContactStore, today: NaiveDate) -> Vec<(Weekday, Vec<String>)> {
    upcoming_birthdays_within(store, today, DEFAULT_WINDOW_DAYS)
}

/// Compute the birthday report for a window of `window_days` days.
///
/// For each contact (in store insertion order) and each of its birthdays:
///
/// 1. The birthday's month/day is mapped onto `today`'s year. If that date
///    has already passed this year, the distance to the window is measured
///    against the same month/day next year instead.
/// 2. The birthday is included iff that distance is strictly less than
///    `window_days` (so day 0, today itself, counts).
/// 3. The reporting weekday is taken from the this-year date; Saturday and
///    Sunday shift forward to the following Monday.
///
/// Names are grouped under the resulting weekday, in store iteration
/// order; the groups come back ordered Monday through Sunday, and weekdays
/// with no names are omitted. Pure and infallible: the function only sees
/// already-validated data.
///
/// A Feb 29 birthday mapped into a non-leap year clamps to Feb 28.
pub fn upcoming_birthdays_within(
    store: &ContactStore,
    today: NaiveDate,
    window_days: i64,
) -> Vec<(Weekday, Vec<String>)> {
    // Keyed by days-from-Monday so groups come out Monday-first.
    let mut groups: BTreeMap<u32, (Weekday, Vec<String>)> = BTreeMap::new();

    for record in store.records() {
        for birthday in record.birthdays() {
            let this_year = on_year(birthday.date(), today.year());

            let delta_days = if this_year < today {
                let next_year = on_year(birthday.date(), today.year() + 1);
                (next_year - today).num_days()
            } else {
                (this_year - today).num_days()
            };

            if delta_days >= window_days {
                continue;
            }

            let reporting_day = shift_weekend_to_monday(this_year);
            let weekday = reporting_day.weekday();
            groups
                .entry(weekday.num_days_from_monday())
                .or_insert_with(|| (weekday, Vec::new()))
                .1
                .push(record.name().as_str().to_string());
        }
    }

    groups.into_values().collect()
}

/// Move a Saturday or Sunday date forward to the following Monday.
fn shift_weekend_to_monday(date: NaiveDate) -> NaiveDate {
    let weekday_number = i64::from(date.weekday().num_days_from_monday());
    if weekday_number >= 5 {
        date + Duration::days(7 - weekday_number)
    } else {
        date
    }
}

/// Map a date's month/day onto another year, clamping Feb 29 to Feb 28
/// when the target year is not a leap year.
fn on_year(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(date)
}

/// Full English weekday name, for user-facing output.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactName;
    use crate::models::ContactRecord;

    // 2024-06-10 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn store_with(entries: &[(&str, &[&str])]) -> ContactStore {
        let mut store = ContactStore::new();
        for (name, birthdays) in entries {
            let mut rec = ContactRecord::new(ContactName::new(*name).unwrap());
            for raw in *birthdays {
                rec.add_birthday(raw).unwrap();
            }
            store.add_record(rec);
        }
        store
    }

    #[test]
    fn test_saturday_birthday_shifts_to_monday() {
        // 2024-06-15 is a Saturday, 5 days out.
        let store = store_with(&[("Alice", &["15.06.1990"])]);
        let report = upcoming_birthdays(&store, monday());

        assert_eq!(
            report,
            vec![(Weekday::Mon, vec!["Alice".to_string()])],
            "Saturday birthdays are greeted on Monday"
        );
    }

    #[test]
    fn test_sunday_birthday_shifts_to_monday() {
        // 2024-06-16 is a Sunday.
        let store = store_with(&[("Dave", &["16.06.1975"])]);
        let report = upcoming_birthdays(&store, monday());
        assert_eq!(report, vec![(Weekday::Mon, vec!["Dave".to_string()])]);
    }

    #[test]
    fn test_passed_birthday_excluded() {
        // Bob's birthday passed in January; distance is measured to next
        // January, far outside the window.
        let store = store_with(&[("Bob", &["01.01.1980"])]);
        let report = upcoming_birthdays(&store, monday());
        assert!(report.is_empty());
    }

    #[test]
    fn test_birthday_today_included() {
        let store = store_with(&[("Carol", &["10.06.1992"])]);
        let report = upcoming_birthdays(&store, monday());
        assert_eq!(report, vec![(Weekday::Mon, vec!["Carol".to_string()])]);
    }

    #[test]
    fn test_window_is_strictly_under_seven_days() {
        // 2024-06-16 is day 6 (in), 2024-06-17 is day 7 (out).
        let store = store_with(&[("In", &["16.06.1990"]), ("Out", &["17.06.1990"])]);
        let report = upcoming_birthdays(&store, monday());

        let names: Vec<_> = report.iter().flat_map(|(_, n)| n.clone()).collect();
        assert_eq!(names, vec!["In".to_string()]);
    }

    #[test]
    fn test_groups_ordered_monday_first() {
        // Friday 14th, Wednesday 12th, Saturday 15th (shifts to Monday).
        let store = store_with(&[
            ("Fri", &["14.06.1990"]),
            ("Wed", &["12.06.1990"]),
            ("Sat", &["15.06.1990"]),
        ]);
        let report = upcoming_birthdays(&store, monday());

        let days: Vec<_> = report.iter().map(|(d, _)| *d).collect();
        assert_eq!(days, vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
    }

    #[test]
    fn test_names_keep_store_order_within_a_day() {
        let store = store_with(&[("Zoe", &["12.06.1990"]), ("Amy", &["12.06.1985"])]);
        let report = upcoming_birthdays(&store, monday());
        assert_eq!(
            report,
            vec![(
                Weekday::Wed,
                vec!["Zoe".to_string(), "Amy".to_string()]
            )]
        );
    }

    #[test]
    fn test_multiple_birthdays_per_contact_all_considered() {
        let store = store_with(&[("Twin", &["01.01.1990", "13.06.1990"])]);
        let report = upcoming_birthdays(&store, monday());
        assert_eq!(report, vec![(Weekday::Thu, vec!["Twin".to_string()])]);
    }

    #[test]
    fn test_feb_29_clamps_in_non_leap_year() {
        // Today 2023-02-27 (Monday, non-leap year): Feb 29 clamps to
        // Feb 28, one day out, a Tuesday.
        let today = NaiveDate::from_ymd_opt(2023, 2, 27).unwrap();
        let store = store_with(&[("Leap", &["29.02.2000"])]);
        let report = upcoming_birthdays(&store, today);
        assert_eq!(report, vec![(Weekday::Tue, vec!["Leap".to_string()])]);
    }

    #[test]
    fn test_report_is_idempotent() {
        let store = store_with(&[
            ("Alice", &["15.06.1990"]),
            ("Carol", &["10.06.1992"]),
            ("Bob", &["01.01.1980"]),
        ]);
        let first = upcoming_birthdays(&store, monday());
        let second = upcoming_birthdays(&store, monday());
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_store_empty_report() {
        let store = ContactStore::new();
        assert!(upcoming_birthdays(&store, monday()).is_empty());
    }

    #[test]
    fn test_custom_window_length() {
        // 2024-06-17 is 7 days out: outside the default window, inside an
        // 8-day one.
        let store = store_with(&[("NextMon", &["17.06.1990"])]);
        assert!(upcoming_birthdays(&store, monday()).is_empty());

        let report = upcoming_birthdays_within(&store, monday(), 8);
        assert_eq!(report, vec![(Weekday::Mon, vec!["NextMon".to_string()])]);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }
}
