use crate::models::{DayLog, LogResponse, TrainingLog, WEEKDAYS};
use chrono::{Datelike, Local, NaiveDate};

pub fn build_log_view(log: &TrainingLog) -> LogResponse {
    build_log_view_at(Local::now().date_naive(), log)
}

/// Builds the weekly log view model: the mileage total for `today`'s month
/// and one group per weekday, Monday through Sunday. Grouping looks only at
/// each entry's stored date, so every week and month lands under the same
/// seven headings; within a group entries keep insertion order. Entries
/// whose stored date does not parse are left out of both.
pub fn build_log_view_at(today: NaiveDate, log: &TrainingLog) -> LogResponse {
    let mut days: Vec<DayLog> = WEEKDAYS
        .iter()
        .map(|weekday| DayLog {
            weekday: (*weekday).to_string(),
            entries: Vec::new(),
        })
        .collect();

    let mut month_total_miles = 0.0;
    for entry in &log.entries {
        let Ok(date) = NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d") else {
            continue;
        };

        if date.month() == today.month() && date.year() == today.year() {
            month_total_miles += entry.miles;
        }

        let slot = date.weekday().num_days_from_monday() as usize;
        days[slot].entries.push(entry.clone());
    }

    LogResponse {
        month_total_miles,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrainingLog;

    fn log_with(entries: &[(&str, &str, f64)]) -> TrainingLog {
        let mut log = TrainingLog::default();
        for (date, activity, miles) in entries {
            log.create((*date).to_string(), (*activity).to_string(), *miles, false);
        }
        log
    }

    #[test]
    fn groups_every_week_under_the_same_weekday_heading() {
        // Two Mondays three weeks apart plus one Tuesday.
        let log = log_with(&[
            ("2024-07-15", "S", 12.5),
            ("2024-07-22", "L", 90.0),
            ("2024-07-16", "Y", 0.0),
        ]);

        let today = NaiveDate::from_ymd_opt(2024, 7, 20).unwrap();
        let view = build_log_view_at(today, &log);

        assert_eq!(view.days.len(), 7);
        assert_eq!(view.days[0].weekday, "Monday");
        let monday_ids: Vec<i64> = view.days[0].entries.iter().map(|e| e.id).collect();
        assert_eq!(monday_ids, vec![1, 2]);
        assert_eq!(view.days[1].entries.len(), 1);
        assert_eq!(view.days[1].entries[0].activity, "Y");
        for day in &view.days[2..] {
            assert!(day.entries.is_empty());
        }
    }

    #[test]
    fn month_total_requires_matching_month_and_year() {
        let log = log_with(&[
            ("2024-07-15", "S", 12.5),
            ("2024-07-28", "M", 40.0),
            ("2024-06-30", "L", 100.0),
            ("2023-07-10", "XL", 130.0),
        ]);

        let today = NaiveDate::from_ymd_opt(2024, 7, 20).unwrap();
        let view = build_log_view_at(today, &log);

        assert_eq!(view.month_total_miles, 52.5);
    }

    #[test]
    fn out_of_month_entries_still_appear_under_their_weekday() {
        // 2023-07-10 is a Monday but outside the current month.
        let log = log_with(&[("2023-07-10", "XL", 130.0)]);

        let today = NaiveDate::from_ymd_opt(2024, 7, 20).unwrap();
        let view = build_log_view_at(today, &log);

        assert_eq!(view.month_total_miles, 0.0);
        assert_eq!(view.days[0].entries.len(), 1);
        assert_eq!(view.days[0].entries[0].miles, 130.0);
    }

    #[test]
    fn unparseable_dates_are_skipped() {
        let log = log_with(&[("not-a-date", "S", 10.0), ("2024-07-15", "S", 12.5)]);

        let today = NaiveDate::from_ymd_opt(2024, 7, 20).unwrap();
        let view = build_log_view_at(today, &log);

        assert_eq!(view.month_total_miles, 12.5);
        let total: usize = view.days.iter().map(|day| day.entries.len()).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn empty_log_yields_seven_empty_groups_and_zero_total() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 20).unwrap();
        let view = build_log_view_at(today, &TrainingLog::default());

        assert_eq!(view.month_total_miles, 0.0);
        assert_eq!(view.days.len(), 7);
        let names: Vec<&str> = view.days.iter().map(|day| day.weekday.as_str()).collect();
        assert_eq!(names, WEEKDAYS.to_vec());
        assert!(view.days.iter().all(|day| day.entries.is_empty()));
    }
}
