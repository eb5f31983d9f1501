use serde::{Deserialize, Serialize};

/// Activity codes offered by the submission form, in display order.
/// S/M/L/XL are ride lengths; P is strength, A animal flow, Y yoga, R rest.
pub const ACTIVITIES: [&str; 8] = ["S", "M", "L", "XL", "P", "A", "Y", "R"];

/// Weekday headings for the log view, in display order.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingEntry {
    pub id: i64,
    /// Calendar date as `YYYY-MM-DD`; stored as text, parsed only when grouping.
    pub date: String,
    pub activity: String,
    pub miles: f64,
    pub nutrition_goal_met: bool,
}

/// The persisted document: every entry in insertion order plus the last
/// assigned id. Ids are monotonic and never reused, even after deletes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrainingLog {
    pub last_id: i64,
    pub entries: Vec<TrainingEntry>,
}

impl TrainingLog {
    /// Appends a new entry and returns its freshly assigned id. Values are
    /// stored as supplied; the form's input widgets are the only constraint
    /// on `activity` and `miles`.
    pub fn create(
        &mut self,
        date: String,
        activity: String,
        miles: f64,
        nutrition_goal_met: bool,
    ) -> i64 {
        self.last_id += 1;
        let id = self.last_id;
        self.entries.push(TrainingEntry {
            id,
            date,
            activity,
            miles,
            nutrition_goal_met,
        });
        id
    }

    /// Removes the entry with the given id; a no-op when no entry has it.
    pub fn delete(&mut self, id: i64) {
        self.entries.retain(|entry| entry.id != id);
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub date: String,
    pub activity: String,
    pub miles: f64,
    #[serde(default)]
    pub nutrition_goal_met: bool,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<TrainingEntry>,
}

#[derive(Debug, Serialize)]
pub struct DayLog {
    pub weekday: String,
    pub entries: Vec<TrainingEntry>,
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub month_total_miles: f64,
    pub days: Vec<DayLog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_fresh_monotonic_ids() {
        let mut log = TrainingLog::default();
        let first = log.create("2024-07-15".into(), "S".into(), 12.5, true);
        let second = log.create("2024-07-16".into(), "Y".into(), 0.0, false);
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.entries[0].date, "2024-07-15");
        assert_eq!(log.entries[0].activity, "S");
        assert_eq!(log.entries[0].miles, 12.5);
        assert!(log.entries[0].nutrition_goal_met);
    }

    #[test]
    fn deleted_ids_are_never_reassigned() {
        let mut log = TrainingLog::default();
        let first = log.create("2024-07-15".into(), "S".into(), 10.0, false);
        log.delete(first);
        let next = log.create("2024-07-16".into(), "M".into(), 40.0, false);
        assert_eq!(next, first + 1);
    }

    #[test]
    fn delete_is_an_idempotent_no_op_for_unknown_ids() {
        let mut log = TrainingLog::default();
        let id = log.create("2024-07-15".into(), "S".into(), 10.0, false);
        log.delete(id);
        log.delete(id);
        log.delete(999);
        assert!(log.entries.is_empty());
    }

    #[test]
    fn delete_leaves_other_entries_untouched() {
        let mut log = TrainingLog::default();
        let first = log.create("2024-07-15".into(), "S".into(), 12.5, true);
        let second = log.create("2024-07-22".into(), "L".into(), 90.0, false);
        log.delete(first);
        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.entries[0].id, second);
        assert_eq!(log.entries[0].miles, 90.0);
    }
}
