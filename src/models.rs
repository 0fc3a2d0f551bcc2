use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: i64,
    pub name: String,
    /// "Daily", "Weekly", or a comma-joined list of weekday abbreviations.
    pub frequency: String,
    pub reminder_time: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// At most one completion exists per (habit, date) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    pub id: i64,
    pub habit_id: i64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHabit {
    pub name: String,
    pub frequency: String,
    #[serde(default)]
    pub reminder_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitPatch {
    pub name: Option<String>,
    pub frequency: Option<String>,
    pub reminder_time: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompletion {
    pub habit_id: i64,
    pub date: String,
}

/// Derived on every request; never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub completion_rate: i64,
    pub completion_rate_change: i64,
    pub current_streak: i64,
    pub longest_streak: i64,
    pub total_completions: i64,
    pub total_completions_change: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayHabit {
    #[serde(flatten)]
    pub habit: Habit,
    pub completed: bool,
}

/// Strict `YYYY-MM-DD` parse: four-two-two digit groups, then a real
/// calendar date. chrono alone would accept unpadded fields.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
