use crate::models::{Completion, Stats};
use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeSet;

/// Per-habit streak walks stop after this many days.
const STREAK_SCAN_LIMIT: i64 = 100;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn build_stats(habit_count: usize, completions: &[Completion]) -> Stats {
    build_stats_at(today(), habit_count, completions)
}

pub fn build_stats_at(today: NaiveDate, habit_count: usize, completions: &[Completion]) -> Stats {
    let recent_start = today - Duration::days(29);
    let previous_start = today - Duration::days(59);

    let recent = completions
        .iter()
        .filter(|c| c.date >= recent_start && c.date <= today)
        .count();
    let previous = completions
        .iter()
        .filter(|c| c.date >= previous_start && c.date < recent_start)
        .count();

    // One expected completion per habit per day over the window.
    let possible = habit_count * 30;
    let rate = percent(recent, possible);
    let previous_rate = percent(previous, possible);

    // A day counts toward the dashboard streaks if any habit was done.
    let days: BTreeSet<NaiveDate> = completions.iter().map(|c| c.date).collect();

    Stats {
        completion_rate: rate,
        completion_rate_change: rate - previous_rate,
        current_streak: current_run(today, &days),
        longest_streak: longest_run(&days),
        total_completions: recent as i64,
        total_completions_change: recent as i64 - previous as i64,
    }
}

pub fn habit_current_streak(habit_id: i64, completions: &[Completion]) -> i64 {
    habit_current_streak_at(today(), habit_id, completions)
}

/// Streak is zero unless the habit was completed today; otherwise walk
/// backward one calendar day at a time until the first gap, capped at
/// [`STREAK_SCAN_LIMIT`] days.
pub fn habit_current_streak_at(
    today: NaiveDate,
    habit_id: i64,
    completions: &[Completion],
) -> i64 {
    let days: BTreeSet<NaiveDate> = completions
        .iter()
        .filter(|c| c.habit_id == habit_id)
        .map(|c| c.date)
        .collect();
    if !days.contains(&today) {
        return 0;
    }

    let mut streak = 1;
    let mut date = today - Duration::days(1);
    while streak < STREAK_SCAN_LIMIT && days.contains(&date) {
        streak += 1;
        date -= Duration::days(1);
    }
    streak
}

pub fn habit_weekly_progress(habit_id: i64, completions: &[Completion]) -> i64 {
    habit_weekly_progress_at(today(), habit_id, completions)
}

/// Share of the trailing 7 days (today and the 6 before) with a completion,
/// rounded to the nearest percent. The habit's declared frequency is
/// deliberately not consulted; every habit is scored on a daily cadence.
pub fn habit_weekly_progress_at(
    today: NaiveDate,
    habit_id: i64,
    completions: &[Completion],
) -> i64 {
    let window_start = today - Duration::days(6);
    let done: BTreeSet<NaiveDate> = completions
        .iter()
        .filter(|c| c.habit_id == habit_id && c.date >= window_start && c.date <= today)
        .map(|c| c.date)
        .collect();
    ((done.len() as f64 / 7.0) * 100.0).round() as i64
}

pub fn last_completed_text(habit_id: i64, completions: &[Completion]) -> String {
    last_completed_text_at(today(), habit_id, completions)
}

pub fn last_completed_text_at(
    today: NaiveDate,
    habit_id: i64,
    completions: &[Completion],
) -> String {
    let latest = completions
        .iter()
        .filter(|c| c.habit_id == habit_id)
        .map(|c| c.date)
        .max();
    match latest {
        None => "Never".to_string(),
        Some(date) if date == today => "Today".to_string(),
        Some(date) if date == today - Duration::days(1) => "Yesterday".to_string(),
        Some(date) => format!("{} days ago", (today - date).num_days()),
    }
}

pub fn is_completed_on(date: NaiveDate, habit_id: i64, completions: &[Completion]) -> bool {
    completions
        .iter()
        .any(|c| c.habit_id == habit_id && c.date == date)
}

fn percent(count: usize, possible: usize) -> i64 {
    if possible == 0 {
        return 0;
    }
    ((count as f64 / possible as f64) * 100.0).round() as i64
}

fn current_run(today: NaiveDate, days: &BTreeSet<NaiveDate>) -> i64 {
    if !days.contains(&today) {
        return 0;
    }
    let mut streak = 1;
    let mut date = today - Duration::days(1);
    while days.contains(&date) {
        streak += 1;
        date -= Duration::days(1);
    }
    streak
}

/// Longest consecutive-day run anywhere in history. The set iterates in
/// ascending date order, so a single pass suffices.
fn longest_run(days: &BTreeSet<NaiveDate>) -> i64 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;
    for &date in days {
        run = match previous {
            Some(p) if date == p + Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(date);
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn completion(habit_id: i64, date: NaiveDate) -> Completion {
        Completion {
            id: 0,
            habit_id,
            date,
            created_at: Utc::now(),
        }
    }

    fn on_days(habit_id: i64, today: NaiveDate, offsets: &[i64]) -> Vec<Completion> {
        offsets
            .iter()
            .map(|&offset| completion(habit_id, today - Duration::days(offset)))
            .collect()
    }

    fn base_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn streak_is_zero_without_completions() {
        assert_eq!(habit_current_streak_at(base_day(), 1, &[]), 0);
    }

    #[test]
    fn streak_is_zero_when_latest_completion_is_not_today() {
        let today = base_day();
        let completions = on_days(1, today, &[1, 2, 3]);
        assert_eq!(habit_current_streak_at(today, 1, &completions), 0);
    }

    #[test]
    fn streak_counts_consecutive_days_up_to_first_gap() {
        let today = base_day();
        let completions = on_days(1, today, &[0, 1, 2, 4, 5]);
        assert_eq!(habit_current_streak_at(today, 1, &completions), 3);
    }

    #[test]
    fn streak_stops_at_gap_directly_before_today() {
        let today = base_day();
        let completions = on_days(1, today, &[0, 2]);
        assert_eq!(habit_current_streak_at(today, 1, &completions), 1);
    }

    #[test]
    fn streak_ignores_other_habits() {
        let today = base_day();
        let mut completions = on_days(1, today, &[0]);
        completions.extend(on_days(2, today, &[1, 2]));
        assert_eq!(habit_current_streak_at(today, 1, &completions), 1);
    }

    #[test]
    fn streak_walk_is_capped() {
        let today = base_day();
        let offsets: Vec<i64> = (0..200).collect();
        let completions = on_days(1, today, &offsets);
        assert_eq!(habit_current_streak_at(today, 1, &completions), 100);
    }

    #[test]
    fn weekly_progress_full_empty_and_partial() {
        let today = base_day();
        let all: Vec<i64> = (0..7).collect();
        assert_eq!(habit_weekly_progress_at(today, 1, &on_days(1, today, &all)), 100);
        assert_eq!(habit_weekly_progress_at(today, 1, &[]), 0);
        assert_eq!(
            habit_weekly_progress_at(today, 1, &on_days(1, today, &[0, 2, 4])),
            43
        );
    }

    #[test]
    fn weekly_progress_ignores_days_outside_window() {
        let today = base_day();
        let completions = on_days(1, today, &[7, 8, 9]);
        assert_eq!(habit_weekly_progress_at(today, 1, &completions), 0);
    }

    #[test]
    fn completion_rate_is_zero_with_no_habits() {
        let today = base_day();
        let completions = on_days(1, today, &[0, 1, 2]);
        let stats = build_stats_at(today, 0, &completions);
        assert_eq!(stats.completion_rate, 0);
        assert_eq!(stats.completion_rate_change, 0);
    }

    #[test]
    fn completion_rate_counts_the_last_thirty_days() {
        let today = base_day();
        // 15 of the 30 possible days for one habit, plus one just outside.
        let mut offsets: Vec<i64> = (0..15).collect();
        offsets.push(30);
        let completions = on_days(1, today, &offsets);
        let stats = build_stats_at(today, 1, &completions);
        assert_eq!(stats.completion_rate, 50);
        assert_eq!(stats.total_completions, 15);
    }

    #[test]
    fn rate_change_compares_against_previous_window() {
        let today = base_day();
        // 9 recent days, 3 in the window before that.
        let mut offsets: Vec<i64> = (0..9).collect();
        offsets.extend([30, 31, 32]);
        let completions = on_days(1, today, &offsets);
        let stats = build_stats_at(today, 1, &completions);
        assert_eq!(stats.completion_rate, 30);
        assert_eq!(stats.completion_rate_change, 20);
        assert_eq!(stats.total_completions, 9);
        assert_eq!(stats.total_completions_change, 6);
    }

    #[test]
    fn dashboard_streak_unions_all_habits() {
        let today = base_day();
        let mut completions = on_days(1, today, &[0, 2]);
        completions.extend(on_days(2, today, &[1]));
        let stats = build_stats_at(today, 2, &completions);
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn longest_streak_scans_full_history() {
        let today = base_day();
        // A current run of 2 and an older run of 4.
        let completions = on_days(1, today, &[0, 1, 10, 11, 12, 13]);
        let stats = build_stats_at(today, 1, &completions);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.longest_streak, 4);
    }

    #[test]
    fn longest_streak_is_zero_on_empty_history() {
        let stats = build_stats_at(base_day(), 1, &[]);
        assert_eq!(stats.longest_streak, 0);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn last_completed_text_variants() {
        let today = base_day();
        assert_eq!(last_completed_text_at(today, 1, &[]), "Never");
        assert_eq!(
            last_completed_text_at(today, 1, &on_days(1, today, &[0, 3])),
            "Today"
        );
        assert_eq!(
            last_completed_text_at(today, 1, &on_days(1, today, &[1])),
            "Yesterday"
        );
        assert_eq!(
            last_completed_text_at(today, 1, &on_days(1, today, &[5])),
            "5 days ago"
        );
    }
}
