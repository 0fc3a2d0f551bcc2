//! Synchronizing API client with an optimistic local cache.
//!
//! Each mutation follows the same lifecycle: snapshot the affected caches,
//! apply the optimistic patch locally, issue the real request, then either
//! re-fetch from the server (which is authoritative) or restore the snapshot
//! and queue a user-visible notice. The outcome is reported as
//! [`MutationOutcome`].

use crate::models::{Completion, Habit, NewHabit, Stats};
use crate::stats;
use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;

/// Terminal state of an optimistic mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The server accepted the request; caches were re-fetched and now hold
    /// server truth.
    Reconciled,
    /// The request failed; the optimistic guess was rolled back and a notice
    /// was queued.
    Reverted,
}

pub struct SyncClient {
    http: reqwest::Client,
    base_url: String,
    habits: Vec<Habit>,
    completions: Vec<Completion>,
    stats: Stats,
    notices: Vec<String>,
}

impl SyncClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            habits: Vec::new(),
            completions: Vec::new(),
            stats: Stats::default(),
            notices: Vec::new(),
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Drains queued user-visible error notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    pub async fn refresh_all(&mut self) -> Result<(), reqwest::Error> {
        self.refresh_habits().await?;
        self.refresh_completions().await?;
        self.refresh_stats().await
    }

    pub async fn refresh_habits(&mut self) -> Result<(), reqwest::Error> {
        self.habits = self.fetch_json("/api/habits").await?;
        Ok(())
    }

    pub async fn refresh_completions(&mut self) -> Result<(), reqwest::Error> {
        self.completions = self.fetch_json("/api/completions").await?;
        Ok(())
    }

    pub async fn refresh_stats(&mut self) -> Result<(), reqwest::Error> {
        self.stats = self.fetch_json("/api/stats").await?;
        Ok(())
    }

    /// Marks or unmarks a habit for a date. The completions cache and the
    /// stats snapshot change immediately; the server catches up afterwards.
    pub async fn toggle_completion(
        &mut self,
        habit_id: i64,
        date: NaiveDate,
        completed: bool,
    ) -> MutationOutcome {
        let saved_completions = self.completions.clone();
        let saved_stats = self.stats.clone();

        if completed {
            let exists = self
                .completions
                .iter()
                .any(|c| c.habit_id == habit_id && c.date == date);
            if !exists {
                // Provisional id; the reconcile fetch replaces the record.
                let id = self.completions.iter().map(|c| c.id).max().unwrap_or(0) + 1;
                self.completions.push(Completion {
                    id,
                    habit_id,
                    date,
                    created_at: Utc::now(),
                });
                self.stats.total_completions += 1;
            }
        } else {
            self.completions
                .retain(|c| !(c.habit_id == habit_id && c.date == date));
            self.stats.total_completions = (self.stats.total_completions - 1).max(0);
        }

        let result = if completed {
            self.http
                .post(format!("{}/api/completions", self.base_url))
                .json(&serde_json::json!({ "habitId": habit_id, "date": date }))
                .send()
                .await
                .and_then(|response| response.error_for_status())
        } else {
            self.http
                .delete(format!(
                    "{}/api/completions/{habit_id}/{date}",
                    self.base_url
                ))
                .send()
                .await
                .and_then(|response| response.error_for_status())
        };

        match result {
            Ok(_) => {
                let _ = self.refresh_completions().await;
                let _ = self.refresh_stats().await;
                MutationOutcome::Reconciled
            }
            Err(err) => {
                self.completions = saved_completions;
                self.stats = saved_stats;
                let _ = self.refresh_completions().await;
                let _ = self.refresh_stats().await;
                self.notices.push(format!("Failed to update habit: {err}"));
                MutationOutcome::Reverted
            }
        }
    }

    pub async fn add_habit(&mut self, draft: NewHabit) -> MutationOutcome {
        let saved_habits = self.habits.clone();

        let provisional_id = self.habits.iter().map(|h| h.id).max().unwrap_or(0) + 1;
        self.habits.push(Habit {
            id: provisional_id,
            name: draft.name.clone(),
            frequency: draft.frequency.clone(),
            reminder_time: draft.reminder_time.clone(),
            created_at: Utc::now(),
        });

        let result = self
            .http
            .post(format!("{}/api/habits", self.base_url))
            .json(&draft)
            .send()
            .await
            .and_then(|response| response.error_for_status());

        let created = match result {
            Ok(response) => response.json::<Habit>().await,
            Err(err) => Err(err),
        };

        match created {
            Ok(habit) => {
                // Swap the provisional entry for the server record, then let
                // the refetch settle anything else.
                if let Some(slot) = self.habits.iter_mut().find(|h| h.id == provisional_id) {
                    *slot = habit;
                }
                let _ = self.refresh_habits().await;
                let _ = self.refresh_stats().await;
                MutationOutcome::Reconciled
            }
            Err(err) => {
                self.habits = saved_habits;
                let _ = self.refresh_habits().await;
                self.notices.push(format!("Failed to add habit: {err}"));
                MutationOutcome::Reverted
            }
        }
    }

    /// Deleting a habit also drops its cached completions, mirroring the
    /// server-side cascade.
    pub async fn delete_habit(&mut self, habit_id: i64) -> MutationOutcome {
        let saved_habits = self.habits.clone();
        let saved_completions = self.completions.clone();

        self.habits.retain(|h| h.id != habit_id);
        self.completions.retain(|c| c.habit_id != habit_id);

        let result = self
            .http
            .delete(format!("{}/api/habits/{habit_id}", self.base_url))
            .send()
            .await
            .and_then(|response| response.error_for_status());

        match result {
            Ok(_) => {
                let _ = self.refresh_habits().await;
                let _ = self.refresh_completions().await;
                let _ = self.refresh_stats().await;
                MutationOutcome::Reconciled
            }
            Err(err) => {
                self.habits = saved_habits;
                self.completions = saved_completions;
                let _ = self.refresh_habits().await;
                let _ = self.refresh_completions().await;
                self.notices.push(format!("Failed to delete habit: {err}"));
                MutationOutcome::Reverted
            }
        }
    }

    pub fn is_completed_today(&self, habit_id: i64) -> bool {
        stats::is_completed_on(stats::today(), habit_id, &self.completions)
    }

    pub fn habit_current_streak(&self, habit_id: i64) -> i64 {
        stats::habit_current_streak(habit_id, &self.completions)
    }

    pub fn habit_weekly_progress(&self, habit_id: i64) -> i64 {
        stats::habit_weekly_progress(habit_id, &self.completions)
    }

    pub fn last_completed_text(&self, habit_id: i64) -> String {
        stats::last_completed_text(habit_id, &self.completions)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, reqwest::Error> {
        self.http
            .get(format!("{}{path}", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
