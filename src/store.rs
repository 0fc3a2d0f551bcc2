use crate::models::{Completion, Habit, HabitPatch, NewHabit};
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;

/// In-memory repository for habits and their completions. Owned behind the
/// shared state handle; everything is lost on restart.
#[derive(Debug)]
pub struct Store {
    habits: BTreeMap<i64, Habit>,
    completions: BTreeMap<i64, Completion>,
    next_habit_id: i64,
    next_completion_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            habits: BTreeMap::new(),
            completions: BTreeMap::new(),
            next_habit_id: 1,
            next_completion_id: 1,
        }
    }

    pub fn create_habit(&mut self, draft: NewHabit) -> Habit {
        let id = self.next_habit_id;
        self.next_habit_id += 1;
        let habit = Habit {
            id,
            name: draft.name,
            frequency: draft.frequency,
            reminder_time: draft.reminder_time,
            created_at: Utc::now(),
        };
        self.habits.insert(id, habit.clone());
        habit
    }

    pub fn habit(&self, id: i64) -> Option<&Habit> {
        self.habits.get(&id)
    }

    /// Ids are assigned in increasing order, so map order is insertion order.
    pub fn habits(&self) -> Vec<Habit> {
        self.habits.values().cloned().collect()
    }

    pub fn habit_count(&self) -> usize {
        self.habits.len()
    }

    pub fn update_habit(&mut self, id: i64, patch: HabitPatch) -> Option<Habit> {
        let habit = self.habits.get_mut(&id)?;
        if let Some(name) = patch.name {
            habit.name = name;
        }
        if let Some(frequency) = patch.frequency {
            habit.frequency = frequency;
        }
        if let Some(reminder_time) = patch.reminder_time {
            habit.reminder_time = Some(reminder_time);
        }
        Some(habit.clone())
    }

    /// Removes the habit and every completion referencing it.
    pub fn delete_habit(&mut self, id: i64) -> bool {
        if self.habits.remove(&id).is_none() {
            return false;
        }
        self.completions.retain(|_, completion| completion.habit_id != id);
        true
    }

    /// Idempotent on (habit_id, date): a second create returns the record
    /// stored by the first.
    pub fn create_completion(&mut self, habit_id: i64, date: NaiveDate) -> Completion {
        if let Some(existing) = self
            .completions
            .values()
            .find(|c| c.habit_id == habit_id && c.date == date)
        {
            return existing.clone();
        }

        let id = self.next_completion_id;
        self.next_completion_id += 1;
        let completion = Completion {
            id,
            habit_id,
            date,
            created_at: Utc::now(),
        };
        self.completions.insert(id, completion.clone());
        completion
    }

    pub fn completions(&self) -> Vec<Completion> {
        self.completions.values().cloned().collect()
    }

    pub fn completions_for_habit(&self, habit_id: i64) -> Vec<Completion> {
        self.completions
            .values()
            .filter(|c| c.habit_id == habit_id)
            .cloned()
            .collect()
    }

    pub fn completions_on(&self, date: NaiveDate) -> Vec<Completion> {
        self.completions
            .values()
            .filter(|c| c.date == date)
            .cloned()
            .collect()
    }

    pub fn is_completed(&self, habit_id: i64, date: NaiveDate) -> bool {
        self.completions
            .values()
            .any(|c| c.habit_id == habit_id && c.date == date)
    }

    pub fn delete_completion(&mut self, habit_id: i64, date: NaiveDate) -> bool {
        let found = self
            .completions
            .iter()
            .find(|(_, c)| c.habit_id == habit_id && c.date == date)
            .map(|(id, _)| *id);
        match found {
            Some(id) => {
                self.completions.remove(&id);
                true
            }
            None => false,
        }
    }
}
