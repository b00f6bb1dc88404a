//! Longest run of consecutive dates spent among the day's fastest.

use std::collections::HashMap;

use crate::models::StreakRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakState {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Streak state for every user seen so far, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreakTracker {
    usernames: Vec<String>,
    states: HashMap<String, StreakState>,
}

impl StreakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one date whose winners are `winners`.
    pub fn step(mut self, winners: &[String]) -> Self {
        for username in winners {
            match self.states.get_mut(username) {
                Some(state) => state.current_streak += 1,
                None => {
                    self.usernames.push(username.clone());
                    self.states.insert(
                        username.clone(),
                        StreakState {
                            current_streak: 1,
                            longest_streak: 0,
                        },
                    );
                }
            }
        }

        for (username, state) in self.states.iter_mut() {
            if state.current_streak > state.longest_streak {
                state.longest_streak = state.current_streak;
            }
            if !winners.contains(username) {
                state.current_streak = 0;
            }
        }

        self
    }

    pub fn get(&self, username: &str) -> Option<StreakState> {
        self.states.get(username).copied()
    }

    /// Longest streak held by anyone, and everyone who holds it.
    pub fn longest(&self) -> StreakRecord {
        let duration = self
            .states
            .values()
            .map(|state| state.longest_streak)
            .max()
            .unwrap_or(0);

        if duration == 0 {
            return StreakRecord::default();
        }

        let usernames = self
            .usernames
            .iter()
            .filter(|username| {
                self.states
                    .get(*username)
                    .map_or(false, |state| state.longest_streak == duration)
            })
            .cloned()
            .collect();

        StreakRecord {
            duration,
            usernames,
        }
    }
}

/// `best_time_usernames_by_date` must be in chronological order.
pub fn get_longest_streak(best_time_usernames_by_date: &[Vec<String>]) -> StreakRecord {
    best_time_usernames_by_date
        .iter()
        .fold(StreakTracker::new(), |tracker, winners| tracker.step(winners))
        .longest()
}
