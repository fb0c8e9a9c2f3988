//! Quest (task) data type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest accepted quest difficulty
pub const MIN_DIFFICULTY: u8 = 1;
/// Highest accepted quest difficulty
pub const MAX_DIFFICULTY: u8 = 5;

/// A user-defined task, resolved through simulated combat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Unique within the quest collection
    pub id: String,
    pub title: String,
    /// Difficulty rating in 1..=5, the damage/reward multiplier
    pub difficulty: u8,
    pub due_date: Option<NaiveDate>,
    /// Currently always false: completing a quest removes it instead
    pub completed: bool,
}

impl Quest {
    /// Create a new open quest
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        difficulty: u8,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            difficulty,
            due_date,
            completed: false,
        }
    }

    /// Whether this quest was due strictly before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }
}
