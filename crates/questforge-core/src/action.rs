//! The action catalogue

use crate::{Class, GameState, Item, Quest, Reward, Stats};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dispatchable action
///
/// Every variant carries its full payload; the transition function treats an
/// action whose precondition fails as a no-op. `CheckPenalties` carries the
/// reference date instead of reading a clock, keeping the reducer pure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Install a new character; ignored if one already exists
    CreateCharacter {
        name: String,
        class: Class,
        stats: Stats,
    },
    /// Append a quest; ignored if the id is already taken
    AddQuest(Quest),
    /// Remove a quest; ignored if absent
    DeleteQuest { id: String },
    /// Resolve a quest through one combat round
    CompleteQuest { id: String },
    /// Purchase an item with gold
    BuyItem(Item),
    /// Redeem earned focus minutes
    SpendTime { minutes: u32 },
    /// Append a reward; ignored if the id is already taken
    AddReward(Reward),
    /// Remove a reward; ignored if absent
    DeleteReward { id: String },
    /// (Re)install the default rewards, used when migrating old saves
    SeedRewards,
    /// A focus session ran to completion
    FinishFocus,
    /// Sweep overdue quests for penalties, at most once per date
    CheckPenalties { today: NaiveDate },
    /// Replace the entire state with a loaded snapshot
    Restore(Box<GameState>),
}

impl Action {
    /// Character creation with class-derived starting stats
    pub fn create_character(name: impl Into<String>, class: Class) -> Self {
        Action::CreateCharacter {
            name: name.into(),
            stats: class.base_stats(),
            class,
        }
    }

    pub fn delete_quest(id: impl Into<String>) -> Self {
        Action::DeleteQuest { id: id.into() }
    }

    pub fn complete_quest(id: impl Into<String>) -> Self {
        Action::CompleteQuest { id: id.into() }
    }

    pub fn delete_reward(id: impl Into<String>) -> Self {
        Action::DeleteReward { id: id.into() }
    }

    pub fn check_penalties(today: NaiveDate) -> Self {
        Action::CheckPenalties { today }
    }

    pub fn restore(snapshot: GameState) -> Self {
        Action::Restore(Box::new(snapshot))
    }
}
