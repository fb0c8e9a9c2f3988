//! The game state tree

use crate::{default_rewards, AdventureLog, Character, DiceRng, Dungeon, Quest, Reward};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Boss hp for a fresh state
pub const STARTING_BOSS_HP: u32 = 1000;
/// Boss name for a fresh state
pub const STARTING_BOSS_NAME: &str = "Daily Dungeon";

/// The complete game state
///
/// Everything the engine persists lives here, including the dice state and
/// the id counter, so a restored snapshot behaves identically to the session
/// it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The player character, absent until created
    pub character: Option<Character>,
    /// Open quests by id, insertion order preserved
    pub quests: IndexMap<String, Quest>,
    /// Rewards by id, insertion order preserved
    pub rewards: IndexMap<String, Reward>,
    /// Bounded combat/info log, newest first
    pub log: AdventureLog,
    /// The active boss
    pub dungeon: Dungeon,
    /// Deterministic dice, serialized so rolls survive a reload
    pub rng: DiceRng,
    /// Monotonic id source for quests, rewards, and log entries
    next_id: u64,
    /// Date the overdue-penalty sweep last ran for
    pub last_penalty_check: Option<NaiveDate>,
}

impl GameState {
    /// Create a fresh state: no character, default rewards, full boss
    pub fn new() -> Self {
        Self::with_rng(DiceRng::default())
    }

    /// Create a fresh state with a specific dice seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(DiceRng::new(seed))
    }

    fn with_rng(rng: DiceRng) -> Self {
        Self {
            character: None,
            quests: IndexMap::new(),
            rewards: default_rewards()
                .into_iter()
                .map(|reward| (reward.id.clone(), reward))
                .collect(),
            log: AdventureLog::new(),
            dungeon: Dungeon::new(STARTING_BOSS_NAME, STARTING_BOSS_HP),
            rng,
            next_id: 1,
            last_penalty_check: None,
        }
    }

    /// Allocate the next unique id. Ids are never reused within a save,
    /// including across reloads.
    pub fn mint_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn has_character(&self) -> bool {
        self.character.is_some()
    }

    /// Look up a quest by id
    pub fn quest(&self, id: &str) -> Option<&Quest> {
        self.quests.get(id)
    }

    /// Look up a reward by id
    pub fn reward(&self, id: &str) -> Option<&Reward> {
        self.rewards.get(id)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = GameState::new();

        assert!(state.character.is_none());
        assert!(state.quests.is_empty());
        assert_eq!(state.rewards.len(), 2);
        assert!(state.reward("netflix").is_some());
        assert!(state.reward("game").is_some());
        assert!(state.log.is_empty());
        assert_eq!(state.dungeon.hp, STARTING_BOSS_HP);
        assert_eq!(state.dungeon.name, STARTING_BOSS_NAME);
        assert!(state.last_penalty_check.is_none());
    }

    #[test]
    fn test_mint_id_monotonic() {
        let mut state = GameState::new();

        let a = state.mint_id();
        let b = state.mint_id();
        let c = state.mint_id();

        assert!(a < b && b < c);
    }
}
