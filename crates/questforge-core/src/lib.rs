//! Questforge Core - deterministic state engine for a productivity RPG
//!
//! This crate provides the state model and transition rules:
//! - The single state tree (`GameState`) holding character, quests, rewards,
//!   combat log, and the active dungeon boss
//! - A tagged action catalogue (`Action`) and the pure transition function
//!   (`reduce`) that applies one action atomically
//! - Deterministic dice (`DiceRng`, serialized with the state so a restored
//!   save continues the same roll sequence)
//! - The focus-session countdown (`focus::FocusTimer`)
//!
//! ## Transition discipline
//!
//! All mutation goes through `reduce`. An action whose precondition fails is
//! a no-op: the function returns before touching the state, so callers can
//! rely on a rejected action leaving the tree bit-for-bit unchanged.

mod action;
mod character;
mod dungeon;
mod error;
pub mod focus;
mod item;
mod log;
mod model;
mod quest;
mod reducer;
mod reward;
mod rng;

pub use action::Action;
pub use character::{Character, Class, Pool, QuestOutcome, Stats, STARTING_HP, STARTING_XP_THRESHOLD};
pub use dungeon::Dungeon;
pub use error::{Error, Result};
pub use focus::{FocusPhase, FocusSignal, FocusTimer};
pub use item::{stock_items, Item, ItemEffect};
pub use log::{AdventureLog, LogEntry, LogKind, MAX_LOG_ENTRIES};
pub use model::{GameState, STARTING_BOSS_HP, STARTING_BOSS_NAME};
pub use quest::{Quest, MAX_DIFFICULTY, MIN_DIFFICULTY};
pub use reducer::{
    reduce, FOCUS_DAMAGE, FOCUS_GOLD, FOCUS_TIME_POINTS, OVERDUE_DAMAGE_PER_DIFFICULTY,
};
pub use reward::{default_rewards, Reward, RewardKind};
pub use rng::DiceRng;
