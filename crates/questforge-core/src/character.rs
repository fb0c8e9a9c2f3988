//! Character state and progression arithmetic

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hit points granted at creation
pub const STARTING_HP: u32 = 100;
/// Experience required for the first level-up
pub const STARTING_XP_THRESHOLD: u32 = 100;

/// Character class, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Class {
    Warrior,
    Mage,
    Rogue,
}

impl Class {
    /// Starting attributes for this class: 10 across the board with +5 to
    /// the primary stat
    pub fn base_stats(&self) -> Stats {
        let mut stats = Stats {
            strength: 10,
            intellect: 10,
            dexterity: 10,
        };
        match self {
            Class::Warrior => stats.strength += 5,
            Class::Mage => stats.intellect += 5,
            Class::Rogue => stats.dexterity += 5,
        }
        stats
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Class::Warrior => write!(f, "Warrior"),
            Class::Mage => write!(f, "Mage"),
            Class::Rogue => write!(f, "Rogue"),
        }
    }
}

/// Core attributes; the one matching the class drives damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: u32,
    pub intellect: u32,
    pub dexterity: u32,
}

/// A bounded resource with a current and maximum value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub current: u32,
    pub max: u32,
}

impl Pool {
    /// Create a pool filled to its maximum
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Create an empty pool with the given threshold
    pub fn empty(max: u32) -> Self {
        Self { current: 0, max }
    }
}

/// What one resolved combat round produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestOutcome {
    /// The d20 roll drawn for this round
    pub d20: u32,
    /// Class modifier applied to the roll
    pub modifier: u32,
    /// Total damage dealt to the boss
    pub damage: u32,
    pub xp_gain: u32,
    pub gold_gain: u32,
    /// Whether this round crossed the experience threshold
    pub leveled_up: bool,
}

/// The player character
///
/// Name and class are immutable once set; everything else is mutated only by
/// the transition function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub class: Class,
    pub stats: Stats,
    pub hp: Pool,
    pub xp: Pool,
    pub level: u32,
    pub gold: u32,
    pub time_points: u32,
    /// Item ids in purchase order
    pub inventory: Vec<String>,
}

impl Character {
    /// Create a level-1 character with starting pools and no possessions
    pub fn new(name: impl Into<String>, class: Class, stats: Stats) -> Self {
        Self {
            name: name.into(),
            class,
            stats,
            hp: Pool::full(STARTING_HP),
            xp: Pool::empty(STARTING_XP_THRESHOLD),
            level: 1,
            gold: 0,
            time_points: 0,
            inventory: Vec::new(),
        }
    }

    /// The stat matching this character's class
    pub fn modifier(&self) -> u32 {
        match self.class {
            Class::Warrior => self.stats.strength,
            Class::Mage => self.stats.intellect,
            Class::Rogue => self.stats.dexterity,
        }
    }

    /// Resolve one combat round against a quest of the given difficulty.
    ///
    /// damage = (d20 + class modifier) * difficulty; experience and gold
    /// scale linearly with difficulty. Crossing the experience threshold
    /// levels up: the threshold grows by half (floored), max hp rises by 10
    /// with a full heal, and the primary stat gains +2 while the others
    /// gain +1.
    pub fn resolve_quest(&mut self, difficulty: u8, d20: u32) -> QuestOutcome {
        let modifier = self.modifier();
        let difficulty = u32::from(difficulty);
        let damage = (d20 + modifier) * difficulty;
        let xp_gain = difficulty * 10;
        let gold_gain = difficulty * 5;

        self.gold += gold_gain;

        let total_xp = self.xp.current + xp_gain;
        let leveled_up = total_xp >= self.xp.max;
        if leveled_up {
            self.xp.current = total_xp - self.xp.max;
            self.xp.max = self.xp.max * 3 / 2;
            self.level += 1;
            self.hp.max += 10;
            self.hp.current = self.hp.max;
            self.stats.strength += if self.class == Class::Warrior { 2 } else { 1 };
            self.stats.intellect += if self.class == Class::Mage { 2 } else { 1 };
            self.stats.dexterity += if self.class == Class::Rogue { 2 } else { 1 };
        } else {
            self.xp.current = total_xp;
        }

        QuestOutcome {
            d20,
            modifier,
            damage,
            xp_gain,
            gold_gain,
            leveled_up,
        }
    }
}
