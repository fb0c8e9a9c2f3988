//! The dungeon boss, a singleton damage sink

use serde::{Deserialize, Serialize};

/// The active boss. Hp only ever decreases; reaching zero has no terminal
/// behavior yet (a new dungeon would be an extension, not a transition).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
}

impl Dungeon {
    /// Create a boss at full health
    pub fn new(name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            hp: max_hp,
            max_hp,
        }
    }

    /// Reduce boss hp, flooring at zero
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}
