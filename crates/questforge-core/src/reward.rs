//! Custom rewards redeemable with time points

use serde::{Deserialize, Serialize};

/// What a reward is paid with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RewardKind {
    /// Costs minutes of earned focus time
    #[default]
    Time,
}

/// A user-defined reward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// Unique within the reward collection
    pub id: String,
    pub name: String,
    /// Cost in minutes
    pub cost: u32,
    pub kind: RewardKind,
}

impl Reward {
    /// Create a time-cost reward
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            kind: RewardKind::Time,
        }
    }
}

/// The two rewards seeded into a fresh state (and re-seeded when a restored
/// save predates the rewards collection)
pub fn default_rewards() -> [Reward; 2] {
    [
        Reward::new("netflix", "1 Episode of Netflix", 30),
        Reward::new("game", "30min Gaming", 30),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rewards() {
        let rewards = default_rewards();
        assert_eq!(rewards.len(), 2);
        assert_eq!(rewards[0].id, "netflix");
        assert_eq!(rewards[1].id, "game");
        assert!(rewards.iter().all(|r| r.cost == 30));
    }
}
