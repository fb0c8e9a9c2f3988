//! Shop items and their effects

use serde::{Deserialize, Serialize};

/// Stat and hp deltas applied when an item is bought
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ItemEffect {
    pub strength: u32,
    pub intellect: u32,
    pub dexterity: u32,
    /// Healing, clamped to max hp on application
    pub hp: u32,
}

/// A purchasable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Gold cost
    pub cost: u32,
    pub effect: ItemEffect,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: u32, effect: ItemEffect) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            effect,
        }
    }
}

/// The stock marketplace catalogue. `BuyItem` accepts any item payload; this
/// is data for callers, not a restriction in the engine.
pub fn stock_items() -> Vec<Item> {
    vec![
        Item::new(
            "potion",
            "Health Potion",
            50,
            ItemEffect {
                hp: 50,
                ..ItemEffect::default()
            },
        ),
        Item::new(
            "sword",
            "Steel Sword",
            100,
            ItemEffect {
                strength: 2,
                ..ItemEffect::default()
            },
        ),
        Item::new(
            "staff",
            "Arcane Staff",
            100,
            ItemEffect {
                intellect: 2,
                ..ItemEffect::default()
            },
        ),
        Item::new(
            "dagger",
            "Shadow Dagger",
            100,
            ItemEffect {
                dexterity: 2,
                ..ItemEffect::default()
            },
        ),
    ]
}
