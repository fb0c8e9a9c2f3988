//! The transition function
//!
//! One entry point, `reduce`, applies a single action to the state tree.
//! Each call is atomic from the caller's perspective: no-op paths return
//! before any field is touched, and there is no partial application. Every
//! code path leaves the tree valid; the function never errors.

use crate::{default_rewards, Action, GameState, Item, LogKind};
use chrono::NaiveDate;

/// Boss damage dealt by a completed focus session
pub const FOCUS_DAMAGE: u32 = 50;
/// Gold granted by a completed focus session
pub const FOCUS_GOLD: u32 = 25;
/// Time points granted by a completed focus session
pub const FOCUS_TIME_POINTS: u32 = 25;
/// Hp lost per point of difficulty on each overdue quest
pub const OVERDUE_DAMAGE_PER_DIFFICULTY: u32 = 5;

/// Apply one action to the state
pub fn reduce(state: &mut GameState, action: Action) {
    match action {
        Action::CreateCharacter { name, class, stats } => {
            if state.character.is_some() {
                return;
            }
            state.character = Some(crate::Character::new(name, class, stats));
        }

        Action::AddQuest(quest) => {
            if state.quests.contains_key(&quest.id) {
                return;
            }
            state.quests.insert(quest.id.clone(), quest);
        }

        Action::DeleteQuest { id } => {
            state.quests.shift_remove(&id);
        }

        Action::CompleteQuest { id } => complete_quest(state, &id),

        Action::BuyItem(item) => buy_item(state, item),

        Action::SpendTime { minutes } => spend_time(state, minutes),

        Action::AddReward(reward) => {
            if state.rewards.contains_key(&reward.id) {
                return;
            }
            state.rewards.insert(reward.id.clone(), reward);
        }

        Action::DeleteReward { id } => {
            state.rewards.shift_remove(&id);
        }

        Action::SeedRewards => {
            state.rewards = default_rewards()
                .into_iter()
                .map(|reward| (reward.id.clone(), reward))
                .collect();
        }

        Action::FinishFocus => finish_focus(state),

        Action::CheckPenalties { today } => check_penalties(state, today),

        Action::Restore(snapshot) => *state = *snapshot,
    }
}

/// One combat round: roll, damage the boss, grant rewards, drop the quest.
fn complete_quest(state: &mut GameState, id: &str) {
    if state.character.is_none() {
        return;
    }
    let Some(quest) = state.quests.shift_remove(id) else {
        return;
    };

    let d20 = state.rng.roll_d20();
    let entry_id = state.mint_id();

    let Some(character) = state.character.as_mut() else {
        return;
    };
    let outcome = character.resolve_quest(quest.difficulty, d20);

    state.dungeon.take_damage(outcome.damage);
    state.log.record(
        entry_id,
        format!(
            "Dealt {} DMG! (d20:{} + {}) * {}. +{} XP, +{} Gold.",
            outcome.damage, outcome.d20, outcome.modifier, quest.difficulty, outcome.xp_gain, outcome.gold_gain
        ),
        LogKind::Damage,
    );
}

fn buy_item(state: &mut GameState, item: Item) {
    let Some(character) = state.character.as_mut() else {
        return;
    };
    if character.gold < item.cost {
        return;
    }

    character.gold -= item.cost;
    character.stats.strength += item.effect.strength;
    character.stats.intellect += item.effect.intellect;
    character.stats.dexterity += item.effect.dexterity;
    character.hp.current = (character.hp.current + item.effect.hp).min(character.hp.max);
    character.inventory.push(item.id);

    let entry_id = state.mint_id();
    state
        .log
        .record(entry_id, format!("Bought {}", item.name), LogKind::Info);
}

fn spend_time(state: &mut GameState, minutes: u32) {
    let Some(character) = state.character.as_mut() else {
        return;
    };
    if character.time_points < minutes {
        return;
    }
    character.time_points -= minutes;

    let entry_id = state.mint_id();
    state.log.record(
        entry_id,
        format!("Spent {minutes} minutes on reward."),
        LogKind::Info,
    );
}

fn finish_focus(state: &mut GameState) {
    let Some(character) = state.character.as_mut() else {
        return;
    };
    character.gold += FOCUS_GOLD;
    character.time_points += FOCUS_TIME_POINTS;

    state.dungeon.take_damage(FOCUS_DAMAGE);
    let entry_id = state.mint_id();
    state.log.record(
        entry_id,
        format!(
            "FOCUS SESSION COMPLETE! Dealt {FOCUS_DAMAGE} CRITICAL DMG! \
             +{FOCUS_GOLD} Gold, +{FOCUS_TIME_POINTS} Time Points."
        ),
        LogKind::Damage,
    );
}

/// Sum overdue-quest damage and apply it once per date. Dropping to zero hp
/// additionally costs a tenth of the character's gold.
fn check_penalties(state: &mut GameState, today: NaiveDate) {
    if state.character.is_none() {
        return;
    }
    if state.last_penalty_check == Some(today) {
        return;
    }

    let damage: u32 = state
        .quests
        .values()
        .filter(|quest| quest.is_overdue(today))
        .map(|quest| u32::from(quest.difficulty) * OVERDUE_DAMAGE_PER_DIFFICULTY)
        .sum();
    if damage == 0 {
        return;
    }

    state.last_penalty_check = Some(today);

    let Some(character) = state.character.as_mut() else {
        return;
    };
    let remaining = i64::from(character.hp.current) - i64::from(damage);
    let mut gold_penalty = 0;
    if remaining <= 0 {
        character.hp.current = 0;
        gold_penalty = character.gold / 10;
        character.gold -= gold_penalty;
    } else {
        character.hp.current = remaining as u32;
    }

    let entry_id = state.mint_id();
    let mut message = format!("Overdue quests! Took {damage} damage.");
    if gold_penalty > 0 {
        message.push_str(&format!(" Fainted and lost {gold_penalty} gold."));
    }
    state.log.record(entry_id, message, LogKind::Info);
}
