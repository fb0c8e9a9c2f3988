//! Session lifecycle tests: dispatch-then-persist, restore, migration,
//! and the deferred penalty sweep.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::NaiveDate;
use questforge_core::{Action, Class, FocusTimer, GameState, LogKind, Quest};
use questforge_store::{SinkError, SnapshotSink, Store};

/// In-memory sink that counts writes, standing in for the key-value backend
#[derive(Clone, Default)]
struct MemorySink {
    slot: Rc<RefCell<Option<GameState>>>,
    saves: Rc<Cell<usize>>,
}

impl MemorySink {
    fn new() -> Self {
        Self::default()
    }

    fn preloaded(state: GameState) -> Self {
        let sink = Self::new();
        *sink.slot.borrow_mut() = Some(state);
        sink
    }
}

impl SnapshotSink for MemorySink {
    fn save(&self, state: &GameState) -> Result<(), SinkError> {
        *self.slot.borrow_mut() = Some(state.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn load(&self) -> Result<Option<GameState>, SinkError> {
        Ok(self.slot.borrow().clone())
    }
}

/// Sink whose reads and writes always fail
struct BrokenSink;

impl SnapshotSink for BrokenSink {
    fn save(&self, _state: &GameState) -> Result<(), SinkError> {
        Err("disk on fire".into())
    }

    fn load(&self) -> Result<Option<GameState>, SinkError> {
        Err("disk on fire".into())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn every_transition_is_persisted() {
    let sink = MemorySink::new();
    let mut store = Store::with_seed(7);
    store.attach_sink(Box::new(sink.clone()));

    store.create_character("Aria", Class::Warrior).unwrap();
    store.add_quest("Write report", 3, None).unwrap();
    store.dispatch(Action::FinishFocus);

    assert_eq!(sink.saves.get(), 3);
    let saved = sink.slot.borrow().clone().unwrap();
    assert_eq!(&saved, store.state());
}

#[test]
fn restore_from_empty_sink_starts_fresh() {
    let store = Store::restore_from(Box::new(MemorySink::new()), date(2024, 5, 10));

    assert!(!store.state().has_character());
    assert_eq!(store.state().rewards.len(), 2);
}

#[test]
fn restore_from_failing_sink_starts_fresh() {
    let store = Store::restore_from(Box::new(BrokenSink), date(2024, 5, 10));

    assert!(!store.state().has_character());
    assert_eq!(store.state().rewards.len(), 2);
}

#[test]
fn dispatch_survives_failing_sink() {
    let mut store = Store::with_seed(7);
    store.attach_sink(Box::new(BrokenSink));

    // the write failure is swallowed; the transition still happens
    store.create_character("Aria", Class::Warrior).unwrap();
    assert!(store.state().has_character());
}

#[test]
fn restore_resumes_the_previous_session() {
    let sink = MemorySink::new();
    {
        let mut store = Store::with_seed(7);
        store.attach_sink(Box::new(sink.clone()));
        store.create_character("Aria", Class::Warrior).unwrap();
        store.add_quest("Write report", 3, None).unwrap();
    }

    let restored = Store::restore_from(Box::new(sink.clone()), date(2024, 5, 10));

    assert_eq!(
        restored.state().character.as_ref().map(|c| c.name.as_str()),
        Some("Aria")
    );
    assert_eq!(restored.state().quests.len(), 1);
}

#[test]
fn restore_seeds_rewards_when_save_predates_them() {
    let mut old_save = GameState::with_seed(7);
    old_save.character = Some(questforge_core::Character::new(
        "Aria",
        Class::Warrior,
        Class::Warrior.base_stats(),
    ));
    old_save.rewards.clear();

    let store = Store::restore_from(Box::new(MemorySink::preloaded(old_save)), date(2024, 5, 10));

    assert_eq!(store.state().rewards.len(), 2);
    assert!(store.state().reward("netflix").is_some());
}

#[test]
fn penalty_sweep_is_deferred_until_the_first_tick() {
    let mut old_save = GameState::with_seed(7);
    old_save.character = Some(questforge_core::Character::new(
        "Aria",
        Class::Warrior,
        Class::Warrior.base_stats(),
    ));
    old_save.quests.insert(
        "1".to_string(),
        Quest::new("1", "Overdue already", 4, Some(date(2024, 5, 1))),
    );

    let mut store =
        Store::restore_from(Box::new(MemorySink::preloaded(old_save)), date(2024, 5, 10));

    // nothing applied during load
    assert_eq!(store.state().character.as_ref().unwrap().hp.current, 100);

    store.tick();

    let character = store.state().character.as_ref().unwrap();
    assert_eq!(character.hp.current, 80);
    assert_eq!(store.state().log.latest().map(|e| e.kind), Some(LogKind::Info));

    // the sweep does not repeat on later ticks
    store.tick();
    assert_eq!(store.state().character.as_ref().unwrap().hp.current, 80);
}

#[test]
fn no_penalty_sweep_without_a_character() {
    let mut old_save = GameState::with_seed(7);
    old_save.quests.insert(
        "1".to_string(),
        Quest::new("1", "Overdue already", 4, Some(date(2024, 5, 1))),
    );

    let mut store =
        Store::restore_from(Box::new(MemorySink::preloaded(old_save)), date(2024, 5, 10));
    store.tick();

    assert!(store.state().log.is_empty());
}

#[test]
fn focus_timer_completion_maps_to_one_dispatch() {
    let sink = MemorySink::new();
    let mut store = Store::with_seed(7);
    store.attach_sink(Box::new(sink));
    store.create_character("Aria", Class::Warrior).unwrap();

    let mut timer = FocusTimer::with_duration(3);
    timer.resume();
    for _ in 0..10 {
        if timer.tick().is_some() {
            store.dispatch(Action::FinishFocus);
        }
    }

    let character = store.state().character.as_ref().unwrap();
    assert_eq!(character.gold, 25);
    assert_eq!(character.time_points, 25);
}

#[test]
fn full_session_scenario() {
    let sink = MemorySink::new();
    let mut store = Store::with_seed(42);
    store.attach_sink(Box::new(sink.clone()));

    store.create_character("Aria", Class::Warrior).unwrap();
    let quest_id = store.add_quest("Write report", 3, None).unwrap();

    let boss_before = store.state().dungeon.hp;
    store.dispatch(Action::complete_quest(quest_id));

    let state = store.state();
    assert!(state.quests.is_empty());
    assert!(state.dungeon.hp < boss_before);
    assert_eq!(state.character.as_ref().unwrap().gold, 15);
    assert_eq!(state.character.as_ref().unwrap().xp.current, 30);

    // the persisted snapshot is the live one
    let saved = sink.slot.borrow().clone().unwrap();
    assert_eq!(&saved, store.state());

    // and a restore round-trips it exactly
    let restored = Store::restore_from(Box::new(sink), date(2024, 5, 10));
    assert_eq!(restored.state(), store.state());
}
