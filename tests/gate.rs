//! Tests for the severity gate and threshold persistence.

mod common;

use common::BrokenPreferences;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::thread;
use tempfile::TempDir;
use twinlog::prefs::LEVEL_KEY;
use twinlog::{Error, FilePreferences, Level, LevelGate, MemoryPreferences, PreferenceStore};

#[test]
fn fresh_gate_passes_everything() {
    let gate = LevelGate::new(Arc::new(MemoryPreferences::new()));
    for level in Level::all() {
        assert!(gate.should_log(level));
    }
}

#[test]
fn threshold_filters_lower_levels() {
    let gate = LevelGate::new(Arc::new(MemoryPreferences::new()));
    gate.set_threshold(Level::Warn).unwrap();

    assert!(!gate.should_log(Level::Verbose));
    assert!(!gate.should_log(Level::Info));
    assert!(gate.should_log(Level::Warn));
    assert!(gate.should_log(Level::Error));
}

#[test]
fn set_threshold_persists_ordinal() {
    let store = Arc::new(MemoryPreferences::new());
    let gate = LevelGate::new(store.clone());
    gate.set_threshold(Level::Info).unwrap();

    assert_eq!(store.get_int(LEVEL_KEY).unwrap(), Some(2));
    assert_eq!(gate.stored().unwrap(), Some(Level::Info));
    assert_eq!(gate.threshold(), Level::Info);
}

#[test]
fn load_applies_stored_value() {
    let gate = LevelGate::new(Arc::new(MemoryPreferences::with_value(LEVEL_KEY, 4)));
    assert_eq!(gate.current(), Level::Verbose);

    assert_eq!(gate.load().unwrap(), Level::Error);
    assert!(!gate.should_log(Level::Warn));
}

#[test]
fn load_without_stored_value_keeps_default() {
    let gate = LevelGate::new(Arc::new(MemoryPreferences::new()));
    assert_eq!(gate.load().unwrap(), Level::Verbose);
    assert_eq!(gate.stored().unwrap(), None);
    assert_eq!(gate.threshold(), Level::Verbose);
}

#[test]
fn out_of_range_ordinal_is_rejected() {
    let gate = LevelGate::new(Arc::new(MemoryPreferences::with_value(LEVEL_KEY, 9)));

    assert!(matches!(gate.load(), Err(Error::InvalidLevel(_))));
    assert_eq!(gate.current(), Level::Verbose);
    assert_eq!(gate.threshold(), Level::Verbose);
}

#[test]
fn failed_persist_still_applies() {
    let store = Arc::new(BrokenPreferences::default());
    let gate = LevelGate::new(store.clone());

    assert!(gate.set_threshold(Level::Error).is_err());
    assert_eq!(store.puts.load(Ordering::SeqCst), 1);
    assert!(!gate.should_log(Level::Warn));
    assert_eq!(gate.current(), Level::Error);
    // Unreadable store falls back to the in-memory value
    assert_eq!(gate.threshold(), Level::Error);
}

#[test]
fn threshold_survives_restart_via_file_store() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("prefs").join("app_log_pref.toml");

    let first = LevelGate::new(Arc::new(FilePreferences::new(&path)));
    first.set_threshold(Level::Warn).unwrap();
    drop(first);

    let second = LevelGate::new(Arc::new(FilePreferences::new(&path)));
    assert_eq!(second.load().unwrap(), Level::Warn);
    assert!(!second.should_log(Level::Info));
}

#[test]
fn concurrent_setters_leave_store_and_memory_in_agreement() {
    let store = Arc::new(MemoryPreferences::new());
    let gate = Arc::new(LevelGate::new(store.clone()));

    let handles: Vec<_> = Level::all()
        .into_iter()
        .map(|level| {
            let gate = Arc::clone(&gate);
            thread::spawn(move || {
                for _ in 0..100 {
                    gate.set_threshold(level).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let stored = store.get_int(LEVEL_KEY).unwrap().unwrap();
    assert_eq!(stored, i64::from(gate.current().ordinal()));
}
