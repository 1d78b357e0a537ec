//! Tests for log level functionality.

use twinlog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Verbose < Level::Debug);
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
}

#[test]
fn level_display() {
    assert_eq!(Level::Verbose.to_string(), "verbose");
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
}

#[test]
fn level_from_str() {
    assert_eq!("verbose".parse::<Level>().unwrap(), Level::Verbose);
    assert_eq!("trace".parse::<Level>().unwrap(), Level::Verbose);
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("e".parse::<Level>().unwrap(), Level::Error);
}

#[test]
fn level_from_str_invalid() {
    let err = "loud".parse::<Level>().unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: 'loud'");
}

#[test]
fn level_default_is_most_permissive() {
    assert_eq!(Level::default(), Level::Verbose);
}

#[test]
fn ordinals_are_stable() {
    let ordinals: Vec<u8> = Level::all().iter().map(|l| l.ordinal()).collect();
    assert_eq!(ordinals, [0, 1, 2, 3, 4]);
}

#[test]
fn ordinal_round_trips_and_rejects_unknown() {
    for level in Level::all() {
        assert_eq!(Level::from_ordinal(i64::from(level.ordinal())), Some(level));
    }
    assert_eq!(Level::from_ordinal(-1), None);
    assert_eq!(Level::from_ordinal(5), None);
}
