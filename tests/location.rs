//! Tests for log directory resolution.

use std::path::PathBuf;
use twinlog::LogLocation;

#[test]
fn explicit_directory_wins() {
    let location = LogLocation {
        directory: Some(PathBuf::from("/var/log/custom")),
        base_dir: Some("/ignored".to_string()),
        app_name: Some("ignored".to_string()),
    };
    assert_eq!(location.resolve().unwrap(), PathBuf::from("/var/log/custom"));
}

#[test]
fn base_dir_and_app_name() {
    let location = LogLocation {
        base_dir: Some("/srv/logs".to_string()),
        app_name: Some("myapp".to_string()),
        ..LogLocation::default()
    };
    assert_eq!(location.resolve().unwrap(), PathBuf::from("/srv/logs/myapp"));
}

#[test]
fn app_name_is_one_path_component() {
    let location = LogLocation {
        base_dir: Some("/srv/logs".to_string()),
        app_name: Some("acme/widget:pro".to_string()),
        ..LogLocation::default()
    };
    assert_eq!(
        location.resolve().unwrap(),
        PathBuf::from("/srv/logs/acme_widget_pro")
    );
}

#[test]
fn blank_app_name_falls_back_to_executable() {
    let location = LogLocation {
        base_dir: Some("/srv/logs".to_string()),
        app_name: Some("   ".to_string()),
        ..LogLocation::default()
    };
    let dir = location.resolve().unwrap();
    assert_eq!(dir.parent().unwrap(), PathBuf::from("/srv/logs"));
    let name = dir.file_name().unwrap().to_string_lossy().into_owned();
    assert!(!name.trim().is_empty());
    assert_eq!(Some(name), twinlog::location::discover_app_name());
}

#[test]
fn tilde_in_base_dir_is_expanded() {
    let location = LogLocation {
        base_dir: Some("~/logs".to_string()),
        app_name: Some("myapp".to_string()),
        ..LogLocation::default()
    };
    let dir = location.resolve().unwrap();
    assert!(!dir.to_string_lossy().contains('~'));
    assert!(dir.ends_with("logs/myapp"));
}

#[test]
fn directory_shorthand() {
    let location = LogLocation::directory("/tmp/x");
    assert_eq!(location.directory, Some(PathBuf::from("/tmp/x")));
    assert_eq!(location.base_dir, None);
}
