use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use twinlog::sink::{DEFAULT_MAX_BYTES, DEFAULT_TIMESTAMP_FORMAT};
use twinlog::{Config, Error, Level, format_size, parse_size};

#[test]
fn empty_config_uses_defaults() {
    let config = Config::from_toml("").unwrap();
    assert!(config.file.enabled);
    assert!(config.console.enabled);
    assert!(config.preferences.persist);
    assert_eq!(config.parse_max_size().unwrap(), DEFAULT_MAX_BYTES);
    assert_eq!(config.file.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    assert_eq!(config.file.structure, "{timestamp} {tag} {msg}");
    assert_eq!(config.parse_diagnostics(), Level::Warn);
}

#[test]
fn missing_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(&tmp.path().join("absent.toml")).unwrap();
    assert_eq!(config.general.app_name, None);
}

#[test]
fn load_full_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("twinlog.toml");
    fs::write(
        &path,
        r#"
[general]
app_name = "myapp"
diagnostics = "debug"

[file]
directory = "/var/log/myapp"
max_size = "512K"
structure = "{timestamp} [{level}] {tag}: {msg}"

[console]
colors = false

[preferences]
persist = false
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.general.app_name.as_deref(), Some("myapp"));
    assert_eq!(config.parse_diagnostics(), Level::Debug);
    assert_eq!(config.parse_max_size().unwrap(), 512 * 1024);
    assert!(!config.console.colors);
    assert!(!config.preferences.persist);
    assert_eq!(
        config.location().resolve().unwrap(),
        PathBuf::from("/var/log/myapp")
    );
}

#[test]
fn syntax_error_is_reported() {
    assert!(matches!(
        Config::from_toml("[file\nmax_size = 1"),
        Err(Error::ConfigParse(_))
    ));
}

#[test]
fn invalid_and_zero_sizes_are_rejected() {
    for bad in ["2X", "0", "-1M", ""] {
        let config = Config::from_toml(&format!("[file]\nmax_size = \"{bad}\"")).unwrap();
        assert!(
            matches!(config.parse_max_size(), Err(Error::InvalidSize(_))),
            "{bad} accepted"
        );
    }
}

#[test]
fn unknown_diagnostics_level_falls_back_to_warn() {
    let config = Config::from_toml("[general]\ndiagnostics = \"chatty\"").unwrap();
    assert_eq!(config.parse_diagnostics(), Level::Warn);
}

#[test]
fn location_uses_base_dir_and_app_name() {
    let config = Config::from_toml(
        r#"
[general]
app_name = "svc"

[file]
base_dir = "/data/logs"
"#,
    )
    .unwrap();
    assert_eq!(
        config.location().resolve().unwrap(),
        PathBuf::from("/data/logs/svc")
    );
}

#[test]
fn preferences_path_expands_tilde() {
    let config = Config::from_toml("[preferences]\npath = \"~/prefs.toml\"").unwrap();
    let path = config.preferences_path().unwrap();
    assert!(!path.to_string_lossy().starts_with('~'));
    assert!(path.ends_with("prefs.toml"));
}

#[test]
fn size_strings() {
    assert_eq!(parse_size("2M"), Some(2 * 1024 * 1024));
    assert_eq!(parse_size("512kb"), Some(512 * 1024));
    assert_eq!(parse_size("1.5G"), Some(1024 * 1024 * 1024 * 3 / 2));
    assert_eq!(parse_size("100"), Some(100));
    assert_eq!(parse_size("100B"), Some(100));
    assert_eq!(parse_size("lots"), None);
    assert_eq!(parse_size("-5K"), None);
}

#[test]
fn size_display() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(2048), "2.00 KB");
    assert_eq!(format_size(DEFAULT_MAX_BYTES), "2.00 MB");
}
