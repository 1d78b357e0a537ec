#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must not panic on any config content
    if let Ok(config) = twinlog::Config::from_toml(data) {
        let _ = config.parse_max_size();
        let _ = config.parse_diagnostics();
        let _ = config.location();
    }
    let _ = twinlog::parse_size(data);
});
