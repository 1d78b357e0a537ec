#![no_main]
use libfuzzer_sys::fuzz_target;
use twinlog::fmt::{LineTemplate, LineValues};

fuzz_target!(|data: &str| {
    // Must not panic on any layout string
    let template = LineTemplate::parse(data);
    let _ = template.render(&LineValues {
        timestamp: "2025-01-01 00:00:00.000",
        tag: "MAIN",
        msg: "test",
        level: "info",
    });
});
