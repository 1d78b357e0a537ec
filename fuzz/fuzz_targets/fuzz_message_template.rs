#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Malformed templates must come back as errors, never panics
    let _ = twinlog::fmt::render(data, &[&"alice", &42, &'x']);
});
