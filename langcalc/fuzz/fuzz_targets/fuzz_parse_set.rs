#![no_main]

use langcalc::{format_set, parse_set};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let set = parse_set(s);
        let rendered = format_set(&set);

        // Rendering is deterministic and never empty
        assert!(!rendered.is_empty());
        assert_eq!(rendered, format_set(&parse_set(s)));
    }
});
