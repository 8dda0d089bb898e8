#![no_main]

use langcalc::{kleene_closure, parse_set, positive_closure};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the bound, the rest is the language text
    let k = (data[0] % 4) as i64;
    if let Ok(s) = std::str::from_utf8(&data[1..]) {
        let language = parse_set(s);
        if language.len() > 4 || language.iter().any(|w| w.len() > 8) {
            return;
        }

        match (kleene_closure(&language, k), positive_closure(&language, k)) {
            (Ok(star), Ok(plus)) => {
                assert!(star.contains(""));
                assert!(plus.is_subset(&star));
            }
            (Err(_), Err(_)) => assert!(k < 1),
            _ => panic!("closures disagree on the bound {}", k),
        }
    }
});
