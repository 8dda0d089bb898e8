#![no_main]

use langcalc::{parse_inputs, Engine, Operation};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let operation = Operation::ALL[data[0] as usize % Operation::ALL.len()];
    if let Ok(s) = std::str::from_utf8(&data[1..]) {
        let args: Vec<&str> = s.split('\n').collect();
        if let Ok(inputs) = parse_inputs(&args) {
            let engine = Engine::new();
            let _ = engine.evaluate(operation, &inputs);
        }
    }
});
