use crate::{failure_json, Engine, Inputs, LangCalcError, Operation};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmEngine {
    engine: Engine,
}

impl Default for WasmEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        WasmEngine {
            engine: Engine::new(),
        }
    }

    /// Evaluate an operation. `inputs_json` is an object of `name: text`
    /// pairs; an empty string or `{}` uses the defaults.
    #[wasm_bindgen(js_name = evaluate)]
    pub fn evaluate(&self, operation: &str, inputs_json: &str) -> String {
        let operation: Operation = match operation.parse() {
            Ok(op) => op,
            Err(e) => return error_json(&e),
        };

        let inputs: Inputs = if inputs_json.trim().is_empty() {
            Inputs::new()
        } else {
            match serde_json::from_str(inputs_json) {
                Ok(inputs) => inputs,
                Err(e) => {
                    return failure_json(&format!(
                        "Inputs must be a JSON object of strings: {}",
                        e
                    ));
                }
            }
        };

        match self.engine.evaluate(operation, &inputs) {
            Ok(response) => serde_json::to_string(&serde_json::json!({
                "success": true,
                "response": response,
                "display": response.result.to_string(),
                "error": serde_json::Value::Null
            }))
            .unwrap_or_else(|_| {
                r#"{"success":false,"response":null,"error":"Failed to serialize response"}"#
                    .to_string()
            }),
            Err(e) => error_json(&e),
        }
    }

    #[wasm_bindgen(js_name = listOperations)]
    pub fn list_operations(&self) -> String {
        let operations: Vec<serde_json::Value> = Operation::ALL
            .iter()
            .map(|op| {
                serde_json::json!({
                    "name": op.name(),
                    "title": op.title(),
                    "category": op.category(),
                    "parameters": op.parameters(),
                })
            })
            .collect();

        match serde_json::to_string(&serde_json::json!({
            "success": true,
            "operations": operations,
            "error": serde_json::Value::Null
        })) {
            Ok(json) => json,
            Err(_) => {
                r#"{"success":false,"operations":null,"error":"Failed to serialize operations"}"#
                    .to_string()
            }
        }
    }
}

fn error_json(error: &LangCalcError) -> String {
    failure_json(&error.to_string())
}
