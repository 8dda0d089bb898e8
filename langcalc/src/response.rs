use crate::{format_word, Operation, Set};
use serde::Serialize;
use std::fmt;

/// A computed or parsed value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// A set or a language
    Set(Set),
    Word(String),
    /// A word length
    Length(usize),
    /// An integer parameter such as an exponent or an iteration bound
    Integer(i64),
}

impl Value {
    pub fn as_set(&self) -> Option<&Set> {
        match self {
            Value::Set(set) => Some(set),
            _ => None,
        }
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Value::Word(word) => Some(word),
            _ => None,
        }
    }

    pub fn as_length(&self) -> Option<usize> {
        match self {
            Value::Length(length) => Some(*length),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Set(set) => write!(f, "{}", set),
            Value::Word(word) => write!(f, "{}", format_word(word)),
            Value::Length(length) => write!(f, "{}", length),
            Value::Integer(n) => write!(f, "{}", n),
        }
    }
}

/// A resolved input of an evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operand {
    pub name: String,
    pub value: Value,
}

/// Response from evaluating one operation
///
/// `summary` is the labelled result line, e.g. `A ∪ B = {a, b, c, d}`.
/// `note` is set when the result is a truncation of an infinite language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub operation: Operation,
    pub operands: Vec<Operand>,
    pub result: Value,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Response {
    pub fn operand(&self, name: &str) -> Option<&Value> {
        self.operands
            .iter()
            .find(|operand| operand.name == name)
            .map(|operand| &operand.value)
    }
}

/// A `{"success": false, "response": null, "error": message}` JSON body
pub fn failure_json(message: &str) -> String {
    serde_json::json!({
        "success": false,
        "response": null,
        "error": message,
    })
    .to_string()
}
