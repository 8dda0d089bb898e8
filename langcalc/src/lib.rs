//! # LangCalc Engine
//!
//! **Finite sets, words and languages, computed exactly**
//!
//! LangCalc implements the everyday operations of formal-language theory over
//! finite values: set algebra, word algebra, language algebra and bounded
//! approximations of the Kleene and positive closures.
//!
//! ## Quick Start
//!
//! ```rust
//! use langcalc::{concatenate_languages, format_set, kleene_closure, parse_set, LangCalcResult};
//!
//! fn main() -> LangCalcResult<()> {
//!     let l1 = parse_set("a, aa, aba");
//!     let l2 = parse_set("{b, ab}");
//!
//!     let product = concatenate_languages(&l1, &l2);
//!     assert_eq!(format_set(&product), "{aaab, aab, ab, abaab, abab}");
//!
//!     let star = kleene_closure(&parse_set("a"), 3)?;
//!     assert_eq!(star.to_string(), "{ε, a, aa, aaa}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Sets and languages
//! A [`Set`] is a collection of unique string tokens rendered in sorted order.
//! A [`Language`] is the same structure read as a set of words. The empty
//! language `∅` and the language `{ε}` are different values.
//!
//! ### Words
//! Words are plain strings. Their symbols are Unicode scalar values, so
//! reversal and length work per `char`. The empty word is displayed as `ε`.
//!
//! ### Closures
//! `L*` and `L⁺` are infinite in general. [`kleene_closure`] and
//! [`positive_closure`] return the union of the powers `L¹ … Lᵏ` for a
//! caller-supplied bound `k`, and the caller is expected to say so.
//!
//! ### Engine
//! [`Engine`] is the request/response layer used by front-ends: it resolves
//! named text inputs for an [`Operation`], enforces [`ResourceLimits`] and
//! returns a labelled [`Response`].

pub mod algebra;
pub mod engine;
pub mod error;
pub mod inputs;
pub mod operation;
pub mod resource_limits;
pub mod response;
pub mod set;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use algebra::closure::{kleene_closure, positive_closure};
pub use algebra::languages::{
    concatenate_languages, language_difference, language_intersection, language_power,
    language_union, reverse_language,
};
pub use algebra::sets::{complement, difference, intersection, symmetric_difference, union};
pub use algebra::words::{concatenate_words, reverse_word, word_length, word_power};
pub use engine::Engine;
pub use error::LangCalcError;
pub use inputs::{parse_inputs, Inputs};
pub use operation::{Operation, OperationCategory, Parameter, ParameterKind};
pub use resource_limits::ResourceLimits;
pub use response::{failure_json, Operand, Response, Value};
pub use set::{format_set, format_word, parse_set, parse_word, Language, Set, EMPTY_SET, EPSILON};

/// Result type for LangCalc operations
pub type LangCalcResult<T> = Result<T, LangCalcError>;

#[cfg(test)]
mod tests;
