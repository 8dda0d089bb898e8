//! The algebra over sets, words and languages.
//!
//! Every function here is pure: inputs are borrowed, results are freshly
//! built, and nothing is cached between calls.

pub mod closure;
pub mod languages;
pub mod sets;
pub mod words;
