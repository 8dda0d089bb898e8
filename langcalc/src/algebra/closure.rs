//! Bounded approximations of `L*` and `L⁺`.
//!
//! Both closures are infinite whenever `L` holds a non-empty word. The
//! functions here unroll exactly `k` powers and return `L¹ ∪ … ∪ Lᵏ` (plus
//! `ε` for the Kleene closure). There is no convergence check: the bound is
//! the only stopping condition. The result can hold on the order of `|L|ᵏ`
//! words, so callers should keep `k` small and tell their users the result is
//! a truncation.

use crate::algebra::languages::concatenate_languages;
use crate::{LangCalcError, LangCalcResult, Language};

/// `L*` truncated to `{ε} ∪ L¹ ∪ … ∪ Lᵏ`
///
/// `∅* = {ε}` for every valid `k`. Fails when `k < 1`.
pub fn kleene_closure(language: &Language, k: i64) -> LangCalcResult<Language> {
    check_bound(k)?;

    let mut result = Language::epsilon();
    result.extend(accumulate_powers(language, k));
    Ok(result)
}

/// `L⁺` truncated to `L¹ ∪ … ∪ Lᵏ`
///
/// `∅⁺ = ∅` for every valid `k`. `ε` is only present when `L` contains it.
/// Fails when `k < 1`.
pub fn positive_closure(language: &Language, k: i64) -> LangCalcResult<Language> {
    check_bound(k)?;
    Ok(accumulate_powers(language, k))
}

fn check_bound(k: i64) -> LangCalcResult<()> {
    if k < 1 {
        return Err(LangCalcError::InvalidIterationBound(k));
    }
    Ok(())
}

/// Union of `L¹ … Lᵏ`, each power built from the previous one
fn accumulate_powers(language: &Language, k: i64) -> Language {
    if language.is_empty() {
        return Language::new();
    }

    let mut result = language.clone();
    let mut current = language.clone();
    for _ in 2..=k {
        current = concatenate_languages(&current, language);
        result.extend(current.iter().cloned());
    }
    result
}
