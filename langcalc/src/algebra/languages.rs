use crate::algebra::sets;
use crate::algebra::words::{concatenate_words, reverse_word};
use crate::{LangCalcError, LangCalcResult, Language};

/// `L₁ · L₂ = { w1 · w2 : w1 ∈ L₁, w2 ∈ L₂ }`
///
/// The result has at most `|L₁| · |L₂|` words. Concatenating with `∅`
/// always gives `∅`, also when the other operand is `{ε}`.
pub fn concatenate_languages(l1: &Language, l2: &Language) -> Language {
    if l1.is_empty() || l2.is_empty() {
        return Language::new();
    }

    let mut result = Language::new();
    for w1 in l1 {
        for w2 in l2 {
            result.insert(concatenate_words(w1, w2));
        }
    }
    result
}

/// `Lⁿ`: `L` concatenated with itself `n` times
///
/// `L⁰ = {ε}` for every `L`, including `∅`. For `n ≥ 1`, `∅ⁿ = ∅`.
/// The result can hold up to `|L|ⁿ` words. A negative `n` is rejected.
pub fn language_power(language: &Language, n: i64) -> LangCalcResult<Language> {
    if n < 0 {
        return Err(LangCalcError::NegativePower(n));
    }
    if n == 0 {
        return Ok(Language::epsilon());
    }
    if language.is_empty() {
        return Ok(Language::new());
    }

    let mut result = language.clone();
    for _ in 1..n {
        result = concatenate_languages(&result, language);
    }
    Ok(result)
}

/// `Lᴿ = { wᴿ : w ∈ L }`
pub fn reverse_language(language: &Language) -> Language {
    language.iter().map(|word| reverse_word(word)).collect()
}

/// `L₁ ∪ L₂`
pub fn language_union(l1: &Language, l2: &Language) -> Language {
    sets::union(l1, l2)
}

/// `L₁ ∩ L₂`
pub fn language_intersection(l1: &Language, l2: &Language) -> Language {
    sets::intersection(l1, l2)
}

/// `L₁ - L₂`
pub fn language_difference(l1: &Language, l2: &Language) -> Language {
    sets::difference(l1, l2)
}
