use crate::{LangCalcError, LangCalcResult};

/// `w1 · w2`
pub fn concatenate_words(w1: &str, w2: &str) -> String {
    let mut word = String::with_capacity(w1.len() + w2.len());
    word.push_str(w1);
    word.push_str(w2);
    word
}

/// `wⁿ`: the word repeated `n` times
///
/// `w⁰` is the empty word for every `w`. A negative `n` is rejected.
/// The result takes `|w|·n` bytes; a power whose length does not fit in
/// memory is a `ResourceLimitExceeded` error.
pub fn word_power(word: &str, n: i64) -> LangCalcResult<String> {
    if n < 0 {
        return Err(LangCalcError::NegativePower(n));
    }
    if word.is_empty() {
        return Ok(String::new());
    }

    let max_bytes = isize::MAX as usize;
    let repeats = usize::try_from(n)
        .ok()
        .filter(|&repeats| {
            word.len()
                .checked_mul(repeats)
                .is_some_and(|bytes| bytes <= max_bytes)
        })
        .ok_or_else(|| LangCalcError::ResourceLimitExceeded {
            limit_name: "word_power_bytes".to_string(),
            limit_value: max_bytes.to_string(),
            actual_value: format!("{} x {}", word.len(), n),
            suggestion: "Use a smaller exponent".to_string(),
        })?;

    Ok(word.repeat(repeats))
}

/// `wᴿ`: the symbols of the word in reverse order
pub fn reverse_word(word: &str) -> String {
    word.chars().rev().collect()
}

/// `|w|`: the number of symbols in the word
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}
