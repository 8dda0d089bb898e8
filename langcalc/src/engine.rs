use crate::algebra::closure::{kleene_closure, positive_closure};
use crate::algebra::languages::{
    concatenate_languages, language_difference, language_intersection, language_power,
    language_union, reverse_language,
};
use crate::algebra::sets::{complement, difference, intersection, symmetric_difference, union};
use crate::algebra::words::{concatenate_words, reverse_word, word_length, word_power};
use crate::{
    format_word, parse_set, parse_word, Inputs, LangCalcError, LangCalcResult, Operand, Operation,
    ResourceLimits, Response, Set, Value,
};

const KLEENE_NOTE: &str = "L* is infinite; only the first iterations are shown.";
const POSITIVE_NOTE: &str = "L⁺ is infinite; only the first iterations are shown.";

/// The LangCalc evaluation engine.
///
/// Turns raw text inputs into values, applies one operation and labels the
/// result. The engine holds no state besides its limits, so one instance can
/// serve any number of independent evaluations.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    limits: ResourceLimits,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self { limits }
    }

    /// Get the current resource limits
    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Evaluate `operation` on `inputs`
    ///
    /// Inputs the operation does not declare are rejected. Declared inputs that
    /// are not supplied fall back to the parameter's default.
    pub fn evaluate(&self, operation: Operation, inputs: &Inputs) -> LangCalcResult<Response> {
        if let Some(name) = inputs
            .names()
            .find(|name| operation.parameter(name).is_none())
        {
            return Err(LangCalcError::UnknownInput {
                operation: operation.name().to_string(),
                name: name.to_string(),
            });
        }

        let mut args = Arguments::new(operation, inputs, &self.limits);
        let (result, summary, note) = match operation {
            Operation::Union => {
                let (a, b) = (args.set("A")?, args.set("B")?);
                labelled("A ∪ B", union(&a, &b))
            }
            Operation::Intersection => {
                let (a, b) = (args.set("A")?, args.set("B")?);
                labelled("A ∩ B", intersection(&a, &b))
            }
            Operation::Difference => {
                let (a, b) = (args.set("A")?, args.set("B")?);
                labelled("A - B", difference(&a, &b))
            }
            Operation::SymmetricDifference => {
                let (a, b) = (args.set("A")?, args.set("B")?);
                labelled("A Δ B", symmetric_difference(&a, &b))
            }
            Operation::Complement => {
                let (a, universe) = (args.set("A")?, args.set("U")?);
                labelled("A'", complement(&a, &universe))
            }
            Operation::WordConcat => {
                let (w1, w2) = (args.word("w1")?, args.word("w2")?);
                let word = concatenate_words(&w1, &w2);
                let summary = format!(
                    "'{}' · '{}' = '{}'",
                    format_word(&w1),
                    format_word(&w2),
                    format_word(&word)
                );
                (Value::Word(word), summary, None)
            }
            Operation::WordPower => {
                let w = args.word("w")?;
                let n = args.integer("n", "max_word_power", self.limits.max_word_power)?;
                let word = word_power(&w, n)?;
                let summary = if n == 0 {
                    format!("'{}'^0 = 'ε' (empty word)", format_word(&w))
                } else {
                    format!("'{}'^{} = '{}'", format_word(&w), n, format_word(&word))
                };
                (Value::Word(word), summary, None)
            }
            Operation::WordReverse => {
                let w = args.word("w")?;
                let word = reverse_word(&w);
                let summary = format!("'{}'^R = '{}'", format_word(&w), format_word(&word));
                (Value::Word(word), summary, None)
            }
            Operation::WordLength => {
                let w = args.word("w")?;
                let length = word_length(&w);
                let summary = format!("|'{}'| = {}", format_word(&w), length);
                (Value::Length(length), summary, None)
            }
            Operation::LanguageConcat => {
                let (l1, l2) = (args.set("L1")?, args.set("L2")?);
                labelled("L₁ · L₂", concatenate_languages(&l1, &l2))
            }
            Operation::LanguagePower => {
                let l = args.set("L")?;
                let n = args.integer(
                    "n",
                    "max_language_power",
                    self.limits.max_language_power,
                )?;
                labelled(&format!("L^{}", n), language_power(&l, n)?)
            }
            Operation::LanguageReverse => {
                let l = args.set("L")?;
                labelled("L^R", reverse_language(&l))
            }
            Operation::LanguageUnion => {
                let (l1, l2) = (args.set("L1")?, args.set("L2")?);
                labelled("L₁ ∪ L₂", language_union(&l1, &l2))
            }
            Operation::LanguageIntersection => {
                let (l1, l2) = (args.set("L1")?, args.set("L2")?);
                labelled("L₁ ∩ L₂", language_intersection(&l1, &l2))
            }
            Operation::LanguageDifference => {
                let (l1, l2) = (args.set("L1")?, args.set("L2")?);
                labelled("L₁ - L₂", language_difference(&l1, &l2))
            }
            Operation::Kleene => {
                let l = args.set("L")?;
                let k = args.integer(
                    "k",
                    "max_closure_iterations",
                    self.limits.max_closure_iterations,
                )?;
                let (value, summary, _) = labelled(
                    &format!("L* (up to {} iterations)", k),
                    kleene_closure(&l, k)?,
                );
                (value, summary, Some(KLEENE_NOTE.to_string()))
            }
            Operation::Positive => {
                let l = args.set("L")?;
                let k = args.integer(
                    "k",
                    "max_closure_iterations",
                    self.limits.max_closure_iterations,
                )?;
                let (value, summary, _) = labelled(
                    &format!("L⁺ (up to {} iterations)", k),
                    positive_closure(&l, k)?,
                );
                (value, summary, Some(POSITIVE_NOTE.to_string()))
            }
        };

        Ok(Response {
            operation,
            operands: args.operands,
            result,
            summary,
            note,
        })
    }
}

fn labelled(label: &str, set: Set) -> (Value, String, Option<String>) {
    let summary = format!("{} = {}", label, set);
    (Value::Set(set), summary, None)
}

/// Resolves the parameters of one evaluation and records them as operands
struct Arguments<'a> {
    operation: Operation,
    inputs: &'a Inputs,
    limits: &'a ResourceLimits,
    operands: Vec<Operand>,
}

impl<'a> Arguments<'a> {
    fn new(operation: Operation, inputs: &'a Inputs, limits: &'a ResourceLimits) -> Self {
        Self {
            operation,
            inputs,
            limits,
            operands: Vec::new(),
        }
    }

    /// The supplied text for `name`, or the parameter default
    fn raw(&self, name: &str) -> LangCalcResult<&'a str> {
        let text = match self.inputs.get(name) {
            Some(text) => text,
            None => self
                .operation
                .parameter(name)
                .map(|parameter| parameter.default)
                .ok_or_else(|| LangCalcError::UnknownInput {
                    operation: self.operation.name().to_string(),
                    name: name.to_string(),
                })?,
        };

        if text.len() > self.limits.max_input_bytes {
            return Err(LangCalcError::ResourceLimitExceeded {
                limit_name: "max_input_bytes".to_string(),
                limit_value: self.limits.max_input_bytes.to_string(),
                actual_value: text.len().to_string(),
                suggestion: format!(
                    "Reduce input '{}' to {} bytes or less",
                    name, self.limits.max_input_bytes
                ),
            });
        }

        Ok(text)
    }

    fn record(&mut self, name: &str, value: Value) {
        self.operands.push(Operand {
            name: name.to_string(),
            value,
        });
    }

    fn set(&mut self, name: &str) -> LangCalcResult<Set> {
        let set = parse_set(self.raw(name)?);
        self.record(name, Value::Set(set.clone()));
        Ok(set)
    }

    fn word(&mut self, name: &str) -> LangCalcResult<String> {
        let word = parse_word(self.raw(name)?);
        self.record(name, Value::Word(word.clone()));
        Ok(word)
    }

    /// Parse an integer parameter and check it against its upper limit.
    /// Lower bounds belong to the algebra and are checked there.
    fn integer(&mut self, name: &str, limit_name: &str, max: i64) -> LangCalcResult<i64> {
        let text = self.raw(name)?;
        let value: i64 = text
            .trim()
            .parse()
            .map_err(|_| LangCalcError::InvalidNumber {
                name: name.to_string(),
                value: text.to_string(),
            })?;

        if value > max {
            return Err(LangCalcError::ResourceLimitExceeded {
                limit_name: limit_name.to_string(),
                limit_value: max.to_string(),
                actual_value: value.to_string(),
                suggestion: format!("Use a value of {} or less for '{}'", max, name),
            });
        }

        self.record(name, Value::Integer(value));
        Ok(value)
    }
}
