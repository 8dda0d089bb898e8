use crate::LangCalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The group an operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationCategory {
    Sets,
    Words,
    Languages,
}

impl OperationCategory {
    pub const ALL: [OperationCategory; 3] = [
        OperationCategory::Sets,
        OperationCategory::Words,
        OperationCategory::Languages,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            OperationCategory::Sets => "Operations on sets/alphabets",
            OperationCategory::Words => "Operations on words/strings",
            OperationCategory::Languages => "Operations on languages",
        }
    }

    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        Operation::ALL
            .into_iter()
            .filter(move |op| op.category() == *self)
    }
}

impl fmt::Display for OperationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// How the raw text of a parameter is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Comma separated tokens, see [`parse_set`](crate::parse_set)
    Set,
    /// Raw text, see [`parse_word`](crate::parse_word)
    Word,
    /// Comma separated words, see [`parse_set`](crate::parse_set)
    Language,
    /// Integer power `n ≥ 0`
    Exponent,
    /// Integer closure bound `k ≥ 1`
    Iterations,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParameterKind::Set => "set",
            ParameterKind::Word => "word",
            ParameterKind::Language => "language",
            ParameterKind::Exponent => "exponent",
            ParameterKind::Iterations => "iterations",
        };
        write!(f, "{}", name)
    }
}

/// A named input of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: &'static str,
    pub kind: ParameterKind,
    pub default: &'static str,
    pub description: &'static str,
}

impl Parameter {
    const fn new(
        name: &'static str,
        kind: ParameterKind,
        default: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            default,
            description,
        }
    }
}

const SET_PAIR: &[Parameter] = &[
    Parameter::new("A", ParameterKind::Set, "a,b,c", "Set A (comma separated)"),
    Parameter::new("B", ParameterKind::Set, "b,c,d", "Set B (comma separated)"),
];

const SET_COMPLEMENT: &[Parameter] = &[
    Parameter::new("A", ParameterKind::Set, "a,b,c", "Set A (comma separated)"),
    Parameter::new("U", ParameterKind::Set, "a,b,c,d,e,f", "Universe U (comma separated)"),
];

const WORD_PAIR: &[Parameter] = &[
    Parameter::new("w1", ParameterKind::Word, "abc", "First word"),
    Parameter::new("w2", ParameterKind::Word, "def", "Second word"),
];

const WORD_POWER: &[Parameter] = &[
    Parameter::new("w", ParameterKind::Word, "ab", "Word"),
    Parameter::new("n", ParameterKind::Exponent, "3", "Power n"),
];

const WORD_REVERSE: &[Parameter] = &[Parameter::new("w", ParameterKind::Word, "abcd", "Word")];

const WORD_LENGTH: &[Parameter] = &[Parameter::new("w", ParameterKind::Word, "hello", "Word")];

const LANGUAGE_PAIR: &[Parameter] = &[
    Parameter::new("L1", ParameterKind::Language, "a,aa,aba", "Language L₁ (comma separated words)"),
    Parameter::new("L2", ParameterKind::Language, "b,ab", "Language L₂ (comma separated words)"),
];

const LANGUAGE_POWER: &[Parameter] = &[
    Parameter::new("L", ParameterKind::Language, "a,b", "Language L (comma separated words)"),
    Parameter::new("n", ParameterKind::Exponent, "2", "Power n"),
];

const LANGUAGE_SINGLE: &[Parameter] = &[Parameter::new(
    "L",
    ParameterKind::Language,
    "a,b",
    "Language L (comma separated words)",
)];

const LANGUAGE_CLOSURE: &[Parameter] = &[
    Parameter::new("L", ParameterKind::Language, "a,b", "Language L (comma separated words)"),
    Parameter::new("k", ParameterKind::Iterations, "4", "Maximum number of iterations"),
];

/// Every operation the calculator offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
    Complement,
    WordConcat,
    WordPower,
    WordReverse,
    WordLength,
    LanguageConcat,
    LanguagePower,
    LanguageReverse,
    LanguageUnion,
    LanguageIntersection,
    LanguageDifference,
    Kleene,
    Positive,
}

impl Operation {
    pub const ALL: [Operation; 17] = [
        Operation::Union,
        Operation::Intersection,
        Operation::Difference,
        Operation::SymmetricDifference,
        Operation::Complement,
        Operation::WordConcat,
        Operation::WordPower,
        Operation::WordReverse,
        Operation::WordLength,
        Operation::LanguageConcat,
        Operation::LanguagePower,
        Operation::LanguageReverse,
        Operation::LanguageUnion,
        Operation::LanguageIntersection,
        Operation::LanguageDifference,
        Operation::Kleene,
        Operation::Positive,
    ];

    /// Stable kebab-case name used on the command line and in JSON
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Union => "union",
            Operation::Intersection => "intersection",
            Operation::Difference => "difference",
            Operation::SymmetricDifference => "symmetric-difference",
            Operation::Complement => "complement",
            Operation::WordConcat => "word-concat",
            Operation::WordPower => "word-power",
            Operation::WordReverse => "word-reverse",
            Operation::WordLength => "word-length",
            Operation::LanguageConcat => "language-concat",
            Operation::LanguagePower => "language-power",
            Operation::LanguageReverse => "language-reverse",
            Operation::LanguageUnion => "language-union",
            Operation::LanguageIntersection => "language-intersection",
            Operation::LanguageDifference => "language-difference",
            Operation::Kleene => "kleene",
            Operation::Positive => "positive",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Operation::Union => "Union (A ∪ B)",
            Operation::Intersection => "Intersection (A ∩ B)",
            Operation::Difference => "Difference (A - B)",
            Operation::SymmetricDifference => "Symmetric difference (A Δ B)",
            Operation::Complement => "Complement of A",
            Operation::WordConcat => "Concatenation of two words",
            Operation::WordPower => "Power of a word",
            Operation::WordReverse => "Reversal of a word",
            Operation::WordLength => "Length of a word",
            Operation::LanguageConcat => "Concatenation of languages (L₁ · L₂)",
            Operation::LanguagePower => "Power of a language (Lⁿ)",
            Operation::LanguageReverse => "Reversal of a language",
            Operation::LanguageUnion => "Union of languages (L₁ ∪ L₂)",
            Operation::LanguageIntersection => "Intersection of languages (L₁ ∩ L₂)",
            Operation::LanguageDifference => "Difference of languages (L₁ - L₂)",
            Operation::Kleene => "Kleene closure (L*)",
            Operation::Positive => "Positive closure (L⁺)",
        }
    }

    pub fn category(&self) -> OperationCategory {
        match self {
            Operation::Union
            | Operation::Intersection
            | Operation::Difference
            | Operation::SymmetricDifference
            | Operation::Complement => OperationCategory::Sets,
            Operation::WordConcat
            | Operation::WordPower
            | Operation::WordReverse
            | Operation::WordLength => OperationCategory::Words,
            _ => OperationCategory::Languages,
        }
    }

    /// The inputs of the operation, in the order a form would ask for them
    pub fn parameters(&self) -> &'static [Parameter] {
        match self {
            Operation::Union
            | Operation::Intersection
            | Operation::Difference
            | Operation::SymmetricDifference => SET_PAIR,
            Operation::Complement => SET_COMPLEMENT,
            Operation::WordConcat => WORD_PAIR,
            Operation::WordPower => WORD_POWER,
            Operation::WordReverse => WORD_REVERSE,
            Operation::WordLength => WORD_LENGTH,
            Operation::LanguageConcat
            | Operation::LanguageUnion
            | Operation::LanguageIntersection
            | Operation::LanguageDifference => LANGUAGE_PAIR,
            Operation::LanguagePower => LANGUAGE_POWER,
            Operation::LanguageReverse => LANGUAGE_SINGLE,
            Operation::Kleene | Operation::Positive => LANGUAGE_CLOSURE,
        }
    }

    pub fn parameter(&self, name: &str) -> Option<&'static Parameter> {
        self.parameters().iter().find(|p| p.name == name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operation {
    type Err = LangCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LangCalcError::UnknownOperation(wanted.to_string()))
    }
}
