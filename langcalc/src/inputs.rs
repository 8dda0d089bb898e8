use crate::{LangCalcError, LangCalcResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw text inputs for one evaluation, keyed by parameter name
///
/// Values are kept exactly as typed. Interpretation happens in the
/// [`Engine`](crate::Engine), which knows the kind of each parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inputs(BTreeMap<String, String>);

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Inputs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Parse `name=value` arguments into [`Inputs`]
///
/// The split happens at the first `=`, so values may contain `=` and may be
/// empty (`w=` is the empty word). Names are trimmed, values are not. A later
/// argument with the same name replaces an earlier one.
pub fn parse_inputs(args: &[&str]) -> LangCalcResult<Inputs> {
    let mut inputs = Inputs::new();
    for arg in args {
        let (name, value) = arg
            .split_once('=')
            .ok_or_else(|| LangCalcError::MalformedInput(arg.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(LangCalcError::MalformedInput(arg.to_string()));
        }
        inputs.insert(name, value);
    }
    Ok(inputs)
}
