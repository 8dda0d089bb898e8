use thiserror::Error;

/// Error types for the LangCalc system
///
/// Almost every operation is total. The variants below are the contract
/// violations of the algebra (negative powers, empty iteration bounds) and
/// the request errors of the [`Engine`](crate::Engine) layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LangCalcError {
    /// A word or language power was requested with a negative exponent
    #[error("Negative power: the exponent must be 0 or greater, got {0}")]
    NegativePower(i64),

    /// A closure was requested with fewer than one iteration
    #[error("Invalid iteration bound: a closure needs at least 1 iteration, got {0}")]
    InvalidIterationBound(i64),

    /// An application-enforced bound was exceeded
    #[error("Resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value})")]
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    /// No operation with this name exists
    #[error("Unknown operation '{0}'")]
    UnknownOperation(String),

    /// The operation does not take an input with this name
    #[error("Unknown input '{name}' for operation '{operation}'")]
    UnknownInput { operation: String, name: String },

    /// An input argument without a `name=value` shape
    #[error("Malformed input '{0}': expected name=value")]
    MalformedInput(String),

    /// An integer parameter whose text is not an integer
    #[error("Invalid number for '{name}': '{value}'")]
    InvalidNumber { name: String, value: String },
}

impl LangCalcError {
    /// A short hint on how to fix the error, if there is one
    pub fn suggestion(&self) -> Option<String> {
        match self {
            LangCalcError::NegativePower(_) => Some("Use an exponent of 0 or more".to_string()),
            LangCalcError::InvalidIterationBound(_) => {
                Some("Use an iteration bound of 1 or more".to_string())
            }
            LangCalcError::ResourceLimitExceeded { suggestion, .. } => Some(suggestion.clone()),
            LangCalcError::UnknownOperation(_) => {
                Some("Run 'langcalc list' to see the available operations".to_string())
            }
            LangCalcError::UnknownInput { operation, .. } => Some(format!(
                "Run 'langcalc show {}' to see its inputs",
                operation
            )),
            LangCalcError::MalformedInput(_) => {
                Some("Write inputs as name=value, e.g. A=a,b,c".to_string())
            }
            LangCalcError::InvalidNumber { .. } => None,
        }
    }
}
