/// Resource limits applied by the [`Engine`](crate::Engine)
///
/// Language powers and closures grow roughly as `|L|ⁿ`, so the numeric
/// parameters are bounded by the application rather than by the algebra. The
/// defaults are the bounds of the interactive calculator's input widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLimits {
    /// Largest exponent accepted for `wⁿ`
    pub max_word_power: i64,

    /// Largest exponent accepted for `Lⁿ`
    pub max_language_power: i64,

    /// Largest iteration bound accepted for `L*` and `L⁺`
    pub max_closure_iterations: i64,

    /// Maximum size of a single raw input text in bytes
    pub max_input_bytes: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_word_power: 10,
            max_language_power: 5,
            max_closure_iterations: 8,
            max_input_bytes: 1024, // 1 KB
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }
}
