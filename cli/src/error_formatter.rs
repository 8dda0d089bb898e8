use langcalc::LangCalcError;

/// Format a LangCalcError for terminal output, with a help line when there is one
pub fn format_error(error: &LangCalcError) -> String {
    let message = match error {
        LangCalcError::NegativePower(n) => {
            format!("Invalid power: {} is negative, powers start at 0", n)
        }
        LangCalcError::InvalidIterationBound(k) => format!(
            "Invalid iteration bound: {} (closures are computed for 1 or more iterations)",
            k
        ),
        LangCalcError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            ..
        } => format!(
            "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}",
            limit_name, limit_value, actual_value
        ),
        LangCalcError::UnknownOperation(_)
        | LangCalcError::UnknownInput { .. }
        | LangCalcError::MalformedInput(_)
        | LangCalcError::InvalidNumber { .. } => format!("Error: {}", error),
    };

    match error.suggestion() {
        Some(help) => format!("{}\n  Help: {}", message, help),
        None => message,
    }
}
