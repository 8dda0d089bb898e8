use anyhow::{Context, Result};
use inquire::{CustomType, Select, Text};
use langcalc::{Inputs, Operation, OperationCategory, Parameter, ParameterKind};

/// Ask for the operation (unless given) and for every input not given on the
/// command line. Returns the operation with the complete inputs.
pub fn run_interactive(
    operation: Option<Operation>,
    given: Inputs,
) -> Result<(Operation, Inputs)> {
    let operation = match operation {
        Some(op) => op,
        None => select_operation()?,
    };

    let inputs = prompt_inputs(operation, given)?;

    Ok((operation, inputs))
}

fn select_operation() -> Result<Operation> {
    let categories: Vec<String> = OperationCategory::ALL
        .iter()
        .map(|category| category.title().to_string())
        .collect();

    let selected = Select::new("Type of operation:", categories.clone())
        .with_help_message("Use arrow keys to navigate, Enter to select")
        .prompt()
        .context("Failed to get category selection")?;

    let category_index = categories
        .iter()
        .position(|c| c == &selected)
        .context("Failed to find selected category index")?;
    let category = OperationCategory::ALL[category_index];

    let operations: Vec<Operation> = category.operations().collect();
    let display_options: Vec<String> = operations
        .iter()
        .map(|op| op.title().to_string())
        .collect();

    let selected = Select::new("Select the operation:", display_options.clone())
        .prompt()
        .context("Failed to get operation selection")?;

    let op_index = display_options
        .iter()
        .position(|o| o == &selected)
        .context("Failed to find selected operation index")?;

    Ok(operations[op_index])
}

fn prompt_inputs(operation: Operation, mut inputs: Inputs) -> Result<Inputs> {
    for parameter in operation.parameters() {
        if inputs.get(parameter.name).is_some() {
            continue;
        }

        let value = prompt_parameter(parameter)?;
        inputs.insert(parameter.name, value);
    }

    Ok(inputs)
}

const SET_HELP: &str = "Comma separated; clear the field for ∅, type ε for the empty word";
const WORD_HELP: &str = "Clear the field or type ε for the empty word";

/// The default is pre-filled as editable text, so an empty submission means
/// ∅ (or ε) rather than falling back to the default.
fn text_prompt<'a>(label: &'a str, parameter: &'a Parameter) -> Text<'a, 'a> {
    let help = match parameter.kind {
        ParameterKind::Word => WORD_HELP,
        _ => SET_HELP,
    };
    Text::new(label)
        .with_initial_value(parameter.default)
        .with_help_message(help)
}

fn prompt_parameter(parameter: &Parameter) -> Result<String> {
    let label = format!("{} ({}):", parameter.description, parameter.name);

    match parameter.kind {
        ParameterKind::Exponent | ParameterKind::Iterations => {
            let mut prompt =
                CustomType::<i64>::new(&label).with_error_message("Please type a whole number");
            if let Ok(default) = parameter.default.parse::<i64>() {
                prompt = prompt.with_default(default);
            }
            let value = prompt
                .prompt()
                .with_context(|| format!("Failed to get value for {}", parameter.name))?;
            Ok(value.to_string())
        }
        ParameterKind::Set | ParameterKind::Language | ParameterKind::Word => {
            text_prompt(&label, parameter)
                .prompt()
                .with_context(|| format!("Failed to get value for {}", parameter.name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_prompt_prefills_default_without_fallback() {
        let parameter = Operation::Union.parameter("A").unwrap();
        let prompt = text_prompt("A:", parameter);

        assert_eq!(prompt.initial_value, Some("a,b,c"));
        assert_eq!(prompt.default, None);
        assert_eq!(prompt.help_message, Some(SET_HELP));
    }

    #[test]
    fn test_word_prompt_prefills_default_without_fallback() {
        let parameter = Operation::WordReverse.parameter("w").unwrap();
        let prompt = text_prompt("w:", parameter);

        assert_eq!(prompt.initial_value, Some("abcd"));
        assert_eq!(prompt.default, None);
        assert_eq!(prompt.help_message, Some(WORD_HELP));
    }

    #[test]
    fn test_cleared_set_field_evaluates_as_empty_set() {
        let inputs = Inputs::new().with("A", "").with("B", "b,c,d");
        let response = langcalc::Engine::new()
            .evaluate(Operation::Union, &inputs)
            .unwrap();
        assert_eq!(response.summary, "A ∪ B = {b, c, d}");
    }
}
