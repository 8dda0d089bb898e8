use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use langcalc::{Operand, Operation, OperationCategory, Response};

const NOTATION_HELP: &str = "\
Input examples:
  Sets/alphabets   a,b,c     -> {a, b, c}
                   0,1       -> {0, 1}
  Words            abc       -> the word 'abc'
                   (empty)   -> the empty word ε
  Languages        a,aa,aaa  -> {a, aa, aaa}
                   ab,ba     -> {ab, ba}
                   (empty)   -> the empty language ∅

Notation:
  ∅    empty set / empty language
  ε    empty word (length 0); type ε to put it in a language
  L*   Kleene closure (includes ε)
  L⁺   positive closure (includes ε only when ε ∈ L)
";

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_response(&self, response: &Response, raw: bool) -> String {
        if raw {
            return format!("{}\n", response.result);
        }

        let mut output = String::new();

        if !response.operands.is_empty() {
            output.push_str(&self.format_operands_table(&response.operands));
            output.push('\n');
        }

        output.push_str(&response.summary);
        output.push('\n');

        if let Some(note) = &response.note {
            output.push_str(&format!("Note: {}\n", note));
        }

        output
    }

    fn format_operands_table(&self, operands: &[Operand]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Input").set_alignment(CellAlignment::Left),
            Cell::new("Value").set_alignment(CellAlignment::Left),
        ]));

        for operand in operands {
            table.add_row(Row::from(vec![
                operand.name.clone(),
                operand.value.to_string(),
            ]));
        }

        table.to_string()
    }

    pub fn format_operation_list(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} operations available\n", Operation::ALL.len()));

        for category in OperationCategory::ALL {
            output.push_str(&format!("\n{}:\n", category.title()));
            for operation in category.operations() {
                output.push_str(&format!(
                    "  {:<24}{}\n",
                    operation.name(),
                    operation.title()
                ));
            }
        }

        output.push('\n');
        output.push_str(NOTATION_HELP);
        output
    }

    pub fn format_operation_details(&self, operation: Operation) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} ({})\n", operation.title(), operation.name()));
        output.push_str(&format!("Category: {}\n\n", operation.category().title()));

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec!["Input", "Kind", "Default", "Description"]));
        for parameter in operation.parameters() {
            table.add_row(Row::from(vec![
                parameter.name.to_string(),
                parameter.kind.to_string(),
                parameter.default.to_string(),
                parameter.description.to_string(),
            ]));
        }
        output.push_str(&table.to_string());
        output.push('\n');

        let example: Vec<String> = operation
            .parameters()
            .iter()
            .map(|p| format!("{}={}", p.name, p.default))
            .collect();
        output.push_str(&format!(
            "\nExample:\n  langcalc run {} {}\n",
            operation.name(),
            example.join(" ")
        ));

        output
    }
}
