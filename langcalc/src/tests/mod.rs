// Parser and formatter tests
mod set_parsing;
