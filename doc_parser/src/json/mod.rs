//! Hand-written lexer and recursive-descent parser for a JSON subset:
//! unsigned integer numbers, quoted strings without escape interpretation,
//! `true`/`false`, and arbitrarily nested arrays and objects.

mod decode;
mod lexer;
mod parser;
mod token;
mod value;

pub use decode::{DecodeErr, FromJson};
pub use parser::{ParseErr, ParseErrKind};
pub use token::Pos;
pub use value::{Property, Value};

use lexer::Lexer;
use parser::Parser;

/// Parses a whole document into a [`Value`] tree, failing fast on the first
/// structural violation.
pub fn parse(input: &str) -> Result<Value, ParseErr> {
    Parser::new(Lexer::new(input)).parse()
}
