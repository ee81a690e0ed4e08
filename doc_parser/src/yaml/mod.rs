//! Companion grammar to [`crate::json`]: same lexer/parser design, with
//! indentation carrying the structure instead of brackets and braces.
//! Sequences are `- ` entries sharing a column, mappings are `key: value`
//! lines sharing a column, and scalars may be bare or quoted.

mod lexer;
mod parser;
mod token;
mod value;

pub use parser::{ParseErr, ParseErrKind};
pub use token::Pos;
pub use value::{Property, Value};

use lexer::Lexer;
use parser::Parser;

/// Parses a whole document into a [`Value`] tree. An empty document is
/// [`Value::Null`].
pub fn parse(input: &str) -> Result<Value, ParseErr> {
    Parser::new(Lexer::new(input)).parse()
}
