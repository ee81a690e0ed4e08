use std::fmt;
use std::mem;

use super::lexer::Lexer;
use super::token::{Pos, Token, TokenKind};
use super::value::{Property, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct ParseErr {
    pub kind: ParseErrKind,
    pub pos: Pos,
    pub lexeme: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrKind {
    UnexpectedToken,
    MissingColon,
    MalformedNumber,
    MalformedBool,
}

impl ParseErrKind {
    fn describe(self) -> &'static str {
        match self {
            Self::UnexpectedToken => "unexpected token",
            Self::MissingColon => "key and value should be separated by ':'",
            Self::MalformedNumber => "number does not fit in 32 bits",
            Self::MalformedBool => "unknown literal of bool",
        }
    }
}

impl fmt::Display for ParseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: `{}` at line {}, column {}",
            self.kind.describe(),
            self.lexeme,
            self.pos.line,
            self.pos.start
        )
    }
}

impl std::error::Error for ParseErr {}

/// Recursive-descent parser over a two-token window. Here the lookahead does
/// real work: a scalar followed by a colon opens a mapping, a scalar
/// followed by anything else is just a scalar.
pub struct Parser {
    lexer: Lexer,
    curr_tok: Token,
    next_tok: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let curr_tok = lexer.read_token();
        let next_tok = lexer.read_token();

        Self {
            lexer,
            curr_tok,
            next_tok,
        }
    }

    pub fn parse(&mut self) -> Result<Value, ParseErr> {
        match self.curr_tok.kind {
            TokenKind::Eof => Ok(Value::Null),
            TokenKind::Hyphen => self.parse_array().map(Value::Array),
            TokenKind::Number | TokenKind::String | TokenKind::Bool
                if self.will_have_token(TokenKind::Colon) =>
            {
                self.parse_object().map(Value::Object)
            }
            TokenKind::Number => self.parse_num().map(Value::Number),
            TokenKind::String => Ok(Value::String(self.parse_string())),
            TokenKind::Bool => self.parse_bool().map(Value::Bool),
            _ => Err(self.make_err(ParseErrKind::UnexpectedToken)),
        }
    }

    // A sequence keeps collecting entries while hyphens line up with the
    // column of the first one.
    fn parse_array(&mut self) -> Result<Vec<Value>, ParseErr> {
        let base = self.curr_tok.pos;
        self.read_token();

        let mut arr = Vec::new();
        loop {
            arr.push(self.parse()?);

            if !self.have_token_in_base(TokenKind::Hyphen, base.start) {
                break;
            }
            self.read_token();
        }

        Ok(arr)
    }

    // A mapping keeps collecting properties while keys line up with the
    // column of the first one and are themselves followed by a colon.
    fn parse_object(&mut self) -> Result<Vec<Property>, ParseErr> {
        let base = self.curr_tok.pos;

        let mut obj = Vec::new();
        loop {
            obj.push(self.parse_prop()?);

            if !self.have_token_in_base(TokenKind::String, base.start)
                || !self.will_have_token(TokenKind::Colon)
            {
                break;
            }
        }

        Ok(obj)
    }

    fn parse_prop(&mut self) -> Result<Property, ParseErr> {
        let key = self.parse_string();

        if !self.have_token(TokenKind::Colon) {
            return Err(self.make_err(ParseErrKind::MissingColon));
        }
        self.read_token();

        let val = self.parse()?;

        Ok(Property { key, val })
    }

    fn parse_num(&mut self) -> Result<i32, ParseErr> {
        let parsed = self
            .curr_tok
            .literal
            .parse::<i32>()
            .map_err(|_| self.make_err(ParseErrKind::MalformedNumber))?;

        self.read_token();

        Ok(parsed)
    }

    // Scalars arrive quoted whether or not the source quoted them; the value
    // holds the content with the quotes stripped. Number and bool tokens can
    // land here as mapping keys, in which case the literal is kept as-is.
    fn parse_string(&mut self) -> String {
        let literal = &self.curr_tok.literal;
        let unquoted = if is_quoted(literal) {
            literal[1..literal.len() - 1].to_string()
        } else {
            literal.clone()
        };

        self.read_token();

        unquoted
    }

    fn parse_bool(&mut self) -> Result<bool, ParseErr> {
        let parsed = match self.curr_tok.literal.as_str() {
            "true" => true,
            "false" => false,
            _ => return Err(self.make_err(ParseErrKind::MalformedBool)),
        };

        self.read_token();

        Ok(parsed)
    }

    fn read_token(&mut self) {
        self.curr_tok = mem::replace(&mut self.next_tok, self.lexer.read_token());
    }

    fn have_token(&self, kind: TokenKind) -> bool {
        self.curr_tok.kind == kind
    }

    fn have_token_in_base(&self, kind: TokenKind, base: usize) -> bool {
        self.have_token(kind) && self.curr_tok.pos.start == base
    }

    fn will_have_token(&self, kind: TokenKind) -> bool {
        self.next_tok.kind == kind
    }

    fn make_err(&self, kind: ParseErrKind) -> ParseErr {
        ParseErr {
            kind,
            pos: self.curr_tok.pos,
            lexeme: self.curr_tok.literal.clone(),
        }
    }
}

fn is_quoted(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('"') && s.ends_with('"')
}
