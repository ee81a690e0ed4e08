use super::token::{Pos, Token, TokenKind};

const CHAR_EOF: char = '\0';

/// Literals with a fixed meaning. A scalar run that matches one of these is
/// classified by the table; any other run becomes a string token.
const KEYWORDS: [(&str, TokenKind); 4] = [
    ("-", TokenKind::Hyphen),
    (":", TokenKind::Colon),
    ("true", TokenKind::Bool),
    ("false", TokenKind::Bool),
];

fn keyword_kind(word: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(literal, _)| *literal == word)
        .map(|(_, kind)| *kind)
}

/// Tokenizer for the indentation-significant grammar. `-` and `:` are only
/// punctuation when the character after them says so; anywhere else they are
/// part of a scalar, which is why the cursor keeps one character of
/// lookahead.
pub struct Lexer {
    src: Vec<char>,
    curr_index: usize,
    next_index: usize,
    pos: Pos,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            src: input.chars().collect(),
            curr_index: 0,
            next_index: 0,
            pos: Pos::default(),
        };
        lexer.read_char();

        lexer
    }

    pub fn read_token(&mut self) -> Token {
        self.skip_whitespace();

        match self.curr_char() {
            CHAR_EOF => Token {
                kind: TokenKind::Eof,
                literal: String::new(),
                pos: self.pos,
            },
            '-' => {
                if self.next_char() != ' ' {
                    return self.compose_letters();
                }

                self.compose_single(TokenKind::Hyphen)
            }
            ':' => {
                if self.next_char() != ' ' && self.next_char() != '\n' {
                    return self.compose_letters();
                }

                self.compose_single(TokenKind::Colon)
            }
            '"' => self.compose_quoted_string(),
            c if is_num(c) => self.compose_num(),
            c if is_letter(c) => self.compose_letters(),
            _ => self.compose_single(TokenKind::Unknown),
        }
    }

    fn compose_single(&mut self, kind: TokenKind) -> Token {
        let token = Token {
            kind,
            literal: self.curr_char().to_string(),
            pos: self.pos,
        };
        self.read_char();

        token
    }

    fn compose_quoted_string(&mut self) -> Token {
        let line = self.pos.line;
        let start = self.pos.start;
        let literal = self.read_quoted_string();

        Token {
            kind: TokenKind::String,
            literal,
            pos: Pos {
                line,
                start,
                end: self.pos.start,
            },
        }
    }

    // Consumes through the closing quote; end of input also ends the scan so
    // a missing quote cannot wedge the lexer.
    fn read_quoted_string(&mut self) -> String {
        let start = self.curr_index;
        loop {
            self.read_char();

            if self.curr_char() == CHAR_EOF {
                break;
            }
            if self.curr_char() == '"' {
                self.read_char();
                break;
            }
        }

        self.src[start..self.curr_index].iter().collect()
    }

    fn compose_num(&mut self) -> Token {
        let line = self.pos.line;
        let start = self.pos.start;
        let literal = self.read_num();

        Token {
            kind: TokenKind::Number,
            literal,
            pos: Pos {
                line,
                start,
                end: self.pos.start,
            },
        }
    }

    fn read_num(&mut self) -> String {
        let start = self.curr_index;

        while is_num(self.curr_char()) {
            self.read_char();
        }

        self.src[start..self.curr_index].iter().collect()
    }

    // A bare scalar runs to the end of the line or to a `: `/`:\n` boundary.
    // Bare strings come back wrapped in quotes so the parser sees the same
    // literal shape for quoted and unquoted input.
    fn compose_letters(&mut self) -> Token {
        let line = self.pos.line;
        let start = self.pos.start;
        let literal = self.read_letters();
        let end = self.pos.start;

        match keyword_kind(&literal) {
            Some(kind) => Token {
                kind,
                literal,
                pos: Pos { line, start, end },
            },
            None => Token {
                kind: TokenKind::String,
                literal: quote_string(&literal),
                pos: Pos { line, start, end },
            },
        }
    }

    fn read_letters(&mut self) -> String {
        let start = self.curr_index;

        while is_letter(self.curr_char()) {
            if self.handling_prop() {
                break;
            }

            self.read_char();
        }

        self.src[start..self.curr_index].iter().collect()
    }

    fn handling_prop(&self) -> bool {
        self.curr_char() == ':' && (self.next_char() == ' ' || self.next_char() == '\n')
    }

    fn skip_whitespace(&mut self) {
        while is_whitespace(self.curr_char()) {
            self.read_char();
        }
    }

    fn read_char(&mut self) {
        if self.next_index > self.src.len() {
            return;
        }

        self.move_pos();

        self.curr_index = self.next_index;
        self.next_index += 1;
    }

    // The position tracker is fed the character being left behind, not the
    // one being entered; the very first read has nothing to leave.
    fn move_pos(&mut self) {
        let c = if self.will_read_first_char() {
            CHAR_EOF
        } else {
            self.curr_char()
        };
        self.pos.advance(c);
    }

    fn will_read_first_char(&self) -> bool {
        self.curr_index == 0 && self.next_index == 0
    }

    fn curr_char(&self) -> char {
        self.src.get(self.curr_index).copied().unwrap_or(CHAR_EOF)
    }

    fn next_char(&self) -> char {
        self.src.get(self.next_index).copied().unwrap_or(CHAR_EOF)
    }
}

fn is_num(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_letter(c: char) -> bool {
    (' '..='~').contains(&c)
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn quote_string(s: &str) -> String {
    format!("\"{s}\"")
}
