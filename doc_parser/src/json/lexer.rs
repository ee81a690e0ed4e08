use super::token::{Pos, Token, TokenKind};

const CHAR_EOF: char = '\0';

/// Keyword literals and the kinds they map to. Read-only after init.
const KEYWORDS: [(&str, TokenKind); 2] = [("true", TokenKind::Bool), ("false", TokenKind::Bool)];

fn keyword_kind(word: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(literal, _)| *literal == word)
        .map(|(_, kind)| *kind)
}

/// Turns a sequence of characters into tokens, one `read_token` call at a
/// time. The lexer itself never fails: unrecognized input comes back as an
/// `Illegal` token and is rejected by the parser wherever a value is
/// expected.
pub struct Lexer {
    src: Vec<char>,
    curr_index: usize,
    next_index: usize,
    pos: Pos,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            src: input.chars().collect(),
            curr_index: 0,
            next_index: 0,
            pos: Pos::default(),
        }
    }

    pub fn read_token(&mut self) -> Token {
        self.read_char();
        self.skip_whitespace();

        match self.curr_char() {
            CHAR_EOF => Token {
                kind: TokenKind::Eof,
                literal: String::new(),
                pos: self.pos,
            },
            '[' => self.compose_single(TokenKind::LBracket),
            ']' => self.compose_single(TokenKind::RBracket),
            '{' => self.compose_single(TokenKind::LBrace),
            '}' => self.compose_single(TokenKind::RBrace),
            ',' => self.compose_single(TokenKind::Comma),
            ':' => self.compose_single(TokenKind::Colon),
            '"' => self.compose_string(),
            c if is_num(c) => self.compose_num(),
            c if is_letter(c) => self.compose_letters(),
            c => Token {
                kind: TokenKind::Illegal,
                literal: c.to_string(),
                pos: self.pos,
            },
        }
    }

    fn skip_whitespace(&mut self) {
        while is_whitespace(self.curr_char()) {
            self.read_char();
        }
    }

    // Single-character tokens are not consumed here; the read_char at the
    // start of the next read_token call advances past them.
    fn compose_single(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            literal: self.curr_char().to_string(),
            pos: self.pos,
        }
    }

    fn compose_string(&mut self) -> Token {
        let line = self.pos.line;
        let start = self.pos.start;
        let literal = self.read_string();

        Token {
            kind: TokenKind::String,
            literal,
            pos: Pos {
                line,
                start,
                end: self.pos.end,
            },
        }
    }

    // Consumes through the next unescaped quote, or to end of input. The
    // returned literal keeps both quotes and every backslash verbatim.
    fn read_string(&mut self) -> String {
        let start = self.curr_index;
        let mut escaped = false;

        loop {
            self.read_char();

            let c = self.curr_char();
            if c == CHAR_EOF {
                break;
            }
            if escaped {
                escaped = false;
                continue;
            }
            match c {
                '\\' => escaped = true,
                '"' => break,
                _ => {}
            }
        }

        let end = self.next_index.min(self.src.len());
        self.src[start..end].iter().collect()
    }

    fn compose_num(&mut self) -> Token {
        let line = self.pos.line;
        let start = self.pos.start;
        let literal = self.read_number();

        Token {
            kind: TokenKind::Number,
            literal,
            pos: Pos {
                line,
                start,
                end: self.pos.end,
            },
        }
    }

    fn read_number(&mut self) -> String {
        let start = self.curr_index;

        while is_num(self.next_char()) {
            self.read_char();
        }

        self.src[start..self.next_index].iter().collect()
    }

    fn compose_letters(&mut self) -> Token {
        let line = self.pos.line;
        let start = self.pos.start;
        let literal = self.read_letters();
        let kind = keyword_kind(&literal).unwrap_or(TokenKind::Illegal);

        Token {
            kind,
            literal,
            pos: Pos {
                line,
                start,
                end: self.pos.end,
            },
        }
    }

    fn read_letters(&mut self) -> String {
        let start = self.curr_index;

        while is_letter(self.next_char()) {
            self.read_char();
        }

        self.src[start..self.next_index].iter().collect()
    }

    fn read_char(&mut self) {
        if self.next_index > self.src.len() {
            return;
        }

        self.curr_index = self.next_index;
        self.next_index += 1;

        self.pos.advance(self.curr_char());
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
    c.is_ascii_lowercase()
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
