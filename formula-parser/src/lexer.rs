/// Single-pass O(n) lexer for formula source text.
use crate::error::ParseError;
use crate::token::{BinOp, Token, TokenKind};

pub struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
        let mut lexer = Lexer {
            source: source.as_bytes(),
            pos: 0,
            col: 1,
        };
        let mut tokens = Vec::new();
        while let Some(tok) = lexer.next_token()? {
            tokens.push(tok);
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn advance(&mut self) -> u8 {
        let ch = self.source[self.pos];
        self.pos += 1;
        self.col += 1;
        ch
    }

    /// Returns `None` once the input is exhausted.
    fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.advance();
        }

        let col = self.col;
        let Some(ch) = self.peek() else {
            return Ok(None);
        };

        if ch.is_ascii_digit() {
            return self.lex_number(col).map(Some);
        }

        if ch.is_ascii_alphabetic() {
            return Ok(Some(self.lex_ident(col)));
        }

        self.advance();
        let kind = match ch {
            b'+' => TokenKind::Op(BinOp::Add),
            b'-' => TokenKind::Op(BinOp::Sub),
            b'*' => TokenKind::Op(BinOp::Mul),
            b'/' => TokenKind::Op(BinOp::Div),
            b'^' => TokenKind::Op(BinOp::Pow),
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            _ => {
                return Err(ParseError::UnexpectedChar {
                    ch: ch as char,
                    col,
                });
            }
        };
        Ok(Some(Token { kind, col }))
    }

    fn lex_number(&mut self, col: usize) -> Result<Token, ParseError> {
        let start = self.pos;
        let mut seen_dot = false;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == b'.' && !seen_dot {
                seen_dot = true;
                self.advance();
            } else {
                // A second `.` (or any other character) ends the number.
                break;
            }
        }
        let lexeme = std::str::from_utf8(&self.source[start..self.pos]).unwrap();
        let value = lexeme.parse::<f64>().map_err(|_| {
            ParseError::syntax(format!("invalid number literal `{lexeme}`"), col)
        })?;
        Ok(Token {
            kind: TokenKind::Number(value),
            col,
        })
    }

    fn lex_ident(&mut self, col: usize) -> Token {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() {
                self.advance();
            } else {
                break;
            }
        }
        // The language is case-insensitive; identifiers are stored
        // lowercased so `SIN` and `sin` resolve identically.
        let lexeme = std::str::from_utf8(&self.source[start..self.pos])
            .unwrap()
            .to_ascii_lowercase();
        Token {
            kind: TokenKind::Ident(lexeme),
            col,
        }
    }
}
