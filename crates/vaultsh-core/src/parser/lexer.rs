//! Lexer for tokenizing command lines.
//!
//! Handles:
//! - Whitespace-separated words
//! - Double-quoted strings (`"value with spaces"`), opened only at the start
//!   of a token; an unterminated quote runs to the end of the line

// =============================================================================
// Token Types
// =============================================================================

/// Token types produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A bare word, ended by whitespace
    Word(String),
    /// Contents of a double-quoted string, without the quotes
    Quoted(String),
}

// =============================================================================
// Lexer
// =============================================================================

/// Lexer for tokenizing a command line
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenize the entire input into a vector
    pub fn tokenize(self) -> Vec<Token> {
        self.collect()
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn parse_quoted(&mut self) -> Token {
        self.pos += 1; // skip opening "
        let start = self.pos;

        match self.input[start..].find('"') {
            Some(offset) => {
                self.pos = start + offset + 1;
                Token::Quoted(self.input[start..start + offset].to_string())
            }
            None => {
                self.pos = self.input.len();
                Token::Quoted(self.input[start..].to_string())
            }
        }
    }

    fn parse_word(&mut self) -> Token {
        let start = self.pos;
        while let Some(c) = self.current_char() {
            if c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
        Token::Word(self.input[start..self.pos].to_string())
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        match self.current_char()? {
            '"' => Some(self.parse_quoted()),
            _ => Some(self.parse_word()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
