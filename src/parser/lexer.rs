//! Lexer (tokenizer) for Monkey source code
//!
//! Converts raw source text into [`Token`]s on demand. The lexer never fails:
//! characters it does not understand come back as [`TokenKind::Illegal`] and
//! the caller decides whether that is fatal. Once the end of input is reached
//! every further call to [`Lexer::next_token`] returns [`TokenKind::Eof`].

use super::token::{lookup_ident, SourceLocation, Token, TokenKind};

/// Sentinel character standing in for the end of input.
pub const EOF_CHAR: char = '\0';

/// Lexer for Monkey source code
pub struct Lexer {
    input: Vec<char>,
    /// Index of `ch` in `input`
    position: usize,
    /// Index of the character after `ch`
    read_position: usize,
    /// Current character under examination
    ch: char,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: EOF_CHAR,
            line: 1,
            column: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Tokenize the remaining input, ending with exactly one `EOF` token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    /// Scan and return the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let loc = self.current_location();
        let token = match self.ch {
            '=' => self.one_or_two_char(TokenKind::Assign, TokenKind::Eq, loc),
            '!' => self.one_or_two_char(TokenKind::Bang, TokenKind::NotEq, loc),
            '+' => Token::new(TokenKind::Plus, "+", loc),
            '-' => Token::new(TokenKind::Minus, "-", loc),
            '*' => Token::new(TokenKind::Asterisk, "*", loc),
            '/' => Token::new(TokenKind::Slash, "/", loc),
            '%' => Token::new(TokenKind::Mod, "%", loc),
            '<' => Token::new(TokenKind::Lt, "<", loc),
            '>' => Token::new(TokenKind::Gt, ">", loc),
            ',' => Token::new(TokenKind::Comma, ",", loc),
            ';' => Token::new(TokenKind::Semicolon, ";", loc),
            '(' => Token::new(TokenKind::LParen, "(", loc),
            ')' => Token::new(TokenKind::RParen, ")", loc),
            '{' => Token::new(TokenKind::LBrace, "{", loc),
            '}' => Token::new(TokenKind::RBrace, "}", loc),

            // The cursor stays on the sentinel so EOF repeats.
            EOF_CHAR => return Token::new(TokenKind::Eof, EOF_CHAR.to_string(), loc),

            // These readers leave the cursor on the first unconsumed character.
            'a'..='z' | 'A'..='Z' | '_' => return self.identifier_or_keyword(loc),
            '0'..='9' => return self.number_literal(loc),

            ch => {
                log::warn!("illegal character {:?} at {}", ch, loc);
                Token::new(TokenKind::Illegal, ch.to_string(), loc)
            }
        };

        self.read_char();
        token
    }

    /// `=`/`==` and `!`/`!=`: consumes the second `=` when present.
    fn one_or_two_char(
        &mut self,
        single: TokenKind,
        double: TokenKind,
        loc: SourceLocation,
    ) -> Token {
        if self.peek() == Some('=') {
            let first = self.ch;
            self.read_char();
            Token::new(double, format!("{}{}", first, self.ch), loc)
        } else {
            Token::new(single, self.ch.to_string(), loc)
        }
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, loc: SourceLocation) -> Token {
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }

        let ident: String = self.input[start..self.position].iter().collect();
        Token::new(lookup_ident(&ident), ident, loc)
    }

    /// Parse numeric literal (decimal integers only)
    fn number_literal(&mut self, loc: SourceLocation) -> Token {
        let start = self.position;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }

        let digits: String = self.input[start..self.position].iter().collect();
        Token::new(TokenKind::Int, digits, loc)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, ' ' | '\t' | '\n' | '\r') {
            self.read_char();
        }
    }

    /// Advance `ch` to the next character, or to the sentinel past the end.
    fn read_char(&mut self) {
        if self.ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.ch = self
            .input
            .get(self.read_position)
            .copied()
            .unwrap_or(EOF_CHAR);
        self.position = self.read_position;
        if self.read_position < self.input.len() {
            self.read_position += 1;
        }
    }

    /// Peek at the character after `ch` without consuming
    fn peek(&self) -> Option<char> {
        if self.position + 1 < self.input.len() {
            Some(self.input[self.position + 1])
        } else {
            None
        }
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to, but not including, `EOF`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            None
        } else {
            Some(token)
        }
    }
}

/// ASCII letters and underscore; digits never continue an identifier.
fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}
