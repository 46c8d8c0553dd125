//! Statement parser
//!
//! Pulls tokens from a [`Lexer`] one at a time, keeping one token of
//! lookahead, and builds a [`Program`]. Only `let` and `return` statements
//! are recognised; the expression tokens after `=` or `return` are skipped up
//! to the terminating `;`.
//!
//! Syntax errors never abort the parse. A statement that fails to parse is
//! dropped, its [`ParseError`] is collected, and parsing resumes with the
//! next token. [`Parser::parse_program`] hands back the program together with
//! every collected error.

use crate::parser::ast::*;
use crate::parser::lexer::Lexer;
use crate::parser::token::{SourceLocation, Token, TokenKind};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl ParseError {
    /// The lookahead token was not the kind the grammar requires.
    pub fn unexpected_peek(expected: TokenKind, found: &Token) -> Self {
        ParseError {
            message: format!(
                "expected next token to be {}, got {}",
                expected, found.kind
            ),
            location: found.location,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Result of a full parse: the program plus every diagnostic produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedProgram {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParsedProgram {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Converts into a `Result`, failing when any diagnostic was recorded.
    pub fn into_result(self) -> Result<Program, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(self.errors)
        }
    }
}

/// Recursive descent parser for Monkey statements
pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Self {
            lexer,
            cur_token,
            peek_token,
        }
    }

    /// Convenience constructor that builds the lexer as well.
    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    pub fn cur_token(&self) -> &Token {
        &self.cur_token
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Parse the entire program
    pub fn parse_program(mut self) -> ParsedProgram {
        let mut program = Program::new();
        let mut errors = Vec::new();

        while !self.cur_token_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(Some(stmt)) => program.statements.push(stmt),
                Ok(None) => {
                    log::debug!(
                        "skipping {} at {}: not a statement",
                        self.cur_token,
                        self.cur_token.location
                    );
                }
                Err(err) => {
                    log::debug!("dropping statement: {}", err);
                    errors.push(err);
                }
            }
            self.next_token();
        }

        ParsedProgram { program, errors }
    }

    /// Parse one statement starting at the current token.
    ///
    /// Returns `Ok(None)` when the current token does not begin a statement.
    pub fn parse_statement(&mut self) -> Result<Option<Statement>, ParseError> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement().map(|s| Some(Statement::Let(s))),
            TokenKind::Return => self
                .parse_return_statement()
                .map(|s| Some(Statement::Return(s))),
            _ => Ok(None),
        }
    }

    /// Parse `let <ident> = ...;`
    pub fn parse_let_statement(&mut self) -> Result<LetStatement, ParseError> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.cur_token.clone());

        self.expect_peek(TokenKind::Assign)?;
        self.skip_to_semicolon();

        Ok(LetStatement {
            token,
            name,
            value: None,
        })
    }

    /// Parse `return ...;`
    pub fn parse_return_statement(&mut self) -> Result<ReturnStatement, ParseError> {
        let token = self.cur_token.clone();

        self.next_token();
        self.skip_to_semicolon();

        Ok(ReturnStatement {
            token,
            return_value: None,
        })
    }

    pub fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advance only if the lookahead token has the expected kind.
    pub fn expect_peek(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.peek_token_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::unexpected_peek(kind, &self.peek_token))
        }
    }

    /// Discard tokens until the current one is `;` or `EOF`.
    fn skip_to_semicolon(&mut self) {
        while !self.cur_token_is(TokenKind::Semicolon) && !self.cur_token_is(TokenKind::Eof) {
            self.next_token();
        }
    }

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> ParsedProgram {
        Parser::from_source(input).parse_program()
    }

    #[test]
    fn test_let_statements() {
        let parsed = parse("let x = 5;\nlet y = 10;\nlet foobar = 838383;");
        assert!(parsed.errors.is_empty(), "errors: {:?}", parsed.errors);
        assert_eq!(parsed.program.len(), 3);

        for (stmt, expected) in parsed.program.statements.iter().zip(["x", "y", "foobar"]) {
            assert_eq!(stmt.token_literal(), "let");
            match stmt {
                Statement::Let(let_stmt) => {
                    assert_eq!(let_stmt.name.value, expected);
                    assert_eq!(let_stmt.name.token_literal(), expected);
                    assert!(let_stmt.value.is_none());
                }
                other => panic!("Expected let statement, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_return_statements() {
        let parsed = parse("return 5;\nreturn 10;\nreturn 993322;");
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.program.len(), 3);

        for stmt in &parsed.program.statements {
            assert_eq!(stmt.token_literal(), "return");
            assert!(matches!(stmt, Statement::Return(r) if r.return_value.is_none()));
        }
    }

    #[test]
    fn test_missing_assign() {
        let parsed = parse("let x 5;");
        assert!(parsed.program.is_empty());
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].message, "expected next token to be =, got INT");
        assert_eq!(parsed.errors[0].location, SourceLocation::new(1, 7));
    }

    #[test]
    fn test_missing_identifier() {
        let parsed = parse("let = 10;");
        assert!(parsed.program.is_empty());
        assert_eq!(
            parsed.errors[0].message,
            "expected next token to be IDENT, got ="
        );
    }

    #[test]
    fn test_recovers_after_error() {
        let parsed = parse("let x 5;\nlet y = 7;\nreturn y;");
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.program.len(), 2);
        assert_eq!(parsed.program.token_literal(), "let");
        assert!(matches!(&parsed.program.statements[0], Statement::Let(s) if s.name.value == "y"));
    }

    #[test]
    fn test_other_tokens_are_skipped() {
        let parsed = parse("5 + 5; if (x) { return 1; }");
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.program.len(), 1);
        assert_eq!(parsed.program.token_literal(), "return");
    }

    #[test]
    fn test_missing_semicolon_terminates() {
        let parsed = parse("let x = 5 + 5");
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.program.len(), 1);

        let parsed = parse("return");
        assert_eq!(parsed.program.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse("");
        assert!(parsed.program.is_empty());
        assert!(!parsed.has_errors());
        assert_eq!(parsed.program.token_literal(), "");
    }

    #[test]
    fn test_lookahead_helpers() {
        let mut parser = Parser::from_source("let x");
        assert!(parser.cur_token_is(TokenKind::Let));
        assert!(parser.peek_token_is(TokenKind::Ident));

        let err = parser.expect_peek(TokenKind::Assign).unwrap_err();
        assert!(err.message.contains("expected next token to be ="));
        assert!(parser.cur_token_is(TokenKind::Let));

        parser.expect_peek(TokenKind::Ident).unwrap();
        assert_eq!(parser.cur_token().literal, "x");
        assert!(parser.peek_token_is(TokenKind::Eof));
    }

    #[test]
    fn test_into_result() {
        assert!(parse("let a = 1;").into_result().is_ok());
        assert!(parse("let 1;").into_result().is_err());
    }
}
