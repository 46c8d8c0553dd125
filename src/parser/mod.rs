//! Monkey source code front end
//!
//! This module transforms Monkey source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds and keyword classification
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → AST + diagnostics)
//! - [`ast`]: AST node definitions
//!
//! # Supported Statements
//!
//! Only `let <name> = ...;` and `return ...;` are recognised. Expressions are
//! tokenized but not parsed: the parser skips them up to the closing `;`.
//! Anything else at statement position is skipped without a diagnostic.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Node, Program, Statement};
pub use lexer::Lexer;
pub use parser::{ParseError, ParsedProgram, Parser};
pub use token::{lookup_ident, SourceLocation, Token, TokenKind};
