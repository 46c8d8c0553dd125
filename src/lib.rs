//! # Introduction
//!
//! The front end of a small Monkey toolchain: a character-level lexer and a
//! statement-level parser that together turn source text into an AST.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Program + diagnostics
//! ```
//!
//! 1. [`parser`] — tokenises the source and builds the AST.
//! 2. [`repl`] — read-print loop that shows the token stream of each line.
//! 3. [`config`] — command-line configuration for the `monkey` binary.
//!
//! ## Example
//!
//! ```
//! use monkey::parser::{Node, Parser};
//!
//! let parsed = Parser::from_source("let x = 5; return x;").parse_program();
//! assert!(parsed.errors.is_empty());
//! assert_eq!(parsed.program.statements.len(), 2);
//! assert_eq!(parsed.program.token_literal(), "let");
//! ```

pub mod config;
pub mod parser;
pub mod repl;
