//! Token vocabulary for Monkey source
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it was built
//! from. Reserved words are recognised by [`lookup_ident`], which the lexer
//! calls after reading a run of identifier characters.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Source location information for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Every kind of token the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Asterisk, // *
    Slash,    // /
    Mod,      // %
    Lt,       // <
    Gt,       // >
    Eq,       // ==
    NotEq,    // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // Keywords
    Function,
    Let,
    Return,
    True,
    False,
    If,
    Else,
}

impl TokenKind {
    /// Returns true for the reserved-word kinds.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::Return
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
        )
    }
}

impl fmt::Display for TokenKind {
    /// Operators and delimiters print as their symbol, everything else as
    /// its upper-case tag. Diagnostics are phrased in this vocabulary.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Mod => "%",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::Return => "RETURN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
        };
        f.pad(s)
    }
}

/// A single lexical token.
///
/// `literal` is always the exact text matched in the source. For
/// [`TokenKind::Eof`] it is the NUL sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            literal: literal.into(),
            location,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of file"),
            TokenKind::Ident => write!(f, "identifier '{}'", self.literal),
            TokenKind::Int => write!(f, "int literal {}", self.literal),
            _ => write!(f, "'{}'", self.literal),
        }
    }
}

fn keywords() -> &'static FxHashMap<&'static str, TokenKind> {
    static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        let mut map = FxHashMap::default();
        map.insert("fn", TokenKind::Function);
        map.insert("let", TokenKind::Let);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map
    })
}

/// Classifies identifier text as a keyword kind or [`TokenKind::Ident`].
///
/// Matching is exact and case-sensitive; any text that is not a reserved
/// word is an identifier.
pub fn lookup_ident(ident: &str) -> TokenKind {
    keywords().get(ident).copied().unwrap_or(TokenKind::Ident)
}
