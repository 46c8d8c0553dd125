//! Read-print loop
//!
//! Each input line gets a fresh [`Lexer`]; every token up to the end of the
//! line is printed with its kind and literal. Nothing is parsed or evaluated.

use crate::config::PROMPT;
use crate::parser::{Lexer, Token, TokenKind};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

const LOGO: &str = r"
@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@
@@@  @@@@@  @@@@      @@@@  @@@@  @@@  @@@@  @@@@@
@@@   @@@   @@@  @@@@  @@@   @@@  @@@  @@@  @@@@@@
@@@  @ @ @  @@@  @@@@  @@@  @ @@  @@@     @@@@@@@@
@@@  @@ @@  @@@  @@@@  @@@  @@ @  @@@  @@@  @@@@@@
@@@  @@@@@  @@@@      @@@@  @@@@  @@@  @@@@  @@@@@
@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@
";

/// Name of the user running the REPL, for the greeting.
pub fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "there".to_string())
}

/// Greeting printed when the REPL starts.
pub fn banner(user: &str) -> String {
    format!("Hello {}! Welcome to the Monkey REPL.\n{}", user, LOGO)
}

/// One line of REPL output for a token.
pub fn format_token(token: &Token, color: bool) -> String {
    let kind = format!("{:<9}", token.kind.to_string());
    let literal = format!("{:?}", token.literal);

    if !color {
        return format!("{} {}", kind, literal);
    }

    match token.kind {
        TokenKind::Illegal => format!("{} {}", kind.red().bold(), literal.red()),
        k if k.is_keyword() => format!("{} {}", kind.magenta(), literal),
        _ => format!("{} {}", kind.cyan(), literal),
    }
}

/// Run the loop until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(mut input: R, output: &mut W, color: bool) -> io::Result<()> {
    let mut line = String::new();

    loop {
        if color {
            write!(output, "{}", PROMPT.green())?;
        } else {
            write!(output, "{}", PROMPT)?;
        }
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        for token in Lexer::new(&line) {
            writeln!(output, "{}", format_token(&token, color))?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let mut output = Vec::new();
        start(Cursor::new(input), &mut output, false).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_prints_tokens_per_line() {
        let output = run("let x = 5;\nreturn x;\n");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], r#">> LET       "let""#);
        assert_eq!(lines[1], r#"IDENT     "x""#);
        assert_eq!(lines[2], r#"=         "=""#);
        assert_eq!(lines[3], r#"INT       "5""#);
        assert_eq!(lines[4], r#";         ";""#);
        assert_eq!(lines[5], r#">> RETURN    "return""#);
        assert_eq!(lines.last(), Some(&">> "));
    }

    #[test]
    fn test_blank_line_prints_only_prompt() {
        assert_eq!(run("\n"), ">> >> \n");
    }

    #[test]
    fn test_illegal_tokens_are_shown() {
        let output = run("@\n");
        assert!(output.contains(r#"ILLEGAL   "@""#));
    }

    #[test]
    fn test_banner_greets_user() {
        let text = banner("ada");
        assert!(text.starts_with("Hello ada!"));
        assert!(text.contains("@@@"));
    }
}
