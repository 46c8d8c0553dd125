// Monkey: tokenizer and statement parser front end

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use log::{Level, LevelFilter, Log, Metadata, Record};

use monkey::config::{usage, Config, ConfigError, Mode};
use monkey::parser::{Lexer, Parser, TokenKind};
use monkey::repl;

/// Writes log records to stderr, one line each.
struct StderrLogger {
    level: LevelFilter,
    color: bool,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = format!("{:<5}", record.level());
        let level = if !self.color {
            level
        } else {
            match record.level() {
                Level::Error => level.red().to_string(),
                Level::Warn => level.yellow().to_string(),
                _ => level.dark_grey().to_string(),
            }
        };
        eprintln!("[{}] {}", level, record.args());
    }

    fn flush(&self) {}
}

fn init_logger(config: &Config) -> Result<(), log::SetLoggerError> {
    let level = config.log_level();
    log::set_boxed_logger(Box::new(StderrLogger {
        level,
        color: config.color,
    }))?;
    log::set_max_level(level);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| "monkey".to_string());

    let mut config = match Config::from_args(args) {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            println!("{}", usage(&program_name));
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", usage(&program_name));
            std::process::exit(2);
        }
    };

    if !io::stdout().is_tty() {
        config.color = false;
    }

    init_logger(&config)?;

    let ok = match &config.mode {
        Mode::Repl => {
            let mut stdout = io::stdout();
            write!(stdout, "{}", repl::banner(&repl::current_user()))?;
            repl::start(io::stdin().lock(), &mut stdout, config.color)?;
            true
        }
        Mode::Parse(path) => parse_file(path, config.color)?,
        Mode::Tokens(path) => dump_tokens(path, config.color)?,
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}

fn read_source(path: &Path) -> io::Result<String> {
    if !path.exists() {
        eprintln!("Error: File '{}' not found", path.display());
        std::process::exit(1);
    }
    fs::read_to_string(path)
}

/// Parse a file and print its statements; false when diagnostics were produced.
fn parse_file(path: &Path, color: bool) -> io::Result<bool> {
    let source = read_source(path)?;

    eprintln!("Parsing {}...", path.display());
    let parsed = Parser::from_source(&source).parse_program();

    let mut stdout = io::stdout().lock();
    for stmt in &parsed.program.statements {
        writeln!(stdout, "{}", stmt)?;
    }

    if parsed.has_errors() {
        for err in &parsed.errors {
            let label = if color {
                "error".red().bold().to_string()
            } else {
                "error".to_string()
            };
            eprintln!(
                "{}: {}\n  --> {}:{}",
                label,
                err.message,
                path.display(),
                err.location
            );
        }
        eprintln!(
            "Parsing failed with {} error(s); {} statement(s) recovered.",
            parsed.errors.len(),
            parsed.program.len()
        );
        return Ok(false);
    }

    eprintln!(
        "Parsed successfully. Found {} top-level statements.",
        parsed.program.len()
    );
    Ok(true)
}

/// Print every token of a file; false when any token is illegal.
fn dump_tokens(path: &Path, color: bool) -> io::Result<bool> {
    let source = read_source(path)?;

    let mut stdout = io::stdout().lock();
    let mut illegal = 0;
    for token in Lexer::new(&source).tokenize() {
        if token.is(TokenKind::Illegal) {
            illegal += 1;
        }
        writeln!(
            stdout,
            "{:>4}:{:<3} {}",
            token.location.line,
            token.location.column,
            repl::format_token(&token, color)
        )?;
    }

    if illegal > 0 {
        eprintln!("Found {} illegal token(s).", illegal);
    }
    Ok(illegal == 0)
}
