//! Command-line configuration for the `monkey` binary

use std::fmt;
use std::path::PathBuf;

/// Prompt printed before each REPL line
pub const PROMPT: &str = ">> ";

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Interactive token dump of each input line
    Repl,
    /// Parse a file and print its statements
    Parse(PathBuf),
    /// Print the token stream of a file
    Tokens(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub verbose: bool,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Repl,
            verbose: false,
            color: true,
        }
    }
}

/// Errors while reading the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `-h`/`--help` was given; not a failure, but parsing stops
    HelpRequested,
    UnknownFlag(String),
    UnexpectedArgument(String),
    /// `--tokens` needs a file to read
    MissingFile,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HelpRequested => write!(f, "help requested"),
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown option '{}'", flag),
            ConfigError::UnexpectedArgument(arg) => {
                write!(f, "Unexpected argument '{}': only one input file is accepted", arg)
            }
            ConfigError::MissingFile => write!(f, "--tokens requires an input file"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Build a configuration from the arguments after the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut file: Option<PathBuf> = None;
        let mut tokens = false;

        for arg in args {
            match arg.as_str() {
                "-h" | "--help" => return Err(ConfigError::HelpRequested),
                "-v" | "--verbose" => config.verbose = true,
                "--no-color" => config.color = false,
                "--tokens" => tokens = true,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(ConfigError::UnknownFlag(arg));
                }
                _ => {
                    if file.is_some() {
                        return Err(ConfigError::UnexpectedArgument(arg));
                    }
                    file = Some(PathBuf::from(arg));
                }
            }
        }

        config.mode = match (file, tokens) {
            (Some(path), true) => Mode::Tokens(path),
            (Some(path), false) => Mode::Parse(path),
            (None, true) => return Err(ConfigError::MissingFile),
            (None, false) => Mode::Repl,
        };

        Ok(config)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

/// Usage text for `--help` and argument errors.
pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {0} [OPTIONS] [FILE]\n\
         \n\
         With no FILE, starts a REPL that prints the tokens of each line.\n\
         \n\
         Options:\n\
         \x20 --tokens      Print the token stream of FILE instead of parsing it\n\
         \x20 -v, --verbose Log parser decisions to stderr\n\
         \x20 --no-color    Disable coloured output\n\
         \x20 -h, --help    Show this message",
        program_name
    )
}
