//! CLI argument definitions for the campus advisor

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use campus_advisor::config::ConfigOverrides;
use campus_advisor::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to [`Level`] for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `model`, `catalog_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Chat with the advising assistant.
    ///
    /// Uses the configured LLM when an API key is set, otherwise falls back
    /// to rule-based replies. Either way, navigation intents are detected.
    Chat {
        /// The message to send
        #[arg(value_name = "MESSAGE")]
        message: String,

        /// Skip the LLM and answer with the rule-based resolver only
        #[arg(long)]
        offline: bool,

        /// User role the assistant should assume (e.g., student, advisor)
        #[arg(long, value_name = "ROLE", default_value = "student")]
        role: String,

        /// Print the reply as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Recommend a two-term course plan from survey answers.
    ///
    /// All answers are optional; missing or unrecognized values take the
    /// survey's default branches.
    Plan {
        /// Preferred workload (light, medium, heavy)
        #[arg(long, value_name = "LEVEL")]
        workload: Option<String>,

        /// Learning style (visual, hands-on, independent)
        #[arg(long = "learning-style", value_name = "STYLE")]
        learning_style: Option<String>,

        /// Group-work preference (love, dislike, neutral)
        #[arg(long = "group-work", value_name = "PREF")]
        group_work: Option<String>,

        /// Free-text career goal (e.g., "security engineer")
        #[arg(long = "career-goal", value_name = "GOAL")]
        career_goal: Option<String>,

        /// Completed course codes; defaults to the catalog's sample student
        #[arg(long, value_name = "CODES", num_args = 1..)]
        completed: Vec<String>,

        /// Print the plan as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "advisor",
    about = "Smart Campus advising command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the assistant API key for this run
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Override the assistant model for this run
    #[arg(long = "model", value_name = "MODEL")]
    pub model: Option<String>,

    /// Override the assistant endpoint for this run
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override the course catalog file for this run
    #[arg(long = "catalog-file", value_name = "PATH")]
    pub catalog_file: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a [`ConfigOverrides`] struct that can be
    /// applied to the loaded configuration for this run only, without
    /// touching the persistent config file.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            endpoint: self.endpoint.clone(),
            catalog_file: self
                .catalog_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
