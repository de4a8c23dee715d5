//! CLI command definitions

use clap::{Parser, ValueEnum};
use helpdesk_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for handled inquiries
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliOutputFormat {
    /// Wire response as the contact flow receives it
    Json,
    /// Human-readable rendering
    Text,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Text => OutputFormat::Text,
        }
    }
}

/// CLI arguments for voice-helpdesk
#[derive(Parser, Debug)]
#[command(name = "voice-helpdesk")]
#[command(author, version, about = "Voice helpdesk - answer transcribed customer questions")]
#[command(long_about = r#"
Voice helpdesk resolves a transcribed customer question to an answer.

Resolution order:
1. Managed knowledge base retrieval (when a knowledge base id is configured)
2. Keyword matching over the curated Q&A records
3. A generated answer when confidence falls below the escalation threshold

Configuration files are loaded from (in priority order):
1. HELPDESK_* environment variables (e.g. HELPDESK_KNOWLEDGE__TOP_K=5)
2. --config <path>     Explicit config file
3. ./helpdesk.toml     Project-level config
4. ~/.config/voice-helpdesk/config.toml   Global config

Example:
  voice-helpdesk "レシートを再発行したい"
  voice-helpdesk --event event.json
  cat event.json | voice-helpdesk --event -
  voice-helpdesk --check-knowledge
"#)]
pub struct Cli {
    /// The transcribed question to answer
    #[arg(conflicts_with = "event")]
    pub question: Option<String>,

    /// Contact-flow event JSON to handle ("-" reads stdin)
    #[arg(long, value_name = "PATH")]
    pub event: Option<PathBuf>,

    /// Output format (default: from config, else json)
    #[arg(short, long, value_enum)]
    pub output: Option<CliOutputFormat>,

    /// Call deadline in seconds, overriding [call] timeout_secs (0 disables it)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Validate the knowledge records and exit
    #[arg(long)]
    pub check_knowledge: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory for daily-rotated log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// `true` when the event should be read from stdin.
    pub fn event_from_stdin(&self) -> bool {
        self.event.as_deref().is_some_and(|p| p.as_os_str() == "-")
    }
}
