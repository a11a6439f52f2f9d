// Flat command set: each command is one request or one screen, so there is
// nothing to group under namespaces except `config`.

use crate::types::{LogLevel, OutputFormat, TimeframeArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trendlens")]
#[command(about = "Explore search-interest trends for topics and keywords", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $TRENDLENS_CONFIG, then the XDG config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Trends API base URL, overrides config and $TRENDLENS_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Check that the trends API is reachable")]
    Health,

    #[command(about = "List topics, sub-topics and keywords")]
    Topics {
        /// Ask the API for its topic list instead of the built-in catalog
        #[arg(long)]
        remote: bool,

        /// Only show this topic id
        #[arg(long)]
        topic: Option<String>,
    },

    #[command(about = "Show interest statistics, regions and queries for one keyword")]
    Trends {
        keyword: String,

        #[arg(long, short)]
        timeframe: Option<TimeframeArg>,
    },

    #[command(about = "Compare up to five keywords side by side")]
    Compare {
        /// Comma-separated keywords
        #[arg(long, value_delimiter = ',', conflicts_with = "topic", required_unless_present = "topic")]
        keywords: Vec<String>,

        /// Compare the keywords of a catalog sub-topic
        #[arg(long, requires = "sub_topic")]
        topic: Option<String>,

        #[arg(long, requires = "topic")]
        sub_topic: Option<String>,

        #[arg(long, short)]
        timeframe: Option<TimeframeArg>,
    },

    #[command(about = "Export interest over time for a keyword as CSV")]
    Export {
        keyword: String,

        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        #[arg(long, short)]
        timeframe: Option<TimeframeArg>,
    },

    #[command(about = "Open the interactive dashboard")]
    Dashboard {
        #[arg(long, short)]
        timeframe: Option<TimeframeArg>,

        /// Topic tab to open first
        #[arg(long)]
        topic: Option<String>,

        /// Log file while the dashboard owns the terminal
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    #[command(about = "Show or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a default configuration file")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
