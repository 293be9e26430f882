use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use digest_engine::ItemFailurePolicy;
use serde::Deserialize;

#[derive(Parser, Debug, Default)]
#[command(
    name = "so-digest",
    about = "Collect the accepted answers of a tag's top-voted questions into one markdown file"
)]
pub struct Cli {
    /// Tag to collect; also used in the document title
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Number of questions requested from the listing
    #[arg(short = 'n', long)]
    pub page_size: Option<u32>,

    /// Directory the digest is written into
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Site root, e.g. https://stackoverflow.com
    #[arg(long)]
    pub base_url: Option<String>,

    /// Site name shown in the document title
    #[arg(long)]
    pub site_name: Option<String>,

    /// Language hint for fenced code blocks
    #[arg(long)]
    pub code_language: Option<String>,

    /// What to do when a question has no usable answer or cannot be fetched
    #[arg(long, value_enum)]
    pub on_failure: Option<FailurePolicy>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// RON settings file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
pub enum FailurePolicy {
    /// Stop the whole run
    Abort,
    /// Leave the question out and continue
    Skip,
}

impl From<FailurePolicy> for ItemFailurePolicy {
    fn from(policy: FailurePolicy) -> Self {
        match policy {
            FailurePolicy::Abort => ItemFailurePolicy::Abort,
            FailurePolicy::Skip => ItemFailurePolicy::Skip,
        }
    }
}
