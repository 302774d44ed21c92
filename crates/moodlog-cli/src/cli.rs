use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(author, version, about = "Mood journal with sentiment-based reflections")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "moodlog.yaml", global = true)]
    pub config: String,

    /// Directory holding the journal
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Inference endpoint base URL; repeat to set the fallback order
    #[arg(long = "endpoint", global = true)]
    pub endpoints: Vec<String>,

    /// Inference service token (hf_...)
    #[arg(long, env = "HF_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a note and save it to the journal
    Analyze {
        /// The note; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Show saved entries, most recent first
    History {
        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Mood distribution over the last seven days
    Weekly,

    /// Delete the whole journal
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_joins_words() {
        let cli = Cli::try_parse_from(["moodlog", "analyze", "Bugün", "iyiyim"]).unwrap();
        match cli.command {
            Commands::Analyze { text } => assert_eq!(text.join(" "), "Bugün iyiyim"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_repeated_endpoints_keep_order() {
        let cli = Cli::try_parse_from([
            "moodlog",
            "--endpoint",
            "http://a",
            "--endpoint",
            "http://b",
            "weekly",
        ])
        .unwrap();
        assert_eq!(cli.endpoints, vec!["http://a", "http://b"]);
    }

    #[test]
    fn test_analyze_requires_text() {
        assert!(Cli::try_parse_from(["moodlog", "analyze"]).is_err());
    }
}
