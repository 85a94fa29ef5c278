//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Word scheduler - spaced-repetition review queue for one learner
#[derive(Debug, Parser)]
#[command(name = "word-scheduler")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Spaced-repetition scheduler for vocabulary review")]
pub struct Cli {
    /// Review store path (overrides SRS_DATABASE_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Growth coefficient (overrides SRS_COEFFICIENT)
    #[arg(long, global = true)]
    pub coefficient: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a word to the catalog
    AddWord {
        word: String,
        /// Frequency class (higher is rarer)
        class: i64,
    },

    /// Print the next batch of words as JSON
    Next {
        /// Batch size (defaults to SRS_BATCH_SIZE)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Record an answer
    Answer {
        word: String,
        #[arg(long, conflicts_with = "incorrect", required_unless_present = "incorrect")]
        correct: bool,
        #[arg(long)]
        incorrect: bool,
    },

    /// Show the estimated level
    Level,

    /// Override the estimated level
    SetLevel { level: i64 },

    /// Show interval buckets and their counters
    Intervals,

    /// Run an interval tuning pass
    Tune,

    /// Show every review of a word, oldest first
    History { word: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_answer() {
        let cli = Cli::try_parse_from(["word-scheduler", "--db", "x.db", "answer", "Foo", "--incorrect"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("x.db")));
        match cli.command {
            Commands::Answer { word, correct, incorrect } => {
                assert_eq!(word, "Foo");
                assert!(!correct);
                assert!(incorrect);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn answer_needs_exactly_one_outcome() {
        assert!(Cli::try_parse_from(["word-scheduler", "answer", "foo"]).is_err());
        assert!(Cli::try_parse_from(["word-scheduler", "answer", "foo", "--correct", "--incorrect"]).is_err());
    }

    #[test]
    fn parses_next_count() {
        let cli = Cli::try_parse_from(["word-scheduler", "next", "-n", "5"]).unwrap();
        assert!(matches!(cli.command, Commands::Next { count: Some(5) }));
    }
}
