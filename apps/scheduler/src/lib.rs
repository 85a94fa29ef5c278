pub mod cli;
pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod state;

use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use crate::config::{Config, Overrides};

pub use crate::error::{Result, SchedulerError};
pub use crate::state::LearnerSession;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env(Overrides {
        database_path: cli.db,
        coefficient: cli.coefficient,
    })?;
    config.validate()?;

    // Ensure data directory exists
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    tracing::debug!(path = %config.database_path.display(), "opening review store");
    let mut session = LearnerSession::open(&config.database_path, config.settings.clone())?;
    let now = Utc::now();

    match cli.command {
        Commands::AddWord { word, class } => {
            session.add_word(&word, class)?;
            tracing::info!(word = %word, class, "word added");
        }
        Commands::Next { count } => {
            let n = count.unwrap_or(config.settings.batch_size);
            print_json(&session.get_words(n, now)?)?;
        }
        Commands::Answer { word, correct, .. } => {
            let result = session.record_answer(&word, correct, now)?;
            print_json(&result.review)?;
        }
        Commands::Level => print_json(&session.estimated_level()?)?,
        Commands::SetLevel { level } => print_json(&session.override_level(level)?)?,
        Commands::Intervals => print_json(&session.interval_stats()?)?,
        Commands::Tune => print_json(&session.tune_intervals()?)?,
        Commands::History { word } => print_json(&session.review_history(&word)?)?,
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
