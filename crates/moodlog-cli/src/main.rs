//! Moodlog
//!
//! Command-line mood journal. Notes are classified by a hosted sentiment
//! model, answered with a short reflection and tips, and saved locally.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use moodlog_cli::{render, AppConfig, Cli, Commands, Pipeline};
use moodlog_core::Credential;
use moodlog_journal::{FileKeyValueStore, JournalStore, WeeklySummary};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    let config = AppConfig::load(&cli.config, &cli)?;
    info!("Journal directory: {}", config.journal.data_dir.display());

    match &cli.command {
        Commands::Analyze { text } => {
            let credential = Credential::from_optional(cli.token.as_deref())?;
            let pipeline = Pipeline::from_config(&config, credential)?;

            let entry = pipeline.run(&text.join(" ")).await?;
            print!("{}", render::entry_card(&entry)?);
        }

        Commands::History { limit } => {
            let entries = journal(&config).get_all().await?;
            let shown = limit.unwrap_or(entries.len()).min(entries.len());
            print!("{}", render::history(&entries[..shown])?);
        }

        Commands::Weekly => {
            let entries = journal(&config).get_all().await?;
            let summary = WeeklySummary::from_entries(&entries, Utc::now());
            print!("{}", render::weekly(&summary)?);
        }

        Commands::Clear { yes } => {
            if !*yes {
                anyhow::bail!("refusing to delete the journal without --yes");
            }
            journal(&config).clear().await?;
            println!("Geçmiş temizlendi.");
        }
    }

    Ok(())
}

fn journal(config: &AppConfig) -> JournalStore {
    JournalStore::new(Arc::new(FileKeyValueStore::new(&config.journal.data_dir)))
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("moodlog=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moodlog=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
