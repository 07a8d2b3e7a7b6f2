use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use sensegroup::config::Config;
use sensegroup::frequency::document::load_documents;
use sensegroup::grouping::assemble::build_groups;
use sensegroup::output::terminal;
use sensegroup::senses::collect::all_words;
use sensegroup::senses::lexicon::StaticLexicon;

/// sensegroup: group word senses into semantic groups.
///
/// Expands words into senses using a lexicon file, links senses whose
/// similarity meets the threshold, and reports every maximal clique as a
/// group. Tunables come from SENSEGROUP_* environment variables.
#[derive(Parser)]
#[command(name = "sensegroup", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build semantic groups from a list of words
    Group {
        /// Lexicon JSON file (word senses and pairwise similarities)
        #[arg(long)]
        lexicon: PathBuf,

        /// Read words from a file, one per line
        #[arg(long)]
        words_file: Option<PathBuf>,

        /// Print groups as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Words to group
        words: Vec<String>,
    },

    /// Rank groups by how characteristic they are of a specific collection
    Rank {
        /// Lexicon JSON file (word senses and pairwise similarities)
        #[arg(long)]
        lexicon: PathBuf,

        /// JSON array of documents from the specific collection
        #[arg(long)]
        specific: PathBuf,

        /// JSON array of documents from the generic collection
        #[arg(long)]
        generic: PathBuf,

        /// Read words from a file, one per line (default: all words of the specific documents)
        #[arg(long)]
        words_file: Option<PathBuf>,

        /// Print the ranking as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sensegroup=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Group {
            lexicon,
            words_file,
            json,
            words,
        } => {
            let lexicon = StaticLexicon::load(&lexicon)?;
            let mut words = words;
            if let Some(path) = words_file {
                words.extend(read_words(&path)?);
            }
            if words.is_empty() {
                anyhow::bail!("No words given. Pass words as arguments or use --words-file.");
            }

            info!(words = words.len(), threshold = config.threshold, "Grouping words");
            let outcome = build_groups(&words, &lexicon, &config.grouping_params());

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome.groups)?);
            } else {
                terminal::display_groups(&outcome);
            }
        }

        Commands::Rank {
            lexicon,
            specific,
            generic,
            words_file,
            json,
        } => {
            let lexicon = StaticLexicon::load(&lexicon)?;
            let specific_docs = load_documents(&specific, &lexicon)?;
            let generic_docs = load_documents(&generic, &lexicon)?;

            let words: Vec<String> = match words_file {
                Some(path) => read_words(&path)?,
                None => all_words(&specific_docs).into_iter().collect(),
            };

            info!(
                words = words.len(),
                specific = specific_docs.len(),
                generic = generic_docs.len(),
                "Ranking groups"
            );

            let outcome = build_groups(&words, &lexicon, &config.grouping_params());
            let ranked = config
                .context_filter()
                .rank(&outcome.groups, &specific_docs, &generic_docs)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                terminal::display_ranked_groups(&ranked);
                if outcome.budget_exceeded {
                    println!("  Search budget exceeded, ranking covers a partial group list.");
                }
            }
        }
    }

    Ok(())
}

/// Read one word per line, skipping blank lines.
fn read_words(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read words file {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
