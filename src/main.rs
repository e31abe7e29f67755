use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use feedgist::config::Config;
use feedgist::output::{prompt, terminal};
use feedgist::topics::{tokenize::tokenize, Document, TopicClusterer};

/// feedgist: group a batch of feed documents into topics.
///
/// Reads documents from a JSON array, clusters them by TF-IDF similarity, and
/// prints a ranked overview or a size-bounded block ready for an LLM prompt.
#[derive(Parser)]
#[command(name = "feedgist", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cluster documents and show the ranked topics
    Cluster {
        #[command(flatten)]
        cluster: ClusterArgs,

        /// Print the clusters as JSON instead of the terminal overview
        #[arg(long)]
        json: bool,
    },

    /// Cluster documents and render the prompt-ready text block
    Render {
        #[command(flatten)]
        cluster: ClusterArgs,

        /// Documents shown per cluster
        #[arg(long)]
        max_items: Option<usize>,

        /// Characters of excerpt/body shown per document
        #[arg(long)]
        body_chars: Option<usize>,

        /// Write the block to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Show how a piece of text is tokenized
    Tokens {
        /// The text to tokenize
        text: String,
    },
}

/// Flags shared by every command that runs the clusterer.
#[derive(Args)]
struct ClusterArgs {
    /// JSON file containing an array of documents
    #[arg(long, short)]
    input: PathBuf,

    /// Maximum number of labeled clusters
    #[arg(long)]
    max_clusters: Option<usize>,

    /// Clusters smaller than this are pooled into "Other"
    #[arg(long)]
    min_cluster_size: Option<usize>,

    /// Stop merging once the best pair scores below this (0.0-1.0)
    #[arg(long)]
    threshold: Option<f64>,
}

impl ClusterArgs {
    /// Apply command-line overrides on top of the environment config.
    fn apply(&self, config: &mut Config) {
        if let Some(v) = self.max_clusters {
            config.max_clusters = v;
        }
        if let Some(v) = self.min_cluster_size {
            config.min_cluster_size = v;
        }
        if let Some(v) = self.threshold {
            config.similarity_threshold = v;
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so a rendered block on stdout can be piped as-is
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("feedgist=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cluster { cluster, json } => {
            let mut config = Config::load()?;
            cluster.apply(&mut config);
            config.validate()?;

            let documents = load_documents(&cluster.input)?;
            let clusters = config.clusterer().cluster(&documents);

            if json {
                println!("{}", serde_json::to_string_pretty(&clusters)?);
            } else {
                terminal::display_clusters(&clusters);
            }
        }

        Commands::Render {
            cluster,
            max_items,
            body_chars,
            output,
        } => {
            let mut config = Config::load()?;
            cluster.apply(&mut config);
            if let Some(v) = max_items {
                config.max_items_per_cluster = v;
            }
            if let Some(v) = body_chars {
                config.max_body_chars = v;
            }
            config.validate()?;

            let documents = load_documents(&cluster.input)?;
            let clusters = config.clusterer().cluster(&documents);
            let block = prompt::render_with(&clusters, &config.render_options());

            match output {
                Some(path) => {
                    fs::write(&path, &block)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(
                        path = %path.display(),
                        clusters = clusters.len(),
                        chars = block.chars().count(),
                        "Wrote prompt block"
                    );
                    println!(
                        "{}",
                        format!("Prompt block saved to: {}", path.display()).bold()
                    );
                }
                None => println!("{block}"),
            }
        }

        Commands::Tokens { text } => {
            let tokens = tokenize(&text);
            terminal::display_tokens(&text, &tokens);
        }
    }

    Ok(())
}

/// Read a JSON array of documents from disk.
fn load_documents(path: &Path) -> Result<Vec<Document>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    let documents: Vec<Document> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of documents", path.display()))?;

    if documents.is_empty() {
        warn!(path = %path.display(), "Input file contains no documents");
    } else {
        info!(
            path = %path.display(),
            documents = documents.len(),
            "Loaded documents"
        );
    }

    Ok(documents)
}
