use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use littlesearch_core::{EngineConfig, NoiseWords, SearchEngine};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "littlesearch")]
#[command(about = "Index a small document corpus and run two-keyword OR searches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// File listing the documents to index, whitespace separated
    #[arg(long)]
    docs: PathBuf,
    /// Noise-word file; a built-in English list is used when omitted
    #[arg(long)]
    noise: Option<PathBuf>,
    /// Directory that listed document paths are relative to
    #[arg(long)]
    base_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index and print the top documents for kw1 OR kw2
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        kw1: String,
        kw2: String,
    },
    /// Build the index and print it as JSON
    Dump {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    query: [&'a str; 2],
    results: Vec<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { corpus, json, kw1, kw2 } => {
            let engine = build_engine(&corpus)?;
            let (kw1, kw2) = (kw1.to_lowercase(), kw2.to_lowercase());
            let results = engine.top5_search(&kw1, &kw2);
            if json {
                let out = SearchOutput { query: [&kw1, &kw2], results };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for doc in results {
                    println!("{doc}");
                }
            }
        }
        Commands::Dump { corpus } => {
            let engine = build_engine(&corpus)?;
            println!("{}", serde_json::to_string_pretty(&engine.index().to_sorted_map())?);
        }
    }
    Ok(())
}

fn build_engine(args: &CorpusArgs) -> Result<SearchEngine> {
    let mut engine = SearchEngine::with_config(EngineConfig { base_dir: args.base_dir.clone() });
    match &args.noise {
        Some(noise) => engine
            .make_index(&args.docs, noise)
            .with_context(|| format!("building index from {}", args.docs.display()))?,
        None => {
            engine.set_noise_words(NoiseWords::english());
            let docs = littlesearch_core::document::read_document_list(&args.docs)?;
            engine
                .index_documents(&docs)
                .with_context(|| format!("building index from {}", args.docs.display()))?;
        }
    }
    tracing::info!(keywords = engine.index().len(), "index ready");
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_command() {
        let cli = Cli::try_parse_from([
            "littlesearch", "search", "--docs", "docs.txt", "--json", "Apple", "banana",
        ])
        .unwrap();
        match cli.command {
            Commands::Search { corpus, json, kw1, kw2 } => {
                assert_eq!(corpus.docs, PathBuf::from("docs.txt"));
                assert!(corpus.noise.is_none());
                assert!(json);
                assert_eq!((kw1.as_str(), kw2.as_str()), ("Apple", "banana"));
            }
            Commands::Dump { .. } => panic!("expected search"),
        }
    }

    #[test]
    fn search_requires_two_keywords() {
        assert!(Cli::try_parse_from(["littlesearch", "search", "--docs", "d", "only"]).is_err());
    }

    #[test]
    fn builds_with_builtin_noise_words() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("docs.txt"), "a.txt").unwrap();
        std::fs::write(dir.path().join("a.txt"), "The cat and the hat").unwrap();
        let args = CorpusArgs {
            docs: dir.path().join("docs.txt"),
            noise: None,
            base_dir: Some(dir.path().to_path_buf()),
        };
        let engine = build_engine(&args).unwrap();
        assert_eq!(engine.index().len(), 2);
        assert_eq!(engine.top5_search("cat", "dog"), ["a.txt"]);
    }
}
