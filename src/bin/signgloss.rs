//! signgloss CLI binary.
//!
//! Translates a sentence into an ISL animation playlist on the command line.

use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use signgloss::error::Result;
use signgloss::pipeline::Translator;
use signgloss::resolve::{DirectoryAssetStore, StaticAssetStore, SynonymPolicy};
use signgloss::synonym::SynonymTable;

#[derive(Parser, Debug)]
#[command(name = "signgloss", version, about = "Translate English text to ISL gloss")]
struct Args {
    /// The sentence to translate.
    sentence: String,

    /// Directory holding <word>.mp4 animation files.
    #[arg(long, env = "SIGNGLOSS_ASSETS")]
    assets: Option<std::path::PathBuf>,

    /// Base URL prefix for animation references.
    #[arg(long, default_value = "/static/animations")]
    base_url: String,

    /// JSON file with the word -> synonym table.
    #[arg(long, env = "SIGNGLOSS_SYNONYMS")]
    synonyms: Option<std::path::PathBuf>,

    /// Substitute synonyms without checking that their assets exist.
    #[arg(long)]
    unchecked_synonyms: bool,

    /// Print the full result as JSON.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v: info, -vv: debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let synonyms = match &args.synonyms {
        Some(path) => SynonymTable::load_or_empty(path),
        None => SynonymTable::empty(),
    };

    let mut builder = Translator::builder().synonyms(Arc::new(synonyms));
    builder = match &args.assets {
        Some(dir) => {
            builder.assets(Arc::new(DirectoryAssetStore::new(dir, args.base_url.as_str())))
        }
        None => builder.assets(Arc::new(StaticAssetStore::new())),
    };
    if args.unchecked_synonyms {
        builder = builder.policy(SynonymPolicy::Unconditional);
    }
    let translator = builder.build();

    let result = translator.translate(&args.sentence)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("tense: {}", result.tense);
    println!("gloss: {}", result.words.join(" "));
    for (word, animation) in result.words.iter().zip(&result.animations) {
        match animation {
            Some(reference) => println!("  {word}\t{reference}"),
            None => println!("  {word}\t(finger-spelled)"),
        }
    }
    if !result.synonyms_used.is_empty() {
        println!("synonyms:");
        for (original, synonym) in &result.synonyms_used {
            println!("  {original} -> {synonym}");
        }
    }

    Ok(())
}
