//! Command-line front end: classify a sentence, save it, list history.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use console::{style, StyledObject};
use tracing_subscriber::EnvFilter;

use sentilog::error::Result;
use sentilog::predictor::{ModernBertSize, SentimentPipelineBuilder};
use sentilog::session::Session;
use sentilog::store::PredictionStore;
use sentilog::Sentiment;

#[derive(Parser)]
#[command(name = "sentilog", version, about = "Sentiment analysis with a persisted prediction log")]
struct Cli {
    /// Path of the prediction log file.
    #[arg(long, global = true, default_value = PredictionStore::DEFAULT_PATH)]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a sentence and save the prediction.
    Analyze {
        /// The sentence to classify.
        text: String,

        /// Use the large model variant.
        #[arg(long)]
        large: bool,

        /// Run on a CUDA GPU instead of CPU.
        #[arg(long, value_name = "INDEX")]
        cuda: Option<usize>,
    },
    /// List all saved predictions.
    History,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {e}", style("error:").red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = PredictionStore::with_path(cli.store);

    match cli.command {
        Command::Analyze { text, large, cuda } => analyze(store, &text, large, cuda),
        Command::History => {
            history(&store);
            Ok(())
        }
    }
}

fn analyze(store: PredictionStore, text: &str, large: bool, cuda: Option<usize>) -> Result<()> {
    let size = if large {
        ModernBertSize::Large
    } else {
        ModernBertSize::Base
    };

    let mut builder = SentimentPipelineBuilder::modernbert(size);
    if let Some(index) = cuda {
        builder = builder.cuda(index);
    }
    let pipeline = builder.build()?;
    let session = Session::new(pipeline, store);

    let start = Instant::now();
    let analyzed = session.analyze(text)?;
    let elapsed = start.elapsed();

    println!(
        "Predicted Sentiment: {}",
        colorize(analyzed.record.sentiment).bold()
    );
    println!("Probabilities:");
    for label in Sentiment::ALL {
        if let Some(p) = analyzed.probabilities.get(&label) {
            println!("- {}: {:.4}", colorize(label), p);
        }
    }
    println!(
        "Prediction saved with id {} ({})",
        analyzed.record.id,
        session.store().path().display()
    );
    println!("Completed in {:.2}ms", elapsed.as_secs_f64() * 1000.0);

    Ok(())
}

fn history(store: &PredictionStore) {
    let records = store.records();

    if records.is_empty() {
        println!("No saved predictions yet.");
        return;
    }

    for record in records {
        println!(
            "ID: {} | Text: {} | Sentiment: {}",
            record.id,
            record.text,
            colorize(record.sentiment)
        );
    }
}

fn colorize(sentiment: Sentiment) -> StyledObject<Sentiment> {
    match sentiment {
        Sentiment::Positive => style(sentiment).blue(),
        Sentiment::Negative => style(sentiment).red(),
        Sentiment::Neutral => style(sentiment),
    }
}
