use std::collections::BTreeMap;
use std::sync::Arc;

use tokenizers::Tokenizer;

use super::model::SentimentModel;
use super::stats::InferenceStats;
use crate::error::Result;
use crate::label::Sentiment;

// ============ Output types ============

/// A sentiment prediction with the full label distribution.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The predicted sentiment (highest-probability label).
    pub sentiment: Sentiment,
    /// Probability per label, each in `[0.0, 1.0]`.
    pub probabilities: BTreeMap<Sentiment, f32>,
}

/// Output from [`SentimentPipeline::run`].
#[derive(Debug)]
pub struct Output {
    /// Sentiment prediction.
    pub analysis: Analysis,
    /// Execution statistics.
    pub stats: InferenceStats,
}

// ============ Predictor boundary ============

/// Anything that can map text to a sentiment [`Analysis`].
///
/// This is the seam the session controller consumes; the shipped
/// implementation is [`SentimentPipeline`].
pub trait Predictor {
    /// Classifies `text`.
    fn predict(&self, text: &str) -> Result<Analysis>;
}

// ============ Pipeline ============

/// Classifies text sentiment (positive, negative, neutral).
///
/// Construct with [`SentimentPipelineBuilder`](super::SentimentPipelineBuilder).
///
/// # Examples
///
/// ```rust,no_run
/// # use sentilog::predictor::{ModernBertSize, SentimentPipelineBuilder};
/// # fn main() -> sentilog::error::Result<()> {
/// let pipeline = SentimentPipelineBuilder::modernbert(ModernBertSize::Base).build()?;
///
/// let output = pipeline.run("I love this product!")?;
/// println!(
///     "{} in {:.2}ms",
///     output.analysis.sentiment,
///     output.stats.total_time.as_secs_f64() * 1000.0
/// );
/// # Ok(())
/// # }
/// ```
pub struct SentimentPipeline<M: SentimentModel> {
    pub(crate) model: Arc<M>,
    pub(crate) tokenizer: Tokenizer,
}

impl<M: SentimentModel> SentimentPipeline<M> {
    /// Analyzes text sentiment, with timing.
    pub fn run(&self, text: &str) -> Result<Output> {
        let stats_builder = InferenceStats::start();
        let analysis = self.model.classify(&self.tokenizer, text)?;
        Ok(Output {
            analysis,
            stats: stats_builder.finish(),
        })
    }

    /// Returns the device (CPU/GPU) the model is running on.
    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}

impl<M: SentimentModel> Predictor for SentimentPipeline<M> {
    fn predict(&self, text: &str) -> Result<Analysis> {
        self.run(text).map(|output| output.analysis)
    }
}
