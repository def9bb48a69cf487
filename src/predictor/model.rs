use tokenizers::Tokenizer;

use crate::error::Result;
use crate::predictor::pipeline::Analysis;

/// A sentiment classification model usable by [`SentimentPipeline`].
///
/// [`SentimentPipeline`]: crate::predictor::SentimentPipeline
pub trait SentimentModel {
    /// Model selection options (size, variant).
    type Options: std::fmt::Debug + Clone;

    /// Loads the model onto the given device.
    fn new(options: Self::Options, device: candle_core::Device) -> Result<Self>
    where
        Self: Sized;

    /// Classifies `text`, returning the predicted label and the full
    /// per-label probability distribution.
    fn classify(&self, tokenizer: &Tokenizer, text: &str) -> Result<Analysis>;

    /// Fetches the tokenizer matching these options.
    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer>;

    /// The device the model is running on.
    fn device(&self) -> &candle_core::Device;
}
