//! Sentiment prediction.
//!
//! Classify text as `Positive`, `Neutral`, or `Negative`. Returns the
//! predicted label together with the full per-label probability distribution.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sentilog::predictor::{ModernBertSize, Predictor, SentimentPipelineBuilder};
//!
//! # fn main() -> sentilog::error::Result<()> {
//! let pipeline = SentimentPipelineBuilder::modernbert(ModernBertSize::Base).build()?;
//!
//! let analysis = pipeline.predict("I absolutely love this product!")?;
//! println!("sentiment: {}", analysis.sentiment);
//! for (label, p) in &analysis.probabilities {
//!     println!("- {label}: {p:.4}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Supported Models
//!
//! | Model | Sizes | Builder Method |
//! |-------|-------|----------------|
//! | ModernBERT | `Base`, `Large` | [`SentimentPipelineBuilder::modernbert`] |

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod cache;
pub(crate) mod model;
pub(crate) mod modernbert;
pub(crate) mod pipeline;
pub(crate) mod stats;

// ============ Public API ============

pub use builder::SentimentPipelineBuilder;
pub use model::SentimentModel;
pub use modernbert::{ModernBertSentimentModel, ModernBertSize};
pub use pipeline::{Analysis, Output, Predictor, SentimentPipeline};
pub use stats::InferenceStats;
