//! Sentiment analysis with a persisted prediction log.
//!
//! Powered by [Candle](https://github.com/huggingface/candle): a ModernBERT
//! classifier labels text as `Positive`, `Neutral`, or `Negative` with a full
//! probability distribution, and every successful prediction is appended to a
//! flat JSON log that can be listed back at any time.

#![deny(missing_docs)]

// ============ Internal API ============

mod label;

// ============ Public API ============

pub mod error;
pub mod predictor;
pub mod session;
pub mod store;

pub use label::Sentiment;
