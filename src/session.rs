//! Session controller: validate input, predict, persist, list history.
//!
//! The controller is the only caller of the store. It keeps no in-process
//! copy of the log; the backing file is the sole source of truth and history
//! is fetched fresh on every request.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::label::Sentiment;
use crate::predictor::Predictor;
use crate::store::{PredictionRecord, PredictionStore};

/// A prediction that has been persisted.
#[derive(Debug, Clone)]
pub struct Analyzed {
    /// The stored record, with its assigned id.
    pub record: PredictionRecord,
    /// Probability per label from the predictor.
    pub probabilities: BTreeMap<Sentiment, f32>,
}

/// Receives user text, invokes the predictor, and persists each result.
///
/// # Examples
///
/// ```rust,no_run
/// use sentilog::predictor::{ModernBertSize, SentimentPipelineBuilder};
/// use sentilog::session::Session;
/// use sentilog::store::PredictionStore;
///
/// # fn main() -> sentilog::error::Result<()> {
/// let pipeline = SentimentPipelineBuilder::modernbert(ModernBertSize::Base).build()?;
/// let session = Session::new(pipeline, PredictionStore::new());
///
/// let analyzed = session.analyze("I love this!")?;
/// println!("#{}: {}", analyzed.record.id, analyzed.record.sentiment);
///
/// for record in session.history() {
///     println!("ID: {} | Text: {} | Sentiment: {}", record.id, record.text, record.sentiment);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Session<P: Predictor> {
    predictor: P,
    store: PredictionStore,
}

impl<P: Predictor> Session<P> {
    /// Creates a session over a predictor and a store.
    pub fn new(predictor: P, store: PredictionStore) -> Self {
        Self { predictor, store }
    }

    /// The underlying store.
    pub fn store(&self) -> &PredictionStore {
        &self.store
    }

    /// Classifies `text` and appends the result to the store.
    ///
    /// Blank or whitespace-only input returns [`AppError::EmptyInput`] before
    /// any predictor or store access. A predictor or store failure surfaces
    /// as-is; in neither case is the prediction reported as saved.
    pub fn analyze(&self, text: &str) -> Result<Analyzed> {
        if text.trim().is_empty() {
            warn!("Rejecting blank input");
            return Err(AppError::EmptyInput);
        }

        let analysis = self.predictor.predict(text)?;
        let record = self.store.append(text, analysis.sentiment)?;

        debug!("Prediction {} saved as {}", record.sentiment, record.id);

        Ok(Analyzed {
            record,
            probabilities: analysis.probabilities,
        })
    }

    /// All saved predictions in ascending id order, read fresh from the store.
    pub fn history(&self) -> Vec<PredictionRecord> {
        self.store.records()
    }
}
