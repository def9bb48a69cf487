use std::time::{Duration, Instant};

/// Statistics for one inference call.
#[derive(Debug, Clone)]
pub struct InferenceStats {
    /// Total execution time.
    pub total_time: Duration,
}

impl InferenceStats {
    /// Create a new stats tracker (call at start of operation).
    pub(crate) fn start() -> InferenceStatsBuilder {
        InferenceStatsBuilder {
            start_time: Instant::now(),
        }
    }
}

/// Builder for InferenceStats - tracks timing from creation to finalize.
pub(crate) struct InferenceStatsBuilder {
    start_time: Instant,
}

impl InferenceStatsBuilder {
    /// Finalize stats at the end of the operation.
    pub fn finish(self) -> InferenceStats {
        InferenceStats {
            total_time: self.start_time.elapsed(),
        }
    }
}
