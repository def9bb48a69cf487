use candle_core::Device;

use super::cache::{global_cache, ModelOptions};
use super::model::SentimentModel;
use super::modernbert::{ModernBertSentimentModel, ModernBertSize};
use super::pipeline::SentimentPipeline;
use crate::error::{AppError, Result};

#[derive(Clone, Default)]
pub(crate) enum DeviceRequest {
    #[default]
    Cpu,
    Cuda(usize),
}

impl DeviceRequest {
    fn resolve(self) -> Result<Device> {
        match self {
            DeviceRequest::Cpu => Ok(Device::Cpu),
            DeviceRequest::Cuda(i) => Device::new_cuda(i).map_err(|e| {
                AppError::Device(format!("Failed to init CUDA device {i}: {e}. Try CPU as fallback."))
            }),
        }
    }
}

/// Builder for creating [`SentimentPipeline`] instances.
///
/// Use [`Self::modernbert`] as the entry point.
///
/// # Examples
///
/// ```rust,no_run
/// # use sentilog::predictor::{ModernBertSize, SentimentPipelineBuilder};
/// # fn main() -> sentilog::error::Result<()> {
/// let pipeline = SentimentPipelineBuilder::modernbert(ModernBertSize::Base)
///     .cuda(0)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SentimentPipelineBuilder<M: SentimentModel> {
    options: M::Options,
    device_request: DeviceRequest,
}

impl<M: SentimentModel> SentimentPipelineBuilder<M> {
    pub(crate) fn new(options: M::Options) -> Self {
        Self {
            options,
            device_request: DeviceRequest::Cpu,
        }
    }

    /// Use CPU for inference (default).
    pub fn cpu(mut self) -> Self {
        self.device_request = DeviceRequest::Cpu;
        self
    }

    /// Use a specific CUDA GPU for inference.
    pub fn cuda(mut self, index: usize) -> Self {
        self.device_request = DeviceRequest::Cuda(index);
        self
    }

    /// Builds the pipeline with configured settings.
    ///
    /// Model weights are reused through a process-wide cache when a pipeline
    /// with the same options and device is already alive.
    ///
    /// # Errors
    ///
    /// Returns an error if model loading or device initialization fails.
    pub fn build(self) -> Result<SentimentPipeline<M>>
    where
        M: Send + Sync + 'static,
        M::Options: ModelOptions,
    {
        let device = self.device_request.resolve()?;

        let key = format!("{}-{:?}", self.options.cache_key(), device.location());

        let options = self.options.clone();
        let model = global_cache().get_or_create(&key, || M::new(options, device))?;

        let tokenizer = M::get_tokenizer(self.options)?;

        Ok(SentimentPipeline { model, tokenizer })
    }
}

impl SentimentPipelineBuilder<ModernBertSentimentModel> {
    /// Creates a builder for a ModernBERT sentiment analysis model.
    pub fn modernbert(size: ModernBertSize) -> Self {
        Self::new(size)
    }
}
