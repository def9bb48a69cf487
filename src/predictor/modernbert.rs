use std::collections::{BTreeMap, HashMap};

use candle_core::{DType, Device, Tensor, D};
use candle_nn::{ops::softmax, VarBuilder};
use candle_transformers::models::modernbert::{
    Config, ModernBertForSequenceClassification as CandleModernBertForSequenceClassification,
};
use hf_hub::{api::sync::Api, Repo, RepoType};
use serde::Deserialize;
use tokenizers::Tokenizer;

use super::cache::ModelOptions;
use super::model::SentimentModel;
use super::pipeline::Analysis;
use crate::error::{AppError, Result};
use crate::label::Sentiment;

/// Available ModernBERT model sizes.
#[derive(Debug, Clone, Copy)]
pub enum ModernBertSize {
    /// Base model (~150M parameters).
    Base,
    /// Large model (~400M parameters).
    Large,
}

impl ModernBertSize {
    fn model_id(&self) -> &'static str {
        match self {
            ModernBertSize::Base => "clapAI/modernBERT-base-multilingual-sentiment",
            ModernBertSize::Large => "clapAI/modernBERT-large-multilingual-sentiment",
        }
    }
}

impl std::fmt::Display for ModernBertSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModernBertSize::Base => "modernbert-base",
            ModernBertSize::Large => "modernbert-large",
        };
        write!(f, "{name}")
    }
}

impl ModelOptions for ModernBertSize {
    fn cache_key(&self) -> String {
        self.to_string()
    }
}

/// ModernBERT with a three-label sequence-classification head, fine-tuned for
/// multilingual sentiment.
pub struct ModernBertSentimentModel {
    model: CandleModernBertForSequenceClassification,
    device: Device,
    id2label: BTreeMap<u32, Sentiment>,
}

impl ModernBertSentimentModel {
    /// Downloads (or reuses the local Hub cache of) the model and loads it
    /// onto `device`.
    pub fn new(size: ModernBertSize, device: Device) -> Result<Self> {
        let (config, vb, raw_id2label) = load_classifier_model(size.model_id(), &device)?;
        let model = CandleModernBertForSequenceClassification::load(vb, &config)?;

        // Resolve the classifier's label table up front so a model with
        // unexpected labels fails at load time, not per prediction.
        let mut id2label = BTreeMap::new();
        for (id, label) in &raw_id2label {
            let id: u32 = id.parse().map_err(|_| {
                AppError::Unexpected(format!("Non-numeric id2label key '{id}' in model config"))
            })?;
            id2label.insert(id, label.parse::<Sentiment>()?);
        }
        if id2label.is_empty() {
            return Err(AppError::Unexpected(
                "Model config has no id2label mapping".to_string(),
            ));
        }

        Ok(Self {
            model,
            device,
            id2label,
        })
    }

    /// Fetches `tokenizer.json` for the given size.
    pub fn get_tokenizer(size: ModernBertSize) -> Result<Tokenizer> {
        load_tokenizer(size.model_id())
    }

    /// The device the model is running on.
    pub fn device(&self) -> &Device {
        &self.device
    }
}

impl SentimentModel for ModernBertSentimentModel {
    type Options = ModernBertSize;

    fn new(options: Self::Options, device: Device) -> Result<Self> {
        ModernBertSentimentModel::new(options, device)
    }

    fn classify(&self, tokenizer: &Tokenizer, text: &str) -> Result<Analysis> {
        let tokens = tokenizer.encode(text, true).map_err(|e| {
            AppError::Tokenization(format!(
                "Tokenization failed on '{}': {}",
                &text.chars().take(50).collect::<String>(),
                e
            ))
        })?;

        let input_ids = Tensor::new(tokens.get_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask =
            Tensor::new(tokens.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        let logits = self.model.forward(&input_ids, &attention_mask)?;
        let pred_id = logits.argmax(D::Minus1)?.squeeze(0)?.to_scalar::<u32>()?;
        let probs_vec = softmax(&logits, D::Minus1)?.squeeze(0)?.to_vec1::<f32>()?;

        let mut probabilities = BTreeMap::new();
        for (&id, &label) in &self.id2label {
            let p = probs_vec.get(id as usize).copied().ok_or_else(|| {
                AppError::Unexpected(format!(
                    "Label id {} out of range for {} logits",
                    id,
                    probs_vec.len()
                ))
            })?;
            probabilities.insert(label, p);
        }

        let sentiment = *self.id2label.get(&pred_id).ok_or_else(|| {
            let available: Vec<String> = self.id2label.keys().map(|k| k.to_string()).collect();
            AppError::Unexpected(format!(
                "Predicted label ID {} not in id2label. Available: {}",
                pred_id,
                available.join(", ")
            ))
        })?;

        Ok(Analysis {
            sentiment,
            probabilities,
        })
    }

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer> {
        Self::get_tokenizer(options)
    }

    fn device(&self) -> &Device {
        &self.device
    }
}

// ============ Hub loading helpers ============

fn load_tokenizer(repo_id: &str) -> Result<Tokenizer> {
    let api = Api::new()?;
    let repo = api.repo(Repo::new(repo_id.to_string(), RepoType::Model));
    let tokenizer_path = repo.get("tokenizer.json")?;
    let path_str = tokenizer_path.display().to_string();
    Tokenizer::from_file(&tokenizer_path).map_err(|e| {
        AppError::Tokenization(format!(
            "Failed to load tokenizer from '{}': {}",
            path_str, e
        ))
    })
}

#[derive(Deserialize)]
struct ClassifierConfigJson {
    #[serde(default)]
    id2label: HashMap<String, String>,
    #[serde(default)]
    label2id: HashMap<String, u32>,
}

// Some classifier checkpoints publish id2label at the top level of
// config.json but leave the nested classifier_config Candle expects empty.
fn patch_config_num_labels(config: &mut Config, num_labels: usize) {
    use candle_transformers::models::modernbert::{ClassifierConfig, ClassifierPooling};

    if config.classifier_config.is_none()
        || config
            .classifier_config
            .as_ref()
            .map(|c| c.id2label.len())
            .unwrap_or(0)
            != num_labels
    {
        let id2label: HashMap<String, String> = (0..num_labels)
            .map(|i| (i.to_string(), format!("label_{i}")))
            .collect();
        let label2id: HashMap<String, String> = id2label
            .iter()
            .map(|(k, v)| (v.clone(), k.clone()))
            .collect();

        config.classifier_config = Some(ClassifierConfig {
            id2label,
            label2id,
            classifier_pooling: ClassifierPooling::default(),
        });
    }
}

fn load_classifier_model(
    repo_id: &str,
    device: &Device,
) -> Result<(Config, VarBuilder<'static>, HashMap<String, String>)> {
    let api = Api::new()?;
    let repo = api.repo(Repo::new(repo_id.to_string(), RepoType::Model));

    let config_path = repo.get("config.json")?;
    let weights_path = repo
        .get("model.safetensors")
        .or_else(|_| repo.get("pytorch_model.bin"))?;

    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| AppError::Unexpected(format!("Failed to read model config: {e}")))?;
    let mut config: Config = serde_json::from_str(&config_str)
        .map_err(|e| AppError::Unexpected(format!("Failed to parse model config: {e}")))?;
    let class_cfg: ClassifierConfigJson = serde_json::from_str(&config_str)
        .map_err(|e| AppError::Unexpected(format!("Failed to parse model config: {e}")))?;

    let num_labels = class_cfg.label2id.len().max(class_cfg.id2label.len());
    patch_config_num_labels(&mut config, num_labels);

    let vb = if weights_path.extension().is_some_and(|e| e == "safetensors") {
        unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? }
    } else {
        VarBuilder::from_pth(&weights_path, DType::F32, device)?
    };

    Ok((config, vb, class_cfg.id2label))
}
