#![cfg(feature = "cuda")]

use sentilog::error::Result;
use sentilog::predictor::{ModernBertSize, Predictor, SentimentPipelineBuilder};
use sentilog::Sentiment;

#[test]
fn predict_returns_full_distribution() -> Result<()> {
    let pipeline = SentimentPipelineBuilder::modernbert(ModernBertSize::Base)
        .cuda(0)
        .build()?;

    let analysis = pipeline.predict("I love Rust!")?;

    assert_eq!(analysis.probabilities.len(), 3);
    for label in Sentiment::ALL {
        let p = analysis.probabilities[&label];
        assert!((0.0..=1.0).contains(&p));
    }

    // The reported sentiment is the argmax of the distribution.
    let (argmax, _) = analysis
        .probabilities
        .iter()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .unwrap();
    assert_eq!(*argmax, analysis.sentiment);

    Ok(())
}

#[test]
fn rebuilding_reuses_cached_weights() -> Result<()> {
    let first = SentimentPipelineBuilder::modernbert(ModernBertSize::Base)
        .cuda(0)
        .build()?;

    let start = std::time::Instant::now();
    let second = SentimentPipelineBuilder::modernbert(ModernBertSize::Base)
        .cuda(0)
        .build()?;
    let rebuild_time = start.elapsed();

    assert!(
        rebuild_time.as_secs() < 5,
        "Rebuild should hit the model cache, took {:?}",
        rebuild_time
    );

    let a = first.predict("Great service, highly recommend!")?;
    let b = second.predict("Great service, highly recommend!")?;
    assert_eq!(a.sentiment, b.sentiment);

    Ok(())
}
