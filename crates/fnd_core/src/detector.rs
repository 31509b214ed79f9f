use async_trait::async_trait;
use crate::types::Label;
use crate::{Error, Result};

/// The classification seam. Handlers only see this trait so tests can inject
/// doubles instead of trained artifacts.
#[async_trait]
pub trait NewsDetector: Send + Sync {
    /// Human-readable model name, reported by the health endpoint
    fn name(&self) -> &str;

    /// Classify a single piece of text
    async fn classify(&self, text: &str) -> Result<Label>;

    /// Classify a batch of texts, preserving input order
    async fn classify_batch(&self, texts: &[String]) -> Result<Vec<Label>> {
        let mut labels = Vec::with_capacity(texts.len());
        for text in texts {
            labels.push(self.classify(text).await?);
        }
        Ok(labels)
    }
}

/// Reject empty or whitespace-only input before any inference is attempted.
pub fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::Validation(
            "please enter some text before predicting".to_string(),
        ));
    }
    Ok(())
}
