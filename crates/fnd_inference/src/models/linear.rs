use std::fmt;
use std::time::Duration;
use async_trait::async_trait;
use fnd_core::{Error, Label, NewsDetector, Result};
use crate::artifacts::{ModelArtifact, VectorizerArtifact};
use crate::vectorizer::TfidfVectorizer;
use crate::Config;

/// The production detector: TF-IDF features through a linear decision
/// function. Positive scores map to Fake (label 1).
pub struct LinearDetector {
    vectorizer: TfidfVectorizer,
    weights: Vec<f32>,
    intercept: f32,
    analysis_delay: Option<Duration>,
}

impl fmt::Debug for LinearDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearDetector")
            .field("features", &self.weights.len())
            .field("intercept", &self.intercept)
            .field("analysis_delay", &self.analysis_delay)
            .finish()
    }
}

impl LinearDetector {
    pub fn load(config: &Config) -> Result<Self> {
        let vectorizer = VectorizerArtifact::load(&config.vectorizer_path)?;
        let model = ModelArtifact::load(&config.model_path)?;
        Self::from_artifacts(vectorizer, model, config.analysis_delay)
    }

    pub fn from_artifacts(
        vectorizer: VectorizerArtifact,
        model: ModelArtifact,
        analysis_delay: Option<Duration>,
    ) -> Result<Self> {
        if model.weights.len() != vectorizer.idf.len() {
            return Err(Error::ArtifactLoad(format!(
                "model has {} weights but the vectorizer defines {} features",
                model.weights.len(),
                vectorizer.idf.len()
            )));
        }
        Ok(Self {
            vectorizer: TfidfVectorizer::from_artifact(vectorizer),
            weights: model.weights,
            intercept: model.intercept,
            analysis_delay,
        })
    }

    fn decision(&self, text: &str) -> f32 {
        let features = self.vectorizer.transform(text);
        self.weights
            .iter()
            .zip(&features)
            .map(|(w, x)| w * x)
            .sum::<f32>()
            + self.intercept
    }

    async fn pause(&self) {
        if let Some(delay) = self.analysis_delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl NewsDetector for LinearDetector {
    fn name(&self) -> &str {
        "tfidf-linear"
    }

    async fn classify(&self, text: &str) -> Result<Label> {
        self.pause().await;
        Ok(if self.decision(text) > 0.0 {
            Label::Fake
        } else {
            Label::Real
        })
    }

    /// One pause for the whole batch, not one per row.
    async fn classify_batch(&self, texts: &[String]) -> Result<Vec<Label>> {
        self.pause().await;
        Ok(texts
            .iter()
            .map(|text| {
                if self.decision(text) > 0.0 {
                    Label::Fake
                } else {
                    Label::Real
                }
            })
            .collect())
    }
}
