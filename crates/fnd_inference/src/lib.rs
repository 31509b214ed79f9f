use std::path::PathBuf;
use std::time::Duration;

pub mod artifacts;
pub mod batch;
pub mod models;
pub mod vectorizer;

pub use models::{load_detector, DummyDetector, LinearDetector};

/// Fixed relative artifact paths the service loads at startup.
pub const DEFAULT_MODEL_FILE: &str = "model.json";
pub const DEFAULT_VECTORIZER_FILE: &str = "vectorizer.json";

/// Where the detector finds its artifacts and how it behaves per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub vectorizer_path: PathBuf,
    /// Purely cosmetic pause before answering; off by default.
    pub analysis_delay: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_FILE),
            vectorizer_path: PathBuf::from(DEFAULT_VECTORIZER_FILE),
            analysis_delay: None,
        }
    }
}

pub mod prelude {
    pub use super::models::{load_detector, DummyDetector, LinearDetector};
    pub use super::Config;
    pub use fnd_core::{Error, Label, NewsDetector, Result};
}
