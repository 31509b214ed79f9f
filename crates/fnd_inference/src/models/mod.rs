pub mod dummy;
pub mod linear;

pub use dummy::DummyDetector;
pub use linear::LinearDetector;

use std::sync::Arc;
use tracing::info;
use fnd_core::{NewsDetector, Result};
use crate::Config;

/// Load the artifact-backed detector. Fails fast when either artifact is
/// missing or inconsistent so the service never starts degraded.
pub fn load_detector(config: &Config) -> Result<Arc<dyn NewsDetector>> {
    let detector = LinearDetector::load(config)?;
    info!(
        "📦 Artifacts loaded from {} and {}",
        config.vectorizer_path.display(),
        config.model_path.display()
    );
    Ok(Arc::new(detector))
}
