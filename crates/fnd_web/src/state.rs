use std::sync::Arc;
use fnd_core::NewsDetector;

/// Read-only after startup; shared across requests without locking.
pub struct AppState {
    pub detector: Arc<dyn NewsDetector>,
}
