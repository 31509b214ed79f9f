use std::fmt;
use async_trait::async_trait;
use fnd_core::{Label, NewsDetector, Result};

/// Keyword heuristic stand-in used in tests and local development when no
/// trained artifacts are available.
pub struct DummyDetector;

const SENSATIONAL: [&str; 6] = [
    "shocking",
    "miracle",
    "exposed",
    "breaking",
    "secret",
    "they don't want you to know",
];

impl fmt::Debug for DummyDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyDetector").finish()
    }
}

#[async_trait]
impl NewsDetector for DummyDetector {
    fn name(&self) -> &str {
        "dummy"
    }

    async fn classify(&self, text: &str) -> Result<Label> {
        let lowered = text.to_lowercase();
        if SENSATIONAL.iter().any(|marker| lowered.contains(marker)) {
            Ok(Label::Fake)
        } else {
            Ok(Label::Real)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dummy_detector() {
        let detector = DummyDetector;
        assert_eq!(
            detector.classify("SHOCKING: coffee is immortality!").await.unwrap(),
            Label::Fake
        );
        assert_eq!(
            detector
                .classify("Council approves the annual budget")
                .await
                .unwrap(),
            Label::Real
        );
    }
}
