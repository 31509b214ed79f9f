use std::collections::HashMap;
use std::path::Path;
use serde::{Deserialize, Serialize};
use fnd_core::{Error, Result};

/// Serialized TF-IDF vocabulary and inverse document frequencies, produced by
/// the external training pipeline. Read-only once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    /// Term to feature-column mapping.
    pub vocabulary: HashMap<String, usize>,
    /// One idf weight per feature column.
    pub idf: Vec<f32>,
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
}

fn default_lowercase() -> bool {
    true
}

/// Linear decision function of the trained classifier. Positive scores map to
/// label 1 (fake).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub weights: Vec<f32>,
    pub intercept: f32,
}

impl VectorizerArtifact {
    pub fn load(path: &Path) -> Result<Self> {
        let artifact: Self = read_json(path, "vectorizer artifact")?;
        if artifact.vocabulary.len() != artifact.idf.len() {
            return Err(Error::ArtifactLoad(format!(
                "vectorizer artifact at {} has {} vocabulary terms but {} idf weights",
                path.display(),
                artifact.vocabulary.len(),
                artifact.idf.len()
            )));
        }
        if let Some((term, &column)) = artifact
            .vocabulary
            .iter()
            .find(|(_, &column)| column >= artifact.idf.len())
        {
            return Err(Error::ArtifactLoad(format!(
                "vectorizer artifact at {} maps {:?} to column {} outside the feature space",
                path.display(),
                term,
                column
            )));
        }
        Ok(artifact)
    }
}

impl ModelArtifact {
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path, "model artifact")
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let bytes = std::fs::read(path).map_err(|e| {
        Error::ArtifactLoad(format!("cannot read {} at {}: {}", what, path.display(), e))
    })?;
    serde_json::from_slice(&bytes).map_err(|e| {
        Error::ArtifactLoad(format!("corrupt {} at {}: {}", what, path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_vectorizer_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "vectorizer.json",
            r#"{"vocabulary": {"miracle": 0, "study": 1}, "idf": [1.5, 1.0]}"#,
        );

        let artifact = VectorizerArtifact::load(&path).unwrap();
        assert_eq!(artifact.vocabulary.len(), 2);
        assert_eq!(artifact.idf, vec![1.5, 1.0]);
        assert!(artifact.lowercase);
    }

    #[test]
    fn test_missing_artifact_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = VectorizerArtifact::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::ArtifactLoad(_)));
    }

    #[test]
    fn test_corrupt_artifact_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "model.json", "not json at all");
        let err = ModelArtifact::load(&path).unwrap_err();
        assert!(matches!(err, Error::ArtifactLoad(_)));
    }

    #[test]
    fn test_inconsistent_vectorizer_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "vectorizer.json",
            r#"{"vocabulary": {"miracle": 0, "study": 5}, "idf": [1.5, 1.0]}"#,
        );
        let err = VectorizerArtifact::load(&path).unwrap_err();
        assert!(matches!(err, Error::ArtifactLoad(_)));
    }
}
