use std::collections::HashMap;
use crate::artifacts::VectorizerArtifact;

/// Maps raw text into the fixed feature space defined by the trained
/// vocabulary: term frequency times idf, l2-normalized. Out-of-vocabulary
/// tokens contribute nothing.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    lowercase: bool,
}

impl TfidfVectorizer {
    pub fn from_artifact(artifact: VectorizerArtifact) -> Self {
        Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            lowercase: artifact.lowercase,
        }
    }

    pub fn vector_size(&self) -> usize {
        self.idf.len()
    }

    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut features = vec![0f32; self.idf.len()];
        for token in tokenize(text, self.lowercase) {
            if let Some(&column) = self.vocabulary.get(token.as_str()) {
                features[column] += self.idf[column];
            }
        }

        let norm = features.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut features {
                *v /= norm;
            }
        }
        features
    }
}

/// Word tokens of at least two alphanumeric characters, matching the
/// vocabulary produced by the training side.
fn tokenize(text: &str, lowercase: bool) -> Vec<String> {
    let source = if lowercase {
        text.to_lowercase()
    } else {
        text.to_string()
    };
    source
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer() -> TfidfVectorizer {
        TfidfVectorizer::from_artifact(VectorizerArtifact {
            vocabulary: HashMap::from([
                ("miracle".to_string(), 0),
                ("cure".to_string(), 1),
                ("study".to_string(), 2),
            ]),
            idf: vec![2.0, 2.0, 1.0],
            lowercase: true,
        })
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let features = vectorizer().transform("Miracle cure!");
        let norm: f32 = features.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
        assert!(features[0] > 0.0);
        assert!(features[1] > 0.0);
        assert_eq!(features[2], 0.0);
    }

    #[test]
    fn test_unknown_tokens_produce_zero_vector() {
        let features = vectorizer().transform("completely unrelated words");
        assert!(features.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_repeated_terms_accumulate() {
        let v = vectorizer();
        let one = v.transform("study study study cure");
        // Three mentions of "study" outweigh one "cure" despite the lower idf.
        assert!(one[2] > one[1]);
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        let tokens = tokenize("A big, BAD wolf! x", true);
        assert_eq!(tokens, ["big", "bad", "wolf"]);
    }
}
