use serde::{Deserialize, Serialize};

/// A single piece of news text under analysis. Has no identity beyond its
/// content and only lives for the duration of a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub text: String,
}

/// Binary verdict for a piece of text. Serialized numerically as 0 (real)
/// and 1 (fake), matching the dataset and artifact convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    pub fn as_u8(self) -> u8 {
        self.into()
    }

    /// Display string shown to the user.
    pub fn verdict(self) -> &'static str {
        match self {
            Label::Real => "Real",
            Label::Fake => "Fake",
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Real),
            1 => Ok(Label::Fake),
            other => Err(format!("label must be 0 or 1, got {}", other)),
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        match label {
            Label::Real => 0,
            Label::Fake => 1,
        }
    }
}

/// One labeled row of the training dataset, persisted as a CSV record with
/// columns `text,label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub text: String,
    pub label: Label,
}

/// The outcome of classifying a single article. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub text: String,
    pub label: Label,
}

impl Prediction {
    pub fn verdict(&self) -> &'static str {
        self.label.verdict()
    }
}

/// One row of the bulk-analysis result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRow {
    #[serde(rename = "News")]
    pub news: String,
    #[serde(rename = "Prediction")]
    pub prediction: String,
}

impl From<Prediction> for BatchRow {
    fn from(prediction: Prediction) -> Self {
        Self {
            prediction: prediction.verdict().to_string(),
            news: prediction.text,
        }
    }
}
