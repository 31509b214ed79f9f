pub mod detector;
pub mod error;
pub mod types;

pub use detector::{validate_text, NewsDetector};
pub use error::Error;
pub use types::{Article, BatchRow, DatasetRecord, Label, Prediction};

pub type Result<T> = std::result::Result<T, Error>;
