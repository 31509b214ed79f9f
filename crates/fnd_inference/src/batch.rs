use fnd_core::{BatchRow, Error, NewsDetector, Prediction, Result};

/// Decode a bulk upload into its individual texts. A plain-text file is a
/// single document; a CSV must carry a `text` column or the whole batch is
/// rejected before any classification happens.
pub fn extract_texts(filename: &str, bytes: &[u8]) -> Result<Vec<String>> {
    if filename.ends_with(".txt") {
        let text = String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::Validation(format!("uploaded file is not valid UTF-8: {}", e)))?;
        Ok(vec![text])
    } else if filename.ends_with(".csv") {
        texts_from_csv(bytes)
    } else {
        Err(Error::Validation(format!(
            "unsupported file type: {} (expected .txt or .csv)",
            filename
        )))
    }
}

fn texts_from_csv(bytes: &[u8]) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader.headers()?.clone();
    let text_idx = headers
        .iter()
        .position(|h| h == "text")
        .ok_or_else(|| Error::Validation("CSV must contain a 'text' column".to_string()))?;

    let mut texts = Vec::new();
    for record in reader.records() {
        let record = record?;
        texts.push(record.get(text_idx).unwrap_or_default().to_string());
    }
    Ok(texts)
}

/// Classify every uploaded text; the Nth result row corresponds to the Nth
/// input.
pub async fn run_batch(detector: &dyn NewsDetector, texts: Vec<String>) -> Result<Vec<BatchRow>> {
    let labels = detector.classify_batch(&texts).await?;
    Ok(texts
        .into_iter()
        .zip(labels)
        .map(|(text, label)| Prediction { text, label })
        .map(BatchRow::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DummyDetector;

    #[test]
    fn test_plain_text_is_a_single_document() {
        let texts = extract_texts("news.txt", b"One long article body").unwrap();
        assert_eq!(texts, vec!["One long article body".to_string()]);
    }

    #[test]
    fn test_csv_extracts_the_text_column() {
        let csv = b"id,text\n1,First headline\n2,Second headline\n3,Third headline\n";
        let texts = extract_texts("news.csv", csv).unwrap();
        assert_eq!(texts, vec!["First headline", "Second headline", "Third headline"]);
    }

    #[test]
    fn test_csv_without_text_column_is_rejected() {
        let csv = b"id,title\n1,First headline\n";
        let err = extract_texts("news.csv", csv).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = extract_texts("news.pdf", b"whatever").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_run_batch_preserves_input_order() {
        let texts = vec![
            "SHOCKING miracle revelation!".to_string(),
            "Council approves the annual budget".to_string(),
            "EXPOSED: the secret they hid".to_string(),
        ];
        let rows = run_batch(&DummyDetector, texts.clone()).await.unwrap();

        assert_eq!(rows.len(), 3);
        for (row, text) in rows.iter().zip(&texts) {
            assert_eq!(&row.news, text);
        }
        assert_eq!(rows[0].prediction, "Fake");
        assert_eq!(rows[1].prediction, "Real");
        assert_eq!(rows[2].prediction, "Fake");
    }

    #[tokio::test]
    async fn test_three_row_csv_yields_three_verdicts() {
        let csv = b"text\nSHOCKING miracle cure!\nSteady economic growth reported\nBREAKING: aliens!\n";
        let texts = extract_texts("upload.csv", csv).unwrap();
        let rows = run_batch(&DummyDetector, texts).await.unwrap();
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert!(row.prediction == "Fake" || row.prediction == "Real");
        }
    }
}
