use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;
use fnd_core::Result;

/// Operator-facing summary of a dataset file: row count, header columns and
/// the distribution of raw `label` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetReport {
    pub rows: usize,
    pub columns: Vec<String>,
    pub label_counts: BTreeMap<String, usize>,
}

/// Re-load a dataset file and tally it. A parse failure here means the file
/// is not a usable dataset, which the provisioner treats as a fetch failure.
pub fn inspect(path: &Path) -> Result<DatasetReport> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let columns: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let label_idx = columns.iter().position(|c| c == "label");

    let mut rows = 0;
    let mut label_counts = BTreeMap::new();
    for record in reader.records() {
        let record = record?;
        rows += 1;
        if let Some(idx) = label_idx {
            if let Some(value) = record.get(idx) {
                *label_counts.entry(value.trim().to_string()).or_insert(0) += 1;
            }
        }
    }

    Ok(DatasetReport {
        rows,
        columns,
        label_counts,
    })
}

impl DatasetReport {
    pub fn log(&self) {
        info!("📊 Dataset loaded: {} articles", self.rows);
        info!("📄 Columns: {}", self.columns.join(", "));
        if self.label_counts.is_empty() {
            info!("🏷️ No label column found");
        } else {
            for (label, count) in &self.label_counts {
                info!("🏷️ Label {}: {} articles", label, count);
            }
        }
    }
}
