pub mod fetch;
pub mod report;
pub mod synthetic;

pub use report::DatasetReport;

use std::path::PathBuf;
use tracing::{info, warn};
use url::Url;
use fnd_core::Result;

/// Default remote location of the labeled news dataset.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/lutzhamel/fake-news/master/data/news.csv";

/// Default on-disk location. The parent directory is created if missing and
/// the file always lives inside it.
pub const DATASET_FILE: &str = "data/news.csv";

/// Obtains a labeled dataset and guarantees a file exists at the configured
/// path on exit: the fetched bytes when the remote is reachable, the
/// deterministic synthetic fallback otherwise.
pub struct DatasetProvisioner {
    url: Url,
    path: PathBuf,
}

impl DatasetProvisioner {
    pub fn new(url: Url, path: impl Into<PathBuf>) -> Self {
        Self {
            url,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub async fn provision(&self) -> Result<DatasetReport> {
        info!("📥 Downloading news dataset from {}", self.url);
        match self.try_remote().await {
            Ok(report) => Ok(report),
            Err(e) => {
                warn!("❌ Download failed: {}", e);
                info!("🔧 Creating synthetic fallback dataset instead");
                self.fallback()
            }
        }
    }

    /// Single fetch attempt, then re-load the file to report row count,
    /// columns and label distribution. Any failure sends us to the fallback.
    async fn try_remote(&self) -> Result<DatasetReport> {
        self.ensure_parent_dir()?;
        fetch::fetch_to_file(&self.url, &self.path).await?;
        let report = report::inspect(&self.path)?;
        report.log();
        Ok(report)
    }

    fn fallback(&self) -> Result<DatasetReport> {
        self.ensure_parent_dir()?;
        let records = synthetic::generate();
        synthetic::write_csv(&self.path, &records)?;
        info!("✅ Created sample dataset: {} articles", records.len());
        let report = report::inspect(&self.path)?;
        report.log();
        Ok(report)
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

pub mod prelude {
    pub use super::{DatasetProvisioner, DatasetReport, DATASET_FILE, DATASET_URL};
    pub use fnd_core::{DatasetRecord, Error, Label, Result};
}
