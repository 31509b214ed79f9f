use std::path::Path;
use url::Url;
use fnd_core::Result;

/// Single-attempt download, persisted verbatim. A network error, a non-success
/// status or a write failure all surface as errors for the caller's fallback
/// path; there is no retry.
pub async fn fetch_to_file(url: &Url, path: &Path) -> Result<()> {
    let response = reqwest::get(url.clone()).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    tokio::fs::write(path, &bytes).await?;
    Ok(())
}
