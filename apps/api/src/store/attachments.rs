//! Resume download from the internal file server.
//!
//! The server sits on the private network behind a self-signed certificate,
//! so the dedicated client accepts invalid certs; it is used for nothing
//! else. Downloads land in a named temp file that keeps the source
//! extension (the text normalizer dispatches on it) and is deleted on drop.

use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::AttachmentRow;

/// Bound on the whole remote file transfer.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the client used for file-server transfers.
pub fn file_server_client() -> reqwest::Client {
    reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .expect("Failed to build file server HTTP client")
}

pub async fn download_resume(
    http: &reqwest::Client,
    base_url: &str,
    attachment: &AttachmentRow,
) -> Result<NamedTempFile, AppError> {
    let url = format!(
        "{base_url}{}{}",
        attachment.file_sub_directory, attachment.file_name
    );
    info!("Downloading resume from {url}");

    let response = http
        .get(&url)
        .send()
        .await
        .map_err(|e| AppError::FileServer(format!("Download failed: {e}")))?;

    if !response.status().is_success() {
        return Err(AppError::FileServer(format!(
            "File server returned {} for {url}",
            response.status()
        )));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| AppError::FileServer(format!("Download failed mid-transfer: {e}")))?;

    let suffix = file_suffix(&attachment.file_name);
    let mut tmp = tempfile::Builder::new()
        .suffix(&suffix)
        .tempfile()
        .map_err(|e| AppError::Internal(e.into()))?;
    tmp.write_all(&body)
        .map_err(|e| AppError::Internal(e.into()))?;

    info!("Resume downloaded to {}", tmp.path().display());
    Ok(tmp)
}

fn file_suffix(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!(".{ext}"),
        _ => String::new(),
    }
}
