//! Archive download over HTTP.

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::{AcquireError, Result};

/// HTTP request timeout. The download is the only suspension point in the
/// pipeline; callers needing tighter latency bound it here.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Download the dataset archive to `dest`, overwriting any previous copy.
///
/// A single attempt is made; there is no retry logic. Returns the number of
/// bytes written.
pub fn download_archive(url: &str, dest: &Path) -> Result<u64> {
    let network = |message: String| AcquireError::Network {
        url: url.to_string(),
        message,
    };

    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|error| network(error.to_string()))?;

    debug!(url, "downloading dataset archive");
    let response = client
        .get(url)
        .send()
        .map_err(|error| network(error.to_string()))?;

    if !response.status().is_success() {
        return Err(network(format!("unexpected status {}", response.status())));
    }

    let bytes = response
        .bytes()
        .map_err(|error| network(error.to_string()))?;

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(dest, &bytes)?;
    info!(
        url,
        bytes = bytes.len(),
        path = %dest.display(),
        "archive downloaded"
    );

    Ok(bytes.len() as u64)
}
