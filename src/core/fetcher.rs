use crate::core::coordinates::Credentials;
use crate::utils::error::{PushError, Result};
use reqwest::Client;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Downloads artifacts from a Maven repository over HTTP(S).
pub struct ArtifactFetcher {
    client: Client,
}

impl ArtifactFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetches `url` into `destination`. On any failure the destination file
    /// is absent: nothing is written before the status check, and a partial
    /// file from a broken body stream is removed before the error returns.
    pub async fn download(
        &self,
        url: &str,
        destination: &Path,
        credentials: Option<&Credentials>,
    ) -> Result<()> {
        tracing::debug!("Downloading artifact from: {}", url);

        let mut request = self.client.get(url);
        if let Some(credentials) = credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }

        let response = request
            .send()
            .await
            .map_err(|source| PushError::TransportError {
                url: url.to_string(),
                source,
            })?;

        tracing::debug!("Repository response status: {}", response.status());

        if !response.status().is_success() {
            return Err(PushError::HttpStatusError {
                url: url.to_string(),
                status: response.status(),
            });
        }

        if let Err(err) = write_body(response, url, destination).await {
            let _ = fs::remove_file(destination).await;
            return Err(err);
        }

        Ok(())
    }
}

impl Default for ArtifactFetcher {
    fn default() -> Self {
        Self::new()
    }
}

async fn write_body(
    mut response: reqwest::Response,
    url: &str,
    destination: &Path,
) -> Result<()> {
    let mut file = fs::File::create(destination).await?;

    // Stream chunk by chunk; artifacts can be large.
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|source| PushError::TransportError {
            url: url.to_string(),
            source,
        })?
    {
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    Ok(())
}
