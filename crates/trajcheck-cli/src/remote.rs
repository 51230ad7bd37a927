use crate::error::Result;
use futures_util::StreamExt;
use std::time::Duration;
use tracing::{debug, info, warn};
use trajcheck::workflows::import::FetchResult;

#[derive(Debug, Clone, Copy)]
pub enum DownloadProgress {
    Started { total_size: Option<u64> },
    Downloading { downloaded: u64 },
    Finished,
}

/// HTTP access to the trajectory data server.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: reqwest::Client,
}

impl RemoteClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Downloads `url` as text. Every failure, including a non-UTF-8 body, becomes
    /// [`FetchResult::TransportError`].
    pub async fn fetch(
        &self,
        url: &str,
        mut progress_callback: impl FnMut(DownloadProgress),
    ) -> FetchResult {
        info!("Sending request to {}", url);
        let bytes = match self.download(url, &mut progress_callback).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Download of {} failed: {}", url, e);
                return FetchResult::TransportError(e.to_string());
            }
        };
        progress_callback(DownloadProgress::Finished);

        match String::from_utf8(bytes) {
            Ok(text) => {
                debug!("Received {} bytes of text.", text.len());
                FetchResult::Text(text)
            }
            Err(e) => FetchResult::TransportError(format!("response is not UTF-8 text: {}", e)),
        }
    }

    async fn download(
        &self,
        url: &str,
        progress_callback: &mut impl FnMut(DownloadProgress),
    ) -> std::result::Result<Vec<u8>, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let total_size = response.content_length();
        progress_callback(DownloadProgress::Started { total_size });

        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();
        let mut buffer: Vec<u8> = Vec::new();

        while let Some(item) = stream.next().await {
            let chunk = item?;
            buffer.extend_from_slice(&chunk);
            downloaded += chunk.len() as u64;
            progress_callback(DownloadProgress::Downloading { downloaded });
        }

        Ok(buffer)
    }
}
