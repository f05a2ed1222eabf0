// src/probe.rs

use reqwest::{blocking::Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

/// Answers whether a remote audio file can be fetched.
pub trait AudioProbe {
    fn exists(&self, url: &str) -> bool;
}

impl<F> AudioProbe for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, url: &str) -> bool {
        self(url)
    }
}

/// HEAD-request probe; only `200 OK` counts as present.
pub struct HttpProbe {
    client: Client,
}

const PROBE_TIMEOUT: Duration = Duration::from_secs(30);

impl HttpProbe {
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder().timeout(PROBE_TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (proxy, timeout, user agent).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl AudioProbe for HttpProbe {
    fn exists(&self, url: &str) -> bool {
        let exists = match self.client.head(url).send() {
            Ok(resp) => resp.status() == StatusCode::OK,
            Err(e) => {
                debug!("HEAD {} failed: {}", url, e);
                false
            }
        };
        info!(
            "URL {}: {}",
            if exists { "exists" } else { "DOES NOT EXIST" },
            url
        );
        exists
    }
}
