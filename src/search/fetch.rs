// fetch.rs
use crate::errors::{Result, SearchError};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const BASE_URL: &str = "https://www.autotrader.com/cars-for-sale/";

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Anything that can turn a search URL into the page body.
pub trait PageFetcher {
    fn fetch(&self, url: &Url) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// No timeout unless one is set.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Parses the base endpoint. Path segments get appended to it, so it
    /// must end with `/`.
    pub fn base(&self) -> Result<Url> {
        if !self.base_url.ends_with('/') {
            return Err(SearchError::Configuration(format!(
                "base url must end with '/': {}",
                self.base_url
            )));
        }
        Url::parse(&self.base_url)
            .map_err(|e| SearchError::Configuration(format!("bad base url: {e}")))
    }
}

/// Plain blocking GET, one attempt per call.
#[derive(Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = resp.status();
        check_status(status, url)?;

        let text = resp
            .text()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        debug!(%status, bytes = text.len(), "fetched search page");
        Ok(text)
    }
}

/// Block pages and server errors come back as HTML too; never parse them.
pub fn check_status(status: StatusCode, url: &Url) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    warn!(%status, %url, "search page returned non-success status");
    Err(SearchError::Network(format!("HTTP {status} from {url}")))
}
