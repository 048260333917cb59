use crate::errors::{Result, SearchError};
use crate::listings::LISTING_MARKER;
use crate::search::{ClientConfig, PageFetcher, SearchFilter, SearchSession};
use std::cell::RefCell;
use std::collections::HashMap;
use url::Url;

/// In-memory fetcher that records every URL it is asked for.
#[derive(Debug, Default)]
pub struct FakeFetcher {
    pub body: String,
    pub fail: bool,
    pub requests: RefCell<Vec<Url>>,
}

impl FakeFetcher {
    pub fn serving(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn last_query(&self) -> HashMap<String, String> {
        self.requests
            .borrow()
            .last()
            .map(|url| url.query_pairs().into_owned().collect())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl PageFetcher for FakeFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        self.requests.borrow_mut().push(url.clone());
        if self.fail {
            return Err(SearchError::Network("connection refused".to_string()));
        }
        Ok(self.body.clone())
    }
}

/// Wraps each JSON body in the listing script tag.
pub fn listing_page(objects: &[&str]) -> String {
    let mut html = String::from("<html><head><title>Cars for sale</title></head><body>");
    for object in objects {
        html.push_str(LISTING_MARKER);
        html.push_str(object);
        html.push_str("</script>\n<div class=\"inventory-listing\"></div>");
    }
    html.push_str("</body></html>");
    html
}

pub fn session_with(filter: SearchFilter, fetcher: FakeFetcher) -> SearchSession<FakeFetcher> {
    SearchSession::with_fetcher(filter, &ClientConfig::default(), fetcher)
        .unwrap_or_else(|e| panic!("session setup failed: {e}"))
}
