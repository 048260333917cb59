// session.rs
use crate::errors::{Result, SearchError};
use crate::listings::{extract_listings, Listing};
use crate::search::fetch::{ClientConfig, HttpFetcher, PageFetcher};
use crate::search::filter::SearchFilter;
use std::collections::BTreeMap;
use tracing::{debug, info};
use url::Url;

/// Listings requested per page (`numRecords`).
pub const PAGE_SIZE: u32 = 25;

const FIRST_RECORD: &str = "firstRecord";

/// The listings returned by one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    pub page: u32,
    pub count: usize,
    pub listings: Vec<Listing>,
}

impl ResultPage {
    fn new(page: u32, listings: Vec<Listing>) -> Self {
        Self {
            page,
            count: listings.len(),
            listings,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }
}

impl<'a> IntoIterator for &'a ResultPage {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.listings.iter()
    }
}

/// One search against the listing site, with a page cursor.
///
/// Every call replaces the stored results wholesale. Methods return
/// `&mut Self` so calls chain: `session.search()?.advance()?`.
#[derive(Debug)]
pub struct SearchSession<F = HttpFetcher> {
    filter: SearchFilter,
    fetcher: F,
    base: Url,
    started: bool,
    page: u32,
    results: Option<ResultPage>,
}

impl SearchSession<HttpFetcher> {
    pub fn new(filter: SearchFilter) -> Result<Self> {
        Self::with_config(filter, ClientConfig::default())
    }

    pub fn with_config(filter: SearchFilter, config: ClientConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Self::with_fetcher(filter, &config, fetcher)
    }
}

impl<F: PageFetcher> SearchSession<F> {
    pub fn with_fetcher(filter: SearchFilter, config: &ClientConfig, fetcher: F) -> Result<Self> {
        Ok(Self {
            filter,
            fetcher,
            base: config.base()?,
            started: false,
            page: 0,
            results: None,
        })
    }

    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    /// Numeric caps and query fields stay adjustable between requests.
    pub fn filter_mut(&mut self) -> &mut SearchFilter {
        &mut self.filter
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Current 1-indexed page, once the first request has gone out.
    pub fn page(&self) -> Option<u32> {
        self.started.then_some(self.page)
    }

    pub fn results(&self) -> Option<&ResultPage> {
        self.results.as_ref()
    }

    pub fn listings(&self) -> &[Listing] {
        self.results
            .as_ref()
            .map(|r| r.listings.as_slice())
            .unwrap_or(&[])
    }

    pub fn n_results(&self) -> usize {
        self.results.as_ref().map(|r| r.count).unwrap_or(0)
    }

    /// Full request URL: base, filter path, filter query, page size, then
    /// `extra` (which wins on key clashes).
    pub fn request_url(&self, extra: &BTreeMap<String, String>) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                SearchError::Configuration(format!("base url cannot take a path: {}", self.base))
            })?;
            segments.pop_if_empty();
            segments.extend(self.filter.path_segments());
            // Trailing slash after every segment except the location.
            if self.filter.location().is_none() {
                segments.push("");
            }
        }

        let mut params = self.filter.query_params();
        params.insert("numRecords".to_string(), PAGE_SIZE.to_string());
        params.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));

        url.query_pairs_mut().extend_pairs(params.iter());
        Ok(url)
    }

    /// Fetches one page and stores its listings.
    pub fn execute(&mut self, extra: BTreeMap<String, String>) -> Result<&mut Self> {
        if !self.started {
            self.started = true;
            self.page = 1;
        }

        let url = self.request_url(&extra)?;
        debug!(%url, "requesting search page");

        let html = self.fetcher.fetch(&url)?;
        let listings: Vec<Listing> = extract_listings(&html)?
            .into_iter()
            .map(Listing::new)
            .collect();

        info!(page = self.page, count = listings.len(), "parsed listings");
        self.results = Some(ResultPage::new(self.page, listings));
        Ok(self)
    }

    /// `execute` with no extra parameters.
    pub fn search(&mut self) -> Result<&mut Self> {
        self.execute(BTreeMap::new())
    }

    pub fn advance(&mut self) -> Result<&mut Self> {
        self.ensure_started()?;
        let next = self
            .page
            .checked_add(1)
            .ok_or_else(|| SearchError::Boundary("no page after the last one".to_string()))?;
        self.load_page(next)
    }

    pub fn retreat(&mut self) -> Result<&mut Self> {
        self.ensure_started()?;
        if self.page <= 1 {
            return Err(SearchError::Boundary(
                "cannot go back, already on the first page".to_string(),
            ));
        }
        self.load_page(self.page - 1)
    }

    pub fn go_to(&mut self, page: u32) -> Result<&mut Self> {
        self.ensure_started()?;
        if page == 0 {
            return Err(SearchError::Boundary("pages start at 1".to_string()));
        }
        self.load_page(page)
    }

    fn ensure_started(&self) -> Result<()> {
        if self.started {
            Ok(())
        } else {
            Err(SearchError::NotStarted)
        }
    }

    // Offset is PAGE_SIZE * page. The cursor only moves if the fetch succeeds.
    fn load_page(&mut self, page: u32) -> Result<&mut Self> {
        let offset = PAGE_SIZE
            .checked_mul(page)
            .ok_or_else(|| SearchError::Boundary(format!("page {page} is out of range")))?;

        let previous = self.page;
        self.page = page;

        let mut extra = BTreeMap::new();
        extra.insert(FIRST_RECORD.to_string(), offset.to_string());

        let outcome = self.execute(extra).map(|_| ());
        if let Err(e) = outcome {
            self.page = previous;
            return Err(e);
        }
        Ok(self)
    }
}
