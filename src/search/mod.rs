mod fetch;
mod filter;
mod session;

pub use fetch::{check_status, ClientConfig, HttpFetcher, PageFetcher, BASE_URL};
pub use filter::{Location, SearchFilter, SearchFilterBuilder};
pub use session::{ResultPage, SearchSession, PAGE_SIZE};
