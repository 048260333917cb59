//! Search client for a car listing site: builds the search URL from a set of
//! filters, fetches the results page and pulls out the embedded JSON-LD
//! listings.

pub mod errors;
pub mod listings;
pub mod search;

pub use errors::{Result, SearchError};
pub use listings::{extract_listings, Listing, Vehicle};
pub use search::{ClientConfig, ResultPage, SearchFilter, SearchSession, PAGE_SIZE};

#[cfg(test)]
mod tests;
