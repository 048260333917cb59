mod extract;
mod models;

pub use extract::{bracket_span, extract_listings, LISTING_MARKER};
pub use models::{Brand, Listing, Mileage, Offer, Vehicle};
