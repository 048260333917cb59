use crate::errors::{Result, SearchError};
use std::collections::BTreeMap;

/// A city/state/zip triple. Only exists when all three parts were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl Location {
    /// Path segment in the form `bellefonte-pa-16823`.
    pub fn segment(&self) -> String {
        format!("{}-{}-{}", self.city, self.state, self.postal_code)
    }
}

/// Search criteria for one session.
///
/// Make, model and location are fixed once built; the numeric caps and the
/// other query fields can be adjusted between requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    make: Option<String>,
    model: Option<String>,
    location: Option<Location>,

    /// Listing category, e.g. `all-cars` or `certified-cars`.
    pub category: Option<String>,
    pub start_year: Option<u32>,
    pub end_year: Option<u32>,
    pub max_price: Option<u32>,
    pub max_mileage: Option<u32>,
    pub search_radius: Option<u32>,
    /// Transmission code as the site spells it (`AUT`, `MAN`).
    pub transmission_codes: Option<String>,
}

impl SearchFilter {
    pub fn builder() -> SearchFilterBuilder {
        SearchFilterBuilder::default()
    }

    pub fn make(&self) -> Option<&str> {
        self.make.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Path segments in request order. Each one is pushed onto the URL as
    /// a single encoded segment, so values can never add extra path levels.
    pub fn path_segments(&self) -> Vec<String> {
        let mut segments = Vec::new();

        if let Some(category) = &self.category {
            segments.push(category.clone());
        }
        if let Some(max_price) = self.max_price {
            segments.push(format!("cars-under-{max_price}"));
        }
        if let Some(make) = &self.make {
            segments.push(make.clone());
        }
        if let Some(model) = &self.model {
            segments.push(model.clone());
        }
        if let Some(location) = &self.location {
            segments.push(location.segment());
        }

        segments
    }

    /// Query parameters taken from the request fields only.
    ///
    /// Make, model and location travel in the path and never show up here.
    pub fn query_params(&self) -> BTreeMap<String, String> {
        let fields: [(&str, Option<String>); 7] = [
            ("requestID", self.category.clone()),
            ("maxMileage", self.max_mileage.map(|v| v.to_string())),
            ("transmissionCodes", self.transmission_codes.clone()),
            ("searchRadius", self.search_radius.map(|v| v.to_string())),
            ("maxPrice", self.max_price.map(|v| v.to_string())),
            ("endYear", self.end_year.map(|v| v.to_string())),
            ("startYear", self.start_year.map(|v| v.to_string())),
        ];

        fields
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchFilterBuilder {
    make: Option<String>,
    model: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
    category: Option<String>,
    start_year: Option<u32>,
    end_year: Option<u32>,
    max_price: Option<u32>,
    max_mileage: Option<u32>,
    search_radius: Option<u32>,
    transmission_codes: Option<String>,
}

impl SearchFilterBuilder {
    pub fn make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn start_year(mut self, year: u32) -> Self {
        self.start_year = Some(year);
        self
    }

    pub fn end_year(mut self, year: u32) -> Self {
        self.end_year = Some(year);
        self
    }

    pub fn max_price(mut self, price: u32) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn max_mileage(mut self, mileage: u32) -> Self {
        self.max_mileage = Some(mileage);
        self
    }

    pub fn search_radius(mut self, radius: u32) -> Self {
        self.search_radius = Some(radius);
        self
    }

    pub fn transmission_codes(mut self, codes: impl Into<String>) -> Self {
        self.transmission_codes = Some(codes.into());
        self
    }

    /// Validates the combination and produces the filter.
    pub fn build(self) -> Result<SearchFilter> {
        if self.model.is_some() && self.make.is_none() {
            return Err(SearchError::Configuration(
                "must pass make if you pass model".to_string(),
            ));
        }

        let location = match (self.city, self.state, self.postal_code) {
            (None, None, None) => None,
            (Some(city), Some(state), Some(postal_code)) => Some(Location {
                city,
                state,
                postal_code,
            }),
            _ => {
                return Err(SearchError::Configuration(
                    "city, state and postal code must be given together".to_string(),
                ))
            }
        };

        Ok(SearchFilter {
            make: self.make,
            model: self.model,
            location,
            category: self.category,
            start_year: self.start_year,
            end_year: self.end_year,
            max_price: self.max_price,
            max_mileage: self.max_mileage,
            search_radius: self.search_radius,
            transmission_codes: self.transmission_codes,
        })
    }
}
