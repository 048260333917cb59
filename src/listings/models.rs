use crate::errors::{Result, SearchError};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

// JSON-LD listing (only the parts we read)
//  ├── name
//  ├── vehicleIdentificationNumber
//  ├── brand
//  │    └── name
//  ├── model
//  ├── vehicleModelDate
//  ├── mileageFromOdometer
//  │    ├── value
//  │    └── unitCode
//  └── offers
//       ├── price
//       ├── priceCurrency
//       └── url

/// Read-only view over one parsed listing record.
///
/// Nothing is checked up front; a missing field only fails when asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    fields: Map<String, Value>,
}

impl Listing {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Result<&Value> {
        self.fields
            .get(field)
            .ok_or_else(|| SearchError::FieldNotFound(field.to_string()))
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn name(&self) -> Result<&Value> {
        self.get("name")
    }

    pub fn vin(&self) -> Result<&Value> {
        self.get("vehicleIdentificationNumber")
    }

    /// `offers.price`
    pub fn price(&self) -> Result<&Value> {
        self.get("offers")?
            .get("price")
            .ok_or_else(|| SearchError::FieldNotFound("offers.price".to_string()))
    }

    /// `<name: VIN, $price>`, failing on the first missing field.
    pub fn summary(&self) -> Result<String> {
        Ok(format!(
            "<{}: {}, ${}>",
            plain(self.name()?),
            plain(self.vin()?),
            plain(self.price()?)
        ))
    }

    /// Converts the raw record into a typed model.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.fields.clone()))
            .map_err(|e| SearchError::Deserialize(e.to_string()))
    }
}

/// Lenient form: missing fields print as `?`. Use [`Listing::summary`] when a
/// missing name, VIN or price should be an error.
impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: Result<&Value>| v.map(plain).unwrap_or_else(|_| "?".to_string());
        write!(
            f,
            "<{}: {}, ${}>",
            show(self.name()),
            show(self.vin()),
            show(self.price())
        )
    }
}

// Strings print bare, everything else as JSON.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub name: String,
    pub vehicle_identification_number: Option<String>,
    pub brand: Option<Brand>,
    pub model: Option<String>,
    pub vehicle_model_date: Option<String>,
    pub mileage_from_odometer: Option<Mileage>,
    pub offers: Option<Offer>,
}

#[derive(Debug, Deserialize)]
pub struct Brand {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mileage {
    pub value: Option<Value>,
    pub unit_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    // Sometimes a number, sometimes a string.
    pub price: Option<Value>,
    pub price_currency: Option<String>,
    pub url: Option<String>,
}
