use chrono::{DateTime, Month, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Catalog-unique identifier of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub u32);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PropertyId {
    fn from(value: u32) -> Self {
        PropertyId(value)
    }
}

/// Parses an id as it arrives from a route or the command line.
///
/// Returns `None` for anything that is not a positive integer, so `"0"`,
/// `""` and `"abc"` all mean "no such property".
pub fn parse_property_id(raw: &str) -> Option<PropertyId> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(PropertyId(n)),
    }
}

/// A single listing. Records are read-only once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: PropertyId,
    #[serde(rename = "type")]
    pub property_type: String,
    pub bedrooms: u32,
    pub price: u64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(deserialize_with = "deserialize_added")]
    pub added: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub tenure: String,
}

impl PropertyRecord {
    pub fn new(
        id: impl Into<PropertyId>,
        property_type: impl Into<String>,
        bedrooms: u32,
        price: u64,
        added: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            property_type: property_type.into(),
            bedrooms,
            price,
            location: String::new(),
            postcode: String::new(),
            added,
            description: String::new(),
            picture: String::new(),
            images: Vec::new(),
            url: String::new(),
            tenure: String::new(),
        }
    }

    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = postcode.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

/// Parses a calendar date from the formats seen in listing data and forms.
///
/// Accepted: `2024-01-31`, `2024/01/31`, `31/01/2024` and RFC 3339
/// timestamps (the time part is dropped).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MonthRepr {
    Number(u32),
    Name(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AddedRepr {
    Text(String),
    Parts { month: MonthRepr, day: u32, year: i32 },
}

fn deserialize_added<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match AddedRepr::deserialize(deserializer)? {
        AddedRepr::Text(text) => {
            parse_date(&text).ok_or_else(|| D::Error::custom(format!("invalid date: {text}")))
        }
        AddedRepr::Parts { month, day, year } => {
            let month = match month {
                MonthRepr::Number(n) => n,
                MonthRepr::Name(name) => name
                    .trim()
                    .parse::<Month>()
                    .map(|m| m.number_from_month())
                    .map_err(|_| D::Error::custom(format!("invalid month: {name}")))?,
            };
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                D::Error::custom(format!("invalid date: {year}-{month}-{day}"))
            })
        }
    }
}
