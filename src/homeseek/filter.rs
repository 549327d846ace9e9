//! # Filter Engine
//!
//! Search is a pure function from `(catalog, criteria)` to the matching
//! records. Each criterion is an independent conjunctive predicate, so the
//! order in which they are checked never changes the result, and the output
//! always preserves catalog order.
//!
//! Criteria are modelled as `Option`s: `None` means the constraint is not
//! applied. Turning raw form text into criteria happens in
//! [`SearchFilters::from_form`], which is also where malformed input is
//! dropped. Dropped input is reported back as [`IgnoredCriterion`] so callers
//! can tell "left blank" apart from "could not be understood".

use crate::model::PropertyRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub use crate::model::parse_date;

/// Type value that means "any type".
pub const ANY_TYPE: &str = "Any";

/// Raw search form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    pub property_type: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_bedrooms: Option<String>,
    pub max_bedrooms: Option<String>,
    pub postcode_area: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

/// Validated search criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub property_type: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_bedrooms: Option<u32>,
    pub max_bedrooms: Option<u32>,
    pub postcode_area: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterField {
    MinPrice,
    MaxPrice,
    MinBedrooms,
    MaxBedrooms,
    DateFrom,
    DateTo,
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterField::MinPrice => "min price",
            FilterField::MaxPrice => "max price",
            FilterField::MinBedrooms => "min bedrooms",
            FilterField::MaxBedrooms => "max bedrooms",
            FilterField::DateFrom => "date from",
            FilterField::DateTo => "date to",
        };
        f.write_str(name)
    }
}

/// A form value that was supplied but could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoredCriterion {
    pub field: FilterField,
    pub raw: String,
}

enum Parsed<T> {
    Absent,
    Valid(T),
    Invalid(String),
}

fn parse_with<T>(raw: Option<&str>, parse: impl Fn(&str) -> Option<T>) -> Parsed<T> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Parsed::Absent;
    };
    match parse(raw) {
        Some(value) => Parsed::Valid(value),
        None => Parsed::Invalid(raw.to_string()),
    }
}

fn parse_number<T: FromStr>(raw: Option<&str>) -> Parsed<T> {
    parse_with(raw, |s| s.parse::<T>().ok())
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl SearchFilters {
    /// Converts form text into criteria.
    ///
    /// Never fails: blank fields and the "Any" type are simply absent, and
    /// unparseable numbers or dates are dropped and listed in the second
    /// element of the returned tuple.
    pub fn from_form(form: &SearchForm) -> (Self, Vec<IgnoredCriterion>) {
        let mut ignored = Vec::new();

        fn take<T>(
            parsed: Parsed<T>,
            field: FilterField,
            ignored: &mut Vec<IgnoredCriterion>,
        ) -> Option<T> {
            match parsed {
                Parsed::Absent => None,
                Parsed::Valid(value) => Some(value),
                Parsed::Invalid(raw) => {
                    ignored.push(IgnoredCriterion { field, raw });
                    None
                }
            }
        }

        let filters = Self {
            property_type: non_blank(form.property_type.as_deref())
                .filter(|t| !t.eq_ignore_ascii_case(ANY_TYPE)),
            min_price: take(
                parse_number(form.min_price.as_deref()),
                FilterField::MinPrice,
                &mut ignored,
            ),
            max_price: take(
                parse_number(form.max_price.as_deref()),
                FilterField::MaxPrice,
                &mut ignored,
            ),
            min_bedrooms: take(
                parse_number(form.min_bedrooms.as_deref()),
                FilterField::MinBedrooms,
                &mut ignored,
            ),
            max_bedrooms: take(
                parse_number(form.max_bedrooms.as_deref()),
                FilterField::MaxBedrooms,
                &mut ignored,
            ),
            postcode_area: non_blank(form.postcode_area.as_deref()),
            date_from: take(
                parse_with(form.date_from.as_deref(), parse_date),
                FilterField::DateFrom,
                &mut ignored,
            ),
            date_to: take(
                parse_with(form.date_to.as_deref(), parse_date),
                FilterField::DateTo,
                &mut ignored,
            ),
        };

        (filters, ignored)
    }

    /// True when no criterion would constrain the result.
    pub fn is_empty(&self) -> bool {
        self.effective_type().is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_bedrooms.is_none()
            && self.max_bedrooms.is_none()
            && self.effective_postcode().is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    fn effective_type(&self) -> Option<&str> {
        self.property_type
            .as_deref()
            .filter(|t| *t != ANY_TYPE)
    }

    fn effective_postcode(&self) -> Option<&str> {
        self.postcode_area.as_deref().filter(|p| !p.is_empty())
    }

    /// Checks a single record against every present criterion.
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        if let Some(t) = self.effective_type() {
            if record.property_type != t {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| record.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| record.price > max) {
            return false;
        }
        if self.min_bedrooms.is_some_and(|min| record.bedrooms < min) {
            return false;
        }
        if self.max_bedrooms.is_some_and(|max| record.bedrooms > max) {
            return false;
        }
        if let Some(area) = self.effective_postcode() {
            if !record
                .postcode
                .to_lowercase()
                .contains(&area.to_lowercase())
            {
                return false;
            }
        }
        if self.date_from.is_some_and(|from| record.added < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| record.added > to) {
            return false;
        }
        true
    }
}

/// Returns the records matching `criteria`, in catalog order.
pub fn apply_filters<'a>(
    catalog: &'a [PropertyRecord],
    criteria: &SearchFilters,
) -> Vec<&'a PropertyRecord> {
    let matched: Vec<_> = catalog.iter().filter(|r| criteria.matches(r)).collect();
    debug!(
        total = catalog.len(),
        matched = matched.len(),
        "filters applied"
    );
    matched
}
