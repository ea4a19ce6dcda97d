// crates/loadboard-core/src/model.rs
use crate::error::{CatalogError, Result};
use crate::raw::{ListingsRaw, RawListing};
use crate::text::leading_integer;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Unique identifier of a listing within a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        ListingId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(s: &str) -> Self {
        ListingId(s.to_owned())
    }
}

impl From<String> for ListingId {
    fn from(s: String) -> Self {
        ListingId(s)
    }
}

impl From<u32> for ListingId {
    fn from(n: u32) -> Self {
        ListingId(n.to_string())
    }
}

/// Cargo weight as displayed, plus the value used for ordering.
///
/// The value is the leading integer of the text (see
/// [`leading_integer`]); `"500 kg"` sorts as `500`. Text without leading
/// digits has no value and orders before every parsed weight.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Weight {
    text: String,
    value: Option<i64>,
}

impl Weight {
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let value = leading_integer(&text);
        Weight { text, value }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }
}

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    // `None < Some(_)`: unparsable weights are the smallest.
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

/// Pickup date as displayed, plus the calendar date used for ordering.
///
/// Accepts `YYYY-MM-DD`, optionally followed by a time part separated by `T`
/// or a space (the time is ignored). Anything else keeps its text but has no
/// calendar value and orders before every valid date.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PickupDate {
    text: String,
    value: Option<NaiveDate>,
}

impl PickupDate {
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let value = text
            .trim()
            .split(['T', ' '])
            .next()
            .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok());
        PickupDate { text, value }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    /// Long US-style rendering, e.g. `"January 5, 2024"`.
    /// Falls back to the raw text when the date did not parse.
    pub fn display_long(&self) -> String {
        match self.value {
            Some(d) => d.format("%B %-d, %Y").to_string(),
            None => self.text.clone(),
        }
    }
}

impl PartialEq for PickupDate {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for PickupDate {}

impl PartialOrd for PickupDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PickupDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

/// A single freight job offered on the board.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub origin: String,
    pub destination: String,
    pub cargo_type: String,
    pub weight: Weight,
    pub date: PickupDate,
}

impl Listing {
    pub fn new(
        id: impl Into<ListingId>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        cargo_type: impl Into<String>,
        weight: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Listing {
            id: id.into(),
            origin: origin.into(),
            destination: destination.into(),
            cargo_type: cargo_type.into(),
            weight: Weight::parse(weight),
            date: PickupDate::parse(date),
        }
    }

    pub fn id(&self) -> &ListingId {
        &self.id
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn cargo_type(&self) -> &str {
        &self.cargo_type
    }
}

/// The fixed, ordered set of listings a session searches over.
///
/// A catalog is immutable once built; the pipeline only derives views of it.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Build a catalog from already typed listings, rejecting duplicate ids.
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !seen.insert(listing.id.as_str()) {
                return Err(CatalogError::DuplicateId(listing.id.to_string()));
            }
        }
        Ok(Catalog { listings })
    }

    /// Convert raw JSON records into a validated catalog.
    ///
    /// Empty ids and empty origin/destination fields are rejected. Weights and
    /// dates are never rejected; unparsable values simply sort first.
    pub fn from_raw(raw: ListingsRaw) -> Result<Self> {
        let listings = raw
            .into_iter()
            .enumerate()
            .map(|(index, r)| listing_from_raw(index, r))
            .collect::<Result<Vec<_>>>()?;
        Self::from_listings(listings)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|l| &l.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

fn listing_from_raw(index: usize, r: RawListing) -> Result<Listing> {
    let invalid = |reason: &str| CatalogError::InvalidListing {
        index,
        reason: reason.to_string(),
    };

    let id = r.id.into_text();
    if id.trim().is_empty() {
        return Err(invalid("empty id"));
    }
    if r.origin.trim().is_empty() {
        return Err(invalid("empty origin"));
    }
    if r.destination.trim().is_empty() {
        return Err(invalid("empty destination"));
    }

    Ok(Listing {
        id: ListingId(id),
        origin: r.origin,
        destination: r.destination,
        cargo_type: r.cargo_type,
        weight: Weight::parse(r.weight.map(|w| w.into_text()).unwrap_or_default()),
        date: PickupDate::parse(r.date.unwrap_or_default()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawScalar;

    fn raw(id: RawScalar, origin: &str, destination: &str) -> RawListing {
        RawListing {
            id,
            origin: origin.into(),
            destination: destination.into(),
            cargo_type: "Textiles".into(),
            weight: Some(RawScalar::Text("300 kg".into())),
            date: Some("2024-02-10".into()),
        }
    }

    #[test]
    fn numeric_ids_and_weights_are_rendered_to_text() {
        let mut r = raw(RawScalar::Int(7), "Sialkot", "Lahore");
        r.weight = Some(RawScalar::Float(12.5));
        let catalog = Catalog::from_raw(vec![r]).unwrap();
        let l = &catalog.listings()[0];
        assert_eq!(l.id.as_str(), "7");
        assert_eq!(l.weight.text(), "12.5");
        assert_eq!(l.weight.value(), Some(12));
    }

    #[test]
    fn empty_origin_is_rejected_with_position() {
        let err = Catalog::from_raw(vec![
            raw(RawScalar::Int(1), "Lahore", "Karachi"),
            raw(RawScalar::Int(2), "  ", "Karachi"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidListing { index: 1, .. }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::from_raw(vec![
            raw(RawScalar::Int(1), "Lahore", "Karachi"),
            raw(RawScalar::Text("1".into()), "Multan", "Quetta"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn missing_weight_and_date_degrade_instead_of_failing() {
        let mut r = raw(RawScalar::Int(3), "Quetta", "Karachi");
        r.weight = None;
        r.date = None;
        let catalog = Catalog::from_raw(vec![r]).unwrap();
        let l = &catalog.listings()[0];
        assert_eq!(l.weight.value(), None);
        assert_eq!(l.date.value(), None);
    }

    #[test]
    fn pickup_date_ignores_time_component() {
        let d = PickupDate::parse("2024-03-19T08:30:00Z");
        assert_eq!(d.value(), NaiveDate::from_ymd_opt(2024, 3, 19));
        assert_eq!(d.display_long(), "March 19, 2024");
        assert_eq!(PickupDate::parse("soon").display_long(), "soon");
    }

    #[test]
    fn unparsable_values_order_first() {
        assert!(Weight::parse("n/a") < Weight::parse("0 kg"));
        assert!(PickupDate::parse("tbd") < PickupDate::parse("1970-01-01"));
    }
}
