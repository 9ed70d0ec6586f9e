//! The trip query engine: a pure, stateless selection over an in-memory
//! trip collection. Filters compose as an AND in a fixed order; malformed
//! numeric or date input behaves as if the filter was never supplied.

use chrono::NaiveDateTime;
use regex::RegexBuilder;
use serde::Deserialize;

use crate::models::trip::{parse_pickup_datetime, Trip};

/// How the `keyword` parameter is interpreted. Literal substring matching is
/// the default; regex search is opt-in via `KEYWORD_REGEX=true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeywordMatch {
    #[default]
    Substring,
    Regex,
}

/// Raw query parameters, exactly as received from the HTTP layer. Parsing
/// and defaulting happen in the accessors so the tolerance policy lives in
/// one place.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TripQuery {
    pub keyword: Option<String>,
    #[serde(rename = "includeCanceled")]
    pub include_canceled: Option<String>,
    #[serde(rename = "minDistance")]
    pub min_distance: Option<String>,
    #[serde(rename = "maxDistance")]
    pub max_distance: Option<String>,
    #[serde(rename = "pickupDate")]
    pub pickup_date: Option<String>,
}

impl TripQuery {
    /// True when no parameter carries a value. An empty string counts as
    /// absent, so `?keyword=` alone still returns the whole collection.
    pub fn is_unconstrained(&self) -> bool {
        !(is_set(&self.keyword)
            || is_set(&self.include_canceled)
            || is_set(&self.min_distance)
            || is_set(&self.max_distance)
            || is_set(&self.pickup_date))
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|kw| !kw.is_empty())
    }

    /// Only the literal string `"true"` flips the status filter to
    /// not-completed trips. Anything else, including absence, selects
    /// completed trips.
    pub fn include_canceled(&self) -> bool {
        self.include_canceled.as_deref() == Some("true")
    }

    pub fn min_distance(&self) -> Option<f64> {
        parse_finite(self.min_distance.as_deref())
    }

    pub fn max_distance(&self) -> Option<f64> {
        parse_finite(self.max_distance.as_deref())
    }

    pub fn pickup_date(&self) -> Option<NaiveDateTime> {
        self.pickup_date
            .as_deref()
            .and_then(parse_pickup_datetime)
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn parse_finite(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

enum KeywordMatcher {
    Substring(String),
    Pattern(regex::Regex),
}

impl KeywordMatcher {
    fn new(keyword: &str, mode: KeywordMatch) -> Self {
        if mode == KeywordMatch::Regex {
            if let Ok(re) = RegexBuilder::new(keyword).case_insensitive(true).build() {
                return Self::Pattern(re);
            }
            // An unparseable pattern degrades to a literal search rather
            // than failing the request.
        }
        Self::Substring(keyword.to_lowercase())
    }

    fn matches(&self, field: &str) -> bool {
        match self {
            Self::Substring(needle) => field.to_lowercase().contains(needle),
            Self::Pattern(re) => re.is_match(field),
        }
    }
}

/// Select the trips matching `query`, preserving their original order.
/// Returns `None` when the filters eliminate every trip; callers surface
/// that as "not found", never as an empty success.
///
/// A query with no parameters set returns the collection untouched. That
/// path bypasses the status filter, which otherwise always applies:
/// completed trips by default, not-completed with `includeCanceled=true`.
pub fn filter_trips(trips: Vec<Trip>, query: &TripQuery, mode: KeywordMatch) -> Option<Vec<Trip>> {
    if query.is_unconstrained() {
        return Some(trips);
    }

    let mut matched = trips;

    if let Some(keyword) = query.keyword() {
        let matcher = KeywordMatcher::new(keyword, mode);
        matched.retain(|trip| {
            trip.searchable_fields()
                .iter()
                .any(|field| matcher.matches(field))
        });
    }

    if query.include_canceled() {
        matched.retain(|trip| !trip.is_completed());
    } else {
        matched.retain(|trip| trip.is_completed());
    }

    if let Some(min) = query.min_distance() {
        matched.retain(|trip| trip.distance >= min);
    }

    if let Some(max) = query.max_distance() {
        matched.retain(|trip| trip.distance <= max);
    }

    if let Some(cutoff) = query.pickup_date() {
        // A trip whose own date fails to parse cannot satisfy the bound.
        matched.retain(|trip| trip.pickup_datetime().is_some_and(|dt| dt >= cutoff));
    }

    if matched.is_empty() {
        None
    } else {
        Some(matched)
    }
}

/// First trip whose id matches the raw path segment, comparing numeric ids
/// by their decimal rendering and string ids verbatim.
pub fn find_trip_by_id(trips: Vec<Trip>, id: &str) -> Option<Trip> {
    trips.into_iter().find(|trip| trip.id.matches(id))
}
