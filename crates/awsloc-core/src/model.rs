// crates/awsloc-core/src/model.rs

//! # Data Model
//!
//! Request-side values ([`GeoPoint`], [`BoundingBox`], [`SearchFilter`],
//! [`IndexDescriptor`]) and the response-side views the backend adapter
//! builds from service output. Nothing here is cached or persisted; every
//! value lives for a single invocation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A coordinate. Range is not checked here; the service rejects bad values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Backend axis order: `[longitude, latitude]`.
    #[inline]
    pub fn to_position(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

/// A rectangular filter given as southwest `(x1, y1)` and northeast
/// `(x2, y2)` corners, where x is longitude and y is latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    /// Backend layout: `[x1, y1, x2, y2]`.
    #[inline]
    pub fn to_bbox(self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

/// Normalized shape of a suggestion or text search.
///
/// `bias` and `bbox` are mutually exclusive on the service side. Whether they
/// are forwarded at all is decided by
/// [`ClientConfig::forward_geo_filters`](crate::config::ClientConfig).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchFilter {
    pub text: String,
    pub bias: Option<GeoPoint>,
    pub bbox: Option<BoundingBox>,
    pub countries: Vec<String>,
}

/// Identity and metadata of a remote place index, as sent on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDescriptor {
    pub name: String,
    pub description: String,
    pub data_source: String,
    pub pricing_plan: String,
    pub intended_use: String,
    pub tags: BTreeMap<String, String>,
}

// -----------------------------------------------------------------------
// INDEX MANAGEMENT RESPONSES
// -----------------------------------------------------------------------

/// The service's current view of one index (describe).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDetails {
    pub name: String,
    pub arn: String,
    pub description: String,
    pub data_source: String,
    pub pricing_plan: Option<String>,
    /// `SingleUse` or `Storage`.
    pub intended_use: Option<String>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/// One row of a list call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSummary {
    pub name: String,
    pub description: String,
    pub data_source: String,
    pub pricing_plan: Option<String>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexListing {
    pub entries: Vec<IndexSummary>,
    /// Set when the service has more entries than it returned.
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedIndex {
    pub name: String,
    pub arn: String,
    pub create_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedIndex {
    pub name: String,
    pub arn: String,
    pub update_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedIndex {
    pub name: String,
}

// -----------------------------------------------------------------------
// SEARCH RESPONSES
// -----------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeZone {
    pub name: String,
    /// Offset from UTC in seconds.
    pub offset: Option<i32>,
}

/// A place returned by any of the search operations.
///
/// Which fields are filled depends on the data provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Place {
    pub label: Option<String>,
    /// `[longitude, latitude]`
    pub point: Vec<f64>,
    pub address_number: Option<String>,
    pub street: Option<String>,
    pub neighborhood: Option<String>,
    pub municipality: Option<String>,
    pub sub_municipality: Option<String>,
    pub sub_region: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub interpolated: Option<bool>,
    pub time_zone: Option<TimeZone>,
    pub unit_type: Option<String>,
    pub unit_number: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub supplemental_categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSummary {
    pub position: Vec<f64>,
    pub max_results: Option<i32>,
    pub data_source: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionResult {
    pub place: Option<Place>,
    /// Meters from the searched position.
    pub distance: f64,
    pub place_id: Option<String>,
}

/// Summary-plus-results envelope for reverse geocoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSearch {
    pub summary: PositionSummary,
    pub results: Vec<PositionResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionSummary {
    pub text: String,
    #[serde(default)]
    pub bias_position: Vec<f64>,
    #[serde(default)]
    pub filter_bbox: Vec<f64>,
    #[serde(default)]
    pub filter_countries: Vec<String>,
    pub max_results: Option<i32>,
    pub data_source: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub text: String,
    pub place_id: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub supplemental_categories: Vec<String>,
}

/// Summary-plus-results envelope for autocomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionSearch {
    pub summary: SuggestionSummary,
    pub results: Vec<SuggestionResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSummary {
    pub text: String,
    #[serde(default)]
    pub bias_position: Vec<f64>,
    #[serde(default)]
    pub filter_bbox: Vec<f64>,
    #[serde(default)]
    pub filter_countries: Vec<String>,
    pub max_results: Option<i32>,
    /// Bounding box enclosing all results.
    #[serde(default)]
    pub result_bbox: Vec<f64>,
    pub data_source: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextResult {
    pub place: Option<Place>,
    pub distance: Option<f64>,
    /// 0.0 to 1.0, higher is a closer match.
    pub relevance: Option<f64>,
    pub place_id: Option<String>,
}

/// Summary-plus-results envelope for forward geocoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSearch {
    pub summary: TextSummary,
    pub results: Vec<TextResult>,
}
