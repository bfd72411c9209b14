// crates/awsloc-core/src/request.rs

//! # Request Builder
//!
//! Turns normalized command-line input plus [`ClientConfig`] into the eight
//! backend call shapes. Builders never talk to the service; they only fail
//! on bad input or a missing index name.

use crate::config::ClientConfig;
use crate::error::{AwslocError, Result};
use crate::model::{GeoPoint, IndexDescriptor, SearchFilter};
use crate::validate::GeoFilterInput;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndexRequest {
    pub descriptor: IndexDescriptor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteIndexRequest {
    pub index_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DescribeIndexRequest {
    pub index_name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListIndexesRequest {
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionSearchRequest {
    pub index_name: String,
    /// `[longitude, latitude]`
    pub position: [f64; 2],
    pub language: String,
    pub max_results: Option<i32>,
}

/// Shared shape of the suggestion and text searches.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeTextSearchRequest {
    pub index_name: String,
    pub filter: SearchFilter,
    pub language: String,
    pub max_results: Option<i32>,
    /// When false the adapter leaves bias and bbox out of the outbound call.
    pub forward_geo_filters: bool,
}

impl FreeTextSearchRequest {
    /// `[longitude, latitude]` when forwarding is on and a bias was given.
    pub fn bias_position(&self) -> Option<[f64; 2]> {
        self.forward_geo_filters
            .then_some(self.filter.bias)
            .flatten()
            .map(GeoPoint::to_position)
    }

    /// `[x1, y1, x2, y2]` when forwarding is on and a bbox was given.
    pub fn filter_bbox(&self) -> Option<[f64; 4]> {
        self.forward_geo_filters
            .then_some(self.filter.bbox)
            .flatten()
            .map(|b| b.to_bbox())
    }
}

pub type SuggestionSearchRequest = FreeTextSearchRequest;
pub type TextSearchRequest = FreeTextSearchRequest;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateIndexRequest {
    pub index_name: String,
    pub description: Option<String>,
    pub pricing_plan: String,
    pub intended_use: String,
}

/// Free-text search input before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FreeTextInput {
    pub text: String,
    pub countries: Vec<String>,
    pub geo: GeoFilterInput,
    pub max_results: Option<i32>,
}

/// Parses `key=value` strings into a tag map.
///
/// Each string must split on `=` into exactly two parts, so `"novalue"` and
/// `"a=b=c"` are both rejected.
pub fn parse_tags<S: AsRef<str>>(tags: &[S]) -> Result<BTreeMap<String, String>> {
    let mut out = BTreeMap::new();
    for tag in tags {
        let tag = tag.as_ref();
        let mut parts = tag.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => {
                out.insert(key.to_string(), value.to_string());
            }
            _ => return Err(AwslocError::validation(format!("invalid tag: {tag}"))),
        }
    }
    Ok(out)
}

pub fn create_index(
    config: &ClientConfig,
    description: Option<&str>,
    tags: &[String],
) -> Result<CreateIndexRequest> {
    let name = config.index_name()?.to_string();
    let tags = parse_tags(tags)?;
    Ok(CreateIndexRequest {
        descriptor: IndexDescriptor {
            name,
            description: description.unwrap_or_default().to_string(),
            data_source: config.data_source.clone(),
            pricing_plan: config.pricing_plan.clone(),
            intended_use: config.intended_use.clone(),
            tags,
        },
    })
}

pub fn delete_index(config: &ClientConfig) -> Result<DeleteIndexRequest> {
    Ok(DeleteIndexRequest {
        index_name: config.index_name()?.to_string(),
    })
}

pub fn describe_index(config: &ClientConfig) -> Result<DescribeIndexRequest> {
    Ok(DescribeIndexRequest {
        index_name: config.index_name()?.to_string(),
    })
}

pub fn list_indexes(max_results: Option<i32>) -> ListIndexesRequest {
    ListIndexesRequest { max_results }
}

pub fn search_position(
    config: &ClientConfig,
    latitude: f64,
    longitude: f64,
    max_results: Option<i32>,
) -> Result<PositionSearchRequest> {
    Ok(PositionSearchRequest {
        index_name: config.index_name()?.to_string(),
        position: GeoPoint::new(latitude, longitude).to_position(),
        language: config.language.clone(),
        max_results,
    })
}

/// Validates the geo filters and shapes a suggestion or text search.
///
/// With forwarding enabled, bias and bbox together are rejected here so the
/// service never sees the combination.
pub fn free_text_search(
    config: &ClientConfig,
    input: FreeTextInput,
) -> Result<FreeTextSearchRequest> {
    let index_name = config.index_name()?.to_string();
    let filters = input.geo.validate()?;
    if config.forward_geo_filters {
        filters.ensure_exclusive()?;
    }

    Ok(FreeTextSearchRequest {
        index_name,
        filter: SearchFilter {
            text: input.text,
            bias: filters.bias,
            bbox: filters.bbox,
            countries: input.countries,
        },
        language: config.language.clone(),
        max_results: input.max_results,
        forward_geo_filters: config.forward_geo_filters,
    })
}

/// Shapes a suggestion search, which needs at least one country.
///
/// The country check runs after the geo filters, so a partial bias or bbox is
/// reported first.
pub fn suggestion_search(
    config: &ClientConfig,
    input: FreeTextInput,
) -> Result<SuggestionSearchRequest> {
    let req = free_text_search(config, input)?;
    if req.filter.countries.is_empty() {
        return Err(AwslocError::validation("at least one country is required"));
    }
    Ok(req)
}

pub fn update_index(config: &ClientConfig, description: Option<&str>) -> Result<UpdateIndexRequest> {
    Ok(UpdateIndexRequest {
        index_name: config.index_name()?.to_string(),
        description: description.map(str::to_string),
        pricing_plan: config.pricing_plan.clone(),
        intended_use: config.intended_use.clone(),
    })
}
