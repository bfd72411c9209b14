// crates/awsloc-core/src/aws.rs

//! # AWS Backend
//!
//! [`LocationBackend`] over `aws-sdk-location`. The SDK is async; this
//! adapter owns a current-thread tokio runtime and blocks on each call, so
//! the rest of the crate stays synchronous.

use crate::backend::LocationBackend;
use crate::config::ClientConfig;
use crate::error::{AwslocError, Result};
use crate::model::{
    CreatedIndex, DeletedIndex, IndexDetails, IndexListing, IndexSummary, Place, PositionResult,
    PositionSearch, PositionSummary, SuggestionResult, SuggestionSearch, SuggestionSummary,
    TextResult, TextSearch, TextSummary, TimeZone, UpdatedIndex,
};
use crate::request::{
    CreateIndexRequest, DeleteIndexRequest, DescribeIndexRequest, ListIndexesRequest,
    PositionSearchRequest, SuggestionSearchRequest, TextSearchRequest, UpdateIndexRequest,
};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_location::error::DisplayErrorContext;
use aws_sdk_location::primitives::DateTime as SdkDateTime;
use aws_sdk_location::types::{DataSourceConfiguration, IntendedUse, PricingPlan};
use aws_sdk_location::Client;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

pub struct AwsLocationBackend {
    runtime: Runtime,
    client: Client,
}

impl AwsLocationBackend {
    /// Loads SDK configuration for the configured profile and region.
    ///
    /// Credentials are resolved lazily, so a bad profile only surfaces on
    /// the first call.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        debug!(profile = %config.profile, region = %config.region, "loading AWS config");
        let sdk_config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .profile_name(&config.profile)
                .region(Region::new(config.region.clone()))
                .load(),
        );
        Ok(Self {
            runtime,
            client: Client::new(&sdk_config),
        })
    }
}

#[allow(deprecated)] // pricing_plan is deprecated upstream but still accepted
impl LocationBackend for AwsLocationBackend {
    fn create_place_index(&self, req: &CreateIndexRequest) -> Result<CreatedIndex> {
        let d = &req.descriptor;
        let tags = (!d.tags.is_empty())
            .then(|| d.tags.clone().into_iter().collect::<HashMap<_, _>>());
        let out = self
            .runtime
            .block_on(
                self.client
                    .create_place_index()
                    .index_name(&d.name)
                    .data_source(&d.data_source)
                    .data_source_configuration(
                        DataSourceConfiguration::builder()
                            .intended_use(IntendedUse::from(d.intended_use.as_str()))
                            .build(),
                    )
                    .description(&d.description)
                    .pricing_plan(PricingPlan::from(d.pricing_plan.as_str()))
                    .set_tags(tags)
                    .send(),
            )
            .map_err(|e| sdk_error("CreatePlaceIndex", e))?;

        Ok(CreatedIndex {
            name: out.index_name().to_string(),
            arn: out.index_arn().to_string(),
            create_time: to_utc("CreatePlaceIndex", out.create_time())?,
        })
    }

    fn delete_place_index(&self, req: &DeleteIndexRequest) -> Result<DeletedIndex> {
        self.runtime
            .block_on(
                self.client
                    .delete_place_index()
                    .index_name(&req.index_name)
                    .send(),
            )
            .map_err(|e| sdk_error("DeletePlaceIndex", e))?;

        Ok(DeletedIndex {
            name: req.index_name.clone(),
        })
    }

    fn describe_place_index(&self, req: &DescribeIndexRequest) -> Result<IndexDetails> {
        let out = self
            .runtime
            .block_on(
                self.client
                    .describe_place_index()
                    .index_name(&req.index_name)
                    .send(),
            )
            .map_err(|e| sdk_error("DescribePlaceIndex", e))?;

        Ok(IndexDetails {
            name: out.index_name().to_string(),
            arn: out.index_arn().to_string(),
            description: out.description().to_string(),
            data_source: out.data_source().to_string(),
            pricing_plan: out.pricing_plan().map(|p| p.as_str().to_string()),
            intended_use: out
                .data_source_configuration()
                .and_then(|c| c.intended_use())
                .map(|u| u.as_str().to_string()),
            create_time: to_utc("DescribePlaceIndex", out.create_time())?,
            update_time: to_utc("DescribePlaceIndex", out.update_time())?,
            tags: out
                .tags()
                .map(|t| t.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
                .unwrap_or_default(),
        })
    }

    fn list_place_indexes(&self, req: &ListIndexesRequest) -> Result<IndexListing> {
        let out = self
            .runtime
            .block_on(
                self.client
                    .list_place_indexes()
                    .set_max_results(req.max_results)
                    .send(),
            )
            .map_err(|e| sdk_error("ListPlaceIndexes", e))?;

        let entries = out
            .entries()
            .iter()
            .map(|e| {
                Ok(IndexSummary {
                    name: e.index_name().to_string(),
                    description: e.description().to_string(),
                    data_source: e.data_source().to_string(),
                    pricing_plan: e.pricing_plan().map(|p| p.as_str().to_string()),
                    create_time: to_utc("ListPlaceIndexes", e.create_time())?,
                    update_time: to_utc("ListPlaceIndexes", e.update_time())?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(IndexListing {
            entries,
            next_token: out.next_token().map(str::to_string),
        })
    }

    fn search_for_position(&self, req: &PositionSearchRequest) -> Result<PositionSearch> {
        const OP: &str = "SearchPlaceIndexForPosition";
        let out = self
            .runtime
            .block_on(
                self.client
                    .search_place_index_for_position()
                    .index_name(&req.index_name)
                    .set_position(Some(req.position.to_vec()))
                    .language(&req.language)
                    .set_max_results(req.max_results)
                    .send(),
            )
            .map_err(|e| sdk_error(OP, e))?;

        let s = out
            .summary()
            .ok_or_else(|| AwslocError::backend(OP, "response has no summary"))?;
        Ok(PositionSearch {
            summary: PositionSummary {
                position: s.position().to_vec(),
                max_results: s.max_results(),
                data_source: s.data_source().to_string(),
                language: s.language().map(str::to_string),
            },
            results: out
                .results()
                .iter()
                .map(|r| PositionResult {
                    place: r.place().map(place),
                    distance: r.distance(),
                    place_id: r.place_id().map(str::to_string),
                })
                .collect(),
        })
    }

    fn search_for_suggestions(&self, req: &SuggestionSearchRequest) -> Result<SuggestionSearch> {
        const OP: &str = "SearchPlaceIndexForSuggestions";
        let out = self
            .runtime
            .block_on(
                self.client
                    .search_place_index_for_suggestions()
                    .index_name(&req.index_name)
                    .text(&req.filter.text)
                    .set_bias_position(req.bias_position().map(|p| p.to_vec()))
                    .set_filter_b_box(req.filter_bbox().map(|b| b.to_vec()))
                    .set_filter_countries(non_empty(&req.filter.countries))
                    .language(&req.language)
                    .set_max_results(req.max_results)
                    .send(),
            )
            .map_err(|e| sdk_error(OP, e))?;

        let s = out
            .summary()
            .ok_or_else(|| AwslocError::backend(OP, "response has no summary"))?;
        Ok(SuggestionSearch {
            summary: SuggestionSummary {
                text: s.text().to_string(),
                bias_position: s.bias_position().to_vec(),
                filter_bbox: s.filter_b_box().to_vec(),
                filter_countries: s.filter_countries().to_vec(),
                max_results: s.max_results(),
                data_source: s.data_source().to_string(),
                language: s.language().map(str::to_string),
            },
            results: out
                .results()
                .iter()
                .map(|r| SuggestionResult {
                    text: r.text().to_string(),
                    place_id: r.place_id().map(str::to_string),
                    categories: r.categories().to_vec(),
                    supplemental_categories: r.supplemental_categories().to_vec(),
                })
                .collect(),
        })
    }

    fn search_for_text(&self, req: &TextSearchRequest) -> Result<TextSearch> {
        const OP: &str = "SearchPlaceIndexForText";
        let out = self
            .runtime
            .block_on(
                self.client
                    .search_place_index_for_text()
                    .index_name(&req.index_name)
                    .text(&req.filter.text)
                    .set_bias_position(req.bias_position().map(|p| p.to_vec()))
                    .set_filter_b_box(req.filter_bbox().map(|b| b.to_vec()))
                    .set_filter_countries(non_empty(&req.filter.countries))
                    .language(&req.language)
                    .set_max_results(req.max_results)
                    .send(),
            )
            .map_err(|e| sdk_error(OP, e))?;

        let s = out
            .summary()
            .ok_or_else(|| AwslocError::backend(OP, "response has no summary"))?;
        Ok(TextSearch {
            summary: TextSummary {
                text: s.text().to_string(),
                bias_position: s.bias_position().to_vec(),
                filter_bbox: s.filter_b_box().to_vec(),
                filter_countries: s.filter_countries().to_vec(),
                max_results: s.max_results(),
                result_bbox: s.result_b_box().to_vec(),
                data_source: s.data_source().to_string(),
                language: s.language().map(str::to_string),
            },
            results: out
                .results()
                .iter()
                .map(|r| TextResult {
                    place: r.place().map(place),
                    distance: r.distance(),
                    relevance: r.relevance(),
                    place_id: r.place_id().map(str::to_string),
                })
                .collect(),
        })
    }

    fn update_place_index(&self, req: &UpdateIndexRequest) -> Result<UpdatedIndex> {
        let out = self
            .runtime
            .block_on(
                self.client
                    .update_place_index()
                    .index_name(&req.index_name)
                    .set_description(req.description.clone())
                    .data_source_configuration(
                        DataSourceConfiguration::builder()
                            .intended_use(IntendedUse::from(req.intended_use.as_str()))
                            .build(),
                    )
                    .pricing_plan(PricingPlan::from(req.pricing_plan.as_str()))
                    .send(),
            )
            .map_err(|e| sdk_error("UpdatePlaceIndex", e))?;

        Ok(UpdatedIndex {
            name: out.index_name().to_string(),
            arn: out.index_arn().to_string(),
            update_time: to_utc("UpdatePlaceIndex", out.update_time())?,
        })
    }
}

fn sdk_error(operation: &'static str, err: impl std::error::Error) -> AwslocError {
    AwslocError::backend(operation, DisplayErrorContext(&err).to_string())
}

/// SDK timestamps outside chrono's range are reported, never clamped.
fn to_utc(operation: &'static str, t: &SdkDateTime) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(t.secs(), t.subsec_nanos()).ok_or_else(|| {
        AwslocError::backend(
            operation,
            format!("timestamp out of range: {}s", t.secs()),
        )
    })
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}

fn place(p: &aws_sdk_location::types::Place) -> Place {
    let owned = |s: Option<&str>| s.map(str::to_string);
    Place {
        label: owned(p.label()),
        point: p.geometry().map(|g| g.point().to_vec()).unwrap_or_default(),
        address_number: owned(p.address_number()),
        street: owned(p.street()),
        neighborhood: owned(p.neighborhood()),
        municipality: owned(p.municipality()),
        sub_municipality: owned(p.sub_municipality()),
        sub_region: owned(p.sub_region()),
        region: owned(p.region()),
        country: owned(p.country()),
        postal_code: owned(p.postal_code()),
        interpolated: p.interpolated(),
        time_zone: p.time_zone().map(|tz| TimeZone {
            name: tz.name().to_string(),
            offset: tz.offset(),
        }),
        unit_type: owned(p.unit_type()),
        unit_number: owned(p.unit_number()),
        categories: p.categories().to_vec(),
        supplemental_categories: p.supplemental_categories().to_vec(),
    }
}
