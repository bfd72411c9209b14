// crates/awsloc-core/src/service.rs

//! # Place Service
//!
//! Glue between the request builders and a [`LocationBackend`]. Every
//! operation builds its request, makes one backend call, logs the outcome
//! and hands the result back for presentation. Failures are returned, not
//! logged; the caller logs each one once.

use crate::backend::LocationBackend;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::{
    CreatedIndex, DeletedIndex, IndexDetails, IndexListing, PositionSearch, SuggestionSearch,
    TextSearch, UpdatedIndex,
};
use crate::request::{self, FreeTextInput};
use tracing::{debug, info};

pub struct PlaceService<B: LocationBackend> {
    config: ClientConfig,
    backend: B,
}

impl<B: LocationBackend> PlaceService<B> {
    pub fn new(config: ClientConfig, backend: B) -> Self {
        Self { config, backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn create_index(&self, description: Option<&str>, tags: &[String]) -> Result<CreatedIndex> {
        let req = request::create_index(&self.config, description, tags)?;
        debug!(index = %req.descriptor.name, tags = req.descriptor.tags.len(), "creating index");
        let out = self.backend.create_place_index(&req)?;
        info!(
            index = %out.name,
            arn = %out.arn,
            create_time = %out.create_time,
            "Created index"
        );
        Ok(out)
    }

    pub fn delete_index(&self) -> Result<DeletedIndex> {
        let req = request::delete_index(&self.config)?;
        let out = self.backend.delete_place_index(&req)?;
        info!(index = %out.name, "Deleted index");
        Ok(out)
    }

    pub fn describe_index(&self) -> Result<IndexDetails> {
        let req = request::describe_index(&self.config)?;
        let out = self.backend.describe_place_index(&req)?;
        debug!(index = %out.name, "Described index");
        Ok(out)
    }

    pub fn list_indexes(&self, max_results: Option<i32>) -> Result<IndexListing> {
        let req = request::list_indexes(max_results);
        let out = self.backend.list_place_indexes(&req)?;
        info!(count = out.entries.len(), more = out.next_token.is_some(), "Listed indexes");
        Ok(out)
    }

    pub fn search_position(
        &self,
        latitude: f64,
        longitude: f64,
        max_results: Option<i32>,
    ) -> Result<PositionSearch> {
        let req = request::search_position(&self.config, latitude, longitude, max_results)?;
        let out = self.backend.search_for_position(&req)?;
        info!(results = out.results.len(), "Searched position");
        Ok(out)
    }

    pub fn search_suggestions(&self, input: FreeTextInput) -> Result<SuggestionSearch> {
        let req = request::suggestion_search(&self.config, input)?;
        debug!(countries = ?req.filter.countries, forward = req.forward_geo_filters, "searching suggestions");
        let out = self.backend.search_for_suggestions(&req)?;
        info!(results = out.results.len(), "Searched suggestion");
        Ok(out)
    }

    pub fn search_text(&self, input: FreeTextInput) -> Result<TextSearch> {
        let req = request::free_text_search(&self.config, input)?;
        debug!(countries = ?req.filter.countries, forward = req.forward_geo_filters, "searching text");
        let out = self.backend.search_for_text(&req)?;
        info!(results = out.results.len(), "Searched text");
        Ok(out)
    }

    pub fn update_index(&self, description: Option<&str>) -> Result<UpdatedIndex> {
        let req = request::update_index(&self.config, description)?;
        let out = self.backend.update_place_index(&req)?;
        info!(index = %out.name, update_time = %out.update_time, "Updated index");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::error::AwslocError;
    use crate::model::*;
    use crate::request::*;
    use crate::validate::GeoFilterInput;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Records every request and answers with canned values.
    #[derive(Default)]
    struct RecordingBackend {
        calls: RefCell<Vec<String>>,
        created: RefCell<Option<CreateIndexRequest>>,
        position: RefCell<Option<PositionSearchRequest>>,
        suggestion: RefCell<Option<SuggestionSearchRequest>>,
        fail: bool,
    }

    impl RecordingBackend {
        fn record(&self, op: &'static str) -> Result<()> {
            self.calls.borrow_mut().push(op.to_string());
            if self.fail {
                return Err(AwslocError::backend(op, "AccessDeniedException"));
            }
            Ok(())
        }
    }

    fn ts() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 3, 1, 12, 0, 0).unwrap()
    }

    impl LocationBackend for RecordingBackend {
        fn create_place_index(&self, req: &CreateIndexRequest) -> Result<CreatedIndex> {
            self.record("CreatePlaceIndex")?;
            *self.created.borrow_mut() = Some(req.clone());
            Ok(CreatedIndex {
                name: req.descriptor.name.clone(),
                arn: format!("arn:aws:geo:us-east-1:1:place-index/{}", req.descriptor.name),
                create_time: ts(),
            })
        }

        fn delete_place_index(&self, req: &DeleteIndexRequest) -> Result<DeletedIndex> {
            self.record("DeletePlaceIndex")?;
            Ok(DeletedIndex {
                name: req.index_name.clone(),
            })
        }

        fn describe_place_index(&self, req: &DescribeIndexRequest) -> Result<IndexDetails> {
            self.record("DescribePlaceIndex")?;
            Ok(IndexDetails {
                name: req.index_name.clone(),
                arn: String::new(),
                description: String::new(),
                data_source: "Here".into(),
                pricing_plan: None,
                intended_use: None,
                create_time: ts(),
                update_time: ts(),
                tags: Default::default(),
            })
        }

        fn list_place_indexes(&self, _req: &ListIndexesRequest) -> Result<IndexListing> {
            self.record("ListPlaceIndexes")?;
            Ok(IndexListing::default())
        }

        fn search_for_position(&self, req: &PositionSearchRequest) -> Result<PositionSearch> {
            self.record("SearchPlaceIndexForPosition")?;
            *self.position.borrow_mut() = Some(req.clone());
            Ok(PositionSearch {
                summary: PositionSummary {
                    position: req.position.to_vec(),
                    max_results: req.max_results,
                    data_source: "Here".into(),
                    language: Some(req.language.clone()),
                },
                results: vec![],
            })
        }

        fn search_for_suggestions(&self, req: &SuggestionSearchRequest) -> Result<SuggestionSearch> {
            self.record("SearchPlaceIndexForSuggestions")?;
            *self.suggestion.borrow_mut() = Some(req.clone());
            Ok(SuggestionSearch {
                summary: SuggestionSummary {
                    text: req.filter.text.clone(),
                    bias_position: vec![],
                    filter_bbox: vec![],
                    filter_countries: req.filter.countries.clone(),
                    max_results: None,
                    data_source: "Here".into(),
                    language: None,
                },
                results: vec![SuggestionResult {
                    text: "Eiffel Tower, Paris".into(),
                    place_id: None,
                    categories: vec![],
                    supplemental_categories: vec![],
                }],
            })
        }

        fn search_for_text(&self, req: &TextSearchRequest) -> Result<TextSearch> {
            self.record("SearchPlaceIndexForText")?;
            Ok(TextSearch {
                summary: TextSummary {
                    text: req.filter.text.clone(),
                    bias_position: vec![],
                    filter_bbox: vec![],
                    filter_countries: vec![],
                    max_results: None,
                    result_bbox: vec![],
                    data_source: "Here".into(),
                    language: None,
                },
                results: vec![],
            })
        }

        fn update_place_index(&self, req: &UpdateIndexRequest) -> Result<UpdatedIndex> {
            self.record("UpdatePlaceIndex")?;
            Ok(UpdatedIndex {
                name: req.index_name.clone(),
                arn: String::new(),
                update_time: ts(),
            })
        }
    }

    fn service(index: Option<&str>, backend: RecordingBackend) -> PlaceService<RecordingBackend> {
        let settings = Settings {
            aws_profile: "default".into(),
            aws_region: "us-east-1".into(),
            ..Settings::default()
        };
        let config = ClientConfig::new(settings, index.map(str::to_string)).unwrap();
        PlaceService::new(config, backend)
    }

    #[test]
    fn create_forwards_descriptor() {
        let svc = service(Some("foo"), RecordingBackend::default());
        let out = svc
            .create_index(Some("bar"), &["env=prod".to_string()])
            .unwrap();
        assert_eq!(out.name, "foo");

        let sent = svc.backend().created.borrow().clone().unwrap();
        assert_eq!(sent.descriptor.description, "bar");
        assert_eq!(sent.descriptor.tags["env"], "prod");
    }

    #[test]
    fn bad_tag_never_reaches_backend() {
        let svc = service(Some("foo"), RecordingBackend::default());
        let err = svc.create_index(None, &["novalue".to_string()]).unwrap_err();
        assert!(matches!(err, AwslocError::Validation(_)));
        assert!(svc.backend().calls.borrow().is_empty());
    }

    #[test]
    fn missing_index_never_reaches_backend() {
        let svc = service(None, RecordingBackend::default());
        assert!(matches!(svc.delete_index(), Err(AwslocError::Configuration(_))));
        assert!(matches!(svc.describe_index(), Err(AwslocError::Configuration(_))));
        assert!(svc.backend().calls.borrow().is_empty());
    }

    #[test]
    fn list_needs_no_index() {
        let svc = service(None, RecordingBackend::default());
        let out = svc.list_indexes(None).unwrap();
        assert!(out.entries.is_empty());
        assert_eq!(*svc.backend().calls.borrow(), vec!["ListPlaceIndexes".to_string()]);
    }

    #[test]
    fn position_search_sends_longitude_first() {
        let svc = service(Some("foo"), RecordingBackend::default());
        let out = svc.search_position(40.0, -73.0, Some(2)).unwrap();
        assert_eq!(out.summary.position, vec![-73.0, 40.0]);

        let sent = svc.backend().position.borrow().clone().unwrap();
        assert_eq!(sent.position, [-73.0, 40.0]);
        assert_eq!(sent.max_results, Some(2));
    }

    #[test]
    fn suggestion_carries_countries() {
        let svc = service(Some("foo"), RecordingBackend::default());
        let out = svc
            .search_suggestions(FreeTextInput {
                text: "eiffel".into(),
                countries: vec!["FRA".into()],
                ..Default::default()
            })
            .unwrap();
        assert_eq!(out.results.len(), 1);
        let sent = svc.backend().suggestion.borrow().clone().unwrap();
        assert_eq!(sent.filter.countries, vec!["FRA".to_string()]);
    }

    #[test]
    fn invalid_geo_filter_never_reaches_backend() {
        let svc = service(Some("foo"), RecordingBackend::default());
        let err = svc
            .search_text(FreeTextInput {
                text: "eiffel".into(),
                geo: GeoFilterInput {
                    lon: Some(2.0),
                    ..Default::default()
                },
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: longitude is set but latitude is not"
        );
        assert!(svc.backend().calls.borrow().is_empty());
    }

    #[test]
    fn backend_errors_propagate_unchanged() {
        let backend = RecordingBackend {
            fail: true,
            ..Default::default()
        };
        let svc = service(Some("foo"), backend);
        let err = svc.update_index(Some("x")).unwrap_err();
        assert_eq!(err.to_string(), "UpdatePlaceIndex failed: AccessDeniedException");
        assert_eq!(svc.backend().calls.borrow().len(), 1);
    }

    #[test]
    fn suggestion_without_country_never_reaches_backend() {
        let svc = service(Some("foo"), RecordingBackend::default());
        let err = svc
            .search_suggestions(FreeTextInput {
                text: "eiffel".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, AwslocError::Validation(_)));
        assert!(svc.backend().calls.borrow().is_empty());
    }

    /// Counts `ERROR` events emitted while it is the default subscriber.
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn backend_failure_is_left_to_the_caller_to_log() {
        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(errors.clone()));

        let backend = RecordingBackend {
            fail: true,
            ..Default::default()
        };
        let svc = service(Some("foo"), backend);
        tracing::subscriber::with_default(subscriber, || {
            assert!(svc.delete_index().is_err());
        });
        assert_eq!(errors.load(Ordering::SeqCst), 0);
    }
}
