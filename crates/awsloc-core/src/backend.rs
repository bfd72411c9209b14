// crates/awsloc-core/src/backend.rs

use crate::error::Result;
use crate::model::{
    CreatedIndex, DeletedIndex, IndexDetails, IndexListing, PositionSearch, SuggestionSearch,
    TextSearch, UpdatedIndex,
};
use crate::request::{
    CreateIndexRequest, DeleteIndexRequest, DescribeIndexRequest, ListIndexesRequest,
    PositionSearchRequest, SuggestionSearchRequest, TextSearchRequest, UpdateIndexRequest,
};

/// The service that actually executes index management and spatial queries.
///
/// One method per supported operation. Implementations perform exactly one
/// remote call, map the response into the crate's model types, and report
/// failures as [`AwslocError::Backend`](crate::error::AwslocError::Backend)
/// without retrying or reinterpreting them.
///
/// The trait is synchronous: an invocation runs a single command and exits,
/// so async adapters block internally.
pub trait LocationBackend {
    fn create_place_index(&self, req: &CreateIndexRequest) -> Result<CreatedIndex>;
    fn delete_place_index(&self, req: &DeleteIndexRequest) -> Result<DeletedIndex>;
    fn describe_place_index(&self, req: &DescribeIndexRequest) -> Result<IndexDetails>;
    fn list_place_indexes(&self, req: &ListIndexesRequest) -> Result<IndexListing>;
    fn search_for_position(&self, req: &PositionSearchRequest) -> Result<PositionSearch>;
    fn search_for_suggestions(&self, req: &SuggestionSearchRequest) -> Result<SuggestionSearch>;
    fn search_for_text(&self, req: &TextSearchRequest) -> Result<TextSearch>;
    fn update_place_index(&self, req: &UpdateIndexRequest) -> Result<UpdatedIndex>;
}
