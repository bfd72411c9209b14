// crates/awsloc-core/src/lib.rs

//! awsloc-core
//! ===========
//!
//! Validation, request shaping and result presentation for AWS Location
//! Service place indexes. The `awsloc` binary in `awsloc-cli` is a thin
//! dispatcher over this crate.
//!
//! Flow of one invocation:
//!
//! 1. [`config::Settings`] is read from YAML and turned into a
//!    [`config::ClientConfig`].
//! 2. [`validate`] checks partial geo filters, [`request`] shapes the call.
//! 3. [`service::PlaceService`] makes exactly one call on a
//!    [`backend::LocationBackend`] (the live one is [`aws::AwsLocationBackend`]).
//! 4. [`present::Presenter`] prints JSON or a human-readable report.

#[cfg(feature = "aws")]
pub mod aws;
pub mod backend;
pub mod config;
pub mod error;
pub mod model;
pub mod present;
pub mod request;
pub mod service;
pub mod validate;

// Re-exports
pub use crate::backend::LocationBackend;
pub use crate::config::{ClientConfig, Settings};
pub use crate::error::{AwslocError, Result};
pub use crate::model::{BoundingBox, GeoPoint, IndexDescriptor, SearchFilter};
pub use crate::present::{OutputMode, Presenter};
pub use crate::request::FreeTextInput;
pub use crate::service::PlaceService;
pub use crate::validate::GeoFilterInput;
