// crates/awsloc-core/src/config.rs

//! # Configuration
//!
//! A YAML settings file supplies the AWS profile and region (both required)
//! plus optional index defaults. [`ClientConfig::new`] is the single
//! validating constructor; the result is passed by reference into every
//! operation instead of living in process-wide state.

use crate::error::{AwslocError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_DATA_SOURCE: &str = "Here";
pub const DEFAULT_INTENDED_USE: &str = "SingleUse";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_PRICING_PLAN: &str = "RequestBasedUsage";

/// On-disk settings, keys spelled the way the file spells them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    #[serde(default)]
    pub aws_profile: String,
    #[serde(default)]
    pub aws_region: String,
    #[serde(default)]
    pub index_name: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub data_source: Option<String>,
    #[serde(default)]
    pub intended_use: Option<String>,
    #[serde(default)]
    pub pricing_plan: Option<String>,
    #[serde(default)]
    pub forward_geo_filters: bool,
}

impl Settings {
    /// `./config.yaml`
    pub fn default_path() -> PathBuf {
        PathBuf::from(".").join(DEFAULT_CONFIG_FILE)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            AwslocError::configuration(format!(
                "failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_yaml(&raw).map_err(|e| match e {
            AwslocError::Configuration(msg) => {
                AwslocError::configuration(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        serde_yaml::from_str(raw)
            .map_err(|e| AwslocError::configuration(format!("invalid config: {e}")))
    }
}

/// Everything an invocation needs to reach the service.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub profile: String,
    pub region: String,
    /// Default index; a `--index` flag replaces it.
    pub index_name: Option<String>,
    pub language: String,
    pub data_source: String,
    pub intended_use: String,
    pub pricing_plan: String,
    /// Send bias position and bounding box to the service. Off by default:
    /// the filters are validated but dropped from the request.
    pub forward_geo_filters: bool,
}

impl ClientConfig {
    /// Merges `settings` with an optional index override and checks the
    /// required fields.
    pub fn new(settings: Settings, index_override: Option<String>) -> Result<Self> {
        let profile = settings.aws_profile.trim().to_string();
        if profile.is_empty() {
            return Err(AwslocError::configuration("AwsProfile not set"));
        }
        let region = settings.aws_region.trim().to_string();
        if region.is_empty() {
            return Err(AwslocError::configuration("AwsRegion not set"));
        }

        let given = |name: &String| !name.trim().is_empty();
        let index_name = index_override
            .filter(given)
            .or(settings.index_name.filter(given));

        Ok(Self {
            profile,
            region,
            index_name,
            language: non_empty_or(settings.language, DEFAULT_LANGUAGE),
            data_source: non_empty_or(settings.data_source, DEFAULT_DATA_SOURCE),
            intended_use: non_empty_or(settings.intended_use, DEFAULT_INTENDED_USE),
            pricing_plan: non_empty_or(settings.pricing_plan, DEFAULT_PRICING_PLAN),
            forward_geo_filters: settings.forward_geo_filters,
        })
    }

    /// The target index, or a configuration error when none was given.
    pub fn index_name(&self) -> Result<&str> {
        self.index_name
            .as_deref()
            .ok_or_else(|| AwslocError::configuration("index name not set"))
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
