// crates/awsloc-core/src/validate.rs

//! # Parameter Validator
//!
//! Optional geographic filters (bias position, bounding box) must arrive as
//! complete groups. Optionality is explicit, so `0.0` is a real coordinate
//! (the equator and the prime meridian are valid inputs).

use crate::error::{AwslocError, Result};
use crate::model::{BoundingBox, GeoPoint};

/// Raw, possibly partial, geo filter flags as they come off the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoFilterInput {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub x1: Option<f64>,
    pub x2: Option<f64>,
    pub y1: Option<f64>,
    pub y2: Option<f64>,
}

/// The accepted, complete filter groups.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoFilters {
    pub bias: Option<GeoPoint>,
    pub bbox: Option<BoundingBox>,
}

impl GeoFilterInput {
    /// Checks the all-or-nothing rule for both groups and returns them
    /// assembled.
    ///
    /// The bias pair is checked before the bounding box. Bounding box
    /// components are checked in the order `x1, x2, y1, y2`, and the message
    /// names the first missing companion in that same order.
    pub fn validate(&self) -> Result<GeoFilters> {
        let bias = match (self.lat, self.lon) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint::new(latitude, longitude)),
            (Some(_), None) => {
                return Err(AwslocError::validation(
                    "latitude is set but longitude is not",
                ))
            }
            (None, Some(_)) => {
                return Err(AwslocError::validation(
                    "longitude is set but latitude is not",
                ))
            }
            (None, None) => None,
        };

        let parts = [
            ("x1", self.x1),
            ("x2", self.x2),
            ("y1", self.y1),
            ("y2", self.y2),
        ];
        for (name, value) in parts {
            if value.is_none() {
                continue;
            }
            if let Some((missing, _)) = parts
                .iter()
                .find(|(other, v)| *other != name && v.is_none())
            {
                return Err(AwslocError::validation(format!(
                    "{name} is set but {missing} is not"
                )));
            }
        }

        let bbox = match (self.x1, self.y1, self.x2, self.y2) {
            (Some(x1), Some(y1), Some(x2), Some(y2)) => Some(BoundingBox { x1, y1, x2, y2 }),
            _ => None,
        };

        Ok(GeoFilters { bias, bbox })
    }
}

impl GeoFilters {
    /// The service rejects requests carrying both filters.
    pub fn ensure_exclusive(&self) -> Result<()> {
        if self.bias.is_some() && self.bbox.is_some() {
            return Err(AwslocError::validation(
                "bias position and bounding box are mutually exclusive",
            ));
        }
        Ok(())
    }
}
