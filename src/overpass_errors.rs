use thiserror::Error;

use crate::elements::{TleParseError, ValidationError};
use crate::observers::GeodeticRangeError;
use crate::propagation::{InitError, PropagationError};

/// Top-level error type of the crate.
///
/// Every fallible operation returns this enum. Each variant keeps the originating module
/// error as payload, so callers can match on the failure class (parse, validation, model
/// initialization, propagation, geodetic range, rendering, session state) and still reach
/// the precise diagnostic underneath.
#[derive(Error, Debug)]
pub enum OverpassError {
    #[error("TLE parsing error: {0}")]
    Parsing(#[from] TleParseError),

    #[error("Element validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Propagation model initialization error: {0}")]
    ModelInit(#[from] InitError),

    #[error("Propagation error: {0}")]
    Propagation(#[from] PropagationError),

    #[error("Geodetic coordinate error: {0}")]
    GeodeticRange(#[from] GeodeticRangeError),

    #[error("Value does not fit the fixed-width {field} field")]
    UnrenderableField { field: &'static str },

    #[error("Invalid session state: {0}")]
    InvalidState(&'static str),
}
