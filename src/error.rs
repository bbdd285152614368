use thiserror::Error;

use crate::geometry::ShapeKind;

/// Failure to decode a coordinate string for a given shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("{shape} coordinates must be numeric, found {token:?}")]
    Format { shape: ShapeKind, token: String },

    #[error("{shape} requires exactly {expected} coordinates, found {found}")]
    Arity {
        shape: ShapeKind,
        expected: usize,
        found: usize,
    },

    #[error("{0}")]
    Constraint(String),
}

#[derive(Debug, Error)]
pub enum ImageMapError {
    #[error("Invalid coordinates: {0}")]
    Coordinates(#[from] CoordinateError),

    #[error("Access key must be a single character, got {0:?}")]
    AccessKeyLength(String),

    #[error("Cannot replace {expected} geometry with {found} geometry")]
    ShapeMismatch { expected: ShapeKind, found: ShapeKind },

    #[error("Area index {index} out of range for {len} areas")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid map document: {0}")]
    InvalidDocument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
