use std::fmt::{Display, Formatter};

use crate::PointError;

/// A single coordinate value.
///
/// Coordinates are not guaranteed to be numbers. A [`crate::Point`] stores
/// whatever it is given, and only arithmetic on a [`Coordinate::Text`] fails.
#[derive(Clone, Debug, PartialEq, derive_more::From)]
pub enum Coordinate {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Coordinate {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Coordinate::Int(_) | Coordinate::Float(_))
    }
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Coordinate::Int(value) => Some(*value as f64),
            Coordinate::Float(value) => Some(*value),
            Coordinate::Text(_) => None,
        }
    }
    pub fn try_as_f64(&self) -> Result<f64, PointError> {
        self.as_f64()
            .ok_or_else(|| PointError::NonNumericCoordinate(self.clone()))
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Coordinate::Int(value) => write!(f, "{value}"),
            // Debug keeps the trailing ".0" on whole floats
            Coordinate::Float(value) => write!(f, "{value:?}"),
            Coordinate::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<i32> for Coordinate {
    fn from(value: i32) -> Self {
        Coordinate::Int(value.into())
    }
}
impl From<f32> for Coordinate {
    fn from(value: f32) -> Self {
        Coordinate::Float(value.into())
    }
}
impl From<&str> for Coordinate {
    fn from(value: &str) -> Self {
        Coordinate::Text(value.to_string())
    }
}
