use crate::Coordinate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Axis {
    #[display(fmt = "x")]
    X,
    #[display(fmt = "y")]
    Y,
}

/// Everything that can go wrong when building or measuring a point.
#[derive(Clone, Debug, PartialEq, derive_more::Display)]
pub enum PointError {
    /// A colour point was given a coordinate that is not a number.
    #[display(fmt = "{} must be a number (got {:?})", axis, value)]
    InvalidCoordinateType { axis: Axis, value: Coordinate },
    /// An advanced point was given a colour missing from the allow-list.
    #[display(fmt = "Invalid colour. Choose from: {:?}", allowed)]
    InvalidColour { colour: String, allowed: Vec<String> },
    /// Distance arithmetic reached a coordinate that is not a number.
    ///
    /// Only types that skip validation at construction can produce this.
    #[display(fmt = "cannot do arithmetic on non-numeric coordinate {:?}", _0)]
    NonNumericCoordinate(Coordinate),
}

impl std::error::Error for PointError {}
