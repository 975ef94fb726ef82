use shrinkwraprs::Shrinkwrap;

use crate::{Axis, Coordinate, PlanarPoint, Point, PointError};

/// A point that carries a colour name.
pub trait Coloured {
    fn colour(&self) -> &str;
}

/// A [`Point`] with a colour label.
///
/// Coordinates must be numbers when the point is built. After that they are
/// reachable through `Deref` like any other point's, and are not checked again.
#[derive(Clone, Debug, Shrinkwrap, derive_more::Display)]
#[shrinkwrap(mutable)]
#[display(fmt = "<{}: {}, {}>", colour, "point.x", "point.y")]
pub struct ColourPoint {
    #[shrinkwrap(main_field)]
    pub point: Point,
    pub colour: String,
}

impl ColourPoint {
    pub fn new(
        x: impl Into<Coordinate>,
        y: impl Into<Coordinate>,
        colour: impl Into<String>,
    ) -> Result<Self, PointError> {
        let x = numeric(Axis::X, x.into())?;
        let y = numeric(Axis::Y, y.into())?;
        let colour = colour.into();
        log::trace!("new colour point {colour} at ({x}, {y})");
        Ok(ColourPoint {
            point: Point::new(x, y),
            colour,
        })
    }
}

fn numeric(axis: Axis, value: Coordinate) -> Result<Coordinate, PointError> {
    if value.is_numeric() {
        Ok(value)
    } else {
        Err(PointError::InvalidCoordinateType { axis, value })
    }
}

impl PlanarPoint for ColourPoint {
    fn x(&self) -> &Coordinate {
        &self.point.x
    }
    fn y(&self) -> &Coordinate {
        &self.point.y
    }
}

impl Coloured for ColourPoint {
    fn colour(&self) -> &str {
        &self.colour
    }
}
