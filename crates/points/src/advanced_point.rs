use euclid::point2;
use getset::{Getters, Setters};
use lazy_static::lazy_static;
use parking_lot::RwLock;

use crate::{Coloured, Coordinate, PlanarPoint, PointError};

pub const DEFAULT_COLOURS: [&str; 7] = [
    "red",
    "blue",
    "green",
    "yellow",
    "black",
    "white",
    "periwinkle",
];
pub const DEFAULT_COLOUR: &str = "red";

lazy_static! {
    // Append-only. Shared by every AdvancedPoint in the process.
    static ref COLOURS: RwLock<Vec<String>> =
        RwLock::new(DEFAULT_COLOURS.iter().map(|c| c.to_string()).collect());
}

/// A coloured point whose colour must be on the shared allow-list.
///
/// Holds its own copies of x, y and colour rather than wrapping a
/// [`crate::ColourPoint`], so coordinates are never checked for being numbers.
/// Only the colour is validated, and only at construction. `y` and `colour`
/// have no setters.
#[derive(Clone, Debug, Getters, Setters, derive_more::Display)]
#[display(fmt = "<{}: {}, {}>", colour, x, y)]
pub struct AdvancedPoint {
    #[get = "pub"]
    #[set = "pub"]
    x: Coordinate,
    #[get = "pub"]
    y: Coordinate,
    #[get = "pub"]
    colour: String,
}

impl AdvancedPoint {
    pub fn new(
        x: impl Into<Coordinate>,
        y: impl Into<Coordinate>,
        colour: impl Into<String>,
    ) -> Result<Self, PointError> {
        let colour = colour.into();
        if !Self::is_allowed_colour(&colour) {
            log::debug!("rejected colour {colour:?}");
            return Err(PointError::InvalidColour {
                colour,
                allowed: Self::colours(),
            });
        }
        let (x, y) = (x.into(), y.into());
        log::trace!("new advanced point {colour} at ({x}, {y})");
        Ok(AdvancedPoint { x, y, colour })
    }

    /// Builds from an `(x, y)` pair. `None` picks [`DEFAULT_COLOUR`].
    pub fn from_coordinate_pair<X: Into<Coordinate>, Y: Into<Coordinate>>(
        (x, y): (X, Y),
        colour: Option<&str>,
    ) -> Result<Self, PointError> {
        Self::new(x, y, colour.unwrap_or(DEFAULT_COLOUR))
    }

    /// Extends the allow-list for every point built from now on. Duplicates
    /// are kept.
    pub fn add_colour(colour: impl Into<String>) {
        let colour = colour.into();
        log::debug!("adding {colour:?} to the colour allow-list");
        COLOURS.write().push(colour);
    }

    pub fn colours() -> Vec<String> {
        COLOURS.read().clone()
    }

    pub fn is_allowed_colour(colour: &str) -> bool {
        COLOURS.read().iter().any(|allowed| allowed == colour)
    }

    pub fn distance_between(
        p1: &impl PlanarPoint,
        p2: &impl PlanarPoint,
    ) -> Result<f64, PointError> {
        Ok(p1.position()?.distance_to(p2.position()?))
    }

    /// Distance to `other`, with the y term computed as `y + other.y`.
    ///
    /// This disagrees with [`AdvancedPoint::distance_between`] and is probably
    /// a sign mistake, but callers may rely on it, so it is kept as is.
    pub fn distance_to(&self, other: &impl PlanarPoint) -> Result<f64, PointError> {
        let other = other.position()?;
        Ok(self.position()?.distance_to(point2(other.x, -other.y)))
    }
}

impl PlanarPoint for AdvancedPoint {
    fn x(&self) -> &Coordinate {
        &self.x
    }
    fn y(&self) -> &Coordinate {
        &self.y
    }
}

impl Coloured for AdvancedPoint {
    fn colour(&self) -> &str {
        &self.colour
    }
}
