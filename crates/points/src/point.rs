use std::cmp::Ordering;

use euclid::default::{Point2D, Vector2D};
use euclid::{point2, vec2};
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::{Coordinate, PointError};

/// Anything with an x and a y that can be measured against the origin.
///
/// Two points are "equal" here when they sit at the same distance from the
/// origin, whatever their coordinates. (3, 4), (4, 3) and (0, 5) are all
/// equal.
pub trait PlanarPoint {
    fn x(&self) -> &Coordinate;
    fn y(&self) -> &Coordinate;

    fn position(&self) -> Result<Point2D<f64>, PointError> {
        Ok(point2(self.x().try_as_f64()?, self.y().try_as_f64()?))
    }
    fn distance_to_origin(&self) -> Result<f64, PointError> {
        let from_origin: Vector2D<f64> = vec2(self.x().try_as_f64()?, self.y().try_as_f64()?);
        Ok(from_origin.length())
    }
    /// `None` when either distance is NaN, which also makes
    /// `equals_by_distance` false.
    fn compare_by_distance(
        &self,
        other: &impl PlanarPoint,
    ) -> Result<Option<Ordering>, PointError> {
        let (mine, theirs) = (self.distance_to_origin()?, other.distance_to_origin()?);
        Ok(mine.partial_cmp(&theirs))
    }
    fn equals_by_distance(&self, other: &impl PlanarPoint) -> Result<bool, PointError> {
        Ok(self.distance_to_origin()? == other.distance_to_origin()?)
    }
    fn is_further_from_origin_than(&self, other: &impl PlanarPoint) -> Result<bool, PointError> {
        Ok(self.distance_to_origin()? > other.distance_to_origin()?)
    }
}

/// Stable sort by distance to the origin, nearest first.
///
/// Fails without reordering anything if any point has a non-numeric
/// coordinate. NaN distances sort last.
pub fn sorted_by_distance_to_origin<P: PlanarPoint>(
    points: impl IntoIterator<Item = P>,
) -> Result<Vec<P>, PointError> {
    let keyed: Vec<(P, f64)> = points
        .into_iter()
        .map(|point| point.distance_to_origin().map(|distance| (point, distance)))
        .collect::<Result<_, _>>()?;
    Ok(keyed
        .into_iter()
        .sorted_by_key(|(_, distance)| OrderedFloat(*distance))
        .map(|(point, _)| point)
        .collect())
}

/// A bare coordinate pair. Nothing is validated, so a `Point` can hold text.
#[derive(Clone, Debug, derive_more::Display)]
#[display(fmt = "<x={}, y={}>", x, y)]
pub struct Point {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl Point {
    pub fn new(x: impl Into<Coordinate>, y: impl Into<Coordinate>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl PlanarPoint for Point {
    fn x(&self) -> &Coordinate {
        &self.x
    }
    fn y(&self) -> &Coordinate {
        &self.y
    }
}
