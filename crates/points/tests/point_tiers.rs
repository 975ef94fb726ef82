use ntest::{assert_about_eq, assert_true};
use points::*;
use pretty_assertions::assert_eq;

fn labels<P: std::fmt::Display>(points: &[P]) -> Vec<String> {
    points.iter().map(|p| p.to_string()).collect()
}

#[test]
fn test_all_tiers_measure_the_same_way() {
    let plain = Point::new(3, 4);
    let coloured = ColourPoint::new(4, 3, "magenta").unwrap();
    let advanced = AdvancedPoint::new(0, 5, "green").unwrap();

    assert_eq!(plain.distance_to_origin(), Ok(5.0));
    assert_eq!(coloured.distance_to_origin(), Ok(5.0));
    assert_eq!(advanced.distance_to_origin(), Ok(5.0));

    assert_true!(plain.equals_by_distance(&coloured).unwrap());
    assert_true!(coloured.equals_by_distance(&advanced).unwrap());
}

#[test]
fn test_sort_colour_points() {
    let points = vec![
        ColourPoint::new(-10, 0, "red").unwrap(),
        ColourPoint::new(4, 3, "green").unwrap(),
        ColourPoint::new(0, 1, "blue").unwrap(),
        ColourPoint::new(3, -4, "cyan").unwrap(),
    ];
    let sorted = sorted_by_distance_to_origin(points).unwrap();
    assert_eq!(
        labels(&sorted),
        vec!["<blue: 0, 1>", "<green: 4, 3>", "<cyan: 3, -4>", "<red: -10, 0>"]
    );
}

#[test]
fn test_sort_advanced_points() {
    let points = vec![
        AdvancedPoint::new(2, 2, "white").unwrap(),
        AdvancedPoint::from_coordinate_pair((1, 0), None).unwrap(),
        AdvancedPoint::new(-2, -2, "black").unwrap(),
    ];
    let sorted = sorted_by_distance_to_origin(points).unwrap();
    assert_eq!(
        labels(&sorted),
        vec!["<red: 1, 0>", "<white: 2, 2>", "<black: -2, -2>"]
    );
}

#[test]
fn test_allow_list_only_checked_at_construction() {
    assert!(matches!(
        AdvancedPoint::new(1, 2, "teal"),
        Err(PointError::InvalidColour { .. })
    ));
    AdvancedPoint::add_colour("teal");
    let teal = AdvancedPoint::new(1, 2, "teal").unwrap();
    assert_eq!(teal.to_string(), "<teal: 1, 2>");
    assert_true!(AdvancedPoint::is_allowed_colour("teal"));
}

#[test]
fn test_colour_point_rejects_text_but_point_does_not() {
    assert!(matches!(
        ColourPoint::new("a", 2, "red"),
        Err(PointError::InvalidCoordinateType { axis: Axis::X, .. })
    ));
    assert!(matches!(
        ColourPoint::new(1, "b", "red"),
        Err(PointError::InvalidCoordinateType { axis: Axis::Y, .. })
    ));
    assert_eq!(Point::new("a", 2).to_string(), "<x=a, y=2>");
    assert!(AdvancedPoint::new("a", 2, "red").is_ok());
}

#[test]
fn test_advanced_distances() {
    let mut p = AdvancedPoint::new(1, 2, "periwinkle").unwrap();
    p.set_x(11.into());
    let p2 = AdvancedPoint::from_coordinate_pair((3, 2), None).unwrap();

    assert_about_eq!(p.distance_to_origin().unwrap(), 125f64.sqrt());
    assert_eq!(AdvancedPoint::distance_between(&p, &p2), Ok(8.0));
    assert_about_eq!(p.distance_to(&p2).unwrap(), 80f64.sqrt());
    assert_about_eq!(p2.distance_to(&p).unwrap(), 80f64.sqrt());
}

#[test]
fn test_errors_are_std_errors() {
    let error: Box<dyn std::error::Error> =
        Box::new(ColourPoint::new(1, "b", "red").unwrap_err());
    assert!(error.to_string().starts_with("y must be a number"));
}
