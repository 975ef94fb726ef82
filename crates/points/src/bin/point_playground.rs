use itertools::Itertools;
use points::*;
use rand::Rng;

fn print_list<T: std::fmt::Display>(items: &[T]) {
    println!("[{}]", items.iter().join(", "));
}

fn random_points(count: usize) -> Vec<Point> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| Point::new(rng.gen_range(-10..=10), rng.gen_range(-10..=10)))
        .collect()
}

fn plain_points() -> Result<(), PointError> {
    let mut p = Point::new(1, 2);
    let p4 = Point::new(1, -55);
    println!("p.x={} & p.y={}", p.x, p.y);
    println!("p4.x={} & p4.y={}", p4.x, p4.y);

    p.x = 20.into();
    println!("p.x={} & p.y={}", p.x, p.y);
    println!("{p}");

    let points = random_points(5);
    println!("Generated these random points:");
    points.iter().for_each(|point| println!("{point}"));
    print_list(&points);

    let p = Point::new(3, 4);
    println!("{}", p.distance_to_origin()?);

    let p2 = Point::new(1, 1);
    println!(
        "Is p further than p2 from origin? {}",
        p.is_further_from_origin_than(&p2)?
    );
    println!(
        "Do p and p2 have the same distance from origin? {}",
        p.equals_by_distance(&p2)?
    );

    println!("Sorted list of points by distance to origin:");
    print_list(&sorted_by_distance_to_origin(points)?);
    Ok(())
}

fn colour_points() -> Result<(), PointError> {
    let p = ColourPoint::new(1, 2, "red")?;
    println!("{}", p.distance_to_origin()?);
    println!("{p}");

    if let Err(error) = ColourPoint::new("a", 2, "red") {
        println!("{error}");
    }
    Ok(())
}

fn advanced_points() -> Result<(), PointError> {
    AdvancedPoint::add_colour("rojo");

    let mut p = AdvancedPoint::new(1, 2, "rojo")?;
    p.set_x(11.into());
    println!("{p}");
    println!("{}", p.distance_to_origin()?);

    let p2 = AdvancedPoint::from_coordinate_pair((3, 2), None)?;
    println!("{p2}");

    println!("{}", AdvancedPoint::distance_between(&p, &p2)?);
    println!("{}", p.distance_to(&p2)?);

    if let Err(error) = AdvancedPoint::new(1, 2, "teal") {
        println!("{error}");
    }
    Ok(())
}

fn main() -> Result<(), PointError> {
    env_logger::init();

    plain_points()?;
    colour_points()?;
    advanced_points()
}
