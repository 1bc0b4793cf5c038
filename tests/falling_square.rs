//! End-to-end scenario: a box dropped on a static floor must come to rest on
//! its top edge.

use impulse2d::dynamics::{BodyDesc, PhysicsWorld};
use impulse2d::math::{Point, Real};

fn rectangle_vertices(half_width: Real, half_height: Real) -> Vec<Point> {
    vec![
        Point::new(-half_width, -half_height),
        Point::new(half_width, -half_height),
        Point::new(half_width, half_height),
        Point::new(-half_width, half_height),
    ]
}

#[test]
fn falling_square_comes_to_rest_on_the_floor() {
    // Screen-style coordinates: y grows downward, gravity is (0, 0.6) per
    // frame, 20 substeps per frame (the world defaults).
    let mut world = PhysicsWorld::with_capacity(4);

    // Floor top edge at y = 220.
    let _floor = world
        .create_body(BodyDesc {
            vertices: rectangle_vertices(200.0, 20.0),
            position: Point::new(0.0, 240.0),
            is_static: true,
            ..Default::default()
        })
        .unwrap();

    // A 20x20 box of mass 1, its lowest edge 100 units above the floor.
    let falling = world
        .create_body(BodyDesc {
            vertices: rectangle_vertices(10.0, 10.0),
            position: Point::new(0.0, 110.0),
            mass: 1.0,
            ..Default::default()
        })
        .unwrap();

    for _ in 0..300 {
        world.step();
    }

    let body = world.body(falling).unwrap();

    // The box's lowest edge rests on the floor's top edge...
    let lowest = body
        .shape()
        .world_vertices()
        .iter()
        .fold(-Real::MAX, |acc, pt| acc.max(pt.y));
    assert!(
        (lowest - 220.0).abs() < 0.5,
        "box rests at y = {lowest}, expected about 220"
    );
    // ...without penetrating it...
    assert!(lowest <= 220.0 + 1.0e-2);
    // ...with near-zero vertical velocity.
    assert!(
        body.linvel().y.abs() < 0.1,
        "residual vertical velocity: {}",
        body.linvel().y
    );
}
