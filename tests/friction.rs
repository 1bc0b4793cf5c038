//! Friction between a sliding box and a static floor.

use impulse2d::dynamics::{BodyDesc, PhysicsWorld};
use impulse2d::math::{Point, Real, Vector};

fn rectangle_vertices(half_width: Real, half_height: Real) -> Vec<Point> {
    vec![
        Point::new(-half_width, -half_height),
        Point::new(half_width, -half_height),
        Point::new(half_width, half_height),
        Point::new(-half_width, half_height),
    ]
}

#[test]
fn friction_slows_a_sliding_box() {
    let mut world = PhysicsWorld::with_capacity(4);

    let _floor = world
        .create_body(BodyDesc {
            vertices: rectangle_vertices(500.0, 20.0),
            position: Point::new(0.0, 240.0),
            is_static: true,
            ..Default::default()
        })
        .unwrap();
    let sliding = world
        .create_body(BodyDesc {
            vertices: rectangle_vertices(10.0, 10.0),
            position: Point::new(-400.0, 205.0),
            ..Default::default()
        })
        .unwrap();

    // Let the box settle on the floor first.
    for _ in 0..10 {
        world.step();
    }

    let resting_vy = world.body(sliding).unwrap().linvel().y;
    world
        .body_mut(sliding)
        .unwrap()
        .set_linvel(Vector::new(2.0, resting_vy));

    for _ in 0..50 {
        world.step();
    }

    let final_vx = world.body(sliding).unwrap().linvel().x;
    assert!(
        final_vx.abs() < 0.5,
        "friction should dissipate the slide, still moving at {final_vx}"
    );
    assert!(final_vx > -0.5, "friction must not reverse the motion");
}
