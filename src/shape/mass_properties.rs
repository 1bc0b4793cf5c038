use crate::math::{Point, Real, Vector};

/// The mass, angular inertia, and their inverses for a rigid body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MassProperties {
    /// The mass.
    pub mass: Real,
    /// The inverse mass. Zero for static bodies.
    pub inv_mass: Real,
    /// The angular inertia, taken about the shape's center of mass.
    pub inertia: Real,
    /// The inverse angular inertia. Zero for static bodies.
    pub inv_inertia: Real,
}

impl MassProperties {
    /// The mass properties of a static (infinite-mass) body.
    pub fn zero() -> Self {
        MassProperties {
            mass: 0.0,
            inv_mass: 0.0,
            inertia: 0.0,
            inv_inertia: 0.0,
        }
    }

    /// Computes the mass properties of a convex polygon with the given mass.
    ///
    /// The angular inertia is taken about the polygon's center of mass, using
    /// the triangle decomposition adapted from Box2D. Degenerate (zero-area)
    /// polygons yield zero mass properties.
    pub fn from_convex_polygon(mass: Real, vertices: &[Point]) -> Self {
        let (area, com) = convex_polygon_area_and_center_of_mass(vertices);

        if area <= 0.0 || mass <= 0.0 {
            return Self::zero();
        }

        let mut unit_inertia = 0.0;
        let num = vertices.len();

        for i in 0..num {
            let e1 = vertices[i] - com;
            let e2 = vertices[(i + 1) % num] - com;

            let tri_area = e1.perp(&e2) / 2.0;
            let int_x2 = e1.x * e1.x + e2.x * e1.x + e2.x * e2.x;
            let int_y2 = e1.y * e1.y + e2.y * e1.y + e2.y * e2.y;

            unit_inertia += tri_area * (int_x2 + int_y2) / 6.0;
        }

        let inertia = mass * unit_inertia / area;
        let inv_inertia = if inertia > 0.0 { 1.0 / inertia } else { 0.0 };

        MassProperties {
            mass,
            inv_mass: 1.0 / mass,
            inertia,
            inv_inertia,
        }
    }
}

/// The signed area and center of mass of a counter-clockwise convex polygon.
fn convex_polygon_area_and_center_of_mass(vertices: &[Point]) -> (Real, Point) {
    let geometric_center = vertices
        .iter()
        .fold(Vector::zeros(), |acc, pt| acc + pt.coords)
        / vertices.len() as Real;

    let mut weighted_centers = Vector::zeros();
    let mut area_sum = 0.0;
    let num = vertices.len();

    for i in 0..num {
        let e1 = vertices[i].coords - geometric_center;
        let e2 = vertices[(i + 1) % num].coords - geometric_center;

        let tri_area = e1.perp(&e2) / 2.0;
        let tri_center = geometric_center + (e1 + e2) / 3.0;

        weighted_centers += tri_center * tri_area;
        area_sum += tri_area;
    }

    if area_sum == 0.0 {
        (0.0, Point::from(geometric_center))
    } else {
        (area_sum, Point::from(weighted_centers / area_sum))
    }
}

#[cfg(test)]
mod test {
    use super::MassProperties;
    use crate::math::Point;

    #[test]
    fn unit_square_inertia() {
        // For a rectangle: I = m * (w^2 + h^2) / 12.
        let vertices = [
            Point::new(-0.5, -0.5),
            Point::new(0.5, -0.5),
            Point::new(0.5, 0.5),
            Point::new(-0.5, 0.5),
        ];
        let props = MassProperties::from_convex_polygon(12.0, &vertices);

        assert_relative_eq!(props.mass, 12.0);
        assert_relative_eq!(props.inv_mass, 1.0 / 12.0);
        assert_relative_eq!(props.inertia, 2.0, epsilon = 1.0e-4);
        assert_relative_eq!(props.inv_inertia, 0.5, epsilon = 1.0e-4);
    }

    #[test]
    fn inertia_is_translation_invariant() {
        // Inertia is about the center of mass, so a translated copy of the
        // same square must report the same value.
        let centered = [
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
        ];
        let shifted: Vec<_> = centered
            .iter()
            .map(|pt| Point::new(pt.x + 7.0, pt.y - 3.0))
            .collect();

        let props1 = MassProperties::from_convex_polygon(2.0, &centered);
        let props2 = MassProperties::from_convex_polygon(2.0, &shifted);
        assert_relative_eq!(props1.inertia, props2.inertia, epsilon = 1.0e-3);
    }

    #[test]
    fn degenerate_polygon_has_zero_mass_properties() {
        let flat = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        assert_eq!(
            MassProperties::from_convex_polygon(1.0, &flat),
            MassProperties::zero()
        );
    }
}
