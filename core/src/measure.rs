use nalgebra::Vector3;

use crate::error::GeometryError;

/// A position in space, in the same length units as the bond thresholds.
pub type Point = Vector3<f64>;

/// Returns the euclidean distance between two points.
pub fn calculate_distance(a: &Point, b: &Point) -> f64 {
    (a - b).norm()
}

/// Returns the angle at `vertex` spanned by the points `a` and `c`, in radians, or in
/// degrees if `degrees` is set.
///
/// Neither `a` nor `c` may coincide with `vertex`. If one does, the angle is undefined
/// and `NaN` is returned. Use [`checked_angle`] to get an error instead.
pub fn calculate_angle(a: &Point, vertex: &Point, c: &Point, degrees: bool) -> f64 {
    let arm_a = (a - vertex).normalize();
    let arm_c = (c - vertex).normalize();

    // rounding can push the dot product of (anti)parallel unit vectors slightly past 1
    let angle = arm_a.dot(&arm_c).clamp(-1.0, 1.0).acos();

    if degrees {
        angle.to_degrees()
    } else {
        angle
    }
}

/// Like [`calculate_angle`], but fails if either arm of the angle has zero length.
pub fn checked_angle(
    a: &Point,
    vertex: &Point,
    c: &Point,
    degrees: bool,
) -> Result<f64, GeometryError> {
    if (a - vertex).norm() < f64::EPSILON || (c - vertex).norm() < f64::EPSILON {
        return Err(GeometryError::DegenerateAngle);
    }

    Ok(calculate_angle(a, vertex, c, degrees))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn random_point(rng: &mut impl Rng) -> Point {
        Point::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        )
    }

    #[test]
    fn distance() {
        let r1 = Point::new(0.0, 0.0, -1.0);
        let r2 = Point::new(0.0, 1.0, 0.0);

        assert_eq!(calculate_distance(&r1, &r2), 2.0f64.sqrt());
    }

    #[test]
    fn distance_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let p = random_point(&mut rng);
            let q = random_point(&mut rng);

            assert_eq!(calculate_distance(&p, &q), calculate_distance(&q, &p));
            assert_eq!(calculate_distance(&p, &p), 0.0);
        }
    }

    #[test]
    fn right_angle() {
        let r_a = Point::new(1.0, 0.0, 0.0);
        let r_b = Point::new(0.0, 0.0, 0.0);
        let r_c = Point::new(0.0, 0.0, 1.0);

        assert_relative_eq!(
            calculate_angle(&r_a, &r_b, &r_c, true),
            90.0,
            epsilon = 1e-13
        );
        assert_relative_eq!(
            calculate_angle(&r_a, &r_b, &r_c, false),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-13
        );
    }

    #[test]
    fn equilateral_angle() {
        let r_a = Point::new(1.0, 0.0, 0.0);
        let r_b = Point::new(0.0, 1.0, 0.0);
        let r_c = Point::new(0.0, 0.0, 1.0);

        assert_relative_eq!(
            calculate_angle(&r_a, &r_b, &r_c, true),
            60.0,
            epsilon = 1e-8
        );
    }

    #[test]
    fn straight_angle_does_not_overflow_acos() {
        let a = Point::new(0.1, 0.2, 0.3);
        let vertex = Point::new(0.4, 0.5, 0.6);
        let c = vertex + (vertex - a) * 3.0;

        let angle = calculate_angle(&a, &vertex, &c, true);
        assert!(!angle.is_nan());
        assert_relative_eq!(angle, 180.0, epsilon = 1e-5);
    }

    #[test]
    fn angle_is_symmetric_and_bounded() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let a = random_point(&mut rng);
            let vertex = random_point(&mut rng);
            let c = random_point(&mut rng);

            let radians = calculate_angle(&a, &vertex, &c, false);
            let degrees = calculate_angle(&a, &vertex, &c, true);

            assert!((0.0..=std::f64::consts::PI).contains(&radians));
            assert!((0.0..=180.0).contains(&degrees));
            assert_relative_eq!(
                radians,
                calculate_angle(&c, &vertex, &a, false),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn degenerate_angle() {
        let vertex = Point::new(1.0, 1.0, 1.0);
        let other = Point::new(2.0, 1.0, 1.0);

        assert!(calculate_angle(&vertex, &vertex, &other, false).is_nan());
        assert_eq!(
            checked_angle(&vertex, &vertex, &other, false),
            Err(GeometryError::DegenerateAngle)
        );
        assert_eq!(
            checked_angle(&other, &vertex, &vertex, true),
            Err(GeometryError::DegenerateAngle)
        );
    }

    #[test]
    fn checked_angle_matches_unchecked() {
        let r_a = Point::new(1.0, 0.0, 0.0);
        let r_b = Point::new(0.0, 0.0, 0.0);
        let r_c = Point::new(0.0, 1.0, 0.0);

        assert_eq!(
            checked_angle(&r_a, &r_b, &r_c, true),
            Ok(calculate_angle(&r_a, &r_b, &r_c, true))
        );
    }
}
