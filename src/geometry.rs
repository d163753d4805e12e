//! Classification of points against the unit quarter-circle
//!
//! Both estimators compute squared radii with [`radius_sq`] and classify them
//! with [`within_unit_radius`]: the scalar loop per point, the batch
//! estimator element-wise over its coordinate vectors.

/// Squared distance of `(x, y)` from the origin
#[inline]
pub fn radius_sq(x: f64, y: f64) -> f64 {
    x * x + y * y
}

/// Whether a squared radius lies strictly inside the unit circle.
///
/// Points exactly on the boundary (`r2 == 1`) are outside.
#[inline]
pub fn within_unit_radius(r2: f64) -> bool {
    r2 < 1.0
}

/// Whether the point `(x, y)` lies strictly inside the unit quarter-circle
///
/// # Example
///
/// ```
/// use mcpi::geometry::in_quarter_circle;
///
/// assert!(in_quarter_circle(0.5, 0.5));
/// assert!(!in_quarter_circle(0.9, 0.9));
/// ```
#[inline]
pub fn in_quarter_circle(x: f64, y: f64) -> bool {
    within_unit_radius(radius_sq(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TOL: f64 = 1E-12;

    #[test]
    fn radius_sq_of_origin_is_zero() {
        assert::close(radius_sq(0.0, 0.0), 0.0, TOL);
    }

    #[test]
    fn radius_sq_values() {
        assert::close(radius_sq(0.1, 0.1), 0.02, TOL);
        assert::close(radius_sq(0.9, 0.9), 1.62, TOL);
        assert::close(radius_sq(0.5, 0.5), 0.5, TOL);
        assert::close(radius_sq(0.99, 0.01), 0.9802, TOL);
    }

    #[test]
    fn unit_radius_is_outside() {
        assert!(!within_unit_radius(1.0));
        assert!(within_unit_radius(1.0 - f64::EPSILON));
        assert!(!within_unit_radius(1.0 + f64::EPSILON));
    }

    #[test]
    fn diagonal_boundary_point_is_outside() {
        assert!(!in_quarter_circle(FRAC_1_SQRT_2, FRAC_1_SQRT_2));
    }

    #[test]
    fn axis_boundary_points_are_outside() {
        assert!(!in_quarter_circle(1.0, 0.0));
        assert!(!in_quarter_circle(0.0, 1.0));
    }

    #[test]
    fn nan_is_outside() {
        assert!(!in_quarter_circle(f64::NAN, 0.0));
    }
}
