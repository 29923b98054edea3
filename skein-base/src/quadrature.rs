//! Numerical integration by a fixed-order Gauss-Legendre rule.

use cgmath::Zero;
use std::ops::{Add, Mul};

// Nodes and weights of the 13-point Gauss-Legendre rule on [-1, 1].
// Precomputed; deriving them at compile time would mean finding every root
// of the degree-13 Legendre polynomial.
const NODES: [f64; 13] = [
    0.0000000000000000,
    -0.2304583159551348,
    0.2304583159551348,
    -0.4484927510364469,
    0.4484927510364469,
    -0.6423493394403402,
    0.6423493394403402,
    -0.8015780907333099,
    0.8015780907333099,
    -0.9175983992229779,
    0.9175983992229779,
    -0.9841830547185881,
    0.9841830547185881,
];

const WEIGHTS: [f64; 13] = [
    0.2325515532308739,
    0.2262831802628972,
    0.2262831802628972,
    0.2078160475368885,
    0.2078160475368885,
    0.1781459807619457,
    0.1781459807619457,
    0.1388735102197872,
    0.1388735102197872,
    0.0921214998377285,
    0.0921214998377285,
    0.0404840047653159,
    0.0404840047653159,
];

/// Integrates `f` from `a` to `b` with the 13-point Gauss-Legendre rule.
///
/// The rule is exact for polynomial integrands up to degree 25, which covers
/// every polynomial the spline crates produce. The integrand may be scalar-
/// or vector-valued.
/// # Examples
/// ```
/// use skein_base::{assert_near, quadrature::gauss_legendre};
/// // x^2 (x - 1) from -3 to 3
/// let result = gauss_legendre(|x: f64| x * x * (x - 1.0), -3.0, 3.0);
/// assert_near!(result, -18.0);
/// ```
pub fn gauss_legendre<T>(f: impl Fn(f64) -> T, a: f64, b: f64) -> T
where T: Zero + Add<Output = T> + Mul<f64, Output = T> {
    let half_diff = (b - a) / 2.0;
    let half_sum = (a + b) / 2.0;
    let sum = NODES
        .iter()
        .zip(&WEIGHTS)
        .fold(T::zero(), |sum, (&x, &w)| sum + f(half_diff * x + half_sum) * w);
    sum * half_diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cgmath64::*;
    use crate::*;

    #[test]
    fn cubic_polynomial() {
        let result = gauss_legendre(|x: f64| x * x * (x - 1.0), -3.0, 3.0);
        assert!((result + 18.0).abs() < 1.0e-12);
    }

    #[test]
    fn reversed_interval_negates() {
        let forward = gauss_legendre(|x: f64| x.exp(), 0.0, 1.0);
        let backward = gauss_legendre(|x: f64| x.exp(), 1.0, 0.0);
        assert_near!(forward, -backward);
        assert_near!(forward, 1.0f64.exp() - 1.0);
    }

    #[test]
    fn vector_valued_integrand() {
        // integral of (2t, 3t^2) from 0 to 2 is (4, 8)
        let result = gauss_legendre(|t: f64| Vector2::new(2.0 * t, 3.0 * t * t), 0.0, 2.0);
        assert_near!(result, Vector2::new(4.0, 8.0));
    }

    #[test]
    fn circle_arc_length() {
        // speed of the unit circle is 1, so the arc from 0 to pi has length pi
        let speed = |t: f64| Vector2::new(-t.sin(), t.cos()).magnitude();
        let result = gauss_legendre(speed, 0.0, std::f64::consts::PI);
        assert!((result - std::f64::consts::PI).abs() < 1.0e-10);
    }
}
