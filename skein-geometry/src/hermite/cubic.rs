//! Cubic Hermite splines: each segment interpolates two endpoints with
//! prescribed first derivatives. Tangents are either caller-supplied or
//! derived from neighbors Catmull-Rom style.

use super::catmull_rom_derivative;
use crate::errors::Error;
use crate::knots::segment_index;
use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
struct HermitePoint<V> {
    position: V,
    tangent: V,
}

// Evaluator shared by the open and looping types. Stored tangents are in
// global-parameter units; the basis mixes them scaled by the segment span,
// and every derivative is divided back by the span per derivative order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct CubicHermiteCore<V> {
    points: Vec<HermitePoint<V>>,
    knots: Vec<f64>,
}

impl<V: InnerSpace<Scalar = f64>> CubicHermiteCore<V> {
    fn max_t(&self) -> f64 { self.knots[self.knots.len() - 1] }

    fn segment_count(&self) -> usize { self.points.len() - 1 }

    fn segment_for_t(&self, t: f64) -> usize {
        segment_index(&self.knots, t).min(self.segment_count() - 1)
    }

    fn segment_t(&self, index: usize) -> f64 { self.knots[index] }

    fn locate(&self, t: f64) -> (usize, f64, f64) {
        let index = self.segment_for_t(t);
        let span = self.knots[index + 1] - self.knots[index];
        (index, span, (t - self.knots[index]) / span)
    }

    fn position(&self, t: f64) -> V {
        let (index, span, u) = self.locate(t);
        self.compute_position(index, span, u)
    }

    fn tangent(&self, t: f64) -> WithTangent<V> {
        let (index, span, u) = self.locate(t);
        WithTangent {
            position: self.compute_position(index, span, u),
            tangent: self.compute_tangent(index, span, u),
        }
    }

    fn curvature(&self, t: f64) -> WithCurvature<V> {
        let (index, span, u) = self.locate(t);
        WithCurvature {
            position: self.compute_position(index, span, u),
            tangent: self.compute_tangent(index, span, u),
            curvature: self.compute_curvature(index, span, u),
        }
    }

    fn wiggle(&self, t: f64) -> WithWiggle<V> {
        let (index, span, u) = self.locate(t);
        WithWiggle {
            position: self.compute_position(index, span, u),
            tangent: self.compute_tangent(index, span, u),
            curvature: self.compute_curvature(index, span, u),
            wiggle: self.compute_wiggle(index, span),
        }
    }

    fn segment_length(&self, index: usize, a: f64, b: f64) -> f64 {
        let span = self.knots[index + 1] - self.knots[index];
        let speed = |u: f64| self.compute_tangent(index, span, u).magnitude();
        span * skein_base::quadrature::gauss_legendre(speed, a, b)
    }

    fn compute_position(&self, index: usize, span: f64, u: f64) -> V {
        let one_minus = 1.0 - u;

        let basis00 = (1.0 + 2.0 * u) * one_minus * one_minus;
        let basis10 = u * one_minus * one_minus;
        let basis11 = -u * u * one_minus;
        let basis01 = u * u * (3.0 - 2.0 * u);

        self.points[index].position * basis00
            + self.points[index].tangent * (basis10 * span)
            + self.points[index + 1].tangent * (basis11 * span)
            + self.points[index + 1].position * basis01
    }

    fn compute_tangent(&self, index: usize, span: f64, u: f64) -> V {
        let one_minus = 1.0 - u;

        let d_basis00 = 6.0 * u * (u - 1.0);
        let d_basis10 = (1.0 - 3.0 * u) * one_minus;
        let d_basis11 = u * (3.0 * u - 2.0);
        let d_basis01 = -d_basis00;

        (self.points[index].position * d_basis00
            + self.points[index].tangent * (d_basis10 * span)
            + self.points[index + 1].tangent * (d_basis11 * span)
            + self.points[index + 1].position * d_basis01)
            / span
    }

    fn compute_curvature(&self, index: usize, span: f64, u: f64) -> V {
        let d2_basis00 = 6.0 * (2.0 * u - 1.0);
        let d2_basis10 = 2.0 * (3.0 * u - 2.0);
        let d2_basis11 = 2.0 * (3.0 * u - 1.0);
        let d2_basis01 = -d2_basis00;

        (self.points[index].position * d2_basis00
            + self.points[index].tangent * (d2_basis10 * span)
            + self.points[index + 1].tangent * (d2_basis11 * span)
            + self.points[index + 1].position * d2_basis01)
            / (span * span)
    }

    fn compute_wiggle(&self, index: usize, span: f64) -> V {
        ((self.points[index].position - self.points[index + 1].position) * 12.0
            + (self.points[index].tangent + self.points[index + 1].tangent) * (6.0 * span))
            / (span * span * span)
    }
}

/// Cubic Hermite spline.
///
/// [`CubicHermiteSpline::new`] derives tangents from neighbors with the
/// alpha-aware Catmull-Rom formula; the first and last control points then
/// act only as phantom neighbors, so the curve runs from `points[1]` to
/// `points[N-2]`. [`CubicHermiteSpline::with_tangents`] interpolates every
/// point with caller-supplied tangents.
/// # Examples
/// ```
/// use skein_geometry::*;
/// let points = vec![
///     Vector2::new(-1.0, -1.0),
///     Vector2::new(0.0, 0.0),
///     Vector2::new(1.0, 1.0),
///     Vector2::new(2.0, 2.0),
/// ];
/// let spline = CubicHermiteSpline::new(&points, 0.0);
/// assert_eq!(spline.max_t(), 1.0);
/// assert_near!(spline.position(0.0), points[1]);
/// assert_near!(spline.position(1.0), points[2]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicHermiteSpline<V> {
    core: CubicHermiteCore<V>,
    knots: KnotTable,
}

impl<V: InnerSpace<Scalar = f64>> CubicHermiteSpline<V> {
    /// Catmull-Rom constructor.
    /// # Panics
    /// Panics when fewer than 4 control points are supplied.
    pub fn new(points: &[V], alpha: f64) -> CubicHermiteSpline<V> {
        CubicHermiteSpline::try_new(points, alpha).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Catmull-Rom constructor.
    /// # Failures
    /// Returns [`Error::TooFewPoints`] when fewer than 4 control points are
    /// supplied.
    pub fn try_new(points: &[V], alpha: f64) -> Result<CubicHermiteSpline<V>> {
        if points.len() < 4 {
            return Err(Error::TooFewPoints { required: 4, supplied: points.len() });
        }
        let size = points.len();
        let segments = size - 3;
        let knots = KnotTable::with_inner_padding(points, alpha, 1);

        let hermite_points = (1..=segments + 1)
            .map(|i| HermitePoint {
                position: points[i],
                tangent: catmull_rom_derivative(
                    points[i - 1],
                    points[i],
                    points[i + 1],
                    knots.knot(i as i32 - 1),
                    knots.knot(i as i32),
                    knots.knot(i as i32 + 1),
                ),
            })
            .collect();

        let core = CubicHermiteCore {
            points: hermite_points,
            knots: knots.run(1, segments + 1),
        };
        Ok(CubicHermiteSpline { core, knots })
    }

    /// Explicit-tangent constructor: every control point is interpolated.
    /// # Panics
    /// Panics per the failures of
    /// [`try_with_tangents`](CubicHermiteSpline::try_with_tangents).
    pub fn with_tangents(points: &[V], tangents: &[V], alpha: f64) -> CubicHermiteSpline<V> {
        CubicHermiteSpline::try_with_tangents(points, tangents, alpha)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Explicit-tangent constructor: every control point is interpolated.
    /// # Failures
    /// - Returns [`Error::TooFewPoints`] when fewer than 2 control points
    ///   are supplied.
    /// - Returns [`Error::MismatchedTangents`] when the tangent count
    ///   differs from the point count.
    pub fn try_with_tangents(
        points: &[V],
        tangents: &[V],
        alpha: f64,
    ) -> Result<CubicHermiteSpline<V>> {
        if points.len() < 2 {
            return Err(Error::TooFewPoints { required: 2, supplied: points.len() });
        }
        if points.len() != tangents.len() {
            return Err(Error::MismatchedTangents {
                points: points.len(),
                tangents: tangents.len(),
            });
        }
        let knots = KnotTable::with_inner_padding(points, alpha, 0);
        let core = CubicHermiteCore {
            points: points
                .iter()
                .zip(tangents)
                .map(|(&position, &tangent)| HermitePoint { position, tangent })
                .collect(),
            knots: knots.run(0, points.len()),
        };
        Ok(CubicHermiteSpline { core, knots })
    }
}

impl_open_spline!(CubicHermiteSpline);

/// Cubic Hermite spline that loops back to its first control point.
///
/// Every control point is interpolated; `max_t` equals the point count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopingCubicHermiteSpline<V> {
    core: CubicHermiteCore<V>,
    knots: KnotTable,
}

impl<V: InnerSpace<Scalar = f64>> LoopingCubicHermiteSpline<V> {
    /// Catmull-Rom constructor.
    /// # Panics
    /// Panics when fewer than 4 control points are supplied.
    pub fn new(points: &[V], alpha: f64) -> LoopingCubicHermiteSpline<V> {
        LoopingCubicHermiteSpline::try_new(points, alpha).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Catmull-Rom constructor.
    /// # Failures
    /// Returns [`Error::TooFewPoints`] when fewer than 4 control points are
    /// supplied.
    pub fn try_new(points: &[V], alpha: f64) -> Result<LoopingCubicHermiteSpline<V>> {
        if points.len() < 4 {
            return Err(Error::TooFewPoints { required: 4, supplied: points.len() });
        }
        let size = points.len();
        let knots = KnotTable::looping(points, alpha, 1);

        let hermite_points = (0..=size)
            .map(|i| HermitePoint {
                position: points[i % size],
                tangent: catmull_rom_derivative(
                    points[(i + size - 1) % size],
                    points[i % size],
                    points[(i + 1) % size],
                    knots.knot(i as i32 - 1),
                    knots.knot(i as i32),
                    knots.knot(i as i32 + 1),
                ),
            })
            .collect();

        let core = CubicHermiteCore {
            points: hermite_points,
            knots: knots.run(0, size + 1),
        };
        Ok(LoopingCubicHermiteSpline { core, knots })
    }

    /// Explicit-tangent constructor.
    /// # Panics
    /// Panics per the failures of
    /// [`try_with_tangents`](LoopingCubicHermiteSpline::try_with_tangents).
    pub fn with_tangents(
        points: &[V],
        tangents: &[V],
        alpha: f64,
    ) -> LoopingCubicHermiteSpline<V> {
        LoopingCubicHermiteSpline::try_with_tangents(points, tangents, alpha)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Explicit-tangent constructor.
    /// # Failures
    /// - Returns [`Error::TooFewPoints`] when fewer than 2 control points
    ///   are supplied.
    /// - Returns [`Error::MismatchedTangents`] when the tangent count
    ///   differs from the point count.
    pub fn try_with_tangents(
        points: &[V],
        tangents: &[V],
        alpha: f64,
    ) -> Result<LoopingCubicHermiteSpline<V>> {
        if points.len() < 2 {
            return Err(Error::TooFewPoints { required: 2, supplied: points.len() });
        }
        if points.len() != tangents.len() {
            return Err(Error::MismatchedTangents {
                points: points.len(),
                tangents: tangents.len(),
            });
        }
        let size = points.len();
        let knots = KnotTable::looping(points, alpha, 0);
        let core = CubicHermiteCore {
            points: (0..=size)
                .map(|i| HermitePoint {
                    position: points[i % size],
                    tangent: tangents[i % size],
                })
                .collect(),
            knots: knots.run(0, size + 1),
        };
        Ok(LoopingCubicHermiteSpline { core, knots })
    }
}

impl_looping_spline!(LoopingCubicHermiteSpline);
