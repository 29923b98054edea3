//! Quintic Hermite splines: each segment interpolates two endpoints with
//! prescribed first and second derivatives, giving C2 continuity with
//! control over curvature at every knot. The Catmull-Rom constructors
//! derive tangents from the points and curvatures by iterating the same
//! formula on the tangents.

use super::catmull_rom_derivative;
use crate::errors::Error;
use crate::knots::segment_index;
use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
struct QuinticPoint<V> {
    position: V,
    tangent: V,
    curvature: V,
}

// Evaluator shared by the open and looping types. The six quintic basis
// functions extend the cubic Hermite basis with curvature channels; see
// Finn, "Quintic Hermite interpolation" (CCLI day09 notes) for the
// derivation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct QuinticHermiteCore<V> {
    points: Vec<QuinticPoint<V>>,
    knots: Vec<f64>,
}

impl<V: InnerSpace<Scalar = f64>> QuinticHermiteCore<V> {
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
            wiggle: self.compute_wiggle(index, span, u),
        }
    }

    fn segment_length(&self, index: usize, a: f64, b: f64) -> f64 {
        let span = self.knots[index + 1] - self.knots[index];
        let speed = |u: f64| self.compute_tangent(index, span, u).magnitude();
        span * skein_base::quadrature::gauss_legendre(speed, a, b)
    }

    // basis * (position, tangent * span, curvature * span^2) on each side
    fn blend(&self, index: usize, span: f64, weights: [f64; 6]) -> V {
        let [b00, b10, b20, b21, b11, b01] = weights;
        let span2 = span * span;
        self.points[index].position * b00
            + self.points[index].tangent * (b10 * span)
            + self.points[index].curvature * (b20 * span2)
            + self.points[index + 1].curvature * (b21 * span2)
            + self.points[index + 1].tangent * (b11 * span)
            + self.points[index + 1].position * b01
    }

    fn compute_position(&self, index: usize, span: f64, u: f64) -> V {
        let one_minus = 1.0 - u;
        self.blend(index, span, [
            one_minus * one_minus * one_minus * (u * (6.0 * u + 3.0) + 1.0),
            u * one_minus * one_minus * one_minus * (3.0 * u + 1.0),
            0.5 * one_minus * one_minus * one_minus * u * u,
            0.5 * one_minus * one_minus * u * u * u,
            u * u * u * (1.0 - u) * (u * 3.0 - 4.0),
            u * u * u * (u * (6.0 * u - 15.0) + 10.0),
        ])
    }

    fn compute_tangent(&self, index: usize, span: f64, u: f64) -> V {
        let one_minus = 1.0 - u;
        self.blend(index, span, [
            -30.0 * one_minus * one_minus * u * u,
            one_minus * one_minus * (1.0 - 3.0 * u) * (5.0 * u + 1.0),
            -0.5 * one_minus * one_minus * u * (5.0 * u - 2.0),
            0.5 * one_minus * u * u * (3.0 - 5.0 * u),
            u * u * (2.0 - 3.0 * u) * (5.0 * u - 6.0),
            30.0 * one_minus * one_minus * u * u,
        ]) / span
    }

    fn compute_curvature(&self, index: usize, span: f64, u: f64) -> V {
        let d2_basis00 = u * ((180.0 - 120.0 * u) * u - 60.0);
        self.blend(index, span, [
            d2_basis00,
            u * ((96.0 - 60.0 * u) * u - 36.0),
            u * ((18.0 - 10.0 * u) * u - 9.0) + 1.0,
            u * (u * (10.0 * u - 12.0) + 3.0),
            u * ((84.0 - 60.0 * u) * u - 24.0),
            -d2_basis00,
        ]) / (span * span)
    }

    fn compute_wiggle(&self, index: usize, span: f64, u: f64) -> V {
        let d3_basis00 = (360.0 - 360.0 * u) * u - 60.0;
        self.blend(index, span, [
            d3_basis00,
            (192.0 - 180.0 * u) * u - 36.0,
            (36.0 - 30.0 * u) * u - 9.0,
            (30.0 * u - 24.0) * u + 3.0,
            (168.0 - 180.0 * u) * u - 24.0,
            -d3_basis00,
        ]) / (span * span * span)
    }
}

/// Quintic Hermite spline.
///
/// [`QuinticHermiteSpline::new`] derives tangents from the control points
/// and curvatures from those tangents, both with the alpha-aware
/// Catmull-Rom formula. Deriving a curvature consumes two phantom
/// neighbors per side, so the interpolated range runs from `points[2]` to
/// `points[N-3]`.
/// [`QuinticHermiteSpline::with_tangents_and_curvatures`] interpolates
/// every point with caller-supplied derivatives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuinticHermiteSpline<V> {
    core: QuinticHermiteCore<V>,
    knots: KnotTable,
}

impl<V: InnerSpace<Scalar = f64>> QuinticHermiteSpline<V> {
    /// Catmull-Rom constructor.
    /// # Panics
    /// Panics when fewer than 6 control points are supplied.
    pub fn new(points: &[V], alpha: f64) -> QuinticHermiteSpline<V> {
        QuinticHermiteSpline::try_new(points, alpha).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Catmull-Rom constructor.
    /// # Failures
    /// Returns [`Error::TooFewPoints`] when fewer than 6 control points are
    /// supplied.
    pub fn try_new(points: &[V], alpha: f64) -> Result<QuinticHermiteSpline<V>> {
        if points.len() < 6 {
            return Err(Error::TooFewPoints { required: 6, supplied: points.len() });
        }
        let size = points.len();
        let segments = size - 5;
        let knots = KnotTable::with_inner_padding(points, alpha, 2);

        // tangents exist wherever a point has both neighbors
        let mut tangents = vec![V::zero(); size];
        for (i, tangent) in tangents.iter_mut().enumerate().take(size - 1).skip(1) {
            *tangent = catmull_rom_derivative(
                points[i - 1],
                points[i],
                points[i + 1],
                knots.knot(i as i32 - 1),
                knots.knot(i as i32),
                knots.knot(i as i32 + 1),
            );
        }

        // curvatures iterate the formula on the tangents
        let quintic_points = (2..=2 + segments)
            .map(|i| QuinticPoint {
                position: points[i],
                tangent: tangents[i],
                curvature: catmull_rom_derivative(
                    tangents[i - 1],
                    tangents[i],
                    tangents[i + 1],
                    knots.knot(i as i32 - 1),
                    knots.knot(i as i32),
                    knots.knot(i as i32 + 1),
                ),
            })
            .collect();

        let core = QuinticHermiteCore {
            points: quintic_points,
            knots: knots.run(2, segments + 1),
        };
        Ok(QuinticHermiteSpline { core, knots })
    }

    /// Explicit constructor: every control point is interpolated with the
    /// given first and second derivatives.
    /// # Panics
    /// Panics per the failures of
    /// [`try_with_tangents_and_curvatures`](QuinticHermiteSpline::try_with_tangents_and_curvatures).
    pub fn with_tangents_and_curvatures(
        points: &[V],
        tangents: &[V],
        curvatures: &[V],
        alpha: f64,
    ) -> QuinticHermiteSpline<V> {
        QuinticHermiteSpline::try_with_tangents_and_curvatures(points, tangents, curvatures, alpha)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Explicit constructor: every control point is interpolated with the
    /// given first and second derivatives.
    /// # Failures
    /// - Returns [`Error::TooFewPoints`] when fewer than 2 control points
    ///   are supplied.
    /// - Returns [`Error::MismatchedTangents`] or
    ///   [`Error::MismatchedCurvatures`] when the derivative counts differ
    ///   from the point count.
    pub fn try_with_tangents_and_curvatures(
        points: &[V],
        tangents: &[V],
        curvatures: &[V],
        alpha: f64,
    ) -> Result<QuinticHermiteSpline<V>> {
        if points.len() < 2 {
            return Err(Error::TooFewPoints { required: 2, supplied: points.len() });
        }
        if points.len() != tangents.len() {
            return Err(Error::MismatchedTangents {
                points: points.len(),
                tangents: tangents.len(),
            });
        }
        if points.len() != curvatures.len() {
            return Err(Error::MismatchedCurvatures {
                points: points.len(),
                curvatures: curvatures.len(),
            });
        }
        let knots = KnotTable::with_inner_padding(points, alpha, 0);
        let core = QuinticHermiteCore {
            points: points
                .iter()
                .zip(tangents)
                .zip(curvatures)
                .map(|((&position, &tangent), &curvature)| QuinticPoint {
                    position,
                    tangent,
                    curvature,
                })
                .collect(),
            knots: knots.run(0, points.len()),
        };
        Ok(QuinticHermiteSpline { core, knots })
    }
}

impl_open_spline!(QuinticHermiteSpline);

/// Quintic Hermite spline that loops back to its first control point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopingQuinticHermiteSpline<V> {
    core: QuinticHermiteCore<V>,
    knots: KnotTable,
}

impl<V: InnerSpace<Scalar = f64>> LoopingQuinticHermiteSpline<V> {
    /// Catmull-Rom constructor.
    /// # Panics
    /// Panics when fewer than 3 control points are supplied.
    pub fn new(points: &[V], alpha: f64) -> LoopingQuinticHermiteSpline<V> {
        LoopingQuinticHermiteSpline::try_new(points, alpha).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Catmull-Rom constructor.
    /// # Failures
    /// Returns [`Error::TooFewPoints`] when fewer than 3 control points are
    /// supplied.
    pub fn try_new(points: &[V], alpha: f64) -> Result<LoopingQuinticHermiteSpline<V>> {
        if points.len() < 3 {
            return Err(Error::TooFewPoints { required: 3, supplied: points.len() });
        }
        let size = points.len();
        let knots = KnotTable::looping(points, alpha, 2);

        let tangents: Vec<V> = (0..=size)
            .map(|i| {
                catmull_rom_derivative(
                    points[(i + size - 1) % size],
                    points[i % size],
                    points[(i + 1) % size],
                    knots.knot(i as i32 - 1),
                    knots.knot(i as i32),
                    knots.knot(i as i32 + 1),
                )
            })
            .collect();

        let quintic_points = (0..=size)
            .map(|i| QuinticPoint {
                position: points[i % size],
                tangent: tangents[i],
                curvature: catmull_rom_derivative(
                    tangents[(i + size - 1) % size],
                    tangents[i],
                    tangents[(i + 1) % size],
                    knots.knot(i as i32 - 1),
                    knots.knot(i as i32),
                    knots.knot(i as i32 + 1),
                ),
            })
            .collect();

        let core = QuinticHermiteCore {
            points: quintic_points,
            knots: knots.run(0, size + 1),
        };
        Ok(LoopingQuinticHermiteSpline { core, knots })
    }

    /// Explicit constructor.
    /// # Panics
    /// Panics per the failures of
    /// [`try_with_tangents_and_curvatures`](LoopingQuinticHermiteSpline::try_with_tangents_and_curvatures).
    pub fn with_tangents_and_curvatures(
        points: &[V],
        tangents: &[V],
        curvatures: &[V],
        alpha: f64,
    ) -> LoopingQuinticHermiteSpline<V> {
        LoopingQuinticHermiteSpline::try_with_tangents_and_curvatures(
            points, tangents, curvatures, alpha,
        )
        .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Explicit constructor.
    /// # Failures
    /// - Returns [`Error::TooFewPoints`] when fewer than 2 control points
    ///   are supplied.
    /// - Returns [`Error::MismatchedTangents`] or
    ///   [`Error::MismatchedCurvatures`] when the derivative counts differ
    ///   from the point count.
    pub fn try_with_tangents_and_curvatures(
        points: &[V],
        tangents: &[V],
        curvatures: &[V],
        alpha: f64,
    ) -> Result<LoopingQuinticHermiteSpline<V>> {
        if points.len() < 2 {
            return Err(Error::TooFewPoints { required: 2, supplied: points.len() });
        }
        if points.len() != tangents.len() {
            return Err(Error::MismatchedTangents {
                points: points.len(),
                tangents: tangents.len(),
            });
        }
        if points.len() != curvatures.len() {
            return Err(Error::MismatchedCurvatures {
                points: points.len(),
                curvatures: curvatures.len(),
            });
        }
        let size = points.len();
        let knots = KnotTable::looping(points, alpha, 0);
        let core = QuinticHermiteCore {
            points: (0..=size)
                .map(|i| QuinticPoint {
                    position: points[i % size],
                    tangent: tangents[i % size],
                    curvature: curvatures[i % size],
                })
                .collect(),
            knots: knots.run(0, size + 1),
        };
        Ok(LoopingQuinticHermiteSpline { core, knots })
    }
}

impl_looping_spline!(LoopingQuinticHermiteSpline);
