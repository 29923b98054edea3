//! Piecewise-linear splines. The simplest family: every segment is the
//! straight chord between two control points, with the same knot machinery
//! as the polynomial families.

use crate::errors::Error;
use crate::knots::segment_index;
use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct LinearCore<V> {
    points: Vec<V>,
    knots: Vec<f64>,
}

impl<V: InnerSpace<Scalar = f64>> LinearCore<V> {
    fn max_t(&self) -> f64 { self.knots[self.knots.len() - 1] }

    fn segment_count(&self) -> usize { self.points.len() - 1 }

    fn segment_for_t(&self, t: f64) -> usize {
        segment_index(&self.knots, t).min(self.segment_count() - 1)
    }

    fn segment_t(&self, index: usize) -> f64 { self.knots[index] }

    fn position(&self, t: f64) -> V {
        let index = self.segment_for_t(t);
        let local = (t - self.knots[index]) / (self.knots[index + 1] - self.knots[index]);
        self.points[index] * (1.0 - local) + self.points[index + 1] * local
    }

    fn segment_tangent(&self, index: usize) -> V {
        (self.points[index + 1] - self.points[index])
            / (self.knots[index + 1] - self.knots[index])
    }

    fn tangent(&self, t: f64) -> WithTangent<V> {
        WithTangent {
            position: self.position(t),
            tangent: self.segment_tangent(self.segment_for_t(t)),
        }
    }

    fn curvature(&self, t: f64) -> WithCurvature<V> {
        let WithTangent { position, tangent } = self.tangent(t);
        WithCurvature { position, tangent, curvature: V::zero() }
    }

    fn wiggle(&self, t: f64) -> WithWiggle<V> {
        let WithTangent { position, tangent } = self.tangent(t);
        WithWiggle { position, tangent, curvature: V::zero(), wiggle: V::zero() }
    }

    // the integrand is constant, so the quadrature collapses to the chord
    fn segment_length(&self, index: usize, a: f64, b: f64) -> f64 {
        (self.points[index + 1] - self.points[index]).magnitude() * (b - a)
    }
}

/// Piecewise-linear spline through every control point.
///
/// `max_t` is the segment count; knots follow the shared `alpha`
/// parameterization, so chordal (`alpha = 1`) linear splines travel at
/// constant speed.
/// # Examples
/// ```
/// use skein_geometry::*;
/// let points = vec![
///     Vector2::new(0.0, 0.0),
///     Vector2::new(1.0, 0.0),
///     Vector2::new(1.0, 1.0),
/// ];
/// let spline = LinearSpline::new(&points, 0.0);
/// assert_eq!(spline.max_t(), 2.0);
/// assert_near!(spline.position(0.5), Vector2::new(0.5, 0.0));
/// assert_near!(spline.total_length(), 2.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearSpline<V> {
    core: LinearCore<V>,
    knots: KnotTable,
}

impl<V: InnerSpace<Scalar = f64>> LinearSpline<V> {
    /// constructor.
    /// # Panics
    /// Panics when fewer than 2 control points are supplied.
    pub fn new(points: &[V], alpha: f64) -> LinearSpline<V> {
        LinearSpline::try_new(points, alpha).unwrap_or_else(|e| panic!("{}", e))
    }

    /// constructor.
    /// # Failures
    /// Returns [`Error::TooFewPoints`] when fewer than 2 control points are
    /// supplied.
    pub fn try_new(points: &[V], alpha: f64) -> Result<LinearSpline<V>> {
        if points.len() < 2 {
            return Err(Error::TooFewPoints { required: 2, supplied: points.len() });
        }
        let knots = KnotTable::with_inner_padding(points, alpha, 0);
        let core = LinearCore {
            points: points.to_vec(),
            knots: knots.run(0, points.len()),
        };
        Ok(LinearSpline { core, knots })
    }
}

impl_open_spline!(LinearSpline);

/// Piecewise-linear spline whose last segment returns to the first control
/// point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopingLinearSpline<V> {
    core: LinearCore<V>,
    knots: KnotTable,
}

impl<V: InnerSpace<Scalar = f64>> LoopingLinearSpline<V> {
    /// constructor.
    /// # Panics
    /// Panics when fewer than 2 control points are supplied.
    pub fn new(points: &[V], alpha: f64) -> LoopingLinearSpline<V> {
        LoopingLinearSpline::try_new(points, alpha).unwrap_or_else(|e| panic!("{}", e))
    }

    /// constructor.
    /// # Failures
    /// Returns [`Error::TooFewPoints`] when fewer than 2 control points are
    /// supplied.
    pub fn try_new(points: &[V], alpha: f64) -> Result<LoopingLinearSpline<V>> {
        if points.len() < 2 {
            return Err(Error::TooFewPoints { required: 2, supplied: points.len() });
        }
        let knots = KnotTable::looping(points, alpha, 0);
        let mut wrapped = points.to_vec();
        wrapped.push(points[0]);
        let core = LinearCore {
            knots: knots.run(0, wrapped.len()),
            points: wrapped,
        };
        Ok(LoopingLinearSpline { core, knots })
    }
}

impl_looping_spline!(LoopingLinearSpline);
