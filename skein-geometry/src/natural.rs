//! Natural cubic splines: the per-point curvatures come from a tridiagonal
//! system (cyclic for the looping variant), and each segment stores the
//! pre-solved Horner coefficients.

use crate::errors::Error;
use crate::knots::segment_index;
use crate::*;
use serde::{Deserialize, Serialize};
use skein_base::tridiagonal;

/// End condition of a non-looping natural spline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EndCondition {
    /// zero curvature at both ends
    #[default]
    Natural,
    /// matching third derivatives at the second and penultimate knots, as
    /// if those knots were absent
    NotAKnot,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
struct NaturalSegment<V> {
    a: V,
    c: V,
}

// Evaluator shared by the open and looping types. Only `a` (position) and
// `c` (curvature/2 coefficient) are stored per knot; the odd coefficients
// `b` and `d` are cheap to rebuild from neighbors, and evaluation runs on
// the unnormalized local offset `t - knots[i]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct NaturalCore<V> {
    segments: Vec<NaturalSegment<V>>,
    knots: Vec<f64>,
}

impl<V: InnerSpace<Scalar = f64>> NaturalCore<V> {
    fn max_t(&self) -> f64 { self.knots[self.knots.len() - 1] }

    fn segment_count(&self) -> usize { self.segments.len() - 1 }

    fn segment_for_t(&self, t: f64) -> usize {
        segment_index(&self.knots, t).min(self.segment_count() - 1)
    }

    fn segment_t(&self, index: usize) -> f64 { self.knots[index] }

    fn locate(&self, t: f64) -> (usize, f64, f64) {
        let index = self.segment_for_t(t);
        let span = self.knots[index + 1] - self.knots[index];
        (index, span, t - self.knots[index])
    }

    fn compute_b(&self, index: usize, span: f64) -> V {
        (self.segments[index + 1].a - self.segments[index].a) / span
            - (self.segments[index + 1].c + self.segments[index].c * 2.0) * (span / 3.0)
    }

    fn compute_d(&self, index: usize, span: f64) -> V {
        (self.segments[index + 1].c - self.segments[index].c) / (3.0 * span)
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
            wiggle: self.compute_d(index, span) * 6.0,
        }
    }

    fn segment_length(&self, index: usize, a: f64, b: f64) -> f64 {
        let span = self.knots[index + 1] - self.knots[index];
        let speed = |u: f64| self.compute_tangent(index, span, u).magnitude();
        skein_base::quadrature::gauss_legendre(speed, a * span, b * span)
    }

    fn compute_position(&self, index: usize, span: f64, u: f64) -> V {
        let b = self.compute_b(index, span);
        let d = self.compute_d(index, span);
        self.segments[index].a + (b + (self.segments[index].c + d * u) * u) * u
    }

    fn compute_tangent(&self, index: usize, span: f64, u: f64) -> V {
        let b = self.compute_b(index, span);
        let d = self.compute_d(index, span);
        b + (self.segments[index].c * 2.0 + d * (3.0 * u)) * u
    }

    fn compute_curvature(&self, index: usize, span: f64, u: f64) -> V {
        self.segments[index].c * 2.0 + self.compute_d(index, span) * (6.0 * u)
    }
}

// Assembles and solves the tridiagonal curvature system over all points.
// Natural end conditions pin the boundary curvatures to zero; not-a-knot
// eliminates them against the first and last interior curvatures, which
// makes the end rows asymmetric.
fn solve_curvatures<V: InnerSpace<Scalar = f64>>(
    points: &[V],
    knots: &KnotTable,
    end_condition: EndCondition,
) -> Vec<V> {
    let size = points.len();
    let spans: Vec<f64> = (0..size - 1)
        .map(|i| knots.knot(i as i32 + 1) - knots.knot(i as i32))
        .collect();
    let slopes: Vec<V> = (0..size - 1)
        .map(|i| (points[i + 1] - points[i]) / spans[i])
        .collect();

    let mut main: Vec<f64> = (1..size - 1).map(|i| 2.0 * (spans[i - 1] + spans[i])).collect();
    let mut lower: Vec<f64> = spans[1..size - 2].to_vec();
    let mut upper = lower.clone();
    let rhs: Vec<V> = (1..size - 1).map(|i| (slopes[i] - slopes[i - 1]) * 3.0).collect();

    if end_condition == EndCondition::NotAKnot {
        let unknowns = size - 2;
        let (h0, h1) = (spans[0], spans[1]);
        main[0] += h0 * (h0 + h1) / h1;
        upper[0] = h1 - h0 * h0 / h1;

        let (hm, hn) = (spans[size - 3], spans[size - 2]);
        main[unknowns - 1] += hn * (hm + hn) / hm;
        lower[unknowns - 2] = hm - hn * hn / hm;
    }

    let interior = tridiagonal::solve_tridiagonal(&lower, &main, &upper, &rhs);

    let (first, last) = match end_condition {
        EndCondition::Natural => (V::zero(), V::zero()),
        EndCondition::NotAKnot => {
            // third-derivative continuity extrapolates the end curvatures
            let (h0, h1) = (spans[0], spans[1]);
            let first = interior[0] * (1.0 + h0 / h1) - interior[1] * (h0 / h1);
            let (hm, hn) = (spans[size - 3], spans[size - 2]);
            let n = interior.len();
            let last = interior[n - 1] * (1.0 + hn / hm) - interior[n - 2] * (hn / hm);
            (first, last)
        }
    };

    let mut curvatures = Vec::with_capacity(size);
    curvatures.push(first);
    curvatures.extend(interior);
    curvatures.push(last);
    curvatures
}

/// Natural cubic spline: C2 through every interpolated point, with the
/// curvature at each point solved from a tridiagonal system.
///
/// With `include_endpoints` the curve runs through all `N` points over
/// `[0, N-1]`; without it, the outer points act only as shape guides and
/// the curve runs from `points[1]` to `points[N-2]`.
/// # Examples
/// ```
/// use skein_geometry::*;
/// let points = vec![
///     Vector2::new(0.0, 0.0),
///     Vector2::new(1.0, 1.0),
///     Vector2::new(2.0, -1.0),
///     Vector2::new(3.0, 0.0),
/// ];
/// let spline = NaturalSpline::new(&points, true, 0.0, EndCondition::Natural);
/// assert_eq!(spline.max_t(), 3.0);
/// assert_near!(spline.position(0.0), points[0]);
/// assert_near!(spline.position(3.0), points[3]);
/// // natural end condition: curvature vanishes at both ends
/// assert_near!(spline.curvature(0.0).curvature, Vector2::new(0.0, 0.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NaturalSpline<V> {
    core: NaturalCore<V>,
    knots: KnotTable,
}

impl<V: InnerSpace<Scalar = f64>> NaturalSpline<V> {
    /// constructor.
    /// # Panics
    /// Panics per the failures of [`try_new`](NaturalSpline::try_new).
    pub fn new(
        points: &[V],
        include_endpoints: bool,
        alpha: f64,
        end_condition: EndCondition,
    ) -> NaturalSpline<V> {
        NaturalSpline::try_new(points, include_endpoints, alpha, end_condition)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// constructor.
    /// # Failures
    /// Returns [`Error::TooFewPoints`] when fewer points are supplied than
    /// the mode requires: 3 with endpoints included, 4 with endpoints
    /// excluded, and never fewer than 4 for
    /// [`EndCondition::NotAKnot`].
    pub fn try_new(
        points: &[V],
        include_endpoints: bool,
        alpha: f64,
        end_condition: EndCondition,
    ) -> Result<NaturalSpline<V>> {
        let mut required = if include_endpoints { 3 } else { 4 };
        if end_condition == EndCondition::NotAKnot {
            required = required.max(4);
        }
        if points.len() < required {
            return Err(Error::TooFewPoints { required, supplied: points.len() });
        }

        let size = points.len();
        let (first_point, segments) = if include_endpoints {
            (0, size - 1)
        } else {
            (1, size - 3)
        };

        let knots = KnotTable::with_inner_padding(points, alpha, first_point);
        let curvatures = solve_curvatures(points, &knots, end_condition);

        let core = NaturalCore {
            segments: (first_point..=first_point + segments)
                .map(|i| NaturalSegment { a: points[i], c: curvatures[i] })
                .collect(),
            knots: knots.run(first_point as i32, segments + 1),
        };
        Ok(NaturalSpline { core, knots })
    }
}

impl_open_spline!(NaturalSpline);

/// Natural cubic spline closed into a loop: the curvatures come from the
/// cyclic tridiagonal system, giving C2 continuity across the seam.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopingNaturalSpline<V> {
    core: NaturalCore<V>,
    knots: KnotTable,
}

impl<V: InnerSpace<Scalar = f64>> LoopingNaturalSpline<V> {
    /// constructor.
    /// # Panics
    /// Panics when fewer than 3 control points are supplied.
    pub fn new(points: &[V], alpha: f64) -> LoopingNaturalSpline<V> {
        LoopingNaturalSpline::try_new(points, alpha).unwrap_or_else(|e| panic!("{}", e))
    }

    /// constructor.
    /// # Failures
    /// Returns [`Error::TooFewPoints`] when fewer than 3 control points are
    /// supplied.
    pub fn try_new(points: &[V], alpha: f64) -> Result<LoopingNaturalSpline<V>> {
        if points.len() < 3 {
            return Err(Error::TooFewPoints { required: 3, supplied: points.len() });
        }
        let size = points.len();
        let knots = KnotTable::looping(points, alpha, 1);

        let spans: Vec<f64> = (0..size)
            .map(|i| knots.knot(i as i32 + 1) - knots.knot(i as i32))
            .collect();
        let slopes: Vec<V> = (0..size)
            .map(|i| (points[(i + 1) % size] - points[i]) / spans[i])
            .collect();

        let main: Vec<f64> = (0..size)
            .map(|i| 2.0 * (spans[(i + size - 1) % size] + spans[i]))
            .collect();
        let rhs: Vec<V> = (0..size)
            .map(|i| (slopes[i] - slopes[(i + size - 1) % size]) * 3.0)
            .collect();

        let curvatures = tridiagonal::solve_cyclic_symmetric_tridiagonal(&main, &spans, &rhs);

        let core = NaturalCore {
            segments: (0..=size)
                .map(|i| NaturalSegment {
                    a: points[i % size],
                    c: curvatures[i % size],
                })
                .collect(),
            knots: knots.run(0, size + 1),
        };
        Ok(LoopingNaturalSpline { core, knots })
    }
}

impl_looping_spline!(LoopingNaturalSpline);
