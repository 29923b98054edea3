//! Maps a query point back to the parameter of the nearest position on a
//! curve: a k-d tree over uniformly sampled positions supplies a coarse
//! answer, and Brent's method on the distance derivative refines it.

use crate::traits::*;
use kiddo::{KdTree, SquaredEuclidean};
use skein_base::brent::{brent, DEFAULT_TOLERANCE};
use skein_base::cgmath64::*;
use std::fmt;

/// Distance-derivative magnitudes below this are treated as zero slope, so
/// the sampled parameter is already the answer.
pub const SLOPE_TOLERANCE: f64 = 0.01;

const DEFAULT_SAMPLES_PER_T: usize = 10;

/// Relative tolerance for recognizing a sample as sitting on an endpoint.
const ENDPOINT_TOLERANCE: f64 = 1.0e-4;

/// Curve positions that can be filed into the fixed-dimension sample tree.
pub trait SampleCoords: Copy {
    /// the position as 3-D coordinates; 2-D curves pad with zero
    fn sample_coords(self) -> [f64; 3];
}

impl SampleCoords for Vector2 {
    #[inline(always)]
    fn sample_coords(self) -> [f64; 3] { [self.x, self.y, 0.0] }
}

impl SampleCoords for Vector3 {
    #[inline(always)]
    fn sample_coords(self) -> [f64; 3] { self.into() }
}

/// Nearest-point-on-curve queries against a borrowed spline.
///
/// Construction samples the spline at a uniform parameter spacing of
/// `1 / samples_per_t` and indexes the positions in a k-d tree. Queries look
/// up the nearest sample and refine it with Brent's method on the
/// derivative of the distance. Correctness rests on the samples being
/// closer together than the smallest lobe of the curve; raise
/// `samples_per_t` for tightly curled splines.
/// # Examples
/// ```ignore
/// let spline = CubicHermiteSpline::catmull_rom(&points, 0.5);
/// let inverter = SplineInverter::new(&spline);
/// let t = inverter.closest_t(Vector2::new(0.4, 0.0));
/// ```
pub struct SplineInverter<'a, S: Spline> {
    spline: &'a S,
    sample_step: f64,
    sample_ts: Vec<f64>,
    tree: KdTree<f64, 3>,
}

impl<'a, S> SplineInverter<'a, S>
where
    S: Spline,
    S::Vector: SampleCoords,
{
    /// Builds an inverter with the default sampling density of 10 samples
    /// per unit of parameter.
    pub fn new(spline: &'a S) -> Self { Self::with_samples_per_t(spline, DEFAULT_SAMPLES_PER_T) }

    /// Builds an inverter with the given sampling density.
    pub fn with_samples_per_t(spline: &'a S, samples_per_t: usize) -> Self {
        assert!(samples_per_t > 0, "sampling density must be positive");
        let sample_step = 1.0 / samples_per_t as f64;
        let max_t = spline.max_t();

        let mut sample_ts = Vec::new();
        let mut tree = KdTree::new();

        let mut t = 0.0;
        while t < max_t {
            tree.add(&spline.position(t).sample_coords(), sample_ts.len() as u64);
            sample_ts.push(t);
            t += sample_step;
        }

        // an open curve needs its far endpoint represented exactly, or
        // queries past the end would refine against a phantom bracket
        let last = *sample_ts.last().unwrap();
        if !spline.is_looping() && (last / max_t - 1.0).abs() > ENDPOINT_TOLERANCE {
            tree.add(&spline.position(max_t).sample_coords(), sample_ts.len() as u64);
            sample_ts.push(max_t);
        }

        SplineInverter { spline, sample_step, sample_ts, tree }
    }

    /// The spline this inverter was built against.
    pub fn spline(&self) -> &'a S { self.spline }

    /// Returns the parameter of the curve position nearest to `query`.
    pub fn closest_t(&self, query: S::Vector) -> f64 {
        let nearest = self.tree.nearest_one::<SquaredEuclidean>(&query.sample_coords());
        let sample_t = self.sample_ts[nearest.item as usize];

        let sample_slope = self.distance_slope(query, sample_t);

        // a flat slope means the sample already sits at the foot point
        if sample_slope.abs() < SLOPE_TOLERANCE {
            return sample_t;
        }

        // an open curve can have its true minimum pinned at an end: the
        // slope then points off the curve and there is nothing to bracket
        if !self.spline.is_looping() {
            if sample_t.abs() < ENDPOINT_TOLERANCE && sample_slope > 0.0 {
                return sample_t;
            }
            let max_t = self.spline.max_t();
            if (sample_t / max_t - 1.0).abs() < ENDPOINT_TOLERANCE && sample_slope < 0.0 {
                return sample_t;
            }
        }

        // the nearest sample's neighbor on the downhill side must have the
        // opposite slope sign, or that neighbor would have been nearer
        let a = sample_t;
        let b = sample_t - self.sample_step * sample_slope.signum();
        let b_slope = self.distance_slope(query, b);

        let root = brent(
            |t| self.distance_slope(query, t),
            a,
            sample_slope,
            b,
            b_slope,
            DEFAULT_TOLERANCE,
        );

        // a bracket that crossed the loop seam can land just outside the
        // parameter range
        if self.spline.is_looping() {
            let max_t = self.spline.max_t();
            let wrapped = root % max_t;
            if wrapped < 0.0 {
                wrapped + max_t
            } else {
                wrapped
            }
        } else {
            root
        }
    }

    // the derivative of the distance from `query` to the curve at `t`:
    // the projection of the velocity onto the unit displacement
    fn distance_slope(&self, query: S::Vector, t: f64) -> f64 {
        let WithTangent { position, tangent } = self.spline.tangent(t);
        (position - query).normalize_or_zero().dot(tangent)
    }
}

impl<S: Spline> fmt::Debug for SplineInverter<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplineInverter")
            .field("sample_step", &self.sample_step)
            .field("samples", &self.sample_ts.len())
            .finish()
    }
}
