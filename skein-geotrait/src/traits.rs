use skein_base::cgmath64::*;

/// position and first derivative at a parameter value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WithTangent<V> {
    /// the position on the curve
    pub position: V,
    /// the first derivative with respect to the global parameter
    pub tangent: V,
}

/// position and first two derivatives at a parameter value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WithCurvature<V> {
    /// the position on the curve
    pub position: V,
    /// the first derivative with respect to the global parameter
    pub tangent: V,
    /// the second derivative with respect to the global parameter
    pub curvature: V,
}

/// position and first three derivatives at a parameter value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WithWiggle<V> {
    /// the position on the curve
    pub position: V,
    /// the first derivative with respect to the global parameter
    pub tangent: V,
    /// the second derivative with respect to the global parameter
    pub curvature: V,
    /// the third derivative with respect to the global parameter
    pub wiggle: V,
}

/// Parametric piecewise-polynomial curves.
///
/// A spline is an immutable value constructed from control points. Every
/// query is pure: any number of threads may share one spline. The global
/// parameter runs over `[0, max_t()]`; out-of-range values are clamped by
/// non-looping implementations and wrapped by looping ones.
pub trait Spline {
    /// The vector space the curve interpolates in.
    type Vector: InnerSpace<Scalar = f64>;

    /// Returns the position at global parameter `t`.
    fn position(&self, t: f64) -> Self::Vector;
    /// Returns the position and first derivative at `t`.
    fn tangent(&self, t: f64) -> WithTangent<Self::Vector>;
    /// Returns the position and first two derivatives at `t`.
    fn curvature(&self, t: f64) -> WithCurvature<Self::Vector>;
    /// Returns the position and first three derivatives at `t`.
    fn wiggle(&self, t: f64) -> WithWiggle<Self::Vector>;

    /// Returns the knot value of the control point with the given index.
    ///
    /// Families that pad their control points with phantom neighbors report
    /// negative knot values for the padding before the curve start, and
    /// values past `max_t` for the padding after the curve end.
    fn knot(&self, index: i32) -> f64;
    /// The parameter value at which the curve ends (or loops back).
    fn max_t(&self) -> f64;
    /// The number of polynomial segments.
    fn segment_count(&self) -> usize;
    /// Returns the index of the segment whose half-open parameter range
    /// contains `t`. Values outside `[0, max_t]` report the first or last
    /// segment.
    fn segment_for_t(&self, t: f64) -> usize;
    /// The parameter value at which segment `index` begins; accepts
    /// `segment_count()` and then reports `max_t`.
    fn segment_t(&self, index: usize) -> f64;
    /// Arc length of the slice `[a, b]` of segment `index`, where `a` and
    /// `b` are fractions of the segment in `[0, 1]`.
    fn segment_arc_length(&self, index: usize, a: f64, b: f64) -> f64;
    /// Reports the topology.
    fn is_looping(&self) -> bool;

    /// Arc length of the curve between parameters `a` and `b` (swapped when
    /// `a > b`, clamped to the parameter range).
    fn arc_length(&self, a: f64, b: f64) -> f64
    where Self: Sized {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        let a = a.clamp(0.0, self.max_t());
        let b = b.clamp(0.0, self.max_t());
        crate::arclength::arc_length(self, a, b)
    }

    /// Arc length of the whole curve.
    fn total_length(&self) -> f64
    where Self: Sized {
        crate::arclength::total_length(self)
    }
}

/// Splines whose last segment connects the final control point back to the
/// first.
pub trait LoopingSpline: Spline {
    /// Brings `t` into `[0, max_t)` by modular arithmetic.
    fn wrap_t(&self, t: f64) -> f64 {
        let max_t = self.max_t();
        let wrapped = t % max_t;
        if wrapped < 0.0 {
            wrapped + max_t
        } else {
            wrapped
        }
    }

    /// Arc length walking forward from `a` to `b`, going around the loop
    /// when `b` falls behind `a` after wrapping.
    fn cyclic_arc_length(&self, a: f64, b: f64) -> f64
    where Self: Sized {
        crate::arclength::cyclic_arc_length(self, a, b)
    }
}
