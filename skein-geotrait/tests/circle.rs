//! A constant-speed circular-arc curve implementing the spline traits
//! directly. Closed-form positions and lengths make it a convenient fixture
//! for the generic algorithms.

use skein_base::cgmath64::*;
use skein_base::quadrature::gauss_legendre;
use skein_geotrait::*;

#[derive(Clone, Debug)]
pub struct CircleArc {
    pub radius: f64,
    pub segments: usize,
    /// radians swept per parameter unit
    pub sweep: f64,
    pub looping: bool,
}

#[allow(dead_code)]
impl CircleArc {
    pub fn open(radius: f64, segments: usize, sweep: f64) -> CircleArc {
        CircleArc { radius, segments, sweep, looping: false }
    }

    /// a full circle: `segments` parameter units per revolution
    pub fn full_loop(radius: f64, segments: usize) -> CircleArc {
        CircleArc {
            radius,
            segments,
            sweep: 2.0 * std::f64::consts::PI / segments as f64,
            looping: true,
        }
    }

    /// speed is constant, so lengths have closed forms
    pub fn speed(&self) -> f64 { self.radius * self.sweep }

    fn normalize(&self, t: f64) -> f64 {
        if self.looping {
            self.wrap_t(t)
        } else {
            t.clamp(0.0, self.max_t())
        }
    }
}

impl Spline for CircleArc {
    type Vector = Vector2;

    fn position(&self, t: f64) -> Vector2 {
        let angle = self.normalize(t) * self.sweep;
        Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    fn tangent(&self, t: f64) -> WithTangent<Vector2> {
        let angle = self.normalize(t) * self.sweep;
        WithTangent {
            position: Vector2::new(angle.cos(), angle.sin()) * self.radius,
            tangent: Vector2::new(-angle.sin(), angle.cos()) * (self.radius * self.sweep),
        }
    }

    fn curvature(&self, t: f64) -> WithCurvature<Vector2> {
        let WithTangent { position, tangent } = self.tangent(t);
        WithCurvature {
            position,
            tangent,
            curvature: position * -(self.sweep * self.sweep),
        }
    }

    fn wiggle(&self, t: f64) -> WithWiggle<Vector2> {
        let WithCurvature { position, tangent, curvature } = self.curvature(t);
        WithWiggle {
            position,
            tangent,
            curvature,
            wiggle: tangent * -(self.sweep * self.sweep),
        }
    }

    fn knot(&self, index: i32) -> f64 { index as f64 }

    fn max_t(&self) -> f64 { self.segments as f64 }

    fn segment_count(&self) -> usize { self.segments }

    fn segment_for_t(&self, t: f64) -> usize {
        if t <= 0.0 {
            0
        } else {
            (t as usize).min(self.segments - 1)
        }
    }

    fn segment_t(&self, index: usize) -> f64 { index as f64 }

    fn segment_arc_length(&self, index: usize, a: f64, b: f64) -> f64 {
        let begin = index as f64;
        gauss_legendre(|t| self.tangent(t).tangent.magnitude(), begin + a, begin + b)
    }

    fn is_looping(&self) -> bool { self.looping }
}

impl LoopingSpline for CircleArc {}
