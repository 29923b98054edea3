//! # Overview
//! `skein_geometry` constructs parametric piecewise-polynomial curves
//! through an ordered sequence of control points and answers queries for
//! position, the first three derivatives, arc length, arc-length inversion,
//! and nearest-point-on-curve.
//!
//! Seven families are provided, each in an open and a looping variant:
//! linear, uniform Catmull-Rom, cubic Hermite, quintic Hermite, uniform
//! cubic B-spline, generic B-spline of arbitrary degree, and the natural
//! cubic spline. All families share the same machinery: the alpha
//! parameterization of [`KnotTable`], a galloping segment lookup, and
//! Gauss-Legendre arc-length integration.
//!
//! ```
//! use skein_geometry::*;
//!
//! let points = vec![
//!     Vector2::new(0.0, 0.0),
//!     Vector2::new(1.0, 2.0),
//!     Vector2::new(3.0, 1.0),
//!     Vector2::new(4.0, 3.0),
//!     Vector2::new(6.0, 2.0),
//!     Vector2::new(7.0, 0.0),
//! ];
//!
//! // centripetal Catmull-Rom through points[1]..points[4]
//! let spline = CubicHermiteSpline::new(&points, 0.5);
//! assert_eq!(spline.max_t(), 3.0);
//! assert_near!(spline.position(0.0), points[1]);
//!
//! // walk one third of the curve's length from its start
//! let piece = spline.total_length() / 3.0;
//! let t = arclength::solve_length(&spline, 0.0, piece);
//! assert!((spline.arc_length(0.0, t) - piece).abs() < 1.0e-3);
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]
#![deny(clippy::all, rust_2018_idioms)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

/// re-export `skein_base`
pub mod base {
    pub use skein_base::cgmath64::*;
    pub use skein_base::tolerance::*;
}
pub use base::*;
pub use skein_base::{assert_near, assert_near2};
pub use skein_geotrait::{
    arclength, inverter, LoopingSpline, Spline, WithCurvature, WithTangent, WithWiggle,
};

/// Enumerates `Error`.
pub mod errors;
pub use errors::{Error, Result};

// Implements the spline trait for an open family by delegating to its
// evaluator core; out-of-range parameters clamp to the curve ends.
macro_rules! impl_open_spline {
    ($spline: ident) => {
        impl<V: crate::InnerSpace<Scalar = f64>> crate::Spline for $spline<V> {
            type Vector = V;
            #[inline(always)]
            fn position(&self, t: f64) -> V {
                self.core.position(t.clamp(0.0, self.core.max_t()))
            }
            #[inline(always)]
            fn tangent(&self, t: f64) -> crate::WithTangent<V> {
                self.core.tangent(t.clamp(0.0, self.core.max_t()))
            }
            #[inline(always)]
            fn curvature(&self, t: f64) -> crate::WithCurvature<V> {
                self.core.curvature(t.clamp(0.0, self.core.max_t()))
            }
            #[inline(always)]
            fn wiggle(&self, t: f64) -> crate::WithWiggle<V> {
                self.core.wiggle(t.clamp(0.0, self.core.max_t()))
            }
            #[inline(always)]
            fn knot(&self, index: i32) -> f64 { self.knots.knot(index) }
            #[inline(always)]
            fn max_t(&self) -> f64 { self.core.max_t() }
            #[inline(always)]
            fn segment_count(&self) -> usize { self.core.segment_count() }
            #[inline(always)]
            fn segment_for_t(&self, t: f64) -> usize { self.core.segment_for_t(t) }
            #[inline(always)]
            fn segment_t(&self, index: usize) -> f64 { self.core.segment_t(index) }
            #[inline(always)]
            fn segment_arc_length(&self, index: usize, a: f64, b: f64) -> f64 {
                self.core.segment_length(index, a, b)
            }
            #[inline(always)]
            fn is_looping(&self) -> bool { false }
        }
    };
}

// Implements the spline traits for a looping family: parameters wrap
// modulo `max_t` before every evaluation.
macro_rules! impl_looping_spline {
    ($spline: ident) => {
        impl<V: crate::InnerSpace<Scalar = f64>> crate::Spline for $spline<V> {
            type Vector = V;
            #[inline(always)]
            fn position(&self, t: f64) -> V {
                self.core.position(crate::LoopingSpline::wrap_t(self, t))
            }
            #[inline(always)]
            fn tangent(&self, t: f64) -> crate::WithTangent<V> {
                self.core.tangent(crate::LoopingSpline::wrap_t(self, t))
            }
            #[inline(always)]
            fn curvature(&self, t: f64) -> crate::WithCurvature<V> {
                self.core.curvature(crate::LoopingSpline::wrap_t(self, t))
            }
            #[inline(always)]
            fn wiggle(&self, t: f64) -> crate::WithWiggle<V> {
                self.core.wiggle(crate::LoopingSpline::wrap_t(self, t))
            }
            #[inline(always)]
            fn knot(&self, index: i32) -> f64 { self.knots.knot(index) }
            #[inline(always)]
            fn max_t(&self) -> f64 { self.core.max_t() }
            #[inline(always)]
            fn segment_count(&self) -> usize { self.core.segment_count() }
            #[inline(always)]
            fn segment_for_t(&self, t: f64) -> usize { self.core.segment_for_t(t) }
            #[inline(always)]
            fn segment_t(&self, index: usize) -> f64 { self.core.segment_t(index) }
            #[inline(always)]
            fn segment_arc_length(&self, index: usize, a: f64, b: f64) -> f64 {
                self.core.segment_length(index, a, b)
            }
            #[inline(always)]
            fn is_looping(&self) -> bool { true }
        }

        impl<V: crate::InnerSpace<Scalar = f64>> crate::LoopingSpline for $spline<V> {}
    };
}

/// Knot construction and segment lookup.
pub mod knots;
pub use knots::KnotTable;

mod bspline;
mod hermite;
mod linear;
mod natural;

pub use bspline::generic::{GenericBSpline, LoopingGenericBSpline};
pub use bspline::uniform::{LoopingUniformBSpline, UniformBSpline};
pub use hermite::cubic::{CubicHermiteSpline, LoopingCubicHermiteSpline};
pub use hermite::quintic::{LoopingQuinticHermiteSpline, QuinticHermiteSpline};
pub use hermite::uniform::{LoopingUniformCrSpline, UniformCrSpline};
pub use linear::{LinearSpline, LoopingLinearSpline};
pub use natural::{EndCondition, LoopingNaturalSpline, NaturalSpline};
