//! Defines the spline traits and the generic algorithms over them: arc
//! length, arc-length inversion, equi-length partitioning, and the
//! sample-tree-accelerated nearest-point query.

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

/// Abstract traits: `Spline` and `LoopingSpline`.
pub mod traits;
pub use traits::*;
/// Arc length, arc-length inversion, and partitioning.
pub mod arclength;
/// Nearest-point-on-curve queries.
pub mod inverter;
