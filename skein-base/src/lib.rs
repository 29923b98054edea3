//! Basic structs and traits: importing cgmath, tolerance, and the numerical
//! kernels shared by the spline crates.

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

/// Brent's method for one-dimensional root finding
pub mod brent;
/// Redefines vectors with scalar = f64.
pub mod cgmath64;
/// Additional traits for cgmath
pub mod cgmath_ext;
/// Gauss-Legendre quadrature
pub mod quadrature;
/// Setting Tolerance
pub mod tolerance;
/// Tridiagonal linear solvers
pub mod tridiagonal;
