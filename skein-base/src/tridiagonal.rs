//! Thomas-algorithm solvers for tridiagonal and cyclic tridiagonal systems.
//!
//! The right-hand side may be scalars or vectors; every solver is generic
//! over any value supporting addition, subtraction, and scaling by `f64`.

use cgmath::Zero;
use std::ops::{Add, Div, Mul, Sub};

/// Value types that can appear on the right-hand side of a linear system.
pub trait SystemValue:
    Copy + Zero + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self> + Div<f64, Output = Self>
{
}

impl<T> SystemValue for T where T: Copy
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<f64, Output = T>
        + Div<f64, Output = T>
{
}

/// Solves the tridiagonal system with the given lower, main, and upper
/// diagonals by the Thomas algorithm.
///
/// `lower` and `upper` must each be one element shorter than `main`, and
/// `rhs` must match `main` in length. The matrix must not require pivoting
/// (true for the diagonally dominant systems the spline crates assemble).
/// # Examples
/// ```
/// use skein_base::tridiagonal::solve_tridiagonal;
/// let x = solve_tridiagonal(&[0.0, 0.0], &[1.0, 1.0, 1.0], &[0.0, 0.0], &[5.0, 5.0, 5.0]);
/// assert_eq!(x, vec![5.0, 5.0, 5.0]);
/// ```
pub fn solve_tridiagonal<T: SystemValue>(
    lower: &[f64],
    main: &[f64],
    upper: &[f64],
    rhs: &[T],
) -> Vec<T> {
    let n = main.len();
    assert_eq!(lower.len(), n - 1);
    assert_eq!(upper.len(), n - 1);
    assert_eq!(rhs.len(), n);

    let mut diag = main.to_vec();
    let mut rhs = rhs.to_vec();

    // forward sweep
    for i in 1..n {
        let m = lower[i - 1] / diag[i - 1];
        diag[i] -= m * upper[i - 1];
        rhs[i] = rhs[i] - rhs[i - 1] * m;
    }

    // back substitution
    let mut output = vec![T::zero(); n];
    output[n - 1] = rhs[n - 1] / diag[n - 1];
    for i in (0..n - 1).rev() {
        output[i] = (rhs[i] - output[i + 1] * upper[i]) / diag[i];
    }
    output
}

/// Solves a symmetric tridiagonal system whose lower and upper diagonals are
/// both `secondary`.
pub fn solve_symmetric_tridiagonal<T: SystemValue>(
    main: &[f64],
    secondary: &[f64],
    rhs: &[T],
) -> Vec<T> {
    solve_tridiagonal(secondary, main, secondary, rhs)
}

/// Solves a cyclic symmetric tridiagonal system.
///
/// The final entry of `secondary` is the corner value coupling the last row
/// to the first, so `secondary` has the same length as `main`. The cyclic
/// system is reduced to two ordinary tridiagonal solves by the
/// Sherman-Morrison correction.
/// # Examples
/// ```
/// use skein_base::tridiagonal::solve_cyclic_symmetric_tridiagonal;
/// let x = solve_cyclic_symmetric_tridiagonal(
///     &[3.0; 5],
///     &[1.0; 5],
///     &[1.0; 5],
/// );
/// for value in x {
///     assert!((value - 0.2).abs() < 1.0e-12);
/// }
/// ```
pub fn solve_cyclic_symmetric_tridiagonal<T: SystemValue>(
    main: &[f64],
    secondary: &[f64],
    rhs: &[T],
) -> Vec<T> {
    let n = main.len();
    assert_eq!(secondary.len(), n);
    assert_eq!(rhs.len(), n);

    let corner = secondary[n - 1];

    // gamma cancels out of the result; a value far from the diagonal scale
    // keeps the corrected matrix well conditioned
    let gamma = -main[0] * 100.0;

    // corrective rank-one pair: u has gamma and the corner value at the
    // ends, v has 1 and corner/gamma
    let mut correction_u = vec![0.0; n];
    correction_u[0] = gamma;
    correction_u[n - 1] = corner;

    let mut correction_v = vec![0.0; n];
    correction_v[0] = 1.0;
    correction_v[n - 1] = corner / gamma;

    let mut modified_main = main.to_vec();
    modified_main[0] -= gamma;
    modified_main[n - 1] -= corner * corner / gamma;

    let inner = &secondary[..n - 1];
    let initial = solve_symmetric_tridiagonal(&modified_main, inner, rhs);
    let correction = solve_symmetric_tridiagonal(&modified_main, inner, &correction_u);

    let v_dot_initial = correction_v
        .iter()
        .zip(&initial)
        .fold(T::zero(), |sum, (&v, &y)| sum + y * v);
    let v_dot_correction = correction_v
        .iter()
        .zip(&correction)
        .fold(0.0, |sum, (&v, &q)| sum + q * v);
    let factor = v_dot_initial / (1.0 + v_dot_correction);

    initial
        .iter()
        .zip(&correction)
        .map(|(&y, &q)| y - factor * q)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cgmath64::*;
    use crate::*;

    #[test]
    fn identity_system() {
        let x = solve_tridiagonal(&[0.0, 0.0], &[1.0, 1.0, 1.0], &[0.0, 0.0], &[5.0, 5.0, 5.0]);
        assert_eq!(x, vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn asymmetric_system() {
        // [2 1 0; 3 2 1; 0 3 2] x = [4, 10, 12] -> x = [1, 2, 3]
        let x = solve_tridiagonal(&[3.0, 3.0], &[2.0, 2.0, 2.0], &[1.0, 1.0], &[4.0, 10.0, 12.0]);
        for (got, want) in x.iter().zip([1.0, 2.0, 3.0]) {
            assert_near!(*got, want);
        }
    }

    #[test]
    fn symmetric_vector_rhs() {
        // [2 1 0; 1 2 1; 0 1 2] x = rhs with x = [(1,0), (0,1), (1,1)]
        let x = [
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(1.0, 1.0),
        ];
        let rhs = [
            x[0] * 2.0 + x[1],
            x[0] + x[1] * 2.0 + x[2],
            x[1] + x[2] * 2.0,
        ];
        let got = solve_symmetric_tridiagonal(&[2.0, 2.0, 2.0], &[1.0, 1.0], &rhs);
        for (got, want) in got.iter().zip(x) {
            assert_near!(*got, want);
        }
    }

    #[test]
    fn cyclic_constant_solution() {
        let x = solve_cyclic_symmetric_tridiagonal(&[3.0; 5], &[1.0; 5], &[1.0; 5]);
        for value in x {
            assert!((value - 0.2).abs() < 1.0e-12);
        }
    }

    #[test]
    fn cyclic_vector_rhs() {
        // circulant [4 1 0 1; 1 4 1 0; 0 1 4 1; 1 0 1 4] with a known x
        let x = [
            Vector2::new(1.0, -1.0),
            Vector2::new(2.0, 0.5),
            Vector2::new(-1.0, 3.0),
            Vector2::new(0.0, 1.0),
        ];
        let rhs = [
            x[0] * 4.0 + x[1] + x[3],
            x[0] + x[1] * 4.0 + x[2],
            x[1] + x[2] * 4.0 + x[3],
            x[2] + x[3] * 4.0 + x[0],
        ];
        let got = solve_cyclic_symmetric_tridiagonal(&[4.0; 4], &[1.0; 4], &rhs);
        for (got, want) in got.iter().zip(x) {
            assert_near!(*got, want);
        }
    }
}
