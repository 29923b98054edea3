//! Implementation of Brent's method (Brent 1973) for one-dimensional root
//! finding on a bracketing interval.

/// Default interval tolerance for [`brent`].
pub const DEFAULT_TOLERANCE: f64 = 1.0e-4;

/// Iteration cap. Brent's method halves the bracket at least every other
/// step, so any realistic bracket converges far earlier.
const MAX_ITERATIONS: usize = 200;

/// Finds a root of `f` inside the bracket `(a, b)`.
///
/// The caller supplies the already-evaluated endpoint values `fa` and `fb`;
/// they must satisfy `fa * fb <= 0` so that the interval contains a sign
/// change. Each iterate is chosen by inverse quadratic interpolation of the
/// last three points when that iterate lands inside the tolerance-shrunk
/// interval and makes sufficient progress, with a secant step or a bisection
/// as fallbacks. Returns once `|b - a| < tolerance` or `f(b) == 0`.
/// # Examples
/// ```
/// use skein_base::brent::brent;
/// let f = |x: f64| x * x - 2.0;
/// let root = brent(f, 0.0, f(0.0), 2.0, f(2.0), 1.0e-10);
/// assert!((root - f64::sqrt(2.0)).abs() < 1.0e-9);
/// ```
pub fn brent(
    f: impl Fn(f64) -> f64,
    a: f64,
    fa: f64,
    b: f64,
    fb: f64,
    tolerance: f64,
) -> f64 {
    debug_assert!(fa * fb <= 0.0, "the bracket must contain a sign change");

    let (mut a, mut fa, mut b, mut fb) = (a, fa, b, fb);

    // keep b the better of the two endpoints
    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = 0.0;
    let mut bisected = true;

    for _ in 0..MAX_ITERATIONS {
        if fb == 0.0 || (b - a).abs() < tolerance {
            return b;
        }

        let mut s = if fa != fc && fb != fc {
            // inverse quadratic interpolation
            a * fb * fc / ((fa - fb) * (fa - fc))
                + b * fa * fc / ((fb - fa) * (fb - fc))
                + c * fa * fb / ((fc - fa) * (fc - fb))
        } else {
            // secant
            b - fb * (b - a) / (fb - fa)
        };

        // fall back to bisection unless the interpolated point lands in the
        // inner three quarters of the bracket and shrinks fast enough
        let lower = (3.0 * a + b) / 4.0;
        let out_of_range = !((lower < s && s < b) || (b < s && s < lower));
        let slow_progress = if bisected {
            (s - b).abs() >= (b - c).abs() / 2.0 || (b - c).abs() < tolerance
        } else {
            (s - b).abs() >= (c - d).abs() / 2.0 || (c - d).abs() < tolerance
        };
        if out_of_range || slow_progress {
            s = (a + b) / 2.0;
            bisected = true;
        } else {
            bisected = false;
        }

        let fs = f(s);
        d = c;
        c = b;
        fc = fb;

        if fa * fs < 0.0 {
            b = s;
            fb = fs;
        } else {
            a = s;
            fa = fs;
        }

        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }
    }
    b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_two() {
        let f = |x: f64| x * x - 2.0;
        let root = brent(f, 0.0, f(0.0), 2.0, f(2.0), 1.0e-12);
        assert!((root - f64::sqrt(2.0)).abs() < 1.0e-10);
    }

    #[test]
    fn reversed_bracket() {
        let f = |x: f64| x.cos() - x;
        let root = brent(f, 1.5, f(1.5), 0.0, f(0.0), 1.0e-12);
        assert!((root - 0.739_085_133_215_160_6).abs() < 1.0e-9);
    }

    #[test]
    fn root_at_endpoint() {
        let f = |x: f64| x * (x - 1.0);
        let root = brent(f, 0.0, f(0.0), 0.5, f(0.5), 1.0e-12);
        assert!(root.abs() < 1.0e-10);
    }

    #[test]
    fn flat_then_steep() {
        // the cubic is nearly flat around the root, which forces the
        // bisection fallback to engage
        let f = |x: f64| (x - 0.3).powi(3);
        let root = brent(f, -1.0, f(-1.0), 1.0, f(1.0), 1.0e-10);
        assert!((root - 0.3).abs() < 1.0e-4);
    }
}
