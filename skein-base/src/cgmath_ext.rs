use cgmath::InnerSpace;

/// Vectors whose squared length falls below this threshold are treated as
/// having no usable direction.
pub const DEGENERATE_LENGTH2: f64 = 1.0e-8;

/// Additional vector operations used across the spline crates.
pub trait VectorExt: InnerSpace<Scalar = f64> {
    /// Returns the normalized vector, or the zero vector when the length is
    /// too small for the division to be meaningful.
    /// # Examples
    /// ```
    /// use skein_base::{assert_near, cgmath64::*};
    /// assert_near!(Vector2::new(3.0, 4.0).normalize_or_zero(), Vector2::new(0.6, 0.8));
    /// assert_eq!(Vector2::new(1.0e-9, 0.0).normalize_or_zero(), Vector2::new(0.0, 0.0));
    /// ```
    #[inline(always)]
    fn normalize_or_zero(self) -> Self {
        if self.magnitude2() < DEGENERATE_LENGTH2 {
            Self::zero()
        } else {
            self.normalize()
        }
    }
}

impl<V: InnerSpace<Scalar = f64>> VectorExt for V {}
