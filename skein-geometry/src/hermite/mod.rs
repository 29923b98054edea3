//! Hermite-family splines: segments defined by endpoint positions and
//! derivatives, including the Catmull-Rom constructions that derive those
//! derivatives from neighboring control points.

pub(crate) mod cubic;
pub(crate) mod quintic;
pub(crate) mod uniform;

use crate::InnerSpace;

/// The alpha-aware Catmull-Rom derivative at the middle of three neighbors.
///
/// With evenly spaced knots the correction term on the middle point
/// vanishes and the formula collapses to the classical centered difference
/// `(P_next - P_prev) / 2`. The quintic family applies the same formula to
/// tangents to obtain curvatures.
pub(crate) fn catmull_rom_derivative<V: InnerSpace<Scalar = f64>>(
    p_prev: V,
    p_current: V,
    p_next: V,
    t_prev: f64,
    t_current: f64,
    t_next: f64,
) -> V {
    p_prev * ((t_current - t_next) / ((t_next - t_prev) * (t_current - t_prev)))
        + p_next * ((t_current - t_prev) / ((t_next - t_prev) * (t_next - t_current)))
        - p_current
            * (((t_current - t_prev) - (t_next - t_current))
                / ((t_next - t_current) * (t_current - t_prev)))
}
