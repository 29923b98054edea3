//! Knot construction: mapping control-point indices (padding included) to
//! global parameter values, and the galloping segment lookup over a sorted
//! knot array.

use crate::*;
use serde::{Deserialize, Serialize};

/// Point pairs closer than this (in squared distance) contribute zero knot
/// spacing, so coincident points cannot poison the parameterization.
pub const COINCIDENT_DISTANCE2: f64 = 1.0e-4;

/// The parameter value assigned to every control point of a spline,
/// including phantom padding points before index `0` and past the last
/// interpolated point.
///
/// For `alpha = 0` consecutive knots differ by exactly `1`; for
/// `alpha > 0` the raw spacing is `|P_i - P_{i-1}|^alpha`, rescaled so the
/// active range becomes `[0, segment_count]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnotTable {
    values: Vec<f64>,
    /// how many entries precede point index 0
    negative: usize,
}

// spacing between two adjacent control points: distance^alpha, computed as
// (distance^2)^(alpha/2) to skip the square root
fn knot_spacing<V: InnerSpace<Scalar = f64>>(p1: V, p2: V, alpha: f64) -> f64 {
    if alpha == 0.0 {
        1.0
    } else {
        let distance2 = (p1 - p2).magnitude2();
        if distance2 < COINCIDENT_DISTANCE2 {
            0.0
        } else {
            distance2.powf(alpha * 0.5)
        }
    }
}

impl KnotTable {
    /// Builds knots where the first and last `padding` points are phantom
    /// neighbors: they receive negative knots (or knots past the end), and
    /// the active range `[padding, N-1-padding]` is rescaled to
    /// `[0, N - 2*padding - 1]`.
    pub(crate) fn with_inner_padding<V>(points: &[V], alpha: f64, padding: usize) -> KnotTable
    where V: InnerSpace<Scalar = f64> {
        let size = points.len();
        let end_padding_index = size - 1 - padding;
        let desired_max = (size - 2 * padding - 1) as f64;

        let mut values = vec![0.0; size];
        for i in (0..padding).rev() {
            values[i] = values[i + 1] - knot_spacing(points[i], points[i + 1], alpha);
        }
        for i in padding + 1..size {
            values[i] = values[i - 1] + knot_spacing(points[i], points[i - 1], alpha);
        }

        let multiplier = desired_max / values[end_padding_index];
        values.iter_mut().for_each(|knot| *knot *= multiplier);
        // the rescale must land exactly: max_t == segment_count
        values[end_padding_index] = desired_max;

        KnotTable { values, negative: 0 }
    }

    /// Builds knots where every point is active with range `[0, N-1]`, plus
    /// `padding` extrapolated knots on each end that mirror the nearest
    /// spacing. The extrapolated knots exist only for basis recursions and
    /// never denote a segment.
    pub(crate) fn with_outer_padding<V>(points: &[V], alpha: f64, padding: usize) -> KnotTable
    where V: InnerSpace<Scalar = f64> {
        let size = points.len();
        let desired_max = (size - 1) as f64;

        let mut values = vec![0.0; size];
        for i in 1..size {
            values[i] = values[i - 1] + knot_spacing(points[i], points[i - 1], alpha);
        }
        let multiplier = desired_max / values[size - 1];
        values.iter_mut().for_each(|knot| *knot *= multiplier);
        values[size - 1] = desired_max;

        let mut table = KnotTable { values, negative: 0 };
        table.pad_outward(padding);
        table
    }

    /// Builds knots for a looping spline: one extra knot at index `N`
    /// closes the loop with the wrapped first-to-last spacing, the active
    /// range is rescaled to `[0, N]`, and `padding` knots on each side
    /// continue the spacing pattern so wrap-around lookups need no special
    /// case.
    pub(crate) fn looping<V>(points: &[V], alpha: f64, padding: usize) -> KnotTable
    where V: InnerSpace<Scalar = f64> {
        let size = points.len();
        let desired_max = size as f64;

        let mut values = vec![0.0; size + 1];
        for i in 1..size + 1 {
            values[i] = values[i - 1] + knot_spacing(points[i % size], points[i - 1], alpha);
        }
        let multiplier = desired_max / values[size];
        values.iter_mut().for_each(|knot| *knot *= multiplier);
        // the loop must close exactly at t = N
        values[size] = desired_max;

        // repeat the loop's spacing pattern outward
        for i in 1..padding + 1 {
            let spacing = values[i] - values[i - 1];
            values.push(values[size + i - 1] + spacing);
        }
        let mut table = KnotTable { values, negative: 0 };
        for i in (-(padding as i32)..0).rev() {
            let spacing = table.knot(i + size as i32 + 1) - table.knot(i + size as i32);
            table.values.insert(0, table.knot(i + 1) - spacing);
            table.negative += 1;
        }
        table
    }

    // mirrors the nearest real spacing outward on both ends
    fn pad_outward(&mut self, padding: usize) {
        for _ in 0..padding {
            let len = self.values.len();
            let spacing = self.values[len - 1] - self.values[len - 2];
            self.values.push(self.values[len - 1] + spacing);
        }
        for _ in 0..padding {
            let spacing = self.values[self.negative + 1] - self.values[self.negative];
            self.values.insert(0, self.values[0] - spacing);
            self.negative += 1;
        }
    }

    /// The knot value of the control point with the given index. Padding
    /// points have negative indices or indices past the last point.
    #[inline(always)]
    pub fn knot(&self, index: i32) -> f64 { self.values[(index + self.negative as i32) as usize] }

    /// Copies out the contiguous run of `count` knots starting at point
    /// index `first`.
    pub(crate) fn run(&self, first: i32, count: usize) -> Vec<f64> {
        let start = (first + self.negative as i32) as usize;
        self.values[start..start + count].to_vec()
    }
}

/// Returns the largest index `i` such that `knots[i] <= t`, clamped into
/// `[0, knots.len() - 1]`.
///
/// The initial guess `floor(t - knots[0])` is exact for uniform
/// parameterizations; from there the search gallops outward with a doubling
/// stride until the answer is bracketed, then bisects. O(1) on uniform
/// knots, O(log n) worst case.
pub(crate) fn segment_index(knots: &[f64], t: f64) -> usize {
    let len = knots.len();
    if t <= knots[0] {
        return 0;
    }
    if t >= knots[len - 1] {
        return len - 1;
    }

    let guess = ((t - knots[0]) as usize).min(len - 2);
    let (mut low, mut high);
    if knots[guess] <= t {
        low = guess;
        high = guess + 1;
        let mut stride = 1;
        while knots[high] <= t {
            low = high;
            high = (high + stride).min(len - 1);
            stride *= 2;
        }
    } else {
        high = guess;
        low = guess - 1;
        let mut stride = 1;
        while knots[low] > t {
            high = low;
            low = low.saturating_sub(stride);
            stride *= 2;
        }
    }

    while high - low > 1 {
        let mid = (low + high) / 2;
        if knots[mid] <= t {
            low = mid;
        } else {
            high = mid;
        }
    }
    low
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_inner_padding() {
        let points: Vec<Vector2> = (0..6).map(|i| Vector2::new(i as f64, 0.0)).collect();
        let table = KnotTable::with_inner_padding(&points, 0.0, 1);
        for i in 0..6 {
            assert_near!(table.knot(i), (i - 1) as f64);
        }
    }

    #[test]
    fn chordal_inner_padding_scales_to_segment_count() {
        // spacing proportional to distance, rescaled so knots run 0..=3
        let points = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(5.0, 0.0),
            Vector2::new(9.0, 0.0),
            Vector2::new(10.0, 0.0),
        ];
        let table = KnotTable::with_inner_padding(&points, 1.0, 1);
        assert_near!(table.knot(1), 0.0);
        assert_near!(table.knot(4), 3.0);
        // interior spacing keeps the 3 : 1 : 4 proportions
        let spans: Vec<f64> = (1..4).map(|i| table.knot(i + 1) - table.knot(i)).collect();
        assert_near!(spans[0] / spans[1], 3.0);
        assert_near!(spans[2] / spans[1], 4.0);
    }

    #[test]
    fn coincident_points_collapse() {
        let points = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(2.0, 0.0),
        ];
        let table = KnotTable::with_outer_padding(&points, 1.0, 0);
        assert_near!(table.knot(1), table.knot(2));
    }

    #[test]
    fn outer_padding_mirrors_spacing() {
        let points: Vec<Vector2> = (0..5).map(|i| Vector2::new(i as f64, 0.0)).collect();
        let table = KnotTable::with_outer_padding(&points, 0.0, 2);
        assert_near!(table.knot(-2), -2.0);
        assert_near!(table.knot(-1), -1.0);
        assert_near!(table.knot(0), 0.0);
        assert_near!(table.knot(4), 4.0);
        assert_near!(table.knot(6), 6.0);
    }

    #[test]
    fn looping_knots_close_the_loop() {
        let points: Vec<Vector2> = (0..4).map(|i| Vector2::new(i as f64, 0.0)).collect();
        let table = KnotTable::looping(&points, 0.0, 2);
        assert_near!(table.knot(0), 0.0);
        assert_near!(table.knot(4), 4.0);
        assert_near!(table.knot(-1), -1.0);
        assert_near!(table.knot(6), 6.0);
    }

    #[test]
    fn looping_knots_wrap_nonuniform_spacing() {
        // an L-shape: wrapping spacing repeats periodically on both sides
        let points = [
            Vector2::new(0.0, 0.0),
            Vector2::new(3.0, 0.0),
            Vector2::new(3.0, 1.0),
            Vector2::new(0.0, 1.0),
        ];
        let table = KnotTable::looping(&points, 1.0, 1);
        assert_near!(table.knot(4) - table.knot(3), table.knot(0) - table.knot(-1));
        assert_near!(table.knot(5) - table.knot(4), table.knot(1) - table.knot(0));
    }

    #[test]
    fn lookup_on_uniform_knots() {
        let knots: Vec<f64> = (0..8).map(f64::from).collect();
        assert_eq!(segment_index(&knots, -0.5), 0);
        assert_eq!(segment_index(&knots, 0.0), 0);
        assert_eq!(segment_index(&knots, 2.5), 2);
        assert_eq!(segment_index(&knots, 6.999), 6);
        assert_eq!(segment_index(&knots, 7.0), 7);
        assert_eq!(segment_index(&knots, 9.0), 7);
    }

    #[test]
    fn lookup_on_compressed_knots() {
        // the floor guess lands far right of the answer
        let knots = [0.0, 0.1, 0.2, 0.3, 0.4, 8.0];
        assert_eq!(segment_index(&knots, 0.25), 2);
        assert_eq!(segment_index(&knots, 5.0), 4);
        // and far left
        let knots = [0.0, 4.5, 4.6, 4.7, 4.8, 5.0];
        assert_eq!(segment_index(&knots, 4.65), 2);
    }

    #[test]
    fn lookup_matches_linear_scan() {
        let knots = [-2.0, -0.5, 0.0, 0.25, 1.0, 2.5, 2.75, 4.0, 7.5];
        for i in 0..=150 {
            let t = -3.0 + 0.08 * i as f64;
            let expected = match knots.iter().rposition(|&knot| knot <= t) {
                Some(index) => index,
                None => 0,
            };
            assert_eq!(segment_index(&knots, t), expected, "t = {t}");
        }
    }

    proptest::proptest! {
        #[test]
        fn inner_padding_knots_increase(
            alpha in 0.0..=1.0f64,
            ys in proptest::collection::vec(-5.0..5.0f64, 6..12),
        ) {
            let points: Vec<Vector2> = ys
                .iter()
                .enumerate()
                .map(|(i, &y)| Vector2::new(1.5 * i as f64, y))
                .collect();
            let table = KnotTable::with_inner_padding(&points, alpha, 1);

            for i in 0..points.len() as i32 - 1 {
                proptest::prop_assert!(table.knot(i + 1) > table.knot(i));
            }
            proptest::prop_assert_eq!(table.knot(1), 0.0);
            proptest::prop_assert_eq!(
                table.knot(points.len() as i32 - 2),
                (points.len() - 3) as f64,
            );
        }

        #[test]
        fn looping_knots_are_periodic(
            alpha in 0.0..=1.0f64,
            ys in proptest::collection::vec(-5.0..5.0f64, 4..10),
        ) {
            let points: Vec<Vector2> = ys
                .iter()
                .enumerate()
                .map(|(i, &y)| Vector2::new(1.5 * i as f64, y))
                .collect();
            let size = points.len() as i32;
            let table = KnotTable::looping(&points, alpha, 2);

            for i in -2..3 {
                let period = table.knot(i + size) - table.knot(i);
                proptest::prop_assert!((period - size as f64).abs() < 1.0e-9);
            }
        }
    }
}
