//! Arc-length machinery composed from the per-segment length primitive:
//! length between parameters, total length, the arc-length inverse, and
//! equi-length partitioning.

use crate::traits::*;
use skein_base::brent::{brent, DEFAULT_TOLERANCE};

/// Arc length between parameters `a <= b`, both inside `[0, max_t]`.
///
/// [`Spline::arc_length`] forwards here after ordering and clamping its
/// arguments.
pub fn arc_length<S: Spline>(spline: &S, a: f64, b: f64) -> f64 {
    let a_index = spline.segment_for_t(a);
    let b_index = spline.segment_for_t(b);

    if a_index == b_index {
        let begin = spline.segment_t(a_index);
        let span = spline.segment_t(a_index + 1) - begin;
        spline.segment_arc_length(a_index, (a - begin) / span, (b - begin) / span)
    } else {
        let a_begin = spline.segment_t(a_index);
        let a_span = spline.segment_t(a_index + 1) - a_begin;
        let b_begin = spline.segment_t(b_index);
        let b_span = spline.segment_t(b_index + 1) - b_begin;

        let mut result = spline.segment_arc_length(a_index, (a - a_begin) / a_span, 1.0);
        for i in a_index + 1..b_index {
            result += spline.segment_arc_length(i, 0.0, 1.0);
        }
        result + spline.segment_arc_length(b_index, 0.0, (b - b_begin) / b_span)
    }
}

/// Arc length of the whole curve.
pub fn total_length<S: Spline>(spline: &S) -> f64 {
    (0..spline.segment_count())
        .map(|i| spline.segment_arc_length(i, 0.0, 1.0))
        .sum()
}

/// Arc length walking forward from `a` to `b` around a looping curve.
///
/// Only the parameter distance matters: both endpoints may sit outside
/// `[0, max_t)`, and a walk that crosses the loop seam continues around.
/// Walking a whole number of loops (`b = a + max_t`) reports the full
/// circumference, not zero.
pub fn cyclic_arc_length<S: LoopingSpline>(spline: &S, a: f64, b: f64) -> f64 {
    let max_t = spline.max_t();
    let from = spline.wrap_t(a);
    let mut delta = spline.wrap_t(b - a);
    if delta == 0.0 && b != a {
        delta = max_t;
    }

    let to = from + delta;
    if to <= max_t {
        arc_length(spline, from, to)
    } else {
        arc_length(spline, from, max_t) + arc_length(spline, 0.0, to - max_t)
    }
}

/// Finds `b >= a` such that the arc length from `a` to `b` equals
/// `desired_length`.
///
/// Returns `max_t` when the remaining curve is shorter than the desired
/// length. Segment lengths are accumulated until one segment overshoots;
/// Brent's method then pins the answer inside that segment.
pub fn solve_length<S: Spline>(spline: &S, a: f64, desired_length: f64) -> f64 {
    if desired_length <= 0.0 {
        return a;
    }

    let a_index = spline.segment_for_t(a);
    let mut accumulated = 0.0;

    for index in a_index..spline.segment_count() {
        let begin = spline.segment_t(index);
        let end = spline.segment_t(index + 1);
        let span = end - begin;

        let (bracket_begin, local_a) = if index == a_index {
            (a, (a - begin) / span)
        } else {
            (begin, 0.0)
        };

        let segment_length = spline.segment_arc_length(index, local_a, 1.0);
        if accumulated + segment_length < desired_length {
            accumulated += segment_length;
            continue;
        }

        // the answer lies inside this segment
        let f = |x: f64| {
            accumulated + spline.segment_arc_length(index, local_a, (x - begin) / span)
                - desired_length
        };
        return brent(
            f,
            bracket_begin,
            accumulated - desired_length,
            end,
            accumulated + segment_length - desired_length,
            DEFAULT_TOLERANCE,
        );
    }
    spline.max_t()
}

/// Cyclic counterpart of [`solve_length`]: the desired length may exceed the
/// circumference, in which case whole loops are traversed and the result
/// advances by `max_t` per loop. The result respects the unwrapped `a`.
pub fn solve_length_cyclic<S: LoopingSpline>(spline: &S, a: f64, desired_length: f64) -> f64 {
    let max_t = spline.max_t();
    let total = total_length(spline);

    let wrapped_a = spline.wrap_t(a);
    let base = a - wrapped_a;

    let cycles = (desired_length / total).floor();
    let remaining = desired_length - cycles * total;

    let to_end = arc_length(spline, wrapped_a, max_t);
    let b = if remaining <= to_end {
        solve_length(spline, wrapped_a, remaining)
    } else {
        solve_length(spline, 0.0, remaining - to_end) + max_t
    };

    b + base + cycles * max_t
}

/// Splits the curve into pieces of the given arc length.
///
/// Returns the increasing parameter sequence starting at `0` in which every
/// consecutive pair spans exactly `piece_length` of arc; the tail of the
/// curve shorter than `piece_length` has no entry.
pub fn partition<S: Spline>(spline: &S, piece_length: f64) -> Vec<f64> {
    assert!(piece_length > 0.0, "piece length must be positive");
    let count = (total_length(spline) / piece_length).floor() as usize;

    let mut result = Vec::with_capacity(count + 1);
    result.push(0.0);
    for _ in 0..count {
        let previous = *result.last().unwrap();
        result.push(solve_length(spline, previous, piece_length));
    }
    result
}

/// Splits the curve into `n` pieces of equal arc length.
///
/// Returns `n + 1` parameters from `0` to `max_t` inclusive.
pub fn partition_n<S: Spline>(spline: &S, n: usize) -> Vec<f64> {
    assert!(n > 0, "piece count must be positive");
    let piece_length = total_length(spline) / n as f64;

    let mut result = Vec::with_capacity(n + 1);
    result.push(0.0);
    for _ in 0..n - 1 {
        let previous = *result.last().unwrap();
        result.push(solve_length(spline, previous, piece_length));
    }
    result.push(spline.max_t());
    result
}
