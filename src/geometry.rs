//! Rounding and column-balancing primitives shared by the planners.
//!
//! Every pixel value handed to a consumer passes through [`px`], so all
//! planners agree on one rounding unit.

use alloc::vec;
use alloc::vec::Vec;

use num_traits::Float;

/// Decimal places kept for emitted pixel dimensions and offsets.
pub const PIXEL_DIGITS: i32 = 3;

/// Decimal places kept for column width fractions.
pub const RATIO_DIGITS: i32 = 5;

/// Smallest dimension a planner will emit for a solved size.
///
/// Solved heights or widths that come out non-positive (spacing and padding
/// eat the whole container) are clamped to this value.
pub const EPSILON: f64 = 1e-3;

/// Round `value` to `digits` decimal places.
pub fn round(value: f64, digits: i32) -> f64 {
    let factor = Float::powi(10.0_f64, digits);
    Float::round(value * factor) / factor
}

/// Round a pixel value to [`PIXEL_DIGITS`] decimal places.
pub fn px(value: f64) -> f64 {
    round(value, PIXEL_DIGITS)
}

/// Clamp a solved dimension to at least [`EPSILON`].
///
/// Returns the value and whether it had to be clamped.
pub(crate) fn positive_or_epsilon(value: f64) -> (f64, bool) {
    if value.is_finite() && value >= EPSILON {
        (value, false)
    } else {
        (EPSILON, true)
    }
}

/// Round a sequence of widths so that they sum to `px(total)`.
///
/// Rounds cumulative edges instead of individual widths: each width is the
/// difference of two rounded edges, so no width is off by more than one
/// rounding unit and the sum never drifts with row length.
pub(crate) fn distribute(raw: &[f64], total: f64) -> Vec<f64> {
    let mut widths = Vec::with_capacity(raw.len());
    let mut edge = 0.0;
    let mut rounded_edge = 0.0;
    for (i, &w) in raw.iter().enumerate() {
        edge += w;
        let next = if i + 1 == raw.len() { px(total) } else { px(edge) };
        widths.push(px(next - rounded_edge));
        rounded_edge = next;
    }
    widths
}

/// Outer width of one of `count` equal columns.
pub(crate) fn uniform_column_width(container_width: f64, spacing: f64, count: usize) -> f64 {
    (container_width - spacing * (count as f64 - 1.0)) / count as f64
}

/// Index of the shortest column; ties go to the lowest index.
pub fn shortest_column(heights: &[f64]) -> usize {
    let mut best = 0;
    for (i, &h) in heights.iter().enumerate().skip(1) {
        if h < heights[best] {
            best = i;
        }
    }
    best
}

/// Result of greedy shortest-column-first assignment.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Balanced {
    /// Item indices per column, in assignment order.
    pub members: Vec<Vec<usize>>,
    /// Accumulated column heights including spacing and padding.
    pub heights: Vec<f64>,
}

/// Assign items to `count` columns, each to the currently shortest one.
///
/// An item contributes its height plus `2 × padding`, and `spacing`
/// separates it from the item above. Greedy assignment does not find the
/// optimal partition, but keeps `max − min` column height within one item
/// footprint and is deterministic for a given input order.
pub(crate) fn balance(item_heights: &[f64], count: usize, spacing: f64, padding: f64) -> Balanced {
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); count];
    let mut heights = vec![0.0; count];
    for (index, &h) in item_heights.iter().enumerate() {
        let col = shortest_column(&heights);
        if !members[col].is_empty() {
            heights[col] += spacing;
        }
        heights[col] += h + 2.0 * padding;
        members[col].push(index);
    }
    Balanced { members, heights }
}

/// Accumulated height of a column from its item heights.
pub(crate) fn stacked_height(item_heights: impl Iterator<Item = f64>, spacing: f64, padding: f64) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for h in item_heights {
        total += h + 2.0 * padding;
        count += 1;
    }
    if count > 1 {
        total += spacing * (count - 1) as f64;
    }
    total
}
