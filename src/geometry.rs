//! Parametric point generators used by the icon composers.
//!
//! Every function here is pure: the same arguments always produce the
//! same points, and no call depends on any other.

use std::f64::consts::TAU;

use crate::types::Point;

/// Default angular step for [`arc_points`], in degrees.
pub const ARC_STEP_DEGREES: f64 = 5.0;

/// Half-angle between the two barbs of an arrowhead, in radians.
pub const ARROWHEAD_SPREAD: f64 = 0.5;

/// Sample an Archimedean-style spiral.
///
/// `t` runs linearly over `[0, 1]` in `samples` steps (both ends included),
/// giving `angle = start_angle + t * turns * 2π` and
/// `radius = inner_radius + t * (outer_radius - inner_radius)`.
pub fn spiral_points(
    center: Point,
    start_angle: f64,
    inner_radius: f64,
    outer_radius: f64,
    turns: f64,
    samples: usize,
) -> Vec<Point> {
    (0..samples)
        .map(|i| {
            let t = if samples > 1 {
                i as f64 / (samples - 1) as f64
            } else {
                0.0
            };
            let angle = start_angle + t * turns * TAU;
            let radius = inner_radius + t * (outer_radius - inner_radius);
            center.polar(radius, angle)
        })
        .collect()
}

/// Sample a circular arc from `start_degrees` to `end_degrees` inclusive.
///
/// Angles always increase; when `end_degrees < start_degrees` the end is
/// moved up by 360° so the arc wraps. The final sample sits exactly on the
/// end angle even when the sweep is not a multiple of `step_degrees`.
/// A non-positive step yields no points.
pub fn arc_points(
    center: Point,
    radius: f64,
    start_degrees: f64,
    end_degrees: f64,
    step_degrees: f64,
) -> Vec<Point> {
    if step_degrees <= 0.0 || !step_degrees.is_finite() {
        return Vec::new();
    }

    let mut sweep = end_degrees - start_degrees;
    if sweep < 0.0 {
        sweep += 360.0;
    }

    let steps = (sweep / step_degrees + 1e-9).floor() as usize;
    let mut points: Vec<Point> = (0..=steps)
        .map(|k| {
            let degrees = start_degrees + k as f64 * step_degrees;
            center.polar(radius, degrees.to_radians())
        })
        .collect();

    if (steps as f64) * step_degrees < sweep - 1e-9 {
        points.push(center.polar(radius, (start_degrees + sweep).to_radians()));
    }

    points
}

/// Build a triangular arrow cap with its apex at `tip`.
///
/// The two base corners sit `size` back from the apex at
/// `direction ± ARROWHEAD_SPREAD` (radians).
pub fn arrowhead_triangle(tip: Point, direction: f64, size: f64) -> [Point; 3] {
    arrowhead_triangle_with_spread(tip, direction, size, ARROWHEAD_SPREAD)
}

/// [`arrowhead_triangle`] with an explicit barb spread.
pub fn arrowhead_triangle_with_spread(
    tip: Point,
    direction: f64,
    size: f64,
    spread: f64,
) -> [Point; 3] {
    [
        tip,
        tip.polar(-size, direction + spread),
        tip.polar(-size, direction - spread),
    ]
}
