//! Refresh shortcut icon: two nested arrows circling in opposite directions.

use std::f64::consts::PI;

use crate::error::Result;
use crate::geometry::{arc_points, arrowhead_triangle, ARC_STEP_DEGREES};
use crate::render::Canvas;
use crate::types::Theme;

use super::{center_of, frac, stroke};

const OUTER_START: f64 = 45.0;
const OUTER_END: f64 = 315.0;
const INNER_START: f64 = 225.0;
const INNER_END: f64 = 220.0;

/// Render the sync shortcut at `size` pixels square.
pub fn render(size: i32, theme: &Theme) -> Result<Canvas> {
    let mut canvas = Canvas::new(size)?;

    let s = size as f64;
    let center = center_of(s);
    let radius = frac(s, 0.3);
    let width = stroke(s, 20.0, 3.0);
    let head = (s / 15.0).floor();

    // Outer arrow: head on the trailing end of the sweep.
    let outer = arc_points(center, radius, OUTER_START, OUTER_END, ARC_STEP_DEGREES);
    canvas.draw_polyline(&outer, theme.primary, width);
    if let Some(&tip) = outer.last() {
        canvas.fill_polygon(
            &arrowhead_triangle(tip, OUTER_END.to_radians(), head),
            theme.primary,
        );
    }

    // Inner arrow wraps almost all the way round; head on the leading end.
    let inner = arc_points(center, frac(radius, 0.6), INNER_START, INNER_END, ARC_STEP_DEGREES);
    canvas.draw_polyline(&inner, theme.light, width);
    if let Some(&tail) = inner.first() {
        canvas.fill_polygon(
            &arrowhead_triangle(tail, INNER_START.to_radians() + PI, head),
            theme.light,
        );
    }

    Ok(canvas)
}
