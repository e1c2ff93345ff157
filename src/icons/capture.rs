//! Camera shortcut icon.

use crate::error::Result;
use crate::render::Canvas;
use crate::types::Theme;

use super::{center_of, frac, stroke};

/// Render the capture shortcut at `size` pixels square.
pub fn render(size: i32, theme: &Theme) -> Result<Canvas> {
    let mut canvas = Canvas::new(size)?;

    let s = size as f64;
    let center = center_of(s);
    let outline = stroke(s, 48.0, 1.0);

    // Body
    let body_w = frac(s, 0.7);
    let body_h = frac(s, 0.5);
    let body_x = center.x - (body_w / 2.0).floor();
    let body_y = center.y - (body_h / 2.0).floor();
    let corner = (s / 20.0).floor();
    canvas.fill_rounded_rect(body_x, body_y, body_w, body_h, corner, theme.primary);
    canvas.stroke_rounded_rect(body_x, body_y, body_w, body_h, corner, theme.white, outline);

    // Lens
    let lens = frac(s, 0.15);
    canvas.fill_circle(center, lens, theme.gray);
    canvas.stroke_circle(center, lens, theme.white, outline);
    canvas.fill_circle(center, frac(lens, 0.6), theme.white);

    // Viewfinder bump above the body
    let vf_w = frac(s, 0.2);
    let vf_h = frac(s, 0.1);
    let vf_x = center.x - (vf_w / 2.0).floor();
    let vf_y = body_y - vf_h - frac(s, 0.05);
    let vf_corner = (s / 40.0).floor();
    canvas.fill_rounded_rect(vf_x, vf_y, vf_w, vf_h, vf_corner, theme.primary);
    canvas.stroke_rounded_rect(
        vf_x,
        vf_y,
        vf_w,
        vf_h,
        vf_corner,
        theme.white,
        stroke(s, 96.0, 1.0),
    );

    Ok(canvas)
}
