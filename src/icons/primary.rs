//! The brand icon: a fibre-optic bundle spiralling out of a central node.

use crate::error::{IconError, Result};
use crate::geometry::spiral_points;
use crate::render::Canvas;
use crate::types::{Point, Theme};

use super::{center_of, frac, stroke};

/// Smallest size at which the label is legible.
pub const LABEL_MIN_SIZE: i32 = 128;

/// Longest label the node has room for.
pub const MAX_LABEL_CHARS: usize = 2;

const FIBRE_COUNT: u32 = 6;
const FIBRE_SAMPLES: usize = 20;
const FIBRE_TURNS: f64 = 0.75;
const CONNECTOR_COUNT: u32 = 8;

/// Render the primary icon at `size` pixels square.
pub fn render(size: i32, theme: &Theme, label: &str) -> Result<Canvas> {
    let mut canvas = Canvas::new(size)?;

    let s = size as f64;
    let center = center_of(s);
    let radius = (s / 2.5).floor();
    let inner_radius = frac(radius, 0.85);

    draw_glow(&mut canvas, center, radius, theme);

    canvas.fill_circle(center, radius, theme.primary);
    canvas.fill_circle(center, inner_radius, theme.secondary);

    draw_fibres(&mut canvas, center, inner_radius, stroke(s, 40.0, 2.0), theme);

    // Central node
    let node_radius = frac(radius, 0.2);
    canvas.fill_circle(center, node_radius, theme.white);
    canvas.stroke_circle(center, node_radius, theme.secondary, stroke(s, 60.0, 1.0));

    draw_connectors(&mut canvas, center, radius, stroke(s, 80.0, 1.0), theme);

    if size >= LABEL_MIN_SIZE {
        let font_size = (s / 8.0).floor().max(12.0);
        if draw_label(&mut canvas, label, center, font_size, theme).is_err() {
            draw_cross(&mut canvas, center, radius, stroke(s, 30.0, 2.0), theme);
        }
    }

    Ok(canvas)
}

/// Faux radial gradient: concentric discs whose alpha grows toward the centre.
fn draw_glow(canvas: &mut Canvas, center: Point, radius: f64, theme: &Theme) {
    let steps = radius as i64;
    for i in (1..=steps).rev() {
        let alpha = glow_alpha(i as f64, radius);
        canvas.fill_circle(center, i as f64, theme.primary.with_alpha(alpha));
    }
}

/// Alpha of the glow disc of radius `i`, quantised to whole steps.
fn glow_alpha(i: f64, radius: f64) -> u8 {
    (255.0 * (1.0 - i / radius) * 0.1).floor() as u8
}

/// Alpha of fibre segment `index` of `count`: drops one step per segment.
fn fibre_alpha(index: usize, count: usize) -> u8 {
    (255.0 * (1.0 - index as f64 / count as f64) * 0.8).floor() as u8
}

/// Six spiral strands, each segment fading out toward the rim.
fn draw_fibres(canvas: &mut Canvas, center: Point, inner_radius: f64, width: f64, theme: &Theme) {
    for k in 0..FIBRE_COUNT {
        let start = (k as f64 * 360.0 / FIBRE_COUNT as f64).to_radians();
        let points = spiral_points(
            center,
            start,
            inner_radius * 0.3,
            inner_radius * 0.7,
            FIBRE_TURNS,
            FIBRE_SAMPLES,
        );

        let count = points.len();
        for (i, pair) in points.windows(2).enumerate() {
            let alpha = fibre_alpha(i, count);
            canvas.draw_line(pair[0], pair[1], theme.light.with_alpha(alpha), width);
        }
    }
}

/// Ring of small outlined dots at 65% of the main radius.
fn draw_connectors(canvas: &mut Canvas, center: Point, radius: f64, outline: f64, theme: &Theme) {
    let ring = frac(radius, 0.65);
    let dot = frac(radius, 0.08);

    for k in 0..CONNECTOR_COUNT {
        let angle = (k as f64 * 360.0 / CONNECTOR_COUNT as f64).to_radians();
        let p = center.polar(ring, angle);
        canvas.fill_circle(p, dot, theme.light);
        canvas.stroke_circle(p, dot, theme.white, outline);
    }
}

/// Label with a one-pixel drop shadow.
fn draw_label(
    canvas: &mut Canvas,
    label: &str,
    center: Point,
    font_size: f64,
    theme: &Theme,
) -> Result<()> {
    if label.chars().count() > MAX_LABEL_CHARS {
        return Err(IconError::LabelTooLong {
            label: label.to_string(),
            max: MAX_LABEL_CHARS,
        });
    }

    canvas.draw_glyphs(label, center.x + 1.0, center.y + 1.0, font_size, theme.gray)?;
    canvas.draw_glyphs(label, center.x, center.y, font_size, theme.white)
}

/// Plus sign used when the label cannot be drawn.
fn draw_cross(canvas: &mut Canvas, center: Point, radius: f64, width: f64, theme: &Theme) {
    let arm = frac(radius, 0.3);
    canvas.draw_line(
        Point::new(center.x - arm, center.y),
        Point::new(center.x + arm, center.y),
        theme.white,
        width,
    );
    canvas.draw_line(
        Point::new(center.x, center.y - arm),
        Point::new(center.x, center.y + arm),
        theme.white,
        width,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PRIMARY_SIZES;
    use crate::types::Colour;

    fn render_default(size: i32, label: &str) -> Canvas {
        render(size, &Theme::default(), label).unwrap()
    }

    fn center_pixel(canvas: &Canvas) -> Colour {
        let c = canvas.size() / 2;
        canvas.get(c, c).unwrap()
    }

    #[test]
    fn test_dimensions_match_size_matrix() {
        for size in PRIMARY_SIZES {
            let canvas = render_default(size, "FF");
            assert_eq!(canvas.size(), size as u32);
        }
    }

    #[test]
    fn test_center_is_opaque() {
        for size in [32, 48, 64].into_iter().chain(PRIMARY_SIZES) {
            let canvas = render_default(size, "FF");
            assert!(center_pixel(&canvas).is_opaque(), "size {size}");
        }
    }

    #[test]
    fn test_center_is_white_node_below_label_size() {
        let canvas = render_default(96, "FF");
        assert_eq!(center_pixel(&canvas), Colour::WHITE);
    }

    #[test]
    fn test_corners_stay_transparent() {
        let canvas = render_default(128, "FF");
        let edge = canvas.size() - 1;
        for (x, y) in [(0, 0), (edge, 0), (0, edge), (edge, edge)] {
            assert!(canvas.get(x, y).unwrap().is_transparent());
        }
    }

    #[test]
    fn test_main_disk_is_primary_at_rim() {
        let canvas = render_default(512, "FF");
        // radius 204, inner disc 173: a pixel between them is solid brand blue.
        assert_eq!(canvas.get(256 + 190, 256), Some(Theme::default().primary));
    }

    #[test]
    fn test_label_only_from_label_size() {
        // Below the threshold the label is skipped, so any label renders the same.
        assert_eq!(render_default(96, "FF"), render_default(96, "AB"));
        assert_eq!(render_default(96, "FF"), render_default(96, "way too long"));

        // From the threshold up the label changes the output.
        assert_ne!(render_default(128, "FF"), render_default(128, "AB"));
    }

    #[test]
    fn test_unavailable_label_falls_back_to_cross() {
        let with_cross = render_default(192, "??");
        let too_long = render_default(192, "FFF");
        assert_eq!(with_cross, too_long);

        let blank = render_default(192, "");
        assert_ne!(with_cross, blank);

        // The cross arm runs horizontally through the node edge.
        // radius 76, node 15, arm 22: x = 96 + 18 is outside the node but on the arm.
        assert_eq!(with_cross.get(96 + 18, 96), Some(Colour::WHITE));
        assert_ne!(blank.get(96 + 18, 96), Some(Colour::WHITE));
    }

    #[test]
    fn test_long_label_is_reported_as_too_long() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(192).unwrap();
        let center = Point::new(96.0, 96.0);

        let err = draw_label(&mut canvas, "FFF", center, 24.0, &theme).unwrap_err();
        assert!(matches!(
            err,
            IconError::LabelTooLong { ref label, max: 2 } if label == "FFF"
        ));
        assert!(canvas.pixels().iter().all(|c| c.is_transparent()));
    }

    #[test]
    fn test_fade_alphas_step_down() {
        let fibre: Vec<u8> = (0..FIBRE_SAMPLES - 1)
            .map(|i| fibre_alpha(i, FIBRE_SAMPLES))
            .collect();
        assert_eq!(fibre[0], 204);
        assert_eq!(fibre[1], 193);
        assert_eq!(fibre[FIBRE_SAMPLES - 2], 20);
        assert!(fibre.windows(2).all(|w| w[1] < w[0]));

        assert_eq!(glow_alpha(1.0, 204.0), 25);
        assert_eq!(glow_alpha(102.0, 204.0), 12);
        assert_eq!(glow_alpha(204.0, 204.0), 0);
    }

    #[test]
    fn test_fibre_fades_along_its_length() {
        let theme = Theme::default();
        let canvas = render_default(512, "FF");

        // First segment of the fibre starting at 0°: (308, 256) to (310, 270).
        let near = canvas.get(304, 256).unwrap();
        assert_eq!(near, theme.light.with_alpha(204).over(theme.secondary));
        assert_eq!(near, Colour::rgb(125, 177, 249));

        // Last segment of the same fibre: (227, 142) to (256, 135).
        let far = canvas.get(241, 139).unwrap();
        assert_eq!(far, theme.light.with_alpha(20).over(theme.secondary));

        assert!(near.g > far.g);
        assert_ne!(far, theme.secondary);
    }
}
