//! Square RGBA raster with primitive drawing operations.
//!
//! Pixel `(x, y)` is covered by a shape when the sample point `(x, y)`
//! lies inside it. Every primitive visits each covered pixel exactly once
//! and composites its colour with [`Colour::over`], so overlapping draws
//! within a single call never double-blend. Anything outside the buffer is
//! silently clipped.

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{IconError, Result};
use crate::types::{Colour, Point};

use super::font;

/// Largest edge length a canvas may be allocated with.
pub const MAX_SIZE: i32 = 8192;

/// A `size × size` RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    size: u32,

    /// Row-major pixels: `pixels[y * size + x]`.
    pixels: Vec<Colour>,
}

/// Inclusive pixel bounds of a shape, already clipped to the canvas.
#[derive(Debug, Clone, Copy)]
struct Span {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
}

impl Canvas {
    /// Allocate a fully transparent canvas.
    ///
    /// Sizes outside `1..=MAX_SIZE` are rejected before anything is allocated.
    pub fn new(size: i32) -> Result<Self> {
        if !(1..=MAX_SIZE).contains(&size) {
            return Err(IconError::InvalidSize { size });
        }

        let size = size as u32;
        Ok(Self {
            size,
            pixels: vec![Colour::TRANSPARENT; (size as usize) * (size as usize)],
        })
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.pixels.get(self.index(x as i64, y as i64)).copied()
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Copy the buffer into an `image` RGBA buffer for encoding.
    pub fn to_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.size, self.size, |x, y| {
            Rgba(self.pixels[self.index(x as i64, y as i64)].to_rgba())
        })
    }

    /// Composite a filled ellipse.
    pub fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, colour: Colour) {
        if colour.is_transparent() || rx < 0.0 || ry < 0.0 {
            return;
        }

        let Some(span) = self.clip(cx - rx, cy - ry, cx + rx, cy + ry) else {
            return;
        };

        self.fill_span(span, colour, |x, y| {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            dx * dx * ry * ry + dy * dy * rx * rx <= rx * rx * ry * ry
        });
    }

    /// Composite a filled circle.
    pub fn fill_circle(&mut self, center: Point, radius: f64, colour: Colour) {
        self.fill_ellipse(center.x, center.y, radius, radius, colour);
    }

    /// Composite a ring `width` pixels wide lying just inside `radius`.
    pub fn stroke_circle(&mut self, center: Point, radius: f64, colour: Colour, width: f64) {
        if colour.is_transparent() || radius < 0.0 || width <= 0.0 {
            return;
        }

        let Some(span) = self.clip(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        ) else {
            return;
        };

        let inner = radius - width;
        self.fill_span(span, colour, |x, y| {
            let d = Point::new(x as f64, y as f64).distance(center);
            d <= radius && d > inner
        });
    }

    /// Composite a straight line of the given stroke width.
    ///
    /// Endpoints snap to whole pixels; the width rounds to the nearest
    /// integer, never below one. Ends are rounded.
    pub fn draw_line(&mut self, from: Point, to: Point, colour: Colour, width: f64) {
        if colour.is_transparent() {
            return;
        }

        let width = width.round().max(1.0);
        let half = width / 2.0;
        let (ax, ay) = from.to_pixel();
        let (bx, by) = to.to_pixel();
        let (ax, ay, bx, by) = (ax as f64, ay as f64, bx as f64, by as f64);

        let Some(span) = self.clip(
            ax.min(bx) - half,
            ay.min(by) - half,
            ax.max(bx) + half,
            ay.max(by) + half,
        ) else {
            return;
        };

        let (dx, dy) = (bx - ax, by - ay);
        let length_sq = dx * dx + dy * dy;

        self.fill_span(span, colour, |x, y| {
            let (px, py) = (x as f64 - ax, y as f64 - ay);
            let t = if length_sq > 0.0 {
                ((px * dx + py * dy) / length_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (ex, ey) = (px - t * dx, py - t * dy);
            ex * ex + ey * ey <= half * half
        });
    }

    /// Draw a polyline as consecutive segments in a single colour.
    pub fn draw_polyline(&mut self, points: &[Point], colour: Colour, width: f64) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], colour, width);
        }
    }

    /// Scan-line fill of a simple polygon. Fewer than three points draw nothing.
    pub fn fill_polygon(&mut self, points: &[Point], colour: Colour) {
        if colour.is_transparent() || points.len() < 3 {
            return;
        }

        let vertices: Vec<(f64, f64)> = points
            .iter()
            .map(|p| {
                let (x, y) = p.to_pixel();
                (x as f64, y as f64)
            })
            .collect();

        let (min_y, max_y) = vertices
            .iter()
            .fold((f64::MAX, f64::MIN), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
        let (min_x, max_x) = vertices
            .iter()
            .fold((f64::MAX, f64::MIN), |(lo, hi), &(x, _)| (lo.min(x), hi.max(x)));

        let Some(span) = self.clip(min_x, min_y, max_x, max_y) else {
            return;
        };

        let mut crossings = Vec::with_capacity(vertices.len());
        for y in span.y0..=span.y1 {
            let sy = y as f64;
            crossings.clear();

            for (i, &(x0, y0)) in vertices.iter().enumerate() {
                let (x1, y1) = vertices[(i + 1) % vertices.len()];
                if y0 == y1 {
                    continue;
                }
                let (top, bottom) = if y0 < y1 { (y0, y1) } else { (y1, y0) };
                if sy >= top && sy < bottom {
                    crossings.push(x0 + (sy - y0) * (x1 - x0) / (y1 - y0));
                }
            }

            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                let start = (pair[0].ceil() as i64).max(span.x0);
                let end = (pair[1].floor() as i64).min(span.x1);
                for x in start..=end {
                    self.blend(x, y, colour);
                }
            }
        }
    }

    /// Composite an axis-aligned rectangle covering `[x, x + w) × [y, y + h)`.
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, colour: Colour) {
        self.fill_rounded_rect(x, y, w, h, 0.0, colour);
    }

    /// Composite a rectangle outline `width` pixels wide, drawn inside the bounds.
    pub fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, colour: Colour, width: f64) {
        self.stroke_rounded_rect(x, y, w, h, 0.0, colour, width);
    }

    /// Composite a rectangle with quarter-circle corners.
    ///
    /// The corner radius is clamped to half the shorter side.
    pub fn fill_rounded_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        colour: Colour,
    ) {
        if colour.is_transparent() {
            return;
        }
        let Some(rect) = RoundedRect::new(x, y, w, h, radius) else {
            return;
        };
        let Some(span) = self.clip(rect.x0, rect.y0, rect.x1, rect.y1) else {
            return;
        };

        self.fill_span(span, colour, |px, py| rect.contains(px as f64, py as f64));
    }

    /// Composite a rounded-rectangle outline `width` pixels wide, drawn inside the bounds.
    #[allow(clippy::too_many_arguments)]
    pub fn stroke_rounded_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        colour: Colour,
        width: f64,
    ) {
        if colour.is_transparent() || width <= 0.0 {
            return;
        }
        let Some(outer) = RoundedRect::new(x, y, w, h, radius) else {
            return;
        };
        let inner = RoundedRect::new(
            x + width,
            y + width,
            w - 2.0 * width,
            h - 2.0 * width,
            (radius - width).max(0.0),
        );
        let Some(span) = self.clip(outer.x0, outer.y0, outer.x1, outer.y1) else {
            return;
        };

        self.fill_span(span, colour, |px, py| {
            let (px, py) = (px as f64, py as f64);
            outer.contains(px, py) && !inner.is_some_and(|r| r.contains(px, py))
        });
    }

    /// Draw a short label centred on `(cx, cy)` with the built-in bitmap font.
    ///
    /// Nothing is drawn unless every character is available, so a failed
    /// call leaves the canvas untouched.
    pub fn draw_glyphs(
        &mut self,
        text: &str,
        cx: f64,
        cy: f64,
        font_size: f64,
        colour: Colour,
    ) -> Result<()> {
        let glyphs = text
            .chars()
            .map(|ch| font::glyph(ch).ok_or(IconError::UnsupportedGlyph { ch }))
            .collect::<Result<Vec<_>>>()?;

        if glyphs.is_empty() {
            return Ok(());
        }

        let scale = font::pixel_scale(font_size);
        let (width, height) = font::text_extent(glyphs.len(), scale);
        let left = (cx - width as f64 / 2.0).floor();
        let top = (cy - height as f64 / 2.0).floor();
        let scale_f = scale as f64;

        for (i, rows) in glyphs.iter().enumerate() {
            let origin_x = left + (i as u32 * font::ADVANCE * scale) as f64;
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..font::GLYPH_WIDTH {
                    if bits & (1 << (font::GLYPH_WIDTH - 1 - col)) != 0 {
                        self.fill_rect(
                            origin_x + col as f64 * scale_f,
                            top + row as f64 * scale_f,
                            scale_f,
                            scale_f,
                            colour,
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// Clip a floating-point bounding box to inclusive pixel bounds.
    fn clip(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Option<Span> {
        let limit = self.size as i64 - 1;
        let span = Span {
            x0: (min_x.ceil() as i64).max(0),
            y0: (min_y.ceil() as i64).max(0),
            x1: (max_x.floor() as i64).min(limit),
            y1: (max_y.floor() as i64).min(limit),
        };

        (span.x0 <= span.x1 && span.y0 <= span.y1).then_some(span)
    }

    fn fill_span(&mut self, span: Span, colour: Colour, covers: impl Fn(i64, i64) -> bool) {
        for y in span.y0..=span.y1 {
            for x in span.x0..=span.x1 {
                if covers(x, y) {
                    self.blend(x, y, colour);
                }
            }
        }
    }

    fn blend(&mut self, x: i64, y: i64, colour: Colour) {
        let limit = self.size as i64;
        if x < 0 || y < 0 || x >= limit || y >= limit {
            return;
        }
        let idx = self.index(x, y);
        self.pixels[idx] = colour.over(self.pixels[idx]);
    }

    fn index(&self, x: i64, y: i64) -> usize {
        y as usize * self.size as usize + x as usize
    }
}

/// A rounded rectangle over inclusive pixel bounds.
#[derive(Debug, Clone, Copy)]
struct RoundedRect {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    radius: f64,
}

impl RoundedRect {
    /// Bounds are `[x, x + w) × [y, y + h)` after snapping to whole pixels.
    fn new(x: f64, y: f64, w: f64, h: f64, radius: f64) -> Option<Self> {
        let x0 = x.round();
        let y0 = y.round();
        let x1 = (x + w).round() - 1.0;
        let y1 = (y + h).round() - 1.0;
        if x1 < x0 || y1 < y0 {
            return None;
        }

        let max_radius = ((x1 - x0).min(y1 - y0) / 2.0).max(0.0);
        Some(Self {
            x0,
            y0,
            x1,
            y1,
            radius: radius.clamp(0.0, max_radius),
        })
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        if x < self.x0 || x > self.x1 || y < self.y0 || y > self.y1 {
            return false;
        }
        let r = self.radius;
        let nx = x.clamp(self.x0 + r, self.x1 - r);
        let ny = y.clamp(self.y0 + r, self.y1 - r);
        let (dx, dy) = (x - nx, y - ny);
        dx * dx + dy * dy <= r * r
    }
}
