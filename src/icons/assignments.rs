//! Checklist shortcut icon: a document with four task rows.

use crate::error::Result;
use crate::render::Canvas;
use crate::types::{Point, Theme};

use super::{center_of, frac, stroke};

/// Rows drawn on the document.
pub const ROW_COUNT: usize = 4;

/// Leading rows shown as completed.
pub const COMPLETED_ROWS: usize = 2;

/// Axis-aligned pixel rectangle covering `[x, x + w) × [y, y + h)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// One task row: checkbox plus the bar standing in for its text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub checkbox: Bounds,
    pub text: Bounds,
    pub completed: bool,
}

/// Geometry of the checklist at a given size.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistLayout {
    pub document: Bounds,
    pub corner: f64,
    pub outline: f64,
    pub box_outline: f64,
    pub mark_width: f64,
    pub rows: Vec<Row>,
}

impl ChecklistLayout {
    pub fn new(size: f64) -> Self {
        let center = center_of(size);

        let doc_w = frac(size, 0.6);
        let doc_h = frac(size, 0.8);
        let document = Bounds {
            x: center.x - (doc_w / 2.0).floor(),
            y: center.y - (doc_h / 2.0).floor(),
            w: doc_w,
            h: doc_h,
        };

        let item_h = (doc_h / 6.0).floor();
        let margin = (size / 30.0).floor();
        // Enlarged from size/20 so the three-point checkmark clears the outline.
        let checkbox = (size / 12.0).floor();
        let bar_h = stroke(size, 32.0, 2.0);

        let rows = (0..ROW_COUNT)
            .map(|i| {
                let item_y = document.y + margin + i as f64 * (item_h + margin);
                let box_x = document.x + margin;
                let text_x = box_x + checkbox + margin;
                let text_mid = item_y + (item_h / 2.0).floor();

                Row {
                    checkbox: Bounds {
                        x: box_x,
                        y: item_y + ((item_h - checkbox) / 2.0).floor(),
                        w: checkbox,
                        h: checkbox,
                    },
                    text: Bounds {
                        x: text_x,
                        y: text_mid - (bar_h / 2.0).floor(),
                        w: doc_w - checkbox - 3.0 * margin,
                        h: bar_h,
                    },
                    completed: i < COMPLETED_ROWS,
                }
            })
            .collect();

        Self {
            document,
            corner: (size / 20.0).floor(),
            outline: stroke(size, 48.0, 1.0),
            box_outline: stroke(size, 96.0, 1.0),
            mark_width: stroke(size, 60.0, 1.0),
            rows,
        }
    }
}

/// Render the assignments shortcut at `size` pixels square.
pub fn render(size: i32, theme: &Theme) -> Result<Canvas> {
    let mut canvas = Canvas::new(size)?;
    let layout = ChecklistLayout::new(size as f64);

    let doc = layout.document;
    canvas.fill_rounded_rect(doc.x, doc.y, doc.w, doc.h, layout.corner, theme.white);
    canvas.stroke_rounded_rect(
        doc.x,
        doc.y,
        doc.w,
        doc.h,
        layout.corner,
        theme.primary,
        layout.outline,
    );

    for row in &layout.rows {
        let b = row.checkbox;
        let fill = if row.completed { theme.light } else { theme.white };
        canvas.fill_rect(b.x, b.y, b.w, b.h, fill);
        canvas.stroke_rect(b.x, b.y, b.w, b.h, theme.primary, layout.box_outline);

        if row.completed {
            let at = |fx: f64, fy: f64| Point::new(b.x + b.w * fx, b.y + b.h * fy);
            canvas.draw_polyline(
                &[at(0.2, 0.5), at(0.5, 0.8), at(0.8, 0.3)],
                theme.primary,
                layout.mark_width,
            );
        }

        let t = row.text;
        canvas.fill_rect(t.x, t.y, t.w, t.h, theme.primary);
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    /// Pixels strictly inside a checkbox's outline.
    fn interior(canvas: &Canvas, b: Bounds, outline: f64) -> Vec<Colour> {
        let (x0, y0) = ((b.x + outline) as u32, (b.y + outline) as u32);
        let (x1, y1) = ((b.x + b.w - outline) as u32, (b.y + b.h - outline) as u32);

        (y0..y1)
            .flat_map(|y| (x0..x1).map(move |x| (x, y)))
            .map(|(x, y)| canvas.get(x, y).unwrap())
            .collect()
    }

    #[test]
    fn test_layout_at_96() {
        let layout = ChecklistLayout::new(96.0);

        assert_eq!(
            layout.document,
            Bounds { x: 20.0, y: 10.0, w: 57.0, h: 76.0 }
        );
        assert_eq!(layout.rows.len(), ROW_COUNT);

        let first = layout.rows[0];
        assert_eq!(first.checkbox, Bounds { x: 23.0, y: 15.0, w: 8.0, h: 8.0 });
        assert!(first.completed);
        assert!(!layout.rows[2].completed);

        // Rows stack downward without overlapping and stay on the document.
        for pair in layout.rows.windows(2) {
            assert!(pair[1].checkbox.y >= pair[0].checkbox.y + pair[0].checkbox.h);
        }
        let last = layout.rows[ROW_COUNT - 1];
        assert!(last.text.y + last.text.h <= layout.document.y + layout.document.h);
        assert!(last.text.x + last.text.w <= layout.document.x + layout.document.w);
    }

    #[test]
    fn test_checkmarks_only_on_completed_rows() {
        let theme = Theme::default();
        let canvas = render(96, &theme).unwrap();
        let layout = ChecklistLayout::new(96.0);

        assert_eq!(layout.rows.len(), 4);
        for (i, row) in layout.rows.iter().enumerate() {
            let b = row.checkbox;
            assert_eq!(
                canvas.get(b.x as u32, b.y as u32),
                Some(theme.primary),
                "row {i} outline"
            );

            let inside = interior(&canvas, b, layout.box_outline);
            assert!(!inside.is_empty());
            let marks = inside.iter().filter(|&&c| c == theme.primary).count();

            if i < COMPLETED_ROWS {
                assert!(marks > 0, "row {i} should be checked");
                assert!(inside.iter().any(|&c| c == theme.light));
            } else {
                assert_eq!(marks, 0, "row {i} should be empty");
                assert!(inside.iter().all(|&c| c == theme.white));
            }
        }
    }

    #[test]
    fn test_text_bars_are_drawn() {
        let theme = Theme::default();
        let canvas = render(96, &theme).unwrap();
        let layout = ChecklistLayout::new(96.0);

        for row in &layout.rows {
            let t = row.text;
            let mid = (t.x + t.w / 2.0) as u32;
            assert_eq!(canvas.get(mid, t.y as u32), Some(theme.primary));
        }
    }

    #[test]
    fn test_document_center_is_opaque() {
        let canvas = render(96, &Theme::default()).unwrap();
        assert!(canvas.get(48, 48).unwrap().is_opaque());
    }
}
