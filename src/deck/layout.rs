//! Layout primitives.
//!
//! Stateless helpers that place shapes on a slide. Regions are EMU
//! rectangles; builders compute them from the [`Canvas`](super::style::Canvas).

use super::style::DeckStyle;
use crate::common::unit::{Rect, inches};
use crate::ooxml::pptx::{LineFormat, Slide};

/// Height of the heading band at the top margin.
pub const HEADING_HEIGHT_INCHES: f64 = 0.6;

const OUTLINE_WIDTH: i64 = 12_700;
const DIVIDER_WIDTH: i64 = 9_525;

/// Place a bold heading at the top margin. Empty text gives a blank heading.
pub fn draw_heading(slide: &mut Slide, style: &DeckStyle, text: &str) {
    let canvas = style.canvas;
    slide.add_text_box(
        canvas.band(canvas.margin(), inches(HEADING_HEIGHT_INCHES)),
        vec![text.to_string()],
        style.heading(),
    );
}

/// Place one paragraph per item inside `region`.
///
/// Returns `false` and leaves the region blank when `items` is empty.
pub fn draw_bullet_list(slide: &mut Slide, style: &DeckStyle, region: Rect, items: &[String]) -> bool {
    if items.is_empty() {
        return false;
    }
    slide.add_text_box(region, items.to_vec(), style.body());
    true
}

/// Draw an outlined box split by one vertical and one horizontal divider.
///
/// Returns the sub-regions as top-left, top-right, bottom-left, bottom-right.
pub fn draw_quadrant_grid(slide: &mut Slide, style: &DeckStyle, region: Rect) -> [Rect; 4] {
    slide.add_rectangle(
        region,
        Some("FFFFFF".to_string()),
        Some(LineFormat::new(&style.medium, OUTLINE_WIDTH)),
    );

    let quads = region.quadrants();
    let divider = LineFormat::new(&style.light, DIVIDER_WIDTH);
    // vertical, then horizontal
    slide.add_line(
        Rect::new(quads[1].x, region.y, 0, region.height),
        divider.clone(),
    );
    slide.add_line(Rect::new(region.x, quads[2].y, region.width, 0), divider);

    quads
}

/// Fit a row to exactly `width` cells: short rows are padded with empty
/// strings, long rows are truncated.
pub fn normalize_row(mut row: Vec<String>, width: usize) -> Vec<String> {
    if row.len() > width {
        tracing::warn!(
            cells = row.len(),
            expected = width,
            "Table row has extra cells; truncating"
        );
    }
    row.resize(width, String::new());
    row
}

/// Draw a table of `1 + body.len()` rows and `header.len()` columns.
///
/// Ragged body rows are normalized with [`normalize_row`] rather than
/// rejected. Returns the `(rows, columns)` actually drawn.
pub fn draw_table(
    slide: &mut Slide,
    style: &DeckStyle,
    region: Rect,
    header: Vec<String>,
    body: Vec<Vec<String>>,
) -> (usize, usize) {
    let width = header.len();
    let mut rows = Vec::with_capacity(1 + body.len());
    rows.push(header);
    rows.extend(body.into_iter().map(|row| normalize_row(row, width)));

    let shape = (rows.len(), width);
    slide.add_table(region, rows, Some(style.light.clone()), style.table());
    shape
}

/// A small annotation (axis labels) with its top-left corner at `(x, y)`.
pub fn draw_small_label(slide: &mut Slide, style: &DeckStyle, text: &str, x: i64, y: i64) {
    slide.add_text_box(
        Rect::new(x, y, inches(2.0), inches(0.3)),
        vec![text.to_string()],
        style.small(),
    );
}

/// A bold accent-colored label, used over SWOT cells and grid quadrants.
pub(crate) fn draw_section_label(slide: &mut Slide, style: &DeckStyle, region: Rect, text: &str, size: f64) {
    slide.add_text_box(region, vec![text.to_string()], style.section_label(size));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::{Presentation, ShapeKind};
    use proptest::prelude::*;

    fn slide() -> Presentation {
        let mut pres = Presentation::widescreen();
        pres.add_slide("Test");
        pres
    }

    #[test]
    fn test_empty_bullets_leave_region_blank() {
        let mut pres = slide();
        let s = &mut pres.slides[0];
        assert!(!draw_bullet_list(s, &DeckStyle::default(), Rect::default(), &[]));
        assert_eq!(s.shape_count(), 0);
    }

    #[test]
    fn test_heading_at_top_margin() {
        let mut pres = slide();
        let s = &mut pres.slides[0];
        draw_heading(s, &DeckStyle::default(), "");
        let rect = s.shapes()[0].rect();
        assert_eq!((rect.x, rect.y), (inches(0.6), inches(0.6)));
        assert_eq!(s.texts(), vec![""]);
    }

    #[test]
    fn test_grid_shapes_and_order() {
        let mut pres = slide();
        let s = &mut pres.slides[0];
        let region = Rect::from_inches(0.6, 1.4, 12.0, 4.6);
        let quads = draw_quadrant_grid(s, &DeckStyle::default(), region);

        assert_eq!(s.shape_count(), 3);
        assert!(matches!(s.shapes()[0].kind(), ShapeKind::Rectangle { .. }));
        assert!(matches!(s.shapes()[1].kind(), ShapeKind::Line { .. }));
        assert_eq!(quads[0].x, region.x);
        assert_eq!(quads[1].y, region.y);
        assert!(quads[1].x > quads[0].x);
        assert!(quads[2].y > quads[0].y);
        assert_eq!(quads[3].right(), region.right());
        assert_eq!(quads[3].bottom(), region.bottom());
    }

    #[test]
    fn test_table_pads_short_rows() {
        let mut pres = slide();
        let s = &mut pres.slides[0];
        let header = vec!["Capability".into(), "ACME".into(), "Rival A".into()];
        let body = vec![vec!["Speed".into()], vec!["Cost".into(), "Low".into(), "High".into(), "x".into()]];
        assert_eq!(draw_table(s, &DeckStyle::default(), Rect::default(), header, body), (3, 3));

        let rows = s.shapes()[0].table_rows().unwrap();
        assert_eq!(rows[1], vec!["Speed", "", ""]);
        assert_eq!(rows[2], vec!["Cost", "Low", "High"]);
    }

    proptest! {
        #[test]
        fn prop_normalized_rows_match_header(len in 0usize..10, width in 0usize..8) {
            let row = (0..len).map(|i| i.to_string()).collect();
            let out = normalize_row(row, width);
            prop_assert_eq!(out.len(), width);
            for (i, cell) in out.iter().enumerate() {
                if i < len {
                    prop_assert_eq!(cell, &i.to_string());
                } else {
                    prop_assert!(cell.is_empty());
                }
            }
        }
    }
}
