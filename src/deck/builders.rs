//! Slide builders, one per report section.
//!
//! Optional sections take a [`Section`] and return `None` without touching
//! the presentation when it is `Absent`.

use super::layout::{
    draw_bullet_list, draw_heading, draw_quadrant_grid, draw_section_label, draw_small_label,
    draw_table,
};
use super::style::{CELL_TITLE_SIZE, DeckStyle, QUADRANT_TITLE_SIZE};
use crate::common::unit::{Rect, inches};
use crate::model::{AnalysisResult, AnsoffMatrix, Benchmark, Recommendation, Section, SwotAnalysis};
use crate::ooxml::pptx::{Presentation, Slide};
use chrono::NaiveDate;

pub const AGENDA_HEADING: &str = "Agenda";
pub const SNAPSHOT_HEADING: &str = "Executive Snapshot";
pub const SWOT_HEADING: &str = "SWOT";
pub const ANSOFF_HEADING: &str = "Ansoff Matrix";
pub const BENCHMARK_HEADING: &str = "Competitor Benchmark";
pub const RECOMMENDATIONS_HEADING: &str = "Top 5 Recommendations — Impact × Effort";
pub const APPENDIX_HEADING: &str = "Appendix — Raw Analysis JSON";

pub const PRODUCTS_AXIS_LABEL: &str = "Existing→New Products";
pub const MARKETS_AXIS_LABEL: &str = "Existing→New Markets";
pub const IMPACT_AXIS_LABEL: &str = "Impact ↑";
pub const EFFORT_AXIS_LABEL: &str = "Effort →";
pub const QUADRANT_LEGEND: &str = "Q1: Quick Wins   Q2: Strategic Bets   Q3: Fill-ins   Q4: Long Shots";
pub const ANSOFF_FOCUS_LINE: &str = "Focus: Execute 1–2 high-impact Ansoff plays next quarter.";

/// Snapshot lines never exceed this count.
pub const MAX_SNAPSHOT_LINES: usize = 6;
/// Items per SWOT category quoted on the snapshot.
const SNAPSHOT_ITEMS_PER_CATEGORY: usize = 2;

const BODY_TOP_INCHES: f64 = 1.2;
const BODY_HEIGHT_INCHES: f64 = 5.5;
const GRID_TOP_INCHES: f64 = 1.4;
const GRID_HEIGHT_INCHES: f64 = 4.6;
const REC_LINE_INCHES: f64 = 0.42;

fn body_region(style: &DeckStyle) -> Rect {
    style
        .canvas
        .band(inches(BODY_TOP_INCHES), inches(BODY_HEIGHT_INCHES))
}

fn grid_region(style: &DeckStyle) -> Rect {
    style
        .canvas
        .band(inches(GRID_TOP_INCHES), inches(GRID_HEIGHT_INCHES))
}

/// Title slide: accent bar, `company × product` headline and dated subtitle.
pub fn title_slide<'p>(
    pres: &'p mut Presentation,
    style: &DeckStyle,
    company: &str,
    product: &str,
    date: NaiveDate,
) -> &'p mut Slide {
    let headline = format!("{} × {}", company, product);
    let subtitle = format!("Strategy Snapshot — {}", date.format("%b %d, %Y"));
    let canvas = style.canvas;
    let margin = canvas.margin();

    let slide = pres.add_slide(headline.clone());
    slide.add_rectangle(
        Rect::new(margin, margin, inches(2.2), inches(0.15)),
        Some(style.primary.clone()),
        None,
    );
    let title_box = canvas.band(margin + inches(0.3), inches(1.0));
    slide.add_text_box(title_box, vec![headline], style.title());
    slide.add_text_box(
        canvas.band(title_box.bottom() + inches(0.2), inches(0.9)),
        vec![subtitle],
        style.subtitle(),
    );
    slide
}

pub fn agenda_slide<'p>(pres: &'p mut Presentation, style: &DeckStyle, items: &[String]) -> &'p mut Slide {
    let slide = pres.add_slide(AGENDA_HEADING);
    draw_heading(slide, style, AGENDA_HEADING);
    draw_bullet_list(slide, style, body_region(style), items);
    slide
}

/// Heuristic one-line summaries, at most [`MAX_SNAPSHOT_LINES`].
///
/// The first two items of each non-empty SWOT category, an Ansoff focus
/// note when the matrix has content, then the top recommendation's title.
pub fn snapshot_lines(result: &AnalysisResult) -> Vec<String> {
    let mut lines = Vec::new();
    if let Section::Present(swot) = result.swot() {
        for (label, items) in swot.categories() {
            if !items.is_empty() {
                let head: Vec<&str> = items
                    .iter()
                    .take(SNAPSHOT_ITEMS_PER_CATEGORY)
                    .map(String::as_str)
                    .collect();
                lines.push(format!("{}: {}", label, head.join(", ")));
            }
        }
    }
    if result.ansoff().is_present() {
        lines.push(ANSOFF_FOCUS_LINE.to_string());
    }
    if let Some(first) = result.recommendations.first() {
        lines.push(format!("Top priority: {}", rec_title(first, "First recommendation")));
    }
    lines.truncate(MAX_SNAPSHOT_LINES);
    lines
}

pub fn snapshot_slide<'p>(pres: &'p mut Presentation, style: &DeckStyle, lines: &[String]) -> &'p mut Slide {
    let slide = pres.add_slide(SNAPSHOT_HEADING);
    draw_heading(slide, style, SNAPSHOT_HEADING);
    draw_bullet_list(slide, style, body_region(style), lines);
    slide
}

/// Four independently placed labeled blocks in a 2×2 arrangement.
pub fn swot_slide<'p>(
    pres: &'p mut Presentation,
    style: &DeckStyle,
    swot: Section<'_, SwotAnalysis>,
) -> Option<&'p mut Slide> {
    let swot = swot.as_option()?;
    let canvas = style.canvas;
    let margin = canvas.margin();
    let box_w = (canvas.width - 3 * margin) / 2;
    let box_h = (canvas.height - 2 * margin - inches(1.0)) / 2;
    let top = inches(BODY_TOP_INCHES);
    let origins = [
        (margin, top),
        (margin + box_w + margin, top),
        (margin, top + box_h + margin),
        (margin + box_w + margin, top + box_h + margin),
    ];

    let slide = pres.add_slide(SWOT_HEADING);
    draw_heading(slide, style, SWOT_HEADING);
    for ((label, items), (x, y)) in swot.categories().into_iter().zip(origins) {
        draw_section_label(slide, style, Rect::new(x, y, box_w, inches(0.35)), label, CELL_TITLE_SIZE);
        let bullets = Rect::new(x, y + inches(0.4), box_w, box_h - inches(0.4));
        draw_bullet_list(slide, style, bullets, items);
    }
    Some(slide)
}

/// Quadrant grid with the four growth strategies and both axis labels.
pub fn ansoff_slide<'p>(
    pres: &'p mut Presentation,
    style: &DeckStyle,
    ansoff: Section<'_, AnsoffMatrix>,
) -> Option<&'p mut Slide> {
    let ansoff = ansoff.as_option()?;
    let grid = grid_region(style);

    let slide = pres.add_slide(ANSOFF_HEADING);
    draw_heading(slide, style, ANSOFF_HEADING);
    let quads = draw_quadrant_grid(slide, style, grid);
    for ((label, items), quad) in ansoff.quadrants().into_iter().zip(quads) {
        let label_box = Rect::new(
            quad.x + inches(0.1),
            quad.y + inches(0.05),
            quad.width - inches(0.2),
            inches(0.3),
        );
        draw_section_label(slide, style, label_box, label, QUADRANT_TITLE_SIZE);
        let bullets = Rect::new(
            quad.x + inches(0.1),
            quad.y + inches(0.45),
            quad.width - inches(0.2),
            quad.height - inches(0.6),
        );
        draw_bullet_list(slide, style, bullets, items);
    }

    draw_small_label(
        slide,
        style,
        PRODUCTS_AXIS_LABEL,
        grid.x + grid.width / 2 - inches(1.2),
        grid.y - inches(0.35),
    );
    draw_small_label(
        slide,
        style,
        MARKETS_AXIS_LABEL,
        grid.x - inches(0.1),
        grid.y + grid.height / 2 + inches(0.05),
    );
    Some(slide)
}

/// Header row and body rows of the benchmark table.
///
/// Columns are the capability, the focal company, then each peer in order.
pub fn benchmark_rows(company: &str, bench: &Benchmark) -> (Vec<String>, Vec<Vec<String>>) {
    let mut header = Vec::with_capacity(2 + bench.peers.len());
    header.push("Capability".to_string());
    header.push(company.to_string());
    header.extend(bench.peers.iter().cloned());

    let body = bench
        .table
        .iter()
        .map(|row| {
            let mut cells = Vec::with_capacity(header.len());
            cells.push(row.capability.clone());
            cells.push(row.rating_for(company).to_string());
            cells.extend(bench.peers.iter().map(|peer| row.rating_for(peer).to_string()));
            cells
        })
        .collect();
    (header, body)
}

pub fn benchmark_slide<'p>(
    pres: &'p mut Presentation,
    style: &DeckStyle,
    company: &str,
    bench: Section<'_, Benchmark>,
) -> Option<&'p mut Slide> {
    let bench = bench.as_option()?;
    let (header, body) = benchmark_rows(company, bench);

    let slide = pres.add_slide(BENCHMARK_HEADING);
    draw_heading(slide, style, BENCHMARK_HEADING);
    let region = style.canvas.band(inches(BODY_TOP_INCHES), inches(5.2));
    draw_table(slide, style, region, header, body);
    Some(slide)
}

/// Group the first `limit` recommendations by quadrant, keeping their
/// 1-based list position. Index `i` of the result is grid quadrant `i`.
pub fn bucket_recommendations(recs: &[Recommendation], limit: usize) -> [Vec<(usize, &Recommendation)>; 4] {
    let mut buckets: [Vec<(usize, &Recommendation)>; 4] = Default::default();
    for (idx, rec) in recs.iter().take(limit).enumerate() {
        buckets[rec.quadrant().grid_index()].push((idx + 1, rec));
    }
    buckets
}

fn rec_title<'a>(rec: &'a Recommendation, fallback: &'a str) -> &'a str {
    let title = rec.title.trim();
    if title.is_empty() { fallback } else { title }
}

/// Impact × effort grid holding the first `limit` recommendations.
pub fn recommendations_slide<'p>(
    pres: &'p mut Presentation,
    style: &DeckStyle,
    recs: Section<'_, [Recommendation]>,
    limit: usize,
) -> Option<&'p mut Slide> {
    let recs = recs.as_option()?;
    let grid = grid_region(style);
    let canvas = style.canvas;

    let slide = pres.add_slide(RECOMMENDATIONS_HEADING);
    draw_heading(slide, style, RECOMMENDATIONS_HEADING);
    let quads = draw_quadrant_grid(slide, style, grid);

    draw_small_label(slide, style, IMPACT_AXIS_LABEL, grid.x - inches(0.05), grid.y - inches(0.35));
    draw_small_label(
        slide,
        style,
        EFFORT_AXIS_LABEL,
        grid.right() - inches(0.8),
        grid.bottom() + inches(0.05),
    );

    for (bucket, quad) in bucket_recommendations(recs, limit).iter().zip(quads) {
        for (slot, (number, rec)) in bucket.iter().enumerate() {
            let fallback = format!("Rec {}", number);
            let line = format!("{}. {}", number, rec_title(rec, &fallback));
            let top = quad.y + inches(0.12) + slot as i64 * inches(REC_LINE_INCHES);
            slide.add_text_box(
                Rect::new(quad.x + inches(0.12), top, quad.width - inches(0.24), inches(0.5)),
                vec![line],
                style.body(),
            );
        }
    }

    slide.add_text_box(
        Rect::new(canvas.margin(), grid.bottom() + inches(0.2), canvas.content_width(), inches(0.6)),
        vec![QUADRANT_LEGEND.to_string()],
        style.legend(),
    );
    Some(slide)
}

/// Split `text` into pieces of at most `chunk_chars` characters.
///
/// Counts `char`s, so multi-byte text is never split inside a code point.
/// Empty text yields a single empty chunk.
pub fn chunk_text(text: &str, chunk_chars: usize) -> Vec<&str> {
    let chunk_chars = chunk_chars.max(1);
    let mut chunks = Vec::with_capacity(text.len() / chunk_chars + 1);
    let mut start = 0;
    let mut count = 0;
    for (offset, _) in text.char_indices() {
        if count == chunk_chars {
            chunks.push(&text[start..offset]);
            start = offset;
            count = 0;
        }
        count += 1;
    }
    if count > 0 || chunks.is_empty() {
        chunks.push(&text[start..]);
    }
    chunks
}

/// One monospaced slide per chunk; every slide after the first is titled
/// with a "(cont.)" suffix. Returns the number of slides added.
pub fn appendix_slides(pres: &mut Presentation, style: &DeckStyle, text: &str, chunk_chars: usize) -> usize {
    let chunks = chunk_text(text, chunk_chars);
    for (i, chunk) in chunks.iter().enumerate() {
        let heading = if i == 0 {
            APPENDIX_HEADING.to_string()
        } else {
            format!("{} (cont.)", APPENDIX_HEADING)
        };
        let slide = pres.add_slide(heading.clone());
        draw_heading(slide, style, &heading);
        let lines = chunk.split('\n').map(str::to_string).collect();
        slide.add_text_box(body_region(style), lines, style.mono());
    }
    chunks.len()
}
