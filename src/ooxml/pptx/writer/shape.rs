/// Shape types and XML emission for PPTX slides.
use crate::common::Result;
use crate::common::unit::Rect;
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

use super::super::format::{LineFormat, TextFormat};

/// A shape on a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    pub(crate) kind: ShapeKind,
}

/// The drawable kinds a slide can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// A text box; each entry of `paragraphs` becomes one paragraph.
    TextBox {
        rect: Rect,
        paragraphs: Vec<String>,
        format: TextFormat,
        word_wrap: bool,
    },
    Rectangle {
        rect: Rect,
        fill_color: Option<String>,
        line: Option<LineFormat>,
    },
    /// A straight connector from the top-left to the bottom-right corner of `rect`.
    Line { rect: Rect, line: LineFormat },
    /// A table; the first row is styled as the header.
    Table {
        rect: Rect,
        rows: Vec<Vec<String>>,
        header_fill: Option<String>,
        format: TextFormat,
    },
}

impl Shape {
    pub(crate) fn new(shape_id: u32, kind: ShapeKind) -> Self {
        Self { shape_id, kind }
    }

    #[inline]
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    #[inline]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// The bounding rectangle of the shape.
    pub fn rect(&self) -> Rect {
        match &self.kind {
            ShapeKind::TextBox { rect, .. }
            | ShapeKind::Rectangle { rect, .. }
            | ShapeKind::Line { rect, .. }
            | ShapeKind::Table { rect, .. } => *rect,
        }
    }

    /// Paragraphs of a text box, or `None` for other kinds.
    pub fn paragraphs(&self) -> Option<&[String]> {
        match &self.kind {
            ShapeKind::TextBox { paragraphs, .. } => Some(paragraphs),
            _ => None,
        }
    }

    /// Rows of a table, or `None` for other kinds.
    pub fn table_rows(&self) -> Option<&[Vec<String>]> {
        match &self.kind {
            ShapeKind::Table { rows, .. } => Some(rows),
            _ => None,
        }
    }

    /// Generate the `p:spTree` child element for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.kind {
            ShapeKind::TextBox {
                rect,
                paragraphs,
                format,
                word_wrap,
            } => {
                xml.push_str("<p:sp><p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#);

                xml.push_str("<p:spPr>");
                write_xfrm(xml, "a:xfrm", rect)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/>"#);
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                let wrap = if *word_wrap { "square" } else { "none" };
                write!(xml, r#"<a:bodyPr wrap="{}" rtlCol="0"><a:normAutofit/></a:bodyPr>"#, wrap)?;
                xml.push_str("<a:lstStyle/>");
                write_paragraphs(xml, paragraphs, format)?;
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
            ShapeKind::Rectangle {
                rect,
                fill_color,
                line,
            } => {
                xml.push_str("<p:sp><p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Rectangle {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str("<p:cNvSpPr/><p:nvPr/></p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, "a:xfrm", rect)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                match fill_color {
                    Some(color) => write_solid_fill(xml, color)?,
                    None => xml.push_str("<a:noFill/>"),
                }
                match line {
                    Some(line) => write_line(xml, line)?,
                    None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
                }
                xml.push_str("</p:spPr>");
                xml.push_str("</p:sp>");
            },
            ShapeKind::Line { rect, line } => {
                xml.push_str("<p:cxnSp><p:nvCxnSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Connector {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str("<p:cNvCxnSpPr/><p:nvPr/></p:nvCxnSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, "a:xfrm", rect)?;
                xml.push_str(r#"<a:prstGeom prst="line"><a:avLst/></a:prstGeom>"#);
                write_line(xml, line)?;
                xml.push_str("</p:spPr>");
                xml.push_str("</p:cxnSp>");
            },
            ShapeKind::Table {
                rect,
                rows,
                header_fill,
                format,
            } => {
                self.table_to_xml(xml, rect, rows, header_fill.as_deref(), format)?;
            },
        }

        Ok(())
    }

    fn table_to_xml(
        &self,
        xml: &mut String,
        rect: &Rect,
        rows: &[Vec<String>],
        header_fill: Option<&str>,
        format: &TextFormat,
    ) -> Result<()> {
        // every a:tr needs one a:tc per gridCol; short rows are padded
        let col_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        if col_count == 0 {
            tracing::debug!(shape_id = self.shape_id, "Skipping table without columns");
            return Ok(());
        }
        let row_count = rows.len();

        xml.push_str("<p:graphicFrame><p:nvGraphicFramePr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="Table {}"/>"#,
            self.shape_id, self.shape_id
        )?;
        xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#);
        xml.push_str("<p:nvPr/></p:nvGraphicFramePr>");
        write_xfrm(xml, "p:xfrm", rect)?;

        xml.push_str("<a:graphic>");
        write!(xml, r#"<a:graphicData uri="{}">"#, namespace::DML_TABLE)?;
        xml.push_str(r#"<a:tbl><a:tblPr firstRow="1" bandRow="1"/>"#);

        xml.push_str("<a:tblGrid>");
        for width in split_evenly(rect.width, col_count) {
            write!(xml, r#"<a:gridCol w="{}"/>"#, width)?;
        }
        xml.push_str("</a:tblGrid>");

        let heights = split_evenly(rect.height, row_count);
        for (row_index, row) in rows.iter().enumerate() {
            write!(xml, r#"<a:tr h="{}">"#, heights[row_index])?;
            let is_header = row_index == 0;
            let cell_format = if is_header {
                format.clone().bold(true)
            } else {
                format.clone()
            };
            let padding = std::iter::repeat_n(&EMPTY_CELL, col_count - row.len());
            for cell in row.iter().chain(padding) {
                xml.push_str("<a:tc><a:txBody><a:bodyPr/><a:lstStyle/>");
                write_paragraphs(xml, std::slice::from_ref(cell), &cell_format)?;
                xml.push_str("</a:txBody><a:tcPr>");
                if is_header && let Some(fill) = header_fill {
                    write_solid_fill(xml, fill)?;
                }
                xml.push_str("</a:tcPr></a:tc>");
            }
            xml.push_str("</a:tr>");
        }

        xml.push_str("</a:tbl></a:graphicData></a:graphic></p:graphicFrame>");
        Ok(())
    }
}

static EMPTY_CELL: String = String::new();

/// Split `total` into `parts` integer lengths that sum to `total`.
///
/// The remainder is given to the last part.
pub(crate) fn split_evenly(total: i64, parts: usize) -> Vec<i64> {
    if parts == 0 {
        return Vec::new();
    }
    let base = total / parts as i64;
    let mut out = vec![base; parts];
    if let Some(last) = out.last_mut() {
        *last += total - base * parts as i64;
    }
    out
}

fn write_xfrm(xml: &mut String, tag: &str, rect: &Rect) -> Result<()> {
    let mut buf = itoa::Buffer::new();
    write!(xml, "<{}>", tag)?;
    xml.push_str(r#"<a:off x=""#);
    xml.push_str(buf.format(rect.x));
    xml.push_str(r#"" y=""#);
    xml.push_str(buf.format(rect.y));
    xml.push_str(r#""/><a:ext cx=""#);
    xml.push_str(buf.format(rect.width));
    xml.push_str(r#"" cy=""#);
    xml.push_str(buf.format(rect.height));
    xml.push_str(r#""/>"#);
    write!(xml, "</{}>", tag)?;
    Ok(())
}

fn write_solid_fill(xml: &mut String, color: &str) -> Result<()> {
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        escape_xml(color)
    )?;
    Ok(())
}

fn write_line(xml: &mut String, line: &LineFormat) -> Result<()> {
    write!(xml, r#"<a:ln w="{}">"#, line.width)?;
    write_solid_fill(xml, &line.color)?;
    xml.push_str("</a:ln>");
    Ok(())
}

/// Write the run properties; child order follows CT_TextCharacterProperties
/// (fill before latin font).
fn write_run_props(xml: &mut String, tag: &str, format: &TextFormat) -> Result<()> {
    write!(xml, r#"<{} lang="en-US""#, tag)?;
    if let Some(size) = format.size_hundredths() {
        write!(xml, r#" sz="{}""#, size)?;
    }
    if let Some(true) = format.bold {
        xml.push_str(r#" b="1""#);
    }
    if let Some(true) = format.italic {
        xml.push_str(r#" i="1""#);
    }
    xml.push_str(r#" dirty="0">"#);

    if let Some(color) = &format.color {
        write_solid_fill(xml, color)?;
    }
    if let Some(font) = &format.font {
        write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
    }

    write!(xml, "</{}>", tag)?;
    Ok(())
}

/// Write one `a:p` per entry; an empty list still yields one empty paragraph,
/// since a text body must contain at least one. A vertical tab inside an entry
/// is a soft line break (`a:br`).
fn write_paragraphs(xml: &mut String, paragraphs: &[String], format: &TextFormat) -> Result<()> {
    if paragraphs.is_empty() {
        xml.push_str("<a:p>");
        write_run_props(xml, "a:endParaRPr", format)?;
        xml.push_str("</a:p>");
        return Ok(());
    }

    for text in paragraphs {
        xml.push_str("<a:p>");
        if text.is_empty() {
            write_run_props(xml, "a:endParaRPr", format)?;
        } else {
            for (index, line) in text.split('\u{0B}').enumerate() {
                if index > 0 {
                    xml.push_str("<a:br>");
                    write_run_props(xml, "a:rPr", format)?;
                    xml.push_str("</a:br>");
                }
                if line.is_empty() {
                    continue;
                }
                xml.push_str("<a:r>");
                write_run_props(xml, "a:rPr", format)?;
                write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
                xml.push_str("</a:r>");
            }
        }
        xml.push_str("</a:p>");
    }
    Ok(())
}
