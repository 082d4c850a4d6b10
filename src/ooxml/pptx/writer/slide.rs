/// Slide types and implementation for PPTX presentations.
use crate::common::Result;
use crate::common::unit::Rect;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

use super::super::format::{LineFormat, TextFormat};
use super::shape::{Shape, ShapeKind};

/// A slide in a presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// Slide ID as listed in `p:sldIdLst` (256 and up)
    pub(crate) slide_id: u32,
    /// Human-readable name of the slide (its heading); written as `p:cSld/@name`
    pub(crate) name: String,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<Shape>,
}

impl Slide {
    pub(crate) fn new(slide_id: u32, name: impl Into<String>) -> Self {
        Self {
            slide_id,
            name: name.into(),
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Get the slide name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the shapes on the slide.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    fn push(&mut self, kind: ShapeKind) -> &mut Shape {
        // IDs: 1=shape tree group, 2+=shapes
        let shape_id = (self.shapes.len() + 2) as u32;
        let index = self.shapes.len();
        self.shapes.push(Shape::new(shape_id, kind));
        &mut self.shapes[index]
    }

    /// Add a text box; each string becomes one paragraph.
    pub fn add_text_box(
        &mut self,
        rect: Rect,
        paragraphs: Vec<String>,
        format: TextFormat,
    ) -> &mut Shape {
        self.push(ShapeKind::TextBox {
            rect,
            paragraphs,
            format,
            word_wrap: true,
        })
    }

    /// Add a rectangle with an optional solid fill and outline.
    pub fn add_rectangle(
        &mut self,
        rect: Rect,
        fill_color: Option<String>,
        line: Option<LineFormat>,
    ) -> &mut Shape {
        self.push(ShapeKind::Rectangle {
            rect,
            fill_color,
            line,
        })
    }

    /// Add a straight line spanning `rect` diagonally.
    ///
    /// A zero width gives a vertical line, a zero height a horizontal one.
    pub fn add_line(&mut self, rect: Rect, line: LineFormat) -> &mut Shape {
        self.push(ShapeKind::Line { rect, line })
    }

    /// Add a table. `rows[0]` is the header row; every row must have the same
    /// number of cells (callers normalize ragged input).
    pub fn add_table(
        &mut self,
        rect: Rect,
        rows: Vec<Vec<String>>,
        header_fill: Option<String>,
        format: TextFormat,
    ) -> &mut Shape {
        self.push(ShapeKind::Table {
            rect,
            rows,
            header_fill,
            format,
        })
    }

    /// Collect every text paragraph on the slide, table cells included.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for shape in &self.shapes {
            match shape.kind() {
                ShapeKind::TextBox { paragraphs, .. } => {
                    out.extend(paragraphs.iter().map(String::as_str));
                },
                ShapeKind::Table { rows, .. } => {
                    out.extend(rows.iter().flatten().map(String::as_str));
                },
                ShapeKind::Rectangle { .. } | ShapeKind::Line { .. } => {},
            }
        }
        out
    }

    /// Generate the slide part XML.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.shapes.len() * 512);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;
        write!(
            xml,
            r#"<p:cSld name="{}">"#,
            crate::common::xml::escape_xml(&self.name)
        )?;
        xml.push_str("<p:spTree>");
        xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
        xml.push_str(r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#);

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_ids_start_after_tree() {
        let mut slide = Slide::new(256, "SWOT");
        let first = slide
            .add_text_box(Rect::default(), vec!["a".into()], TextFormat::default())
            .shape_id();
        let second = slide.add_rectangle(Rect::default(), None, None).shape_id();
        assert_eq!(first, 2);
        assert_eq!(second, 3);
        assert_eq!(slide.shape_count(), 2);
    }

    #[test]
    fn test_texts_include_table_cells() {
        let mut slide = Slide::new(256, "Benchmark");
        slide.add_text_box(Rect::default(), vec!["Heading".into()], TextFormat::default());
        slide.add_table(
            Rect::default(),
            vec![vec!["Capability".into()], vec!["Speed".into()]],
            None,
            TextFormat::default(),
        );
        assert_eq!(slide.texts(), vec!["Heading", "Capability", "Speed"]);
    }

    #[test]
    fn test_slide_xml_envelope() {
        let mut slide = Slide::new(256, "R&D");
        slide.add_line(Rect::new(0, 0, 10, 0), LineFormat::new("000000", 100));
        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:cSld name="R&amp;D">"#));
        assert!(xml.contains("<p:cxnSp>"));
        assert!(xml.ends_with("</p:sld>"));
    }
}
