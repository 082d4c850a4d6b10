/// Presentation writer for PPTX.
use crate::common::Result;
use crate::common::unit::inches;
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::{PackURI, PackageWriter, Part, Relationships};
use std::fmt::Write as FmtWrite;

use super::super::template::{self, DocumentProperties};
use super::slide::Slide;

/// 16:9 canvas width: 13.333 inches.
pub const WIDESCREEN_WIDTH: i64 = 12_192_000;
/// 16:9 canvas height: 7.5 inches.
pub const WIDESCREEN_HEIGHT: i64 = 6_858_000;

/// A PowerPoint presentation under construction.
///
/// All slides share the presentation's canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<Slide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
}

impl Presentation {
    /// Create an empty presentation with the given canvas size in EMU.
    pub fn new(slide_width: i64, slide_height: i64) -> Self {
        Self {
            slides: Vec::new(),
            slide_width,
            slide_height,
        }
    }

    /// Create an empty 16:9 presentation (13.333in × 7.5in).
    pub fn widescreen() -> Self {
        Self::new(WIDESCREEN_WIDTH, WIDESCREEN_HEIGHT)
    }

    /// Append a new empty slide and return it.
    pub fn add_slide(&mut self, name: impl Into<String>) -> &mut Slide {
        let slide_id = (self.slides.len() + 256) as u32;
        let index = self.slides.len();
        self.slides.push(Slide::new(slide_id, name));
        &mut self.slides[index]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Generate presentation.xml content with the given slide relationship IDs.
    ///
    /// The master is always `rId1`; `slide_rel_ids[i]` belongs to slide `i`.
    pub(crate) fn generate_presentation_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.slides.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        write!(
            xml,
            r#"<p:notesSz cx="{}" cy="{}"/>"#,
            inches(7.5),
            inches(10.0)
        )?;
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Assemble the complete package: properties, presentation part, master,
    /// layout, theme, and one part per slide.
    pub fn to_package(&self, props: &DocumentProperties) -> Result<PackageWriter> {
        let mut writer = PackageWriter::new();

        writer.add_package_rel(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
        writer.add_package_rel(rt::CORE_PROPERTIES, "docProps/core.xml");
        writer.add_package_rel(rt::EXTENDED_PROPERTIES, "docProps/app.xml");

        writer.add_part(Part::new(
            PackURI::new("/docProps/core.xml")?,
            ct::OPC_CORE_PROPERTIES,
            props.core_xml(),
        ));
        writer.add_part(Part::new(
            PackURI::new("/docProps/app.xml")?,
            ct::OFC_EXTENDED_PROPERTIES,
            props.app_xml(self.slides.len()),
        ));

        // Presentation relationships: master first so it is always rId1
        let mut pres_rels = Relationships::new();
        pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        let slide_rel_ids: Vec<String> = (1..=self.slides.len())
            .map(|n| pres_rels.add(rt::SLIDE, format!("slides/slide{}.xml", n)))
            .collect();
        pres_rels.add(rt::PRES_PROPS, "presProps.xml");
        pres_rels.add(rt::VIEW_PROPS, "viewProps.xml");
        pres_rels.add(rt::THEME, "theme/theme1.xml");
        pres_rels.add(rt::TABLE_STYLES, "tableStyles.xml");

        writer.add_part(
            Part::new(
                PackURI::new("/ppt/presentation.xml")?,
                ct::PML_PRESENTATION_MAIN,
                self.generate_presentation_xml(&slide_rel_ids)?,
            )
            .with_rels(pres_rels),
        );

        let mut master_rels = Relationships::new();
        master_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.add(rt::THEME, "../theme/theme1.xml");
        writer.add_part(
            Part::new(
                PackURI::new("/ppt/slideMasters/slideMaster1.xml")?,
                ct::PML_SLIDE_MASTER,
                template::SLIDE_MASTER_XML,
            )
            .with_rels(master_rels),
        );

        let mut layout_rels = Relationships::new();
        layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        writer.add_part(
            Part::new(
                PackURI::new("/ppt/slideLayouts/slideLayout1.xml")?,
                ct::PML_SLIDE_LAYOUT,
                template::SLIDE_LAYOUT_BLANK_XML,
            )
            .with_rels(layout_rels),
        );

        writer.add_part(Part::new(
            PackURI::new("/ppt/theme/theme1.xml")?,
            ct::OFC_THEME,
            template::THEME_XML,
        ));
        writer.add_part(Part::new(
            PackURI::new("/ppt/presProps.xml")?,
            ct::PML_PRES_PROPS,
            template::PRES_PROPS_XML,
        ));
        writer.add_part(Part::new(
            PackURI::new("/ppt/viewProps.xml")?,
            ct::PML_VIEW_PROPS,
            template::VIEW_PROPS_XML,
        ));
        writer.add_part(Part::new(
            PackURI::new("/ppt/tableStyles.xml")?,
            ct::PML_TABLE_STYLES,
            template::TABLE_STYLES_XML,
        ));

        for (index, slide) in self.slides.iter().enumerate() {
            let mut slide_rels = Relationships::new();
            slide_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
            writer.add_part(
                Part::new(
                    PackURI::new(format!("/ppt/slides/slide{}.xml", index + 1))?,
                    ct::PML_SLIDE,
                    slide.to_xml()?,
                )
                .with_rels(slide_rels),
            );
        }

        Ok(writer)
    }

    /// Serialize the presentation to .pptx bytes.
    pub fn to_bytes(&self, props: &DocumentProperties) -> Result<Vec<u8>> {
        Ok(self.to_package(props)?.to_bytes()?)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::widescreen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Rect;
    use crate::ooxml::pptx::TextFormat;

    #[test]
    fn test_create_presentation() {
        let pres = Presentation::widescreen();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 12_192_000);
        assert_eq!(pres.slide_height(), 6_858_000);
    }

    #[test]
    fn test_add_slide_ids() {
        let mut pres = Presentation::widescreen();
        assert_eq!(pres.add_slide("Title").slide_id(), 256);
        assert_eq!(pres.add_slide("Agenda").slide_id(), 257);
        assert_eq!(pres.slide(1).map(Slide::name), Some("Agenda"));
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = Presentation::widescreen();
        pres.add_slide("One");
        pres.add_slide("Two");
        let xml = pres
            .generate_presentation_xml(&["rId2".to_string(), "rId3".to_string()])
            .unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));
    }

    #[test]
    fn test_package_parts() {
        let mut pres = Presentation::widescreen();
        pres.add_slide("Only").add_text_box(
            Rect::from_inches(1.0, 1.0, 4.0, 1.0),
            vec!["Hello".to_string()],
            TextFormat::default(),
        );
        let package = pres.to_package(&DocumentProperties::default()).unwrap();
        let names: Vec<&str> = package
            .parts()
            .iter()
            .map(|p| p.partname().as_str())
            .collect();
        assert!(names.contains(&"/ppt/presentation.xml"));
        assert!(names.contains(&"/ppt/slides/slide1.xml"));
        assert!(names.contains(&"/ppt/theme/theme1.xml"));
        assert!(names.contains(&"/ppt/slideLayouts/slideLayout1.xml"));

        let pres_part = &package.parts()[2];
        assert_eq!(pres_part.rels().iter().next().map(|r| r.r_id()), Some("rId1"));
        assert_eq!(pres_part.rels().len(), 6);
    }
}
