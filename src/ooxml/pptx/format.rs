//! Format types for PPTX shapes.

/// Text formatting properties shared by every run of a shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Text color in hex RGB (e.g., "FF0000" for red)
    pub color: Option<String>,
}

impl TextFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set font.
    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Builder method: set font size in points.
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Builder method: set italic.
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Builder method: set text color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Font size in the hundredths of a point used by `a:rPr/@sz`.
    pub(crate) fn size_hundredths(&self) -> Option<u32> {
        self.size.map(|pt| (pt * 100.0).round() as u32)
    }
}

/// Outline (stroke) settings for drawn shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFormat {
    /// Stroke color in hex RGB
    pub color: String,
    /// Stroke width in EMU
    pub width: i64,
}

impl LineFormat {
    pub fn new(color: impl Into<String>, width: i64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

/// Check that a color is six hexadecimal digits (e.g. "1F4E79").
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 6 && value.bytes().all(|b| b.is_ascii_hexdigit())
}
