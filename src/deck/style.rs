//! Deck look: canvas geometry, font sizes and run formats.

use crate::common::unit::{Rect, inches};
use crate::config::DeckConfig;
use crate::ooxml::pptx::{Presentation, TextFormat};
use crate::ooxml::pptx::writer::pres::{WIDESCREEN_HEIGHT, WIDESCREEN_WIDTH};

/// Outer margin on every side, in inches.
pub const MARGIN_INCHES: f64 = 0.6;

pub const TITLE_SIZE: f64 = 40.0;
pub const SUBTITLE_SIZE: f64 = 20.0;
pub const HEADING_SIZE: f64 = 28.0;
pub const BODY_SIZE: f64 = 18.0;
pub const CELL_TITLE_SIZE: f64 = 16.0;
pub const QUADRANT_TITLE_SIZE: f64 = 14.0;
pub const LEGEND_SIZE: f64 = 12.0;
pub const LABEL_SIZE: f64 = 11.0;
pub const MONO_SIZE: f64 = 10.0;

/// The slide canvas every builder lays out against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: i64,
    pub height: i64,
}

impl Canvas {
    pub const fn widescreen() -> Self {
        Self {
            width: WIDESCREEN_WIDTH,
            height: WIDESCREEN_HEIGHT,
        }
    }

    pub fn of(pres: &Presentation) -> Self {
        Self {
            width: pres.slide_width(),
            height: pres.slide_height(),
        }
    }

    #[inline]
    pub fn margin(&self) -> i64 {
        inches(MARGIN_INCHES)
    }

    /// Width between the left and right margins.
    pub fn content_width(&self) -> i64 {
        self.width - 2 * self.margin()
    }

    /// A margin-to-margin band starting at `top`.
    pub fn band(&self, top: i64, height: i64) -> Rect {
        Rect::new(self.margin(), top, self.content_width(), height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::widescreen()
    }
}

/// Fonts, colors and canvas resolved from a [`DeckConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct DeckStyle {
    pub canvas: Canvas,
    pub font: String,
    pub mono_font: String,
    pub primary: String,
    pub dark: String,
    pub medium: String,
    pub light: String,
}

impl DeckStyle {
    pub fn new(config: &DeckConfig, canvas: Canvas) -> Self {
        Self {
            canvas,
            font: config.font.clone(),
            mono_font: config.mono_font.clone(),
            primary: config.palette.primary.clone(),
            dark: config.palette.dark.clone(),
            medium: config.palette.medium.clone(),
            light: config.palette.light.clone(),
        }
    }

    fn text(&self, size: f64, color: &str) -> TextFormat {
        TextFormat::new().font(&self.font).size(size).color(color)
    }

    pub fn title(&self) -> TextFormat {
        self.text(TITLE_SIZE, &self.dark).bold(true)
    }

    pub fn subtitle(&self) -> TextFormat {
        self.text(SUBTITLE_SIZE, &self.medium)
    }

    pub fn heading(&self) -> TextFormat {
        self.text(HEADING_SIZE, &self.dark).bold(true)
    }

    pub fn body(&self) -> TextFormat {
        self.text(BODY_SIZE, &self.dark)
    }

    /// Bold accent-colored label over a block of bullets.
    pub fn section_label(&self, size: f64) -> TextFormat {
        self.text(size, &self.primary).bold(true)
    }

    /// Axis labels and annotations.
    pub fn small(&self) -> TextFormat {
        self.text(LABEL_SIZE, &self.medium)
    }

    pub fn legend(&self) -> TextFormat {
        self.text(LEGEND_SIZE, &self.medium)
    }

    pub fn table(&self) -> TextFormat {
        self.text(LEGEND_SIZE, &self.dark)
    }

    pub fn mono(&self) -> TextFormat {
        TextFormat::new()
            .font(&self.mono_font)
            .size(MONO_SIZE)
            .color(&self.dark)
    }
}

impl Default for DeckStyle {
    fn default() -> Self {
        Self::new(&DeckConfig::default(), Canvas::widescreen())
    }
}
