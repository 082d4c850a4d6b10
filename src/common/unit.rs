//! Unit conversion utilities and slide geometry.
//!
//! All slide coordinates are English Metric Units (EMU): 914 400 per inch,
//! 12 700 per point.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert inches to EMU, rounding to the nearest unit.
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64).round() as i64
}

/// Convert points to EMU.
#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

/// An axis-aligned rectangle on a slide, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from inch measurements.
    pub fn from_inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(inches(x), inches(y), inches(width), inches(height))
    }

    #[inline]
    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }

    /// Shrink the rectangle by `dx` on the left/right and `dy` on the top/bottom.
    ///
    /// Width and height never go below zero.
    pub fn inset(&self, dx: i64, dy: i64) -> Self {
        Self::new(
            self.x + dx,
            self.y + dy,
            (self.width - 2 * dx).max(0),
            (self.height - 2 * dy).max(0),
        )
    }

    /// Split into four equal quadrants: top-left, top-right, bottom-left, bottom-right.
    ///
    /// Odd remainders go to the right column and bottom row so the quadrants
    /// tile the rectangle exactly.
    pub fn quadrants(&self) -> [Rect; 4] {
        let left_w = self.width / 2;
        let top_h = self.height / 2;
        let right_w = self.width - left_w;
        let bottom_h = self.height - top_h;
        let mid_x = self.x + left_w;
        let mid_y = self.y + top_h;
        [
            Rect::new(self.x, self.y, left_w, top_h),
            Rect::new(mid_x, self.y, right_w, top_h),
            Rect::new(self.x, mid_y, left_w, bottom_h),
            Rect::new(mid_x, mid_y, right_w, bottom_h),
        ]
    }
}
