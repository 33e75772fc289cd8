//! Pixel drawing primitives over an RGB image buffer.

use super::font::{self, ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
use image::{Rgb, RgbImage};
use std::f64::consts::TAU;

/// An axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub(crate) fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub(crate) fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub(crate) fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub(crate) fn center_x(&self) -> i32 {
        self.x + (self.width / 2) as i32
    }

    /// Shrinks the rectangle by the given margins, saturating at zero size.
    pub(crate) fn inset(&self, left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            x: self.x + left as i32,
            y: self.y + top as i32,
            width: self.width.saturating_sub(left + right),
            height: self.height.saturating_sub(top + bottom),
        }
    }

    /// Splits into a `columns` x `rows` grid, row-major.
    pub(crate) fn grid(&self, columns: u32, rows: u32) -> Vec<Self> {
        let cell_width = self.width / columns;
        let cell_height = self.height / rows;
        (0..rows)
            .flat_map(|row| {
                (0..columns).map(move |column| {
                    Self::new(
                        self.x + (column * cell_width) as i32,
                        self.y + (row * cell_height) as i32,
                        cell_width,
                        cell_height,
                    )
                })
            })
            .collect()
    }
}

/// A drawable image with a white background.
pub(crate) struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb([255, 255, 255])),
        }
    }

    pub(crate) fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.image.width(), self.image.height())
    }

    /// Sets a pixel, ignoring coordinates outside the image.
    pub(crate) fn put(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, color);
        }
    }

    pub(crate) fn fill_rect(&mut self, rect: Rect, color: Rgb<u8>) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.put(x, y, color);
            }
        }
    }

    pub(crate) fn stroke_rect(&mut self, rect: Rect, color: Rgb<u8>) {
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
        self.line((rect.x, rect.y), (right, rect.y), color, 1);
        self.line((rect.x, bottom), (right, bottom), color, 1);
        self.line((rect.x, rect.y), (rect.x, bottom), color, 1);
        self.line((right, rect.y), (right, bottom), color, 1);
    }

    /// Draws a line with Bresenham's algorithm, `thickness` pixels wide.
    pub(crate) fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb<u8>, thickness: u32) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let step_x = if x < to.0 { 1 } else { -1 };
        let step_y = if y < to.1 { 1 } else { -1 };
        let mut error = dx + dy;
        let half = (thickness / 2) as i32;

        loop {
            for oy in -half..=half {
                for ox in -half..=half {
                    self.put(x + ox, y + oy, color);
                }
            }
            if x == to.0 && y == to.1 {
                break;
            }
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x += step_x;
            }
            if doubled <= dx {
                error += dx;
                y += step_y;
            }
        }
    }

    /// Fills a circle sector. Angles are fractions of a full turn, clockwise
    /// from twelve o'clock.
    pub(crate) fn fill_sector(
        &mut self,
        center: (i32, i32),
        radius: u32,
        start: f64,
        end: f64,
        color: Rgb<u8>,
    ) {
        let r = radius as i32;
        let r_squared = i64::from(r) * i64::from(r);
        for dy in -r..=r {
            for dx in -r..=r {
                if i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy) > r_squared {
                    continue;
                }
                let turn = (f64::from(dx).atan2(-f64::from(dy)) / TAU).rem_euclid(1.0);
                if turn >= start && turn < end {
                    self.put(center.0 + dx, center.1 + dy, color);
                }
            }
        }
    }

    /// Draws `text` with its top-left corner at `(x, y)`.
    pub(crate) fn text(&mut self, x: i32, y: i32, text: &str, scale: u32, color: Rgb<u8>) {
        let scale_i = scale as i32;
        for (index, c) in text.chars().enumerate() {
            let origin_x = x + (index as u32 * ADVANCE * scale) as i32;
            for (row, bits) in font::glyph(c).iter().enumerate() {
                for column in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - column)) == 0 {
                        continue;
                    }
                    let px = origin_x + column as i32 * scale_i;
                    let py = y + row as i32 * scale_i;
                    self.fill_rect(Rect::new(px, py, scale, scale), color);
                }
            }
        }
    }

    /// Draws `text` horizontally centred on `center_x`.
    pub(crate) fn text_centered(&mut self, center_x: i32, y: i32, text: &str, scale: u32, color: Rgb<u8>) {
        let width = font::text_width(text, scale) as i32;
        self.text(center_x - width / 2, y, text, scale, color);
    }

    /// Draws `text` with its right edge at `right_x`.
    pub(crate) fn text_right(&mut self, right_x: i32, y: i32, text: &str, scale: u32, color: Rgb<u8>) {
        let width = font::text_width(text, scale) as i32;
        self.text(right_x - width, y, text, scale, color);
    }

    pub(crate) fn into_image(self) -> RgbImage {
        self.image
    }
}

/// Height in pixels of one text line at `scale`.
pub(crate) fn line_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn grid_splits_row_major() {
        let cells = Rect::new(0, 0, 100, 60).grid(2, 2);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[1], Rect::new(50, 0, 50, 30));
        assert_eq!(cells[2], Rect::new(0, 30, 50, 30));
    }

    #[test]
    fn inset_saturates() {
        let rect = Rect::new(10, 10, 20, 20).inset(15, 0, 15, 0);
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 20);
    }

    #[test]
    fn out_of_bounds_pixels_are_ignored() {
        let mut canvas = Canvas::new(4, 4);
        canvas.put(-1, 2, BLACK);
        canvas.put(10, 2, BLACK);
        canvas.fill_rect(Rect::new(2, 2, 10, 10), BLACK);

        let image = canvas.into_image();
        assert_eq!(*image.get_pixel(3, 3), BLACK);
        assert_eq!(*image.get_pixel(1, 1), WHITE);
    }

    #[test]
    fn line_reaches_both_ends() {
        let mut canvas = Canvas::new(10, 10);
        canvas.line((1, 8), (8, 1), BLACK, 1);

        let image = canvas.into_image();
        assert_eq!(*image.get_pixel(1, 8), BLACK);
        assert_eq!(*image.get_pixel(8, 1), BLACK);
    }

    #[test]
    fn sector_fills_requested_quarter() {
        let mut canvas = Canvas::new(21, 21);
        // First quarter turn: the upper-right quadrant.
        canvas.fill_sector((10, 10), 8, 0.0, 0.25, BLACK);

        let image = canvas.into_image();
        assert_eq!(*image.get_pixel(14, 6), BLACK);
        assert_eq!(*image.get_pixel(6, 14), WHITE);
        assert_eq!(*image.get_pixel(6, 6), WHITE);
    }

    #[test]
    fn text_draws_glyph_pixels() {
        let mut canvas = Canvas::new(20, 10);
        canvas.text(0, 0, "T", 1, BLACK);

        let image = canvas.into_image();
        // Top bar of the T spans the first row.
        assert_eq!(*image.get_pixel(0, 0), BLACK);
        assert_eq!(*image.get_pixel(4, 0), BLACK);
        assert_eq!(*image.get_pixel(0, 3), WHITE);
        assert_eq!(*image.get_pixel(2, 6), BLACK);
    }
}
