//! Pixel-space drawing surface
//!
//! Game code draws in screen pixels. The surface keeps a framebuffer of square
//! sub-pixels and rasterises it onto terminal cells: each cell stacks two
//! sub-pixels and is drawn as `▀` with the top color in the foreground and the
//! bottom color in the background.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::icon::Icon;
use crate::game::{Position, Rgb};

const UPPER_HALF_BLOCK: char = '▀';

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Axis-aligned rectangle in screen pixels; right and bottom edges exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
struct TextRun {
    origin: Position,
    text: String,
    color: Rgb,
}

/// Framebuffer in screen pixels
#[derive(Debug, Clone)]
pub struct Surface {
    subpixel: i32,
    columns: i32,
    subrows: i32,
    pixels: Vec<Rgb>,
    texts: Vec<TextRun>,
}

fn ceil_div(a: i32, b: i32) -> i32 {
    -((-a).div_euclid(b))
}

impl Surface {
    /// A black surface covering `width` x `height` screen pixels
    pub fn new(width: i32, height: i32, subpixel: i32) -> Self {
        let columns = width / subpixel;
        // Two sub-pixels per terminal row
        let subrows = (height / subpixel) & !1;
        Self {
            subpixel,
            columns,
            subrows,
            pixels: vec![Rgb::BLACK; (columns * subrows) as usize],
            texts: Vec::new(),
        }
    }

    /// Terminal cells across
    pub fn columns(&self) -> u16 {
        self.columns as u16
    }

    /// Terminal cells down
    pub fn rows(&self) -> u16 {
        (self.subrows / 2) as u16
    }

    /// Screen pixels covered by one terminal cell, as (width, height)
    pub fn cell_size(&self) -> (i32, i32) {
        (self.subpixel, self.subpixel * 2)
    }

    /// Clear to a single color, dropping any text
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
        self.texts.clear();
    }

    /// Paint every sub-pixel whose center lies inside the rectangle
    pub fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        let (columns, rows) = self.span(rect);
        for j in rows {
            for i in columns.clone() {
                self.pixels[(j * self.columns + i) as usize] = color;
            }
        }
    }

    /// Copy an icon so that its top-left sub-pixel is the first one whose
    /// center lies at or after `origin`
    pub fn blit(&mut self, icon: &Icon, origin: Position) {
        let i0 = self.first_index(origin.x);
        let j0 = self.first_index(origin.y);

        for v in 0..icon.height() as i32 {
            for u in 0..icon.width() as i32 {
                let (i, j) = (i0 + u, j0 + v);
                if (0..self.columns).contains(&i) && (0..self.subrows).contains(&j) {
                    self.pixels[(j * self.columns + i) as usize] = icon.get(u as u32, v as u32);
                }
            }
        }
    }

    /// Queue a line of text with its top-left at `origin`; text is laid over
    /// the pixels when rendered
    pub fn draw_text(&mut self, origin: Position, text: impl Into<String>, color: Rgb) {
        self.texts.push(TextRun {
            origin,
            text: text.into(),
            color,
        });
    }

    /// Color of the sub-pixel containing the given screen pixel
    pub fn pixel(&self, p: Position) -> Option<Rgb> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (i, j) = (p.x / self.subpixel, p.y / self.subpixel);
        if i >= self.columns || j >= self.subrows {
            return None;
        }
        Some(self.pixels[(j * self.columns + i) as usize])
    }

    fn first_index(&self, coord: i32) -> i32 {
        ceil_div(coord - self.subpixel / 2, self.subpixel)
    }

    fn span(&self, rect: PixelRect) -> (std::ops::Range<i32>, std::ops::Range<i32>) {
        let clamp = |range: std::ops::Range<i32>, limit: i32| {
            range.start.clamp(0, limit)..range.end.clamp(0, limit)
        };
        let columns = self.first_index(rect.x)..self.first_index(rect.x + rect.width);
        let rows = self.first_index(rect.y)..self.first_index(rect.y + rect.height);
        (clamp(columns, self.columns), clamp(rows, self.subrows))
    }
}

impl Widget for &Surface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let width = area.width.min(self.columns());
        let height = area.height.min(self.rows());

        for row in 0..height {
            for column in 0..width {
                let i = i32::from(column);
                let j = i32::from(row) * 2;
                let top = self.pixels[(j * self.columns + i) as usize];
                let bottom = self.pixels[((j + 1) * self.columns + i) as usize];
                buf[(area.x + column, area.y + row)]
                    .set_char(UPPER_HALF_BLOCK)
                    .set_fg(top.into())
                    .set_bg(bottom.into());
            }
        }

        let (cell_width, cell_height) = self.cell_size();
        for run in &self.texts {
            if run.origin.x < 0 || run.origin.y < 0 {
                continue;
            }
            let column = (run.origin.x / cell_width) as u16;
            let row = (run.origin.y / cell_height) as u16;
            if column >= width || row >= height {
                continue;
            }
            buf.set_stringn(
                area.x + column,
                area.y + row,
                &run.text,
                usize::from(width - column),
                Style::default().fg(run.color.into()),
            );
        }
    }
}
