//! Renders the glassmorphism clipboard icon at any edge length.
//!
//! Every step paints onto a [`Layer`]; geometry comes from [`Geometry`], which
//! derives all margins and radii from the edge length with floor division so
//! the design scales proportionally.

use crate::gradient::{background_color, ring_color, text_line_color, TEXT_LINE_COUNT};
use crate::layer::{Layer, Mask};
use crate::shapes::{Ellipse, RoundedRect, Segment};
use image::{Rgba, RgbaImage};

const fn white(alpha: u8) -> Rgba<u8> {
    Rgba([255, 255, 255, alpha])
}

const fn shadow(alpha: u8) -> Rgba<u8> {
    Rgba([0, 0, 0, alpha])
}

const BOARD_SHADOW_LAYERS: i32 = 3;
const HIGHLIGHT_PEAK_ALPHA: f64 = 80.0;
const RING_STEP_DEGREES: usize = 2;

/// Pixel geometry of the icon for one edge length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub size: i32,
    pub margin: i32,
    pub board_width: i32,
    pub board_height: i32,
    pub board_top: i32,
    pub shadow_offset: i32,
}

impl Geometry {
    pub fn new(size: u32) -> Self {
        let size = size as i32;
        let margin = size / 6;
        let board_width = size - margin * 2;
        let board_height = (board_width as f64 * 1.2) as i32;
        // Floor, not truncation: tiny sizes make the board taller than the canvas.
        let board_top = (size - board_height).div_euclid(2);

        Self {
            size,
            margin,
            board_width,
            board_height,
            board_top,
            shadow_offset: size / 40,
        }
    }

    pub fn board(&self) -> RoundedRect {
        RoundedRect::new(
            self.margin,
            self.board_top,
            self.margin + self.board_width,
            self.board_top + self.board_height,
            self.size / 15,
        )
    }

    /// The clip straddling the board's top edge.
    pub fn clip(&self) -> RoundedRect {
        let width = self.board_width / 3;
        let height = self.size / 10;
        let left = self.margin + (self.board_width - width) / 2;
        let top = self.board_top - height / 3;
        RoundedRect::new(left, top, left + width, top + height, self.size / 30)
    }

    /// Glass sheen across the upper third of the clip.
    pub fn clip_sheen(&self) -> RoundedRect {
        let clip = self.clip();
        let height = clip.bottom - clip.top;
        RoundedRect::new(
            clip.left + self.size / 60,
            clip.top + self.size / 80,
            clip.right - self.size / 60,
            clip.top + height / 3,
            self.size / 50,
        )
    }

    /// The text line bars, top to bottom. The last one is shorter.
    pub fn text_lines(&self) -> Vec<RoundedRect> {
        let left = self.margin + self.board_width / 6;
        let full_width = self.board_width - self.board_width / 3;
        let spacing = self.size / 18;
        let start = self.board_top + self.size / 6;
        let thickness = (self.size / 60).max(2);

        (0..TEXT_LINE_COUNT as i32)
            .map(|i| {
                let top = start + i * spacing;
                let width = if i < TEXT_LINE_COUNT as i32 - 1 {
                    full_width
                } else {
                    full_width * 2 / 3
                };
                RoundedRect::new(left, top, left + width, top + thickness, self.size / 150)
            })
            .collect()
    }

    pub fn ring_width(&self) -> i32 {
        (self.size / 80).max(2)
    }
}

/// Renders the full icon as a `size × size` RGBA image.
///
/// A zero size yields an empty image.
pub fn render_icon(size: u32) -> RgbaImage {
    compose(size).unwrap_or_else(|| RgbaImage::new(size, size))
}

fn compose(size: u32) -> Option<RgbaImage> {
    let geometry = Geometry::new(size);

    let mut canvas = Layer::new(size)?;
    paint_background(&mut canvas);
    let mask = Mask::circle(size)?;

    paint_board(&mut canvas, &geometry);
    paint_clip(&mut canvas, &geometry);
    paint_text_lines(&mut canvas, &geometry);
    canvas.composite(&highlight_layer(&geometry)?);

    let mut icon = canvas.masked(&mask);
    icon.composite(&ring_layer(&geometry)?);
    Some(icon.into_image())
}

/// Vertical purple, blue, pink gradient filling the whole canvas.
fn paint_background(canvas: &mut Layer) {
    let size = canvas.size();
    for y in 0..size {
        canvas.fill_row(y, background_color(y as f64 / size as f64));
    }
}

fn paint_board(canvas: &mut Layer, geometry: &Geometry) {
    let board = geometry.board();

    for i in (1..=BOARD_SHADOW_LAYERS).rev() {
        let offset = geometry.shadow_offset * i;
        canvas.fill(&board.offset(offset, offset), shadow(15 * i as u8));
    }

    canvas.fill(&board, white(200));
    let border = (geometry.size / 100).max(2);
    canvas.fill(&board.outline(border), white(220));
}

fn paint_clip(canvas: &mut Layer, geometry: &Geometry) {
    let clip = geometry.clip();
    let offset = geometry.shadow_offset;

    canvas.fill(&clip.offset(offset, offset), shadow(40));
    canvas.fill(&clip, white(230));
    canvas.fill(&clip.outline((geometry.size / 200).max(1)), white(255));
    canvas.fill(&geometry.clip_sheen(), white(120));
}

fn paint_text_lines(canvas: &mut Layer, geometry: &Geometry) {
    for (index, line) in geometry.text_lines().into_iter().enumerate() {
        canvas.fill(&line.offset(1, 1), shadow(20));
        canvas.fill(&line, text_line_color(index));
    }
}

/// Soft reflection in the upper half: nested ellipses, each replacing the
/// last, fading from the rim toward the centre.
fn highlight_layer(geometry: &Geometry) -> Option<Layer> {
    let size = geometry.size;
    let mut layer = Layer::new(size as u32)?;
    let steps = size / 4;

    for i in 0..steps {
        let alpha = HIGHLIGHT_PEAK_ALPHA * (1.0 - i as f64 / steps as f64);
        let glow = Ellipse::new(size / 4, i, size * 3 / 4, size / 2);
        layer.fill(&glow, white(alpha as u8));
    }

    Some(layer)
}

/// Angular gradient border approximated with radial strokes every 2°.
fn ring_layer(geometry: &Geometry) -> Option<Layer> {
    let mut layer = Layer::new(geometry.size as u32)?;
    let width = geometry.ring_width();
    let center = geometry.size / 2;
    let inner = center - width * 2;

    for angle in (0..360u32).step_by(RING_STEP_DEGREES) {
        let (sin, cos) = (angle as f64).to_radians().sin_cos();
        let point = |radius: i32| {
            (
                center + (radius as f64 * cos) as i32,
                center + (radius as f64 * sin) as i32,
            )
        };
        let stroke = Segment::new(point(center), point(inner), width);
        layer.stroke(&stroke, ring_color(angle));
    }

    Some(layer)
}
