//! Drawing surfaces used while composing one icon.
//!
//! A [`Layer`] wraps a `tiny_skia` pixmap that shapes are painted onto; a
//! [`Mask`] is a single-channel coverage map used to clip a layer. Neither
//! outlives the render that created it.

use crate::shapes::{Segment, Shape};
use image::{Rgba, RgbaImage};
use tiny_skia::{
    BlendMode, FillRule, LineCap, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke,
    Transform,
};

/// Paint that overwrites whatever it covers, edges left hard.
fn replace_paint(color: Rgba<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.blend_mode = BlendMode::Source;
    paint.anti_alias = false;
    paint
}

/// Square RGBA canvas. Painting replaces pixels; merging layers blends them.
#[derive(Debug, Clone)]
pub struct Layer {
    pixmap: Pixmap,
}

impl Layer {
    /// Fully transparent `size × size` layer, `None` for a zero size.
    pub fn new(size: u32) -> Option<Self> {
        Pixmap::new(size, size).map(|pixmap| Self { pixmap })
    }

    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Paints a whole row with `color`. Rows outside the canvas are ignored.
    pub fn fill_row(&mut self, y: u32, color: Rgba<u8>) {
        if y >= self.pixmap.height() {
            return;
        }
        if let Some(row) = Rect::from_xywh(0.0, y as f32, self.size() as f32, 1.0) {
            self.pixmap
                .fill_rect(row, &replace_paint(color), Transform::identity(), None);
        }
    }

    /// Sets every covered pixel to `color`, clipped to the canvas.
    pub fn fill<S: Shape>(&mut self, shape: &S, color: Rgba<u8>) {
        if let Some(path) = shape.path() {
            self.pixmap.fill_path(
                &path,
                &replace_paint(color),
                shape.fill_rule(),
                Transform::identity(),
                None,
            );
        }
    }

    /// Strokes a segment with flat ends, replacing covered pixels.
    pub fn stroke(&mut self, segment: &Segment, color: Rgba<u8>) {
        if let Some(path) = segment.path() {
            let stroke = Stroke {
                width: segment.width as f32,
                line_cap: LineCap::Butt,
                ..Stroke::default()
            };
            self.pixmap.stroke_path(
                &path,
                &replace_paint(color),
                &stroke,
                Transform::identity(),
                None,
            );
        }
    }

    /// Source-over composites `top` onto this layer.
    pub fn composite(&mut self, top: &Layer) {
        self.pixmap.draw_pixmap(
            0,
            0,
            top.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    /// Copy of this layer with every pixel scaled by the mask coverage.
    pub fn masked(&self, mask: &Mask) -> Layer {
        let mut pixmap = self.pixmap.clone();
        pixmap.apply_mask(&mask.coverage);
        Layer { pixmap }
    }

    /// Straight-alpha color at a pixel; transparent outside the canvas.
    fn color_at(&self, x: u32, y: u32) -> Rgba<u8> {
        match self.pixmap.pixel(x, y) {
            Some(premultiplied) => {
                let c = premultiplied.demultiply();
                Rgba([c.red(), c.green(), c.blue(), c.alpha()])
            }
            None => Rgba([0, 0, 0, 0]),
        }
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        self.color_at(x, y)
    }

    pub fn into_image(self) -> RgbaImage {
        let size = self.size();
        RgbaImage::from_fn(size, size, |x, y| self.color_at(x, y))
    }
}

/// Opacity-only clip region.
#[derive(Clone)]
pub struct Mask {
    coverage: tiny_skia::Mask,
}

impl Mask {
    /// Opaque inside the circle inscribed in a `size × size` square, with an
    /// anti-aliased rim. `None` for a zero size.
    pub fn circle(size: u32) -> Option<Self> {
        let mut coverage = tiny_skia::Mask::new(size, size)?;
        let radius = size as f32 / 2.0;
        let circle = PathBuilder::from_circle(radius, radius, radius)?;
        coverage.fill_path(&circle, FillRule::Winding, true, Transform::identity());
        Some(Self { coverage })
    }

    /// Coverage at a pixel, 0 outside the mask's bounds.
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        let width = self.coverage.width();
        if x < width && y < self.coverage.height() {
            self.coverage.data()[(y * width + x) as usize]
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::RoundedRect;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn assert_close(actual: Rgba<u8>, expected: Rgba<u8>) {
        for channel in 0..4 {
            let delta = (actual[channel] as i32 - expected[channel] as i32).abs();
            assert!(delta <= 2, "{:?} is not close to {:?}", actual, expected);
        }
    }

    #[test]
    fn test_new_layer_is_transparent() {
        let layer = Layer::new(4).unwrap();
        assert_eq!(layer.size(), 4);
        assert_eq!(layer.pixel(3, 3), TRANSPARENT);
        assert!(Layer::new(0).is_none());
    }

    #[test]
    fn test_fill_row() {
        let mut layer = Layer::new(4).unwrap();
        layer.fill_row(1, RED);
        layer.fill_row(9, RED);
        assert_eq!(layer.pixel(0, 1), RED);
        assert_eq!(layer.pixel(3, 1), RED);
        assert_eq!(layer.pixel(0, 0), TRANSPARENT);
        assert_eq!(layer.pixel(0, 2), TRANSPARENT);
    }

    #[test]
    fn test_fill_replaces_and_clips() {
        let mut layer = Layer::new(8).unwrap();
        layer.fill(&RoundedRect::new(0, 0, 7, 7, 0), RED);

        let ghost = Rgba([0, 0, 0, 20]);
        layer.fill(&RoundedRect::new(4, 4, 40, 40, 0), ghost);
        assert_eq!(layer.pixel(5, 5), ghost);
        assert_eq!(layer.pixel(3, 3), RED);

        layer.fill(&RoundedRect::new(-10, -10, -1, -1, 0), ghost);
        assert_eq!(layer.pixel(0, 0), RED);
    }

    #[test]
    fn test_outline_leaves_centre() {
        let mut layer = Layer::new(16).unwrap();
        layer.fill(&RoundedRect::new(0, 0, 15, 15, 0).outline(2), RED);
        assert_eq!(layer.pixel(0, 8), RED);
        assert_eq!(layer.pixel(1, 8), RED);
        assert_eq!(layer.pixel(2, 8), TRANSPARENT);
        assert_eq!(layer.pixel(8, 8), TRANSPARENT);
    }

    #[test]
    fn test_stroke_has_flat_ends() {
        let mut layer = Layer::new(16).unwrap();
        layer.stroke(&Segment::new((2, 8), (12, 8), 2), RED);
        assert_eq!(layer.pixel(2, 8), RED);
        assert_eq!(layer.pixel(11, 7), RED);
        assert_eq!(layer.pixel(1, 8), TRANSPARENT);
        assert_eq!(layer.pixel(12, 8), TRANSPARENT);
        assert_eq!(layer.pixel(6, 10), TRANSPARENT);
    }

    #[test]
    fn test_composite_blends_over() {
        let mut bottom = Layer::new(2).unwrap();
        bottom.fill_row(0, RED);

        let mut top = Layer::new(2).unwrap();
        top.fill_row(0, Rgba([0, 0, 255, 128]));
        top.fill_row(1, Rgba([0, 255, 0, 255]));

        bottom.composite(&top);
        let blended = bottom.pixel(0, 0);
        assert_eq!(blended[3], 255);
        assert!(blended[0] > 100 && blended[2] > 100);
        assert_eq!(bottom.pixel(0, 1), Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn test_translucent_over_opaque_stays_opaque() {
        for alpha in [1u8, 20, 80, 127, 180, 254] {
            let mut bottom = Layer::new(1).unwrap();
            bottom.fill_row(0, Rgba([40, 90, 200, 255]));
            let mut top = Layer::new(1).unwrap();
            top.fill_row(0, Rgba([255, 255, 255, alpha]));

            bottom.composite(&top);
            assert_eq!(bottom.pixel(0, 0)[3], 255, "alpha {} over opaque", alpha);
        }
    }

    #[test]
    fn test_circle_mask() {
        let mask = Mask::circle(16).unwrap();
        assert_eq!(mask.coverage(0, 0), 0);
        assert_eq!(mask.coverage(15, 15), 0);
        assert_eq!(mask.coverage(8, 8), 255);
        // The rim crosses this pixel diagonally.
        let rim = mask.coverage(2, 2);
        assert!(rim > 0 && rim < 255, "rim coverage was {}", rim);
        assert_eq!(mask.coverage(99, 99), 0);
        assert!(Mask::circle(0).is_none());
    }

    #[test]
    fn test_masked_scales_alpha_only() {
        let color = Rgba([10, 20, 30, 200]);
        let mut layer = Layer::new(16).unwrap();
        for y in 0..16 {
            layer.fill_row(y, color);
        }
        let clipped = layer.masked(&Mask::circle(16).unwrap());

        assert_eq!(clipped.pixel(0, 0), TRANSPARENT);
        assert_eq!(clipped.pixel(8, 8)[3], 200);
        assert_close(clipped.pixel(8, 8), color);
        assert_close(layer.pixel(0, 0), color);
    }

    #[test]
    fn test_into_image_is_straight_alpha() {
        let mut layer = Layer::new(3).unwrap();
        layer.fill_row(1, Rgba([255, 255, 255, 60]));
        let image = layer.into_image();
        assert_eq!(image.dimensions(), (3, 3));
        assert_eq!(*image.get_pixel(1, 1), Rgba([255, 255, 255, 60]));
        assert_eq!(*image.get_pixel(1, 0), TRANSPARENT);
    }
}
