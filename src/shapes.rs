//! Vector outlines the renderer paints with.
//!
//! Shapes are described in inclusive pixel bounds, the way the icon geometry
//! is measured, and turned into `tiny_skia` paths covering whole pixels: a
//! rectangle from column `left` to column `right` spans `left..right + 1`.

use tiny_skia::{FillRule, Path, PathBuilder, Rect};

// Cubic control distance that approximates a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// Something that can be filled onto a layer.
pub trait Shape {
    fn path(&self) -> Option<Path>;

    fn fill_rule(&self) -> FillRule {
        FillRule::Winding
    }
}

/// Rectangle with inclusive pixel bounds and quarter-circle corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub radius: i32,
}

impl RoundedRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32, radius: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            radius,
        }
    }

    /// The same rectangle moved by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
            radius: self.radius,
        }
    }

    /// Shrinks every edge by `amount`, keeping the corners concentric.
    pub fn inset(self, amount: i32) -> Self {
        Self {
            left: self.left + amount,
            top: self.top + amount,
            right: self.right - amount,
            bottom: self.bottom - amount,
            radius: (self.radius - amount).max(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }

    /// Inner outline band of the given stroke width.
    pub fn outline(self, width: i32) -> Outline {
        Outline { rect: self, width }
    }

    fn push_to(&self, pb: &mut PathBuilder) {
        if self.is_empty() {
            return;
        }
        let (l, t) = (self.left as f32, self.top as f32);
        let (r, b) = ((self.right + 1) as f32, (self.bottom + 1) as f32);
        // Corners never exceed half the shorter side.
        let rad = (self.radius as f32).min((r - l) / 2.0).min((b - t) / 2.0).max(0.0);
        let k = rad * KAPPA;

        pb.move_to(l + rad, t);
        pb.line_to(r - rad, t);
        if rad > 0.0 {
            pb.cubic_to(r - rad + k, t, r, t + rad - k, r, t + rad);
        }
        pb.line_to(r, b - rad);
        if rad > 0.0 {
            pb.cubic_to(r, b - rad + k, r - rad + k, b, r - rad, b);
        }
        pb.line_to(l + rad, b);
        if rad > 0.0 {
            pb.cubic_to(l + rad - k, b, l, b - rad + k, l, b - rad);
        }
        pb.line_to(l, t + rad);
        if rad > 0.0 {
            pb.cubic_to(l, t + rad - k, l + rad - k, t, l + rad, t);
        }
        pb.close();
    }
}

impl Shape for RoundedRect {
    fn path(&self) -> Option<Path> {
        let mut pb = PathBuilder::new();
        self.push_to(&mut pb);
        pb.finish()
    }
}

/// Stroke drawn on the inside of a rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outline {
    rect: RoundedRect,
    width: i32,
}

impl Shape for Outline {
    fn path(&self) -> Option<Path> {
        let mut pb = PathBuilder::new();
        self.rect.push_to(&mut pb);
        self.rect.inset(self.width).push_to(&mut pb);
        pb.finish()
    }

    // The inset rectangle punches the hole.
    fn fill_rule(&self) -> FillRule {
        FillRule::EvenOdd
    }
}

/// Axis-aligned ellipse inscribed in an inclusive bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Ellipse {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

impl Shape for Ellipse {
    fn path(&self) -> Option<Path> {
        let oval = Rect::from_ltrb(
            self.left as f32,
            self.top as f32,
            (self.right + 1) as f32,
            (self.bottom + 1) as f32,
        )?;
        PathBuilder::from_oval(oval)
    }
}

/// Straight line between two points, stroked with flat ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: (i32, i32),
    pub end: (i32, i32),
    pub width: i32,
}

impl Segment {
    pub fn new(start: (i32, i32), end: (i32, i32), width: i32) -> Self {
        Self { start, end, width }
    }

    /// Centre line of the stroke.
    pub fn path(&self) -> Option<Path> {
        let mut pb = PathBuilder::new();
        pb.move_to(self.start.0 as f32, self.start.1 as f32);
        pb.line_to(self.end.0 as f32, self.end.1 as f32);
        pb.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ltrb(path: &Path) -> (f32, f32, f32, f32) {
        let b = path.bounds();
        (b.left(), b.top(), b.right(), b.bottom())
    }

    #[test]
    fn test_rounded_rect_spans_whole_pixels() {
        let path = RoundedRect::new(2, 3, 10, 20, 4).path().unwrap();
        assert_eq!(ltrb(&path), (2.0, 3.0, 11.0, 21.0));
    }

    #[test]
    fn test_inverted_rect_has_no_path() {
        let rect = RoundedRect::new(5, 5, 4, 10, 1);
        assert!(rect.is_empty());
        assert!(rect.path().is_none());
    }

    #[test]
    fn test_offset_and_inset() {
        let rect = RoundedRect::new(0, 0, 10, 10, 3);
        assert_eq!(rect.offset(2, 3), RoundedRect::new(2, 3, 12, 13, 3));
        assert_eq!(rect.inset(4), RoundedRect::new(4, 4, 6, 6, 0));
    }

    #[test]
    fn test_outline_uses_even_odd() {
        let band = RoundedRect::new(0, 0, 20, 20, 2).outline(2);
        assert_eq!(band.fill_rule(), FillRule::EvenOdd);
        assert_eq!(ltrb(&band.path().unwrap()), (0.0, 0.0, 21.0, 21.0));
    }

    #[test]
    fn test_ellipse_bounds() {
        let path = Ellipse::new(4, 0, 12, 8).path().unwrap();
        assert_eq!(ltrb(&path), (4.0, 0.0, 13.0, 9.0));
    }

    #[test]
    fn test_zero_length_segment_has_no_path() {
        assert!(Segment::new((3, 3), (3, 3), 2).path().is_none());
        assert!(Segment::new((0, 0), (10, 0), 2).path().is_some());
    }
}
