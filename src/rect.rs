use crate::units::*;
use serde::{Deserialize, Serialize};

/// A rectangle, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// The x-coordinate of the first (typically, lower-left) corner.
    pub x1: Mm,
    /// The y-coordinate of the first (typically, lower-left) corner.
    pub y1: Mm,
    /// The x-coordinate of the second (typically, upper-right) corner.
    pub x2: Mm,
    /// The y-coordinate of the second (typically, upper-right) corner.
    pub y2: Mm,
}

impl Rect {
    /// Build a rectangle from its lower-left corner and its size
    pub fn from_origin_size(origin: Point, size: Size) -> Rect {
        Rect {
            x1: origin.x,
            y1: origin.y,
            x2: origin.x + size.width,
            y2: origin.y + size.height,
        }
    }

    /// The horizontal extent of the rectangle
    pub fn width(&self) -> Mm {
        self.x2 - self.x1
    }

    /// The vertical extent of the rectangle
    pub fn height(&self) -> Mm {
        self.y2 - self.y1
    }

    /// The width and height of the rectangle
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// The point midway between the two corners
    pub fn centre(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// True if the two rectangles share interior area. Rectangles that only
    /// touch along an edge or at a corner do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x1 < other.x2 && other.x1 < self.x2 && self.y1 < other.y2 && other.y1 < self.y2
    }

    /// True if `other` lies entirely inside (or on the boundary of) this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        other.x1 >= self.x1 && other.x2 <= self.x2 && other.y1 >= self.y1 && other.y2 <= self.y2
    }
}

impl From<&Rect> for (Pt, Pt, Pt, Pt) {
    fn from(r: &Rect) -> Self {
        (r.x1.into(), r.y1.into(), r.x2.into(), r.y2.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x1: f32, y1: f32, x2: f32, y2: f32) -> Rect {
        Rect {
            x1: Mm(x1),
            y1: Mm(y1),
            x2: Mm(x2),
            y2: Mm(y2),
        }
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = rect(0.0, 0.0, 50.0, 20.0);
        let b = rect(50.0, 0.0, 100.0, 20.0);
        let c = rect(0.0, 20.0, 50.0, 40.0);
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = rect(0.0, 0.0, 50.0, 20.0);
        let b = rect(49.0, 19.0, 60.0, 30.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn containment_includes_boundary() {
        let sheet = rect(0.0, 0.0, 600.0, 300.0);
        assert!(sheet.contains(&rect(0.0, 280.0, 50.0, 300.0)));
        assert!(!sheet.contains(&rect(0.0, 280.0, 700.0, 300.0)));
    }

    #[test]
    fn origin_size_and_centre() {
        let r = Rect::from_origin_size(Point::new(Mm(10.0), Mm(5.0)), Size::new(Mm(40.0), Mm(20.0)));
        assert_eq!(r, rect(10.0, 5.0, 50.0, 25.0));
        assert_eq!(r.size(), Size::new(Mm(40.0), Mm(20.0)));
        assert_eq!(r.centre(), Point::new(Mm(30.0), Mm(15.0)));
    }

    #[test]
    fn converts_to_points() {
        let (x1, _, x2, y2): (Pt, Pt, Pt, Pt) = (&rect(0.0, 0.0, 25.4, 12.7)).into();
        assert_eq!(x1, Pt(0.0));
        assert!((x2.0 - 72.0).abs() < 1e-3);
        assert!((y2.0 - 36.0).abs() < 1e-3);
    }
}
