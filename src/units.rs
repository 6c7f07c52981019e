//! Physical units used throughout the crate.
//!
//! Every length the engine works with is a [`Mm`]. Page-description backends
//! usually want PostScript points instead, so [`Pt`] is provided along with a
//! lossless-enough conversion between the two.
//!
//! ```
//! use label_sheet::{Mm, Pt};
//!
//! let width = Mm(50.0) + Mm(25.0);
//! assert_eq!(width, Mm(75.0));
//! assert_eq!(format!("{}", Mm(0.8)), "0.8mm");
//!
//! let pt: Pt = Mm(25.4).into();
//! assert!((pt.0 - 72.0).abs() < 1e-4);
//! ```

use derive_more::{Add, AddAssign, Display, From, Into, MulAssign, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// Number of PostScript points in one millimetre
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// A length in millimetres
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    MulAssign,
    Sum,
    From,
    Into,
    Display,
    Serialize,
    Deserialize,
)]
#[display("{_0}mm")]
#[serde(transparent)]
pub struct Mm(pub f32);

/// A length in PostScript points (1/72 of an inch)
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    MulAssign,
    Sum,
    From,
    Into,
    Display,
    Serialize,
    Deserialize,
)]
#[display("{_0}pt")]
#[serde(transparent)]
pub struct Pt(pub f32);

impl Mm {
    /// The larger of two lengths
    pub fn max(self, other: Mm) -> Mm {
        Mm(self.0.max(other.0))
    }

    /// The smaller of two lengths
    pub fn min(self, other: Mm) -> Mm {
        Mm(self.0.min(other.0))
    }

    /// The ratio between two lengths
    pub fn ratio(self, other: Mm) -> f32 {
        self.0 / other.0
    }

    /// True when the length is a finite number greater than zero
    pub fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Mul<f32> for Mm {
    type Output = Mm;

    fn mul(self, rhs: f32) -> Mm {
        Mm(self.0 * rhs)
    }
}

impl Div<f32> for Mm {
    type Output = Mm;

    fn div(self, rhs: f32) -> Mm {
        Mm(self.0 / rhs)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Self {
        Pt(mm.0 * PT_PER_MM)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Self {
        Mm(pt.0 / PT_PER_MM)
    }
}

/// A position in millimetres, measured from a bottom-left origin
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: Mm,
    pub y: Mm,
}

impl Point {
    /// Create a point from its coordinates
    pub fn new(x: Mm, y: Mm) -> Point {
        Point { x, y }
    }

    /// Shift the point by the given offsets
    pub fn translate(self, dx: Mm, dy: Mm) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The width and height of something rectangular
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: Mm,
    pub height: Mm,
}

impl Size {
    /// Create a size from a width and a height
    pub fn new(width: Mm, height: Mm) -> Size {
        Size { width, height }
    }

    /// True when neither dimension exceeds the other size's
    pub fn fits_within(&self, other: &Size) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}
