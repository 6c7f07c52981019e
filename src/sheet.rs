use crate::engine::LabelDesign;
use crate::error::LayoutError;
use crate::rect::Rect;
use crate::units::*;
use id_arena::Id;
use serde::{Deserialize, Serialize};

/// The stock every label in a run is printed on. Margins apply to all four
/// edges; `gap` separates neighbouring labels both across and down.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// The sheet width
    pub width: Mm,
    /// The sheet height
    pub height: Mm,
    /// Clearance kept free along every edge
    pub margin: Mm,
    /// Spacing between neighbouring labels
    pub gap: Mm,
}

/// 600 x 300mm with no margin and no gap
impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig {
            width: Mm(600.0),
            height: Mm(300.0),
            margin: Mm(0.0),
            gap: Mm(0.0),
        }
    }
}

impl SheetConfig {
    /// A sheet of the given size with no margin and no gap
    pub fn new(width: Mm, height: Mm) -> SheetConfig {
        SheetConfig {
            width,
            height,
            ..SheetConfig::default()
        }
    }

    /// Set the margin kept clear on all four edges
    pub fn with_margin(self, margin: Mm) -> SheetConfig {
        SheetConfig { margin, ..self }
    }

    /// Set the spacing between neighbouring labels, across and down
    pub fn with_gap(self, gap: Mm) -> SheetConfig {
        SheetConfig { gap, ..self }
    }

    /// Reject sheets the arranger cannot work with: non-positive sizes,
    /// negative spacing, or margins that swallow the whole sheet
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (dimension, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_positive() {
                return Err(LayoutError::InvalidSheetDimension {
                    dimension,
                    value: value.0,
                });
            }
        }
        for (field, value) in [("margin", self.margin), ("gap", self.gap)] {
            if !(value.0 >= 0.0 && value.0.is_finite()) {
                return Err(LayoutError::NegativeSpacing {
                    field,
                    value: value.0,
                });
            }
        }
        let usable = self.usable_size();
        if !usable.width.is_positive() || !usable.height.is_positive() {
            return Err(LayoutError::NoUsableArea {
                width: self.width.0,
                height: self.height.0,
                margin: self.margin.0,
            });
        }
        Ok(())
    }

    /// The area inside the margins
    pub fn usable_size(&self) -> Size {
        Size::new(
            self.width - self.margin * 2.0,
            self.height - self.margin * 2.0,
        )
    }

    /// The area inside the margins, in sheet coordinates
    pub fn content_box(&self) -> Rect {
        Rect {
            x1: self.margin,
            y1: self.margin,
            x2: self.width - self.margin,
            y2: self.height - self.margin,
        }
    }

    /// The whole sheet, in sheet coordinates
    pub fn media_box(&self) -> Rect {
        Rect {
            x1: Mm(0.0),
            y1: Mm(0.0),
            x2: self.width,
            y2: self.height,
        }
    }

    /// Sheet size in points, for page-description backends
    pub fn page_size(&self) -> (Pt, Pt) {
        (self.width.into(), self.height.into())
    }
}

/// One physical copy of a label design
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PlacementUnit {
    pub design: Id<LabelDesign>,
    /// Which copy of the design this is, counting from zero
    pub copy: u32,
}

/// A unit together with where it sits on its sheet
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlacedLabel {
    pub unit: PlacementUnit,
    /// Bottom-left corner of the label on the sheet
    pub origin: Point,
    /// Width and height of the label
    pub size: Size,
}

impl PlacedLabel {
    /// The label's outline on the sheet
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Convert a point relative to the label's bottom-left corner into sheet
    /// coordinates
    pub fn to_sheet(&self, local: Point) -> Point {
        local.translate(self.origin.x, self.origin.y)
    }
}

/// One print sheet and the labels assigned to it, in placement order
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// 1-based page number within the sheet's group
    pub page: u32,
    pub labels: Vec<PlacedLabel>,
}

impl Sheet {
    /// Number of labels on the sheet
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if nothing has been placed on the sheet
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
