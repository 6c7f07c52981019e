//! Row-based shelf packing of label copies onto print sheets.
//!
//! Units are placed strictly in input order: left to right along a row, rows
//! from the top of the sheet downwards, and a fresh sheet whenever the next
//! row would cross the bottom margin. There is no reordering, rotation or
//! best-fit search, so the printed order always follows the order the
//! designs were authored in.

use crate::engine::LabelDesign;
use crate::error::LayoutError;
use crate::sheet::*;
use crate::units::*;
use id_arena::{Arena, Id};
use serde::Serialize;
use tracing::{debug, warn};

/// A label copy that could not fit inside the usable area of its sheet.
/// It is still placed; the geometry simply overflows the sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OversizeWarning {
    /// Name of the design, if it has one
    pub name: Option<String>,
    /// Size of the label
    pub size: Size,
    /// The usable area of the sheet inside its margins
    pub usable: Size,
    /// 1-based page the copy landed on
    pub page: u32,
    /// Which copy of the design overflowed, counting from zero
    pub copy: u32,
}

/// The sheets produced for one group, plus anything worth warning about
#[derive(Debug, Clone, Default)]
pub struct Arrangement {
    /// Sheets in page order
    pub sheets: Vec<Sheet>,
    /// Every copy that overflowed its sheet
    pub warnings: Vec<OversizeWarning>,
}

impl Arrangement {
    /// Total number of copies placed across every sheet
    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(Sheet::len).sum()
    }
}

/// Expand each design into its copies, keeping every copy of a design
/// together and the designs in their given order
pub fn expand<'a>(
    designs: &'a Arena<LabelDesign>,
    members: &'a [Id<LabelDesign>],
) -> impl Iterator<Item = PlacementUnit> + 'a {
    members.iter().flat_map(move |&id| {
        (0..designs[id].label.quantity).map(move |copy| PlacementUnit { design: id, copy })
    })
}

/// Pack the given designs (all from one group) onto as many sheets as needed
pub fn arrange(
    designs: &Arena<LabelDesign>,
    members: &[Id<LabelDesign>],
    config: &SheetConfig,
) -> Result<Arrangement, LayoutError> {
    config.validate()?;

    let usable = config.usable_size();
    let left = config.margin;
    let top = config.height - config.margin;
    let right = config.width - config.margin;
    let bottom = config.margin;

    let mut arrangement = Arrangement::default();
    let mut current: Vec<PlacedLabel> = Vec::new();
    let mut page = 1u32;

    let mut x = left;
    let mut y = top;
    let mut row_height: Option<Mm> = None;

    for unit in expand(designs, members) {
        let label = &designs[unit.design].label;
        let width = label.width.max(Mm(0.0));
        let height = label.height.max(Mm(0.0));
        let row = *row_height.get_or_insert(height);

        // wrap to the next row
        if x + width > right {
            x = left;
            y -= row + config.gap;
            row_height = Some(height);
        }

        // the row doesn't fit on what's left of the sheet
        if y - height < bottom {
            if !current.is_empty() {
                debug!(page, labels = current.len(), "sheet full");
                arrangement.sheets.push(Sheet {
                    page,
                    labels: std::mem::take(&mut current),
                });
                page += 1;
            }
            x = left;
            y = top;
            row_height = Some(height);
        }

        let size = Size::new(width, height);
        if !size.fits_within(&usable) {
            warn!(
                label = label.display_name(),
                width = width.0,
                height = height.0,
                usable_width = usable.width.0,
                usable_height = usable.height.0,
                "label is too large for the sheet and will overflow it"
            );
            arrangement.warnings.push(OversizeWarning {
                name: label.name.clone(),
                size,
                usable,
                page,
                copy: unit.copy,
            });
        }

        current.push(PlacedLabel {
            unit,
            origin: Point::new(x, y - height),
            size,
        });

        row_height = row_height.map(|r| r.max(height));
        x += width + config.gap;
    }

    if !current.is_empty() {
        debug!(page, labels = current.len(), "last sheet");
        arrangement.sheets.push(Sheet {
            page,
            labels: current,
        });
    }

    Ok(arrangement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TextFitter;
    use crate::LabelSpec;

    fn designs(specs: &[LabelSpec]) -> (Arena<LabelDesign>, Vec<Id<LabelDesign>>) {
        let fitter = TextFitter::default();
        let mut arena = Arena::new();
        let ids = specs
            .iter()
            .map(|s| arena.alloc(LabelDesign::new(s.resolve(), &fitter)))
            .collect();
        (arena, ids)
    }

    fn origins(sheet: &Sheet) -> Vec<(f32, f32)> {
        sheet
            .labels
            .iter()
            .map(|l| (l.origin.x.0, l.origin.y.0))
            .collect()
    }

    #[test]
    fn three_small_labels_share_one_row() {
        let spec = LabelSpec::new(Mm(50.0), Mm(20.0));
        let (arena, ids) = designs(&[spec.clone(), spec.clone(), spec]);
        let result = arrange(&arena, &ids, &SheetConfig::default()).unwrap();

        assert_eq!(result.sheets.len(), 1);
        assert_eq!(result.sheets[0].page, 1);
        assert_eq!(
            origins(&result.sheets[0]),
            vec![(0.0, 280.0), (50.0, 280.0), (100.0, 280.0)]
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn quantity_expands_consecutively() {
        let (arena, ids) = designs(&[
            LabelSpec::new(Mm(50.0), Mm(20.0)).with_quantity(2),
            LabelSpec::new(Mm(30.0), Mm(20.0)).with_quantity(0),
        ]);
        let units: Vec<(Id<LabelDesign>, u32)> =
            expand(&arena, &ids).map(|u| (u.design, u.copy)).collect();
        assert_eq!(units, vec![(ids[0], 0), (ids[0], 1), (ids[1], 0)]);
    }

    #[test]
    fn an_exactly_full_row_wraps_the_next_label() {
        let (arena, ids) = designs(&[LabelSpec::new(Mm(200.0), Mm(20.0)).with_quantity(4)]);
        let result = arrange(&arena, &ids, &SheetConfig::default()).unwrap();
        assert_eq!(
            origins(&result.sheets[0]),
            vec![(0.0, 280.0), (200.0, 280.0), (400.0, 280.0), (0.0, 260.0)]
        );
    }

    #[test]
    fn rows_drop_by_the_tallest_label_plus_gap() {
        let config = SheetConfig::new(Mm(100.0), Mm(100.0))
            .with_margin(Mm(5.0))
            .with_gap(Mm(2.0));
        let (arena, ids) = designs(&[
            LabelSpec::new(Mm(40.0), Mm(10.0)),
            LabelSpec::new(Mm(40.0), Mm(15.0)),
            LabelSpec::new(Mm(40.0), Mm(10.0)),
        ]);
        let result = arrange(&arena, &ids, &config).unwrap();
        assert_eq!(
            origins(&result.sheets[0]),
            vec![(5.0, 85.0), (47.0, 80.0), (5.0, 68.0)]
        );
    }

    #[test]
    fn overflowing_rows_start_a_new_sheet() {
        let config = SheetConfig::new(Mm(100.0), Mm(50.0));
        let (arena, ids) = designs(&[LabelSpec::new(Mm(50.0), Mm(20.0)).with_quantity(5)]);
        let result = arrange(&arena, &ids, &config).unwrap();

        assert_eq!(result.sheets.len(), 2);
        assert_eq!(result.sheets[0].len(), 4);
        assert_eq!(result.sheets[1].page, 2);
        assert_eq!(origins(&result.sheets[1]), vec![(0.0, 30.0)]);
        assert_eq!(result.placed_count(), 5);
    }

    #[test]
    fn oversized_labels_are_placed_with_a_warning() {
        let (arena, ids) = designs(&[LabelSpec::new(Mm(700.0), Mm(20.0)).with_name("banner")]);
        let result = arrange(&arena, &ids, &SheetConfig::default()).unwrap();

        assert_eq!(result.placed_count(), 1);
        // wraps past the empty first row
        assert_eq!(result.sheets[0].labels[0].origin.x, Mm(0.0));
        assert_eq!(result.sheets[0].labels[0].origin.y, Mm(260.0));
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].name.as_deref(), Some("banner"));
        assert_eq!(result.warnings[0].page, 1);
    }

    #[test]
    fn a_too_tall_label_does_not_leave_an_empty_sheet() {
        let (arena, ids) = designs(&[LabelSpec::new(Mm(50.0), Mm(400.0)).with_quantity(2)]);
        let result = arrange(&arena, &ids, &SheetConfig::default()).unwrap();

        assert!(result.sheets.iter().all(|s| !s.is_empty()));
        assert_eq!(result.placed_count(), 2);
        assert_eq!(result.sheets[0].page, 1);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn negative_widths_never_move_the_cursor_back() {
        let (arena, ids) = designs(&[
            LabelSpec::new(Mm(50.0), Mm(20.0)),
            LabelSpec::new(Mm(-40.0), Mm(20.0)),
            LabelSpec::new(Mm(50.0), Mm(20.0)),
        ]);
        let result = arrange(&arena, &ids, &SheetConfig::default()).unwrap();
        let labels = &result.sheets[0].labels;
        assert_eq!(origins(&result.sheets[0]), vec![(0.0, 280.0), (50.0, 280.0), (50.0, 280.0)]);
        assert!(!labels[0].bounds().intersects(&labels[2].bounds()));
    }

    #[test]
    fn invalid_sheets_fail_before_packing() {
        let (arena, ids) = designs(&[LabelSpec::new(Mm(50.0), Mm(20.0))]);
        let config = SheetConfig::new(Mm(-1.0), Mm(300.0));
        assert!(arrange(&arena, &ids, &config).is_err());
    }

    #[test]
    fn empty_input_yields_no_sheets() {
        let (arena, ids) = designs(&[]);
        let result = arrange(&arena, &ids, &SheetConfig::default()).unwrap();
        assert!(result.sheets.is_empty());
    }
}
