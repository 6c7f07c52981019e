use crate::label::HolePattern;
use crate::units::*;
use serde::Serialize;

/// A drilled hole, positioned relative to the label's bottom-left corner
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Hole {
    pub centre: Point,
    pub diameter: Mm,
}

impl Hole {
    pub fn radius(&self) -> Mm {
        self.diameter / 2.0
    }
}

/// Hole centres for a label of the given size, relative to its bottom-left
/// corner. Renderers of every format must reproduce exactly these points:
///
/// * 1 hole: on the left edge inset, at half height
/// * 2 holes: left and right edge insets, at half height
/// * 4 holes: one per corner, inset from both edges
/// * any other count: evenly spaced along the horizontal centreline between
///   the left and right insets
///
/// ```
/// use label_sheet::layout::hole_centres;
/// use label_sheet::{HolePattern, Mm, Point};
///
/// let pattern = HolePattern { count: 2, diameter: Mm(3.0), edge_distance: Mm(5.0) };
/// let centres = hole_centres(Mm(80.0), Mm(20.0), &pattern);
/// assert_eq!(centres, vec![Point::new(Mm(5.0), Mm(10.0)), Point::new(Mm(75.0), Mm(10.0))]);
/// ```
pub fn hole_centres(width: Mm, height: Mm, pattern: &HolePattern) -> Vec<Point> {
    let inset = pattern.edge_distance;
    let left = inset;
    let right = width - inset;
    let middle = height / 2.0;

    match pattern.count {
        0 => Vec::new(),
        1 => vec![Point::new(left, middle)],
        2 => vec![Point::new(left, middle), Point::new(right, middle)],
        4 => vec![
            Point::new(left, inset),
            Point::new(right, inset),
            Point::new(left, height - inset),
            Point::new(right, height - inset),
        ],
        n => {
            let spacing = (right - left) / (n - 1) as f32;
            (0..n)
                .map(|i| Point::new(left + spacing * i as f32, middle))
                .collect()
        }
    }
}

/// The holes to drill for a pattern, or none if the design has no holes
pub fn holes(width: Mm, height: Mm, pattern: Option<&HolePattern>) -> Vec<Hole> {
    pattern
        .map(|p| {
            hole_centres(width, height, p)
                .into_iter()
                .map(|centre| Hole {
                    centre,
                    diameter: p.diameter,
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(count: u32) -> HolePattern {
        HolePattern {
            count,
            diameter: Mm(4.0),
            edge_distance: Mm(5.0),
        }
    }

    fn xy(points: &[Point]) -> Vec<(f32, f32)> {
        points.iter().map(|p| (p.x.0, p.y.0)).collect()
    }

    #[test]
    fn single_hole_sits_left_of_centre() {
        let centres = hole_centres(Mm(60.0), Mm(20.0), &pattern(1));
        assert_eq!(xy(&centres), vec![(5.0, 10.0)]);
    }

    #[test]
    fn four_holes_go_in_the_corners() {
        let centres = hole_centres(Mm(60.0), Mm(20.0), &pattern(4));
        assert_eq!(
            xy(&centres),
            vec![(5.0, 5.0), (55.0, 5.0), (5.0, 15.0), (55.0, 15.0)]
        );
    }

    #[test]
    fn other_counts_are_evenly_spaced() {
        let centres = hole_centres(Mm(60.0), Mm(20.0), &pattern(3));
        assert_eq!(xy(&centres), vec![(5.0, 10.0), (30.0, 10.0), (55.0, 10.0)]);

        let five = hole_centres(Mm(90.0), Mm(20.0), &pattern(5));
        assert_eq!(
            xy(&five),
            vec![(5.0, 10.0), (25.0, 10.0), (45.0, 10.0), (65.0, 10.0), (85.0, 10.0)]
        );
    }

    #[test]
    fn holes_carry_their_diameter() {
        let p = pattern(2);
        let drilled = holes(Mm(60.0), Mm(20.0), Some(&p));
        assert_eq!(drilled.len(), 2);
        assert_eq!(drilled[1].radius(), Mm(2.0));
        assert!(holes(Mm(60.0), Mm(20.0), None).is_empty());
    }
}
