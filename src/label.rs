//! Label designs as authored by operators, and the resolve step that fills in
//! every default before a design reaches the layout engine.
//!
//! ```
//! use label_sheet::{AdhesiveStyle, LabelSpec, Mm, TextLine, Thickness};
//!
//! let spec = LabelSpec::new(Mm(50.0), Mm(20.0))
//!     .with_quantity(0)
//!     .with_line(TextLine::new("PUMP 1", Mm(5.0)));
//!
//! let resolved = spec.resolve();
//! assert_eq!(resolved.quantity, 1);
//! assert_eq!(resolved.text_colour, "Black");
//! assert_eq!(resolved.background, "White");
//! assert_eq!(resolved.thickness, Thickness::from_mm(Mm(0.8)));
//! assert_eq!(resolved.style, AdhesiveStyle::Adhesive);
//! ```

use crate::units::Mm;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_TEXT_COLOUR: &str = "Black";
pub const DEFAULT_BACKGROUND: &str = "White";
pub const DEFAULT_THICKNESS: Mm = Mm(0.8);
pub const DEFAULT_TEXT_HEIGHT: Mm = Mm(2.0);
pub const DEFAULT_HOLE_EDGE_DISTANCE: Mm = Mm(5.0);

/// Whether the label stock carries an adhesive backing
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdhesiveStyle {
    #[default]
    Adhesive,
    #[serde(rename = "Non Adhesive", alias = "NonAdhesive")]
    NonAdhesive,
}

impl fmt::Display for AdhesiveStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdhesiveStyle::Adhesive => write!(f, "Adhesive"),
            AdhesiveStyle::NonAdhesive => write!(f, "Non Adhesive"),
        }
    }
}

/// A nominal material thickness, held in hundredths of a millimetre so that
/// it can be compared and hashed exactly
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Thickness(u32);

impl Thickness {
    /// Round a length to the nearest hundredth of a millimetre. Negative
    /// lengths become zero.
    pub fn from_mm(mm: Mm) -> Thickness {
        Thickness((mm.0 * 100.0).round().max(0.0) as u32)
    }

    /// The thickness as a length
    pub fn as_mm(self) -> Mm {
        Mm(self.0 as f32 / 100.0)
    }
}

impl Default for Thickness {
    fn default() -> Self {
        Thickness::from_mm(DEFAULT_THICKNESS)
    }
}

/// Formats without a unit, the way thicknesses appear in file names: `0.8`, `1.6`, `2`
impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_mm().0)
    }
}

impl Serialize for Thickness {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_mm().serialize(serializer)
    }
}

/// A top or left spacing hint on a text line. The engine never interprets
/// these; they are carried through for the renderers.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum Spacing {
    #[default]
    Auto,
    Offset(Mm),
}

impl FromStr for Spacing {
    type Err = std::num::ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("auto") {
            return Ok(Spacing::Auto);
        }
        s.parse::<f32>().map(|v| Spacing::Offset(Mm(v)))
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spacing::Auto => write!(f, "AUTO"),
            Spacing::Offset(mm) => write!(f, "{}", mm.0),
        }
    }
}

impl Serialize for Spacing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Spacing::Auto => serializer.serialize_str("AUTO"),
            Spacing::Offset(mm) => serializer.serialize_f32(mm.0),
        }
    }
}

impl<'de> Deserialize<'de> for Spacing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Ok(Spacing::Offset(Mm(v))),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// One line of text on a label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    #[serde(default)]
    pub text: String,
    /// The glyph height the designer asked for, before any auto-fit
    #[serde(default)]
    pub height: Mm,
    #[serde(default)]
    pub spacing_top: Spacing,
    #[serde(default)]
    pub spacing_left: Spacing,
}

impl TextLine {
    /// A line with automatic spacing
    pub fn new<S: Into<String>>(text: S, height: Mm) -> TextLine {
        TextLine {
            text: text.into(),
            height,
            spacing_top: Spacing::Auto,
            spacing_left: Spacing::Auto,
        }
    }

    /// Replace the top and left spacing hints
    pub fn with_spacing(self, top: Spacing, left: Spacing) -> TextLine {
        TextLine {
            spacing_top: top,
            spacing_left: left,
            ..self
        }
    }

    /// Lines with nothing but whitespace are skipped when fitting and rendering
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One label design. Optional fields fall back to the shop defaults when
/// the design is [resolved](LabelSpec::resolve).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSpec {
    pub name: Option<String>,
    pub width: Mm,
    pub height: Mm,
    pub thickness: Option<Mm>,
    pub background: Option<String>,
    pub text_colour: Option<String>,
    /// Number of physical copies; anything below one is treated as one
    pub quantity: i32,
    pub style: Option<AdhesiveStyle>,
    pub hole_count: u32,
    pub hole_diameter: Mm,
    pub hole_edge_distance: Mm,
    pub lines: Vec<TextLine>,
}

impl Default for LabelSpec {
    fn default() -> Self {
        LabelSpec {
            name: None,
            width: Mm(0.0),
            height: Mm(0.0),
            thickness: None,
            background: None,
            text_colour: None,
            quantity: 1,
            style: None,
            hole_count: 0,
            hole_diameter: Mm(0.0),
            hole_edge_distance: Mm(0.0),
            lines: Vec::new(),
        }
    }
}

impl LabelSpec {
    /// Start a design of the given size, with a quantity of one and every
    /// other attribute left to its default
    pub fn new(width: Mm, height: Mm) -> LabelSpec {
        LabelSpec {
            width,
            height,
            ..LabelSpec::default()
        }
    }

    /// Set the operator-facing name, used in warnings
    pub fn with_name<S: Into<String>>(self, name: S) -> LabelSpec {
        LabelSpec {
            name: Some(name.into()),
            ..self
        }
    }

    /// Set the number of copies
    pub fn with_quantity(self, quantity: i32) -> LabelSpec {
        LabelSpec { quantity, ..self }
    }

    /// Set the nominal material thickness
    pub fn with_thickness(self, thickness: Mm) -> LabelSpec {
        LabelSpec {
            thickness: Some(thickness),
            ..self
        }
    }

    /// Set the text (ink) colour and the background (substrate) colour
    pub fn with_colours<T: Into<String>, B: Into<String>>(self, text: T, background: B) -> LabelSpec {
        LabelSpec {
            text_colour: Some(text.into()),
            background: Some(background.into()),
            ..self
        }
    }

    /// Set whether the stock carries an adhesive backing
    pub fn with_style(self, style: AdhesiveStyle) -> LabelSpec {
        LabelSpec {
            style: Some(style),
            ..self
        }
    }

    /// Drill `count` holes of the given diameter, inset `edge_distance` from
    /// the edges
    pub fn with_holes(self, count: u32, diameter: Mm, edge_distance: Mm) -> LabelSpec {
        LabelSpec {
            hole_count: count,
            hole_diameter: diameter,
            hole_edge_distance: edge_distance,
            ..self
        }
    }

    /// Append a text line below the existing ones
    pub fn with_line(mut self, line: TextLine) -> LabelSpec {
        self.lines.push(line);
        self
    }

    /// Apply every default so the rest of the engine only ever sees complete
    /// values
    pub fn resolve(&self) -> ResolvedLabel {
        let width = self.dimension("width", self.width);
        let height = self.dimension("height", self.height);
        let thickness = match self.thickness {
            Some(t) if t.is_positive() => t,
            _ => DEFAULT_THICKNESS,
        };

        let holes = if self.hole_count > 0 && self.hole_diameter.is_positive() {
            Some(HolePattern {
                count: self.hole_count,
                diameter: self.hole_diameter,
                edge_distance: if self.hole_edge_distance.is_positive() {
                    self.hole_edge_distance
                } else {
                    DEFAULT_HOLE_EDGE_DISTANCE
                },
            })
        } else {
            None
        };

        let lines = self
            .lines
            .iter()
            .map(|line| TextLine {
                height: if line.height.is_positive() {
                    line.height
                } else {
                    DEFAULT_TEXT_HEIGHT
                },
                ..line.clone()
            })
            .collect();

        ResolvedLabel {
            name: self.name.clone(),
            width,
            height,
            thickness: Thickness::from_mm(thickness),
            background: non_blank_or(&self.background, DEFAULT_BACKGROUND),
            text_colour: non_blank_or(&self.text_colour, DEFAULT_TEXT_COLOUR),
            quantity: self.quantity.max(1) as u32,
            style: self.style.unwrap_or_default(),
            holes,
            lines,
        }
    }
}

impl LabelSpec {
    /// Negative and NaN sizes take no room on the sheet
    fn dimension(&self, field: &'static str, value: Mm) -> Mm {
        if value.0 > 0.0 {
            return value;
        }
        if value.0 < 0.0 || value.0.is_nan() {
            warn!(
                label = self.name.as_deref().unwrap_or("unnamed"),
                field,
                value = value.0,
                "label size is not positive, treating it as zero"
            );
        }
        Mm(0.0)
    }
}

fn non_blank_or(value: &Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => default.to_string(),
    }
}

/// How the holes on a label are drilled
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct HolePattern {
    pub count: u32,
    pub diameter: Mm,
    /// Inset of the outermost hole centres from the label edges
    pub edge_distance: Mm,
}

/// A [LabelSpec] with every default applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLabel {
    pub name: Option<String>,
    pub width: Mm,
    pub height: Mm,
    pub thickness: Thickness,
    pub background: String,
    pub text_colour: String,
    pub quantity: u32,
    pub style: AdhesiveStyle,
    pub holes: Option<HolePattern>,
    pub lines: Vec<TextLine>,
}

impl ResolvedLabel {
    /// The design's name, or `"unnamed"`
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_colours_fall_back_to_defaults() {
        let resolved = LabelSpec::new(Mm(50.0), Mm(20.0))
            .with_colours("  ", "")
            .resolve();
        assert_eq!(resolved.text_colour, "Black");
        assert_eq!(resolved.background, "White");
    }

    #[test]
    fn explicit_colours_are_kept_verbatim() {
        let resolved = LabelSpec::new(Mm(50.0), Mm(20.0))
            .with_colours("WHITE", "NAVY")
            .resolve();
        assert_eq!(resolved.text_colour, "WHITE");
        assert_eq!(resolved.background, "NAVY");
    }

    #[test]
    fn non_positive_quantity_becomes_one() {
        assert_eq!(LabelSpec::new(Mm(1.0), Mm(1.0)).with_quantity(0).resolve().quantity, 1);
        assert_eq!(LabelSpec::new(Mm(1.0), Mm(1.0)).with_quantity(-4).resolve().quantity, 1);
        assert_eq!(LabelSpec::new(Mm(1.0), Mm(1.0)).with_quantity(7).resolve().quantity, 7);
    }

    #[test]
    fn zero_thickness_uses_default() {
        let resolved = LabelSpec::new(Mm(1.0), Mm(1.0)).with_thickness(Mm(0.0)).resolve();
        assert_eq!(resolved.thickness, Thickness::from_mm(Mm(0.8)));
        let thick = LabelSpec::new(Mm(1.0), Mm(1.0)).with_thickness(Mm(1.6)).resolve();
        assert_eq!(thick.thickness.to_string(), "1.6");
    }

    #[test]
    fn holes_need_a_diameter() {
        let none = LabelSpec::new(Mm(80.0), Mm(20.0))
            .with_holes(2, Mm(0.0), Mm(4.0))
            .resolve();
        assert_eq!(none.holes, None);

        let defaulted = LabelSpec::new(Mm(80.0), Mm(20.0))
            .with_holes(2, Mm(3.0), Mm(0.0))
            .resolve();
        assert_eq!(
            defaulted.holes,
            Some(HolePattern {
                count: 2,
                diameter: Mm(3.0),
                edge_distance: Mm(5.0),
            })
        );
    }

    #[test]
    fn missing_line_height_defaults_to_two_mm() {
        let resolved = LabelSpec::new(Mm(50.0), Mm(20.0))
            .with_line(TextLine::new("A", Mm(0.0)))
            .with_line(TextLine::new("B", Mm(4.0)))
            .resolve();
        assert_eq!(resolved.lines[0].height, Mm(2.0));
        assert_eq!(resolved.lines[1].height, Mm(4.0));
    }

    #[test]
    fn spacing_hints_survive_resolve() {
        let line = TextLine::new("TAG", Mm(0.0)).with_spacing(Spacing::Offset(Mm(3.0)), Spacing::Auto);
        let resolved = LabelSpec::new(Mm(50.0), Mm(20.0)).with_line(line).resolve();
        assert_eq!(resolved.lines[0].spacing_top, Spacing::Offset(Mm(3.0)));
        assert_eq!(resolved.lines[0].spacing_left, Spacing::Auto);
        assert_eq!(resolved.lines[0].spacing_top.to_string(), "3");
    }

    #[test]
    fn negative_sizes_resolve_to_zero() {
        let resolved = LabelSpec::new(Mm(-40.0), Mm(f32::NAN)).resolve();
        assert_eq!(resolved.width, Mm(0.0));
        assert_eq!(resolved.height, Mm(0.0));
        assert_eq!(LabelSpec::new(Mm(40.0), Mm(12.5)).resolve().height, Mm(12.5));
    }

    #[test]
    fn thickness_display() {
        assert_eq!(Thickness::from_mm(Mm(0.8)).to_string(), "0.8");
        assert_eq!(Thickness::from_mm(Mm(2.0)).to_string(), "2");
    }

    #[test]
    fn spacing_parses_auto_and_numbers() {
        assert_eq!("AUTO".parse::<Spacing>().unwrap(), Spacing::Auto);
        assert_eq!("auto".parse::<Spacing>().unwrap(), Spacing::Auto);
        assert_eq!("".parse::<Spacing>().unwrap(), Spacing::Auto);
        assert_eq!("2.5".parse::<Spacing>().unwrap(), Spacing::Offset(Mm(2.5)));
        assert!("left".parse::<Spacing>().is_err());
    }

    #[test]
    fn spec_deserializes_with_defaults() {
        let json = r#"{
            "width": 50, "height": 20, "quantity": 3,
            "style": "Non Adhesive",
            "lines": [{"text": "VALVE", "height": 5, "spacing_top": "AUTO", "spacing_left": 1.5}]
        }"#;
        let spec: LabelSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.width, Mm(50.0));
        assert_eq!(spec.quantity, 3);
        assert_eq!(spec.style, Some(AdhesiveStyle::NonAdhesive));
        assert_eq!(spec.lines[0].spacing_top, Spacing::Auto);
        assert_eq!(spec.lines[0].spacing_left, Spacing::Offset(Mm(1.5)));
        assert_eq!(spec.text_colour, None);
    }
}
