use serde::{Deserialize, Serialize};

/// A device colour a renderer can paint an ink or substrate with
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Look up a palette colour by the name operators use for inks and
    /// substrates ("WHITE", "Navy", "gold", ...). Matching ignores case
    /// and surrounding whitespace. Names outside the palette render black.
    pub fn from_name(name: &str) -> Colour {
        let normalized = name.trim().to_lowercase();
        PALETTE
            .iter()
            .find(|(n, _)| *n == normalized)
            .map(|(_, c)| *c)
            .unwrap_or(colours::BLACK)
    }

    /// The colour as RGB components, converting grey levels as needed
    pub fn to_rgb(self) -> (f32, f32, f32) {
        match self {
            Colour::RGB { r, g, b } => (r, g, b),
            Colour::Grey { g } => (g, g, g),
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

const PALETTE: &[(&str, Colour)] = &[
    ("white", colours::WHITE),
    ("black", colours::BLACK),
    ("red", colours::RED),
    ("green", Colour::RGB { r: 0.0, g: 0.5, b: 0.0 }),
    ("blue", colours::BLUE),
    ("yellow", Colour::RGB { r: 1.0, g: 1.0, b: 0.0 }),
    ("orange", Colour::RGB { r: 1.0, g: 0.65, b: 0.0 }),
    ("purple", Colour::RGB { r: 0.5, g: 0.0, b: 0.5 }),
    ("pink", Colour::RGB { r: 1.0, g: 0.75, b: 0.8 }),
    ("brown", Colour::RGB { r: 0.6, g: 0.3, b: 0.0 }),
    ("gray", Colour::Grey { g: 0.5 }),
    ("grey", Colour::Grey { g: 0.5 }),
    ("cyan", Colour::RGB { r: 0.0, g: 1.0, b: 1.0 }),
    ("magenta", Colour::RGB { r: 1.0, g: 0.0, b: 1.0 }),
    ("silver", Colour::Grey { g: 0.75 }),
    ("gold", Colour::RGB { r: 1.0, g: 0.84, b: 0.0 }),
    ("navy", Colour::RGB { r: 0.0, g: 0.0, b: 0.5 }),
    ("maroon", Colour::RGB { r: 0.5, g: 0.0, b: 0.0 }),
    ("olive", Colour::RGB { r: 0.5, g: 0.5, b: 0.0 }),
    ("teal", Colour::RGB { r: 0.0, g: 0.5, b: 0.5 }),
    ("lime", Colour::RGB { r: 0.0, g: 1.0, b: 0.0 }),
    ("aqua", Colour::RGB { r: 0.0, g: 1.0, b: 1.0 }),
    ("fuchsia", Colour::RGB { r: 1.0, g: 0.0, b: 1.0 }),
];

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_lookup_ignores_case_and_padding() {
        assert_eq!(Colour::from_name("WHITE"), colours::WHITE);
        assert_eq!(Colour::from_name("  Red "), colours::RED);
        assert_eq!(
            Colour::from_name("TEAL"),
            Colour::new_rgb(0.0, 0.5, 0.5)
        );
    }

    #[test]
    fn unknown_names_render_black() {
        assert_eq!(Colour::from_name("ultraviolet"), colours::BLACK);
        assert_eq!(Colour::from_name(""), colours::BLACK);
        assert_eq!(Colour::from_name("pine green"), colours::BLACK);
    }

    #[test]
    fn grey_expands_to_rgb() {
        assert_eq!(Colour::from_name("silver"), Colour::new_grey(0.75));
        assert_eq!(Colour::from_name("silver").to_rgb(), (0.75, 0.75, 0.75));
        assert_eq!(Colour::from((1.0f32, 0.5, 0.0)).to_rgb(), (1.0, 0.5, 0.0));
    }
}
