use crate::error::LayoutError;
use crate::label::TextLine;
use crate::units::Mm;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Average glyph width as a fraction of glyph height for the shop font
pub const GLYPH_ASPECT: f32 = 0.55;
/// Text never shrinks below this height
pub const MIN_TEXT_HEIGHT: Mm = Mm(0.5);
/// Clearance kept between text and the left and right label edges
pub const TEXT_PADDING: Mm = Mm(2.0);
/// Vertical space between stacked lines
pub const LINE_SPACING: Mm = Mm(1.0);
/// Glyph height of the size caption printed along the bottom of each label
pub const CAPTION_HEIGHT: Mm = Mm(1.5);
/// Baseline of the size caption above the label's bottom edge
pub const CAPTION_BASELINE: Mm = Mm(1.0);

/// Tunables for text fitting. The defaults are the values every production
/// run uses.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFitOptions {
    pub glyph_aspect: f32,
    pub padding: Mm,
    pub line_spacing: Mm,
    pub min_height: Mm,
}

impl Default for TextFitOptions {
    fn default() -> Self {
        TextFitOptions {
            glyph_aspect: GLYPH_ASPECT,
            padding: TEXT_PADDING,
            line_spacing: LINE_SPACING,
            min_height: MIN_TEXT_HEIGHT,
        }
    }
}

impl TextFitOptions {
    /// Reject tunables that would let fitted text collapse to nothing or
    /// stack lines upwards
    pub fn validate(&self) -> Result<(), LayoutError> {
        let positive = [
            ("glyph_aspect", self.glyph_aspect),
            ("min_height", self.min_height.0),
        ];
        for (option, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::InvalidTextOption {
                    option,
                    requirement: "must be positive",
                    value,
                });
            }
        }
        let non_negative = [
            ("padding", self.padding.0),
            ("line_spacing", self.line_spacing.0),
        ];
        for (option, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LayoutError::InvalidTextOption {
                    option,
                    requirement: "must not be negative",
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Estimate how wide `text` renders at the given glyph height. This is a
/// character-count approximation, not real font metrics.
pub fn estimate_text_width(text: &str, height: Mm, glyph_aspect: f32) -> Mm {
    height * (text.chars().count() as f32 * glyph_aspect)
}

/// Glyph height to use so that `text` fits in `available_width` less
/// `padding` on both sides, using the default aspect ratio and floor
///
/// ```
/// use label_sheet::{layout::fit_text_height, Mm};
///
/// // 20 * 5 * 0.55 = 55mm of text does not fit in 50 - 2 * 2 = 46mm
/// let height = fit_text_height("ABCDEFGHIJKLMNOPQRST", Mm(50.0), Mm(5.0), Mm(2.0));
/// assert!(height < Mm(5.0));
/// assert!(height >= Mm(0.5));
/// ```
pub fn fit_text_height(text: &str, available_width: Mm, desired_height: Mm, padding: Mm) -> Mm {
    let fitter = TextFitter::new(TextFitOptions {
        padding,
        ..TextFitOptions::default()
    });
    fitter.fit_within(text, available_width, desired_height).height
}

/// The outcome of fitting one string
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct TextFit {
    pub height: Mm,
    /// Estimated rendered width at `height`
    pub estimated_width: Mm,
}

/// Where one text line ends up on a label. Vertical positions are measured
/// from the label's bottom edge and horizontal ones from its left edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLineFit {
    /// Index of the line in the design's line list, blank lines included
    pub line: usize,
    pub text: String,
    pub desired_height: Mm,
    pub height: Mm,
    pub baseline: Mm,
    /// The line is centred on this offset
    pub centre_x: Mm,
    pub estimated_width: Mm,
}

impl TextLineFit {
    /// True if auto-fit had to shrink the line
    pub fn is_shrunk(&self) -> bool {
        self.height < self.desired_height
    }

    /// Vertical middle of the line, the anchor used by middle-centre
    /// attachment in vector drawing formats
    pub fn middle(&self) -> Mm {
        self.baseline + self.height / 2.0
    }
}

/// The `"{width}x{height}mm"` size caption along the bottom of a label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Caption {
    pub text: String,
    pub height: Mm,
    pub baseline: Mm,
    pub centre_x: Mm,
}

impl Caption {
    pub fn for_label(width: Mm, height: Mm) -> Caption {
        Caption {
            text: format!("{}x{}mm", width.0, height.0),
            height: CAPTION_HEIGHT,
            baseline: CAPTION_BASELINE,
            centre_x: width / 2.0,
        }
    }
}

/// Auto-fits text to label interiors
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TextFitter {
    pub options: TextFitOptions,
}

impl TextFitter {
    /// A fitter using the given tunables
    pub fn new(options: TextFitOptions) -> TextFitter {
        TextFitter { options }
    }

    /// Fit `text` into a label `available_width` wide, keeping the padding
    /// clear on both sides. The result is never taller than `desired_height`
    /// and never shorter than the minimum height (or `desired_height`, if
    /// that is smaller still).
    pub fn fit_within(&self, text: &str, available_width: Mm, desired_height: Mm) -> TextFit {
        let interior = available_width - self.options.padding * 2.0;
        let estimated = estimate_text_width(text, desired_height, self.options.glyph_aspect);

        if estimated <= interior || !estimated.is_positive() {
            return TextFit {
                height: desired_height,
                estimated_width: estimated,
            };
        }

        let scaled = desired_height * interior.ratio(estimated);
        let floor = self.options.min_height.min(desired_height);
        // NaN scales (from a NaN width) fall through to the floor
        let height = if scaled >= floor { scaled } else { floor };

        TextFit {
            height,
            estimated_width: estimate_text_width(text, height, self.options.glyph_aspect),
        }
    }

    /// Fit every non-blank line to a label's width and stack the lines into a
    /// block centred vertically on the label. Each line is centred
    /// horizontally on its own.
    pub fn stack_lines(&self, lines: &[TextLine], width: Mm, height: Mm) -> Vec<TextLineFit> {
        let mut fits: Vec<TextLineFit> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_blank())
            .map(|(i, line)| {
                let fit = self.fit_within(&line.text, width, line.height);
                if fit.height < line.height {
                    trace!(
                        text = %line.text,
                        desired = line.height.0,
                        fitted = fit.height.0,
                        "shrinking text line to fit"
                    );
                }
                TextLineFit {
                    line: i,
                    text: line.text.clone(),
                    desired_height: line.height,
                    height: fit.height,
                    baseline: Mm(0.0),
                    centre_x: width / 2.0,
                    estimated_width: fit.estimated_width,
                }
            })
            .collect();

        if fits.is_empty() {
            return fits;
        }

        let gaps = self.options.line_spacing * (fits.len() - 1) as f32;
        let block: Mm = fits.iter().map(|f| f.height).sum::<Mm>() + gaps;

        // the cursor walks down from the top of the centred block; each line
        // sits with its baseline at the bottom of its own slot
        let mut cursor = (height + block) / 2.0;
        for fit in fits.iter_mut() {
            cursor -= fit.height;
            fit.baseline = cursor;
            cursor -= self.options.line_spacing;
        }

        fits
    }
}
