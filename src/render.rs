//! The hand-off between the layout engine and output backends.
//!
//! A backend implements [LabelRenderer] and turns one sheet's geometry into
//! the bytes of one output file. [render_layout] walks every sheet of a
//! [Layout] and names the files consistently, so every backend produces the
//! same file set for the same run.
//!
//! ```
//! use label_sheet::render::{render_layout, FileNaming, GeometryJsonRenderer};
//! use label_sheet::{layout, LabelSpec, Mm, SheetConfig};
//!
//! let specs = vec![LabelSpec::new(Mm(50.0), Mm(20.0)).with_quantity(2)];
//! let result = layout(&specs, &SheetConfig::default()).unwrap();
//!
//! let files = render_layout(&result, &mut GeometryJsonRenderer::default(), &FileNaming::default())
//!     .unwrap();
//! assert_eq!(files.len(), 1);
//! assert_eq!(files[0].name, "Black on White 0.8mm 01.json");
//! ```

use crate::colour::Colour;
use crate::engine::{Layout, LabelDesign};
use crate::error::LayoutError;
use crate::group::GroupKey;
use crate::layout::Hole;
use crate::rect::Rect;
use crate::sheet::{PlacedLabel, Sheet, SheetConfig};
use crate::units::*;
use serde::Serialize;

/// A backend that turns placed label geometry into an output format
pub trait LabelRenderer {
    type Error;

    /// File extension for the format, without the leading dot
    fn extension(&self) -> &str;

    /// Produce the contents of the file for one sheet
    fn render_sheet(&mut self, sheet: &SheetView<'_>) -> Result<Vec<u8>, Self::Error>;
}

/// One sheet, ready for a renderer
pub struct SheetView<'a> {
    pub key: &'a GroupKey,
    pub sheet: &'a Sheet,
    pub config: &'a SheetConfig,
    layout: &'a Layout,
}

impl<'a> SheetView<'a> {
    /// View one sheet of `layout` that belongs to the group `key`
    pub fn new(layout: &'a Layout, key: &'a GroupKey, sheet: &'a Sheet) -> SheetView<'a> {
        SheetView {
            key,
            sheet,
            config: &layout.config,
            layout,
        }
    }

    pub fn page(&self) -> u32 {
        self.sheet.page
    }

    /// Ink and substrate colours for everything on this sheet
    pub fn colours(&self) -> (Colour, Colour) {
        self.key.colours()
    }

    /// The sheet's labels in placement order. Labels whose design is not in
    /// this view's layout are skipped.
    pub fn labels(&self) -> impl Iterator<Item = LabelView<'a>> + '_ {
        let layout = self.layout;
        self.sheet.labels.iter().filter_map(move |placed| {
            layout
                .design_of(placed)
                .map(|design| LabelView { placed, design })
        })
    }
}

/// One placed label with its geometry translated into sheet coordinates
pub struct LabelView<'a> {
    pub placed: &'a PlacedLabel,
    pub design: &'a LabelDesign,
}

/// A text line positioned on the sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetText<'a> {
    pub text: &'a str,
    pub height: Mm,
    /// Middle of the line: the label's horizontal centre and half the glyph
    /// height above the baseline
    pub centre: Point,
    pub baseline: Mm,
}

impl<'a> LabelView<'a> {
    /// The label's outline on the sheet
    pub fn bounds(&self) -> Rect {
        self.placed.bounds()
    }

    pub fn name(&self) -> Option<&'a str> {
        self.design.label.name.as_deref()
    }

    /// Holes with their centres on the sheet
    pub fn holes(&self) -> impl Iterator<Item = Hole> + '_ {
        self.design.artwork.holes.iter().map(move |hole| Hole {
            centre: self.placed.to_sheet(hole.centre),
            diameter: hole.diameter,
        })
    }

    /// Fitted text lines followed by the size caption, on the sheet
    pub fn texts(&self) -> impl Iterator<Item = SheetText<'a>> + '_ {
        let origin = self.placed.origin;
        let artwork = &self.design.artwork;
        artwork
            .lines
            .iter()
            .map(move |fit| SheetText {
                text: fit.text.as_str(),
                height: fit.height,
                centre: Point::new(origin.x + fit.centre_x, origin.y + fit.middle()),
                baseline: origin.y + fit.baseline,
            })
            .chain(std::iter::once(SheetText {
                text: artwork.caption.text.as_str(),
                height: artwork.caption.height,
                centre: Point::new(
                    origin.x + artwork.caption.centre_x,
                    origin.y + artwork.caption.baseline + artwork.caption.height / 2.0,
                ),
                baseline: origin.y + artwork.caption.baseline,
            }))
    }
}

/// How output files are named
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FileNaming {
    /// Prepended to every file name, for example `"MLA "`
    pub prefix: String,
}

impl FileNaming {
    /// Name files with `prefix` in front of the group and page
    pub fn with_prefix<S: Into<String>>(prefix: S) -> FileNaming {
        FileNaming {
            prefix: prefix.into(),
        }
    }

    /// `"{prefix}{text} on {background} {thickness}mm[ Non AD] {page:02}.{ext}"`
    pub fn file_name(&self, key: &GroupKey, page: u32, extension: &str) -> String {
        format!("{}{} {:02}.{}", self.prefix, key, page, extension)
    }
}

/// One rendered output file
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFile {
    pub name: String,
    pub contents: Vec<u8>,
}

/// Render every sheet of a layout, group by group, in page order
pub fn render_layout<R: LabelRenderer>(
    layout: &Layout,
    renderer: &mut R,
    naming: &FileNaming,
) -> Result<Vec<RenderedFile>, R::Error> {
    let mut files = Vec::new();
    for (key, sheet) in layout.sheets() {
        let view = SheetView::new(layout, key, sheet);
        let contents = renderer.render_sheet(&view)?;
        files.push(RenderedFile {
            name: naming.file_name(key, sheet.page, renderer.extension()),
            contents,
        });
    }
    Ok(files)
}

/// Writes each sheet's geometry as JSON, for tools that do their own drawing
#[derive(Debug, Default, Clone)]
pub struct GeometryJsonRenderer {
    pub pretty: bool,
}

#[derive(Serialize)]
struct SheetDocument<'a> {
    group: String,
    page: u32,
    sheet: &'a SheetConfig,
    labels: Vec<LabelDocument<'a>>,
}

#[derive(Serialize)]
struct LabelDocument<'a> {
    name: Option<&'a str>,
    copy: u32,
    bounds: Rect,
    holes: Vec<Hole>,
    texts: Vec<SheetText<'a>>,
}

impl LabelRenderer for GeometryJsonRenderer {
    type Error = LayoutError;

    fn extension(&self) -> &str {
        "json"
    }

    fn render_sheet(&mut self, view: &SheetView<'_>) -> Result<Vec<u8>, LayoutError> {
        let document = SheetDocument {
            group: view.key.to_string(),
            page: view.page(),
            sheet: view.config,
            labels: view
                .labels()
                .map(|label| LabelDocument {
                    name: label.name(),
                    copy: label.placed.unit.copy,
                    bounds: label.bounds(),
                    holes: label.holes().collect(),
                    texts: label.texts().collect(),
                })
                .collect(),
        };
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(&document)?
        } else {
            serde_json::to_vec(&document)?
        };
        Ok(bytes)
    }
}
