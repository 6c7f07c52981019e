//! The layout run: resolve designs, group them by finish, pack each group onto
//! sheets and fit every design's text.
//!
//! ```
//! use label_sheet::{layout, LabelSpec, Mm, SheetConfig, TextLine};
//!
//! let specs = vec![
//!     LabelSpec::new(Mm(50.0), Mm(20.0))
//!         .with_quantity(3)
//!         .with_line(TextLine::new("FIRE PUMP", Mm(5.0))),
//!     LabelSpec::new(Mm(80.0), Mm(30.0)).with_colours("WHITE", "RED"),
//! ];
//!
//! let result = layout(&specs, &SheetConfig::default()).expect("valid sheet");
//! assert_eq!(result.groups().len(), 2);
//! assert_eq!(result.summary().total_labels, 4);
//! ```

use crate::arrange::{arrange, OversizeWarning};
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::group::{group_key, partition, GroupKey};
use crate::label::{LabelSpec, ResolvedLabel};
use crate::layout::{holes, Caption, Hole, TextFitter, TextLineFit};
use crate::sheet::{PlacedLabel, Sheet, SheetConfig};
use id_arena::{Arena, Id};
use serde::Serialize;
use tracing::{debug, info};

/// Everything drawn inside a label, relative to its bottom-left corner.
/// Shared by every copy of the design.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artwork {
    pub holes: Vec<Hole>,
    pub lines: Vec<TextLineFit>,
    pub caption: Caption,
}

/// A resolved design, the group it belongs to and its fitted artwork
#[derive(Debug, Clone)]
pub struct LabelDesign {
    pub label: ResolvedLabel,
    pub key: GroupKey,
    pub artwork: Artwork,
}

impl LabelDesign {
    /// Compute the group key and the fitted artwork for a resolved label
    pub fn new(label: ResolvedLabel, fitter: &TextFitter) -> LabelDesign {
        let artwork = Artwork {
            holes: holes(label.width, label.height, label.holes.as_ref()),
            lines: fitter.stack_lines(&label.lines, label.width, label.height),
            caption: Caption::for_label(label.width, label.height),
        };
        LabelDesign {
            key: group_key(&label),
            label,
            artwork,
        }
    }
}

/// The sheets for one substrate and ink combination
#[derive(Debug, Clone)]
pub struct SheetGroup {
    pub key: GroupKey,
    pub sheets: Vec<Sheet>,
}

/// Sheet counts for a whole run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSummary {
    pub total_sheets: usize,
    pub labels_per_sheet: Vec<usize>,
    pub total_labels: usize,
}

/// The finished layout of a run. Groups are in the order their first design
/// appeared in the input.
#[derive(Debug)]
pub struct Layout {
    pub config: SheetConfig,
    pub designs: Arena<LabelDesign>,
    groups: Vec<SheetGroup>,
    warnings: Vec<OversizeWarning>,
}

impl Layout {
    /// Every group with its sheets, in first-encountered order
    pub fn groups(&self) -> &[SheetGroup] {
        &self.groups
    }

    /// The sheets for one group, if any design in the run belongs to it
    pub fn sheets_for(&self, key: &GroupKey) -> Option<&[Sheet]> {
        self.groups
            .iter()
            .find(|g| &g.key == key)
            .map(|g| g.sheets.as_slice())
    }

    /// Look up a design by id. Ids handed out by a different layout are not
    /// found.
    pub fn design(&self, id: Id<LabelDesign>) -> Option<&LabelDesign> {
        self.designs.get(id)
    }

    /// The design a placed label is a copy of
    pub fn design_of(&self, placed: &PlacedLabel) -> Option<&LabelDesign> {
        self.design(placed.unit.design)
    }

    /// Labels that overflow their sheet
    pub fn warnings(&self) -> &[OversizeWarning] {
        &self.warnings
    }

    /// Every sheet of every group, in output order
    pub fn sheets(&self) -> impl Iterator<Item = (&GroupKey, &Sheet)> {
        self.groups
            .iter()
            .flat_map(|g| g.sheets.iter().map(move |s| (&g.key, s)))
    }

    /// Sheet and label counts across every group
    pub fn summary(&self) -> LayoutSummary {
        let labels_per_sheet: Vec<usize> = self.sheets().map(|(_, s)| s.len()).collect();
        LayoutSummary {
            total_sheets: labels_per_sheet.len(),
            total_labels: labels_per_sheet.iter().sum(),
            labels_per_sheet,
        }
    }
}

/// Runs layouts with a fixed configuration
#[derive(Debug, Default, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// An engine that lays out every run with `config`
    pub fn new(config: LayoutConfig) -> LayoutEngine {
        LayoutEngine { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out `specs` onto sheets. Fails only if the sheet configuration is
    /// unusable; oversized labels are placed anyway and reported through
    /// [Layout::warnings].
    pub fn layout(&self, specs: &[LabelSpec]) -> Result<Layout, LayoutError> {
        let sheet = self.config.sheet;
        sheet.validate()?;
        self.config.text.validate()?;

        let fitter = TextFitter::new(self.config.text);
        let mut designs: Arena<LabelDesign> = Arena::new();
        let ids: Vec<Id<LabelDesign>> = specs
            .iter()
            .map(|spec| designs.alloc(LabelDesign::new(spec.resolve(), &fitter)))
            .collect();

        let mut groups = Vec::new();
        let mut warnings = Vec::new();
        for (key, members) in partition(ids, |id| designs[*id].key.clone()) {
            let arrangement = arrange(&designs, &members, &sheet)?;
            debug!(
                group = %key,
                designs = members.len(),
                sheets = arrangement.sheets.len(),
                "arranged group"
            );
            warnings.extend(arrangement.warnings);
            groups.push(SheetGroup {
                key,
                sheets: arrangement.sheets,
            });
        }

        let layout = Layout {
            config: sheet,
            designs,
            groups,
            warnings,
        };
        info!(
            designs = specs.len(),
            groups = layout.groups.len(),
            sheets = layout.summary().total_sheets,
            oversized = layout.warnings.len(),
            "layout complete"
        );
        Ok(layout)
    }
}

/// Lay out `specs` on the given sheet with the default text fitting options
pub fn layout(specs: &[LabelSpec], sheet: &SheetConfig) -> Result<Layout, LayoutError> {
    LayoutEngine::new(LayoutConfig {
        sheet: *sheet,
        ..LayoutConfig::default()
    })
    .layout(specs)
}
