//! Run configuration and job files.
//!
//! A job is a JSON document holding the sheet to print on, optional text
//! fitting tunables and the list of label designs. Every field has a default,
//! so the smallest useful job is just a list of labels:
//!
//! ```
//! use label_sheet::LayoutJob;
//!
//! let job = LayoutJob::from_json_str(r#"{
//!     "labels": [{ "width": 50, "height": 20, "quantity": 3 }]
//! }"#).expect("valid job");
//!
//! assert_eq!(job.config.sheet.width.0, 600.0);
//! assert_eq!(job.labels.len(), 1);
//! ```

use crate::engine::{Layout, LayoutEngine};
use crate::error::LayoutError;
use crate::label::LabelSpec;
use crate::layout::TextFitOptions;
use crate::sheet::SheetConfig;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Settings for a layout run
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub sheet: SheetConfig,
    pub text: TextFitOptions,
}

/// A complete layout request
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutJob {
    #[serde(flatten)]
    pub config: LayoutConfig,
    #[serde(default)]
    pub labels: Vec<LabelSpec>,
}

impl LayoutJob {
    pub fn from_json_str(json: &str) -> Result<LayoutJob, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<LayoutJob, LayoutError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Run the job
    pub fn run(&self) -> Result<Layout, LayoutError> {
        LayoutEngine::new(self.config.clone()).layout(&self.labels)
    }
}
