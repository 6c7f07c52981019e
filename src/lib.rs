//! Sheet layout for manufactured labels.
//!
//! Given a run of [LabelSpec]s, the engine expands each design into its
//! copies, keeps labels of the same finish together, packs them row by row
//! onto fixed-size print sheets and auto-fits every text line to its label.
//! The result is plain geometry; output formats are left to
//! [render::LabelRenderer] implementations.

mod arrange;
pub use arrange::*;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod engine;
pub use engine::*;

mod error;
pub use error::*;

mod group;
pub use group::*;

mod label;
pub use label::*;

pub mod layout;

mod rect;
pub use rect::*;

pub mod render;

mod sheet;
pub use sheet::*;

mod units;
pub use units::*;
