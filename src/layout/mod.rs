//! Geometry that lives inside a single label: auto-fitted text lines, the
//! size caption, and hole centres.
//!
//! Everything here is measured relative to the label's bottom-left corner, so
//! the same results apply to every copy of a design wherever it is placed.
//!
//! # Example
//!
//! ```
//! use label_sheet::layout::TextFitter;
//! use label_sheet::{Mm, TextLine};
//!
//! let lines = vec![
//!     TextLine::new("ISOLATOR", Mm(6.0)),
//!     TextLine::new("", Mm(6.0)),
//!     TextLine::new("DB-2 / CIRCUIT 14 / LIGHTING", Mm(4.0)),
//! ];
//!
//! let fits = TextFitter::default().stack_lines(&lines, Mm(50.0), Mm(25.0));
//! assert_eq!(fits.len(), 2);
//! assert!(fits[0].baseline > fits[1].baseline);
//! assert!(fits[1].is_shrunk());
//! ```

mod holes;
mod text;

pub use holes::*;
pub use text::*;
