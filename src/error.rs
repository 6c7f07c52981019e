use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The sheet width or height was zero, negative, or not a number
    #[error("sheet {dimension} must be positive, got {value}")]
    InvalidSheetDimension { dimension: &'static str, value: f32 },

    /// The sheet margin or gap was negative or not a number
    #[error("sheet {field} must not be negative, got {value}")]
    NegativeSpacing { field: &'static str, value: f32 },

    /// A text fitting tunable was out of range
    #[error("text option {option} {requirement}, got {value}")]
    InvalidTextOption {
        option: &'static str,
        requirement: &'static str,
        value: f32,
    },

    /// The margins consume the whole sheet
    #[error("a margin of {margin} leaves no usable area on a {width} x {height} sheet")]
    NoUsableArea { width: f32, height: f32, margin: f32 },

    #[error(transparent)]
    /// An I/O error occurred while reading a job
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [serde_json] failed to parse a job or serialise geometry
    Json(#[from] serde_json::Error),
}
