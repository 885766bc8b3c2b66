//! Product label rendering — QR encoding and text composition.
//!
//! Produces fixed-size RGB label images containing a shop title, a QR code,
//! and item text fields for a retail label printer.

pub mod font;
pub mod label;
pub mod qr;

// Re-exports for convenience
pub use font::LabelFont;
pub use label::{LabelRecord, render_label};

/// Label canvas width in pixels.
pub const LABEL_WIDTH: u32 = 300;

/// Label canvas height in pixels.
pub const LABEL_HEIGHT: u32 = 180;

/// Edge length of the rendered QR square in pixels.
pub const QR_SIZE: u32 = 80;

/// Errors that can occur while rendering a label.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("QR data is missing or empty")]
    MissingQrData,

    #[error("QR encoding failed: {0}")]
    QrEncode(String),

    #[error("no usable label font found on this host")]
    FontUnavailable,
}

/// Result type alias for label rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
