//! Raster printing through platform page devices.
//!
//! Models the OS printing surface as a capability trait pair
//! ([`PrinterHost`] / [`PageDevice`]) so dispatch and layout stay
//! platform-agnostic. Adapters:
//! - Windows: GDI printer device contexts
//! - unix: CUPS via `lpstat` / `lpr`

pub mod device;
pub mod dispatch;
pub mod layout;

#[cfg(unix)]
pub mod cups;
#[cfg(windows)]
pub mod gdi;

// Re-exports for convenience
pub use device::{PageDevice, PageMetrics, PrinterHost};
pub use dispatch::print_image;
pub use layout::{Placement, fit_to_page};

/// Reference screen DPI used to derive the device scale factor.
pub const REFERENCE_DPI: u32 = 72;

/// Errors that can occur during printer operations.
#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("no printer is configured on this host")]
    NoPrinter,

    #[error("printer not found: {0}")]
    PrinterNotFound(String),

    #[error("device context error: {0}")]
    Device(String),

    #[error("print job error: {0}")]
    Job(String),

    #[error("printing is not supported on this platform")]
    Unsupported,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for printing operations.
pub type Result<T> = std::result::Result<T, PrintError>;

/// Construct the printer host for the current platform.
pub fn platform_host() -> Result<Box<dyn PrinterHost>> {
    #[cfg(windows)]
    {
        Ok(Box::new(gdi::GdiHost::new()))
    }
    #[cfg(unix)]
    {
        Ok(Box::new(cups::CupsHost::new()))
    }
    #[cfg(not(any(windows, unix)))]
    {
        Err(PrintError::Unsupported)
    }
}
