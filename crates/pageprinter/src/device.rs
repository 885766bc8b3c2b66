//! Capability traits over the OS printing surface.

use image::RgbImage;

use crate::Result;
use crate::layout::Placement;

/// Resolution and physical page dimensions reported by an open device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetrics {
    /// Horizontal device resolution in dots per inch.
    pub dpi: u32,
    /// Physical page width in device units.
    pub page_width: u32,
    /// Physical page height in device units.
    pub page_height: u32,
}

/// A drawable surface bound to one printer for the duration of a single job.
///
/// Implementations release their native handles in `Drop`, so the surface is
/// reclaimed on every exit path, including errors mid-job.
pub trait PageDevice {
    fn metrics(&self) -> PageMetrics;

    fn begin_doc(&mut self, name: &str) -> Result<()>;

    fn begin_page(&mut self) -> Result<()>;

    /// Draw `image` scaled into the destination rectangle.
    fn draw_rgb(&mut self, image: &RgbImage, dest: Placement) -> Result<()>;

    fn end_page(&mut self) -> Result<()>;

    fn end_doc(&mut self) -> Result<()>;
}

/// Entry point into a platform's printer enumeration and device creation.
pub trait PrinterHost {
    /// Name of the host's default printer.
    fn default_printer(&self) -> Result<String>;

    /// Names of all printers visible to this host.
    fn list_printers(&self) -> Result<Vec<String>>;

    /// Open a device bound to the named printer.
    fn open(&self, printer: &str) -> Result<Box<dyn PageDevice>>;
}
