//! Print job dispatch — resolve a printer, open its device, place the image.

use image::RgbImage;
use tracing::{debug, info};

use crate::Result;
use crate::device::PrinterHost;
use crate::layout;

/// Send `image` to the named printer, or to the host default when `printer`
/// is `None`.
///
/// The opened device is dropped on every path, which releases its native
/// handles even when a call fails mid-job.
pub fn print_image(host: &dyn PrinterHost, image: &RgbImage, printer: Option<&str>) -> Result<()> {
    let name = match printer {
        Some(name) => name.to_string(),
        None => host.default_printer()?,
    };

    let mut device = host.open(&name)?;
    let metrics = device.metrics();
    let dest = layout::fit_to_page(image.width(), image.height(), &metrics);

    debug!(printer = %name, ?metrics, ?dest, "Placing image on page");

    device.begin_doc("Label Print")?;
    device.begin_page()?;
    device.draw_rgb(image, dest)?;
    device.end_page()?;
    device.end_doc()?;

    info!(printer = %name, width = dest.width, height = dest.height, "Print job submitted");
    Ok(())
}
