//! CUPS adapter — printer listing via `lpstat`, job submission via `lpr`.

use std::io::Cursor;
use std::process::Command;

use image::{ImageFormat, RgbImage};
use tracing::info;

use crate::device::{PageDevice, PageMetrics, PrinterHost};
use crate::layout::Placement;
use crate::{PrintError, Result};

// CUPS exposes no device capabilities before submission, so jobs are placed
// on assumed 4x6 inch label stock at 203 dpi; CUPS refits to the real media.
const ASSUMED_DPI: u32 = 203;
const PAGE_WIDTH: u32 = 812;
const PAGE_HEIGHT: u32 = 1218;
const MM_PER_INCH: f32 = 25.4;

/// Printer host backed by the CUPS command-line tools.
#[derive(Debug, Default)]
pub struct CupsHost;

impl CupsHost {
    pub fn new() -> Self {
        Self
    }
}

impl PrinterHost for CupsHost {
    fn default_printer(&self) -> Result<String> {
        let output = Command::new("lpstat").arg("-d").output()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_default_printer(&stdout).ok_or(PrintError::NoPrinter)
    }

    fn list_printers(&self) -> Result<Vec<String>> {
        let output = Command::new("lpstat").arg("-p").output()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            if stderr.contains("No destinations added") || stderr.contains("No printers") {
                return Ok(Vec::new());
            }
            return Err(PrintError::Device(format!(
                "lpstat -p failed: {}",
                stderr.trim()
            )));
        }

        Ok(parse_lpstat_printers(&stdout))
    }

    fn open(&self, printer: &str) -> Result<Box<dyn PageDevice>> {
        if printer.trim().is_empty() {
            return Err(PrintError::PrinterNotFound(printer.to_string()));
        }
        Ok(Box::new(CupsDevice {
            printer: printer.to_string(),
            page: None,
        }))
    }
}

/// Buffers the placed page and submits it as one `lpr` job at `end_doc`.
///
/// Holds no native handles, so there is nothing to release beyond the buffer.
struct CupsDevice {
    printer: String,
    page: Option<(RgbImage, Placement)>,
}

impl PageDevice for CupsDevice {
    fn metrics(&self) -> PageMetrics {
        PageMetrics {
            dpi: ASSUMED_DPI,
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
        }
    }

    fn begin_doc(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }

    fn begin_page(&mut self) -> Result<()> {
        Ok(())
    }

    fn draw_rgb(&mut self, image: &RgbImage, dest: Placement) -> Result<()> {
        let scaled = image::imageops::resize(
            image,
            dest.width.max(1),
            dest.height.max(1),
            image::imageops::FilterType::Lanczos3,
        );
        self.page = Some((scaled, dest));
        Ok(())
    }

    fn end_page(&mut self) -> Result<()> {
        Ok(())
    }

    fn end_doc(&mut self) -> Result<()> {
        let Some((image, dest)) = self.page.take() else {
            return Err(PrintError::Job("no page drawn before end_doc".to_string()));
        };
        submit_lpr(&self.printer, image, dest)
    }
}

fn submit_lpr(printer: &str, image: RgbImage, dest: Placement) -> Result<()> {
    let mut png = Cursor::new(Vec::new());
    image
        .write_to(&mut png, ImageFormat::Png)
        .map_err(|e| PrintError::Job(format!("failed to encode page: {e}")))?;

    let tmp_dir = std::env::temp_dir().join("labelpress-print");
    std::fs::create_dir_all(&tmp_dir)?;
    let tmp_file = tmp_dir.join("current_job.png");
    std::fs::write(&tmp_file, png.into_inner())?;

    let media = format!(
        "Custom.{:.0}x{:.0}mm",
        device_units_to_mm(dest.width),
        device_units_to_mm(dest.height)
    );
    let output = Command::new("lpr")
        .arg("-P")
        .arg(printer)
        .arg("-o")
        .arg(format!("media={media}"))
        .arg(&tmp_file)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PrintError::Job(format!("lpr failed: {}", stderr.trim())));
    }

    let _ = std::fs::remove_file(&tmp_file);
    info!(printer = %printer, media = %media, "lpr job submitted");
    Ok(())
}

fn device_units_to_mm(units: u32) -> f32 {
    units as f32 / ASSUMED_DPI as f32 * MM_PER_INCH
}

fn parse_default_printer(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("system default destination:"))
        .map(|rest| rest.trim().to_string())
        .filter(|name| !name.is_empty())
}

fn parse_lpstat_printers(stdout: &str) -> Vec<String> {
    let mut printers = Vec::new();

    for line in stdout.lines() {
        let Some(rest) = line.trim().strip_prefix("printer ") else {
            continue;
        };
        if let Some(name) = rest.split_whitespace().next() {
            printers.push(name.to_string());
        }
    }

    printers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lpstat_printer_lines() {
        let input = "printer EPSON_TM is idle. enabled since Thu 01 Jan 00:00:00 1970\nprinter Label_Printer is disabled. since Thu 01 Jan 00:00:00 1970\n";
        let printers = parse_lpstat_printers(input);
        assert_eq!(printers, vec!["EPSON_TM", "Label_Printer"]);
    }

    #[test]
    fn parse_lpstat_ignores_unrelated_lines() {
        let input = "scheduler is running\nno entries\n";
        assert!(parse_lpstat_printers(input).is_empty());
    }

    #[test]
    fn parse_default_printer_line() {
        let input = "system default destination: Zebra_GK420d\n";
        assert_eq!(
            parse_default_printer(input).as_deref(),
            Some("Zebra_GK420d")
        );
    }

    #[test]
    fn parse_default_printer_absent() {
        assert_eq!(parse_default_printer("no system default destination\n"), None);
    }

    #[test]
    fn device_units_convert_to_millimetres() {
        // 812 units at 203 dpi is exactly 4 inches
        let mm = device_units_to_mm(PAGE_WIDTH);
        assert!((mm - 101.6).abs() < 0.01);
    }

    #[test]
    fn end_doc_without_a_page_is_an_error() {
        let mut device = CupsDevice {
            printer: "Label_Printer".to_string(),
            page: None,
        };
        let err = device.end_doc().unwrap_err();
        assert!(matches!(err, PrintError::Job(_)));
    }
}
