//! Windows GDI adapter — printer device contexts and `StretchDIBits` drawing.

use image::RgbImage;

use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAPINFO, BITMAPINFOHEADER, CreateDCW, DIB_RGB_COLORS, DeleteDC, GetDeviceCaps, HDC,
    LOGPIXELSX, PHYSICALHEIGHT, PHYSICALWIDTH, SRCCOPY, StretchDIBits,
};
use windows::Win32::Graphics::Printing::{
    EnumPrintersW, GetDefaultPrinterW, PRINTER_ENUM_CONNECTIONS, PRINTER_ENUM_LOCAL,
    PRINTER_INFO_4W,
};
use windows::Win32::Storage::Xps::{AbortDoc, DOCINFOW, EndDoc, EndPage, StartDocW, StartPage};
use windows::core::{PCWSTR, PWSTR};

use crate::device::{PageDevice, PageMetrics, PrinterHost};
use crate::layout::Placement;
use crate::{PrintError, Result};

fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Printer host backed by the Win32 spooler and GDI.
#[derive(Debug, Default)]
pub struct GdiHost;

impl GdiHost {
    pub fn new() -> Self {
        Self
    }
}

impl PrinterHost for GdiHost {
    fn default_printer(&self) -> Result<String> {
        unsafe {
            let mut needed: u32 = 0;
            let _ = GetDefaultPrinterW(None, &mut needed);

            if needed == 0 {
                return Err(PrintError::NoPrinter);
            }

            let mut buf: Vec<u16> = vec![0; needed as usize];
            let ok = GetDefaultPrinterW(Some(PWSTR(buf.as_mut_ptr())), &mut needed);
            if !ok.as_bool() {
                return Err(PrintError::NoPrinter);
            }

            PWSTR(buf.as_mut_ptr())
                .to_string()
                .map_err(|e| PrintError::Device(format!("UTF-16 decode failed: {e}")))
        }
    }

    fn list_printers(&self) -> Result<Vec<String>> {
        unsafe {
            let flags = PRINTER_ENUM_LOCAL | PRINTER_ENUM_CONNECTIONS;
            let mut needed: u32 = 0;
            let mut returned: u32 = 0;

            let _ = EnumPrintersW(flags, None, 4, None, &mut needed, &mut returned);

            if needed == 0 {
                return Ok(Vec::new());
            }

            let mut buf: Vec<u8> = vec![0; needed as usize];
            EnumPrintersW(
                flags,
                None,
                4,
                Some(buf.as_mut_slice()),
                &mut needed,
                &mut returned,
            )
            .map_err(|_| PrintError::Device("EnumPrintersW failed".to_string()))?;

            let ptr = buf.as_ptr() as *const PRINTER_INFO_4W;
            let slice = std::slice::from_raw_parts(ptr, returned as usize);

            let mut result = Vec::new();
            for info in slice.iter() {
                if info.pPrinterName.is_null() {
                    continue;
                }
                let name = PWSTR(info.pPrinterName.0).to_string().unwrap_or_default();
                if !name.is_empty() {
                    result.push(name);
                }
            }

            Ok(result)
        }
    }

    fn open(&self, printer: &str) -> Result<Box<dyn PageDevice>> {
        let name_w = to_wide(printer);
        let hdc = unsafe {
            CreateDCW(
                PCWSTR::null(),
                PCWSTR::from_raw(name_w.as_ptr()),
                PCWSTR::null(),
                None,
            )
        };
        if hdc.is_invalid() {
            return Err(PrintError::PrinterNotFound(printer.to_string()));
        }

        let metrics = unsafe {
            PageMetrics {
                dpi: GetDeviceCaps(Some(hdc), LOGPIXELSX).max(1) as u32,
                page_width: GetDeviceCaps(Some(hdc), PHYSICALWIDTH).max(0) as u32,
                page_height: GetDeviceCaps(Some(hdc), PHYSICALHEIGHT).max(0) as u32,
            }
        };

        Ok(Box::new(GdiDevice {
            hdc,
            metrics,
            in_doc: false,
        }))
    }
}

/// A printer device context for a single job.
///
/// `Drop` aborts any unfinished document and deletes the DC, so the handle is
/// released on every exit path.
struct GdiDevice {
    hdc: HDC,
    metrics: PageMetrics,
    in_doc: bool,
}

impl PageDevice for GdiDevice {
    fn metrics(&self) -> PageMetrics {
        self.metrics
    }

    fn begin_doc(&mut self, name: &str) -> Result<()> {
        let name_w = to_wide(name);
        let doc_info = DOCINFOW {
            cbSize: std::mem::size_of::<DOCINFOW>() as i32,
            lpszDocName: PCWSTR::from_raw(name_w.as_ptr()),
            ..Default::default()
        };

        if unsafe { StartDocW(self.hdc, &doc_info) } <= 0 {
            return Err(PrintError::Job("StartDoc failed".to_string()));
        }
        self.in_doc = true;
        Ok(())
    }

    fn begin_page(&mut self) -> Result<()> {
        if unsafe { StartPage(self.hdc) } <= 0 {
            return Err(PrintError::Job("StartPage failed".to_string()));
        }
        Ok(())
    }

    fn draw_rgb(&mut self, image: &RgbImage, dest: Placement) -> Result<()> {
        let (width, height) = image.dimensions();

        // 24bpp DIB: BGR byte order, rows padded to 4 bytes, top-down via
        // negative biHeight.
        let row_len = ((width as usize * 3) + 3) & !3;
        let mut bits = vec![0u8; row_len * height as usize];
        for (y, row) in image.rows().enumerate() {
            let base = y * row_len;
            for (x, pixel) in row.enumerate() {
                let i = base + x * 3;
                bits[i] = pixel[2];
                bits[i + 1] = pixel[1];
                bits[i + 2] = pixel[0];
            }
        }

        let info = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: width as i32,
                biHeight: -(height as i32),
                biPlanes: 1,
                biBitCount: 24,
                biCompression: BI_RGB.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let copied = unsafe {
            StretchDIBits(
                self.hdc,
                dest.x,
                dest.y,
                dest.width as i32,
                dest.height as i32,
                0,
                0,
                width as i32,
                height as i32,
                Some(bits.as_ptr() as *const core::ffi::c_void),
                &info,
                DIB_RGB_COLORS,
                SRCCOPY,
            )
        };
        if copied == 0 {
            return Err(PrintError::Job("StretchDIBits drew no scanlines".to_string()));
        }
        Ok(())
    }

    fn end_page(&mut self) -> Result<()> {
        if unsafe { EndPage(self.hdc) } <= 0 {
            return Err(PrintError::Job("EndPage failed".to_string()));
        }
        Ok(())
    }

    fn end_doc(&mut self) -> Result<()> {
        if unsafe { EndDoc(self.hdc) } <= 0 {
            return Err(PrintError::Job("EndDoc failed".to_string()));
        }
        self.in_doc = false;
        Ok(())
    }
}

impl Drop for GdiDevice {
    fn drop(&mut self) {
        unsafe {
            if self.in_doc {
                let _ = AbortDoc(self.hdc);
            }
            let _ = DeleteDC(self.hdc);
        }
    }
}
