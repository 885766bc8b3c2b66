//! QR code rasterization for label images.

use image::{GrayImage, Luma, imageops};
use qrcode::{EcLevel, QrCode};

use crate::{QR_SIZE, RenderError, Result};

/// Quiet-zone border around the module grid, in modules.
const QUIET_ZONE: u32 = 4;

/// Encode `data` and rasterize it into a QR_SIZE x QR_SIZE grayscale square.
///
/// Low error correction (~7%) keeps the module grid coarse enough to stay
/// scannable at label size. The grid is drawn at an integer module scale and
/// then resized to the fixed square; nearest-neighbor sampling keeps module
/// edges crisp.
pub fn qr_image(data: &str) -> Result<GrayImage> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::L)
        .map_err(|e| RenderError::QrEncode(e.to_string()))?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;
    let total = module_count + QUIET_ZONE * 2;

    let scale = (QR_SIZE / total).max(1);
    let img_size = total * scale;

    let mut img = GrayImage::from_pixel(img_size, img_size, Luma([255u8]));

    for (i, color) in modules.iter().enumerate() {
        let x = (i as u32) % module_count + QUIET_ZONE;
        let y = (i as u32) / module_count + QUIET_ZONE;

        if *color == qrcode::Color::Dark {
            for dx in 0..scale {
                for dy in 0..scale {
                    img.put_pixel(x * scale + dx, y * scale + dy, Luma([0u8]));
                }
            }
        }
    }

    Ok(imageops::resize(
        &img,
        QR_SIZE,
        QR_SIZE,
        imageops::FilterType::Nearest,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_image_has_fixed_dimensions() {
        let img = qr_image("https://example.com/item/42").unwrap();
        assert_eq!(img.width(), QR_SIZE);
        assert_eq!(img.height(), QR_SIZE);
    }

    #[test]
    fn quiet_zone_corners_stay_white() {
        let img = qr_image("ITEM-00042").unwrap();
        assert_eq!(img.get_pixel(0, 0)[0], 255);
        assert_eq!(img.get_pixel(QR_SIZE - 1, 0)[0], 255);
        assert_eq!(img.get_pixel(0, QR_SIZE - 1)[0], 255);
        assert_eq!(img.get_pixel(QR_SIZE - 1, QR_SIZE - 1)[0], 255);
    }

    #[test]
    fn modules_survive_rasterization() {
        // Sampling each module at its center must reproduce the encoder's
        // module grid exactly, which is what a scanner recovers.
        let data = "ITEM-00042";
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::L).unwrap();
        let modules = code.to_colors();
        let module_count = code.width() as u32;
        let total = module_count + QUIET_ZONE * 2;

        let img = qr_image(data).unwrap();

        for (i, color) in modules.iter().enumerate() {
            let mx = (i as u32) % module_count + QUIET_ZONE;
            let my = (i as u32) / module_count + QUIET_ZONE;
            let px = ((mx as f32 + 0.5) * QR_SIZE as f32 / total as f32) as u32;
            let py = ((my as f32 + 0.5) * QR_SIZE as f32 / total as f32) as u32;

            let expected = if *color == qrcode::Color::Dark { 0 } else { 255 };
            assert_eq!(img.get_pixel(px, py)[0], expected, "module ({mx},{my})");
        }
    }

    #[test]
    fn longer_payloads_still_fit_the_square() {
        let data = "https://inventory.example.com/api/item/0123456789/details?lot=42";
        let img = qr_image(data).unwrap();
        assert_eq!(img.width(), QR_SIZE);
        assert!(img.pixels().any(|p| p[0] == 0));
    }
}
