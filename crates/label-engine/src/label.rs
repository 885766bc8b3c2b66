//! Label composition — shop title, QR square, and item text lines.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use serde::Deserialize;

use crate::font::LabelFont;
use crate::{LABEL_HEIGHT, LABEL_WIDTH, RenderError, Result, qr};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Canvas position of the shop title.
const TITLE_POS: (i32, i32) = (20, 10);

/// Canvas position of the QR square.
const QR_POS: (i32, i32) = (20, 50);

/// Horizontal offset of the text column from the QR x-origin.
const TEXT_OFFSET_X: i32 = 100;

/// Vertical step between stacked text lines.
const LINE_STEP: i32 = 20;

/// One product label's worth of input fields.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelRecord {
    pub sku: String,
    #[serde(default)]
    pub pcost: Option<f64>,
    pub sp: f64,
    #[serde(default)]
    pub count: Option<f64>,
    pub lot: f64,
    pub date: String,
    pub qr: String,
}

/// Render `record` onto a fresh white 300x180 RGB canvas.
///
/// Fails with [`RenderError::MissingQrData`] when the QR payload is empty or
/// whitespace-only. The caller owns the returned image; nothing is shared or
/// mutated afterwards.
pub fn render_label(record: &LabelRecord, shop_title: &str, font: &LabelFont) -> Result<RgbImage> {
    if record.qr.trim().is_empty() {
        return Err(RenderError::MissingQrData);
    }

    let mut canvas = RgbImage::from_pixel(LABEL_WIDTH, LABEL_HEIGHT, WHITE);

    draw_text_mut(
        &mut canvas,
        BLACK,
        TITLE_POS.0,
        TITLE_POS.1,
        font.primary(),
        font.font(),
        shop_title,
    );

    let qr_square = qr::qr_image(&record.qr)?;
    let qr_rgb = image::DynamicImage::ImageLuma8(qr_square).to_rgb8();
    image::imageops::replace(&mut canvas, &qr_rgb, QR_POS.0 as i64, QR_POS.1 as i64);

    let x = QR_POS.0 + TEXT_OFFSET_X;
    let mut y = QR_POS.1;
    let lines = [
        (format!("SKU: {}", record.sku), font.primary()),
        (format!("P {}", format_optional(record.pcost)), font.primary()),
        (format!("RS. {}", record.sp), font.primary()),
        (
            format!("{}/{}", format_optional(record.count), record.lot),
            font.secondary(),
        ),
        (record.date.clone(), font.secondary()),
    ];
    for (text, scale) in &lines {
        draw_text_mut(&mut canvas, BLACK, x, y, *scale, font.font(), text);
        y += LINE_STEP;
    }

    Ok(canvas)
}

/// Format an optional numeric field; absent values render as `-`.
pub fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}
