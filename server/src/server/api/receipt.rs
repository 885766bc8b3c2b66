//! Label rendering API.

use std::io::Cursor;

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::Response;
use image::{ImageFormat, RgbImage};
use serde::Deserialize;
use serde_json::Value;

use label_engine::{LabelFont, LabelRecord, RenderError, render_label};

use super::err_json;
use crate::app::AppState;
use crate::services::print_dispatch;

/// POST /generate-receipt request body: the label fields plus an optional
/// target printer.
#[derive(Debug, Deserialize)]
pub struct ReceiptRequest {
    #[serde(flatten)]
    pub record: LabelRecord,
    #[serde(default)]
    pub printer: Option<String>,
}

/// POST /generate-receipt – render a label, print it, return the PNG bytes.
///
/// Print failures are logged and absorbed; the response carries the rendered
/// image either way.
pub async fn generate_receipt(
    State(state): State<AppState>,
    Json(request): Json<ReceiptRequest>,
) -> Result<Response, (StatusCode, Json<Value>)> {
    tracing::info!(sku = %request.record.sku, "Rendering label");

    let font = LabelFont::load().map_err(render_error)?;
    let label = render_label(&request.record, &state.config().shop_title, &font)
        .map_err(render_error)?;
    let png = png_bytes(&label)?;

    let printer = request
        .printer
        .or_else(|| state.config().printer_name.clone());
    let printed = print_dispatch::dispatch_print(label, printer, state.config().dry_run).await;
    if !printed {
        tracing::warn!(sku = %request.record.sku, "Physical print failed, returning label anyway");
    }

    Response::builder()
        .header(header::CONTENT_TYPE, "image/png")
        .body(Body::from(png))
        .map_err(|e| err_json(500, &e.to_string()))
}

fn render_error(err: RenderError) -> (StatusCode, Json<Value>) {
    match err {
        RenderError::MissingQrData => err_json(400, &err.to_string()),
        RenderError::QrEncode(_) | RenderError::FontUnavailable => err_json(500, &err.to_string()),
    }
}

fn png_bytes(image: &RgbImage) -> Result<Vec<u8>, (StatusCode, Json<Value>)> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|e| err_json(500, &format!("failed to encode label: {e}")))?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_qr_data_is_a_client_error() {
        let (status, _) = render_error(RenderError::MissingQrData);
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn font_and_encode_failures_are_server_errors() {
        let (status, _) = render_error(RenderError::FontUnavailable);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let (status, _) = render_error(RenderError::QrEncode("too long".to_string()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn png_bytes_produces_a_png_signature() {
        let image = RgbImage::from_pixel(4, 4, image::Rgb([255, 255, 255]));
        let png = png_bytes(&image).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
    }

    #[test]
    fn request_parses_label_fields_and_printer() {
        let request: ReceiptRequest = serde_json::from_str(
            r#"{"sku":"A-1","sp":99.5,"lot":3,"date":"2025-02-01","qr":"A-1","printer":"Label_Printer"}"#,
        )
        .unwrap();
        assert_eq!(request.record.sku, "A-1");
        assert_eq!(request.printer.as_deref(), Some("Label_Printer"));
    }

    #[test]
    fn request_printer_defaults_to_none() {
        let request: ReceiptRequest = serde_json::from_str(
            r#"{"sku":"A-1","sp":99.5,"lot":3,"date":"2025-02-01","qr":"A-1"}"#,
        )
        .unwrap();
        assert!(request.printer.is_none());
    }
}
