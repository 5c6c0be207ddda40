//! Vehicle QR code generation.
//!
//! Each vehicle gets a QR image pointing at its frontend detail page,
//! stored inline as a `data:image/png;base64,...` URI so clients can
//! render it without another request.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::Luma;
use qrcode::QrCode;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// URL encoded into the QR image.
pub fn vehicle_detail_url(frontend_url: &str, vehicle_id: Uuid) -> String {
    format!(
        "{}/vehicles/{}",
        frontend_url.trim_end_matches('/'),
        vehicle_id
    )
}

/// Render the QR data URI for a vehicle's detail page.
pub fn vehicle_qr_data_uri(frontend_url: &str, vehicle_id: Uuid) -> AppResult<String> {
    let target = vehicle_detail_url(frontend_url, vehicle_id);

    let code = QrCode::new(target.as_bytes())
        .map_err(|e| AppError::Database(format!("Failed to build QR code: {}", e)))?;

    let img = code
        .render::<Luma<u8>>()
        .min_dimensions(200, 200)
        .build();

    let mut png = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut png),
        image::ImageFormat::Png,
    )
    .map_err(|e| AppError::Database(format!("Failed to encode QR image: {}", e)))?;

    Ok(format!("data:image/png;base64,{}", BASE64.encode(&png)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_shape() {
        let id = Uuid::new_v4();
        let uri = vehicle_qr_data_uri("http://localhost:3000", id).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));

        // Payload must be a valid PNG.
        let payload = BASE64
            .decode(uri.trim_start_matches("data:image/png;base64,"))
            .unwrap();
        assert_eq!(&payload[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let id = Uuid::new_v4();
        let a = vehicle_qr_data_uri("http://localhost:3000", id).unwrap();
        let b = vehicle_qr_data_uri("http://localhost:3000/", id).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_payload_url_points_at_vehicle() {
        let id = Uuid::new_v4();
        let url = vehicle_detail_url("http://shop.example", id);
        assert_eq!(url, format!("http://shop.example/vehicles/{}", id));
    }
}
