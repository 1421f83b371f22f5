//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a valid PNG image
pub fn assert_png(response: &TestResponse) {
    assert_ok(response);
    assert!(
        response.is_png(),
        "Expected PNG image, got {} bytes starting with {:?}",
        response.body.len(),
        &response.body[..8.min(response.body.len())]
    );

    assert_eq!(
        response.header("content-type"),
        Some("image/png"),
        "Expected Content-Type: image/png"
    );
}

/// Assert an error response carries the expected HTTP and JSON status
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected.as_u16(),
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected error message");
}

/// Decoded PNG frame
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub color_type: png::ColorType,
    pub data: Vec<u8>,
}

impl DecodedPng {
    /// Luma of the pixel at (x, y), channels averaged for RGB
    pub fn luma(&self, x: u32, y: u32) -> u8 {
        let channels = match self.color_type {
            png::ColorType::Rgb => 3,
            png::ColorType::Grayscale => 1,
            other => panic!("Unexpected color type {other:?}"),
        };
        let offset = ((y * self.width + x) as usize) * channels;
        let sum: u32 = self.data[offset..offset + channels]
            .iter()
            .map(|&v| v as u32)
            .sum();
        (sum / channels as u32) as u8
    }

    pub fn is_all_white(&self) -> bool {
        self.data.iter().all(|&v| v == 255)
    }
}

/// Decode a PNG response body
pub fn decode_png(response: &TestResponse) -> DecodedPng {
    let decoder = png::Decoder::new(response.body.as_slice());
    let mut reader = decoder.read_info().expect("Invalid PNG header");
    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data).expect("Invalid PNG data");
    data.truncate(info.buffer_size());

    DecodedPng {
        width: info.width,
        height: info.height,
        color_type: info.color_type,
        data,
    }
}
