//! Integration tests for POST /transform.

mod common;

use axum::http::StatusCode;
use common::fixtures::{self, transform_body};
use common::*;
use pretty_assertions::assert_eq;
use strokepad::models::{AppConfig, OutputColor};

#[tokio::test]
async fn test_transform_diagonal_returns_28x28_png() {
    let app = TestApp::new();

    let response = app.post_json("/transform", fixtures::DIAGONAL).await;

    assert_png(&response);
    assert_eq!(response.header("cache-control"), Some("no-store"));

    let image = decode_png(&response);
    assert_eq!((image.width, image.height), (28, 28));
    assert_eq!(image.color_type, png::ColorType::Rgb);

    // Ink along the main diagonal, none in the far corners
    assert!(image.luma(3, 3) < 200, "luma(3,3) = {}", image.luma(3, 3));
    assert!(image.luma(14, 14) < 200, "luma(14,14) = {}", image.luma(14, 14));
    assert!(image.luma(24, 24) < 200, "luma(24,24) = {}", image.luma(24, 24));
    assert_eq!(image.luma(26, 1), 255);
    assert_eq!(image.luma(1, 26), 255);
}

#[tokio::test]
async fn test_transform_is_deterministic() {
    let app = TestApp::new();

    let first = app.post_json("/transform", fixtures::DIAGONAL).await;
    let second = app.post_json("/transform", fixtures::DIAGONAL).await;

    assert_png(&first);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn test_transform_empty_strokes_is_white() {
    let app = TestApp::new();

    let response = app.post_json("/transform", fixtures::EMPTY_STROKES).await;

    assert_png(&response);
    let image = decode_png(&response);
    assert_eq!((image.width, image.height), (28, 28));
    assert!(image.is_all_white());
}

#[tokio::test]
async fn test_transform_single_point_stroke_is_white() {
    let app = TestApp::new();
    let body = transform_body(&[(vec![25.0], vec![25.0])], [0.0, 0.0, 50.0, 50.0]);

    let response = app.post_json("/transform", &body).await;

    assert_png(&response);
    assert!(decode_png(&response).is_all_white());
}

#[tokio::test]
async fn test_transform_malformed_stroke_is_rejected() {
    let app = TestApp::new();

    let response = app.post_json("/transform", fixtures::MALFORMED_STROKE).await;

    assert_json_error(&response, StatusCode::UNPROCESSABLE_ENTITY);
    let json: serde_json::Value = response.json();
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("Malformed stroke 0"), "{message}");
}

#[tokio::test]
async fn test_transform_out_of_range_coordinate_is_rejected() {
    let app = TestApp::new();
    let body = transform_body(&[(vec![10.0, 1e300], vec![10.0, 90.0])], [0.0, 0.0, 100.0, 100.0]);

    let response = app.post_json("/transform", &body).await;

    assert_json_error(&response, StatusCode::UNPROCESSABLE_ENTITY);
    let json: serde_json::Value = response.json();
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("non-finite"), "{message}");
}

#[tokio::test]
async fn test_transform_inverted_box_is_rejected() {
    let app = TestApp::new();

    let response = app.post_json("/transform", fixtures::INVERTED_BOX).await;

    assert_json_error(&response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_transform_zero_area_box_is_rejected() {
    let app = TestApp::new();
    let body = transform_body(&[(vec![1.0, 2.0], vec![1.0, 2.0])], [5.0, 5.0, 5.0, 20.0]);

    let response = app.post_json("/transform", &body).await;

    assert_json_error(&response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_transform_short_box_is_bad_request() {
    let app = TestApp::new();

    let response = app.post_json("/transform", fixtures::SHORT_BOX).await;

    assert_json_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_transform_invalid_json_is_bad_request() {
    let app = TestApp::new();

    let response = app.post_json("/transform", "{\"strokes\": [[[1, 2]").await;

    assert_json_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_transform_requires_json_content_type() {
    let app = TestApp::new();

    let response = app
        .post_with_content_type("/transform", "text/plain", fixtures::DIAGONAL)
        .await;

    assert_json_error(&response, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_transform_huge_box_is_too_large() {
    let app = TestApp::new();

    let response = app.post_json("/transform", fixtures::HUGE_BOX).await;

    assert_json_error(&response, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_transform_oversized_body_is_rejected() {
    let mut config = AppConfig::default();
    config.server.max_body_bytes = 64;
    let app = TestApp::with_config(config);

    let xs: Vec<f64> = (0..100).map(f64::from).collect();
    let body = transform_body(&[(xs.clone(), xs)], [0.0, 0.0, 100.0, 100.0]);
    let response = app.post_json("/transform", &body).await;

    assert_json_error(&response, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_transform_without_box_fits_strokes() {
    let app = TestApp::new();

    let response = app.post_json("/transform", fixtures::NO_BOX).await;

    assert_png(&response);
    let image = decode_png(&response);
    assert_eq!((image.width, image.height), (28, 28));
    assert!(!image.is_all_white());

    // Line sits at the top edge of the fitted square; the middle stays empty
    assert!((0..28).all(|x| image.luma(x, 14) == 255));
}

#[tokio::test]
async fn test_transform_without_box_or_points_is_bad_request() {
    let app = TestApp::new();

    let response = app.post_json("/transform", fixtures::NO_BOX_NO_POINTS).await;

    assert_json_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_crop_padding_config_falls_back() {
    let config = AppConfig::parse("render:\n  crop_padding: -100\n");
    assert_eq!(config.render.crop_padding, 2.0);
    let app = TestApp::with_config(config);

    let response = app.post_json("/transform", fixtures::NO_BOX).await;

    // Default padding keeps the stroke inside the fitted box
    assert_png(&response);
    let image = decode_png(&response);
    assert!(!image.is_all_white());
    assert!((0..28).all(|x| image.luma(x, 14) == 255));
}

#[tokio::test]
async fn test_transform_gray_output() {
    let mut config = AppConfig::default();
    config.output.color = OutputColor::Gray;
    let app = TestApp::with_config(config);

    let response = app.post_json("/transform", fixtures::DIAGONAL).await;

    assert_png(&response);
    let image = decode_png(&response);
    assert_eq!(image.color_type, png::ColorType::Grayscale);
    assert_eq!(image.data.len(), 28 * 28);
    assert!(image.luma(14, 14) < 200);
}

#[tokio::test]
async fn test_transform_custom_output_size() {
    let mut config = AppConfig::default();
    config.render.output_size = 64;
    let app = TestApp::with_config(config);

    let response = app.post_json("/transform", fixtures::DIAGONAL).await;

    assert_png(&response);
    let image = decode_png(&response);
    assert_eq!((image.width, image.height), (64, 64));
}

#[tokio::test]
async fn test_transform_rejects_get() {
    let app = TestApp::new();

    let response = app.get("/transform").await;

    assert_status(&response, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_ok(&response);
    assert_eq!(response.text(), "OK");
}
