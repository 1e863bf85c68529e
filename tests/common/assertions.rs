//! Assertion helpers for tests.

use axum::http::StatusCode;
use luma_palette::{Palette, PixelGrid};
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

/// Assert an error response carries the JSON error body
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
    assert!(json["error"].is_string(), "Expected an error message");
}

/// Assert an error response is the HTML error page and mentions `message`
pub fn assert_html_error(response: &TestResponse, expected: StatusCode, message: &str) {
    assert_status(response, expected);
    let content_type = response.header("content-type").unwrap_or_default();
    assert!(
        content_type.starts_with("text/html"),
        "Expected an HTML error page, got Content-Type {content_type:?}"
    );

    let html = response.text();
    assert!(
        html.contains(&format!("HTTP {}", expected.as_u16())),
        "Error page does not show status {}",
        expected.as_u16()
    );
    assert!(
        html.contains(message),
        "Error page does not mention {message:?}. Body: {html}"
    );
}

/// Assert every non-transparent pixel of `output` carries an RGB value
/// from `palette`, and that transparent pixels match `input` exactly
pub fn assert_mapped_onto(input: &PixelGrid, output: &PixelGrid, palette: &Palette) {
    assert_eq!(
        (input.width(), input.height()),
        (output.width(), output.height()),
        "Dimensions changed"
    );

    for (i, (before, after)) in input.pixels().iter().zip(output.pixels()).enumerate() {
        if before.a == 0 {
            assert_eq!(before, after, "Transparent pixel {i} was modified");
            continue;
        }
        assert_eq!(before.a, after.a, "Alpha of pixel {i} changed");
        assert!(
            palette
                .entries()
                .iter()
                .any(|e| (e.r, e.g, e.b) == (after.r, after.g, after.b)),
            "Pixel {i} ({after:?}) is not a {} color",
            palette.name()
        );
    }
}
