//! Test fixtures and constants.

use luma_palette::{PixelGrid, Rgba};
use palettize::rendering::encode_png;

/// Names of the compiled-in palettes, in registry order
pub const BUILTIN_NAMES: [&str; 5] = ["Orange", "Green", "Blue", "Purple", "Gray"];

/// A horizontal gray ramp with one fully transparent pixel per row
pub fn gradient_grid(width: u32, height: u32) -> PixelGrid {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            if x == y % width {
                pixels.push(Rgba::new(v, 255 - v, 7, 0));
            } else {
                pixels.push(Rgba::new(v, v, v, 255 - (y as u8 % 4) * 40));
            }
        }
    }
    PixelGrid::new(width, height, pixels).unwrap()
}

/// Black and white pixels side by side
pub fn black_white_grid() -> PixelGrid {
    PixelGrid::new(
        2,
        1,
        vec![Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)],
    )
    .unwrap()
}

/// Encode a grid as PNG bytes
pub fn png_bytes(grid: &PixelGrid) -> Vec<u8> {
    encode_png(grid).expect("Failed to encode fixture PNG")
}

/// Encode a grid as BMP bytes (no alpha channel)
pub fn bmp_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb(rgb));
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Bmp)
        .expect("Failed to encode fixture BMP");
    buf.into_inner()
}

/// Minimal multipart/form-data builder
pub struct MultipartBody {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: "palettize-test-boundary-7MA4YWxkTrZu0gW".to_string(),
            body: Vec::new(),
        }
    }

    /// Add a plain text field
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Add a file field
    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.body
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        self.body
            .extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Close the body; returns (content type header, body bytes)
    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", self.boundary),
            self.body,
        )
    }
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}
