//! Image decoding, cropping and conversion utilities.
//!
//! Everything the scratchpad handles is normalized to [`RgbaImage`] at the
//! edges: files, clipboard contents and screen snapshots alike.
//!
//! # Coordinate Mapping
//!
//! The capture overlay works in logical points while the snapshot is in
//! physical pixels (e.g., 1920x1080 points over a 3840x2160 capture).
//! [`PixelMapping`] converts between the two, per axis, for a snapshot
//! stretched over an on-screen area.

use crate::error::{AppError, Result};
use eframe::egui;
use image::{ImageBuffer, ImageReader, RgbaImage};
use std::path::Path;

/// File extensions accepted for drag-and-drop, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Whether `path` has an extension on the allow-list.
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// Reads and decodes an image file on the allow-list.
///
/// # Errors
///
/// - [`AppError::UnsupportedFormat`] for extensions outside the allow-list
/// - [`AppError::Io`] if the file cannot be opened
/// - [`AppError::ImageDecode`] if the contents are not a valid image
/// - [`AppError::EmptyImage`] for zero-sized images
pub fn load_image_file(path: &Path) -> Result<RgbaImage> {
    if !is_supported_extension(path) {
        return Err(AppError::UnsupportedFormat(path.display().to_string()));
    }

    let image = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| AppError::decode(format!("{}: {}", path.display(), e)))?
        .to_rgba8();

    non_empty(image)
}

/// Decodes in-memory image bytes of any supported format.
pub fn decode_image_bytes(bytes: &[u8]) -> Result<RgbaImage> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| AppError::decode(e.to_string()))?
        .to_rgba8();
    non_empty(image)
}

/// Wraps a raw RGBA8 buffer, checking that its length matches the size.
pub fn from_raw_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<RgbaImage> {
    let image: RgbaImage = ImageBuffer::from_raw(width, height, rgba)
        .ok_or_else(|| AppError::decode(format!("buffer does not hold {width}x{height} RGBA pixels")))?;
    non_empty(image)
}

fn non_empty(image: RgbaImage) -> Result<RgbaImage> {
    if image.width() == 0 || image.height() == 0 {
        return Err(AppError::EmptyImage);
    }
    Ok(image)
}

/// Maps an on-screen area to the pixels of an image stretched over it.
///
/// Each axis has its own ratio, so the mapping stays exact when the area's
/// aspect ratio differs from the image's.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelMapping {
    area: egui::Rect,
    pixels_per_point: egui::Vec2,
}

impl PixelMapping {
    /// `None` if either the area or the image has no extent.
    pub fn new(area: egui::Rect, image_width: u32, image_height: u32) -> Option<Self> {
        if !(area.width() > 0.0 && area.height() > 0.0) || image_width == 0 || image_height == 0 {
            return None;
        }
        Some(Self {
            area,
            pixels_per_point: egui::vec2(
                image_width as f32 / area.width(),
                image_height as f32 / area.height(),
            ),
        })
    }

    /// Screen point to image pixel.
    pub fn to_pixels(&self, point: egui::Pos2) -> egui::Pos2 {
        ((point - self.area.min) * self.pixels_per_point).to_pos2()
    }

    /// Image pixel rectangle to the screen rectangle showing it.
    pub fn to_points(&self, pixels: egui::Rect) -> egui::Rect {
        let map = |p: egui::Pos2| self.area.min + p.to_vec2() / self.pixels_per_point;
        egui::Rect::from_min_max(map(pixels.min), map(pixels.max))
    }
}

/// Copies the pixels under `selection` (pixel coordinates) out of `source`.
///
/// Edges are rounded to whole pixels and the region is clamped to the
/// source bounds.
///
/// # Errors
///
/// Returns [`AppError::EmptySelection`] if nothing is left after clamping.
pub fn crop_region(source: &RgbaImage, selection: egui::Rect) -> Result<RgbaImage> {
    // Each edge is clamped on its own: overhang is trimmed, not shifted.
    let clamp = |v: f32, max: u32| v.round().clamp(0.0, max as f32) as u32;
    let x0 = clamp(selection.min.x, source.width());
    let y0 = clamp(selection.min.y, source.height());
    let x1 = clamp(selection.max.x, source.width());
    let y1 = clamp(selection.max.y, source.height());

    let width = x1.saturating_sub(x0);
    let height = y1.saturating_sub(y0);
    if width == 0 || height == 0 {
        return Err(AppError::EmptySelection);
    }

    Ok(image::imageops::crop_imm(source, x0, y0, width, height).to_image())
}

/// Converts to egui's texture input format.
pub fn to_color_image(image: &RgbaImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, image.as_flat_samples().as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;
    use std::path::PathBuf;

    fn gradient(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| image::Rgba([x as u8, y as u8, 0, 255]))
    }

    #[test]
    fn extension_allow_list_ignores_case() {
        for name in ["a.png", "b.JPG", "c.Jpeg", "d.bmp", "e.GIF"] {
            assert!(is_supported_extension(&PathBuf::from(name)), "{name}");
        }
        for name in ["a.tiff", "b.webp", "c", "d.png.txt", ".png"] {
            assert!(!is_supported_extension(&PathBuf::from(name)), "{name}");
        }
    }

    #[test]
    fn unsupported_file_is_rejected_before_reading() {
        let err = load_image_file(Path::new("/definitely/missing.tiff")).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn crop_takes_exact_region() {
        let source = gradient(200, 100);
        let rect = egui::Rect::from_min_max(pos2(50.0, 20.0), pos2(100.0, 70.0));
        let cropped = crop_region(&source, rect).unwrap();
        assert_eq!(cropped.dimensions(), (50, 50));
        assert_eq!(cropped.get_pixel(0, 0), source.get_pixel(50, 20));
    }

    #[test]
    fn crop_is_clamped_to_source() {
        let source = gradient(100, 100);
        let rect = egui::Rect::from_min_max(pos2(80.0, 90.0), pos2(150.0, 150.0));
        assert_eq!(crop_region(&source, rect).unwrap().dimensions(), (20, 10));

        let hanging = egui::Rect::from_min_max(pos2(-10.0, -5.0), pos2(40.0, 25.0));
        let trimmed = crop_region(&source, hanging).unwrap();
        assert_eq!(trimmed.dimensions(), (40, 25));
        assert_eq!(trimmed.get_pixel(0, 0), source.get_pixel(0, 0));

        let outside = egui::Rect::from_min_max(pos2(120.0, 0.0), pos2(150.0, 10.0));
        assert!(matches!(crop_region(&source, outside), Err(AppError::EmptySelection)));
    }

    #[test]
    fn raw_buffer_must_match_size() {
        assert!(from_raw_rgba(2, 2, vec![0; 16]).is_ok());
        assert!(from_raw_rgba(2, 2, vec![0; 15]).is_err());
        assert!(matches!(from_raw_rgba(0, 0, Vec::new()), Err(AppError::EmptyImage)));
    }

    #[test]
    fn hidpi_selection_scales_to_pixels() {
        let area = egui::Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(1920.0, 1080.0));
        let mapping = PixelMapping::new(area, 3840, 2160).unwrap();
        assert_eq!(mapping.to_pixels(pos2(10.0, 20.0)), pos2(20.0, 40.0));

        let pixels = egui::Rect::from_min_max(pos2(20.0, 40.0), pos2(60.0, 80.0));
        let points = mapping.to_points(pixels);
        assert_eq!(points.min, pos2(10.0, 20.0));
        assert_eq!(points.max, pos2(30.0, 40.0));
    }

    #[test]
    fn mapping_follows_each_axis_separately() {
        // Shorter than the snapshot: a strip of the screen is reserved.
        let area = egui::Rect::from_min_size(pos2(0.0, 30.0), egui::vec2(1920.0, 1050.0));
        let mapping = PixelMapping::new(area, 1920, 1080).unwrap();

        assert_eq!(mapping.to_pixels(pos2(0.0, 30.0)), pos2(0.0, 0.0));
        let bottom_right = mapping.to_pixels(pos2(1920.0, 1080.0));
        assert!((bottom_right - pos2(1920.0, 1080.0)).length() < 1e-3);

        let full = egui::Rect::from_min_max(pos2(0.0, 0.0), pos2(1920.0, 1080.0));
        let shown = mapping.to_points(full);
        assert!((shown.min - area.min).length() < 1e-3);
        assert!((shown.max - area.max).length() < 1e-3);
    }

    #[test]
    fn mapping_needs_extent() {
        let flat = egui::Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(100.0, 0.0));
        assert!(PixelMapping::new(flat, 10, 10).is_none());
        let area = egui::Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        assert!(PixelMapping::new(area, 0, 10).is_none());
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(matches!(decode_image_bytes(b"nope"), Err(AppError::ImageDecode(_))));
    }
}
