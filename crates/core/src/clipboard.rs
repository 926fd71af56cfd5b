//! System clipboard access for images.

use crate::error::{AppError, Result};
use crate::image_processing::from_raw_rgba;
use arboard::ImageData;
use image::RgbaImage;
use std::borrow::Cow;

/// What the scratchpad needs from a clipboard.
pub trait ImageClipboard {
    /// Whether an image is currently available.
    fn has_image(&mut self) -> bool;

    fn read_image(&mut self) -> Result<RgbaImage>;

    fn write_image(&mut self, image: &RgbaImage) -> Result<()>;
}

/// The OS clipboard via `arboard`.
///
/// A fresh handle is opened per operation; on some platforms a long-lived
/// handle stops seeing changes made by other applications.
#[derive(Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn open() -> Result<arboard::Clipboard> {
        arboard::Clipboard::new().map_err(|e| AppError::clipboard(e.to_string()))
    }
}

impl ImageClipboard for SystemClipboard {
    fn has_image(&mut self) -> bool {
        Self::open().is_ok_and(|mut clipboard| clipboard.get_image().is_ok())
    }

    fn read_image(&mut self) -> Result<RgbaImage> {
        let data = Self::open()?
            .get_image()
            .map_err(|e| AppError::clipboard(e.to_string()))?;
        from_raw_rgba(data.width as u32, data.height as u32, data.bytes.into_owned())
    }

    fn write_image(&mut self, image: &RgbaImage) -> Result<()> {
        let data = ImageData {
            width: image.width() as usize,
            height: image.height() as usize,
            bytes: Cow::Borrowed(image.as_raw()),
        };
        Self::open()?
            .set_image(data)
            .map_err(|e| AppError::clipboard(e.to_string()))
    }
}

/// In-process clipboard for driving a [`Workspace`](crate::workspace::Workspace)
/// without a display.
#[derive(Default)]
pub struct MemoryClipboard {
    image: Option<RgbaImage>,
}

impl ImageClipboard for MemoryClipboard {
    fn has_image(&mut self) -> bool {
        self.image.is_some()
    }

    fn read_image(&mut self) -> Result<RgbaImage> {
        self.image
            .clone()
            .ok_or_else(|| AppError::clipboard("no image on clipboard"))
    }

    fn write_image(&mut self, image: &RgbaImage) -> Result<()> {
        self.image = Some(image.clone());
        Ok(())
    }
}
