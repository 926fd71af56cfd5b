//! Screen capture functionality.
//!
//! Only the primary display is ever sampled; the capture overlay covers one
//! screen.
//!
//! # Example
//!
//! ```ignore
//! use ez_paster_core::capture::ScreenCapturer;
//!
//! let capturer = ScreenCapturer::new()?;
//! for screen in capturer.list_screen() {
//!     println!("{}", screen);
//! }
//! let screenshot = capturer.capture_screen()?;
//! ```

use crate::error::{AppError, Result};
use crate::image_processing::from_raw_rgba;
use crate::region_capture::ScreenSource;
use image::RgbaImage;
use screenshots::Screen;

/// Screen capturer wrapping the `screenshots` crate.
pub struct ScreenCapturer {
    screens: Vec<Screen>,
}

impl ScreenCapturer {
    /// Detects available screens.
    ///
    /// # Errors
    ///
    /// - [`AppError::ScreenCapture`] if enumeration fails (e.g., no display server)
    /// - [`AppError::NoScreens`] if nothing was found
    pub fn new() -> Result<Self> {
        let screens = Screen::all()
            .map_err(|e| AppError::capture(format!("Failed to enumerate screens: {}", e)))?;

        if screens.is_empty() {
            return Err(AppError::NoScreens);
        }

        Ok(Self { screens })
    }

    /// Human-readable screen descriptions, primary first marked with `*`.
    pub fn list_screen(&self) -> Vec<String> {
        self.screens
            .iter()
            .enumerate()
            .map(|(i, s)| {
                format!(
                    "Monitor {}{}: {}x{} at ({}, {}) (scale: {})",
                    i,
                    if s.display_info.is_primary { "*" } else { "" },
                    s.display_info.width,
                    s.display_info.height,
                    s.display_info.x,
                    s.display_info.y,
                    s.display_info.scale_factor
                )
            })
            .collect()
    }

    fn primary(&self) -> Result<&Screen> {
        self.screens
            .iter()
            .find(|s| s.display_info.is_primary)
            .or_else(|| self.screens.first())
            .ok_or(AppError::NoScreens)
    }

    /// Captures the whole primary screen.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ScreenCapture`] if the capture operation fails.
    pub fn capture_screen(&self) -> Result<RgbaImage> {
        let captured = self
            .primary()?
            .capture()
            .map_err(|e| AppError::capture(format!("Failed to capture screen: {}", e)))?;

        // screenshots ships its own `image` version; go through raw bytes.
        let width = captured.width();
        let height = captured.height();
        from_raw_rgba(width, height, captured.into_raw())
            .map_err(|e| AppError::capture(format!("Unusable capture buffer: {}", e)))
    }
}

/// Samples the primary screen on demand.
///
/// Screens are enumerated at snapshot time, so a display that appears or
/// disappears while the application runs is picked up.
#[derive(Default)]
pub struct PrimaryScreen;

impl ScreenSource for PrimaryScreen {
    fn snapshot(&mut self) -> Result<RgbaImage> {
        ScreenCapturer::new()?.capture_screen()
    }
}
