//! EZ Paster Core Library
//!
//! An image scratchpad: images pasted from the clipboard, dropped from the
//! file manager or captured from a screen region are placed on zoomable
//! drafts where they can be moved and resized by their corner handles.
//!
//! # Overview
//!
//! - **Canvas**: items, handles, zoom and pointer routing via [`canvas`]
//! - **Capture**: the region capture state machine in [`region_capture`],
//!   backed by [`capture`] for the actual screen pixels
//! - **Drafts**: several canvases sharing one zoom via [`workspace`]
//! - **User Interface**: the eframe shell via [`ui`]
//!
//! Everything except [`ui`], [`capture`] and [`clipboard::SystemClipboard`]
//! is plain data and can be driven without a display.
//!
//! # Quick Start
//!
//! ```ignore
//! use ez_paster_core::{EzPaster, config::ConfigBuilder};
//!
//! let config = ConfigBuilder::from_env()?.build()?;
//! EzPaster::with_config(config).run(Default::default())?;
//! ```
//!
//! # Module Structure
//!
//! - [`canvas`]: the drawing surface and its items
//! - [`capture`]: screen enumeration and sampling
//! - [`clipboard`]: image clipboard access
//! - [`config`]: configuration loading
//! - [`error`]: error types and result aliases
//! - [`geometry`]: affine transforms
//! - [`image_processing`]: decoding, cropping, conversion
//! - [`region_capture`]: capture session state machine
//! - [`workspace`]: drafts and shared zoom
//! - [`ui`]: user interface

pub mod canvas;
pub mod capture;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod geometry;
pub mod image_processing;
pub mod region_capture;
pub mod ui;
pub mod workspace;

// Re-export primary types for convenience
pub use canvas::{Canvas, CanvasItem, Corner, Drawable, ItemId};
pub use capture::ScreenCapturer;
pub use config::Config;
pub use error::{AppError, Result};
pub use region_capture::{CaptureOutcome, CapturePhase, RegionCaptureController};
pub use ui::LaunchOptions;
pub use workspace::Workspace;

/// Main entry point for the EZ Paster application.
pub struct EzPaster {
    config: Config,
}

impl EzPaster {
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Human-readable monitor descriptions.
    ///
    /// # Errors
    ///
    /// Fails when no display is reachable.
    pub fn list_monitors(&self) -> Result<Vec<String>> {
        Ok(ScreenCapturer::new()?.list_screen())
    }

    /// Opens the scratchpad window and blocks until it is closed.
    pub fn run(&self, launch: LaunchOptions) -> Result<()> {
        ui::run(self.config.clone(), launch)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
