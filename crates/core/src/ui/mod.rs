//! The eframe shell.
//!
//! # Architecture
//!
//! - [`app`]: the scratchpad window (toolbar, draft tabs, status bar)
//! - [`canvas_view`]: paints a canvas and routes pointer input into it
//! - [`overlay`]: the full-screen capture overlay
//! - [`rendering`]: painting helpers
//! - [`settings`]: window geometry persistence
//! - [`state`]: actions and keyboard shortcuts
//!
//! # Usage
//!
//! ```ignore
//! use ez_paster_core::{config::ConfigBuilder, ui};
//!
//! let config = ConfigBuilder::from_env()?.build()?;
//! ui::run(config, ui::LaunchOptions::default())?;
//! ```

mod app;
mod canvas_view;
mod overlay;
mod rendering;
mod settings;
mod state;

pub use app::ScratchpadApp;
pub use settings::WindowSettings;
pub use state::Action;

use crate::config::Config;
use crate::error::{AppError, Result};
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, OnceLock};

/// What to do right after the window opens.
#[derive(Default)]
pub struct LaunchOptions {
    /// Dropped onto the first draft.
    pub files: Vec<PathBuf>,
    /// Start a capture session immediately.
    pub capture_on_start: bool,
    /// Capture requests from outside the UI thread.
    pub requests: Option<CaptureRequests>,
}

/// Sending half of the capture request channel. Cheap to clone and safe to
/// move to another thread.
#[derive(Clone)]
pub struct CaptureTrigger {
    tx: Sender<()>,
    ctx: Arc<OnceLock<egui::Context>>,
}

impl CaptureTrigger {
    /// Asks the UI to start a capture and wakes it up. Returns `false` once
    /// the UI has gone away.
    pub fn fire(&self) -> bool {
        if self.tx.send(()).is_err() {
            return false;
        }
        if let Some(ctx) = self.ctx.get() {
            ctx.request_repaint();
        }
        true
    }
}

/// Receiving half, handed to [`run`] via [`LaunchOptions`].
pub struct CaptureRequests {
    rx: Receiver<()>,
    ctx: Arc<OnceLock<egui::Context>>,
}

impl CaptureRequests {
    fn attach(&self, ctx: &egui::Context) {
        let _ = self.ctx.set(ctx.clone());
    }

    /// Number of requests received since the last call.
    fn drain(&self) -> usize {
        self.rx.try_iter().count()
    }
}

/// Creates a connected trigger/requests pair.
pub fn capture_channel() -> (CaptureTrigger, CaptureRequests) {
    let (tx, rx) = channel();
    let ctx = Arc::new(OnceLock::new());
    (
        CaptureTrigger {
            tx,
            ctx: ctx.clone(),
        },
        CaptureRequests { rx, ctx },
    )
}

/// Opens the scratchpad window and blocks until it is closed.
///
/// # Errors
///
/// Returns [`AppError::Ui`] if the native window cannot be created.
pub fn run(config: Config, launch: LaunchOptions) -> Result<()> {
    let settings = WindowSettings::load();

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("EZ Paster")
        .with_inner_size(settings.size)
        .with_drag_and_drop(true);
    if let Some(position) = settings.position {
        viewport = viewport.with_position(position);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "EZ Paster",
        options,
        Box::new(move |cc| {
            Ok(Box::new(ScratchpadApp::new(cc, config, settings, launch)) as Box<dyn eframe::App>)
        }),
    )
    .map_err(|e| AppError::ui(format!("Failed to run UI: {}", e)))
}
