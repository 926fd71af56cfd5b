//! Screen-region capture.
//!
//! [`RegionCaptureController`] is a small state machine driven by the UI
//! thread:
//!
//! ```text
//! Idle --request--> Pending --delay elapsed, snapshot ok--> Armed
//!   ^                  |                                      | press
//!   |                  +--snapshot failed----------------+    v
//!   +---------------- release / Escape -------------- Dragging (move)
//! ```
//!
//! While `Armed` or `Dragging` the controller is the only input target; the
//! overlay forwards pointer and key events to it and nothing else. Every
//! path back to `Idle` brings the host window back.
//!
//! All points are in snapshot pixel coordinates.

use crate::error::Result;
use crate::image_processing::crop_region;
use eframe::egui::{Pos2, Rect};
use image::RgbaImage;
use std::mem;
use std::time::{Duration, Instant};

/// Time between hiding the host window and sampling the screen, long enough
/// for the window to actually disappear from the capture.
pub const DEFAULT_CAPTURE_DELAY: Duration = Duration::from_millis(200);

/// Selections narrower or shorter than this are treated as stray clicks.
pub const MIN_CAPTURE_SIZE: f32 = 4.0;

/// Full-screen pixel source.
pub trait ScreenSource {
    fn snapshot(&mut self) -> Result<RgbaImage>;
}

/// The main application window, as far as capturing is concerned.
pub trait HostWindow {
    fn hide(&mut self);
    fn show(&mut self);
    fn is_visible(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapturePhase {
    Idle,
    /// Host hidden, waiting for the delay before sampling.
    Pending,
    /// Overlay up, waiting for the first press.
    Armed,
    Dragging,
}

/// How a session ended.
#[derive(Debug)]
pub enum CaptureOutcome {
    /// The cropped region, exactly the normalized selection's size.
    Completed(RgbaImage),
    /// Released with a selection under [`MIN_CAPTURE_SIZE`].
    Discarded,
    /// Escape pressed.
    Cancelled,
}

enum State {
    Idle,
    Pending {
        ready_at: Instant,
    },
    Armed {
        snapshot: RgbaImage,
    },
    Dragging {
        snapshot: RgbaImage,
        anchor: Pos2,
        current: Pos2,
    },
}

/// Rectangle spanned by two corners given in any order.
pub fn normalized_rect(anchor: Pos2, current: Pos2) -> Rect {
    Rect::from_two_pos(anchor, current)
}

pub struct RegionCaptureController {
    state: State,
    delay: Duration,
}

impl Default for RegionCaptureController {
    fn default() -> Self {
        Self::new(DEFAULT_CAPTURE_DELAY)
    }
}

impl RegionCaptureController {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: State::Idle,
            delay,
        }
    }

    pub fn phase(&self) -> CapturePhase {
        match self.state {
            State::Idle => CapturePhase::Idle,
            State::Pending { .. } => CapturePhase::Pending,
            State::Armed { .. } => CapturePhase::Armed,
            State::Dragging { .. } => CapturePhase::Dragging,
        }
    }

    /// A session exists.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, State::Idle)
    }

    /// The overlay is up and owns all input.
    pub fn owns_input(&self) -> bool {
        matches!(self.state, State::Armed { .. } | State::Dragging { .. })
    }

    /// Starts a session by hiding the host. Ignored (returns `false`) while
    /// another session exists.
    pub fn request(&mut self, now: Instant, host: &mut impl HostWindow) -> bool {
        if self.is_active() {
            log::debug!("capture requested while {:?}; ignoring", self.phase());
            return false;
        }
        host.hide();
        self.state = State::Pending {
            ready_at: now + self.delay,
        };
        log::info!("capture requested, sampling in {}ms", self.delay.as_millis());
        true
    }

    /// Time left before [`poll`](Self::poll) will sample the screen.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            State::Pending { ready_at } => Some(ready_at.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Takes the snapshot once the delay has elapsed. Returns `true` when
    /// the session just became `Armed`.
    ///
    /// A failed snapshot ends the session and re-shows the host; the
    /// failure is only logged.
    pub fn poll(
        &mut self,
        now: Instant,
        screen: &mut impl ScreenSource,
        host: &mut impl HostWindow,
    ) -> bool {
        let State::Pending { ready_at } = self.state else {
            return false;
        };
        if now < ready_at {
            return false;
        }

        match screen.snapshot() {
            Ok(snapshot) => {
                log::debug!("snapshot {}x{}, overlay armed", snapshot.width(), snapshot.height());
                self.state = State::Armed { snapshot };
                true
            }
            Err(e) => {
                log::warn!("screen capture unavailable: {e}");
                self.finish(host);
                false
            }
        }
    }

    /// The full-screen snapshot backing the overlay.
    pub fn snapshot(&self) -> Option<&RgbaImage> {
        match &self.state {
            State::Armed { snapshot } | State::Dragging { snapshot, .. } => Some(snapshot),
            _ => None,
        }
    }

    /// The current selection, normalized.
    pub fn selection(&self) -> Option<Rect> {
        match self.state {
            State::Dragging {
                anchor, current, ..
            } => Some(normalized_rect(anchor, current)),
            _ => None,
        }
    }

    /// Primary button down over the overlay: anchors the selection.
    pub fn press(&mut self, point: Pos2) -> bool {
        match mem::replace(&mut self.state, State::Idle) {
            State::Armed { snapshot } => {
                self.state = State::Dragging {
                    snapshot,
                    anchor: point,
                    current: point,
                };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    pub fn move_to(&mut self, point: Pos2) {
        if let State::Dragging { current, .. } = &mut self.state {
            *current = point;
        }
    }

    /// Primary button up: ends the session. `None` if no drag was running.
    pub fn release(&mut self, point: Pos2, host: &mut impl HostWindow) -> Option<CaptureOutcome> {
        if !matches!(self.state, State::Dragging { .. }) {
            return None;
        }
        let State::Dragging {
            snapshot, anchor, ..
        } = mem::replace(&mut self.state, State::Idle)
        else {
            return None;
        };

        let rect = normalized_rect(anchor, point);
        let outcome = if rect.width() >= MIN_CAPTURE_SIZE && rect.height() >= MIN_CAPTURE_SIZE {
            match crop_region(&snapshot, rect) {
                Ok(cropped) => {
                    log::info!("captured {}x{} region", cropped.width(), cropped.height());
                    CaptureOutcome::Completed(cropped)
                }
                Err(e) => {
                    log::debug!("selection {rect:?} outside snapshot: {e}");
                    CaptureOutcome::Discarded
                }
            }
        } else {
            log::debug!("selection {rect:?} too small, discarding");
            CaptureOutcome::Discarded
        };

        self.finish(host);
        Some(outcome)
    }

    /// Escape: ends any session without a result.
    pub fn cancel(&mut self, host: &mut impl HostWindow) -> Option<CaptureOutcome> {
        if !self.is_active() {
            return None;
        }
        log::info!("capture cancelled");
        self.finish(host);
        Some(CaptureOutcome::Cancelled)
    }

    fn finish(&mut self, host: &mut impl HostWindow) {
        self.state = State::Idle;
        if !host.is_visible() {
            host.show();
        }
    }
}
