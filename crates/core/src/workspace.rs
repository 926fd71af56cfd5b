//! Open drafts and the zoom they share.

use crate::canvas::{Canvas, ItemId, clamp_zoom};
use crate::clipboard::ImageClipboard;
use image::RgbaImage;

/// Multiplier for the zoom in/out actions.
pub const ZOOM_STEP: f32 = 1.2;

pub const SLIDER_MIN: i32 = -10;
pub const SLIDER_MAX: i32 = 10;

/// Status-bar slider position to zoom factor.
///
/// Positive positions add 10% per step; negative ones divide symmetrically,
/// so `-10` is 50% and `10` is 200%.
pub fn slider_to_zoom(value: i32) -> f32 {
    let v = value.clamp(SLIDER_MIN, SLIDER_MAX) as f32;
    if v >= 0.0 {
        1.0 + v * 0.1
    } else {
        1.0 / (1.0 - v * 0.1)
    }
}

/// Nearest slider position for a zoom factor.
pub fn zoom_to_slider(zoom: f32) -> i32 {
    if !zoom.is_finite() || zoom <= 0.0 {
        return 0;
    }
    let v = if zoom >= 1.0 {
        (zoom - 1.0) / 0.1
    } else {
        (1.0 - 1.0 / zoom) / 0.1
    };
    (v.round() as i32).clamp(SLIDER_MIN, SLIDER_MAX)
}

/// "Zoom: 150%"
pub fn zoom_label(zoom: f32) -> String {
    format!("Zoom: {}%", (zoom * 100.0).round() as i32)
}

pub struct Draft {
    title: String,
    pub canvas: Canvas,
}

impl Draft {
    pub fn title(&self) -> &str {
        &self.title
    }
}

pub struct Workspace {
    drafts: Vec<Draft>,
    current: Option<usize>,
    zoom: f32,
    created: usize,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Workspace {
    /// An empty workspace; drafts opened later start at `zoom`.
    pub fn new(zoom: f32) -> Self {
        Self {
            drafts: Vec::new(),
            current: None,
            zoom: clamp_zoom(zoom),
            created: 0,
        }
    }

    pub fn drafts(&self) -> &[Draft] {
        &self.drafts
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&Draft> {
        self.current.and_then(|i| self.drafts.get(i))
    }

    pub fn current_mut(&mut self) -> Option<&mut Draft> {
        self.current.and_then(|i| self.drafts.get_mut(i))
    }

    pub fn set_current(&mut self, index: usize) {
        if index < self.drafts.len() {
            self.current = Some(index);
        }
    }

    /// Opens "Draft N" and makes it current. Returns its index.
    pub fn new_draft(&mut self) -> usize {
        self.created += 1;
        self.drafts.push(Draft {
            title: format!("Draft {}", self.created),
            canvas: Canvas::new(self.zoom),
        });
        let index = self.drafts.len() - 1;
        self.current = Some(index);
        log::debug!("opened draft {}", self.created);
        index
    }

    pub fn close_draft(&mut self, index: usize) {
        if index >= self.drafts.len() {
            return;
        }
        self.drafts.remove(index);
        self.current = match self.current {
            _ if self.drafts.is_empty() => None,
            Some(c) if c > index => Some(c - 1),
            Some(c) => Some(c.min(self.drafts.len() - 1)),
            None => None,
        };
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Applies `zoom` to every draft, each around its own viewport centre.
    pub fn apply_zoom(&mut self, zoom: f32) -> f32 {
        if zoom.is_nan() {
            return self.zoom;
        }
        self.zoom = clamp_zoom(zoom);
        for draft in &mut self.drafts {
            draft.canvas.set_zoom_centered(self.zoom);
        }
        self.zoom
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.apply_zoom(self.zoom * ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.apply_zoom(self.zoom / ZOOM_STEP)
    }

    pub fn reset_zoom(&mut self) -> f32 {
        self.apply_zoom(1.0)
    }

    /// Picks up a zoom change made directly on the current canvas (wheel).
    pub fn sync_zoom_from_current(&mut self) {
        if let Some(zoom) = self.current().map(|d| d.canvas.zoom()) {
            if zoom != self.zoom {
                self.apply_zoom(zoom);
            }
        }
    }

    /// Pastes a captured image into the current draft, opening one first if
    /// none exists.
    pub fn deliver_capture(&mut self, image: RgbaImage) -> Option<ItemId> {
        self.paste_into_current(image)
    }

    /// Pastes the clipboard image, if the clipboard holds one, into the
    /// current draft.
    pub fn paste_from(&mut self, clipboard: &mut impl ImageClipboard) -> Option<ItemId> {
        if !clipboard.has_image() {
            log::debug!("clipboard holds no image; nothing to paste");
            return None;
        }
        match clipboard.read_image() {
            Ok(image) => self.paste_into_current(image),
            Err(e) => {
                log::debug!("clipboard image unreadable: {e}");
                None
            }
        }
    }

    fn paste_into_current(&mut self, image: RgbaImage) -> Option<ItemId> {
        if self.current.is_none() {
            self.new_draft();
        }
        self.current_mut()
            .and_then(|draft| draft.canvas.paste_image(image))
    }
}
