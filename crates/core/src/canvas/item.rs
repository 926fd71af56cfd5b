//! Images placed on a canvas.

use super::handle::{Corner, Handle};
use crate::geometry::Transform;
use eframe::egui::{Pos2, Rect, Vec2, vec2};
use image::RgbaImage;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stable identity of an item, unique across all canvases of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) u64);

impl ItemId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A placed, movable, resizable image.
///
/// The item owns its four corner handles outright; they are created with it,
/// dropped with it and re-pinned after every geometry change. Scene
/// coordinates of a local point `p` are `translate(position) · transform · p`.
pub struct CanvasItem {
    id: ItemId,
    image: RgbaImage,
    position: Pos2,
    transform: Transform,
    selected: bool,
    handles: [Handle; 4],
    active_handle: Option<Corner>,
}

impl CanvasItem {
    pub(crate) fn new(id: ItemId, image: RgbaImage) -> Self {
        let rect = Rect::from_min_size(
            Pos2::ZERO,
            vec2(image.width() as f32, image.height() as f32),
        );
        let handles = Corner::ALL.map(|corner| Handle::new(id, corner, rect));
        Self {
            id,
            image,
            position: Pos2::ZERO,
            transform: Transform::IDENTITY,
            selected: false,
            handles,
            active_handle: None,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn handles(&self) -> &[Handle; 4] {
        &self.handles
    }

    pub fn handle(&self, corner: Corner) -> &Handle {
        &self.handles[corner as usize]
    }

    pub(crate) fn handles_mut(&mut self) -> &mut [Handle; 4] {
        &mut self.handles
    }

    /// Image size at scale 1.0.
    pub fn base_size(&self) -> Vec2 {
        vec2(self.image.width() as f32, self.image.height() as f32)
    }

    /// Untransformed pixel rectangle of the image, in item-local space.
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.base_size())
    }

    /// Item-local to scene.
    pub fn item_to_scene(&self) -> Transform {
        Transform::translate(self.position.to_vec2()) * self.transform
    }

    /// Bounding rect as it lies in the scene.
    pub fn scene_rect(&self) -> Rect {
        self.item_to_scene().map_rect(self.bounding_rect())
    }

    pub fn contains_scene_point(&self, point: Pos2) -> bool {
        self.scene_rect().contains(point)
    }

    /// Moves the item's origin to `position` in scene space.
    pub fn place(&mut self, position: Pos2) {
        if !(position.x.is_finite() && position.y.is_finite()) {
            log::debug!("ignoring non-finite position {position:?} for {:?}", self.id);
            return;
        }
        self.position = position;
        self.resync_handles();
    }

    pub fn translate_by(&mut self, delta: Vec2) {
        self.place(self.position + delta);
    }

    /// Selection drives handle visibility; the two never disagree.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        for handle in &mut self.handles {
            handle.set_visible(selected);
        }
        self.resync_handles();
    }

    /// Replaces the transform with `translate(pivot) · scale(f) · translate(-pivot)`.
    ///
    /// Built fresh on every call rather than multiplied onto the previous
    /// transform, so repeated drags do not accumulate rounding error.
    pub fn apply_uniform_scale(&mut self, factor: f32, pivot: Pos2) {
        let transform = Transform::uniform_about(pivot, factor);
        if !transform.is_finite() || factor <= 0.0 {
            log::debug!("ignoring degenerate scale {factor} for {:?}", self.id);
            return;
        }
        self.transform = transform;
        self.resync_handles();
    }

    /// Current uniform scale factor.
    pub fn scale(&self) -> f32 {
        self.transform.uniform_scale()
    }

    /// Starts a corner drag at `scene_point`.
    pub fn begin_resize(&mut self, corner: Corner, scene_point: Pos2) {
        let size = self.bounding_rect().size();
        let transform = self.transform;
        self.handles[corner as usize].press(scene_point, size, transform);
        self.active_handle = Some(corner);
    }

    /// Follows the pointer during a corner drag. Returns whether the
    /// transform changed; a degenerate baseline leaves the item untouched.
    pub fn resize_to(&mut self, scene_point: Pos2) -> bool {
        let Some(corner) = self.active_handle else {
            return false;
        };
        let Some(factor) = self.handles[corner as usize].drag_scale(scene_point) else {
            return false;
        };
        let pivot = self.bounding_rect().center();
        self.apply_uniform_scale(factor, pivot);
        true
    }

    /// Ends a corner drag; the last applied transform stays.
    pub fn end_resize(&mut self) {
        if let Some(corner) = self.active_handle.take() {
            self.handles[corner as usize].release();
        }
    }

    pub fn is_resizing(&self) -> bool {
        self.active_handle.is_some()
    }

    fn resync_handles(&mut self) {
        let rect = self.bounding_rect();
        for handle in &mut self.handles {
            handle.resync(rect);
        }
    }
}
