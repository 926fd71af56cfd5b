//! The zoomable drawing surface.
//!
//! A [`Canvas`] owns its items in insertion order (later items are drawn on
//! top) together with the view state: zoom, pan and the on-screen viewport.
//! Pointer input arrives in screen coordinates and is routed to handles,
//! items or the background here, so the egui layer only translates events
//! and paints [`Drawable`]s.

pub mod handle;
pub mod item;

pub use handle::{Corner, HANDLE_SIZE, Handle, MIN_ITEM_SCALE};
pub use item::{CanvasItem, ItemId};

use crate::geometry::Transform;
use crate::image_processing::{is_supported_extension, load_image_file};
use eframe::egui::{CursorIcon, Pos2, Rect, Vec2, pos2, vec2};
use image::RgbaImage;
use std::path::Path;

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 5.0;

/// Zoom multiplier per mouse wheel notch.
pub const WHEEL_ZOOM_STEP: f32 = 1.1;

/// Smooth-scroll distance, in points, worth one wheel notch.
pub const POINTS_PER_NOTCH: f32 = 50.0;

/// Collects wheel input into whole notches.
///
/// Fractions carry over to later frames; reversing direction drops them.
#[derive(Clone, Copy, Debug, Default)]
pub struct WheelNotches {
    pending: f32,
}

impl WheelNotches {
    /// Line-based wheels report notches directly.
    pub fn add_lines(&mut self, lines: f32) {
        self.add(lines);
    }

    /// Touchpads and smooth wheels report points.
    pub fn add_points(&mut self, points: f32) {
        self.add(points / POINTS_PER_NOTCH);
    }

    fn add(&mut self, notches: f32) {
        if !notches.is_finite() || notches == 0.0 {
            return;
        }
        if self.pending != 0.0 && self.pending.signum() != notches.signum() {
            self.pending = 0.0;
        }
        self.pending += notches;
    }

    /// Whole notches collected so far, positive for up.
    pub fn take(&mut self) -> i32 {
        let whole = self.pending.trunc();
        self.pending -= whole;
        whole as i32
    }
}

/// Clamps a zoom request into `[MIN_ZOOM, MAX_ZOOM]`. NaN maps to 1.0.
pub fn clamp_zoom(factor: f32) -> f32 {
    if factor.is_nan() {
        return 1.0;
    }
    factor.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// One paintable element, already placed in screen space.
#[derive(Clone, Copy)]
pub enum Drawable<'a> {
    Image {
        item: &'a CanvasItem,
        screen_rect: Rect,
    },
    Handle {
        handle: &'a Handle,
        screen_rect: Rect,
    },
}

/// What lies under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Handle { item: ItemId, corner: Corner },
    Item(ItemId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Gesture {
    Idle,
    Resizing(ItemId),
    Moving { last: Pos2 },
    RubberBand { anchor: Pos2, current: Pos2 },
    Panning { last: Pos2 },
}

pub struct Canvas {
    items: Vec<CanvasItem>,
    zoom: f32,
    pan: Vec2,
    viewport: Rect,
    gesture: Gesture,
    /// Selection kept underneath an additive rubber band.
    band_base: Vec<ItemId>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Canvas {
    pub fn new(zoom: f32) -> Self {
        Self {
            items: Vec::new(),
            zoom: clamp_zoom(zoom),
            pan: Vec2::ZERO,
            viewport: Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0)),
            gesture: Gesture::Idle,
            band_base: Vec::new(),
        }
    }

    // ---- view -------------------------------------------------------------

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Tells the canvas where it is drawn on screen this frame.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Scene to screen: a pure uniform scale plus the pan offset.
    pub fn view_transform(&self) -> Transform {
        Transform::translate(self.viewport.min.to_vec2() + self.pan)
            * Transform::scale(self.zoom, self.zoom)
    }

    pub fn screen_to_scene(&self, point: Pos2) -> Pos2 {
        let origin = self.viewport.min + self.pan;
        pos2((point.x - origin.x) / self.zoom, (point.y - origin.y) / self.zoom)
    }

    pub fn scene_to_screen(&self, point: Pos2) -> Pos2 {
        self.view_transform().map_point(point)
    }

    /// Sets the zoom, keeping the scene point under `anchor` where it is.
    /// Returns the applied factor.
    pub fn set_zoom(&mut self, factor: f32, anchor: Pos2) -> f32 {
        if factor.is_nan() {
            return self.zoom;
        }
        let fixed = self.screen_to_scene(anchor);
        self.zoom = clamp_zoom(factor);
        self.pan = (anchor - self.viewport.min) - fixed.to_vec2() * self.zoom;
        self.zoom
    }

    pub fn set_zoom_centered(&mut self, factor: f32) -> f32 {
        self.set_zoom(factor, self.viewport.center())
    }

    /// One [`WHEEL_ZOOM_STEP`] per notch: up zooms in, down zooms out.
    pub fn wheel_zoom(&mut self, notches: i32, anchor: Pos2) -> f32 {
        if notches == 0 {
            return self.zoom;
        }
        self.set_zoom(self.zoom * WHEEL_ZOOM_STEP.powi(notches), anchor)
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    // ---- items ------------------------------------------------------------

    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: ItemId) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut CanvasItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Places `image` at its natural size, centred in the viewport.
    pub fn paste_image(&mut self, image: RgbaImage) -> Option<ItemId> {
        let centre = self.screen_to_scene(self.viewport.center());
        self.insert_centered(image, centre)
    }

    /// Places `image` centred on the screen point it was dropped at.
    pub fn drop_image(&mut self, image: RgbaImage, drop_point: Pos2) -> Option<ItemId> {
        let centre = self.screen_to_scene(drop_point);
        self.insert_centered(image, centre)
    }

    /// Loads every supported file of a drop batch.
    ///
    /// Files with other extensions, or that fail to decode, are skipped
    /// without affecting the rest of the batch.
    pub fn drop_files<P: AsRef<Path>>(
        &mut self,
        paths: impl IntoIterator<Item = P>,
        drop_point: Pos2,
    ) -> Vec<ItemId> {
        let mut added = Vec::new();
        for path in paths {
            let path = path.as_ref();
            if !is_supported_extension(path) {
                log::debug!("skipping dropped file with unsupported extension: {}", path.display());
                continue;
            }
            match load_image_file(path) {
                Ok(image) => added.extend(self.drop_image(image, drop_point)),
                Err(e) => log::debug!("skipping dropped file {}: {e}", path.display()),
            }
        }
        added
    }

    fn insert_centered(&mut self, image: RgbaImage, centre: Pos2) -> Option<ItemId> {
        if image.width() == 0 || image.height() == 0 {
            log::debug!("rejecting empty image");
            return None;
        }
        let id = ItemId::next();

        let mut item = CanvasItem::new(id, image);
        item.place(centre - item.base_size() / 2.0);
        self.items.push(item);
        log::debug!("added {id:?} at {centre:?}");
        Some(id)
    }

    /// Removes every selected item along with its handles.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.is_selected());
        if let Gesture::Resizing(id) = self.gesture {
            if self.item(id).is_none() {
                self.gesture = Gesture::Idle;
            }
        }
        before - self.items.len()
    }

    // ---- selection --------------------------------------------------------

    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|item| item.is_selected())
            .map(CanvasItem::id)
            .collect()
    }

    pub fn select_only(&mut self, id: ItemId) {
        for item in &mut self.items {
            let selected = item.id() == id;
            if item.is_selected() != selected {
                item.set_selected(selected);
            }
        }
    }

    pub fn toggle_selection(&mut self, id: ItemId) {
        if let Some(item) = self.item_mut(id) {
            let selected = item.is_selected();
            item.set_selected(!selected);
        }
    }

    pub fn clear_selection(&mut self) {
        for item in self.items.iter_mut().filter(|item| item.is_selected()) {
            item.set_selected(false);
        }
    }

    /// Selects exactly the items whose scene rect intersects `scene_rect`.
    pub fn select_in_rect(&mut self, scene_rect: Rect) {
        self.select_in_rect_keeping(scene_rect, &[]);
    }

    /// Like [`select_in_rect`](Self::select_in_rect), but the items in
    /// `keep` stay selected as well.
    pub fn select_in_rect_keeping(&mut self, scene_rect: Rect, keep: &[ItemId]) {
        for item in &mut self.items {
            let hit = item.scene_rect().intersects(scene_rect) || keep.contains(&item.id());
            if item.is_selected() != hit {
                item.set_selected(hit);
            }
        }
    }

    // ---- rendering & hit testing -----------------------------------------

    /// Everything to paint, back to front. Handles follow their item.
    pub fn drawables(&self) -> Vec<Drawable<'_>> {
        let view = self.view_transform();
        let mut out = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let to_screen = view * item.item_to_scene();
            out.push(Drawable::Image {
                item,
                screen_rect: to_screen.map_rect(item.bounding_rect()),
            });
            for handle in item.handles().iter().filter(|h| h.is_visible()) {
                out.push(Drawable::Handle {
                    handle,
                    screen_rect: handle.screen_rect(&to_screen),
                });
            }
        }
        out
    }

    /// Topmost target under `point` (screen space).
    pub fn hit_test(&self, point: Pos2) -> Option<HitTarget> {
        let view = self.view_transform();
        for item in self.items.iter().rev() {
            let to_screen = view * item.item_to_scene();
            for handle in item.handles().iter().filter(|h| h.is_visible()) {
                if handle.screen_rect(&to_screen).contains(point) {
                    return Some(HitTarget::Handle {
                        item: item.id(),
                        corner: handle.corner(),
                    });
                }
            }
            if to_screen.map_rect(item.bounding_rect()).contains(point) {
                return Some(HitTarget::Item(item.id()));
            }
        }
        None
    }

    /// Screen rect of an in-progress rubber band selection.
    pub fn rubber_band(&self) -> Option<Rect> {
        match self.gesture {
            Gesture::RubberBand { anchor, current } => Some(Rect::from_two_pos(anchor, current)),
            _ => None,
        }
    }

    // ---- pointer routing --------------------------------------------------

    /// Primary button down. `toggle` is the add-to-selection modifier.
    pub fn pointer_pressed(&mut self, point: Pos2, toggle: bool) {
        let scene = self.screen_to_scene(point);
        self.gesture = match self.hit_test(point) {
            Some(HitTarget::Handle { item, corner }) => match self.item_mut(item) {
                Some(target) => {
                    target.begin_resize(corner, scene);
                    Gesture::Resizing(item)
                }
                None => Gesture::Idle,
            },
            Some(HitTarget::Item(id)) => {
                if toggle {
                    self.toggle_selection(id);
                } else if !self.item(id).is_some_and(CanvasItem::is_selected) {
                    self.select_only(id);
                }
                Gesture::Moving { last: scene }
            }
            None => {
                if toggle {
                    self.band_base = self.selected_ids();
                } else {
                    self.band_base.clear();
                    self.clear_selection();
                }
                Gesture::RubberBand {
                    anchor: point,
                    current: point,
                }
            }
        };
    }

    /// Middle button down: starts panning.
    pub fn pan_pressed(&mut self, point: Pos2) {
        self.gesture = Gesture::Panning { last: point };
    }

    pub fn pointer_moved(&mut self, point: Pos2) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Resizing(id) => {
                let scene = self.screen_to_scene(point);
                if let Some(item) = self.item_mut(id) {
                    item.resize_to(scene);
                }
            }
            Gesture::Moving { last } => {
                let scene = self.screen_to_scene(point);
                let delta = scene - last;
                for item in self.items.iter_mut().filter(|item| item.is_selected()) {
                    item.translate_by(delta);
                }
                self.gesture = Gesture::Moving { last: scene };
            }
            Gesture::RubberBand { anchor, .. } => {
                self.gesture = Gesture::RubberBand {
                    anchor,
                    current: point,
                };
                let band = Rect::from_two_pos(self.screen_to_scene(anchor), self.screen_to_scene(point));
                let keep = std::mem::take(&mut self.band_base);
                self.select_in_rect_keeping(band, &keep);
                self.band_base = keep;
            }
            Gesture::Panning { last } => {
                self.pan_by(point - last);
                self.gesture = Gesture::Panning { last: point };
            }
        }
    }

    pub fn pointer_released(&mut self) {
        if let Gesture::Resizing(id) = self.gesture {
            if let Some(item) = self.item_mut(id) {
                item.end_resize();
            }
        }
        self.band_base.clear();
        self.gesture = Gesture::Idle;
    }

    pub fn is_busy(&self) -> bool {
        self.gesture != Gesture::Idle
    }

    /// Updates handle hover state for the pointer at `point` and returns
    /// the cursor to show.
    pub fn hover(&mut self, point: Option<Pos2>) -> CursorIcon {
        let target = point.and_then(|p| self.hit_test(p));
        for item in &mut self.items {
            let id = item.id();
            for handle in item.handles_mut() {
                let over = matches!(
                    target,
                    Some(HitTarget::Handle { item: hit, corner }) if hit == id && corner == handle.corner()
                );
                handle.set_hovered(over);
            }
        }

        match self.gesture {
            Gesture::Resizing(id) => self
                .item(id)
                .and_then(|item| item.handles().iter().find(|h| h.is_resizing()))
                .map_or(CursorIcon::Default, Handle::cursor),
            Gesture::Panning { .. } => CursorIcon::Grabbing,
            _ => match target {
                Some(HitTarget::Handle { corner, .. }) => corner.resize_cursor(),
                _ => CursorIcon::Default,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn canvas() -> Canvas {
        let mut canvas = Canvas::new(1.0);
        canvas.set_viewport(Rect::from_min_size(Pos2::ZERO, vec2(1000.0, 800.0)));
        canvas
    }

    fn solid(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]))
    }

    #[test]
    fn zoom_is_always_clamped() {
        let mut canvas = canvas();
        for request in [0.0, -3.0, 0.01, 0.1, 1.0, 4.99, 5.0, 12.0, f32::INFINITY] {
            let applied = canvas.set_zoom_centered(request);
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&applied), "{request} -> {applied}");
        }
        let before = canvas.zoom();
        assert_eq!(canvas.set_zoom_centered(f32::NAN), before);
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let mut canvas = canvas();
        let anchor = pos2(300.0, 200.0);
        let under = canvas.screen_to_scene(anchor);
        canvas.set_zoom(2.0, anchor);
        let after = canvas.scene_to_screen(under);
        assert!((after - anchor).length() < 1e-3);
    }

    #[test]
    fn wheel_steps_by_fixed_factor() {
        let mut canvas = canvas();
        let centre = canvas.viewport().center();
        assert!((canvas.wheel_zoom(1, centre) - 1.1).abs() < 1e-6);
        assert!((canvas.wheel_zoom(-1, centre) - 1.0).abs() < 1e-6);
        assert!((canvas.wheel_zoom(-1, centre) - 1.0 / 1.1).abs() < 1e-6);
        assert!((canvas.wheel_zoom(3, centre) - 1.1 * 1.1).abs() < 1e-5);
        assert_eq!(canvas.wheel_zoom(0, centre), canvas.zoom());
    }

    #[test]
    fn wheel_input_counts_every_notch() {
        let mut wheel = WheelNotches::default();
        wheel.add_lines(3.0);
        assert_eq!(wheel.take(), 3);
        assert_eq!(wheel.take(), 0);

        // Smooth scrolling only steps once a full notch has built up.
        wheel.add_points(20.0);
        assert_eq!(wheel.take(), 0);
        wheel.add_points(20.0);
        assert_eq!(wheel.take(), 0);
        wheel.add_points(20.0);
        assert_eq!(wheel.take(), 1);

        // Leftover upward travel does not cancel a downward notch.
        wheel.add_lines(-1.0);
        assert_eq!(wheel.take(), -1);

        wheel.add_points(f32::NAN);
        assert_eq!(wheel.take(), 0);
    }

    #[test]
    fn paste_centres_in_viewport() {
        let mut canvas = canvas();
        let id = canvas.paste_image(solid(100, 100)).unwrap();
        assert_eq!(canvas.item(id).unwrap().position(), pos2(450.0, 350.0));
    }

    #[test]
    fn drop_centres_on_drop_point() {
        let mut canvas = canvas();
        let id = canvas.drop_image(solid(40, 20), pos2(100.0, 100.0)).unwrap();
        assert_eq!(canvas.item(id).unwrap().position(), pos2(80.0, 90.0));
    }

    #[test]
    fn empty_images_are_rejected() {
        let mut canvas = canvas();
        assert!(canvas.paste_image(RgbaImage::new(0, 10)).is_none());
        assert!(canvas.drop_image(RgbaImage::new(10, 0), pos2(1.0, 1.0)).is_none());
        assert!(canvas.is_empty());
    }

    #[test]
    fn drop_batch_keeps_supported_files_only() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("a.png");
        let upper = dir.path().join("b.JPG");
        let text = dir.path().join("notes.txt");
        let broken = dir.path().join("broken.gif");

        solid(8, 8).save(&png).unwrap();
        image::DynamicImage::ImageRgba8(solid(8, 8))
            .to_rgb8()
            .save_with_format(&upper, image::ImageFormat::Jpeg)
            .unwrap();
        fs::write(&text, b"hello").unwrap();
        fs::write(&broken, b"not a gif").unwrap();

        let mut canvas = canvas();
        let added = canvas.drop_files([&png, &text, &broken, &upper], pos2(50.0, 50.0));
        assert_eq!(added.len(), 2);
        assert_eq!(canvas.len(), 2);
    }

    #[test]
    fn delete_selected_removes_items() {
        let mut canvas = canvas();
        let a = canvas.paste_image(solid(10, 10)).unwrap();
        let b = canvas.paste_image(solid(10, 10)).unwrap();
        canvas.select_only(a);
        assert_eq!(canvas.delete_selected(), 1);
        assert!(canvas.item(a).is_none());
        assert!(canvas.item(b).is_some());
        assert_eq!(canvas.delete_selected(), 0);
    }

    #[test]
    fn handles_track_corners_at_any_zoom() {
        let mut canvas = canvas();
        let id = canvas.paste_image(solid(100, 100)).unwrap();
        canvas.select_only(id);
        canvas.item_mut(id).unwrap().apply_uniform_scale(1.5, pos2(50.0, 50.0));

        for zoom in [0.1, 0.5, 1.0, 2.0, 5.0] {
            canvas.set_zoom(zoom, pos2(123.0, 456.0));
            let item = canvas.item(id).unwrap();
            let corners = canvas.view_transform().map_rect(item.scene_rect());

            for drawable in canvas.drawables() {
                if let Drawable::Handle { handle, screen_rect } = drawable {
                    assert_eq!(screen_rect.size(), Vec2::splat(HANDLE_SIZE));
                    let (got, want) = match handle.corner() {
                        Corner::TopLeft => (screen_rect.left_top(), corners.left_top()),
                        Corner::TopRight => (screen_rect.right_top(), corners.right_top()),
                        Corner::BottomLeft => (screen_rect.left_bottom(), corners.left_bottom()),
                        Corner::BottomRight => (screen_rect.right_bottom(), corners.right_bottom()),
                    };
                    assert!((got - want).length() < 1e-3, "zoom {zoom} {:?}", handle.corner());
                }
            }
        }
    }

    #[test]
    fn handles_only_drawn_when_selected() {
        let mut canvas = canvas();
        let id = canvas.paste_image(solid(10, 10)).unwrap();
        assert_eq!(canvas.drawables().len(), 1);
        canvas.select_only(id);
        assert_eq!(canvas.drawables().len(), 5);
    }

    #[test]
    fn dragging_bottom_right_handle_scales_item() {
        let mut canvas = canvas();
        let id = canvas.paste_image(solid(100, 100)).unwrap();
        canvas.pointer_pressed(pos2(500.0, 400.0), false);
        canvas.pointer_released();
        assert!(canvas.item(id).unwrap().is_selected());

        let grab = pos2(545.0, 445.0);
        assert_eq!(
            canvas.hit_test(grab),
            Some(HitTarget::Handle { item: id, corner: Corner::BottomRight })
        );
        assert_eq!(canvas.hover(Some(grab)), CursorIcon::ResizeNwSe);

        canvas.pointer_pressed(grab, false);
        canvas.pointer_moved(grab + vec2(50.0, 50.0));
        canvas.pointer_released();
        assert_eq!(canvas.item(id).unwrap().scale(), 1.5);
        assert_eq!(canvas.hover(Some(pos2(5.0, 5.0))), CursorIcon::Default);
    }

    #[test]
    fn dragging_an_item_moves_the_selection() {
        let mut canvas = canvas();
        let id = canvas.paste_image(solid(100, 100)).unwrap();
        canvas.set_zoom(2.0, pos2(500.0, 400.0));
        canvas.pointer_pressed(pos2(500.0, 400.0), false);
        canvas.pointer_moved(pos2(520.0, 410.0));
        canvas.pointer_released();
        // 20x10 screen pixels at 2x zoom is 10x5 in the scene.
        assert_eq!(canvas.item(id).unwrap().position(), pos2(460.0, 355.0));
    }

    #[test]
    fn rubber_band_selects_intersecting_items() {
        let mut canvas = canvas();
        let left = canvas.drop_image(solid(20, 20), pos2(100.0, 100.0)).unwrap();
        let right = canvas.drop_image(solid(20, 20), pos2(700.0, 100.0)).unwrap();

        canvas.pointer_pressed(pos2(10.0, 10.0), false);
        canvas.pointer_moved(pos2(200.0, 200.0));
        assert!(canvas.rubber_band().is_some());
        canvas.pointer_released();

        assert_eq!(canvas.selected_ids(), vec![left]);
        assert!(!canvas.item(right).unwrap().is_selected());
        assert!(canvas.rubber_band().is_none());

        canvas.pointer_pressed(pos2(900.0, 700.0), false);
        canvas.pointer_released();
        assert!(canvas.selected_ids().is_empty());
    }

    #[test]
    fn modifier_rubber_band_adds_to_selection() {
        let mut canvas = canvas();
        let left = canvas.drop_image(solid(20, 20), pos2(100.0, 100.0)).unwrap();
        let right = canvas.drop_image(solid(20, 20), pos2(700.0, 100.0)).unwrap();
        let far = canvas.drop_image(solid(20, 20), pos2(700.0, 600.0)).unwrap();
        canvas.select_only(left);

        canvas.pointer_pressed(pos2(600.0, 10.0), true);
        canvas.pointer_moved(pos2(800.0, 200.0));
        canvas.pointer_released();

        let mut selected = canvas.selected_ids();
        selected.sort();
        let mut want = vec![left, right];
        want.sort();
        assert_eq!(selected, want);
        assert!(!canvas.item(far).unwrap().is_selected());

        // Without the modifier the band replaces the selection again.
        canvas.pointer_pressed(pos2(600.0, 500.0), false);
        canvas.pointer_moved(pos2(800.0, 700.0));
        canvas.pointer_released();
        assert_eq!(canvas.selected_ids(), vec![far]);
    }

    #[test]
    fn panning_shifts_the_view() {
        let mut canvas = canvas();
        canvas.pan_pressed(pos2(0.0, 0.0));
        canvas.pointer_moved(pos2(30.0, -10.0));
        canvas.pointer_released();
        assert_eq!(canvas.screen_to_scene(pos2(30.0, -10.0)), pos2(0.0, 0.0));
    }
}
