//! Corner resize handles.
//!
//! A handle's position follows its owner through every transform, but its
//! size does not: the box is always [`HANDLE_SIZE`] screen pixels. To get
//! that, the handle stores the exact corner in the owner's local space and
//! applies the "far edge" offset only after mapping to the screen.

use super::item::ItemId;
use crate::geometry::Transform;
use eframe::egui::{CursorIcon, Pos2, Rect, Vec2, vec2};

/// Edge length of a handle in screen pixels.
pub const HANDLE_SIZE: f32 = 10.0;

/// Smallest uniform scale a resize may produce.
pub const MIN_ITEM_SCALE: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    fn is_max_x(self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomRight)
    }

    fn is_max_y(self) -> bool {
        matches!(self, Corner::BottomLeft | Corner::BottomRight)
    }

    /// This corner of `rect`.
    pub fn point_of(self, rect: Rect) -> Pos2 {
        match self {
            Corner::TopLeft => rect.left_top(),
            Corner::TopRight => rect.right_top(),
            Corner::BottomLeft => rect.left_bottom(),
            Corner::BottomRight => rect.right_bottom(),
        }
    }

    /// Screen-space shift that keeps the handle box inside the item on the
    /// right and bottom edges.
    pub fn screen_offset(self) -> Vec2 {
        vec2(
            if self.is_max_x() { -HANDLE_SIZE } else { 0.0 },
            if self.is_max_y() { -HANDLE_SIZE } else { 0.0 },
        )
    }

    /// Per-axis sign: pointer movement along it grows the item.
    fn grow_direction(self) -> Vec2 {
        vec2(
            if self.is_max_x() { 1.0 } else { -1.0 },
            if self.is_max_y() { 1.0 } else { -1.0 },
        )
    }

    /// Diagonal resize glyph for this corner.
    pub fn resize_cursor(self) -> CursorIcon {
        match self {
            Corner::TopLeft | Corner::BottomRight => CursorIcon::ResizeNwSe,
            Corner::TopRight | Corner::BottomLeft => CursorIcon::ResizeNeSw,
        }
    }
}

/// Baseline captured on press; never touched until release.
#[derive(Clone, Copy, Debug)]
struct ResizeDrag {
    start: Pos2,
    start_size: Vec2,
    start_transform: Transform,
}

#[derive(Clone, Debug)]
pub struct Handle {
    owner: ItemId,
    corner: Corner,
    local_position: Pos2,
    visible: bool,
    hovered: bool,
    drag: Option<ResizeDrag>,
}

impl Handle {
    pub(crate) fn new(owner: ItemId, corner: Corner, owner_rect: Rect) -> Self {
        let mut handle = Self {
            owner,
            corner,
            local_position: Pos2::ZERO,
            visible: false,
            hovered: false,
            drag: None,
        };
        handle.resync(owner_rect);
        handle
    }

    pub fn owner(&self) -> ItemId {
        self.owner
    }

    pub fn corner(&self) -> Corner {
        self.corner
    }

    /// The owner-local corner this handle is pinned to.
    pub fn local_position(&self) -> Pos2 {
        self.local_position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Re-pins the handle to its corner of the owner's bounding rect.
    pub(crate) fn resync(&mut self, owner_rect: Rect) {
        self.local_position = self.corner.point_of(owner_rect);
    }

    /// Where the handle is drawn and hit-tested, given the owner's full
    /// local-to-screen transform.
    pub fn screen_rect(&self, owner_to_screen: &Transform) -> Rect {
        let anchor = owner_to_screen.map_point(self.local_position) + self.corner.screen_offset();
        Rect::from_min_size(anchor, Vec2::splat(HANDLE_SIZE))
    }

    /// Diagonal glyph while hovered or dragged, the default arrow otherwise.
    pub fn cursor(&self) -> CursorIcon {
        if self.hovered || self.is_resizing() {
            self.corner.resize_cursor()
        } else {
            CursorIcon::Default
        }
    }

    pub(crate) fn press(&mut self, start: Pos2, owner_size: Vec2, owner_transform: Transform) {
        self.drag = Some(ResizeDrag {
            start,
            start_size: owner_size,
            start_transform: owner_transform,
        });
    }

    /// Independent per-axis scale ratios for the pointer at `current`.
    ///
    /// Ratios are taken against the item's size as displayed at press time,
    /// so a second drag continues from where the first one stopped. `None`
    /// when not resizing or when that size is degenerate on either axis.
    pub fn axis_scales(&self, current: Pos2) -> Option<Vec2> {
        let drag = self.drag?;
        let shown = vec2(
            drag.start_size.x * drag.start_transform.sx,
            drag.start_size.y * drag.start_transform.sy,
        );
        if !(shown.x.is_finite() && shown.y.is_finite()) || shown.x == 0.0 || shown.y == 0.0 {
            return None;
        }

        let delta = current - drag.start;
        let dir = self.corner.grow_direction();
        Some(vec2(
            1.0 + dir.x * delta.x / shown.x,
            1.0 + dir.y * delta.y / shown.y,
        ))
    }

    /// Uniform scale to apply to the owner: the mean of the two axis ratios
    /// on top of the press-time scale.
    pub(crate) fn drag_scale(&self, current: Pos2) -> Option<f32> {
        let drag = self.drag?;
        let ratios = self.axis_scales(current)?;
        let factor = drag.start_transform.uniform_scale() * (ratios.x + ratios.y) / 2.0;
        factor.is_finite().then(|| factor.max(MIN_ITEM_SCALE))
    }

    /// Ends a resize. Returns whether one was in progress.
    pub(crate) fn release(&mut self) -> bool {
        self.drag.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    fn rect_100() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(100.0, 100.0))
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    fn pressed(corner: Corner) -> Handle {
        let mut handle = Handle::new(ItemId(1), corner, rect_100());
        handle.press(pos2(0.0, 0.0), vec2(100.0, 100.0), Transform::IDENTITY);
        handle
    }

    #[test]
    fn corners_pin_to_rect_corners() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(40.0, 30.0));
        let expected = [
            pos2(0.0, 0.0),
            pos2(40.0, 0.0),
            pos2(0.0, 30.0),
            pos2(40.0, 30.0),
        ];
        for (corner, want) in Corner::ALL.into_iter().zip(expected) {
            assert_eq!(Handle::new(ItemId(0), corner, rect).local_position(), want);
        }
    }

    #[test]
    fn screen_box_touches_corner_from_inside() {
        let to_screen = Transform::translate(vec2(200.0, 100.0)) * Transform::scale(2.0, 2.0);

        let br = Handle::new(ItemId(0), Corner::BottomRight, rect_100());
        let rect = br.screen_rect(&to_screen);
        assert_eq!(rect.max, pos2(400.0, 300.0));
        assert_eq!(rect.size(), vec2(HANDLE_SIZE, HANDLE_SIZE));

        let tl = Handle::new(ItemId(0), Corner::TopLeft, rect_100());
        assert_eq!(tl.screen_rect(&to_screen).min, pos2(200.0, 100.0));
    }

    #[test]
    fn each_corner_grows_away_from_centre() {
        let outward = [
            (Corner::TopLeft, pos2(-20.0, -20.0)),
            (Corner::TopRight, pos2(20.0, -20.0)),
            (Corner::BottomLeft, pos2(-20.0, 20.0)),
            (Corner::BottomRight, pos2(20.0, 20.0)),
        ];
        for (corner, to) in outward {
            let scales = pressed(corner).axis_scales(to).unwrap();
            assert!(close(scales, vec2(1.2, 1.2)), "{corner:?}: {scales:?}");
        }
    }

    #[test]
    fn uneven_drag_is_averaged() {
        let handle = pressed(Corner::BottomRight);
        let scales = handle.axis_scales(pos2(60.0, 20.0)).unwrap();
        assert!(close(scales, vec2(1.6, 1.2)));
        assert!((handle.drag_scale(pos2(60.0, 20.0)).unwrap() - 1.4).abs() < 1e-6);
    }

    #[test]
    fn second_drag_builds_on_press_time_scale() {
        let mut handle = Handle::new(ItemId(0), Corner::BottomRight, rect_100());
        handle.press(pos2(0.0, 0.0), vec2(100.0, 100.0), Transform::scale(2.0, 2.0));
        // 200px shown; +100px on both axes is another 1.5x.
        assert!((handle.drag_scale(pos2(100.0, 100.0)).unwrap() - 3.0).abs() < 1e-6);
        // No movement leaves the scale where it was.
        assert_eq!(handle.drag_scale(pos2(0.0, 0.0)), Some(2.0));
    }

    #[test]
    fn degenerate_size_skips_update() {
        let mut handle = Handle::new(ItemId(0), Corner::BottomRight, rect_100());
        handle.press(pos2(0.0, 0.0), vec2(0.0, 100.0), Transform::IDENTITY);
        assert_eq!(handle.axis_scales(pos2(10.0, 10.0)), None);
        assert_eq!(handle.drag_scale(pos2(10.0, 10.0)), None);
    }

    #[test]
    fn collapsing_drag_is_floored() {
        let handle = pressed(Corner::BottomRight);
        assert_eq!(handle.drag_scale(pos2(-500.0, -500.0)), Some(MIN_ITEM_SCALE));
    }

    #[test]
    fn cursor_reflects_hover_and_diagonal() {
        let mut handle = Handle::new(ItemId(0), Corner::TopRight, rect_100());
        assert_eq!(handle.cursor(), CursorIcon::Default);
        handle.set_hovered(true);
        assert_eq!(handle.cursor(), CursorIcon::ResizeNeSw);
        handle.set_hovered(false);
        assert_eq!(handle.cursor(), CursorIcon::Default);

        assert_eq!(Corner::TopLeft.resize_cursor(), Corner::BottomRight.resize_cursor());
        assert_eq!(Corner::TopRight.resize_cursor(), Corner::BottomLeft.resize_cursor());
    }

    #[test]
    fn release_reports_whether_dragging() {
        let mut handle = pressed(Corner::TopLeft);
        assert!(handle.is_resizing());
        assert!(handle.release());
        assert!(!handle.release());
        assert_eq!(handle.axis_scales(pos2(5.0, 5.0)), None);
    }
}
