//! egui widget that paints a [`Canvas`] and feeds it pointer input.

use super::rendering::{HANDLE_FILL, draw_handle, draw_rubber_band, draw_selection_border};
use crate::canvas::{Canvas, Drawable, ItemId, WheelNotches};
use crate::image_processing::to_color_image;
use eframe::egui;
use std::collections::{HashMap, HashSet};

const BACKGROUND: egui::Color32 = egui::Color32::from_gray(48);

/// GPU textures for canvas items, uploaded on first paint.
#[derive(Default)]
pub struct CanvasView {
    textures: HashMap<ItemId, egui::TextureHandle>,
    wheel: WheelNotches,
}

impl CanvasView {
    /// Lays the canvas out over the remaining space of `ui`.
    ///
    /// With `interactive` false the canvas is painted but ignores the
    /// pointer, e.g. while a capture overlay owns input.
    pub fn show(&mut self, ui: &mut egui::Ui, canvas: &mut Canvas, interactive: bool) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        canvas.set_viewport(rect);

        if interactive {
            self.route_input(ui, canvas, rect);
        }
        self.paint(ui, canvas, rect);
    }

    fn route_input(&mut self, ui: &egui::Ui, canvas: &mut Canvas, rect: egui::Rect) {
        let wheel = &mut self.wheel;
        let (hover, primary, middle, released, modifiers) = ui.input(|i| {
            for event in &i.events {
                if let egui::Event::MouseWheel { unit, delta, .. } = event {
                    match unit {
                        egui::MouseWheelUnit::Point => wheel.add_points(delta.y),
                        egui::MouseWheelUnit::Line | egui::MouseWheelUnit::Page => {
                            wheel.add_lines(delta.y)
                        }
                    }
                }
            }
            (
                i.pointer.hover_pos(),
                i.pointer.primary_pressed(),
                i.pointer.button_pressed(egui::PointerButton::Middle),
                i.pointer.any_released(),
                i.modifiers,
            )
        });

        let inside = hover.filter(|p| rect.contains(*p));
        if let Some(pos) = inside {
            if primary {
                canvas.pointer_pressed(pos, modifiers.shift || modifiers.command);
            } else if middle {
                canvas.pan_pressed(pos);
            }
            let notches = self.wheel.take();
            if notches != 0 {
                canvas.wheel_zoom(notches, pos);
            }
        } else {
            self.wheel = WheelNotches::default();
        }

        // Drags keep tracking outside the canvas until release.
        if let Some(pos) = hover {
            if canvas.is_busy() {
                canvas.pointer_moved(pos);
            }
        }
        if released && canvas.is_busy() {
            canvas.pointer_released();
        }

        let cursor = canvas.hover(inside);
        ui.ctx().set_cursor_icon(cursor);
    }

    fn paint(&mut self, ui: &egui::Ui, canvas: &Canvas, rect: egui::Rect) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, BACKGROUND);

        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        for drawable in canvas.drawables() {
            match drawable {
                Drawable::Image { item, screen_rect } => {
                    let texture = self.textures.entry(item.id()).or_insert_with(|| {
                        ui.ctx().load_texture(
                            format!("canvas-item-{:?}", item.id()),
                            to_color_image(item.image()),
                            egui::TextureOptions::LINEAR,
                        )
                    });
                    painter.image(texture.id(), screen_rect, uv, egui::Color32::WHITE);
                    if item.is_selected() {
                        draw_selection_border(&painter, screen_rect, 1.0, HANDLE_FILL);
                    }
                }
                Drawable::Handle {
                    handle,
                    screen_rect,
                } => draw_handle(&painter, screen_rect, handle.is_hovered()),
            }
        }

        if let Some(band) = canvas.rubber_band() {
            draw_rubber_band(&painter, band);
        }
    }

    /// Frees textures of items that no longer exist anywhere.
    pub fn retain_items(&mut self, alive: impl IntoIterator<Item = ItemId>) {
        let alive: HashSet<ItemId> = alive.into_iter().collect();
        self.textures.retain(|id, _| alive.contains(id));
    }
}
