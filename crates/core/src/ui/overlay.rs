//! Full-screen overlay shown while a capture session is armed.
//!
//! The overlay is an immediate viewport: it exists exactly as long as the
//! app keeps calling [`CaptureOverlay::show`], which it does only while the
//! controller owns input.

use super::rendering::{CAPTURE_WASH_ALPHA, draw_selection_border, draw_selection_overlay};
use crate::image_processing::{PixelMapping, to_color_image};
use crate::region_capture::{CaptureOutcome, HostWindow, RegionCaptureController};
use eframe::egui;

const SELECTION_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 30, 30);

#[derive(Default)]
pub struct CaptureOverlay {
    texture: Option<egui::TextureHandle>,
}

impl CaptureOverlay {
    /// Paints the overlay for this frame and forwards its input to
    /// `controller`. Returns the outcome when the session ends.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        controller: &mut RegionCaptureController,
        host: &mut impl HostWindow,
    ) -> Option<CaptureOutcome> {
        let builder = egui::ViewportBuilder::default()
            .with_title("EZ Paster capture")
            .with_fullscreen(true)
            .with_decorations(false)
            .with_always_on_top();

        let outcome = ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("ez_paster_capture_overlay"),
            builder,
            |ctx, _class| self.frame(ctx, controller, host),
        );

        if !controller.owns_input() {
            self.texture = None;
        }
        outcome
    }

    fn frame(
        &mut self,
        ctx: &egui::Context,
        controller: &mut RegionCaptureController,
        host: &mut impl HostWindow,
    ) -> Option<CaptureOutcome> {
        let panel_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(0))
            .outer_margin(egui::Margin::same(0));

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let Some(snapshot) = controller.snapshot() else {
                    return None;
                };
                let mapping = PixelMapping::new(rect, snapshot.width(), snapshot.height())?;
                let texture = self.texture.get_or_insert_with(|| {
                    ctx.load_texture(
                        "capture-snapshot",
                        to_color_image(snapshot),
                        egui::TextureOptions::LINEAR,
                    )
                });
                let texture_id = texture.id();

                let (pointer, pressed, released, escape, close) = ctx.input(|i| {
                    (
                        i.pointer.interact_pos(),
                        i.pointer.primary_pressed(),
                        i.pointer.primary_released(),
                        i.key_pressed(egui::Key::Escape),
                        i.viewport().close_requested(),
                    )
                });

                if escape || close {
                    if close {
                        ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                    }
                    return controller.cancel(host);
                }

                let mut outcome = None;
                if let Some(pos) = pointer {
                    let pixel = mapping.to_pixels(pos);
                    if pressed {
                        controller.press(pixel);
                    }
                    controller.move_to(pixel);
                    if released {
                        outcome = controller.release(pixel, host);
                    }
                }

                let painter = ui.painter();
                painter.image(
                    texture_id,
                    rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
                match controller.selection() {
                    Some(selection) => {
                        let shown = mapping.to_points(selection);
                        draw_selection_overlay(painter, rect, shown, CAPTURE_WASH_ALPHA);
                        draw_selection_border(painter, shown, 2.0, SELECTION_COLOR);
                    }
                    None => {
                        painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(CAPTURE_WASH_ALPHA));
                    }
                }

                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
                outcome
            })
            .inner
    }
}
