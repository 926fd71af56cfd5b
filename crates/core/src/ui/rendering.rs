//! Painting helpers shared by the canvas view and the capture overlay.

use eframe::egui;

/// Fill colour of a resize handle.
pub const HANDLE_FILL: egui::Color32 = egui::Color32::from_rgb(0, 120, 215);
const HANDLE_HOVER_FILL: egui::Color32 = egui::Color32::from_rgb(60, 160, 255);

/// Dimming applied over the frozen screen while capturing.
pub const CAPTURE_WASH_ALPHA: u8 = 70;

/// Draws the dark wash around `selection_rect`, leaving the selection clear.
///
/// # Arguments
/// * `painter` - The egui painter to draw with
/// * `screen_rect` - The full screen rectangle
/// * `selection_rect` - The selected area to keep clear
/// * `alpha` - Darkness level (0-255, higher = darker)
pub fn draw_selection_overlay(
    painter: &egui::Painter,
    screen_rect: egui::Rect,
    selection_rect: egui::Rect,
    alpha: u8,
) {
    let color = egui::Color32::from_black_alpha(alpha);

    // Above
    painter.rect_filled(
        egui::Rect::from_min_max(
            screen_rect.min,
            egui::pos2(screen_rect.max.x, selection_rect.min.y),
        ),
        0.0,
        color,
    );

    // Below
    painter.rect_filled(
        egui::Rect::from_min_max(
            egui::pos2(screen_rect.min.x, selection_rect.max.y),
            screen_rect.max,
        ),
        0.0,
        color,
    );

    // Left and right, between the two
    painter.rect_filled(
        egui::Rect::from_min_max(
            egui::pos2(screen_rect.min.x, selection_rect.min.y),
            egui::pos2(selection_rect.min.x, selection_rect.max.y),
        ),
        0.0,
        color,
    );
    painter.rect_filled(
        egui::Rect::from_min_max(
            egui::pos2(selection_rect.max.x, selection_rect.min.y),
            egui::pos2(screen_rect.max.x, selection_rect.max.y),
        ),
        0.0,
        color,
    );
}

/// Draws a border around the selection rectangle.
pub fn draw_selection_border(
    painter: &egui::Painter,
    selection_rect: egui::Rect,
    stroke_width: f32,
    color: egui::Color32,
) {
    painter.rect_stroke(
        selection_rect,
        0.0,
        egui::Stroke::new(stroke_width, color),
        egui::StrokeKind::Middle,
    );
}

/// A corner handle: filled square with a thin white outline.
pub fn draw_handle(painter: &egui::Painter, rect: egui::Rect, hovered: bool) {
    let fill = if hovered { HANDLE_HOVER_FILL } else { HANDLE_FILL };
    painter.rect_filled(rect, 0.0, fill);
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::WHITE),
        egui::StrokeKind::Inside,
    );
}

/// Translucent rubber band for canvas selection.
pub fn draw_rubber_band(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, 0.0, HANDLE_FILL.gamma_multiply(0.15));
    draw_selection_border(painter, rect, 1.0, HANDLE_FILL);
}
