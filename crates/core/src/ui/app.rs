//! The main scratchpad window.

use super::canvas_view::CanvasView;
use super::overlay::CaptureOverlay;
use super::settings::WindowSettings;
use super::state::Action;
use super::{CaptureRequests, LaunchOptions};
use crate::canvas::CanvasItem;
use crate::capture::PrimaryScreen;
use crate::clipboard::{ImageClipboard, SystemClipboard};
use crate::config::Config;
use crate::image_processing::{decode_image_bytes, is_supported_extension};
use crate::region_capture::{CaptureOutcome, HostWindow, RegionCaptureController};
use crate::workspace::{SLIDER_MAX, SLIDER_MIN, Workspace, slider_to_zoom, zoom_label, zoom_to_slider};
use eframe::egui;
use std::path::Path;
use std::time::Instant;

/// The root viewport seen through [`HostWindow`].
struct MainWindow<'a> {
    ctx: &'a egui::Context,
    visible: &'a mut bool,
}

impl HostWindow for MainWindow<'_> {
    fn hide(&mut self) {
        self.ctx
            .send_viewport_cmd_to(egui::ViewportId::ROOT, egui::ViewportCommand::Visible(false));
        *self.visible = false;
    }

    fn show(&mut self) {
        self.ctx
            .send_viewport_cmd_to(egui::ViewportId::ROOT, egui::ViewportCommand::Visible(true));
        self.ctx
            .send_viewport_cmd_to(egui::ViewportId::ROOT, egui::ViewportCommand::Focus);
        *self.visible = true;
    }

    fn is_visible(&self) -> bool {
        *self.visible
    }
}

pub struct ScratchpadApp {
    workspace: Workspace,
    view: CanvasView,
    capture: RegionCaptureController,
    overlay: CaptureOverlay,
    screen: PrimaryScreen,
    clipboard: SystemClipboard,
    requests: Option<CaptureRequests>,
    capture_on_start: bool,
    host_visible: bool,
    settings: WindowSettings,
}

impl ScratchpadApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        settings: WindowSettings,
        launch: LaunchOptions,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        if let Some(requests) = &launch.requests {
            requests.attach(&cc.egui_ctx);
        }

        let mut workspace = Workspace::new(config.initial_zoom);
        workspace.new_draft();
        if !launch.files.is_empty() {
            if let Some(draft) = workspace.current_mut() {
                let centre = draft.canvas.viewport().center();
                let added = draft.canvas.drop_files(&launch.files, centre);
                log::info!("opened {} of {} files", added.len(), launch.files.len());
            }
        }

        Self {
            workspace,
            view: CanvasView::default(),
            capture: RegionCaptureController::new(config.capture_delay),
            overlay: CaptureOverlay::default(),
            screen: PrimaryScreen,
            clipboard: SystemClipboard,
            requests: launch.requests,
            capture_on_start: launch.capture_on_start,
            host_visible: true,
            settings,
        }
    }

    // ---- capture ----------------------------------------------------------

    fn start_capture(&mut self, ctx: &egui::Context, now: Instant) {
        let mut host = MainWindow {
            ctx,
            visible: &mut self.host_visible,
        };
        if self.capture.request(now, &mut host) {
            if let Some(wait) = self.capture.remaining(now) {
                ctx.request_repaint_after(wait);
            }
        }
    }

    fn drive_capture(&mut self, ctx: &egui::Context, now: Instant) {
        let mut host = MainWindow {
            ctx,
            visible: &mut self.host_visible,
        };
        self.capture.poll(now, &mut self.screen, &mut host);

        if let Some(wait) = self.capture.remaining(now) {
            ctx.request_repaint_after(wait);
            return;
        }
        if !self.capture.owns_input() {
            return;
        }

        if let Some(outcome) = self.overlay.show(ctx, &mut self.capture, &mut host) {
            self.finish_capture(outcome);
        }
    }

    fn finish_capture(&mut self, outcome: CaptureOutcome) {
        let CaptureOutcome::Completed(image) = outcome else {
            return;
        };
        if let Err(e) = self.clipboard.write_image(&image) {
            log::warn!("could not copy capture to clipboard: {e}");
        }
        self.workspace.deliver_capture(image);
    }

    fn take_requests(&mut self) -> bool {
        let hotkey = self
            .requests
            .as_ref()
            .is_some_and(|requests| requests.drain() > 0);
        hotkey || std::mem::take(&mut self.capture_on_start)
    }

    // ---- input ------------------------------------------------------------

    fn collect_shortcuts(ctx: &egui::Context, actions: &mut Vec<Action>) {
        ctx.input(|i| {
            for event in &i.events {
                let action = match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        modifiers,
                        ..
                    } => Action::from_key(*key, *modifiers),
                    // Ctrl+V usually arrives as a paste event instead of a key.
                    egui::Event::Paste(_) => Some(Action::Paste),
                    _ => None,
                };
                if let Some(action) = action {
                    if !actions.contains(&action) {
                        actions.push(action);
                    }
                }
            }
        });
    }

    fn accept_dropped_files(&mut self, ctx: &egui::Context) {
        let (files, pointer) = ctx.input(|i| (i.raw.dropped_files.clone(), i.pointer.hover_pos()));
        if files.is_empty() {
            return;
        }
        if self.workspace.current().is_none() {
            self.workspace.new_draft();
        }
        let Some(draft) = self.workspace.current_mut() else {
            return;
        };
        let drop_point = pointer.unwrap_or_else(|| draft.canvas.viewport().center());

        let paths: Vec<_> = files.iter().filter_map(|f| f.path.clone()).collect();
        let mut added = draft.canvas.drop_files(&paths, drop_point).len();

        // Platforms without file paths hand over the bytes instead.
        for file in files.iter().filter(|f| f.path.is_none()) {
            let Some(bytes) = &file.bytes else { continue };
            if !is_supported_extension(Path::new(&file.name)) {
                log::debug!("skipping dropped file with unsupported extension: {}", file.name);
                continue;
            }
            match decode_image_bytes(bytes) {
                Ok(image) => added += usize::from(draft.canvas.drop_image(image, drop_point).is_some()),
                Err(e) => log::debug!("skipping dropped file {}: {e}", file.name),
            }
        }
        log::debug!("drop batch of {} files added {added} items", files.len());
    }

    fn paste_from_clipboard(&mut self) {
        if let Some(id) = self.workspace.paste_from(&mut self.clipboard) {
            log::debug!("pasted {id:?} from clipboard");
        }
    }

    fn apply(&mut self, ctx: &egui::Context, action: Action, now: Instant) {
        log::trace!("action {action:?}");
        match action {
            Action::NewDraft => {
                self.workspace.new_draft();
            }
            Action::CloseDraft(index) => self.workspace.close_draft(index),
            Action::SelectDraft(index) => self.workspace.set_current(index),
            Action::Capture => self.start_capture(ctx, now),
            Action::Paste => self.paste_from_clipboard(),
            Action::DeleteSelection => {
                if let Some(draft) = self.workspace.current_mut() {
                    let removed = draft.canvas.delete_selected();
                    log::debug!("deleted {removed} items");
                }
            }
            Action::ZoomIn => {
                self.workspace.zoom_in();
            }
            Action::ZoomOut => {
                self.workspace.zoom_out();
            }
            Action::ResetZoom => {
                self.workspace.reset_zoom();
            }
            Action::ZoomSlider(value) => {
                self.workspace.apply_zoom(slider_to_zoom(value));
            }
        }
    }

    // ---- layout -----------------------------------------------------------

    fn toolbar(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        ui.horizontal(|ui| {
            if ui.button("New Draft").on_hover_text("Ctrl+N").clicked() {
                actions.push(Action::NewDraft);
            }
            if ui.button("Capture").on_hover_text("F11").clicked() {
                actions.push(Action::Capture);
            }
            if ui.button("Paste").on_hover_text("Ctrl+V").clicked() {
                actions.push(Action::Paste);
            }
            ui.separator();
            if ui.button("Zoom In").clicked() {
                actions.push(Action::ZoomIn);
            }
            if ui.button("Zoom Out").clicked() {
                actions.push(Action::ZoomOut);
            }
            if ui.button("Reset Zoom").clicked() {
                actions.push(Action::ResetZoom);
            }
            ui.separator();
            let has_selection = self
                .workspace
                .current()
                .is_some_and(|d| !d.canvas.selected_ids().is_empty());
            if ui
                .add_enabled(has_selection, egui::Button::new("Delete"))
                .clicked()
            {
                actions.push(Action::DeleteSelection);
            }
        });

        ui.horizontal(|ui| {
            let current = self.workspace.current_index();
            for (index, draft) in self.workspace.drafts().iter().enumerate() {
                if ui
                    .selectable_label(current == Some(index), draft.title())
                    .clicked()
                {
                    actions.push(Action::SelectDraft(index));
                }
                if ui.small_button("x").on_hover_text("Close draft").clicked() {
                    actions.push(Action::CloseDraft(index));
                }
            }
        });
    }

    fn status_bar(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        ui.horizontal(|ui| {
            let mut value = zoom_to_slider(self.workspace.zoom());
            let slider = egui::Slider::new(&mut value, SLIDER_MIN..=SLIDER_MAX).show_value(false);
            if ui.add(slider).changed() {
                actions.push(Action::ZoomSlider(value));
            }
            ui.label(zoom_label(self.workspace.zoom()));
        });
    }

    /// Keeps the stored geometry current and saves it when the window closes.
    fn track_geometry(&mut self, ctx: &egui::Context) {
        let (outer, inner, closing) = ctx.input(|i| {
            let viewport = i.viewport();
            (viewport.outer_rect, viewport.inner_rect, viewport.close_requested())
        });
        if self.host_visible {
            if let Some(outer) = outer {
                self.settings.position = Some([outer.min.x, outer.min.y]);
            }
            if let Some(inner) = inner {
                self.settings.size = [inner.width(), inner.height()];
            }
        }
        if closing {
            if let Err(e) = self.settings.save() {
                log::warn!("could not save window geometry: {e}");
            }
        }
    }
}

impl eframe::App for ScratchpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if self.take_requests() {
            self.start_capture(ctx, now);
        }
        self.drive_capture(ctx, now);

        let interactive = !self.capture.is_active();
        let mut actions = Vec::new();
        if interactive {
            Self::collect_shortcuts(ctx, &mut actions);
            self.accept_dropped_files(ctx);
        }
        self.track_geometry(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui, &mut actions);
        });
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar(ui, &mut actions);
        });

        let panel_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(0))
            .outer_margin(egui::Margin::same(0));
        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| match self.workspace.current_mut() {
                Some(draft) => self.view.show(ui, &mut draft.canvas, interactive),
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label("Ctrl+N opens a new draft, F11 captures a screen region.");
                    });
                }
            });
        self.workspace.sync_zoom_from_current();

        for action in actions {
            self.apply(ctx, action, now);
        }

        self.view.retain_items(
            self.workspace
                .drafts()
                .iter()
                .flat_map(|d| d.canvas.items().iter().map(CanvasItem::id)),
        );
    }
}
