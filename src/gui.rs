use crate::draft::SettingsDraft;
use crate::dwell::DwellHoverTimer;
use crate::engine::Engine;
use crate::preview::{self, PreviewTexture};
use crate::recenter::RecenterSequencer;
use crate::settings_editor::{SaveOutcome, SettingsEditor};
use crate::store::AppStore;
use crate::telemetry::TrackerState;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

const TOAST_DURATION_SECS: f64 = 3.0;

pub struct CameraMouseApp {
    store: Arc<AppStore>,
    engine: Arc<dyn Engine>,
    recenter: RecenterSequencer,
    dwell_hover: DwellHoverTimer,
    recenter_requested: Arc<AtomicBool>,
    draft: SettingsDraft,
    settings_editor: SettingsEditor,
    show_settings: bool,
    preview_tex: Option<PreviewTexture>,
    toasts: Toasts,
    dwell_button_hovered: bool,
}

impl CameraMouseApp {
    pub fn new(
        store: Arc<AppStore>,
        engine: Arc<dyn Engine>,
        recenter_requested: Arc<AtomicBool>,
    ) -> Self {
        let draft = SettingsDraft::new(&store);
        let mut app = Self {
            store,
            engine,
            recenter: RecenterSequencer::new(),
            dwell_hover: DwellHoverTimer::new(),
            recenter_requested,
            draft,
            settings_editor: SettingsEditor::default(),
            show_settings: false,
            preview_tex: None,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            dwell_button_hovered: false,
        };

        let general = app.store.params().general;
        if general.dwell_on_startup {
            app.set_dwell_enabled(true);
        }
        if general.auto_start {
            app.start();
        }
        app
    }

    fn toast(&mut self, kind: ToastKind, text: impl Into<String>) {
        self.toasts.add(Toast {
            text: text.into().into(),
            kind,
            options: ToastOptions::default().duration_in_seconds(TOAST_DURATION_SECS),
        });
    }

    /// Push a changed parameter set through the live-update path (outside
    /// the settings-save flow). The local commit is kept even when the push
    /// fails; the failure is logged and surfaced.
    fn push_live_params(&mut self, next: crate::params::AllParams) {
        self.store.set_params(next.clone());
        if let Err(err) = self.engine.update_parameters(&next) {
            tracing::warn!("live parameter update failed: {err:#}");
            self.toast(ToastKind::Error, "Failed to update parameters");
        }
    }

    fn set_dwell_enabled(&mut self, enabled: bool) {
        let mut next = self.store.params();
        if next.clicking.dwell_enabled == enabled {
            return;
        }
        next.clicking.dwell_enabled = enabled;
        self.push_live_params(next);
    }

    fn toggle_right_click(&mut self) {
        let mut next = self.store.params();
        next.clicking.right_click_toggle = !next.clicking.right_click_toggle;
        self.push_live_params(next);
    }

    fn start(&mut self) {
        match self.engine.start() {
            Ok(()) => self.store.set_running(true),
            Err(err) => {
                tracing::error!("start failed: {err:#}");
                self.toast(ToastKind::Error, "Failed to start capture");
            }
        }
    }

    fn stop(&mut self) {
        match self.engine.stop() {
            Ok(()) => {
                self.store.set_running(false);
                self.store.set_preview(None);
            }
            Err(err) => {
                tracing::error!("stop failed: {err:#}");
                self.toast(ToastKind::Error, "Failed to stop capture");
            }
        }
    }

    fn trigger_recenter(&mut self, now: Instant) {
        let tracking_on = self.store.telemetry().tracking_on;
        self.recenter
            .trigger(now, tracking_on, self.engine.as_ref());
    }

    fn preview_ui(&mut self, ui: &mut egui::Ui) {
        let frame = self.store.preview();
        let Some(frame) = frame else {
            egui::Frame::dark_canvas(ui.style()).show(ui, |ui| {
                ui.allocate_ui(egui::vec2(ui.available_width(), 180.0), |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label("No camera signal");
                    });
                });
            });
            return;
        };
        let Some(texture) = PreviewTexture::get(&mut self.preview_tex, ui.ctx(), &frame) else {
            return;
        };
        let response = ui.add(
            egui::Image::new(&texture)
                .max_width(ui.available_width())
                .max_height(260.0)
                .sense(egui::Sense::click()),
        );
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let rect = response.rect;
                let (x, y) = preview::map_click_to_native(
                    pos.x - rect.min.x,
                    pos.y - rect.min.y,
                    rect.width(),
                    rect.height(),
                    frame.width,
                    frame.height,
                );
                if let Err(err) = self.engine.set_pick_point(x, y) {
                    tracing::warn!("set pick point failed: {err:#}");
                    self.toast(ToastKind::Error, "Failed to set tracking point");
                }
            }
        }
    }

    fn header_ui(&mut self, ui: &mut egui::Ui) {
        let telemetry = self.store.telemetry();
        ui.horizontal(|ui| {
            ui.heading("Camera Mouse");
            let state = telemetry.state();
            let color = match state {
                TrackerState::Idle => egui::Color32::GRAY,
                TrackerState::Tracking => egui::Color32::LIGHT_GREEN,
                TrackerState::Lost => egui::Color32::RED,
            };
            ui.colored_label(color, state.to_string());
            ui.label(format!("{:.0} fps", telemetry.fps));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Settings").clicked() && !self.show_settings {
                    // Re-derive the draft on every open so stale edits from a
                    // dismissed session never survive.
                    self.draft = SettingsDraft::new(&self.store);
                    self.show_settings = true;
                }
            });
        });
    }

    fn actions_ui(&mut self, ui: &mut egui::Ui, now: Instant) {
        let is_running = self.store.is_running();
        ui.horizontal(|ui| {
            let run_label = if is_running { "Stop" } else { "Start" };
            if ui.button(run_label).clicked() {
                if is_running {
                    self.stop();
                } else {
                    self.start();
                }
            }
            let countdown = self.recenter.countdown();
            let recenter_label = if countdown > 0 {
                format!("Recenter ({countdown})")
            } else {
                "Recenter".to_string()
            };
            if ui
                .add_enabled(countdown == 0, egui::Button::new(recenter_label))
                .clicked()
            {
                self.trigger_recenter(now);
            }
        });
    }

    fn click_mode_ui(&mut self, ui: &mut egui::Ui, now: Instant) {
        let params = self.store.params();
        let dwell_enabled = params.clicking.dwell_enabled;
        ui.horizontal(|ui| {
            let dwell_label = format!("Dwell {}", if dwell_enabled { "On" } else { "Off" });
            let response = ui
                .button(dwell_label)
                .on_hover_text("Hover to enable dwell clicking");
            let hovered = response.hovered();
            if hovered && !self.dwell_button_hovered {
                self.dwell_hover.hover_start(now, dwell_enabled);
            } else if !hovered && self.dwell_button_hovered {
                self.dwell_hover.hover_end();
            }
            self.dwell_button_hovered = hovered;
            if response.clicked() {
                self.dwell_hover.explicit_toggle();
                self.set_dwell_enabled(!dwell_enabled);
            }

            let right_click = params.clicking.right_click_toggle;
            let rc_label = format!("Right Click {}", if right_click { "On" } else { "Off" });
            if ui.button(rc_label).clicked() {
                self.toggle_right_click();
            }
        });
    }
}

impl eframe::App for CameraMouseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // The hotkey event funnels into the same sequencer as the button,
        // so the in-flight guard covers both.
        if self.recenter_requested.swap(false, Ordering::SeqCst) {
            self.trigger_recenter(now);
        }
        self.recenter.poll(now, self.engine.as_ref());

        let dwell_enabled = self.store.params().clicking.dwell_enabled;
        if self.dwell_hover.poll(now, dwell_enabled) {
            self.set_dwell_enabled(true);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.header_ui(ui);
            ui.separator();
            self.preview_ui(ui);
            ui.separator();
            self.actions_ui(ui, now);
            self.click_mode_ui(ui, now);
        });

        if self.show_settings {
            self.draft.sync(&self.store);
            let outcome = self.settings_editor.ui(
                ctx,
                &mut self.draft,
                &self.store,
                self.engine.as_ref(),
                &mut self.show_settings,
            );
            match outcome {
                SaveOutcome::None => {}
                SaveOutcome::Saved => self.toast(ToastKind::Success, "Settings saved"),
                SaveOutcome::Failed(message) => self.toast(ToastKind::Error, message),
            }
        }

        let next_deadline = match (self.recenter.next_deadline(), self.dwell_hover.next_deadline())
        {
            (Some(a), Some(b)) => Some(a.min(b)),
            (deadline, None) | (None, deadline) => deadline,
        };
        if let Some(deadline) = next_deadline {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }

        self.toasts.show(ctx);
    }
}
