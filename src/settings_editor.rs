use crate::draft::SettingsDraft;
use crate::engine::Engine;
use crate::hotkey::is_valid_key_combo;
use crate::params::{self, AllParams, ClickType, MarkerShape, PointerAdvancedParams};
use crate::store::AppStore;
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Tab {
    #[default]
    Tracking,
    Pointer,
    Clicking,
    Hotkeys,
    General,
}

/// Result of one settings-window frame, surfaced by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    None,
    Saved,
    Failed(String),
}

/// Settings window over the draft coordinator. All widgets edit a working
/// copy of the draft; nothing reaches the committed store or the engine
/// until Save succeeds.
#[derive(Default)]
pub struct SettingsEditor {
    tab: Tab,
}

impl SettingsEditor {
    pub fn ui(
        &mut self,
        ctx: &egui::Context,
        draft: &mut SettingsDraft,
        store: &AppStore,
        engine: &dyn Engine,
        open: &mut bool,
    ) -> SaveOutcome {
        let mut outcome = SaveOutcome::None;
        let mut window_open = *open;
        let mut close_requested = false;

        egui::Window::new("Settings")
            .open(&mut window_open)
            .resizable(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.tab, Tab::Tracking, "Tracking");
                    ui.selectable_value(&mut self.tab, Tab::Pointer, "Pointer");
                    ui.selectable_value(&mut self.tab, Tab::Clicking, "Clicking");
                    ui.selectable_value(&mut self.tab, Tab::Hotkeys, "Hotkeys");
                    ui.selectable_value(&mut self.tab, Tab::General, "General");
                });
                ui.separator();

                let mut working = draft.draft().clone();
                match self.tab {
                    Tab::Tracking => tracking_tab(ui, &mut working),
                    Tab::Pointer => pointer_tab(ui, &mut working),
                    Tab::Clicking => clicking_tab(ui, &mut working),
                    Tab::Hotkeys => hotkeys_tab(ui, &mut working),
                    Tab::General => general_tab(ui, &mut working),
                }
                let hotkeys_ok = is_valid_key_combo(&working.hotkeys.start_pause)
                    && is_valid_key_combo(&working.hotkeys.recenter);
                if working != *draft.draft() {
                    draft.update(|_| working);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    let can_save = draft.dirty() && hotkeys_ok;
                    if ui
                        .add_enabled(can_save, egui::Button::new("Save"))
                        .clicked()
                    {
                        draft.update(|p| p.clamped());
                        match draft.save(store, engine) {
                            Ok(()) => {
                                outcome = SaveOutcome::Saved;
                                close_requested = true;
                            }
                            Err(err) => {
                                tracing::error!("failed to save settings: {err:#}");
                                outcome = SaveOutcome::Failed(format!("Failed to save: {err}"));
                            }
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        draft.reset();
                        close_requested = true;
                    }
                    if ui.button("Restore defaults").clicked() {
                        draft.update(|_| AllParams::default());
                    }
                });
            });

        if close_requested {
            window_open = false;
        }
        *open = window_open;
        outcome
    }
}

fn tracking_tab(ui: &mut egui::Ui, working: &mut AllParams) {
    let tracking = &mut working.tracking;
    ui.add(
        egui::Slider::new(&mut tracking.template_size_px, params::TEMPLATE_SIZE_RANGE)
            .step_by(5.0)
            .text("Template size (px)"),
    );
    ui.add(
        egui::Slider::new(&mut tracking.search_margin_px, params::SEARCH_MARGIN_RANGE)
            .step_by(5.0)
            .text("Search margin (px)"),
    );
    ui.add(
        egui::Slider::new(&mut tracking.score_threshold, params::SCORE_THRESHOLD_RANGE)
            .text("Score threshold"),
    );
    ui.checkbox(&mut tracking.adaptive_template, "Adaptive template");
    if tracking.adaptive_template {
        ui.add(
            egui::Slider::new(
                &mut tracking.template_update_alpha,
                params::TEMPLATE_ALPHA_RANGE,
            )
            .text("Template blend factor"),
        );
    }
    egui::ComboBox::from_label("Marker shape")
        .selected_text(tracking.marker_shape.to_string())
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut tracking.marker_shape, MarkerShape::Circle, "Circle");
            ui.selectable_value(&mut tracking.marker_shape, MarkerShape::Square, "Square");
        });
}

fn pointer_tab(ui: &mut egui::Ui, working: &mut AllParams) {
    let pointer = &mut working.pointer;
    ui.add(
        egui::Slider::new(&mut pointer.sensitivity, params::SENSITIVITY_RANGE)
            .text("Sensitivity"),
    );
    ui.add(
        egui::Slider::new(&mut pointer.deadzone_px, params::DEADZONE_RANGE)
            .text("Deadzone (px)"),
    );
    ui.add(
        egui::Slider::new(&mut pointer.max_speed_px, params::MAX_SPEED_RANGE)
            .text("Max speed (px)"),
    );

    let mut advanced_on = pointer.advanced.is_some();
    if ui
        .checkbox(&mut advanced_on, "Advanced mapping override")
        .changed()
    {
        // Either fully present or absent; enabling starts from defaults.
        pointer.advanced = advanced_on.then(PointerAdvancedParams::default);
    }
    if let Some(advanced) = &mut pointer.advanced {
        ui.add(egui::Slider::new(&mut advanced.gain_x, params::GAIN_RANGE).text("Gain X"));
        ui.add(egui::Slider::new(&mut advanced.gain_y, params::GAIN_RANGE).text("Gain Y"));
        ui.add(
            egui::Slider::new(&mut advanced.smoothing, params::SMOOTHING_RANGE)
                .text("Smoothing"),
        );
    }
}

fn clicking_tab(ui: &mut egui::Ui, working: &mut AllParams) {
    let clicking = &mut working.clicking;
    ui.checkbox(&mut clicking.dwell_enabled, "Dwell clicking");
    ui.add(
        egui::Slider::new(&mut clicking.dwell_time_ms, params::DWELL_TIME_RANGE)
            .step_by(50.0)
            .text("Dwell time (ms)"),
    );
    ui.add(
        egui::Slider::new(&mut clicking.dwell_radius_px, params::DWELL_RADIUS_RANGE)
            .step_by(5.0)
            .text("Dwell radius (px)"),
    );
    egui::ComboBox::from_label("Click type")
        .selected_text(clicking.click_type.to_string())
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut clicking.click_type, ClickType::Left, "Left");
            ui.selectable_value(&mut clicking.click_type, ClickType::Right, "Right");
            ui.selectable_value(&mut clicking.click_type, ClickType::Double, "Double");
        });
    ui.checkbox(&mut clicking.right_click_toggle, "Next dwell click is a right click");
}

fn hotkeys_tab(ui: &mut egui::Ui, working: &mut AllParams) {
    let hotkeys = &mut working.hotkeys;
    ui.horizontal(|ui| {
        ui.label("Start/Pause");
        ui.text_edit_singleline(&mut hotkeys.start_pause);
    });
    if !is_valid_key_combo(&hotkeys.start_pause) {
        ui.colored_label(egui::Color32::RED, "Invalid key combination");
    }
    ui.horizontal(|ui| {
        ui.label("Recenter");
        ui.text_edit_singleline(&mut hotkeys.recenter);
    });
    if !is_valid_key_combo(&hotkeys.recenter) {
        ui.colored_label(egui::Color32::RED, "Invalid key combination");
    }
    ui.label("Leave a field empty to disable the binding.");
}

fn general_tab(ui: &mut egui::Ui, working: &mut AllParams) {
    let general = &mut working.general;
    ui.checkbox(&mut general.auto_start, "Start capture on launch");
    ui.checkbox(&mut general.dwell_on_startup, "Enable dwell clicking on launch");
}
