//! Settings window

use eframe::egui;
use egui_phosphor::regular;
use faps_core::{CardPreset, ShareNetwork};
use tracing::{error, info};

use crate::app::FapsDashboardApp;
use crate::fonts::apply_font_settings;

impl FapsDashboardApp {
    pub(crate) fn render_settings_window(&mut self, ctx: &egui::Context) {
        let mut show_settings = self.show_settings;
        let mut changed = false;

        egui::Window::new(format!("{} Settings", regular::GEAR))
            .open(&mut show_settings)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .min_width(420.0)
            .show(ctx, |ui| {
                self.render_appearance_section(ui, ctx);

                ui.add_space(12.0);
                ui.separator();
                changed |= self.render_share_section(ui);

                ui.add_space(12.0);
                ui.separator();
                ui.heading("Diagnostics");
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label("Log filter:");
                    changed |= ui.text_edit_singleline(&mut self.config.log_filter).lost_focus();
                });
                ui.label(
                    egui::RichText::new("Takes effect on next launch. RUST_LOG overrides it.")
                        .color(egui::Color32::GRAY)
                        .small(),
                );
            });

        self.show_settings = show_settings;

        if changed {
            self.notifications.set_ttl(self.config.notification_secs);
            self.save_config();
        }
    }

    fn render_appearance_section(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.heading("Appearance");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("Display name:");
            if ui.text_edit_singleline(&mut self.config.display_name).lost_focus() {
                self.save_config();
            }
        });

        // Font size with pending value (only applied on Save)
        ui.horizontal(|ui| {
            ui.label("Font Size:");
            ui.add(
                egui::DragValue::new(&mut self.pending_font_size)
                    .range(8.0..=32.0)
                    .speed(0.5)
                    .suffix(" pt"),
            );
        });

        let size_changed = (self.pending_font_size - self.config.font_size).abs() > 0.01;
        ui.horizontal(|ui| {
            if ui
                .add_enabled(size_changed, egui::Button::new(format!("{} Save Font Size", regular::FLOPPY_DISK)))
                .clicked()
            {
                self.config.font_size = self.pending_font_size;
                apply_font_settings(ctx, &self.config);
                self.save_config();
            }
            if size_changed {
                ui.label(egui::RichText::new("(unsaved)").color(egui::Color32::YELLOW).small());
            }
        });
    }

    /// Returns true when any share option changed
    fn render_share_section(&mut self, ui: &mut egui::Ui) -> bool {
        let before = (
            self.config.share_network,
            self.config.card_preset,
            self.config.copy_image,
            self.config.open_share_intent,
            self.config.notification_secs,
        );

        ui.heading(format!("{} Sharing", regular::SHARE_NETWORK));
        ui.add_space(8.0);

        egui::Grid::new("share_settings").num_columns(2).spacing([16.0, 6.0]).show(ui, |ui| {
            ui.label("Network:");
            egui::ComboBox::from_id_salt("share_network")
                .selected_text(self.config.share_network.label())
                .show_ui(ui, |ui| {
                    for network in ShareNetwork::ALL {
                        ui.selectable_value(&mut self.config.share_network, network, network.label());
                    }
                });
            ui.end_row();

            ui.label("Card size:");
            egui::ComboBox::from_id_salt("card_preset")
                .selected_text(self.config.card_preset.label())
                .show_ui(ui, |ui| {
                    for preset in CardPreset::ALL {
                        ui.selectable_value(&mut self.config.card_preset, preset, preset.label());
                    }
                });
            ui.end_row();

            ui.label("Copy card image:");
            ui.checkbox(&mut self.config.copy_image, "");
            ui.end_row();

            ui.label("Open share window:");
            ui.checkbox(&mut self.config.open_share_intent, "");
            ui.end_row();

            ui.label("Notifications:");
            ui.add(
                egui::DragValue::new(&mut self.config.notification_secs)
                    .range(1.0..=30.0)
                    .speed(0.25)
                    .suffix(" s"),
            );
            ui.end_row();
        });

        let after = (
            self.config.share_network,
            self.config.card_preset,
            self.config.copy_image,
            self.config.open_share_intent,
            self.config.notification_secs,
        );
        before != after
    }

    pub(crate) fn save_config(&self) {
        match self.config.save() {
            Ok(()) => info!("Settings saved"),
            Err(e) => error!("Failed to save settings: {}", e),
        }
    }
}
