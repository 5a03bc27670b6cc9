//! Top toolbar - title, build info, settings toggle

use eframe::egui;
use egui_phosphor::regular;
use faps_core::ui::MUTED;

use crate::app::FapsDashboardApp;

// Build info embedded at compile time
const BUILD_DATETIME: &str = env!("BUILD_DATETIME");

impl FapsDashboardApp {
    pub(crate) fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let heading = ui.heading("FAPS Dashboard");
                heading.on_hover_text(format!("v{}\nBuilt {}", env!("CARGO_PKG_VERSION"), BUILD_DATETIME));
                ui.separator();

                if !self.share_receivers.is_empty() {
                    ui.spinner();
                    ui.label(egui::RichText::new("Preparing share...").color(MUTED));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(regular::GEAR)
                        .on_hover_text("Settings")
                        .clicked()
                    {
                        self.show_settings = !self.show_settings;
                        self.pending_font_size = self.config.font_size;
                    }
                    let fallback = self.data.current_user().map(|row| row.username.as_str()).unwrap_or_default();
                    ui.label(format!("{} {}", regular::USER, self.config.display_name_or(fallback)));
                });
            });
        });
    }
}
