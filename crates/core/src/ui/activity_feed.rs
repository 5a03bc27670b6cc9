//! Recent engagement activity

use egui::{self, Color32, RichText, Ui};
use egui_phosphor::regular;

use super::{card_frame, DashboardPlatform, MUTED};
use crate::models::ActivityKind;
use crate::stats::actions_label;

pub fn activity_glyph(kind: ActivityKind) -> (&'static str, Color32) {
    match kind {
        ActivityKind::Like => (regular::HEART, Color32::from_rgb(240, 80, 110)),
        ActivityKind::Retweet => (regular::REPEAT, Color32::from_rgb(80, 200, 120)),
        ActivityKind::Comment => (regular::CHAT_CIRCLE, Color32::from_rgb(90, 160, 255)),
        ActivityKind::Mention => (regular::AT, Color32::from_rgb(180, 120, 255)),
    }
}

pub fn render_activity_feed<P: DashboardPlatform>(ui: &mut Ui, platform: &P) {
    let activities = &platform.data().activities;

    card_frame().show(ui, |ui| {
        ui.heading(format!("{} Recent Activity", regular::CLOCK_COUNTER_CLOCKWISE));
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("activity_feed")
            .max_height(260.0)
            .show(ui, |ui| {
                if activities.is_empty() {
                    ui.label(RichText::new("No activity yet.").color(MUTED));
                }
                for entry in activities {
                    let (glyph, color) = activity_glyph(entry.kind);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(glyph).size(18.0).color(color));
                        ui.vertical(|ui| {
                            ui.label(&entry.description);
                            ui.label(RichText::new(&entry.timestamp_label).color(MUTED).small());
                        });
                    });
                    ui.add_space(4.0);
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(RichText::new("Activities Today").color(MUTED));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(actions_label(activities.len())).strong());
            });
        });
    });
}
