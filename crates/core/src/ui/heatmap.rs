//! Twelve-week engagement heatmap

use egui::{self, Color32, RichText, Sense, Ui};
use egui_phosphor::regular;

use super::{card_frame, instant_tooltip, DashboardPlatform, MUTED};
use crate::stats::{format_faps, summarize_heatmap};

const CELL: f32 = 14.0;
const GAP: f32 = 3.0;

/// Cell colour for intensity 0 (empty) to 4 (hottest)
pub fn intensity_color(intensity: u8) -> Color32 {
    match intensity {
        0 => Color32::from_rgb(40, 40, 50),
        1 => Color32::from_rgb(90, 75, 10),
        2 => Color32::from_rgb(150, 125, 10),
        3 => Color32::from_rgb(210, 175, 5),
        _ => Color32::from_rgb(255, 215, 0),
    }
}

pub fn render_heatmap<P: DashboardPlatform>(ui: &mut Ui, platform: &P) {
    let days = platform.heatmap();
    let summary = summarize_heatmap(days);

    card_frame().show(ui, |ui| {
        ui.heading(format!("{} Engagement Heatmap", regular::CALENDAR_CHECK));
        ui.separator();

        // one column per week, oldest on the left
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = GAP;
            for week in days.chunks(7) {
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing.y = GAP;
                    for day in week {
                        let (rect, response) = ui.allocate_exact_size(egui::vec2(CELL, CELL), Sense::hover());
                        ui.painter().rect_filled(rect, 2.0, intensity_color(day.intensity));
                        instant_tooltip(
                            &response,
                            format!("{}: {} FAPS", day.date.format("%b %-d, %Y"), format_faps(day.faps)),
                        );
                    }
                });
            }
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Less").color(MUTED).small());
            for level in 0..=4 {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), Sense::hover());
                ui.painter().rect_filled(rect, 2.0, intensity_color(level));
            }
            ui.label(RichText::new("More").color(MUTED).small());
        });

        ui.label(format!(
            "{} active days · {} FAPS in the last {} weeks",
            summary.active_days,
            format_faps(summary.total_faps),
            days.len() / 7
        ));
    });
}
