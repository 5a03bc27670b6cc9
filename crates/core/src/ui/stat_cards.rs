//! Summary cards: total, daily, weekly, rank

use egui::{self, Color32, RichText, Sense, Stroke, Ui};
use egui_phosphor::regular;

use super::{card_frame, DashboardPlatform, GOLD, MUTED, NEGATIVE, POSITIVE};
use crate::stats::{change_label, count_up, format_faps, sparkline_points};

const COUNT_UP_SECS: f64 = 1.5;
const SPARKLINE_SIZE: egui::Vec2 = egui::vec2(96.0, 32.0);

pub fn render_stat_cards<P: DashboardPlatform>(ui: &mut Ui, platform: &P) {
    let data = platform.data();
    let summary = data.summary;

    let elapsed = platform.elapsed_secs();
    let shown_total = count_up(summary.total, elapsed, COUNT_UP_SECS);
    if elapsed < COUNT_UP_SECS {
        ui.ctx().request_repaint();
    }

    ui.columns(4, |cols| {
        card_frame().show(&mut cols[0], |ui| {
            ui.label(RichText::new(format!("{} Total FAPS", regular::COINS)).color(MUTED));
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{:.2}", shown_total)).size(26.0).color(GOLD).strong());
                sparkline(ui, &data.sparkline);
            });
        });

        card_frame().show(&mut cols[1], |ui| {
            ui.label(RichText::new(format!("{} Daily FAPS", regular::CALENDAR_BLANK)).color(MUTED));
            ui.label(RichText::new(format_faps(summary.daily)).size(26.0).strong());
            change_text(ui, summary.daily, summary.previous_daily, "day");
        });

        card_frame().show(&mut cols[2], |ui| {
            ui.label(RichText::new(format!("{} Weekly FAPS", regular::CALENDAR)).color(MUTED));
            ui.label(RichText::new(format_faps(summary.weekly)).size(26.0).strong());
            change_text(ui, summary.weekly, summary.previous_weekly, "week");
        });

        card_frame().show(&mut cols[3], |ui| {
            ui.label(RichText::new(format!("{} Rank", regular::CHART_BAR)).color(MUTED));
            ui.label(RichText::new(format!("#{}", summary.rank)).size(26.0).strong());
            ui.label(
                RichText::new(format!("{} {} day streak", regular::FIRE, summary.streak))
                    .color(Color32::from_rgb(255, 140, 60)),
            );
        });
    });
}

fn change_text(ui: &mut Ui, current: f64, previous: f64, period: &str) {
    let color = if current < previous { NEGATIVE } else { POSITIVE };
    ui.label(RichText::new(change_label(current, previous, period)).color(color).small());
}

fn sparkline(ui: &mut Ui, data: &[f64]) {
    let (rect, _) = ui.allocate_exact_size(SPARKLINE_SIZE, Sense::hover());
    let points: Vec<egui::Pos2> = sparkline_points(data, rect.width(), rect.height(), 2.0)
        .into_iter()
        .map(|[x, y]| rect.min + egui::vec2(x, y))
        .collect();
    if points.len() >= 2 {
        ui.painter().add(egui::Shape::line(points, Stroke::new(1.5, GOLD)));
    }
}
