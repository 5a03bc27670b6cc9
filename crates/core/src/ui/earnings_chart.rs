//! FAPS earnings over time

use egui::{self, Color32, RichText, Ui};
use egui_plot::{Line, Plot, PlotPoints};
use egui_phosphor::regular;

use super::{card_frame, DashboardPlatform, GOLD, MUTED};
use crate::stats::{chart_window, format_faps, ChartRange};

pub fn render_earnings_chart<P: DashboardPlatform>(ui: &mut Ui, platform: &mut P) {
    card_frame().show(ui, |ui| {
        let current = platform.chart_range();
        ui.horizontal(|ui| {
            ui.heading(format!("{} FAPS Earnings", regular::CHART_LINE_UP));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // right-to-left, so reversed to read 7D 30D 90D
                for range in ChartRange::ALL.iter().rev() {
                    if ui.selectable_label(current == *range, range.label()).clicked() {
                        platform.set_chart_range(*range);
                    }
                }
            });
        });
        ui.separator();

        let window = chart_window(&platform.data().chart, current);
        let Some(first) = window.first() else {
            ui.label(RichText::new("No earnings yet.").color(MUTED));
            return;
        };
        let origin = first.date;

        // x is days since the first point in the window
        let points: PlotPoints = window
            .iter()
            .map(|p| [(p.date - origin).num_days() as f64, p.earnings])
            .collect();
        let line = Line::new("FAPS", points).color(GOLD).fill(0.0);

        Plot::new("faps_earnings")
            .height(180.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let date = origin + chrono::Duration::days(mark.value.round() as i64);
                date.format("%b %-d").to_string()
            })
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });

        let total: f64 = window.iter().map(|p| p.earnings).sum();
        ui.label(
            RichText::new(format!("{} FAPS in the last {}", format_faps(total), current.label()))
                .color(Color32::LIGHT_GRAY)
                .small(),
        );
    });
}
