//! FAPS leaderboard table

use egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular;

use super::{card_frame, instant_tooltip, DashboardPlatform, GOLD, MUTED};
use crate::share::ShareRequest;
use crate::stats::format_faps;

const HIGHLIGHT: Color32 = Color32::from_rgba_premultiplied(60, 52, 0, 60);

fn rank_label(rank: u32) -> RichText {
    match rank {
        1 => RichText::new(format!("{} 1", regular::CROWN)).color(GOLD).strong(),
        2 => RichText::new("#2").color(Color32::from_rgb(200, 200, 210)).strong(),
        3 => RichText::new("#3").color(Color32::from_rgb(205, 127, 50)).strong(),
        n => RichText::new(format!("#{}", n)).color(MUTED),
    }
}

pub fn render_leaderboard<P: DashboardPlatform>(ui: &mut Ui, platform: &mut P) {
    let rows = platform.data().leaderboard.clone();
    let sharing = platform.is_sharing();
    let mut share: Option<ShareRequest> = None;

    card_frame().show(ui, |ui| {
        ui.heading(format!("{} Leaderboard", regular::CHART_BAR));
        ui.separator();

        let row_height = egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y) + 6.0;

        TableBuilder::new(ui)
            .id_salt("faps_leaderboard")
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(48.0))
            .column(Column::remainder().at_least(120.0).clip(true))
            .column(Column::exact(80.0))
            .column(Column::exact(32.0))
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.label(RichText::new("Rank").color(MUTED));
                });
                header.col(|ui| {
                    ui.label(RichText::new("User").color(MUTED));
                });
                header.col(|ui| {
                    ui.label(RichText::new("FAPS").color(MUTED));
                });
                header.col(|_ui| {});
            })
            .body(|mut body| {
                for row in &rows {
                    body.row(row_height, |mut table_row| {
                        table_row.col(|ui| {
                            if row.is_current_user {
                                ui.painter().rect_filled(ui.available_rect_before_wrap(), 0.0, HIGHLIGHT);
                            }
                            ui.label(rank_label(row.rank));
                        });
                        table_row.col(|ui| {
                            if row.is_current_user {
                                ui.painter().rect_filled(ui.available_rect_before_wrap(), 0.0, HIGHLIGHT);
                            }
                            ui.label(&row.avatar);
                            let name = RichText::new(&row.username);
                            ui.label(if row.is_current_user { name.color(GOLD).strong() } else { name });
                            if row.is_current_user {
                                ui.label(RichText::new("(you)").color(MUTED).small());
                            }
                        });
                        table_row.col(|ui| {
                            if row.is_current_user {
                                ui.painter().rect_filled(ui.available_rect_before_wrap(), 0.0, HIGHLIGHT);
                            }
                            ui.label(RichText::new(format_faps(row.faps)).strong());
                        });
                        table_row.col(|ui| {
                            if row.is_current_user {
                                ui.painter().rect_filled(ui.available_rect_before_wrap(), 0.0, HIGHLIGHT);
                                let button = egui::Button::new(regular::SHARE_NETWORK).small();
                                let response = ui.add_enabled(!sharing, button);
                                instant_tooltip(&response, "Share your rank");
                                if response.clicked() {
                                    share = Some(ShareRequest {
                                        achievement: row.share_achievement(),
                                        stats: row.user_stats(),
                                    });
                                }
                            }
                        });
                    });
                }
            });
    });

    if let Some(request) = share {
        platform.request_share(request);
    }
}
