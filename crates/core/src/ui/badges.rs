//! Achievement badge grid

use egui::{self, Color32, RichText, Ui};
use egui_phosphor::regular;

use super::{card_frame, instant_tooltip, DashboardPlatform, GOLD, MUTED};
use crate::achievements::evaluate_achievements;
use crate::models::{BadgeId, UserStats};
use crate::share::ShareRequest;

const LOCKED: Color32 = Color32::from_rgb(90, 90, 100);
const COLUMNS: usize = 3;

pub fn badge_glyph(id: BadgeId) -> &'static str {
    match id {
        BadgeId::FirstTouch => regular::TROPHY,
        BadgeId::RhythmKeeper => regular::FIRE,
        BadgeId::RapidFire => regular::LIGHTNING,
        BadgeId::AlmostThere => regular::STAR,
        BadgeId::StrokeOfGenius => regular::TARGET,
        BadgeId::FapGod => regular::CROWN,
    }
}

pub fn render_badges<P: DashboardPlatform>(ui: &mut Ui, platform: &mut P) {
    let data = platform.data();
    let summary = data.summary;
    let badges = evaluate_achievements(summary.total, summary.streak);
    let stats = data
        .current_user_stats()
        .unwrap_or_else(|| UserStats::new(Some(summary.rank), summary.total, ""));
    let sharing = platform.is_sharing();

    let unlocked = badges.iter().filter(|b| b.unlocked).count();
    let mut share: Option<ShareRequest> = None;

    card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.heading(format!("{} Achievements", regular::MEDAL));
            ui.label(RichText::new(format!("{}/{} unlocked", unlocked, badges.len())).color(MUTED));
        });
        ui.separator();

        egui::Grid::new("achievement_badges")
            .num_columns(COLUMNS)
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for (i, badge) in badges.iter().enumerate() {
                    let color = if badge.unlocked { GOLD } else { LOCKED };
                    ui.vertical(|ui| {
                        ui.set_width(200.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(badge_glyph(badge.id)).size(28.0).color(color));
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&badge.title).strong());
                                ui.label(RichText::new(&badge.description).color(MUTED).small());
                            });
                        });

                        if badge.unlocked {
                            let button = egui::Button::new(format!("{} Share", regular::SHARE_NETWORK));
                            let response = ui.add_enabled(!sharing, button);
                            instant_tooltip(&response, "Copy the achievement card and open a post");
                            if response.clicked() {
                                share = Some(ShareRequest {
                                    achievement: badge.share_text.clone(),
                                    stats: stats.clone(),
                                });
                            }
                        } else {
                            ui.add(
                                egui::ProgressBar::new(badge.progress as f32)
                                    .desired_width(180.0)
                                    .fill(Color32::from_rgb(120, 100, 20)),
                            );
                            if let Some(label) = badge.progress_label() {
                                ui.label(RichText::new(label).color(MUTED).small());
                            } else {
                                ui.label(RichText::new(format!("{} Locked", regular::LOCK)).color(LOCKED).small());
                            }
                        }
                    });
                    if (i + 1) % COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
    });

    if let Some(request) = share {
        platform.request_share(request);
    }
}
