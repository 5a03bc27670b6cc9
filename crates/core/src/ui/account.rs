//! X account connection card (local mock)

use egui::{self, Color32, RichText, Ui};
use egui_phosphor::regular;

use super::{card_frame, instant_tooltip, DashboardPlatform, GOLD, MUTED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

const SCORE_HELP: &str = "Twitter score is assigned by Twitterscore.io based on engagement metrics. \
FAPS are calculated based on Engagement and Twitter score of the user. Scores range from 1 to 1000.";

pub fn render_account_card<P: DashboardPlatform>(ui: &mut Ui, platform: &mut P) {
    let state = platform.account_state();
    let mut connect = false;
    let mut disconnect = false;

    card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.heading(format!("{} Engagement Rewards", regular::TWITTER_LOGO));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| match state {
                AccountState::Disconnected => {
                    connect = ui.button(format!("Connect {} account", regular::TWITTER_LOGO)).clicked();
                }
                AccountState::Connecting => {
                    ui.spinner();
                    ui.label(RichText::new("Connecting to X...").color(MUTED));
                }
                AccountState::Connected => {
                    disconnect = ui.small_button(format!("{} Disconnect", regular::X)).clicked();
                }
            });
        });
        ui.separator();

        if state != AccountState::Connected {
            ui.label(
                RichText::new(
                    "Connect your X account and earn FAPS for every like, comment, retweet, or tag, \
                     including when you mention us in your own posts.",
                )
                .color(MUTED),
            );
            return;
        }

        let profile = &platform.data().profile;
        ui.label(
            RichText::new("Your X account is connected! Earn FAPS for every like, comment, retweet, or tag.")
                .color(MUTED),
        );
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add(
                egui::Image::new(platform.image_source(&profile.avatar_url))
                    .fit_to_exact_size(egui::vec2(48.0, 48.0))
                    .corner_radius(24.0),
            );
            ui.vertical(|ui| {
                ui.label(RichText::new(&profile.handle).color(GOLD).strong());
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Twitter Score:").color(MUTED));
                    ui.label(
                        RichText::new(format!("{}/1000", profile.score))
                            .color(Color32::from_rgb(255, 170, 60))
                            .strong(),
                    );
                    let info = ui.label(RichText::new(regular::INFO).color(MUTED));
                    instant_tooltip(&info, SCORE_HELP);
                });
            });
        });
    });

    if connect {
        platform.connect_account();
    }
    if disconnect {
        platform.disconnect_account();
    }
}
