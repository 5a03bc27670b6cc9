//! Top posts with engagement counts

use egui::{self, Color32, RichText, Ui};
use egui_phosphor::regular;

use super::{card_frame, DashboardPlatform, GOLD, MUTED};
use crate::constants::POST_PREVIEW_CHARS;
use crate::stats::{format_thousands, post_totals, truncate_post};

const VERIFIED: Color32 = Color32::from_rgb(29, 155, 240);

pub fn render_top_posts<P: DashboardPlatform>(ui: &mut Ui, platform: &P) {
    let posts = &platform.data().posts;
    let totals = post_totals(posts);

    card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.heading(format!("{} Top Posts", regular::TWITTER_LOGO));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!(
                        "{} {}   {} {}   {} {}   {} {}",
                        regular::HEART,
                        format_thousands(totals.likes),
                        regular::REPEAT,
                        format_thousands(totals.reposts),
                        regular::CHAT_CIRCLE,
                        format_thousands(totals.comments),
                        regular::EYE,
                        format_thousands(totals.views),
                    ))
                    .color(MUTED),
                );
            });
        });
        ui.separator();

        let mut top_rank = 0;
        for (i, post) in posts.iter().enumerate() {
            if i > 0 {
                ui.separator();
            }
            ui.horizontal(|ui| {
                ui.add(
                    egui::Image::new(platform.image_source(&post.author.avatar_url))
                        .fit_to_exact_size(egui::vec2(36.0, 36.0))
                        .corner_radius(18.0),
                );
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&post.author.name).strong());
                        if post.author.verified {
                            ui.label(RichText::new(regular::SEAL_CHECK).color(VERIFIED));
                        }
                        ui.label(RichText::new(&post.author.handle).color(MUTED));
                        ui.label(RichText::new(format!("· {}", post.timestamp_label)).color(MUTED));
                        if post.is_top {
                            top_rank += 1;
                            ui.label(RichText::new(format!("🏆 Top #{}", top_rank)).color(GOLD).small());
                        }
                    });

                    if !post.content.is_empty() {
                        ui.label(truncate_post(&post.content, POST_PREVIEW_CHARS).as_ref());
                    }
                    if let Some(media) = &post.media_url {
                        ui.add(
                            egui::Image::new(platform.image_source(media))
                                .max_width(320.0)
                                .corner_radius(6.0),
                        );
                    }

                    ui.horizontal(|ui| {
                        let e = post.engagements;
                        for (glyph, count) in [
                            (regular::HEART, e.likes),
                            (regular::REPEAT, e.retweets),
                            (regular::CHAT_CIRCLE, e.comments),
                            (regular::EYE, e.views),
                        ] {
                            ui.label(RichText::new(format!("{} {}", glyph, format_thousands(count))).color(MUTED));
                        }
                        if ui.link(format!("View on X {}", regular::ARROW_SQUARE_OUT)).clicked() {
                            platform.open_url(&post.tweet_url);
                        }
                    });
                });
            });
        }
    });
}
