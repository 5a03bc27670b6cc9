//! Shared dashboard panels
//!
//! Pure egui render functions over [`DashboardData`]. Anything platform
//! specific (sharing, opening links, image loading) goes through
//! [`DashboardPlatform`].

mod account;
mod activity_feed;
mod badges;
mod earnings_chart;
mod heatmap;
mod leaderboard;
mod stat_cards;
mod top_posts;

pub use account::*;
pub use activity_feed::*;
pub use badges::*;
pub use earnings_chart::*;
pub use heatmap::*;
pub use leaderboard::*;
pub use stat_cards::*;
pub use top_posts::*;

use egui::containers::Popup;
use egui::{Color32, RectAlign, Response, Ui};

use crate::models::{DashboardData, HeatmapDay};
use crate::share::ShareRequest;
use crate::stats::ChartRange;

pub const GOLD: Color32 = Color32::from_rgb(255, 215, 0);
pub const POSITIVE: Color32 = Color32::from_rgb(80, 200, 120);
pub const NEGATIVE: Color32 = Color32::from_rgb(230, 90, 90);
pub const MUTED: Color32 = Color32::from_rgb(150, 150, 160);
pub const CARD_FILL: Color32 = Color32::from_rgb(24, 24, 32);

/// Platform-specific operations needed by the dashboard panels
pub trait DashboardPlatform {
    fn data(&self) -> &DashboardData;

    /// Heatmap days, oldest first
    fn heatmap(&self) -> &[HeatmapDay];

    fn chart_range(&self) -> ChartRange;

    fn set_chart_range(&mut self, range: ChartRange);

    /// Start a share run in the background
    fn request_share(&mut self, request: ShareRequest);

    /// Whether a share run is still in flight
    fn is_sharing(&self) -> bool {
        false
    }

    /// Open an external link
    fn open_url(&self, url: &str);

    /// Resolve a remote avatar or media URL to an ImageSource
    fn image_source(&self, url: &str) -> egui::ImageSource<'static> {
        egui::ImageSource::Uri(url.to_string().into())
    }

    fn account_state(&self) -> AccountState;

    fn connect_account(&mut self);

    fn disconnect_account(&mut self);

    /// Seconds since the dashboard was first shown, drives the count-up
    fn elapsed_secs(&self) -> f64;
}

/// Render every panel, top to bottom
pub fn render_dashboard<P: DashboardPlatform>(ui: &mut Ui, platform: &mut P) {
    render_stat_cards(ui, platform);
    ui.add_space(16.0);

    ui.columns(2, |cols| {
        render_earnings_chart(&mut cols[0], platform);
        render_account_card(&mut cols[1], platform);
    });
    ui.add_space(16.0);

    render_badges(ui, platform);
    ui.add_space(16.0);

    ui.columns(2, |cols| {
        render_activity_feed(&mut cols[0], platform);
        render_leaderboard(&mut cols[1], platform);
    });
    ui.add_space(16.0);

    render_heatmap(ui, platform);
    ui.add_space(16.0);

    render_top_posts(ui, platform);
}

/// Rounded panel background used by every card
pub(crate) fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(CARD_FILL)
        .corner_radius(8.0)
        .inner_margin(12.0)
        .stroke(egui::Stroke::new(1.0, Color32::from_rgb(40, 40, 52)))
}

/// Show a tooltip immediately (no delay)
pub(crate) fn instant_tooltip(response: &Response, text: impl Into<String>) {
    if response.hovered() {
        let text = text.into();
        Popup::from_response(response)
            .align(RectAlign::TOP)
            .gap(4.0)
            .show(|ui| {
                ui.label(&text);
            });
    }
}
