//! Main application module

mod notifications;
mod panels;
mod state;

use crate::config::Config;
use faps_core::card::CardLayout;
use faps_core::stats::{build_heatmap_at, ChartRange};
use faps_core::{
    mock_data, CardImage, DashboardData, GlyphCardRenderer, HeatmapDay, ShareError, SharePipeline,
    ShareReport, ShareRequest,
};

use eframe::egui;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

pub(crate) use notifications::Notifications;
pub(crate) use state::account::AccountConnection;

pub struct FapsDashboardApp {
    pub(crate) config: Config,
    pub(crate) data: DashboardData,
    pub(crate) heatmap: Vec<HeatmapDay>,
    pub(crate) chart_range: ChartRange,
    pub(crate) pipeline: SharePipeline,
    // One receiver per in-flight share run
    pub(crate) share_receivers: Vec<Receiver<ShareReport>>,
    pub(crate) notifications: Notifications,
    pub(crate) account: AccountConnection,
    pub(crate) started: Instant,
    // Settings window
    pub(crate) show_settings: bool,
    // Pending font size (before save button is clicked)
    pub(crate) pending_font_size: f32,
}

/// Stands in when the card fonts could not be loaded; every share falls back to text
struct UnavailableRenderer(String);

impl faps_core::share::CardRenderer for UnavailableRenderer {
    fn layout(&self, _request: &ShareRequest, _preset: faps_core::CardPreset) -> Result<CardLayout, ShareError> {
        Err(ShareError::RenderFailed(self.0.clone()))
    }

    fn rasterize(&self, _layout: &CardLayout) -> Result<CardImage, ShareError> {
        Err(ShareError::RenderFailed(self.0.clone()))
    }
}

impl FapsDashboardApp {
    pub fn new(config: Config) -> Self {
        let renderer: Arc<dyn faps_core::share::CardRenderer> = match crate::fonts::card_fonts() {
            Ok(fonts) => Arc::new(GlyphCardRenderer::new(fonts)),
            Err(e) => {
                error!("Achievement cards disabled: {}", e);
                Arc::new(UnavailableRenderer(e.to_string()))
            }
        };
        let pipeline = SharePipeline::new(
            renderer,
            Arc::new(crate::clipboard::SystemClipboard::new()),
            Arc::new(crate::share_intent::BrowserShareIntent),
            config.share_settings(),
        );

        let data = mock_data::dashboard();
        let heatmap = build_heatmap_at(chrono::Local::now().date_naive());
        info!(
            leaderboard = data.leaderboard.len(),
            posts = data.posts.len(),
            heatmap_days = heatmap.len(),
            "Dashboard data loaded"
        );

        Self {
            notifications: Notifications::new(config.notification_secs),
            pending_font_size: config.font_size,
            config,
            data,
            heatmap,
            chart_range: ChartRange::default(),
            pipeline,
            share_receivers: Vec::new(),
            account: AccountConnection::default(),
            started: Instant::now(),
            show_settings: false,
        }
    }
}

impl eframe::App for FapsDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.check_shares();
        self.tick_account(now);
        self.notifications.expire(now);

        // Request repaint while anything is pending or on screen
        if !self.share_receivers.is_empty() || self.account.is_connecting() || !self.notifications.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // Track window state for persistence (only when not maximized to preserve restore size)
        ctx.input(|i| {
            let maximized = i.viewport().maximized.unwrap_or(false);
            self.config.window_maximized = maximized;

            if !maximized {
                if let Some(rect) = i.viewport().inner_rect {
                    self.config.window_x = Some(rect.min.x);
                    // Compensate for title bar offset (inner_rect reports ~30px higher than actual window position)
                    self.config.window_y = Some((rect.min.y - 30.0).max(0.0));
                    self.config.window_width = Some(rect.width());
                    self.config.window_height = Some(rect.height());
                }
            }
        });

        self.render_top_panel(ctx);
        self.render_dashboard_panel(ctx);
        self.render_settings_window(ctx);
        self.notifications.render(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.config.save() {
            error!("Failed to save config on exit: {}", e);
        }
    }
}
