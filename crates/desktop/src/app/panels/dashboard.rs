//! Central dashboard panel and its platform bindings

use std::time::Instant;

use eframe::egui;
use faps_core::stats::ChartRange;
use faps_core::ui::{render_dashboard, AccountState, DashboardPlatform};
use faps_core::{DashboardData, HeatmapDay, ShareRequest};
use tracing::{info, warn};

use crate::app::FapsDashboardApp;

impl DashboardPlatform for FapsDashboardApp {
    fn data(&self) -> &DashboardData {
        &self.data
    }

    fn heatmap(&self) -> &[HeatmapDay] {
        &self.heatmap
    }

    fn chart_range(&self) -> ChartRange {
        self.chart_range
    }

    fn set_chart_range(&mut self, range: ChartRange) {
        self.chart_range = range;
    }

    fn request_share(&mut self, request: ShareRequest) {
        self.start_share(request);
    }

    fn is_sharing(&self) -> bool {
        !self.share_receivers.is_empty()
    }

    fn open_url(&self, url: &str) {
        info!(url, "Opening link");
        if let Err(e) = open::that(url) {
            warn!("Failed to open {}: {}", url, e);
        }
    }

    fn account_state(&self) -> AccountState {
        self.account.state()
    }

    fn connect_account(&mut self) {
        if let Some(notice) = self.account.connect(Instant::now()) {
            self.notifications.push(notice);
        }
    }

    fn disconnect_account(&mut self) {
        if let Some(notice) = self.account.disconnect() {
            info!("X account disconnected");
            self.notifications.push(notice);
        }
    }

    fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

impl FapsDashboardApp {
    pub(crate) fn render_dashboard_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    render_dashboard(ui, self);
                });
        });
    }
}
