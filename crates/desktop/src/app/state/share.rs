//! Background share runs

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use faps_core::{Notice, NoticeLevel, SharePipeline, ShareReport, ShareRequest};
use tracing::{error, info};

use crate::app::FapsDashboardApp;

/// Run `request` on its own thread; the report arrives on the returned channel
pub(crate) fn spawn_share(pipeline: SharePipeline, request: ShareRequest) -> Receiver<ShareReport> {
    let (tx, rx) = channel();
    thread::spawn(move || {
        let report = pipeline.run(&request);
        let _ = tx.send(report);
    });
    rx
}

impl FapsDashboardApp {
    pub(crate) fn start_share(&mut self, request: ShareRequest) {
        info!(achievement = %request.achievement, "Share requested");
        let pipeline = self.pipeline.clone().with_settings(self.config.share_settings());
        self.share_receivers.push(spawn_share(pipeline, request));
    }

    /// Collect finished share runs (called from update loop)
    pub(crate) fn check_shares(&mut self) {
        let mut finished = Vec::new();
        self.share_receivers.retain(|receiver| match receiver.try_recv() {
            Ok(report) => {
                finished.push(report.notice());
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => {
                error!("Share thread ended without a report");
                finished.push(Notice {
                    level: NoticeLevel::Error,
                    title: "Failed to copy".to_string(),
                    message: None,
                });
                false
            }
        });
        for notice in finished {
            self.notifications.push(notice);
        }
    }
}
