//! Transient toast notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use eframe::egui::{self, Color32, RichText};
use faps_core::ui::{GOLD, MUTED, NEGATIVE, POSITIVE};
use faps_core::{Notice, NoticeLevel};

use crate::config::default_notification_secs;

/// Oldest notices are dropped past this count
const MAX_VISIBLE: usize = 4;

struct Toast {
    notice: Notice,
    expires: Instant,
}

pub(crate) struct Notifications {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl Notifications {
    pub(crate) fn new(ttl_secs: f32) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl: ttl_from_secs(ttl_secs),
        }
    }

    pub(crate) fn set_ttl(&mut self, ttl_secs: f32) {
        self.ttl = ttl_from_secs(ttl_secs);
    }

    pub(crate) fn push(&mut self, notice: Notice) {
        self.push_at(notice, Instant::now());
    }

    fn push_at(&mut self, notice: Notice, now: Instant) {
        self.toasts.push_back(Toast { notice, expires: now + self.ttl });
        while self.toasts.len() > MAX_VISIBLE {
            self.toasts.pop_front();
        }
    }

    pub(crate) fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires > now);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.toasts.len()
    }

    pub(crate) fn render(&self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("faps_notifications"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    let accent = level_color(toast.notice.level);
                    egui::Frame::popup(ui.style())
                        .stroke(egui::Stroke::new(1.0, accent))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.label(RichText::new(&toast.notice.title).strong().color(accent));
                            if let Some(message) = &toast.notice.message {
                                ui.label(RichText::new(message).color(MUTED));
                            }
                        });
                    ui.add_space(6.0);
                }
            });
    }
}

/// Clamp to 1..=30 s; NaN or infinite values fall back to the default
fn ttl_from_secs(ttl_secs: f32) -> Duration {
    let secs = if ttl_secs.is_finite() {
        ttl_secs
    } else {
        default_notification_secs()
    };
    Duration::from_secs_f32(secs.clamp(1.0, 30.0))
}

fn level_color(level: NoticeLevel) -> Color32 {
    match level {
        NoticeLevel::Success => POSITIVE,
        NoticeLevel::Info => GOLD,
        NoticeLevel::Error => NEGATIVE,
    }
}
