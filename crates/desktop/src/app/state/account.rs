//! Local mock of the X account connection

use std::time::{Duration, Instant};

use faps_core::ui::AccountState;
use faps_core::{Notice, NoticeLevel};
use tracing::info;

use crate::app::FapsDashboardApp;

/// Simulated handshake time before the account reads as connected
pub(crate) const CONNECT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Default)]
pub(crate) struct AccountConnection {
    state: AccountState,
    connecting_since: Option<Instant>,
}

impl AccountConnection {
    pub(crate) fn state(&self) -> AccountState {
        self.state
    }

    pub(crate) fn is_connecting(&self) -> bool {
        self.state == AccountState::Connecting
    }

    /// Begin connecting. Ignored unless currently disconnected.
    pub(crate) fn connect(&mut self, now: Instant) -> Option<Notice> {
        if self.state != AccountState::Disconnected {
            return None;
        }
        self.state = AccountState::Connecting;
        self.connecting_since = Some(now);
        Some(Notice {
            level: NoticeLevel::Info,
            title: "Connecting to X...".to_string(),
            message: None,
        })
    }

    pub(crate) fn disconnect(&mut self) -> Option<Notice> {
        if self.state == AccountState::Disconnected {
            return None;
        }
        self.state = AccountState::Disconnected;
        self.connecting_since = None;
        Some(Notice {
            level: NoticeLevel::Info,
            title: "Account disconnected".to_string(),
            message: None,
        })
    }

    /// Finish a pending connection once the delay has passed
    pub(crate) fn tick(&mut self, now: Instant) -> Option<Notice> {
        let since = self.connecting_since?;
        if now.saturating_duration_since(since) < CONNECT_DELAY {
            return None;
        }
        self.state = AccountState::Connected;
        self.connecting_since = None;
        Some(Notice {
            level: NoticeLevel::Success,
            title: "Successfully connected!".to_string(),
            message: Some("Your X account is now linked".to_string()),
        })
    }
}

impl FapsDashboardApp {
    pub(crate) fn tick_account(&mut self, now: Instant) {
        if let Some(notice) = self.account.tick(now) {
            info!("X account connected");
            self.notifications.push(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connects_after_delay() {
        let start = Instant::now();
        let mut account = AccountConnection::default();
        assert_eq!(account.state(), AccountState::Disconnected);

        let notice = account.connect(start).unwrap();
        assert_eq!(notice.title, "Connecting to X...");
        assert!(account.is_connecting());

        assert!(account.tick(start + Duration::from_millis(500)).is_none());
        assert_eq!(account.state(), AccountState::Connecting);

        let done = account.tick(start + CONNECT_DELAY).unwrap();
        assert_eq!(done.level, NoticeLevel::Success);
        assert_eq!(account.state(), AccountState::Connected);
        assert!(account.tick(start + CONNECT_DELAY * 2).is_none());
    }

    #[test]
    fn connect_twice_is_ignored() {
        let start = Instant::now();
        let mut account = AccountConnection::default();
        assert!(account.connect(start).is_some());
        assert!(account.connect(start).is_none());
    }

    #[test]
    fn disconnect_cancels_pending_connection() {
        let start = Instant::now();
        let mut account = AccountConnection::default();
        assert!(account.disconnect().is_none());

        account.connect(start);
        assert_eq!(account.disconnect().unwrap().title, "Account disconnected");
        assert!(account.tick(start + CONNECT_DELAY).is_none());
        assert_eq!(account.state(), AccountState::Disconnected);
    }
}
