//! Dashboard data types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Achievements
// ============================================================================

/// Identifier of a dashboard badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeId {
    FirstTouch,
    RhythmKeeper,
    RapidFire,
    AlmostThere,
    StrokeOfGenius,
    FapGod,
}

impl BadgeId {
    pub const ALL: [BadgeId; 6] = [
        BadgeId::FirstTouch,
        BadgeId::RhythmKeeper,
        BadgeId::RapidFire,
        BadgeId::AlmostThere,
        BadgeId::StrokeOfGenius,
        BadgeId::FapGod,
    ];
}

/// What a badge measures. Placeholder badges have no backing metric yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Requirement {
    TotalEarnings(f64),
    Streak(u32),
    Placeholder { progress: f64 },
}

/// A badge view-state, recomputed on every render pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: BadgeId,
    pub title: String,
    pub description: String,
    pub requirement: Requirement,
    pub unlocked: bool,
    /// Fraction in [0, 1]
    pub progress: f64,
    pub share_text: String,
}

impl Achievement {
    /// "57% complete" for locked badges with some progress
    pub fn progress_label(&self) -> Option<String> {
        if self.unlocked || self.progress <= 0.0 {
            return None;
        }
        Some(format!("{}% complete", (self.progress * 100.0).round() as u32))
    }
}

// ============================================================================
// Sharing
// ============================================================================

/// Stats attached to a share, supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub rank: Option<u32>,
    pub faps_count: f64,
    pub username: String,
}

impl UserStats {
    pub fn new(rank: Option<u32>, faps_count: f64, username: impl Into<String>) -> Self {
        Self {
            rank: rank.filter(|r| *r > 0),
            faps_count,
            username: username.into(),
        }
    }
}

// ============================================================================
// Feed, posts, leaderboard
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Like,
    Retweet,
    Comment,
    Mention,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    pub handle: String,
    pub avatar_url: String,
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagements {
    pub likes: u64,
    pub comments: u64,
    pub retweets: u64,
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPost {
    pub author: PostAuthor,
    pub content: String,
    pub media_url: Option<String>,
    pub tweet_url: String,
    pub engagements: Engagements,
    pub timestamp_label: String,
    pub is_top: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub username: String,
    pub faps: f64,
    pub avatar: String,
    pub is_current_user: bool,
}

impl LeaderboardRow {
    pub fn user_stats(&self) -> UserStats {
        UserStats::new(Some(self.rank), self.faps, self.username.clone())
    }

    /// Achievement line shared from the leaderboard
    pub fn share_achievement(&self) -> String {
        format!("Ranked #{} in FAPS Leaderboard!", self.rank)
    }
}

// ============================================================================
// Earnings
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarningsSummary {
    pub total: f64,
    pub daily: f64,
    pub previous_daily: f64,
    pub weekly: f64,
    pub previous_weekly: f64,
    pub rank: u32,
    pub streak: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarningsPoint {
    pub date: NaiveDate,
    pub earnings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapDay {
    pub date: NaiveDate,
    /// 0 (none) to 4 (most)
    pub intensity: u8,
    pub faps: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub handle: String,
    pub avatar_url: String,
    /// Engagement score, 1 to 1000
    pub score: u32,
}

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub summary: EarningsSummary,
    pub chart: Vec<EarningsPoint>,
    pub sparkline: Vec<f64>,
    pub activities: Vec<ActivityEntry>,
    pub posts: Vec<TopPost>,
    pub leaderboard: Vec<LeaderboardRow>,
    pub profile: AccountProfile,
}

impl DashboardData {
    pub fn current_user(&self) -> Option<&LeaderboardRow> {
        self.leaderboard.iter().find(|row| row.is_current_user)
    }

    /// Stats used when sharing a badge
    pub fn current_user_stats(&self) -> Option<UserStats> {
        self.current_user().map(LeaderboardRow::user_stats)
    }
}
