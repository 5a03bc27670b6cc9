//! Pure helpers behind the dashboard panels

use std::borrow::Cow;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::{FAPS_PER_INTENSITY, HEATMAP_WEEKS};
use crate::models::{EarningsPoint, HeatmapDay, TopPost};

// ============================================================================
// Labels and number formatting
// ============================================================================

/// "+0.0% vs last day"; a zero baseline reads as no change
pub fn change_label(current: f64, previous: f64, period: &str) -> String {
    let pct = if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous * 100.0
    };
    format!("{:+.1}% vs last {}", pct, period)
}

/// FAPS amount with at most two decimals and no trailing zeros
pub fn format_faps(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// 2100 -> "2,100"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn actions_label(count: usize) -> String {
    if count == 1 {
        "1 action".to_string()
    } else {
        format!("{} actions", count)
    }
}

/// Cut a post body to `max_chars` characters, appending "..."
pub fn truncate_post(content: &str, max_chars: usize) -> Cow<'_, str> {
    match content.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => Cow::Owned(format!("{}...", &content[..byte_idx])),
        None => Cow::Borrowed(content),
    }
}

/// Ease-out count-up from 0 to `target` over `duration` seconds
pub fn count_up(target: f64, elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 || elapsed >= duration {
        return target;
    }
    let t = (elapsed / duration).max(0.0);
    target * (1.0 - (1.0 - t).powi(3))
}

// ============================================================================
// Charts
// ============================================================================

/// Polyline for a small inline chart, normalised between min and max.
/// A flat series is drawn along the bottom edge.
pub fn sparkline_points(data: &[f64], width: f32, height: f32, padding: f32) -> Vec<[f32; 2]> {
    if data.len() < 2 {
        return Vec::new();
    }

    let chart_width = width - padding * 2.0;
    let chart_height = height - padding * 2.0;
    let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    let last = (data.len() - 1) as f32;

    data.iter()
        .enumerate()
        .map(|(i, value)| {
            let x = padding + (i as f32 / last) * chart_width;
            let y = padding + chart_height - ((value - min) / range) as f32 * chart_height;
            [x, y]
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartRange {
    Week,
    #[default]
    Month,
    Quarter,
}

impl ChartRange {
    pub const ALL: [ChartRange; 3] = [ChartRange::Week, ChartRange::Month, ChartRange::Quarter];

    pub fn days(self) -> i64 {
        match self {
            ChartRange::Week => 7,
            ChartRange::Month => 30,
            ChartRange::Quarter => 90,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartRange::Week => "7D",
            ChartRange::Month => "30D",
            ChartRange::Quarter => "90D",
        }
    }
}

/// Points within `range` days of the most recent point
pub fn chart_window(points: &[EarningsPoint], range: ChartRange) -> &[EarningsPoint] {
    let Some(latest) = points.iter().map(|p| p.date).max() else {
        return points;
    };
    let cutoff = latest - Duration::days(range.days());
    let start = points.iter().position(|p| p.date > cutoff).unwrap_or(points.len());
    &points[start..]
}

// ============================================================================
// Posts
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngagementTotals {
    pub likes: u64,
    pub reposts: u64,
    pub comments: u64,
    pub views: u64,
}

pub fn post_totals(posts: &[TopPost]) -> EngagementTotals {
    posts.iter().fold(EngagementTotals::default(), |acc, post| EngagementTotals {
        likes: acc.likes.saturating_add(post.engagements.likes),
        reposts: acc.reposts.saturating_add(post.engagements.retweets),
        comments: acc.comments.saturating_add(post.engagements.comments),
        views: acc.views.saturating_add(post.engagements.views),
    })
}

// ============================================================================
// Heatmap
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapSummary {
    pub active_days: usize,
    pub total_faps: f64,
}

/// Mock engagement for the twelve weeks ending `today` (oldest first).
/// Roughly 70% of days are active; weekends stay light.
pub fn build_heatmap_at(today: NaiveDate) -> Vec<HeatmapDay> {
    let days = HEATMAP_WEEKS * 7;
    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset as i64);
            let intensity = mock_intensity(date);
            HeatmapDay {
                date,
                intensity,
                faps: f64::from(intensity) * FAPS_PER_INTENSITY,
            }
        })
        .collect()
}

fn mock_intensity(date: NaiveDate) -> u8 {
    let seed = date.num_days_from_ce() as u64;
    let hash = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 29;
    if hash % 100 < 30 {
        return 0;
    }
    let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
    let levels = if weekend { 2 } else { 4 };
    1 + ((hash / 100) % levels) as u8
}

pub fn summarize_heatmap(days: &[HeatmapDay]) -> HeatmapSummary {
    HeatmapSummary {
        active_days: days.iter().filter(|d| d.intensity > 0).count(),
        total_faps: days.iter().map(|d| d.faps).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    #[test]
    fn change_label_signs_and_zero_baseline() {
        assert_eq!(change_label(0.0, 0.0, "day"), "+0.0% vs last day");
        assert_eq!(change_label(0.0, 300.0, "week"), "-100.0% vs last week");
        assert_eq!(change_label(150.0, 100.0, "week"), "+50.0% vs last week");
    }

    #[test]
    fn faps_formatting_trims_zeros() {
        assert_eq!(format_faps(2871.70), "2871.7");
        assert_eq!(format_faps(5420.0), "5420");
        assert_eq!(format_faps(0.126), "0.13");
        assert_eq!(format_thousands(2100), "2,100");
        assert_eq!(format_thousands(945), "945");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn truncate_post_is_char_safe() {
        let short = "gm";
        assert!(matches!(truncate_post(short, 150), Cow::Borrowed("gm")));

        let long = "🔥".repeat(200);
        let cut = truncate_post(&long, 150);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 153);
    }

    #[test]
    fn sparkline_normalises_between_min_and_max() {
        let points = sparkline_points(&[0.0, 50.0, 100.0], 64.0, 32.0, 2.0);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], [2.0, 30.0]);
        assert_eq!(points[1], [32.0, 16.0]);
        assert_eq!(points[2], [62.0, 2.0]);
    }

    #[test]
    fn sparkline_flat_and_short_series() {
        assert!(sparkline_points(&[5.0], 64.0, 32.0, 2.0).is_empty());
        let flat = sparkline_points(&[3.0, 3.0, 3.0], 64.0, 32.0, 2.0);
        assert!(flat.iter().all(|p| p[1] == 30.0));
    }

    #[test]
    fn chart_window_anchors_on_latest_point() {
        let chart = mock_data::dashboard().chart;
        assert_eq!(chart_window(&chart, ChartRange::Week).len(), 4);
        assert_eq!(chart_window(&chart, ChartRange::Month).len(), chart.len());
        assert_eq!(chart_window(&chart, ChartRange::Quarter).len(), chart.len());
        assert!(chart_window(&[], ChartRange::Week).is_empty());
    }

    #[test]
    fn post_totals_sum_mock_posts() {
        let totals = post_totals(&mock_data::dashboard().posts);
        assert_eq!(totals.likes, 259);
        assert_eq!(totals.reposts, 73);
        assert_eq!(totals.comments, 68);
        assert_eq!(totals.views, 10935);
    }

    #[test]
    fn heatmap_covers_twelve_weeks_deterministically() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let days = build_heatmap_at(today);
        assert_eq!(days.len(), 84);
        assert_eq!(days.last().map(|d| d.date), Some(today));
        assert_eq!(days, build_heatmap_at(today));

        for day in &days {
            assert!(day.intensity <= 4);
            assert_eq!(day.faps, f64::from(day.intensity) * 12.5);
            if matches!(day.date.weekday(), Weekday::Sat | Weekday::Sun) {
                assert!(day.intensity <= 2);
            }
        }

        let summary = summarize_heatmap(&days);
        assert!(summary.active_days > 0 && summary.active_days < 84);
        assert_eq!(summary.total_faps, days.iter().map(|d| d.faps).sum::<f64>());
    }

    #[test]
    fn count_up_eases_to_target() {
        assert_eq!(count_up(2871.7, 0.0, 1.5), 0.0);
        assert_eq!(count_up(2871.7, 1.5, 1.5), 2871.7);
        assert_eq!(count_up(2871.7, 9.0, 1.5), 2871.7);
        let half = count_up(100.0, 0.75, 1.5);
        assert!(half > 50.0 && half < 100.0);
        assert_eq!(count_up(42.0, 0.1, 0.0), 42.0);
    }

    #[test]
    fn actions_label_pluralises() {
        assert_eq!(actions_label(1), "1 action");
        assert_eq!(actions_label(6), "6 actions");
    }
}
