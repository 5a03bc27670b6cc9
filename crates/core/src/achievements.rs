//! Badge unlock/progress evaluation
//!
//! Maps cumulative earnings and streak length to the fixed badge list.

use crate::constants::BRAND_HANDLE;
use crate::models::{Achievement, BadgeId, Requirement};

struct BadgeDef {
    id: BadgeId,
    title: &'static str,
    description: &'static str,
    requirement: Requirement,
    share_text: &'static str,
}

const BADGES: [BadgeDef; 6] = [
    BadgeDef {
        id: BadgeId::FirstTouch,
        title: "First Touch",
        description: "Earn your first 100 FAPS",
        requirement: Requirement::TotalEarnings(100.0),
        share_text: "Just had my First Touch with FAPS! 100 down, infinity to go! 🍑",
    },
    BadgeDef {
        id: BadgeId::RhythmKeeper,
        title: "Rhythm Keeper",
        description: "7-day engagement streak",
        requirement: Requirement::Streak(7),
        share_text: "Got my Rhythm Keeper badge! 7 days of non-stop FAPS action! 🔥",
    },
    // Placeholder: original-post count is not tracked yet
    BadgeDef {
        id: BadgeId::RapidFire,
        title: "Rapid Fire",
        description: "Post 30 original tweets",
        requirement: Requirement::Placeholder { progress: 0.6 },
        share_text: "Rapid Fire mode ACTIVATED! Shooting off 30+ original tweets non-stop! 🔥",
    },
    BadgeDef {
        id: BadgeId::AlmostThere,
        title: "Almost There",
        description: "Earn 5,000 FAPS",
        requirement: Requirement::TotalEarnings(5000.0),
        share_text: "Almost There! Halfway to the top with 5K FAPS! ⚡",
    },
    // Placeholder: like totals are not tracked yet
    BadgeDef {
        id: BadgeId::StrokeOfGenius,
        title: "Stroke of Genius",
        description: "Get 500+ total likes",
        requirement: Requirement::Placeholder { progress: 0.4 },
        share_text: "Stroke of Genius unlocked! 500+ people loved my brilliant performance! 🧠",
    },
    BadgeDef {
        id: BadgeId::FapGod,
        title: "FAP God",
        description: "Earn 10,000+ FAPS",
        requirement: Requirement::TotalEarnings(10000.0),
        share_text: "FAP God ascended! 10K+ FAPS of pure domination! 👑",
    },
];

/// Evaluate every badge against the current totals
pub fn evaluate_achievements(total_earnings: f64, streak: u32) -> Vec<Achievement> {
    BADGES
        .iter()
        .map(|def| {
            let (unlocked, progress) = evaluate_requirement(def.requirement, total_earnings, streak);
            Achievement {
                id: def.id,
                title: def.title.to_string(),
                description: def.description.to_string(),
                requirement: def.requirement,
                unlocked,
                progress,
                share_text: format!("{} {}", def.share_text, BRAND_HANDLE),
            }
        })
        .collect()
}

/// Returns (unlocked, progress) for one requirement
pub fn evaluate_requirement(requirement: Requirement, total_earnings: f64, streak: u32) -> (bool, f64) {
    match requirement {
        Requirement::TotalEarnings(threshold) => (
            total_earnings >= threshold,
            clamp_progress(total_earnings, threshold),
        ),
        Requirement::Streak(days) => (
            streak >= days,
            clamp_progress(f64::from(streak), f64::from(days)),
        ),
        Requirement::Placeholder { progress } => (false, progress.clamp(0.0, 1.0)),
    }
}

/// `value / threshold` clamped to [0, 1]; NaN and non-positive thresholds give 0
pub fn clamp_progress(value: f64, threshold: f64) -> f64 {
    if threshold.is_nan() || threshold <= 0.0 || value.is_nan() {
        return 0.0;
    }
    (value / threshold).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge(list: &[Achievement], id: BadgeId) -> &Achievement {
        list.iter().find(|a| a.id == id).expect("badge missing")
    }

    #[test]
    fn earnings_thresholds_unlock_exactly_at_boundary() {
        for (id, threshold) in [
            (BadgeId::FirstTouch, 100.0),
            (BadgeId::AlmostThere, 5000.0),
            (BadgeId::FapGod, 10000.0),
        ] {
            let below = evaluate_achievements(threshold - 0.01, 0);
            let at = evaluate_achievements(threshold, 0);
            let above = evaluate_achievements(threshold + 1.0, 0);
            assert!(!badge(&below, id).unlocked, "{id:?} unlocked below {threshold}");
            assert!(badge(&at, id).unlocked, "{id:?} locked at {threshold}");
            assert!(badge(&above, id).unlocked, "{id:?} locked above {threshold}");
        }
    }

    #[test]
    fn streak_unlocks_at_seven_days() {
        assert!(!badge(&evaluate_achievements(0.0, 6), BadgeId::RhythmKeeper).unlocked);
        assert!(badge(&evaluate_achievements(0.0, 7), BadgeId::RhythmKeeper).unlocked);
        assert!(badge(&evaluate_achievements(0.0, 30), BadgeId::RhythmKeeper).unlocked);
    }

    #[test]
    fn progress_never_exceeds_one() {
        let list = evaluate_achievements(50000.0, 100);
        assert_eq!(badge(&list, BadgeId::FapGod).progress, 1.0);
        assert_eq!(badge(&list, BadgeId::RhythmKeeper).progress, 1.0);
        assert!(list.iter().all(|a| (0.0..=1.0).contains(&a.progress)));
    }

    #[test]
    fn negative_and_nan_totals_give_zero_progress() {
        let list = evaluate_achievements(-50.0, 0);
        assert_eq!(badge(&list, BadgeId::FirstTouch).progress, 0.0);
        let list = evaluate_achievements(f64::NAN, 0);
        assert_eq!(badge(&list, BadgeId::FirstTouch).progress, 0.0);
        assert!(!badge(&list, BadgeId::FirstTouch).unlocked);
    }

    #[test]
    fn placeholders_stay_locked_with_fixed_progress() {
        let list = evaluate_achievements(1_000_000.0, 365);
        let rapid = badge(&list, BadgeId::RapidFire);
        let genius = badge(&list, BadgeId::StrokeOfGenius);
        assert!(!rapid.unlocked && !genius.unlocked);
        assert_eq!(rapid.progress, 0.6);
        assert_eq!(genius.progress, 0.4);
    }

    #[test]
    fn progress_label_only_for_locked_badges() {
        let list = evaluate_achievements(2871.70, 7);
        assert_eq!(badge(&list, BadgeId::AlmostThere).progress_label().as_deref(), Some("57% complete"));
        assert_eq!(badge(&list, BadgeId::FapGod).progress_label().as_deref(), Some("29% complete"));
        assert_eq!(badge(&list, BadgeId::FirstTouch).progress_label(), None);

        let empty = evaluate_achievements(0.0, 0);
        assert_eq!(badge(&empty, BadgeId::FirstTouch).progress_label(), None);
    }

    #[test]
    fn share_text_carries_brand_handle() {
        let list = evaluate_achievements(0.0, 0);
        assert_eq!(list.len(), BadgeId::ALL.len());
        assert!(list.iter().all(|a| a.share_text.ends_with(BRAND_HANDLE)));
    }
}
