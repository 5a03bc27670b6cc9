//! End-to-end: mock dashboard data through badge evaluation and a share run

use std::sync::{Arc, Mutex};

use faps_core::card::CardFonts;
use faps_core::{
    evaluate_achievements, mock_data, BadgeId, ClipboardPort, GlyphCardRenderer, IntentError,
    IntentOutcome, ShareError, ShareIntentPort, ShareOutcome, SharePipeline, ShareRequest,
    ShareSettings,
};

#[derive(Default)]
struct RecordingClipboard {
    refuse_images: bool,
    images: Mutex<Vec<(u32, u32)>>,
    texts: Mutex<Vec<String>>,
}

impl ClipboardPort for RecordingClipboard {
    fn write_image(&self, image: &faps_core::CardImage) -> Result<(), ShareError> {
        if self.refuse_images {
            return Err(ShareError::CapabilityUnavailable("no image clipboard".to_string()));
        }
        self.images.lock().unwrap().push((image.width, image.height));
        Ok(())
    }

    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingIntent {
    urls: Mutex<Vec<String>>,
}

impl ShareIntentPort for RecordingIntent {
    fn open(&self, url: &str) -> Result<(), IntentError> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

fn renderer() -> Arc<GlyphCardRenderer> {
    let defs = egui::FontDefinitions::default();
    let bytes = defs.families[&egui::FontFamily::Proportional]
        .iter()
        .filter_map(|name| defs.font_data.get(name))
        .map(|data| data.font.to_vec())
        .collect();
    Arc::new(GlyphCardRenderer::new(CardFonts::from_bytes(bytes).unwrap()))
}

#[test]
fn mock_user_badges_match_their_totals() {
    let data = mock_data::dashboard();
    let badges = evaluate_achievements(data.summary.total, data.summary.streak);
    let get = |id| badges.iter().find(|b| b.id == id).unwrap();

    assert!(get(BadgeId::FirstTouch).unlocked);
    assert!(get(BadgeId::RhythmKeeper).unlocked);
    let almost = get(BadgeId::AlmostThere);
    assert!(!almost.unlocked);
    assert!((almost.progress - 0.574).abs() < 0.001);
    assert!(!get(BadgeId::FapGod).unlocked);
}

#[test]
fn leaderboard_share_carries_row_stats() {
    let data = mock_data::dashboard();
    let row = data.current_user().unwrap();
    let request = ShareRequest {
        achievement: row.share_achievement(),
        stats: row.user_stats(),
    };
    assert_eq!(request.stats.rank, Some(4));
    assert_eq!(request.stats.faps_count, 2871.70);
    assert_eq!(request.achievement, "Ranked #4 in FAPS Leaderboard!");

    let clipboard = Arc::new(RecordingClipboard::default());
    let intent = Arc::new(RecordingIntent::default());
    let pipeline = SharePipeline::new(renderer(), clipboard.clone(), intent.clone(), ShareSettings::default());
    let report = pipeline.run(&request);

    assert_eq!(report.outcome, ShareOutcome::ImageCopied);
    assert_eq!(report.intent, IntentOutcome::Opened);
    assert_eq!(*clipboard.images.lock().unwrap(), vec![(1200, 630)]);
    assert!(clipboard.texts.lock().unwrap().is_empty());

    let urls = intent.urls.lock().unwrap();
    let encoded = urls[0].split_once("?text=").unwrap().1;
    assert_eq!(
        urlencoding::decode(encoded).unwrap(),
        "Ranked #4 in FAPS Leaderboard! @Fractionai_xyz"
    );
}

#[test]
fn badge_share_falls_back_to_text_without_image_clipboard() {
    let data = mock_data::dashboard();
    let badges = evaluate_achievements(data.summary.total, data.summary.streak);
    let rhythm = badges.iter().find(|b| b.id == BadgeId::RhythmKeeper).unwrap();

    let request = ShareRequest {
        achievement: rhythm.title.clone(),
        stats: data.current_user_stats().unwrap(),
    };
    let clipboard = Arc::new(RecordingClipboard { refuse_images: true, ..Default::default() });
    let pipeline = SharePipeline::new(
        renderer(),
        clipboard.clone(),
        Arc::new(RecordingIntent::default()),
        ShareSettings::default(),
    );

    let report = pipeline.run(&request);
    assert_eq!(report.outcome, ShareOutcome::TextCopied);

    let texts = clipboard.texts.lock().unwrap();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("Rhythm Keeper"));
    assert!(texts[0].contains("FAPS Count: 2871.7"));
    assert!(texts[0].contains("FirmOrangutan3828"));
}
