//! FAPS dashboard core
//!
//! Platform-agnostic models, the badge evaluator, dashboard helpers and the
//! achievement share pipeline. Shared egui panels live behind the `ui` feature.

pub mod achievements;
pub mod card;
pub mod constants;
pub mod mock_data;
pub mod models;
pub mod share;
pub mod stats;

#[cfg(feature = "ui")]
pub mod ui;

pub use achievements::{clamp_progress, evaluate_achievements};
pub use card::{CardFonts, CardImage, CardLayout, CardPreset, GlyphCardRenderer};
pub use models::*;
pub use share::{
    ClipboardPort, IntentError, IntentOutcome, Notice, NoticeLevel, ShareError, ShareIntentPort,
    ShareNetwork, ShareOutcome, SharePipeline, ShareReport, ShareRequest, ShareSettings,
};
