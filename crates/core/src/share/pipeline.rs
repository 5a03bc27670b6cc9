//! Sequential share run with clipboard fallback

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::text::{compose_url, short_text, summary_text, ShareNetwork};
use super::{CardRenderer, ClipboardPort, IntentError, ShareError, ShareIntentPort};
use crate::card::{CardImage, CardPreset};
use crate::models::UserStats;

/// One share invocation's input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareRequest {
    pub achievement: String,
    pub stats: UserStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareSettings {
    pub network: ShareNetwork,
    pub card_preset: CardPreset,
    /// When false the image step is reported unavailable and text is copied
    pub copy_image: bool,
    pub open_intent: bool,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            network: ShareNetwork::X,
            card_preset: CardPreset::OpenGraph,
            copy_image: true,
            open_intent: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShareStage {
    Idle,
    Rendering,
    Rasterizing,
    ClipboardImage,
    ClipboardText,
    OpenShareIntent,
    Done,
    DoneDegraded,
    Failed,
}

/// What ended up on the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShareOutcome {
    ImageCopied,
    TextCopied,
    NothingCopied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentOutcome {
    Opened,
    Failed,
    Skipped,
}

/// Result of a share run. Errors are recorded, never raised.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareReport {
    pub outcome: ShareOutcome,
    pub intent: IntentOutcome,
    /// Stages entered, in order
    pub stages: Vec<ShareStage>,
    pub errors: Vec<ShareError>,
    pub intent_error: Option<IntentError>,
    /// Compose URL, when one was built
    pub share_url: Option<String>,
}

impl ShareReport {
    /// Terminal stage of the clipboard path
    pub fn final_stage(&self) -> ShareStage {
        match self.outcome {
            ShareOutcome::ImageCopied => ShareStage::Done,
            ShareOutcome::TextCopied => ShareStage::DoneDegraded,
            ShareOutcome::NothingCopied => ShareStage::Failed,
        }
    }

    pub fn notice(&self) -> Notice {
        let (level, title) = match self.outcome {
            ShareOutcome::ImageCopied => (NoticeLevel::Success, "Achievement image copied to clipboard!"),
            ShareOutcome::TextCopied => (NoticeLevel::Info, "Text copied to clipboard! Image copy failed."),
            ShareOutcome::NothingCopied => (NoticeLevel::Error, "Failed to copy"),
        };
        let message = match self.intent {
            IntentOutcome::Opened => Some("Opening the share window...".to_string()),
            IntentOutcome::Failed => Some("Could not open the share window".to_string()),
            IntentOutcome::Skipped => None,
        };
        Notice { level, title: title.to_string(), message }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// User-facing summary of a share run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: Option<String>,
}

/// Runs share requests against injected platform ports.
/// Cheap to clone; each `run` is independent of the last.
#[derive(Clone)]
pub struct SharePipeline {
    renderer: Arc<dyn CardRenderer>,
    clipboard: Arc<dyn ClipboardPort>,
    intent: Arc<dyn ShareIntentPort>,
    settings: ShareSettings,
}

impl SharePipeline {
    pub fn new(
        renderer: Arc<dyn CardRenderer>,
        clipboard: Arc<dyn ClipboardPort>,
        intent: Arc<dyn ShareIntentPort>,
        settings: ShareSettings,
    ) -> Self {
        Self { renderer, clipboard, intent, settings }
    }

    pub fn with_settings(mut self, settings: ShareSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn run(&self, request: &ShareRequest) -> ShareReport {
        info!(achievement = %request.achievement, network = ?self.settings.network, "Share started");

        let mut stages = vec![ShareStage::Idle];
        let mut errors = Vec::new();

        let outcome = match self.copy_image(request, &mut stages) {
            Ok(()) => ShareOutcome::ImageCopied,
            Err(e) => {
                warn!("Image share failed, falling back to text: {}", e);
                errors.push(e);
                stages.push(ShareStage::ClipboardText);
                match self.clipboard.write_text(&summary_text(request)) {
                    Ok(()) => ShareOutcome::TextCopied,
                    Err(e) => {
                        warn!("Text clipboard write failed: {}", e);
                        errors.push(e);
                        ShareOutcome::NothingCopied
                    }
                }
            }
        };

        let (intent, intent_error, share_url) = if self.settings.open_intent {
            stages.push(ShareStage::OpenShareIntent);
            let text = match outcome {
                ShareOutcome::TextCopied => summary_text(request),
                ShareOutcome::ImageCopied | ShareOutcome::NothingCopied => short_text(request),
            };
            let url = compose_url(self.settings.network, &text);
            match self.intent.open(&url) {
                Ok(()) => (IntentOutcome::Opened, None, Some(url)),
                Err(e) => {
                    warn!("{}", e);
                    (IntentOutcome::Failed, Some(e), Some(url))
                }
            }
        } else {
            (IntentOutcome::Skipped, None, None)
        };

        let report = ShareReport { outcome, intent, stages, errors, intent_error, share_url };
        report_stages(&report);
        report
    }

    /// Steps 1 to 3: render, rasterize, image clipboard
    fn copy_image(&self, request: &ShareRequest, stages: &mut Vec<ShareStage>) -> Result<(), ShareError> {
        stages.push(ShareStage::Rendering);
        let layout = self.renderer.layout(request, self.settings.card_preset)?;

        stages.push(ShareStage::Rasterizing);
        let image: CardImage = self.renderer.rasterize(&layout)?;
        debug!(width = image.width, height = image.height, png_bytes = image.png.len(), "Card rasterised");

        stages.push(ShareStage::ClipboardImage);
        if !self.settings.copy_image {
            return Err(ShareError::CapabilityUnavailable("image copy disabled in settings".to_string()));
        }
        self.clipboard.write_image(&image)
    }
}

fn report_stages(report: &ShareReport) {
    info!(
        outcome = ?report.outcome,
        intent = ?report.intent,
        errors = report.errors.len(),
        "Share finished at {:?}",
        report.final_stage()
    );
}
