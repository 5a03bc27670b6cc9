//! Capabilities injected into the share pipeline
//!
//! Desktop supplies the system clipboard and browser; tests supply fakes.
//! Implementations must not keep per-invocation state.

use super::{IntentError, ShareError, ShareRequest};
use crate::card::{CardImage, CardLayout, CardPreset};

pub trait ClipboardPort: Send + Sync {
    /// Put a rasterised card on the clipboard
    fn write_image(&self, image: &CardImage) -> Result<(), ShareError>;

    /// Put plain UTF-8 text on the clipboard
    fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

pub trait ShareIntentPort: Send + Sync {
    /// Open a pre-filled compose URL
    fn open(&self, url: &str) -> Result<(), IntentError>;
}

pub trait CardRenderer: Send + Sync {
    /// Build the off-screen card with all text measured and wrapped
    fn layout(&self, request: &ShareRequest, preset: CardPreset) -> Result<CardLayout, ShareError>;

    /// Draw a finished layout into a bitmap
    fn rasterize(&self, layout: &CardLayout) -> Result<CardImage, ShareError>;
}
