//! Achievement image/share pipeline
//!
//! Renders the achievement card off-screen, tries the image clipboard, falls
//! back to a text summary, then opens a compose window. Platform capabilities
//! come in through the traits in [`ports`].

mod error;
mod pipeline;
pub mod ports;
mod text;

pub use error::{IntentError, ShareError};
pub use pipeline::{
    IntentOutcome, Notice, NoticeLevel, SharePipeline, ShareReport, ShareRequest, ShareSettings,
    ShareOutcome, ShareStage,
};
pub use ports::{CardRenderer, ClipboardPort, ShareIntentPort};
pub use text::{compose_url, short_text, summary_text, ShareNetwork};
