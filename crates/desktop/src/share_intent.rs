//! Opens compose URLs in the system browser

use faps_core::{IntentError, ShareIntentPort};
use tracing::info;

pub struct BrowserShareIntent;

impl ShareIntentPort for BrowserShareIntent {
    fn open(&self, url: &str) -> Result<(), IntentError> {
        open::that(url).map_err(|e| IntentError(e.to_string()))?;
        info!("Opened share window");
        Ok(())
    }
}
