//! System clipboard port

use std::borrow::Cow;
use std::sync::Mutex;

use faps_core::{CardImage, ClipboardPort, ShareError};
use tracing::{debug, warn};

/// arboard-backed clipboard. The handle is opened once and kept alive so
/// X11/Wayland keep serving the copied data.
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let handle = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                warn!("System clipboard unavailable: {}", e);
                None
            }
        };
        Self { handle: Mutex::new(handle) }
    }

    fn with_clipboard<T>(
        &self,
        f: impl FnOnce(&mut arboard::Clipboard) -> Result<T, arboard::Error>,
    ) -> Result<T, ShareError> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| ShareError::WriteFailed("clipboard lock poisoned".to_string()))?;
        if guard.is_none() {
            // retry once per call; the display server may have come up since
            *guard = arboard::Clipboard::new().ok();
        }
        let clipboard = guard
            .as_mut()
            .ok_or_else(|| ShareError::CapabilityUnavailable("no system clipboard".to_string()))?;
        f(clipboard).map_err(map_error)
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

pub fn map_error(e: arboard::Error) -> ShareError {
    match e {
        arboard::Error::ClipboardNotSupported => ShareError::CapabilityUnavailable(e.to_string()),
        arboard::Error::ClipboardOccupied => ShareError::PermissionDenied(e.to_string()),
        other => ShareError::WriteFailed(other.to_string()),
    }
}

impl ClipboardPort for SystemClipboard {
    fn write_image(&self, image: &CardImage) -> Result<(), ShareError> {
        let data = arboard::ImageData {
            width: image.width as usize,
            height: image.height as usize,
            bytes: Cow::Borrowed(&image.rgba),
        };
        self.with_clipboard(|clipboard| clipboard.set_image(data))?;
        debug!(width = image.width, height = image.height, "Image copied to clipboard");
        Ok(())
    }

    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        self.with_clipboard(|clipboard| clipboard.set_text(text))?;
        debug!(chars = text.chars().count(), "Text copied to clipboard");
        Ok(())
    }
}
