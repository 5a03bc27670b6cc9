//! Off-screen achievement card
//!
//! [`GlyphCardRenderer`] lays the card out with real glyph metrics and then
//! rasterises it into an RGBA bitmap plus its PNG encoding.

mod layout;
mod raster;

use ab_glyph::{Font, FontArc, GlyphId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::share::{CardRenderer, ShareError, ShareRequest};

pub use layout::{build_layout, measure_text, wrap_text};
pub use raster::rasterize;

/// Straight (non-premultiplied) RGBA
pub type Color = [u8; 4];

/// Output card size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardPreset {
    /// 800 x 400
    Compact,
    /// 1200 x 630, link preview size
    #[default]
    OpenGraph,
    /// 1200 x 675
    Twitter,
}

impl CardPreset {
    pub const ALL: [CardPreset; 3] = [CardPreset::Compact, CardPreset::OpenGraph, CardPreset::Twitter];

    pub fn size(self) -> (u32, u32) {
        match self {
            CardPreset::Compact => (800, 400),
            CardPreset::OpenGraph => (1200, 630),
            CardPreset::Twitter => (1200, 675),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardPreset::Compact => "Compact (800×400)",
            CardPreset::OpenGraph => "Open Graph (1200×630)",
            CardPreset::Twitter => "X post (1200×675)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
    End,
}

/// One drawable item, painted in order
#[derive(Debug, Clone, PartialEq)]
pub enum CardElement {
    /// Fills the card along the top-left to bottom-right diagonal
    Gradient { stops: Vec<(f32, Color)> },
    Polygon { points: Vec<(f32, f32)>, color: Color },
    Disc { center: (f32, f32), radius: f32, fill: Color, stroke: Color, stroke_width: f32 },
    /// `x` is the left edge after alignment, `baseline` the text baseline
    Text { text: String, x: f32, baseline: f32, size: f32, color: Color },
}

/// A fully measured card, ready to rasterise
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub width: u32,
    pub height: u32,
    pub elements: Vec<CardElement>,
}

impl CardLayout {
    /// All text drawn on the card, in paint order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            CardElement::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Rasterised card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    pub png: Vec<u8>,
}

/// Fonts tried in order for each character
#[derive(Clone)]
pub struct CardFonts {
    fonts: Vec<FontArc>,
}

impl CardFonts {
    pub fn from_bytes(sources: Vec<Vec<u8>>) -> Result<Self, ShareError> {
        let fonts = sources
            .into_iter()
            .map(|bytes| {
                FontArc::try_from_vec(bytes).map_err(|e| ShareError::RenderFailed(format!("invalid font: {}", e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if fonts.is_empty() {
            return Err(ShareError::RenderFailed("no fonts supplied".to_string()));
        }
        Ok(Self { fonts })
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// First font with a glyph for `c`, else the primary font's missing glyph
    pub(crate) fn resolve(&self, c: char) -> (&FontArc, GlyphId) {
        for font in &self.fonts {
            let id = font.glyph_id(c);
            if id.0 != 0 {
                return (font, id);
            }
        }
        let primary = &self.fonts[0];
        (primary, primary.glyph_id(c))
    }
}

pub struct GlyphCardRenderer {
    fonts: CardFonts,
}

impl GlyphCardRenderer {
    pub fn new(fonts: CardFonts) -> Self {
        Self { fonts }
    }
}

impl CardRenderer for GlyphCardRenderer {
    fn layout(&self, request: &ShareRequest, preset: CardPreset) -> Result<CardLayout, ShareError> {
        let layout = build_layout(&self.fonts, request, preset);
        debug!(preset = ?preset, elements = layout.elements.len(), "Card laid out");
        Ok(layout)
    }

    fn rasterize(&self, layout: &CardLayout) -> Result<CardImage, ShareError> {
        rasterize(&self.fonts, layout)
    }
}

#[cfg(test)]
pub(crate) mod test_fonts {
    use super::CardFonts;

    /// egui's bundled proportional fonts, in fallback order
    pub fn egui_defaults() -> CardFonts {
        let defs = egui::FontDefinitions::default();
        let names = &defs.families[&egui::FontFamily::Proportional];
        let bytes = names
            .iter()
            .filter_map(|name| defs.font_data.get(name))
            .map(|data| data.font.to_vec())
            .collect();
        CardFonts::from_bytes(bytes).expect("bundled fonts parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserStats;

    fn request() -> ShareRequest {
        ShareRequest {
            achievement: "Rhythm Keeper".to_string(),
            stats: UserStats::new(Some(4), 2871.70, "FirmOrangutan3828"),
        }
    }

    #[test]
    fn empty_or_invalid_fonts_fail_to_render() {
        assert!(matches!(CardFonts::from_bytes(Vec::new()), Err(ShareError::RenderFailed(_))));
        assert!(matches!(
            CardFonts::from_bytes(vec![b"not a font".to_vec()]),
            Err(ShareError::RenderFailed(_))
        ));
    }

    #[test]
    fn fallback_font_covers_emoji() {
        let fonts = test_fonts::egui_defaults();
        assert!(fonts.len() > 1);
        let (_, id) = fonts.resolve('🏆');
        assert_ne!(id.0, 0);
    }

    #[test]
    fn renders_open_graph_png() {
        let renderer = GlyphCardRenderer::new(test_fonts::egui_defaults());
        let layout = renderer.layout(&request(), CardPreset::OpenGraph).unwrap();
        let image = renderer.rasterize(&layout).unwrap();

        assert_eq!((image.width, image.height), (1200, 630));
        assert_eq!(image.rgba.len(), 1200 * 630 * 4);
        assert_eq!(&image.png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
        // opaque background
        assert!(image.rgba.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn every_preset_matches_its_size() {
        let renderer = GlyphCardRenderer::new(test_fonts::egui_defaults());
        for preset in CardPreset::ALL {
            let layout = renderer.layout(&request(), preset).unwrap();
            assert_eq!((layout.width, layout.height), preset.size());
        }
    }

    #[test]
    fn preset_labels_state_their_size_once() {
        for preset in CardPreset::ALL {
            let (w, h) = preset.size();
            let dims = format!("{}×{}", w, h);
            assert_eq!(preset.label().matches(dims.as_str()).count(), 1, "{:?}", preset);
        }
    }
}
