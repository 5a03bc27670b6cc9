//! Font setup for the UI and the achievement card

use eframe::egui;
use faps_core::{CardFonts, ShareError};

use crate::config::Config;

/// Apply font settings to the egui context
pub fn apply_font_settings(ctx: &egui::Context, config: &Config) {
    let mut fonts = egui::FontDefinitions::default();

    // Add phosphor icons
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);

    // Apply font size via style
    let mut style = (*ctx.style()).clone();
    let scale = config.font_size / 14.0;
    style.text_styles.iter_mut().for_each(|(text_style, font_id)| match text_style {
        egui::TextStyle::Small => font_id.size = 10.0 * scale,
        egui::TextStyle::Body => font_id.size = 14.0 * scale,
        egui::TextStyle::Monospace => font_id.size = 14.0 * scale,
        egui::TextStyle::Button => font_id.size = 14.0 * scale,
        egui::TextStyle::Heading => font_id.size = 20.0 * scale,
        egui::TextStyle::Name(_) => {}
    });
    style.interaction.tooltip_delay = 0.0;
    ctx.set_style(style);
}

/// egui's bundled proportional fonts (text, emoji, symbols) for card rendering
pub fn card_fonts() -> Result<CardFonts, ShareError> {
    let defs = egui::FontDefinitions::default();
    let bytes = defs
        .families
        .get(&egui::FontFamily::Proportional)
        .into_iter()
        .flatten()
        .filter_map(|name| defs.font_data.get(name))
        .map(|data| data.font.to_vec())
        .collect();
    CardFonts::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_fonts_load_for_cards() {
        let fonts = card_fonts().unwrap();
        assert!(fonts.len() >= 2);
    }
}
