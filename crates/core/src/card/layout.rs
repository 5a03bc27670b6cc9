//! Card geometry and text measurement

use ab_glyph::{Font, PxScale, ScaleFont};

use super::{CardElement, CardFonts, CardLayout, CardPreset, Color, TextAlign};
use crate::constants::{BRAND_HANDLE, BRAND_NAME, BRAND_SITE};
use crate::share::ShareRequest;
use crate::stats::format_faps;

/// Card coordinates are designed at this height and scaled to the preset
const DESIGN_HEIGHT: f32 = 675.0;
const MAX_HEADLINE_LINES: usize = 2;
const ELLIPSIS: char = '…';

const WHITE: Color = [255, 255, 255, 255];
const GOLD: Color = [255, 215, 0, 255];
const MUTED: Color = [255, 255, 255, 178];
const FAINT: Color = [255, 255, 255, 153];

/// Horizontal advance of `text` at `size` px
pub fn measure_text(fonts: &CardFonts, text: &str, size: f32) -> f32 {
    let scale = PxScale::from(size);
    text.chars()
        .map(|c| {
            let (font, id) = fonts.resolve(c);
            font.as_scaled(scale).h_advance(id)
        })
        .sum()
}

/// Greedy word wrap. A single word wider than `max_width` keeps its own line.
pub fn wrap_text(fonts: &CardFonts, text: &str, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", line, word);
        if measure_text(fonts, &candidate, size) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Shorten `line` with a trailing ellipsis until it fits.
/// With `force` the ellipsis is added even when the line already fits.
fn ellipsize(fonts: &CardFonts, line: &str, size: f32, max_width: f32, force: bool) -> String {
    if !force && measure_text(fonts, line, size) <= max_width {
        return line.to_string();
    }
    let mut chars: Vec<char> = line.trim_end().chars().collect();
    loop {
        let candidate: String = chars.iter().chain(std::iter::once(&ELLIPSIS)).collect();
        if chars.is_empty() || measure_text(fonts, &candidate, size) <= max_width {
            return candidate;
        }
        chars.pop();
        while chars.last().is_some_and(|c| c.is_whitespace()) {
            chars.pop();
        }
    }
}

/// Headline lines after wrapping, capped with an ellipsis on overflow
pub(crate) fn headline_lines(fonts: &CardFonts, text: &str, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = wrap_text(fonts, text, size, max_width);
    let overflow = lines.len() > MAX_HEADLINE_LINES;
    lines.truncate(MAX_HEADLINE_LINES);
    let last = lines.len().saturating_sub(1);
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| ellipsize(fonts, line, size, max_width, overflow && i == last))
        .collect()
}

struct Painter<'a> {
    fonts: &'a CardFonts,
    elements: Vec<CardElement>,
}

impl Painter<'_> {
    fn text(&mut self, text: String, anchor_x: f32, baseline: f32, size: f32, color: Color, align: TextAlign) {
        let width = measure_text(self.fonts, &text, size);
        let x = match align {
            TextAlign::Start => anchor_x,
            TextAlign::Center => anchor_x - width / 2.0,
            TextAlign::End => anchor_x - width,
        };
        self.elements.push(CardElement::Text { text, x, baseline, size, color });
    }
}

/// Lay the card out for `preset`, measuring every text run
pub fn build_layout(fonts: &CardFonts, request: &ShareRequest, preset: CardPreset) -> CardLayout {
    let (width, height) = preset.size();
    let (w, h) = (width as f32, height as f32);
    let s = h / DESIGN_HEIGHT;

    let mut p = Painter { fonts, elements: Vec::new() };

    p.elements.push(CardElement::Gradient {
        stops: vec![
            (0.0, [0x1a, 0x1a, 0x2e, 255]),
            (0.3, [0x16, 0x21, 0x3e, 255]),
            (0.7, [0x0f, 0x14, 0x19, 255]),
            (1.0, [0x0a, 0x0a, 0x0a, 255]),
        ],
    });

    // Decorative shapes: top right, bottom left, top left
    p.elements.push(CardElement::Polygon {
        points: vec![(w - 200.0 * s, 0.0), (w, 0.0), (w, 300.0 * s), (w - 400.0 * s, 200.0 * s)],
        color: [255, 215, 0, 20],
    });
    p.elements.push(CardElement::Polygon {
        points: vec![(0.0, h - 250.0 * s), (350.0 * s, h - 100.0 * s), (200.0 * s, h), (0.0, h)],
        color: [255, 215, 0, 13],
    });
    p.elements.push(CardElement::Polygon {
        points: vec![(0.0, 0.0), (180.0 * s, 0.0), (120.0 * s, 120.0 * s), (0.0, 80.0 * s)],
        color: [255, 215, 0, 31],
    });

    // Profile
    let profile_y = 80.0 * s;
    p.elements.push(CardElement::Disc {
        center: (100.0 * s, profile_y),
        radius: 30.0 * s,
        fill: [255, 215, 0, 51],
        stroke: GOLD,
        stroke_width: 2.0,
    });
    let name_width = w / 2.0;
    let username = &request.stats.username;
    let name = ellipsize(fonts, username, 24.0 * s, name_width, false);
    p.text(name, 150.0 * s, profile_y - 5.0 * s, 24.0 * s, WHITE, TextAlign::Start);
    let handle = ellipsize(fonts, &format!("@{}", username.to_lowercase()), 18.0 * s, name_width, false);
    p.text(handle, 150.0 * s, profile_y + 20.0 * s, 18.0 * s, MUTED, TextAlign::Start);

    // Headline
    let center_x = w / 2.0;
    let center_y = h / 2.0;
    let achievement = request.achievement.trim_end();
    let achievement = achievement.strip_suffix(BRAND_HANDLE).unwrap_or(achievement).trim_end();
    let headline = format!("Earned {} in FAPS on Fraction AI", achievement);
    let headline_size = 42.0 * s;
    let mut baseline = center_y - 20.0 * s;
    for line in headline_lines(fonts, &headline, headline_size, w - 120.0 * s) {
        p.text(line, center_x, baseline, headline_size, WHITE, TextAlign::Center);
        baseline += 50.0 * s;
    }

    // Stats
    let faps = format!("{} FAPS", format_faps(request.stats.faps_count));
    p.text(faps, center_x, center_y + 80.0 * s, 28.0 * s, GOLD, TextAlign::Center);
    if let Some(rank) = request.stats.rank {
        p.text(format!("Rank #{}", rank), center_x, center_y + 115.0 * s, 20.0 * s, MUTED, TextAlign::Center);
    }

    // Footer
    let footer_y = h - 35.0 * s;
    p.text(BRAND_NAME.to_string(), 60.0 * s, footer_y, 24.0 * s, GOLD, TextAlign::Start);
    p.text(BRAND_SITE.to_string(), w - 60.0 * s, footer_y, 18.0 * s, FAINT, TextAlign::End);

    CardLayout { width, height, elements: p.elements }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::test_fonts::egui_defaults;
    use crate::models::UserStats;

    fn request(achievement: &str, rank: Option<u32>) -> ShareRequest {
        ShareRequest {
            achievement: achievement.to_string(),
            stats: UserStats::new(rank, 2871.70, "FirmOrangutan3828"),
        }
    }

    #[test]
    fn wrapped_lines_fit_width() {
        let fonts = egui_defaults();
        let text = "Earned Stroke of Genius in FAPS on Fraction AI after a very long week of posting";
        let lines = wrap_text(&fonts, text, 42.0, 400.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(measure_text(&fonts, line, 42.0) <= 400.0, "{line:?} too wide");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn overflowing_headline_is_truncated_with_ellipsis() {
        let fonts = egui_defaults();
        let text = "word ".repeat(200);
        let lines = headline_lines(&fonts, &text, 42.0, 600.0);
        assert_eq!(lines.len(), MAX_HEADLINE_LINES);
        assert!(lines[1].ends_with(ELLIPSIS));
        for line in &lines {
            assert!(measure_text(&fonts, line, 42.0) <= 600.0);
        }
    }

    #[test]
    fn single_long_word_is_cut_to_width() {
        let fonts = egui_defaults();
        let lines = headline_lines(&fonts, &"W".repeat(300), 42.0, 500.0);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(ELLIPSIS));
        assert!(measure_text(&fonts, &lines[0], 42.0) <= 500.0);
    }

    #[test]
    fn layout_contains_card_text() {
        let fonts = egui_defaults();
        let layout = build_layout(&fonts, &request("Rhythm Keeper", Some(4)), CardPreset::Twitter);
        let texts: Vec<&str> = layout.texts().collect();

        assert!(texts.contains(&"FirmOrangutan3828"));
        assert!(texts.contains(&"@firmorangutan3828"));
        assert!(texts.contains(&"2871.7 FAPS"));
        assert!(texts.contains(&"Rank #4"));
        assert!(texts.contains(&BRAND_NAME));
        assert!(texts.contains(&BRAND_SITE));
        assert!(texts.iter().any(|t| t.contains("Rhythm Keeper")));
    }

    #[test]
    fn layout_omits_missing_rank() {
        let fonts = egui_defaults();
        let layout = build_layout(&fonts, &request("First Touch", None), CardPreset::Compact);
        assert!(!layout.texts().any(|t| t.starts_with("Rank")));
    }

    #[test]
    fn centred_text_stays_on_card() {
        let fonts = egui_defaults();
        let layout = build_layout(&fonts, &request("FAP God", Some(1)), CardPreset::OpenGraph);
        for element in &layout.elements {
            if let CardElement::Text { text, x, size, .. } = element {
                let right = x + measure_text(&fonts, text, *size);
                assert!(*x >= 0.0 && right <= layout.width as f32, "{text:?} off card");
            }
        }
    }
}
