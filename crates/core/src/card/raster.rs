//! Software rasteriser for card layouts

use std::io::Cursor;

use ab_glyph::{point, Font, PxScale, ScaleFont};
use image::{ImageFormat, Rgba, RgbaImage};

use super::{CardElement, CardFonts, CardImage, CardLayout, Color};
use crate::share::ShareError;

/// Paint `layout` into an RGBA bitmap and encode it as PNG
pub fn rasterize(fonts: &CardFonts, layout: &CardLayout) -> Result<CardImage, ShareError> {
    if layout.width == 0 || layout.height == 0 {
        return Err(ShareError::RenderFailed("empty card".to_string()));
    }

    let mut canvas = RgbaImage::from_pixel(layout.width, layout.height, Rgba([0, 0, 0, 255]));
    for element in &layout.elements {
        match element {
            CardElement::Gradient { stops } => fill_gradient(&mut canvas, stops),
            CardElement::Polygon { points, color } => fill_polygon(&mut canvas, points, *color),
            CardElement::Disc { center, radius, fill, stroke, stroke_width } => {
                draw_disc(&mut canvas, *center, *radius, *fill, *stroke, *stroke_width)
            }
            CardElement::Text { text, x, baseline, size, color } => {
                draw_text(&mut canvas, fonts, text, *x, *baseline, *size, *color)
            }
        }
    }

    let mut png = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| ShareError::RenderFailed(format!("PNG encode failed: {}", e)))?;

    Ok(CardImage {
        width: layout.width,
        height: layout.height,
        rgba: canvas.into_raw(),
        png,
    })
}

/// Source-over blend of `color` scaled by `coverage`
fn blend(canvas: &mut RgbaImage, x: i64, y: i64, color: Color, coverage: f32) {
    if x < 0 || y < 0 || x >= i64::from(canvas.width()) || y >= i64::from(canvas.height()) {
        return;
    }
    let alpha = (f32::from(color[3]) / 255.0) * coverage.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }
    let px = canvas.get_pixel_mut(x as u32, y as u32);
    for i in 0..3 {
        let dst = f32::from(px.0[i]);
        px.0[i] = (dst + (f32::from(color[i]) - dst) * alpha).round() as u8;
    }
    px.0[3] = 255;
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = (f32::from(a[i]) + (f32::from(b[i]) - f32::from(a[i])) * t).round() as u8;
    }
    out
}

fn gradient_at(stops: &[(f32, Color)], t: f32) -> Color {
    let Some(first) = stops.first() else {
        return [0, 0, 0, 255];
    };
    if t <= first.0 {
        return first.1;
    }
    for pair in stops.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let span = if t1 > t0 { (t - t0) / (t1 - t0) } else { 1.0 };
            return lerp_color(c0, c1, span);
        }
    }
    stops[stops.len() - 1].1
}

fn fill_gradient(canvas: &mut RgbaImage, stops: &[(f32, Color)]) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    let length_sq = w * w + h * h;
    for (x, y, px) in canvas.enumerate_pixels_mut() {
        // projection onto the top-left to bottom-right diagonal
        let t = ((x as f32 + 0.5) * w + (y as f32 + 0.5) * h) / length_sq;
        let [r, g, b, _] = gradient_at(stops, t);
        *px = Rgba([r, g, b, 255]);
    }
}

fn point_in_polygon(points: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn fill_polygon(canvas: &mut RgbaImage, points: &[(f32, f32)], color: Color) {
    if points.len() < 3 {
        return;
    }
    let min_x = points.iter().map(|p| p.0).fold(f32::INFINITY, f32::min).floor().max(0.0) as i64;
    let max_x = points.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max).ceil() as i64;
    let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min).floor().max(0.0) as i64;
    let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max).ceil() as i64;

    for y in min_y..max_y.min(i64::from(canvas.height())) {
        for x in min_x..max_x.min(i64::from(canvas.width())) {
            if point_in_polygon(points, x as f32 + 0.5, y as f32 + 0.5) {
                blend(canvas, x, y, color, 1.0);
            }
        }
    }
}

fn draw_disc(
    canvas: &mut RgbaImage,
    center: (f32, f32),
    radius: f32,
    fill: Color,
    stroke: Color,
    stroke_width: f32,
) {
    let reach = radius + stroke_width;
    let half_stroke = stroke_width / 2.0;
    for y in (center.1 - reach).floor() as i64..=(center.1 + reach).ceil() as i64 {
        for x in (center.0 - reach).floor() as i64..=(center.0 + reach).ceil() as i64 {
            let dx = x as f32 + 0.5 - center.0;
            let dy = y as f32 + 0.5 - center.1;
            let d = (dx * dx + dy * dy).sqrt();
            blend(canvas, x, y, fill, radius + 0.5 - d);
            if stroke_width > 0.0 {
                blend(canvas, x, y, stroke, half_stroke + 0.5 - (d - radius).abs());
            }
        }
    }
}

fn draw_text(
    canvas: &mut RgbaImage,
    fonts: &CardFonts,
    text: &str,
    x: f32,
    baseline: f32,
    size: f32,
    color: Color,
) {
    let scale = PxScale::from(size);
    let mut caret = x;
    for c in text.chars() {
        let (font, id) = fonts.resolve(c);
        let scaled = font.as_scaled(scale);
        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            let px = bounds.min.x as i64 + i64::from(gx);
            let py = bounds.min.y as i64 + i64::from(gy);
            blend(canvas, px, py, color, coverage);
        });
    }
}
