//! Farb-Typen für die Zeichenfläche.

use egui::Color32;

/// RGBA-Farbe mit Komponenten in `0.0..=1.0` (wie in den Optionen).
pub type Rgba = [f32; 4];

/// Wandelt eine Options-Farbe in eine egui-Farbe.
pub fn color32(color: Rgba) -> Color32 {
    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(
        to_u8(color[0]),
        to_u8(color[1]),
        to_u8(color[2]),
        to_u8(color[3]),
    )
}

/// Farbe mit ersetztem Alpha-Wert.
pub(crate) fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    [color[0], color[1], color[2], alpha]
}
