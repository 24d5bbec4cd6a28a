//! Color conversion between simulation and terminal colours.

use ratatui::style::Color;
use seasonfall_core::Rgb;

/// Convert a 0.0-1.0 colour to a terminal true colour.
pub fn rgb_to_color(rgb: Rgb) -> Color {
    let [r, g, b] = rgb.map(channel_to_u8);
    Color::Rgb(r, g, b)
}

/// Convert an 8-bit texel to a terminal true colour.
pub fn texel_to_color(texel: [u8; 3]) -> Color {
    Color::Rgb(texel[0], texel[1], texel[2])
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_color() {
        assert_eq!(rgb_to_color([1.0, 0.0, 0.5]), Color::Rgb(255, 0, 128));
        assert_eq!(rgb_to_color([2.0, -1.0, 0.0]), Color::Rgb(255, 0, 0));
    }
}
