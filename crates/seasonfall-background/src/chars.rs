//! Character constants for particles and backgrounds.

use seasonfall_core::Sprite;

/// Upper half block; fg paints the top texel, bg the bottom one.
pub const HALF_BLOCK: &str = "▀";

/// Characters used for raindrops, smallest first.
pub const DROP_CHARS: &[char] = &['\'', '╎', '│'];

/// Characters used for snowflakes, smallest first.
pub const FLAKE_CHARS: &[char] = &['·', '*', '❄'];

/// Characters used for falling leaves, smallest first.
pub const LEAF_CHARS: &[char] = &['•', '❧', '❦'];

/// Characters used for petals, smallest first.
pub const PETAL_CHARS: &[char] = &['°', '✿', '❀'];

/// Characters used for pollen motes, smallest first.
pub const MOTE_CHARS: &[char] = &['·', '∘', '°'];

/// Pick a glyph for a sprite; `size` runs from 1.0 to 3.0.
pub fn glyph(sprite: Sprite, size: f32) -> char {
    let chars = match sprite {
        Sprite::Drop => DROP_CHARS,
        Sprite::Flake => FLAKE_CHARS,
        Sprite::Leaf => LEAF_CHARS,
        Sprite::Petal => PETAL_CHARS,
        Sprite::Mote => MOTE_CHARS,
    };
    let last = chars.len() - 1;
    let idx = ((size - 1.0) / 2.0 * last as f32).round().clamp(0.0, last as f32) as usize;
    chars[idx]
}
