//! Seasons and the per-season particle generation table.

use std::fmt;
use std::ops::Range;

use enum_map::{Enum, EnumMap};
use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// Linear RGB colour with channels in 0.0-1.0.
pub type Rgb = [f32; 3];

/// Total lookup table keyed by season.
pub type SeasonMap<V> = EnumMap<Season, V>;

/// One of the five visual/behavioral modes of the demo.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Enum,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Summer,
    Rain,
    Autumn,
    Winter,
    #[default]
    Spring,
}

impl Season {
    /// Every season, in key-help order.
    pub const ALL: [Season; 5] = [
        Season::Summer,
        Season::Rain,
        Season::Autumn,
        Season::Winter,
        Season::Spring,
    ];

    /// Map a keyboard character to a season. Case-sensitive.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            's' => Some(Season::Summer),
            'r' => Some(Season::Rain),
            'a' => Some(Season::Autumn),
            'w' => Some(Season::Winter),
            'p' => Some(Season::Spring),
            _ => None,
        }
    }

    /// The key that selects this season.
    pub fn key(self) -> char {
        match self {
            Season::Summer => 's',
            Season::Rain => 'r',
            Season::Autumn => 'a',
            Season::Winter => 'w',
            Season::Spring => 'p',
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Rain => "Rain",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
        }
    }

    /// Particle generation profile for this season.
    pub fn profile(self) -> &'static ParticleProfile {
        match self {
            Season::Summer => &SUMMER_POLLEN,
            Season::Rain => &RAIN_DROPS,
            Season::Autumn => &AUTUMN_LEAVES,
            Season::Winter => &WINTER_SNOW,
            Season::Spring => &SPRING_PETALS,
        }
    }

    /// Flat sky colour drawn when no background texture is available.
    pub fn clear_color(self) -> Rgb {
        match self {
            Season::Summer => [0.35, 0.65, 0.95],
            Season::Rain => [0.25, 0.28, 0.33],
            Season::Autumn => [0.55, 0.35, 0.25],
            Season::Winter => [0.70, 0.76, 0.84],
            Season::Spring => [0.55, 0.78, 0.60],
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Point sprite used to draw a season's particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Drop,
    Flake,
    Leaf,
    Petal,
    Mote,
}

/// Horizontal movement applied on each advance, as a function of height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drift {
    None,
    Sine { amplitude: f32, frequency: f32 },
    Cosine { amplitude: f32, frequency: f32 },
}

impl Drift {
    /// Horizontal offset for a particle at height `y`.
    pub fn offset(self, y: f32) -> f32 {
        match self {
            Drift::None => 0.0,
            Drift::Sine {
                amplitude,
                frequency,
            } => amplitude * (frequency * y).sin(),
            Drift::Cosine {
                amplitude,
                frequency,
            } => amplitude * (frequency * y).cos(),
        }
    }

    /// Upper bound on the magnitude of [`Drift::offset`].
    pub fn amplitude(self) -> f32 {
        match self {
            Drift::None => 0.0,
            Drift::Sine { amplitude, .. } | Drift::Cosine { amplitude, .. } => amplitude.abs(),
        }
    }
}

/// How a particle colour is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorRule {
    /// Neutral grey/white; one brightness draw shared by all channels.
    Grey { level: Range<f32> },
    /// Independent draw per channel.
    Channels {
        red: Range<f32>,
        green: Range<f32>,
        blue: Range<f32>,
    },
}

impl ColorRule {
    /// Draw a colour.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Rgb {
        match self {
            ColorRule::Grey { level } => {
                let v = rng.next_in(level);
                [v, v, v]
            }
            ColorRule::Channels { red, green, blue } => {
                [rng.next_in(red), rng.next_in(green), rng.next_in(blue)]
            }
        }
    }

    /// Whether `color` could have been drawn by this rule.
    pub fn contains(&self, color: Rgb) -> bool {
        match self {
            ColorRule::Grey { level } => {
                color[0] == color[1] && color[1] == color[2] && within(level, color[0])
            }
            ColorRule::Channels { red, green, blue } => {
                within(red, color[0]) && within(green, color[1]) && within(blue, color[2])
            }
        }
    }
}

/// Generation parameters for one season's particles.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleProfile {
    /// Colour rule.
    pub color: ColorRule,
    /// Fall speed per tick, in normalized device units.
    pub speed: Range<f32>,
    /// Point size.
    pub size: Range<f32>,
    /// Horizontal drift.
    pub drift: Drift,
    /// Sprite used when drawing.
    pub sprite: Sprite,
}

/// Inclusive range check; sampled floats may round onto the upper bound.
pub fn within(range: &Range<f32>, value: f32) -> bool {
    range.start <= value && value <= range.end
}

const POINT_SIZE: Range<f32> = 1.0..3.0;

const WINTER_SNOW: ParticleProfile = ParticleProfile {
    color: ColorRule::Grey { level: 0.85..1.0 },
    speed: 0.005..0.009,
    size: POINT_SIZE,
    drift: Drift::None,
    sprite: Sprite::Flake,
};

const RAIN_DROPS: ParticleProfile = ParticleProfile {
    color: ColorRule::Channels {
        red: 0.0..0.2,
        green: 0.3..0.5,
        blue: 0.8..1.0,
    },
    speed: 0.012..0.020,
    size: POINT_SIZE,
    drift: Drift::None,
    sprite: Sprite::Drop,
};

const AUTUMN_LEAVES: ParticleProfile = ParticleProfile {
    color: ColorRule::Channels {
        red: 0.8..1.0,
        green: 0.3..0.55,
        blue: 0.0..0.15,
    },
    speed: 0.006..0.012,
    size: POINT_SIZE,
    drift: Drift::Sine {
        amplitude: 0.004,
        frequency: 3.0,
    },
    sprite: Sprite::Leaf,
};

const SPRING_PETALS: ParticleProfile = ParticleProfile {
    color: ColorRule::Channels {
        red: 0.9..1.0,
        green: 0.5..0.75,
        blue: 0.7..0.85,
    },
    speed: 0.005..0.010,
    size: POINT_SIZE,
    drift: Drift::Cosine {
        amplitude: 0.003,
        frequency: 4.0,
    },
    sprite: Sprite::Petal,
};

// Only drawn in `PrecipitationMode::Always`.
const SUMMER_POLLEN: ParticleProfile = ParticleProfile {
    color: ColorRule::Channels {
        red: 0.95..1.0,
        green: 0.85..0.95,
        blue: 0.4..0.6,
    },
    speed: 0.005..0.007,
    size: POINT_SIZE,
    drift: Drift::Sine {
        amplitude: 0.002,
        frequency: 5.0,
    },
    sprite: Sprite::Mote,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn test_from_key_is_case_sensitive() {
        assert_eq!(Season::from_key('s'), Some(Season::Summer));
        assert_eq!(Season::from_key('r'), Some(Season::Rain));
        assert_eq!(Season::from_key('a'), Some(Season::Autumn));
        assert_eq!(Season::from_key('w'), Some(Season::Winter));
        assert_eq!(Season::from_key('p'), Some(Season::Spring));
        assert_eq!(Season::from_key('W'), None);
        assert_eq!(Season::from_key('x'), None);
    }

    #[test]
    fn test_key_round_trips_through_from_key() {
        for season in Season::ALL {
            assert_eq!(Season::from_key(season.key()), Some(season));
        }
    }

    #[test]
    fn test_drift_shapes() {
        assert_eq!(Drift::None.offset(0.7), 0.0);
        let sine = Drift::Sine {
            amplitude: 0.5,
            frequency: 2.0,
        };
        assert!((sine.offset(0.25) - 0.5 * 0.5f32.sin()).abs() < 1e-6);
        let cosine = Drift::Cosine {
            amplitude: 0.5,
            frequency: 2.0,
        };
        assert!((cosine.offset(0.0) - 0.5).abs() < 1e-6);
        assert_eq!(cosine.amplitude(), 0.5);
    }

    #[test]
    fn test_precipitating_seasons_drift_as_documented() {
        assert_eq!(Season::Winter.profile().drift, Drift::None);
        assert_eq!(Season::Rain.profile().drift, Drift::None);
        assert!(matches!(Season::Autumn.profile().drift, Drift::Sine { .. }));
        assert!(matches!(Season::Spring.profile().drift, Drift::Cosine { .. }));
    }

    #[test]
    fn test_grey_rule_draws_equal_channels() {
        let rule = &Season::Winter.profile().color;
        let mut rng = ScriptedRandom::new([0.0, 0.5, 0.999]);
        for _ in 0..3 {
            let color = rule.sample(&mut rng);
            assert_eq!(color[0], color[1]);
            assert_eq!(color[1], color[2]);
            assert!(rule.contains(color));
        }
        assert!(!rule.contains([0.9, 0.9, 0.5]));
    }

    #[test]
    fn test_rain_is_blue_tinted() {
        let rule = &Season::Rain.profile().color;
        let mut rng = ScriptedRandom::new([0.0, 0.3, 0.6, 0.9]);
        for _ in 0..8 {
            let [r, g, b] = rule.sample(&mut rng);
            assert!(b > r && b > g);
        }
    }

    #[test]
    fn test_speeds_stay_small() {
        for season in Season::ALL {
            let speed = &season.profile().speed;
            assert!(speed.start > 0.0);
            assert!(speed.end <= 0.02);
            assert!(speed.start < speed.end);
        }
    }
}
