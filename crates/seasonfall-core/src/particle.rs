//! Fixed-size particle field.

use std::ops::Range;

use crate::random::RandomSource;
use crate::render::{PointVertex, Renderer};
use crate::season::{ParticleProfile, Rgb, Sprite};

/// Particles falling below this height are respawned.
pub const KILL_LINE: f32 = -1.5;

/// Lowest height a respawned particle starts at.
pub const SPAWN_FLOOR: f32 = 1.0;

/// Exclusive upper bound for every spawn height.
pub const SPAWN_CEILING: f32 = 2.0;

/// Reseeded particles are spread over the visible area and the band above it.
const SEED_HEIGHTS: Range<f32> = -1.0..SPAWN_CEILING;
const RESPAWN_HEIGHTS: Range<f32> = SPAWN_FLOOR..SPAWN_CEILING;
const SPAWN_WIDTH: Range<f32> = -1.0..1.0;

/// A single raindrop, snowflake, leaf or petal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position, kept in -1.0..1.0.
    pub x: f32,
    /// Vertical position; decreases as the particle falls.
    pub y: f32,
    /// Fall per tick.
    pub speed: f32,
    /// Colour drawn at spawn.
    pub color: Rgb,
    /// Point size drawn at spawn.
    pub size: f32,
}

impl Particle {
    /// Draw a fresh particle with its height taken from `heights`.
    fn spawn<R: RandomSource + ?Sized>(
        profile: &ParticleProfile,
        heights: &Range<f32>,
        rng: &mut R,
    ) -> Self {
        Self {
            x: rng.next_in(&SPAWN_WIDTH),
            y: rng.next_in(heights),
            speed: rng.next_in(&profile.speed),
            color: profile.color.sample(rng),
            size: rng.next_in(&profile.size),
        }
    }
}

/// Wrap a horizontal position into -1.0..1.0.
pub fn wrap_horizontal(x: f32) -> f32 {
    if SPAWN_WIDTH.contains(&x) {
        x
    } else {
        (x + 1.0).rem_euclid(2.0) - 1.0
    }
}

/// Fixed-size collection of live particles, recycled in place.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Create a field of `count` particles drawn from `profile`.
    pub fn new<R: RandomSource + ?Sized>(
        profile: &ParticleProfile,
        count: usize,
        rng: &mut R,
    ) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(count),
        };
        field.reseed(profile, count, rng);
        field
    }

    /// Create a field from explicit particles.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Replace every particle with a fresh draw from `profile`.
    pub fn reseed<R: RandomSource + ?Sized>(
        &mut self,
        profile: &ParticleProfile,
        count: usize,
        rng: &mut R,
    ) {
        self.particles.clear();
        self.particles.extend((0..count).map(|_| Particle::spawn(profile, &SEED_HEIGHTS, rng)));
    }

    /// Move every particle one tick, respawning those below [`KILL_LINE`].
    pub fn advance<R: RandomSource + ?Sized>(&mut self, profile: &ParticleProfile, rng: &mut R) {
        for particle in &mut self.particles {
            particle.y -= particle.speed;
            if particle.y < KILL_LINE {
                *particle = Particle::spawn(profile, &RESPAWN_HEIGHTS, rng);
                continue;
            }
            particle.x = wrap_horizontal(particle.x + profile.drift.offset(particle.y));
        }
    }

    /// Submit every particle as one point batch.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R, sprite: Sprite) {
        let points: Vec<PointVertex> = self
            .particles
            .iter()
            .map(|p| PointVertex {
                x: p.x,
                y: p.y,
                color: p.color,
                size: p.size,
            })
            .collect();
        renderer.draw_points(&points, sprite);
    }

    /// Current particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
