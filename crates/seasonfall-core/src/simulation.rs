//! Season state machine driving the particle field.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assets::BackgroundTable;
use crate::particle::ParticleField;
use crate::random::RandomSource;
use crate::render::{Background, Renderer};
use crate::season::{ParticleProfile, Season};

/// Which seasons show particles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecipitationMode {
    /// Rain and Winter only.
    Classic,
    /// Rain, Winter, Autumn and Spring.
    #[default]
    Drifting,
    /// Every season.
    Always,
}

impl PrecipitationMode {
    /// Whether particles are advanced and drawn during `season`.
    pub fn shows_particles(self, season: Season) -> bool {
        match self {
            PrecipitationMode::Classic => matches!(season, Season::Rain | Season::Winter),
            PrecipitationMode::Drifting => season != Season::Summer,
            PrecipitationMode::Always => true,
        }
    }
}

/// Start-up parameters for [`SimulationState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSettings {
    pub initial_season: Season,
    pub particle_count: usize,
    pub precipitation: PrecipitationMode,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            initial_season: Season::default(),
            particle_count: 1000,
            precipitation: PrecipitationMode::default(),
        }
    }
}

/// Everything needed to draw one season.
#[derive(Debug, Clone, Copy)]
pub struct SeasonVisuals {
    pub season: Season,
    pub background: Background,
    pub profile: &'static ParticleProfile,
    pub shows_particles: bool,
}

/// Current season, its particles and the background table.
#[derive(Debug)]
pub struct SimulationState<R> {
    season: Season,
    particle_count: usize,
    precipitation: PrecipitationMode,
    field: ParticleField,
    backgrounds: BackgroundTable,
    rng: R,
}

impl<R: RandomSource> SimulationState<R> {
    /// Create the state and seed the field for the initial season.
    pub fn new(settings: SimulationSettings, backgrounds: BackgroundTable, mut rng: R) -> Self {
        let field = ParticleField::new(
            settings.initial_season.profile(),
            settings.particle_count,
            &mut rng,
        );
        Self {
            season: settings.initial_season,
            particle_count: settings.particle_count,
            precipitation: settings.precipitation,
            field,
            backgrounds,
            rng,
        }
    }

    /// The active season.
    pub fn season(&self) -> Season {
        self.season
    }

    /// Switch season, reseeding the field if the new season shows particles.
    pub fn set_season(&mut self, season: Season) {
        self.season = season;
        let reseed = self.precipitation.shows_particles(season);
        if reseed {
            self.field.reseed(season.profile(), self.particle_count, &mut self.rng);
        }
        debug!(%season, reseed, "season changed");
    }

    /// Visuals for the active season.
    pub fn active_visuals(&self) -> SeasonVisuals {
        self.visuals(self.season)
    }

    /// Visuals for any season.
    pub fn visuals(&self, season: Season) -> SeasonVisuals {
        SeasonVisuals {
            season,
            background: self.backgrounds.background(season),
            profile: season.profile(),
            shows_particles: self.precipitation.shows_particles(season),
        }
    }

    /// Handle a key press. Returns whether the key selected a season.
    pub fn on_key(&mut self, key: char) -> bool {
        match Season::from_key(key) {
            Some(season) => {
                self.set_season(season);
                true
            }
            None => false,
        }
    }

    /// Advance one tick and draw it.
    pub fn on_tick<D: Renderer + ?Sized>(&mut self, renderer: &mut D) {
        let visuals = self.active_visuals();
        renderer.draw_background(visuals.background);
        if visuals.shows_particles {
            self.field.advance(visuals.profile, &mut self.rng);
            self.field.render(renderer, visuals.profile.sprite);
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn backgrounds(&self) -> &BackgroundTable {
        &self.backgrounds
    }
}
