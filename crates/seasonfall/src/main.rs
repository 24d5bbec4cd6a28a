use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::SetTitle,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Style, Stylize},
    text::{Line, Span},
};
use seasonfall_background::{FrameRenderer, ImageFileLoader, TextureStore};
use seasonfall_config::Config;
use seasonfall_core::{BackgroundTable, Season, SeededRandom, SimulationState};
use tracing::info;

mod logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _log_guard = logging::init()?;

    let config = Config::load();
    let mut textures = TextureStore::new();
    let backgrounds =
        BackgroundTable::load(&config.background_paths(), &ImageFileLoader, &mut textures);
    let rng = match config.seed {
        Some(seed) => SeededRandom::from_seed_u64(seed),
        None => SeededRandom::from_entropy(),
    };
    let simulation = SimulationState::new(config.settings(), backgrounds, rng);
    info!(
        season = %simulation.season(),
        particles = simulation.field().len(),
        textures = textures.len(),
        "starting"
    );

    let terminal = ratatui::init();
    let result = App::new(simulation, textures, config.tick_interval()).run(terminal);
    ratatui::restore();
    result
}

/// Terminal title for a season.
fn window_title(season: Season) -> String {
    format!("Season Change - {season}")
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Season, particles and backgrounds.
    simulation: SimulationState<SeededRandom>,
    /// Uploaded background textures.
    textures: TextureStore,
    /// Interval between ticks.
    tick: Duration,
    /// Season the terminal title currently shows.
    titled: Option<Season>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(
        simulation: SimulationState<SeededRandom>,
        textures: TextureStore,
        tick: Duration,
    ) -> Self {
        Self {
            running: false,
            simulation,
            textures,
            tick,
            titled: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let mut next_tick = Instant::now();
        while self.running {
            self.update_title()?;
            terminal.draw(|frame| self.render(frame))?;

            next_tick += self.tick;
            // Drop missed ticks instead of bursting to catch up.
            let now = Instant::now();
            if next_tick < now {
                next_tick = now;
            }
            self.handle_crossterm_events(next_tick)?;
        }
        Ok(())
    }

    /// Set the terminal title when the season changed since the last tick.
    fn update_title(&mut self) -> io::Result<()> {
        let season = self.simulation.season();
        if self.titled != Some(season) {
            execute!(io::stdout(), SetTitle(window_title(season)))?;
            self.titled = Some(season);
        }
        Ok(())
    }

    /// Advance the simulation and draw one frame.
    fn render(&mut self, frame: &mut Frame) {
        let chunks =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(frame.area());

        let mut sky = FrameRenderer::with_buffer(chunks[0], frame.buffer_mut(), &self.textures);
        self.simulation.on_tick(&mut sky);

        frame.render_widget(self.status_line(), chunks[1]);
    }

    /// Key help with the active season highlighted, plus any background load failure.
    fn status_line(&self) -> Line<'static> {
        let active = self.simulation.season();
        let mut spans = Vec::new();
        for season in Season::ALL {
            let key = Span::from(season.key().to_string()).bold();
            let name = Span::from(format!(" {}  ", season.name()));
            if season == active {
                spans.push(key.fg(Color::Yellow));
                spans.push(name.fg(Color::Yellow));
            } else {
                spans.push(key.fg(Color::White));
                spans.push(name.dark_gray());
            }
        }
        spans.push("q".bold().fg(Color::White));
        spans.push(" quit".dark_gray());

        if let Some(err) = self.simulation.backgrounds().failure(active) {
            spans.push(Span::styled(
                format!("  no background: {err}"),
                Style::new().fg(Color::Red),
            ));
        }
        Line::from(spans).centered()
    }

    /// Reads crossterm events until the next tick is due.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                return Ok(());
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
            if !self.running {
                return Ok(());
            }
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                if self.simulation.on_key(c) {
                    info!(season = %self.simulation.season(), "season selected");
                }
            }
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
