use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use rand::Rng;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use knotsaver_core::animation::{RandomVelocity, VelocitySource};
use knotsaver_core::{AppConfig, InputEvent};
use knotsaver_tui::{
    event::EventHandler,
    load_theme,
    widgets::{HelpWidget, KnotCanvasWidget, StatusBarWidget},
    App,
};

/// Command line overrides for the screensaver
#[derive(Debug, Default)]
pub struct RunOptions {
    pub steps: Option<usize>,
    pub unpaused: bool,
    pub seed_points: usize,
}

pub fn run(mut config: AppConfig, opts: RunOptions) -> Result<()> {
    if let Some(steps) = opts.steps {
        config.animation.steps = steps;
    }
    if opts.unpaused {
        config.animation.start_paused = false;
    }

    let theme = load_theme(&config.ui.theme);
    let mut app = App::new(&config, theme)?;
    let mut velocities = RandomVelocity::new(rand::rng(), config.animation.max_velocity);

    if opts.seed_points > 0 {
        seed_points(&mut app, opts.seed_points, &mut velocities);
    }

    info!(
        steps = app.state.steps(),
        points = app.state.polyline().len(),
        "Starting screensaver"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Knotsaver"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::new(config.ui.tick_rate_ms);
    let result = main_loop(&mut terminal, &mut app, &event_handler, &mut velocities);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("Screensaver stopped");
    result
}

/// Place `count` control points at random spots on the canvas
fn seed_points(app: &mut App, count: usize, velocities: &mut impl VelocitySource) {
    let canvas = *app.state.canvas();
    let mut rng = rand::rng();
    for _ in 0..count {
        let x = rng.random_range(0.0..canvas.width);
        let y = rng.random_range(0.0..canvas.height);
        app.state.apply(InputEvent::PointerClick { x, y }, velocities);
    }
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &EventHandler,
    velocities: &mut impl VelocitySource,
) -> Result<()> {
    app.step(&[], velocities);

    while !app.should_quit() {
        terminal.draw(|frame| {
            let constraints = if app.show_status_bar {
                vec![Constraint::Min(1), Constraint::Length(1)]
            } else {
                vec![Constraint::Min(1)]
            };
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(frame.area());

            app.set_canvas_area(chunks[0]);
            KnotCanvasWidget::render(frame, chunks[0], app);

            if app.show_status_bar {
                StatusBarWidget::render(frame, chunks[1], app);
            }
            if app.state.show_help() {
                HelpWidget::render(frame, app);
            }
        })?;

        let events = event_handler.next_batch()?;
        app.step(&events, velocities);
    }

    Ok(())
}
