use anyhow::Result;
use clap::Parser;
use ratatui::{
    crossterm::{
        self,
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    prelude::*,
    widgets::{
        canvas::{Canvas, Circle, Rectangle},
        *,
    },
};
use std::{
    io::{self, Stdout},
    time::Instant,
};
use vacuum_world_core::{
    agent::ReflexVacuumAgent,
    controller::{AgentController, STEP_TIME},
    scene::{SCENE_HEIGHT, SCENE_WIDTH, Scene},
    world::{NUM_FLOORS, World},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the dirt-injection RNG, for reproducible runs
    #[arg(short, long, value_name = "SEED")]
    seed: Option<u64>,
}

struct App {
    /// The animation controller stepping the reflex agent.
    controller: AgentController<ReflexVacuumAgent>,
    /// Flag to control the main loop.
    should_quit: bool,
}

impl App {
    fn new(seed: Option<u64>) -> Self {
        let world = World::new(NUM_FLOORS);
        let agent = ReflexVacuumAgent::new();
        let controller = match seed {
            Some(seed) => AgentController::seeded(world, agent, seed),
            None => AgentController::new(world, agent),
        };

        App {
            controller,
            should_quit: false,
        }
    }

    /// Handles one step of the animation.
    fn tick(&mut self) -> Result<()> {
        self.controller.tick()?;
        Ok(())
    }

    /// Sets the quit flag.
    fn quit(&mut self) {
        self.should_quit = true;
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Set up the terminal
    let mut terminal = setup_terminal()?;

    // Create the application state
    let mut app = App::new(args.seed);

    // Run the main application loop
    let result = run_app(&mut terminal, &mut app);

    // Restore the terminal state
    restore_terminal(&mut terminal)?;

    result
}

/// Configures the terminal for TUI interaction.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    enable_raw_mode()?; // Put terminal in raw mode
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?; // Use alternate screen and enable mouse capture
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into) // Map io::Error to anyhow::Error
}

/// Restores the terminal to its original state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Runs the main loop of the TUI application.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // First step runs immediately; the loop keeps the STEP_TIME cadence.
    app.controller.start()?;
    let mut last_tick = Instant::now();

    loop {
        // Draw the UI
        terminal.draw(|f| ui(f, app))?;

        // Calculate timeout for event polling
        let timeout = STEP_TIME.saturating_sub(last_tick.elapsed());

        // Poll for events (keyboard, mouse, etc.)
        if crossterm::event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                    _ => {}
                }
            }
        }

        // Update application state if enough time has passed
        if last_tick.elapsed() >= STEP_TIME {
            app.tick()?; // Perform animation step
            last_tick = Instant::now();
        }

        // Exit loop if requested
        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// Renders the user interface.
fn ui(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(70), // Area for the diagram
            Constraint::Percentage(20), // Area for percept/action labels
            Constraint::Percentage(10), // Area for status/help
        ])
        .split(frame.area());

    let scene = app.controller.scene();

    // Render the diagram
    render_diagram(frame, main_layout[0], &scene);

    // Render the percept/action labels
    render_labels(frame, main_layout[1], &scene);

    // Render status/help text
    let help_text = Paragraph::new("Press 'q' or 'Esc' to quit.")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(help_text, main_layout[2]);
}

/// Renders the floors and the robot onto the frame.
///
/// The scene uses y-down coordinates; the canvas y-axis points up, so
/// every shape is flipped against the scene height.
fn render_diagram(frame: &mut Frame, area: Rect, scene: &Scene) {
    let canvas = Canvas::default()
        .block(Block::default().title("Vacuum World").borders(Borders::ALL))
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, SCENE_WIDTH])
        .y_bounds([0.0, SCENE_HEIGHT])
        .paint(|ctx| {
            for cell in &scene.floors {
                ctx.draw(&Rectangle {
                    x: cell.x,
                    y: SCENE_HEIGHT - cell.y - cell.height,
                    width: cell.width,
                    height: cell.height,
                    color: if cell.dirty { Color::Yellow } else { Color::Gray },
                });
            }
            ctx.draw(&Circle {
                x: scene.robot.cx,
                y: SCENE_HEIGHT - scene.robot.cy,
                radius: scene.robot.radius,
                color: Color::Green,
            });
        });
    frame.render_widget(canvas, area);
}

/// Renders the current percept and action labels onto the frame.
fn render_labels(frame: &mut Frame, area: Rect, scene: &Scene) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Percept: ", Style::default().bold()),
            Span::raw(scene.percept_label),
        ]),
        Line::from(vec![
            Span::styled("Action: ", Style::default().bold()),
            Span::styled(scene.action_label, Style::default().fg(Color::Green)),
        ]),
    ];
    let labels =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Agent"));
    frame.render_widget(labels, area);
}
