//! Rookery - a terminal dashboard for the Palmer penguins dataset.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rookery::app::{App, Theme};
use rookery::data::{load_dataset, load_dataset_from_path};
use rookery::ui;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "rookery")]
#[command(about = "A terminal dashboard for the Palmer penguins dataset", long_about = None)]
struct Args {
    /// Load an alternate dataset from a JSON file instead of the embedded one
    #[arg(long)]
    data: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Start with the light theme
    #[arg(long)]
    light: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Rookery");
    }

    // The dataset loads exactly once; a failure here is fatal to startup.
    let dataset = match &args.data {
        Some(path) => load_dataset_from_path(path),
        None => load_dataset(),
    };
    let dataset = match dataset {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let theme = if args.light {
        Theme::GruvboxLight
    } else {
        Theme::GruvboxDark
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(dataset, theme);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Rookery exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc) => return Ok(()),

                    // Control focus
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                        app.focus_next();
                    }
                    (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                        app.focus_prev();
                    }

                    // Adjust the focused control
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                        app.adjust_left();
                    }
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                        app.adjust_right();
                    }
                    (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                        app.toggle_selected();
                    }

                    // Chart tab
                    (KeyModifiers::NONE, KeyCode::Tab) => {
                        app.next_chart();
                    }

                    // Table scrolling
                    (KeyModifiers::SHIFT, KeyCode::Char('J'))
                    | (KeyModifiers::CONTROL, KeyCode::Char('d')) => {
                        app.scroll_table_down(5);
                    }
                    (KeyModifiers::SHIFT, KeyCode::Char('K'))
                    | (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                        app.scroll_table_up(5);
                    }

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('c')) => {
                        app.copy_summary();
                    }
                    (KeyModifiers::NONE, KeyCode::Char('y')) => {
                        app.copy_top_record();
                    }

                    // Theme
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    }

                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.status = "Help: q=quit, j/k=control, h/l=adjust, Space=toggle species, Tab=chart, J/K=scroll table, c/y=copy, T=theme".to_string();
                    }

                    _ => {}
                }
            }
        }
    }
}
