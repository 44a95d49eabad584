mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod ticker;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_data_dir, get_data_dir, init_local_dir, load_settings, load_tasks, settings_file, tasks_file};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "pomodesk")]
#[command(about = "A terminal-based productivity tracker with a task list and Pomodoro timer", long_about = None)]
struct Cli {
    /// Work session length in minutes (overrides the saved setting)
    #[arg(short, long)]
    work_minutes: Option<u64>,

    /// Break length in minutes (overrides the saved setting)
    #[arg(short, long)]
    break_minutes: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .pomodesk directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_dir()?;
            println!("Initialized pomodesk directory: {}", data_dir.display());
            println!();
            println!("Pomodesk will now use this local directory for task storage.");
            println!("Run 'pomodesk' to start.");
            Ok(())
        }
        None => run_tui(cli.work_minutes, cli.break_minutes),
    }
}

fn run_tui(work_override: Option<u64>, break_override: Option<u64>) -> Result<()> {
    ensure_data_dir()?;

    // Show which directory we're using
    let data_dir = get_data_dir()?;
    eprintln!("Using pomodesk directory: {}", data_dir.display());

    let tasks = load_tasks(tasks_file()?)?;
    let mut settings = load_settings(settings_file()?)?;
    if let Some(minutes) = work_override {
        settings.work_minutes = minutes;
    }
    if let Some(minutes) = break_override {
        settings.break_minutes = minutes;
    }

    let mut app = AppState::new(tasks, settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Tear down the countdown thread before saving
    app.timer.stop();

    // Save on exit
    if let Err(e) = app.save() {
        eprintln!("Error saving tasks: {}", e);
    }
    if let Err(e) = app.save_settings() {
        eprintln!("Error saving settings: {}", e);
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let poll_interval = ticker::poll_interval();

    loop {
        // Apply countdown progress reported since the last pass
        app.drain_timer_events();

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout so the clock keeps moving
        if event::poll(poll_interval)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Autosave if needed
        if app.needs_save {
            app.save()?;
        }
        if app.settings_need_save {
            app.save_settings()?;
        }
    }
}
