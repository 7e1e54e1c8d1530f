mod app;
mod domain;
mod input;
mod messages;
mod notifications;
mod persistence;
mod report;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::TodoStore;
use persistence::{
    default_export_file, ensure_data_dir, export_todos, get_data_dir, init_local_dir, load_settings,
    load_todos, read_import, read_widget_snapshot, save_todos, settings_file, todos_file,
    widget_file, write_widget_snapshot,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use timer::LifecyclePhase;

#[derive(Parser)]
#[command(name = "doable")]
#[command(about = "A terminal to-do list with a commitment timer, streaks and achievements", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .doable directory in the current directory
    Init,
    /// Export all todos as pretty-printed JSON
    Export {
        /// Output file path. Defaults to ~/.doable/doable-export-YYYY-MM-DD.json
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Import todos from a JSON export, merging by id
    Import {
        /// Path to a previously exported file
        file: String,
    },
    /// Print the open-todo count for status-bar widgets
    Widget,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_dir()?;
            println!("Initialized doable directory: {}", data_dir.display());
            println!();
            println!("Doable will now use this local directory for todo storage.");
            println!("Run 'doable' to start.");
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let todos = load_todos(todos_file()?)?;
            let path = match output {
                Some(p) => std::path::PathBuf::from(p),
                None => default_export_file()?,
            };
            export_todos(&path, &todos)?;
            println!("Exported {} todo(s) to {}", todos.len(), path.display());
            Ok(())
        }
        Some(Commands::Import { file }) => {
            let mut store = TodoStore::from_todos(load_todos(todos_file()?)?);
            let incoming = read_import(&file)
                .map_err(|e| anyhow::anyhow!("Cannot import {}: {}", file, e))?;
            let (added, skipped) = store.merge(incoming);

            save_todos(todos_file()?, store.todos())?;
            write_widget_snapshot(widget_file()?, store.open_count())?;

            println!("Imported {} todo(s), skipped {} already present", added, skipped);
            Ok(())
        }
        Some(Commands::Widget) => {
            // Prefer the snapshot; fall back to counting the store
            let snapshot = match read_widget_snapshot(widget_file()?) {
                Ok(snapshot) => snapshot,
                Err(_) => {
                    let todos = load_todos(todos_file()?)?;
                    let open = todos.iter().filter(|t| !t.is_completed).count();
                    write_widget_snapshot(widget_file()?, open)?;
                    read_widget_snapshot(widget_file()?)?
                }
            };
            println!("{} open to-do(s)", snapshot.open_count);
            Ok(())
        }
        None => run_tui(),
    }
}

fn run_tui() -> Result<()> {
    ensure_data_dir()?;

    let data_dir = get_data_dir()?;
    eprintln!("Using doable directory: {}", data_dir.display());

    let todos = load_todos(todos_file()?)?;
    let settings = load_settings(settings_file()?)?;
    let mut app = AppState::new(TodoStore::from_todos(todos), settings);

    // Setup terminal. Focus change reporting feeds the timer's lifecycle
    // stream.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    if let Err(e) = app.save() {
        eprintln!("Error saving todos: {}", e);
    }

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let tick_rate = timer::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only process key press events (ignore key release)
                    if key.kind == KeyEventKind::Press {
                        let should_quit = input::handle_key(app, key)?;
                        if should_quit {
                            return Ok(());
                        }
                    }
                }
                // Leaving the terminal is leaving the app
                Event::FocusLost => app.timer_lifecycle(LifecyclePhase::Background),
                Event::FocusGained => app.timer_lifecycle(LifecyclePhase::Active),
                _ => {}
            }
        }

        // Drain whole seconds into the active run
        app.tick();

        // Nudge for freshly overdue todos
        app.check_overdue();

        // Autosave if needed
        if app.needs_save {
            app.save()?;
        }
    }
}
