//! orgchart - Main entry point
//!
//! Loads the employee list, then either runs the interactive editor or a
//! single headless command.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use orgchart::app::App;
use orgchart::cli::{Cli, Commands};
use orgchart::commands::{self, ParentChange};
use orgchart::{lock_store, SharedStore, StoreSnapshot, SubmitOutcome};

/// Initialize tracing.
///
/// With a log file everything at `info` and above goes there. Without one,
/// headless commands log warnings to stderr and the TUI installs no
/// subscriber so nothing is written over the alternate screen. `RUST_LOG`
/// overrides the level in both cases.
fn init_tracing(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if interactive => {}
        None => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
    }
    Ok(())
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.log_file.as_deref(), cli.is_interactive())?;
    info!("orgchart starting up");
    debug!(?cli, "CLI arguments parsed");

    let store = StoreSnapshot::load_from_file(&cli.data)?
        .into_store()
        .into_shared();

    match cli.command {
        None | Some(Commands::Tui) => run_tui(store, &cli.data)?,
        Some(Commands::List { json }) => {
            let store = lock_store(&store)?;
            if json {
                println!("{}", commands::employees_json(store.list_employees())?);
            } else {
                for line in commands::format_table(store.list_employees()) {
                    println!("{}", line);
                }
            }
        }
        Some(Commands::Add {
            name,
            description,
            parent,
        }) => {
            let outcome = commands::add_employee(&store, &name, &description, parent)?;
            report_outcome(&store, &cli.data, outcome)?;
        }
        Some(Commands::Update {
            id,
            name,
            description,
            parent,
            no_parent,
        }) => {
            let outcome = commands::update_employee(
                &store,
                id,
                name.as_deref(),
                description.as_deref(),
                ParentChange::from_flags(parent, no_parent),
            )?;
            report_outcome(&store, &cli.data, outcome)?;
        }
        Some(Commands::Validate) => {
            let problems = commands::check_employees(lock_store(&store)?.list_employees());
            if problems.is_empty() {
                println!("✓ {} is consistent", cli.data.display());
            } else {
                for problem in &problems {
                    eprintln!("✗ {}", problem);
                }
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Print the result of a headless submit and save accepted changes
fn report_outcome(store: &SharedStore, data: &Path, outcome: SubmitOutcome) -> Result<()> {
    match outcome {
        SubmitOutcome::Rejected(errors) => {
            for (field, message) in errors.iter() {
                eprintln!("✗ {}: {}", field, message);
            }
            std::process::exit(1);
        }
        SubmitOutcome::Created(record) => {
            save(store, data)?;
            println!("✓ Added position {} ({})", record.id, record.name);
        }
        SubmitOutcome::Updated { id, applied: true } => {
            save(store, data)?;
            println!("✓ Updated position {}", id);
        }
        SubmitOutcome::Updated { id, applied: false } => {
            println!("No position with id {}; nothing changed", id);
        }
    }
    Ok(())
}

fn save(store: &SharedStore, data: &Path) -> Result<()> {
    StoreSnapshot::from_shared(store)?.save_to_file(data)
}

/// Run the interactive editor
fn run_tui(store: SharedStore, data: &Path) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let mut app = App::new(store, Some(data.to_path_buf()));
            app.run(&mut terminal).map_err(anyhow::Error::from)
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    if let Err(ref e) = result {
        error!("TUI exited with error: {:#}", e);
    }
    result
}
