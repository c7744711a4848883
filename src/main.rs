//! plank - A terminal project tracker with drag-and-drop lists.
//!
//! This is the main binary that launches the TUI application.

use plank_config::Config;
use plank_protocol::dummy::sample_projects;
use plank_store::ProjectStore;
use plank_tui::{App, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    // Load configuration (falls back to defaults if no file is found)
    let config = Config::load()?;

    // Create the store, optionally seeded with sample projects
    let store = if config.seed_samples {
        ProjectStore::with_projects(sample_projects())
    } else {
        ProjectStore::new()
    };

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::with_config(store, config);

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
