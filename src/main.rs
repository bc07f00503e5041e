pub mod api;
pub mod app;
pub mod common;
pub mod config;
pub mod event;
pub mod pages;
pub mod tui;
pub mod ui;

use anyhow::Result;
use api::directory::DirectoryClient;
use api::pulse::PulseClient;
use app::App;
use config::Config;
use event::EventHandler;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}", e);
        std::process::exit(1);
    });

    let test_count = config.pulse.test_count;
    let client = PulseClient::new(config.pulse).ok();
    let directory = config
        .directory
        .and_then(|directory| DirectoryClient::new(directory).ok());

    let mut terminal = tui::init()?;
    tui::install_panic_hook();

    let mut app = App::new(client, directory, config.db_probe, test_count);

    let tick_rate = Duration::from_millis(250);
    let mut events = EventHandler::new(tick_rate);

    let res = app.run(&mut terminal, &mut events).await;

    tui::restore()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}
