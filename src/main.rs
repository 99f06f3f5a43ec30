use anyhow::Context;
use tilemaze::app::App;
use tilemaze::config::Settings;
use tilemaze::constants::LOOP_TIME;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// The main entry point of the application.
///
/// Sets up logging, reads settings from the command line, then runs frames
/// until the player quits.
pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(ErrorLayer::default())
        .try_init()
        .context("Could not set global default subscriber")?;

    let settings = Settings::from_args(std::env::args().skip(1)).context("Invalid command-line arguments")?;
    let mut app = App::new(&settings).context("Could not create app")?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    while app.run() {}

    Ok(())
}
