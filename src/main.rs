use anyhow::Result;
use droplist::config::Config;
use droplist::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    // Run the TUI application
    ui::run_app(config).await
}
