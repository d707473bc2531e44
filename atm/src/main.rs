use anyhow::{anyhow, Result};

use atm::config::Settings;
use atm::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    // Logging is initialized in App::run() with buffer support
    App::new(settings).run().await?;

    Ok(())
}
