use anyhow::Context;
use log::info;

use crate::config::app::AppConfig;

mod broadcast;
mod config;
mod counters;
mod error;

fn main() -> anyhow::Result<()> {
    config::log::init().context("Unable to initialize logging")?;

    let app_config = AppConfig::new().context("Unable to load settings")?;
    let subject = broadcast::run(&app_config).context("Broadcast interrupted")?;

    let (fast, slow, tally) = subject.into_observers();
    info!(
        "Done after {} events: {}={} {}={}",
        tally.total(),
        fast.name(),
        fast.value(),
        slow.name(),
        slow.value()
    );
    Ok(())
}
