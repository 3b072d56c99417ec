//! Handler for a smoke run.

use tracing::debug;

use super::command::Cli;
use super::notifier::ConsoleNotifier;
use super::output;
use crate::adapter::outbound::http::HttpBetsClient;
use crate::application::SmokeRunner;
use crate::domain::RunReport;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::{BetsApi, LogNotifier, NotifierRegistry};

/// Build the effective configuration from file, environment and flags.
pub fn effective_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = &cli.base_url {
        config.target.base_url.clone_from(url);
        config.validate()?;
    }
    if cli.seed.is_some() {
        config.run.seed = cli.seed;
    }
    Ok(config)
}

/// Execute the full sequence against the configured service.
pub async fn execute(cli: &Cli) -> Result<RunReport> {
    let config = effective_config(cli)?;
    config.init_logging(cli.verbose);
    match &config.source {
        Some(path) => debug!(path = %path.display(), "Using config file"),
        None => debug!("No config file found, using defaults"),
    }

    let client = HttpBetsClient::from_config(&config.target, &config.http)?;
    output::header(env!("CARGO_PKG_VERSION"), client.endpoint());

    let mut notifiers = NotifierRegistry::new();
    notifiers.register(Box::new(ConsoleNotifier));
    notifiers.register(Box::new(LogNotifier));

    let mut runner = SmokeRunner::with_seed(&client, &notifiers, config.run.seed);
    runner.run(cli.count).await
}
