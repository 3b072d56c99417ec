use betsmoke::adapter::inbound::cli::command::Cli;
use betsmoke::adapter::inbound::cli::{output, run};
use clap::Parser;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));

    match run::execute(&cli).await {
        Ok(report) => {
            info!(requests = report.requests(), "betsmoke finished");
        }
        Err(e) => {
            error!(error = %e, "Fatal error");
            output::error(&e.to_string());
            std::process::exit(1);
        }
    }
}
