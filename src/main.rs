use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

mod api;
mod cli;
mod command;
mod config;
mod domain;
mod notes;
mod summary;

use api::{JiraClient, OllamaClient};
use cli::{Cli, Commands};
use config::Settings;
use domain::CommitAnnotation;

/// A validated command, ready to run
enum Action {
    Start,
    Commit(CommitAnnotation),
    Summarize,
}

/// Everything a command needs once arguments and settings are resolved
struct Invocation {
    action: Action,
    date: String,
    settings: Settings,
}

/// Validate arguments, then load settings.
///
/// Usage errors are raised before the config file is read, so a bad
/// invocation never touches the filesystem or the network.
fn prepare(cli: Cli) -> Result<Invocation> {
    let action = match cli.command.unwrap_or(Commands::Start) {
        Commands::Start => Action::Start,
        Commands::Commit(args) => Action::Commit(args.into_annotation()?),
        Commands::Summarize => Action::Summarize,
    };

    let date = cli::resolve_day(cli.day);
    let config_path = cli::resolve_config_path(cli.config)?;
    let settings = Settings::load(&config_path)?.with_readme_links(cli.readme);
    debug!("Running for {} with config {:?}", date, config_path);

    Ok(Invocation {
        action,
        date,
        settings,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Invocation {
        action,
        date,
        settings,
    } = prepare(cli)?;

    match action {
        Action::Start => {
            let jira = JiraClient::new(&settings)?;
            command::run_start(&settings, &jira, &date).await?;
        }
        Action::Commit(commit) => {
            let jira = JiraClient::new(&settings)?;
            command::run_commit(&settings, &jira, &date, &commit).await?;
        }
        Action::Summarize => {
            let ollama = OllamaClient::new(&settings)?;
            command::run_summarize(&settings, &ollama, &date).await?;
        }
    }

    Ok(())
}
