// ABOUTME: Entry point for the selida CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use selida::api::{HttpPagesApi, PagesApi};
use selida::config::{self, Config};
use selida::deploy::{DeployRequest, PagesDeploy};
use selida::error::{Error, Result};
use selida::output::Output;
use selida::types::{BuildVersion, DeploymentId};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let mut output = Output::new(cli.format.into());
    let result = run(cli, &mut output).await;

    if let Err(e) = result {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &mut Output) -> Result<()> {
    match cli.command {
        Commands::Init { repository, force } => {
            let cwd = env::current_dir()?;
            config::init_config(&cwd, repository.as_deref(), force)?;
            output.success(&format!("Created {}", config::CONFIG_FILENAME));
            Ok(())
        }
        Commands::Deploy {
            artifact_url,
            build_version,
            id_token,
            preview,
        } => {
            let cwd = env::current_dir()?;
            let config = Config::discover(&cwd)?;
            deploy(config, artifact_url, build_version, id_token, preview, output).await
        }
        Commands::Status { deployment_id } => {
            let cwd = env::current_dir()?;
            let config = Config::discover(&cwd)?;
            let api = connect(&config)?;

            let poll = api
                .query_status(&DeploymentId::new(deployment_id))
                .await?;
            output.success(&format!("{} (http {})", poll.status, poll.http_status));
            Ok(())
        }
        Commands::Cancel { deployment_id } => {
            let cwd = env::current_dir()?;
            let config = Config::discover(&cwd)?;
            let api = connect(&config)?;

            let id = DeploymentId::new(deployment_id);
            api.cancel_deployment(&id).await?;
            output.success(&format!("Deployment {id} cancelled"));
            Ok(())
        }
    }
}

/// Build the HTTP API client from configuration.
fn connect(config: &Config) -> Result<HttpPagesApi> {
    let token = config.resolve_token()?;
    Ok(HttpPagesApi::new(
        &config.api_base,
        config.repository.clone(),
        token,
    )?)
}

/// Submit a deployment and track it to a terminal state.
async fn deploy(
    config: Config,
    artifact_url: String,
    build_version: String,
    id_token: Option<String>,
    preview: bool,
    output: &mut Output,
) -> Result<()> {
    let build_version =
        BuildVersion::new(&build_version).map_err(|e| Error::InvalidConfig(e.to_string()))?;

    let api = connect(&config)?;

    let request = DeployRequest {
        artifact_url,
        build_version,
        oidc_token: id_token,
        preview: preview || config.preview,
        poll: config.poll.clone(),
    };

    output.progress(&format!(
        "Deploying {} to {}",
        request.build_version, config.repository
    ));
    output.start_timer();

    let submitted = PagesDeploy::new(request).submit(&api, output).await?;
    let finished = submitted.poll_until_terminal(&api, output).await?;

    finished.outcome().into_result().map_err(Error::from)
}
