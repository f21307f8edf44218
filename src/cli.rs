// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};

use selida::output::OutputMode;

#[derive(Parser)]
#[command(name = "selida")]
#[command(about = "Deploy an uploaded artifact to a Pages site and track it to completion")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "normal")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Normal,
    Quiet,
    Json,
}

impl From<OutputFormat> for OutputMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Normal => OutputMode::Normal,
            OutputFormat::Quiet => OutputMode::Quiet,
            OutputFormat::Json => OutputMode::Json,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new selida.yml configuration file
    Init {
        /// Repository slug (owner/name)
        #[arg(short, long)]
        repository: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Submit a deployment and poll it until it settles
    Deploy {
        /// Signed URL of the already-uploaded artifact
        #[arg(long)]
        artifact_url: String,

        /// Build version label for this deployment
        #[arg(long)]
        build_version: String,

        /// OIDC identity token forwarded to the creation call
        #[arg(long, env = "SELIDA_OIDC_TOKEN", hide_env_values = true)]
        id_token: Option<String>,

        /// Deploy as a preview rather than to the live site
        #[arg(long)]
        preview: bool,
    },

    /// Query the current status of a deployment
    Status {
        /// Deployment id
        deployment_id: String,
    },

    /// Cancel an in-flight deployment
    Cancel {
        /// Deployment id
        deployment_id: String,
    },
}
