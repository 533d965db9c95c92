use clap::{Parser, Subcommand};
use scaffold_upgrader::config::DEFAULT_PACKAGE;
use scaffold_upgrader::utils::ANSWERS_FILE;
use scaffold_upgrader::{
    AssumeYes, DialoguerPrompt, NpmRegistry, Prompt, UpgradeConfig, UpgradeOutcome, Upgrader,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Scaffold upgrader - brings a generated library project up to date with the latest templates
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Update managed files to the latest generator templates
    Upgrade {
        /// Root of the generated project
        #[arg(short, long, env = "SCAFFOLD_PROJECT_DIR", default_value = ".")]
        project: PathBuf,

        /// Directory holding the generator's templates
        #[arg(short, long, env = "SCAFFOLD_TEMPLATES_DIR")]
        templates: PathBuf,

        /// JSON manifest to use instead of the built-in list of managed files
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Answers record written when the project was generated
        #[arg(long, env = "SCAFFOLD_ANSWERS_FILE", default_value = ANSWERS_FILE)]
        answers_file: String,

        /// Generator package to check against the registry
        #[arg(long, env = "SCAFFOLD_PACKAGE", default_value = DEFAULT_PACKAGE)]
        package: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,

        /// Skip checking for and installing a newer generator
        #[arg(long)]
        skip_version_check: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let Command::Upgrade {
        project,
        templates,
        manifest,
        answers_file,
        package,
        yes,
        skip_version_check,
    } = args.command;

    let mut config = UpgradeConfig::new(project, templates);
    config.manifest_path = manifest;
    config.answers_file = answers_file;
    config.package = package;
    config.assume_yes = yes;
    config.skip_version_check = skip_version_check;

    let prompt: Box<dyn Prompt> = if config.assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(DialoguerPrompt)
    };

    let upgrader = Upgrader::new(config, Box::new(NpmRegistry::new()), prompt);
    let outcome = upgrader.run().await?;

    if let UpgradeOutcome::Completed(report) = &outcome {
        for failure in &report.failures {
            error!(file = %failure.file, reason = %failure.reason, "Managed file was not upgraded");
        }
        if report.is_success() {
            info!("Upgrade complete");
        }
    }

    Ok(ExitCode::from(outcome.exit_code() as u8))
}
