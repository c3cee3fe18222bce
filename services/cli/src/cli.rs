use clap::{Args, Parser, Subcommand};

use career_ai::config::AppConfig;
use career_ai::error::AppError;
use career_ai::telemetry;

use crate::render;

#[derive(Parser, Debug)]
#[command(
    name = "Career & Skills Advisor",
    about = "Run career assessments and browse the career catalog from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a full assessment for the provided profile
    Assess(AssessArgs),
    /// List the career catalog with required skills per path
    Catalog,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Your name
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Current education level
    #[arg(long)]
    pub(crate) education: Option<String>,
    /// Field of study or work
    #[arg(long)]
    pub(crate) field: Option<String>,
    /// Comma-separated list of current skills
    #[arg(long)]
    pub(crate) skills: Option<String>,
    /// Areas of interest, free text
    #[arg(long)]
    pub(crate) interests: Option<String>,
    /// Career goals, free text
    #[arg(long)]
    pub(crate) career_goals: Option<String>,
    /// Target timeline for the goals
    #[arg(long)]
    pub(crate) timeline: Option<String>,
    /// Emit the raw analysis payload as JSON instead of formatted text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Assess(args) => render::run_assessment(args, &config).await,
        Command::Catalog => {
            render::run_catalog();
            Ok(())
        }
    }
}
