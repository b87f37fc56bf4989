use crate::assess::{run_lung, run_prostate, run_triage, AssessArgs};
use crate::remote::{self, BatchArgs, DomainArgs, PredictArgs, TrainArgs, UploadArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use cancer_screen::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Cancer Screen",
    about = "Score cancer risk questionnaires locally or through the prediction service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a questionnaire answer file with the local heuristics
    Assess {
        #[command(subcommand)]
        command: AssessCommand,
    },
    /// Call the remote prediction service
    Remote {
        #[command(subcommand)]
        command: RemoteCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AssessCommand {
    /// Auto-detect the most likely cancer type from the unified questionnaire
    Triage(AssessArgs),
    /// Score the lung questionnaire
    Lung(AssessArgs),
    /// Score prostate clinical parameters
    Prostate(AssessArgs),
}

#[derive(Subcommand, Debug)]
enum RemoteCommand {
    /// Request a single model prediction
    Predict(PredictArgs),
    /// Train a model on the bundled dataset or an uploaded CSV
    Train(TrainArgs),
    /// Run the model over every row of a CSV and save the output
    PredictBatch(BatchArgs),
    /// Upload a training dataset
    Upload(UploadArgs),
    /// Show training status and metrics for a model
    Status(DomainArgs),
    /// Check that the prediction service is up
    Health,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess { command } => match command {
            AssessCommand::Triage(args) => run_triage(args),
            AssessCommand::Lung(args) => run_lung(args),
            AssessCommand::Prostate(args) => run_prostate(args),
        },
        Command::Remote { command } => {
            let client = remote::connect()?;
            match command {
                RemoteCommand::Predict(args) => remote::predict(&client, args).await,
                RemoteCommand::Train(args) => remote::train(&client, args).await,
                RemoteCommand::PredictBatch(args) => remote::predict_batch(&client, args).await,
                RemoteCommand::Upload(args) => remote::upload(&client, args).await,
                RemoteCommand::Status(args) => remote::status(&client, args).await,
                RemoteCommand::Health => remote::health(&client).await,
            }
        }
    }
}
