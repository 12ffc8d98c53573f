use crate::check::{run_check, run_notices, CheckCommand, NoticesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hostel_hub::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HostelHub",
    about = "Serve and inspect the student-hostel notice board and credential rules",
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
    /// Print the notices a role would see on the marquee
    Notices(NoticesArgs),
    /// Check a credential candidate against the sign-up rules
    Check {
        #[command(subcommand)]
        command: CheckCommand,
    },
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
        Command::Notices(args) => run_notices(args),
        Command::Check { command } => {
            run_check(command);
            Ok(())
        }
    }
}
