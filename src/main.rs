mod cmd;
mod config;
mod context;
mod domain;
mod emit;
mod error;
mod infra;
mod reconcile;
mod services;
mod workflow;

use std::io;
use std::sync::Arc;

use clap::Parser;

use crate::cmd::dashboard::{self, DashboardCommandArgs};
use crate::config::Credentials;
use crate::context::AppContext;
use crate::domain::ticket::DashboardOutput;
use crate::error::AppResult;
use crate::infra::tdx::TdxClient;
use crate::workflow::dashboard::{DEFAULT_GROUP_MAX_RESULTS, DEFAULT_TEAM_MAX_RESULTS};

#[derive(Parser)]
#[command(
    name = "tdx-bridge",
    author,
    version,
    about = "TeamDynamix ticket dashboard bridge"
)]
struct Cli {
    /// Responsibility UID whose tickets feed the display cards; repeatable.
    #[arg(long = "uid", value_name = "UID")]
    team_uids: Vec<String>,
    /// Responsibility group whose actionable-ticket count heads the dashboard.
    #[arg(long, value_name = "ID")]
    group_id: Option<u64>,
    /// Result cap for the team query.
    #[arg(long, default_value_t = DEFAULT_TEAM_MAX_RESULTS)]
    team_max_results: u32,
    /// Result cap for the group count query.
    #[arg(long, default_value_t = DEFAULT_GROUP_MAX_RESULTS)]
    group_max_results: u32,
    /// Filter with the boolean IsActive flag instead of StatusClassIDs, for
    /// upstream versions that predate status classes.
    #[arg(long)]
    legacy_active_filter: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let output = recover(run(cli).await);

    if let Err(error) = emit::write_document(io::stdout().lock(), &output) {
        eprintln!("Error: {error}");
    }
}

async fn run(cli: Cli) -> AppResult<DashboardOutput> {
    let credentials = Credentials::from_env()?;
    let client = TdxClient::connect(&credentials).await?;
    let context = AppContext::new(Arc::new(client));

    let args = DashboardCommandArgs {
        team_uids: cli.team_uids,
        group_id: cli.group_id,
        team_max_results: cli.team_max_results,
        group_max_results: cli.group_max_results,
        legacy_active_filter: cli.legacy_active_filter,
    };

    Ok(dashboard::run(&context, args).await)
}

/// The dashboard consumer parses stdout unconditionally, so every failure
/// path still emits the empty document and the process exits 0. Details go
/// to stderr only.
fn recover(outcome: AppResult<DashboardOutput>) -> DashboardOutput {
    outcome.unwrap_or_else(|error| {
        eprintln!("Error: {error}");
        DashboardOutput::default()
    })
}
