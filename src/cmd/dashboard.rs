use crate::context::AppContext;
use crate::domain::query::ActiveFilter;
use crate::domain::ticket::DashboardOutput;
use crate::workflow::dashboard::{self, DashboardQueryPlan};

#[derive(Debug, Clone)]
pub struct DashboardCommandArgs {
    pub team_uids: Vec<String>,
    pub group_id: Option<u64>,
    pub team_max_results: u32,
    pub group_max_results: u32,
    pub legacy_active_filter: bool,
}

pub async fn run(ctx: &AppContext, args: DashboardCommandArgs) -> DashboardOutput {
    let active_filter = if args.legacy_active_filter {
        ActiveFilter::LegacyIsActive
    } else {
        ActiveFilter::StatusClasses
    };

    let plan = DashboardQueryPlan {
        team_uids: args.team_uids,
        group_id: args.group_id,
        team_max_results: args.team_max_results,
        group_max_results: args.group_max_results,
        active_filter,
    };

    dashboard::build_dashboard(ctx, &plan).await
}
