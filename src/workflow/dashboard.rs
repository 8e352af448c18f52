use crate::context::AppContext;
use crate::domain::query::{ActiveFilter, SearchFilter};
use crate::domain::ticket::{DashboardOutput, RawTicket};
use crate::error::AppResult;
use crate::reconcile;

pub const DEFAULT_TEAM_MAX_RESULTS: u32 = 500;
pub const DEFAULT_GROUP_MAX_RESULTS: u32 = 5000;

/// Which queries to issue and how. Queries run sequentially in declared
/// order: team first (display rows), then group (headline count).
#[derive(Debug, Clone)]
pub struct DashboardQueryPlan {
    pub team_uids: Vec<String>,
    pub group_id: Option<u64>,
    pub team_max_results: u32,
    pub group_max_results: u32,
    pub active_filter: ActiveFilter,
}

/// Runs the query plan and assembles the dashboard document. A failed
/// query is logged and contributes an empty result set; it never aborts
/// its siblings, so this function itself cannot fail.
pub async fn build_dashboard(ctx: &AppContext, plan: &DashboardQueryPlan) -> DashboardOutput {
    if plan.team_uids.is_empty() && plan.group_id.is_none() {
        eprintln!("Warning: no team UIDs or group id configured; nothing to query.");
        return DashboardOutput::default();
    }

    let mut display_outcomes = Vec::new();
    if !plan.team_uids.is_empty() {
        let filter = SearchFilter::team(
            plan.team_uids.clone(),
            plan.team_max_results,
            plan.active_filter,
        );
        display_outcomes.push((
            "team-ticket search",
            ctx.ticket_source.search(&filter).await,
        ));
    }
    let tickets = reconcile::reconcile(&keep_successes(display_outcomes));

    let mut group_count = 0;
    if let Some(group_id) = plan.group_id {
        let filter = SearchFilter::group(group_id, plan.group_max_results, plan.active_filter);
        match ctx.ticket_source.search(&filter).await {
            Ok(group_tickets) => {
                eprintln!("DEBUG: group search returned {} tickets.", group_tickets.len());
                group_count = reconcile::actionable_count(&group_tickets);
            }
            Err(error) => eprintln!("Warning: group count search failed: {error}"),
        }
    }

    DashboardOutput {
        tickets,
        group_count,
    }
}

/// Folds per-query outcomes into the batches that succeeded, logging the
/// ones that did not.
fn keep_successes(
    outcomes: Vec<(&'static str, AppResult<Vec<RawTicket>>)>,
) -> Vec<Vec<RawTicket>> {
    outcomes
        .into_iter()
        .filter_map(|(label, outcome)| match outcome {
            Ok(batch) => Some(batch),
            Err(error) => {
                eprintln!("Warning: {label} failed: {error}");
                None
            }
        })
        .collect()
}
