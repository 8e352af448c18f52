use std::collections::HashSet;

use crate::domain::ticket::{DashboardTicket, RawTicket};

/// Statuses that never reach the dashboard, even when an upstream filter
/// lets one slip through.
pub const IGNORED_STATUSES: [&str; 3] = ["Resolved", "Closed", "Cancelled"];

/// The group count additionally ignores scheduled work, which is not
/// actionable today.
pub const GROUP_IGNORED_STATUSES: [&str; 4] = ["Resolved", "Closed", "Cancelled", "Scheduled"];

/// Merges the display batches, in declared query order, into unique
/// dashboard rows. The first occurrence of an id wins; records without an
/// id are dropped.
pub fn reconcile(batches: &[Vec<RawTicket>]) -> Vec<DashboardTicket> {
    let mut seen = HashSet::new();
    let mut tickets = Vec::new();

    for raw in batches.iter().flatten() {
        if is_ignored(raw, &IGNORED_STATUSES) {
            continue;
        }
        let Some(ticket) = DashboardTicket::from_raw(raw) else {
            continue;
        };
        if seen.insert(ticket.id) {
            tickets.push(ticket);
        }
    }

    tickets
}

/// Headline metric for the group query: how many of its tickets are
/// actionable. Computed from that query alone, never merged with the
/// display rows.
pub fn actionable_count(tickets: &[RawTicket]) -> usize {
    let mut seen = HashSet::new();
    tickets
        .iter()
        .filter(|raw| !is_ignored(raw, &GROUP_IGNORED_STATUSES))
        .filter_map(|raw| raw.id)
        .filter(|id| seen.insert(*id))
        .count()
}

fn is_ignored(ticket: &RawTicket, ignored: &[&str]) -> bool {
    ticket
        .status_name
        .as_deref()
        .is_some_and(|status| ignored.contains(&status))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: Option<u64>, status: &str, title: &str) -> RawTicket {
        RawTicket {
            id,
            status_name: Some(status.to_string()),
            title: Some(title.to_string()),
            ..RawTicket::default()
        }
    }

    #[test]
    fn maps_the_printer_ticket() {
        let batch = vec![RawTicket {
            id: Some(1),
            status_name: Some("New".to_string()),
            title: Some("Printer down".to_string()),
            responsible_group_name: Some("Help Desk".to_string()),
            ..RawTicket::default()
        }];

        let tickets = reconcile(&[batch]);

        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id, 1);
        assert_eq!(tickets[0].title, "Printer down");
        assert_eq!(tickets[0].assigned_to, "Help Desk");
        assert_eq!(tickets[0].status, "New");
    }

    #[test]
    fn first_query_wins_across_batches() {
        let first = vec![raw(Some(42), "New", "from query one")];
        let second = vec![raw(Some(42), "In Process", "from query two")];

        let tickets = reconcile(&[first, second]);

        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].title, "from query one");
    }

    #[test]
    fn preserves_first_seen_order() {
        let first = vec![raw(Some(3), "New", "c"), raw(Some(1), "New", "a")];
        let second = vec![raw(Some(1), "New", "a again"), raw(Some(2), "New", "b")];

        let ids: Vec<u64> = reconcile(&[first, second]).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn drops_terminal_statuses() {
        let batch = vec![
            raw(Some(1), "Resolved", "done"),
            raw(Some(2), "Closed", "done"),
            raw(Some(3), "Cancelled", "gone"),
            raw(Some(4), "On Hold", "waiting"),
        ];

        let tickets = reconcile(&[batch]);
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id, 4);
    }

    #[test]
    fn drops_records_without_an_id() {
        let batch = vec![raw(None, "New", "stray"), raw(Some(7), "New", "kept")];

        let tickets = reconcile(&[batch]);
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id, 7);
    }

    #[test]
    fn no_duplicate_ids_survive() {
        let batches = vec![
            vec![raw(Some(1), "New", "a"), raw(Some(1), "New", "a dup")],
            vec![raw(Some(2), "New", "b"), raw(Some(1), "On Hold", "a again")],
        ];

        let tickets = reconcile(&batches);
        let mut ids: Vec<u64> = tickets.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), tickets.len());
    }

    #[test]
    fn group_count_ignores_scheduled_and_terminal_work() {
        let tickets = vec![
            raw(Some(1), "New", "actionable"),
            raw(Some(2), "Scheduled", "later"),
            raw(Some(3), "Resolved", "done"),
            raw(Some(4), "On Hold", "waiting"),
        ];

        assert_eq!(actionable_count(&tickets), 2);
    }

    #[test]
    fn group_count_dedups_and_skips_idless_records() {
        let tickets = vec![
            raw(Some(1), "New", "a"),
            raw(Some(1), "New", "a dup"),
            raw(None, "New", "stray"),
        ];

        assert_eq!(actionable_count(&tickets), 1);
    }

    #[test]
    fn empty_input_reconciles_to_nothing() {
        assert!(reconcile(&[]).is_empty());
        assert_eq!(actionable_count(&[]), 0);
    }
}
