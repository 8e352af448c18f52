use serde::{Deserialize, Serialize};

pub const UNASSIGNED_OWNER: &str = "Unassigned";
pub const UNKNOWN_REQUESTOR: &str = "Unknown";

/// Ticket record as returned by the upstream search endpoint. The field
/// names follow the upstream wire format; everything the dashboard does not
/// use is ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTicket {
    #[serde(rename = "ID")]
    pub id: Option<u64>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "StatusName")]
    pub status_name: Option<String>,
    #[serde(rename = "ResponsibleFullName")]
    pub responsible_full_name: Option<String>,
    #[serde(rename = "ResponsibleGroupName")]
    pub responsible_group_name: Option<String>,
    #[serde(rename = "RequestorName")]
    pub requestor_name: Option<String>,
}

/// Flat record the dashboard renders as a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardTicket {
    pub id: u64,
    pub title: String,
    #[serde(rename = "assignedTo")]
    pub assigned_to: String,
    pub status: String,
    pub requestor: String,
}

impl DashboardTicket {
    /// Maps an upstream record into display form. Returns `None` for a
    /// record with no identity, which the dashboard cannot key on.
    pub fn from_raw(raw: &RawTicket) -> Option<Self> {
        let id = raw.id?;
        let assigned_to = non_empty(&raw.responsible_full_name)
            .or_else(|| non_empty(&raw.responsible_group_name))
            .unwrap_or(UNASSIGNED_OWNER);
        let requestor = non_empty(&raw.requestor_name).unwrap_or(UNKNOWN_REQUESTOR);

        Some(Self {
            id,
            title: raw.title.clone().unwrap_or_default(),
            assigned_to: assigned_to.to_string(),
            status: raw.status_name.clone().unwrap_or_default(),
            requestor: requestor.to_string(),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// The single document the bridge prints on stdout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardOutput {
    pub tickets: Vec<DashboardTicket>,
    #[serde(rename = "groupCount")]
    pub group_count: usize,
}
