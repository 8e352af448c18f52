use serde::Serialize;

/// Upstream status classes that count as "active":
/// 1 = New, 2 = In Process, 5 = On Hold.
pub const ACTIVE_STATUS_CLASSES: [u8; 3] = [1, 2, 5];

/// Which active-ticket filter dialect the upstream honors. Older deployments
/// only understand the boolean `IsActive` flag and key the group filter
/// differently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveFilter {
    #[default]
    StatusClasses,
    LegacyIsActive,
}

/// Body of a ticket-search call. Unset fields stay out of the payload
/// entirely; the upstream treats `null` and absent differently.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchFilter {
    #[serde(rename = "MaxResults")]
    pub max_results: u32,
    #[serde(rename = "IsActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(rename = "StatusClassIDs", skip_serializing_if = "Option::is_none")]
    pub status_class_ids: Option<Vec<u8>>,
    #[serde(rename = "ResponsibilityUids", skip_serializing_if = "Option::is_none")]
    pub responsibility_uids: Option<Vec<String>>,
    #[serde(rename = "ResponsibilityGroupIDs", skip_serializing_if = "Option::is_none")]
    pub responsibility_group_ids: Option<Vec<u64>>,
    #[serde(rename = "ResponsibleGroupId", skip_serializing_if = "Option::is_none")]
    pub responsible_group_id: Option<Vec<u64>>,
}

impl SearchFilter {
    /// Filter for the tickets assigned to a list of people.
    pub fn team(uids: Vec<String>, max_results: u32, active: ActiveFilter) -> Self {
        let mut filter = Self::active(active, max_results);
        filter.responsibility_uids = Some(uids);
        filter
    }

    /// Filter for everything in a responsibility group's queue.
    pub fn group(group_id: u64, max_results: u32, active: ActiveFilter) -> Self {
        let mut filter = Self::active(active, max_results);
        match active {
            ActiveFilter::StatusClasses => {
                filter.responsibility_group_ids = Some(vec![group_id]);
            }
            ActiveFilter::LegacyIsActive => {
                filter.responsible_group_id = Some(vec![group_id]);
            }
        }
        filter
    }

    fn active(active: ActiveFilter, max_results: u32) -> Self {
        let mut filter = Self {
            max_results,
            ..Self::default()
        };
        match active {
            ActiveFilter::StatusClasses => {
                filter.status_class_ids = Some(ACTIVE_STATUS_CLASSES.to_vec());
            }
            ActiveFilter::LegacyIsActive => {
                filter.is_active = Some(true);
            }
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn team_filter_uses_status_classes() {
        let filter = SearchFilter::team(
            vec!["uid-1".to_string(), "uid-2".to_string()],
            500,
            ActiveFilter::StatusClasses,
        );

        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "MaxResults": 500,
                "StatusClassIDs": [1, 2, 5],
                "ResponsibilityUids": ["uid-1", "uid-2"]
            })
        );
    }

    #[test]
    fn group_filter_uses_status_classes() {
        let filter = SearchFilter::group(3974, 5000, ActiveFilter::StatusClasses);

        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "MaxResults": 5000,
                "StatusClassIDs": [1, 2, 5],
                "ResponsibilityGroupIDs": [3974]
            })
        );
    }

    #[test]
    fn legacy_team_filter_uses_is_active() {
        let filter = SearchFilter::team(vec!["uid-1".to_string()], 100, ActiveFilter::LegacyIsActive);

        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "MaxResults": 100,
                "IsActive": true,
                "ResponsibilityUids": ["uid-1"]
            })
        );
    }

    #[test]
    fn legacy_group_filter_keys_the_group_differently() {
        let filter = SearchFilter::group(3974, 100, ActiveFilter::LegacyIsActive);

        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "MaxResults": 100,
                "IsActive": true,
                "ResponsibleGroupId": [3974]
            })
        );
    }
}
