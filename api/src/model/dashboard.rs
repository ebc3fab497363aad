use kernel::model::{activity::ActivityEvent, space::Space};
use serde::Serialize;

use crate::model::{activity::ActivityResponse, space::SpaceResponse};

/// Everything the dashboard shows for one user. The manager stream is only
/// present for callers with manager privilege; its key is omitted otherwise.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub accessible_spaces: Vec<SpaceResponse>,
    pub own_spaces: Vec<SpaceResponse>,
    pub created_spaces: Vec<SpaceResponse>,
    pub user_stream: Vec<ActivityResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_stream: Option<Vec<ActivityResponse>>,
}

impl DashboardResponse {
    pub fn new(
        accessible_spaces: Vec<Space>,
        own_spaces: Vec<Space>,
        created_spaces: Vec<Space>,
        user_stream: Vec<ActivityEvent>,
        manager_stream: Option<Vec<ActivityEvent>>,
    ) -> Self {
        Self {
            accessible_spaces: to_space_responses(accessible_spaces),
            own_spaces: to_space_responses(own_spaces),
            created_spaces: to_space_responses(created_spaces),
            user_stream: to_activity_responses(user_stream),
            manager_stream: manager_stream.map(to_activity_responses),
        }
    }
}

fn to_space_responses(spaces: Vec<Space>) -> Vec<SpaceResponse> {
    spaces.into_iter().map(SpaceResponse::from).collect()
}

fn to_activity_responses(events: Vec<ActivityEvent>) -> Vec<ActivityResponse> {
    events.into_iter().map(ActivityResponse::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manager_stream_key_is_omitted_for_non_managers() {
        let response = DashboardResponse::new(vec![], vec![], vec![], vec![], None);
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("managerStream").is_none());
        assert_eq!(value["accessibleSpaces"], serde_json::json!([]));
    }

    #[test]
    fn manager_stream_key_is_present_for_managers() {
        let response = DashboardResponse::new(vec![], vec![], vec![], vec![], Some(vec![]));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["managerStream"], serde_json::json!([]));
    }
}
