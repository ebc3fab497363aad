use chrono::{DateTime, Utc};
use kernel::model::{
    activity::{ActivityEvent, EntityRef},
    id::{ActivityId, UserId},
};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub activity_id: ActivityId,
    pub actor_id: UserId,
    pub actor_name: String,
    pub verb: String,
    pub object: EntityRefResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<EntityRefResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<ActivityEvent> for ActivityResponse {
    fn from(value: ActivityEvent) -> Self {
        let ActivityEvent {
            activity_id,
            actor_id,
            actor_name,
            verb,
            object,
            target,
            is_public: _,
            created_at,
        } = value;
        Self {
            activity_id,
            actor_id,
            actor_name,
            verb,
            object: object.into(),
            target: target.map(EntityRefResponse::from),
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRefResponse {
    pub kind: String,
    pub entity_id: Uuid,
    pub label: String,
}

impl From<EntityRef> for EntityRefResponse {
    fn from(value: EntityRef) -> Self {
        let EntityRef {
            kind,
            entity_id,
            label,
        } = value;
        Self {
            kind: kind.as_ref().to_string(),
            entity_id,
            label,
        }
    }
}
