use std::str::FromStr;

use kernel::model::{
    activity::{ActivityEvent, EntityKind, EntityRef},
    id::{ActivityId, UserId},
};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub struct ActivityRow {
    pub activity_id: ActivityId,
    pub actor_id: UserId,
    pub actor_name: String,
    pub verb: String,
    pub object_kind: String,
    pub object_id: Uuid,
    pub object_label: String,
    pub target_kind: Option<String>,
    pub target_id: Option<Uuid>,
    pub target_label: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

fn parse_kind(raw: &str) -> Result<EntityKind, AppError> {
    EntityKind::from_str(raw).map_err(|e| AppError::ConversionEntityError(e.to_string()))
}

impl TryFrom<ActivityRow> for ActivityEvent {
    type Error = AppError;

    fn try_from(value: ActivityRow) -> Result<Self, Self::Error> {
        let ActivityRow {
            activity_id,
            actor_id,
            actor_name,
            verb,
            object_kind,
            object_id,
            object_label,
            target_kind,
            target_id,
            target_label,
            is_public,
            created_at,
        } = value;

        let object = EntityRef::new(parse_kind(&object_kind)?, object_id, object_label);
        let target = match (target_kind, target_id, target_label) {
            (Some(kind), Some(id), Some(label)) => Some(EntityRef::new(parse_kind(&kind)?, id, label)),
            (None, None, None) => None,
            _ => {
                return Err(AppError::ConversionEntityError(format!(
                    "activity {activity_id} has a partial target"
                )))
            }
        };

        Ok(ActivityEvent {
            activity_id,
            actor_id,
            actor_name,
            verb,
            object,
            target,
            is_public,
            created_at,
        })
    }
}
