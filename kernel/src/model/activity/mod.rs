pub mod event;

use chrono::{DateTime, Utc};
use derive_new::new;
use strum::{AsRefStr, EnumString};
use uuid::Uuid;

use crate::model::id::{ActivityId, UserId};

/// Entity types an activity event may point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    User,
    Space,
}

/// Reference to an entity, with a display-label snapshot taken at record time.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub entity_id: Uuid,
    pub label: String,
}

/// Immutable record of "actor verb object (target)". Append-only; never
/// mutated or deleted here.
#[derive(Debug, Clone)]
pub struct ActivityEvent {
    pub activity_id: ActivityId,
    pub actor_id: UserId,
    pub actor_name: String,
    pub verb: String,
    pub object: EntityRef,
    pub target: Option<EntityRef>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}
