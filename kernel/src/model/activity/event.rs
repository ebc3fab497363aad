use derive_new::new;

use crate::model::{activity::EntityRef, id::UserId};

#[derive(Debug, new)]
pub struct RecordActivity {
    pub actor_id: UserId,
    pub verb: String,
    pub object: EntityRef,
    pub target: Option<EntityRef>,
    pub is_public: bool,
}
