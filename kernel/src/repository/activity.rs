use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    activity::{event::RecordActivity, ActivityEvent},
    id::{ActivityId, SpaceId},
};

/// Feeds are fixed-size snapshots, not paginated streams.
pub const FEED_LIMIT: i64 = 10;

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn record(&self, event: RecordActivity) -> AppResult<ActivityId>;
    /// Recent public events whose action object is a user or a space.
    async fn manager_feed(&self) -> AppResult<Vec<ActivityEvent>>;
    /// Recent events targeting one of the given spaces.
    async fn user_feed(&self, space_ids: &[SpaceId]) -> AppResult<Vec<ActivityEvent>>;
}
