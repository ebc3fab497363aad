use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{SpaceId, UserId},
    space::{event::CreateSpace, Space},
};

#[async_trait]
pub trait SpaceRepository: Send + Sync {
    /// Spaces the user holds an `access_space` grant for, directly or via
    /// group membership, newest first.
    async fn find_accessible_by_user(&self, user_id: UserId) -> AppResult<Vec<Space>>;
    /// Spaces created by the user, newest first.
    async fn find_created_by(&self, user_id: UserId) -> AppResult<Vec<Space>>;
    async fn find_by_id(&self, space_id: SpaceId) -> AppResult<Option<Space>>;
    /// Creates the space together with its three role groups in one step.
    async fn create(&self, event: CreateSpace, created_by: UserId) -> AppResult<Space>;
}
