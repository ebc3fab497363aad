use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{GroupId, UserId},
    user::User,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_current_user(&self, user_id: UserId) -> AppResult<Option<User>>;
    /// Role groups the user belongs to, across all spaces.
    async fn find_group_ids(&self, user_id: UserId) -> AppResult<Vec<GroupId>>;
}
