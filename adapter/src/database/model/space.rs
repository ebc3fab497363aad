use kernel::model::{
    id::{GroupId, SpaceId, UserId},
    space::{RoleGroups, Space, SpaceOwner},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct SpaceRow {
    pub space_id: SpaceId,
    pub space_name: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub owned_by: UserId,
    pub owner_name: String,
    pub team_group_id: GroupId,
    pub members_group_id: GroupId,
    pub admins_group_id: GroupId,
}

impl From<SpaceRow> for Space {
    fn from(value: SpaceRow) -> Self {
        let SpaceRow {
            space_id,
            space_name,
            created_at,
            expires_at,
            owned_by,
            owner_name,
            team_group_id,
            members_group_id,
            admins_group_id,
        } = value;
        Space {
            space_id,
            space_name,
            created_at,
            expires_at,
            created_by: SpaceOwner {
                owner_id: owned_by,
                owner_name,
            },
            role_groups: RoleGroups {
                team: team_group_id,
                members: members_group_id,
                admins: admins_group_id,
            },
        }
    }
}
