use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;
use kernel::model::{
    id::{GroupId, SpaceId, UserId},
    space::{event::CreateSpace, RoleGroups, Space, SpaceOwner},
};
use kernel::repository::space::SpaceRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::space::SpaceRow, ConnectionPool};

pub const ACCESS_SPACE: &str = "access_space";

#[derive(new)]
pub struct SpaceRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SpaceRepository for SpaceRepositoryImpl {
    async fn find_accessible_by_user(&self, user_id: UserId) -> AppResult<Vec<Space>> {
        // A space is accessible when an access_space grant exists for the
        // user directly or for any group the user belongs to.
        let rows: Vec<SpaceRow> = sqlx::query_as(
            r#"
                SELECT
                    s.space_id,
                    s.space_name,
                    s.created_at,
                    s.expires_at,
                    s.created_by AS owned_by,
                    u.user_name AS owner_name,
                    s.team_group_id,
                    s.members_group_id,
                    s.admins_group_id
                FROM spaces AS s
                INNER JOIN users AS u ON s.created_by = u.user_id
                WHERE EXISTS (
                    SELECT 1
                    FROM grants AS g
                    WHERE g.space_id = s.space_id
                      AND g.capability = $2
                      AND (
                          g.user_id = $1
                          OR g.group_id IN (
                              SELECT gm.group_id
                              FROM group_members AS gm
                              WHERE gm.user_id = $1
                          )
                      )
                )
                ORDER BY s.created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(ACCESS_SPACE)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Space::from).collect())
    }

    async fn find_created_by(&self, user_id: UserId) -> AppResult<Vec<Space>> {
        let rows: Vec<SpaceRow> = sqlx::query_as(
            r#"
                SELECT
                    s.space_id,
                    s.space_name,
                    s.created_at,
                    s.expires_at,
                    s.created_by AS owned_by,
                    u.user_name AS owner_name,
                    s.team_group_id,
                    s.members_group_id,
                    s.admins_group_id
                FROM spaces AS s
                INNER JOIN users AS u ON s.created_by = u.user_id
                WHERE s.created_by = $1
                ORDER BY s.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Space::from).collect())
    }

    async fn find_by_id(&self, space_id: SpaceId) -> AppResult<Option<Space>> {
        let row: Option<SpaceRow> = sqlx::query_as(
            r#"
                SELECT
                    s.space_id,
                    s.space_name,
                    s.created_at,
                    s.expires_at,
                    s.created_by AS owned_by,
                    u.user_name AS owner_name,
                    s.team_group_id,
                    s.members_group_id,
                    s.admins_group_id
                FROM spaces AS s
                INNER JOIN users AS u ON s.created_by = u.user_id
                WHERE s.space_id = $1
            "#,
        )
        .bind(space_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Space::from))
    }

    async fn create(&self, event: CreateSpace, created_by: UserId) -> AppResult<Space> {
        let mut tx = self.db.begin().await?;

        // Invariant: a space always comes with exactly three role groups;
        // they are created in the same transaction as the space row.
        let role_groups = RoleGroups {
            team: GroupId::new(),
            members: GroupId::new(),
            admins: GroupId::new(),
        };
        for (group_id, suffix) in [
            (role_groups.team, "team"),
            (role_groups.members, "members"),
            (role_groups.admins, "admins"),
        ] {
            sqlx::query("INSERT INTO role_groups (group_id, group_name) VALUES ($1, $2)")
                .bind(group_id)
                .bind(format!("{}-{}", event.space_name, suffix))
                .execute(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        }

        let space_id = SpaceId::new();
        let created_at: DateTime<Utc> = sqlx::query_scalar(
            r#"
                INSERT INTO spaces
                (space_id, space_name, expires_at, created_by,
                 team_group_id, members_group_id, admins_group_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING created_at
            "#,
        )
        .bind(space_id)
        .bind(&event.space_name)
        .bind(event.expires_at)
        .bind(created_by)
        .bind(role_groups.team)
        .bind(role_groups.members)
        .bind(role_groups.admins)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        // each fresh role group receives an access grant on its space
        for group_id in [role_groups.team, role_groups.members, role_groups.admins] {
            sqlx::query(
                "INSERT INTO grants (capability, space_id, group_id) VALUES ($1, $2, $3)",
            )
            .bind(ACCESS_SPACE)
            .bind(space_id)
            .bind(group_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        }

        let owner_name: String =
            sqlx::query_scalar("SELECT user_name FROM users WHERE user_id = $1")
                .bind(created_by)
                .fetch_one(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(Space {
            space_id,
            space_name: event.space_name,
            created_at,
            expires_at: event.expires_at,
            created_by: SpaceOwner {
                owner_id: created_by,
                owner_name,
            },
            role_groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn insert_user(pool: &sqlx::PgPool, name: &str) -> UserId {
        let user_id = UserId::new();
        sqlx::query(
            "INSERT INTO users (user_id, user_name, email, password_hash) VALUES ($1, $2, $3, $4)",
        )
        .bind(user_id)
        .bind(name)
        .bind(format!("{name}@example.com"))
        .bind("dummy")
        .execute(pool)
        .await
        .unwrap();
        user_id
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_create_space(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let user_id = insert_user(&pool, "creator").await;
        let repo = SpaceRepositoryImpl::new(ConnectionPool::new(pool));

        let space = repo
            .create(CreateSpace::new("Engineering".into(), None), user_id)
            .await?;

        let found = repo.find_by_id(space.space_id).await?;
        assert!(found.is_some());

        let found = found.unwrap();
        assert_eq!(found.space_name, "Engineering");
        assert!(found.expires_at.is_none());
        assert_eq!(found.created_by.owner_id, user_id);
        assert_eq!(found.created_by.owner_name, "creator");
        assert_eq!(found.role_groups, space.role_groups);

        let created = repo.find_created_by(user_id).await?;
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].space_id, space.space_id);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_group_membership_makes_space_accessible(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let creator = insert_user(&pool, "creator").await;
        let member = insert_user(&pool, "member").await;
        let outsider = insert_user(&pool, "outsider").await;
        let repo = SpaceRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let space = repo
            .create(CreateSpace::new("Engineering".into(), None), creator)
            .await?;

        // no grants yet: nobody sees the space, not even its creator
        assert!(repo.find_accessible_by_user(creator).await?.is_empty());
        assert!(repo.find_accessible_by_user(member).await?.is_empty());

        sqlx::query("INSERT INTO group_members (group_id, user_id) VALUES ($1, $2)")
            .bind(space.role_groups.members)
            .bind(member)
            .execute(&pool)
            .await?;

        let accessible = repo.find_accessible_by_user(member).await?;
        assert_eq!(accessible.len(), 1);
        assert_eq!(accessible[0].space_id, space.space_id);

        assert!(repo.find_accessible_by_user(outsider).await?.is_empty());

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_direct_grant_makes_space_accessible(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let creator = insert_user(&pool, "creator").await;
        let viewer = insert_user(&pool, "viewer").await;
        let repo = SpaceRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let space = repo
            .create(CreateSpace::new("Engineering".into(), None), creator)
            .await?;

        sqlx::query("INSERT INTO grants (capability, space_id, user_id) VALUES ($1, $2, $3)")
            .bind(ACCESS_SPACE)
            .bind(space.space_id)
            .bind(viewer)
            .execute(&pool)
            .await?;

        let accessible = repo.find_accessible_by_user(viewer).await?;
        assert_eq!(accessible.len(), 1);

        Ok(())
    }
}
