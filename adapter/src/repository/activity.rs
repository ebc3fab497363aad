use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    activity::{event::RecordActivity, ActivityEvent, EntityKind},
    id::{ActivityId, SpaceId},
};
use kernel::repository::activity::{ActivityRepository, FEED_LIMIT};
use shared::error::{AppError, AppResult};
use uuid::Uuid;

use crate::database::{model::activity::ActivityRow, ConnectionPool};

#[derive(new)]
pub struct ActivityRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ActivityRepository for ActivityRepositoryImpl {
    async fn record(&self, event: RecordActivity) -> AppResult<ActivityId> {
        let activity_id = ActivityId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO activities
                (activity_id, actor_id, verb, object_kind, object_id, object_label,
                 target_kind, target_id, target_label, is_public)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(activity_id)
        .bind(event.actor_id)
        .bind(&event.verb)
        .bind(event.object.kind.as_ref())
        .bind(event.object.entity_id)
        .bind(&event.object.label)
        .bind(event.target.as_ref().map(|t| t.kind.as_ref().to_string()))
        .bind(event.target.as_ref().map(|t| t.entity_id))
        .bind(event.target.as_ref().map(|t| t.label.clone()))
        .bind(event.is_public)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no activity record has been created".into(),
            ));
        }

        Ok(activity_id)
    }

    async fn manager_feed(&self) -> AppResult<Vec<ActivityEvent>> {
        let rows: Vec<ActivityRow> = sqlx::query_as(
            r#"
                SELECT
                    a.activity_id,
                    a.actor_id,
                    u.user_name AS actor_name,
                    a.verb,
                    a.object_kind,
                    a.object_id,
                    a.object_label,
                    a.target_kind,
                    a.target_id,
                    a.target_label,
                    a.is_public,
                    a.created_at
                FROM activities AS a
                INNER JOIN users AS u ON a.actor_id = u.user_id
                WHERE a.is_public
                  AND a.object_kind IN ($1, $2)
                ORDER BY a.created_at DESC
                LIMIT $3
            "#,
        )
        .bind(EntityKind::User.as_ref())
        .bind(EntityKind::Space.as_ref())
        .bind(FEED_LIMIT)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(ActivityEvent::try_from).collect()
    }

    async fn user_feed(&self, space_ids: &[SpaceId]) -> AppResult<Vec<ActivityEvent>> {
        if space_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = space_ids.iter().map(|id| id.raw()).collect();

        let rows: Vec<ActivityRow> = sqlx::query_as(
            r#"
                SELECT
                    a.activity_id,
                    a.actor_id,
                    u.user_name AS actor_name,
                    a.verb,
                    a.object_kind,
                    a.object_id,
                    a.object_label,
                    a.target_kind,
                    a.target_id,
                    a.target_label,
                    a.is_public,
                    a.created_at
                FROM activities AS a
                INNER JOIN users AS u ON a.actor_id = u.user_id
                WHERE a.target_kind = $1
                  AND a.target_id = ANY($2)
                ORDER BY a.created_at DESC
                LIMIT $3
            "#,
        )
        .bind(EntityKind::Space.as_ref())
        .bind(ids)
        .bind(FEED_LIMIT)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(ActivityEvent::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};
    use kernel::model::activity::EntityRef;
    use kernel::model::id::UserId;

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

    async fn insert_activity(
        pool: &sqlx::PgPool,
        actor_id: UserId,
        verb: &str,
        object_kind: &str,
        target_id: Option<Uuid>,
        is_public: bool,
        created_at: DateTime<Utc>,
    ) {
        sqlx::query(
            r#"
                INSERT INTO activities
                (activity_id, actor_id, verb, object_kind, object_id, object_label,
                 target_kind, target_id, target_label, is_public, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(ActivityId::new())
        .bind(actor_id)
        .bind(verb)
        .bind(object_kind)
        .bind(Uuid::new_v4())
        .bind("some label")
        .bind(target_id.map(|_| "space"))
        .bind(target_id)
        .bind(target_id.map(|_| "target label"))
        .bind(is_public)
        .bind(created_at)
        .execute(pool)
        .await
        .unwrap();
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_record_and_read_back(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let actor = insert_user(&pool, "creator").await;
        let repo = ActivityRepositoryImpl::new(ConnectionPool::new(pool));

        let space_id = Uuid::new_v4();
        repo.record(RecordActivity::new(
            actor,
            "was created".into(),
            EntityRef::new(EntityKind::Space, space_id, "Engineering".into()),
            None,
            true,
        ))
        .await?;

        let feed = repo.manager_feed().await?;
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].verb, "was created");
        assert_eq!(feed[0].actor_name, "creator");
        assert_eq!(feed[0].object.kind, EntityKind::Space);
        assert_eq!(feed[0].object.entity_id, space_id);
        assert!(feed[0].target.is_none());

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_manager_feed_is_capped_and_newest_first(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let actor = insert_user(&pool, "manager").await;
        let repo = ActivityRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let base = Utc::now() - Duration::minutes(30);
        for i in 0..12i64 {
            insert_activity(
                &pool,
                actor,
                &format!("event-{i}"),
                "space",
                None,
                true,
                base + Duration::minutes(i),
            )
            .await;
        }
        // neither private events nor events about other entity kinds show up
        insert_activity(&pool, actor, "private", "space", None, false, Utc::now()).await;
        insert_activity(&pool, actor, "other-kind", "note", None, true, Utc::now()).await;

        let feed = repo.manager_feed().await?;
        assert_eq!(feed.len(), 10);
        assert_eq!(feed[0].verb, "event-11");
        assert_eq!(feed[9].verb, "event-2");
        assert!(feed.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_user_feed_only_contains_given_targets(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let actor = insert_user(&pool, "someone").await;
        let repo = ActivityRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let mine = Uuid::new_v4();
        let other = Uuid::new_v4();
        let base = Utc::now() - Duration::minutes(10);
        insert_activity(&pool, actor, "joined", "user", Some(mine), true, base).await;
        insert_activity(
            &pool,
            actor,
            "left",
            "user",
            Some(other),
            true,
            base + Duration::minutes(1),
        )
        .await;

        let feed = repo.user_feed(&[SpaceId::from(mine)]).await?;
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].verb, "joined");

        assert!(repo.user_feed(&[]).await?.is_empty());

        Ok(())
    }
}
