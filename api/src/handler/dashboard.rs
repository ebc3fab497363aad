use axum::{extract::State, response::Html, Json};
use kernel::model::space::filter_member_spaces;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{extractor::AuthorizedUser, model::dashboard::DashboardResponse};

/// Assembles the per-user dashboard view model. The manager stream is only
/// computed for callers with manager privilege.
pub async fn show_dashboard(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DashboardResponse>> {
    let accessible_spaces = registry
        .space_repository()
        .find_accessible_by_user(user.id())
        .await?;
    let group_ids = registry.user_repository().find_group_ids(user.id()).await?;
    let own_spaces = filter_member_spaces(&accessible_spaces, &group_ids);
    let created_spaces = registry
        .space_repository()
        .find_created_by(user.id())
        .await?;

    let space_ids: Vec<_> = accessible_spaces.iter().map(|s| s.space_id).collect();
    let user_stream = registry.activity_repository().user_feed(&space_ids).await?;
    let manager_stream = if user.is_manager() {
        Some(registry.activity_repository().manager_feed().await?)
    } else {
        None
    };

    Ok(Json(DashboardResponse::new(
        accessible_spaces,
        own_spaces,
        created_spaces,
        user_stream,
        manager_stream,
    )))
}

pub async fn show_help(_user: AuthorizedUser) -> Html<&'static str> {
    Html(HELP_PAGE)
}

const HELP_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Help</title></head>
<body>
<h1>Getting started</h1>
<p>Your dashboard lists every space you can access, the spaces you are a
member of, and the spaces you created yourself.</p>
<p>Managers can create new spaces from the dashboard. A space may carry an
expiration date; leave the field empty for a space without one.</p>
<p>The activity stream shows recent changes in the spaces you can access.</p>
</body>
</html>
"#;
