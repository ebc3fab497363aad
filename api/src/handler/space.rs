use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use kernel::model::{
    activity::{event::RecordActivity, EntityKind, EntityRef},
    id::SpaceId,
    space::event::CreateSpace,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AuthorizedUser, ManagerUser},
    model::space::{parse_expires, CreateSpaceForm, SpaceFormResponse, SpaceResponse},
};

pub const SPACE_CREATED_VERB: &str = "was created";

pub async fn show_create_space_form(_user: ManagerUser) -> Json<SpaceFormResponse> {
    Json(SpaceFormResponse::empty())
}

/// Processes a space-creation submission. A missing name re-renders the form
/// with a message and creates nothing; success records an activity event and
/// redirects to the new space.
pub async fn create_space(
    user: ManagerUser,
    State(registry): State<AppRegistry>,
    Form(form): Form<CreateSpaceForm>,
) -> AppResult<Response> {
    let Some(space_name) = form
        .space_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
    else {
        let body = SpaceFormResponse::with_message("Please set a name for the new space.");
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response());
    };
    let expires_at = parse_expires(form.space_expires.as_deref())?;

    let new_space = registry
        .space_repository()
        .create(CreateSpace::new(space_name.to_string(), expires_at), user.id())
        .await?;

    registry
        .activity_repository()
        .record(RecordActivity::new(
            user.id(),
            SPACE_CREATED_VERB.to_string(),
            EntityRef::new(
                EntityKind::Space,
                new_space.space_id.raw(),
                new_space.space_name.clone(),
            ),
            None,
            true,
        ))
        .await?;

    tracing::info!(space_id = %new_space.space_id, "space successfully created");

    Ok(Redirect::to(&format!("/spaces/{}", new_space.space_id)).into_response())
}

pub async fn show_space(
    _user: AuthorizedUser,
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpaceResponse>> {
    registry
        .space_repository()
        .find_by_id(space_id)
        .await
        .and_then(|space| match space {
            Some(space) => Ok(Json(space.into())),
            None => Err(AppError::EntityNotFound("space not found".into())),
        })
}
