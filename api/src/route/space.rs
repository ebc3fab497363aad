use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::space::{create_space, show_create_space_form, show_space};

pub fn build_space_routers() -> Router<AppRegistry> {
    let spaces_routers = Router::new()
        .route("/new", get(show_create_space_form))
        .route("/new", post(create_space))
        .route("/:space_id", get(show_space));

    Router::new().nest("/spaces", spaces_routers)
}
