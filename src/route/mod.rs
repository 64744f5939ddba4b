use aide::axum::{routing::get_with, ApiRouter};
use macros::route;

use crate::{extract::Json, openapi::tag, AppState};

pub mod author;
pub mod category;
pub mod docs;
pub mod hashtag;
pub mod item;
pub mod model;
pub mod post;
pub mod user;

/// Welcome
/// Returns a welcome message, useful as a liveness check.
#[route(tag = tag::ROOT)]
pub async fn root() -> Json<model::Welcome> {
	Json(model::Welcome {
		message: "Welcome to the Items API!".into(),
	})
}

pub fn routes() -> ApiRouter<AppState> {
	ApiRouter::new()
		.api_route("/", get_with(root, root_docs))
		.merge(item::routes())
		.merge(user::routes())
		.merge(category::routes())
		.merge(hashtag::routes())
		.merge(author::routes())
		.merge(post::routes())
}
