use aide::axum::{routing::get_with, ApiRouter};
use axum::http::StatusCode;

use crate::{error, AppState};

pub mod model;
pub mod route;

/// An error that can occur when managing users.
///
/// The messages are presented to the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("User not found")]
	UnknownUser(String),
	#[error("Username already taken")]
	UsernameTaken(String),
	#[error("User has authors with posts")]
	AuthorsHavePosts(String),
}

pub type RouteError = error::RouteError<Error>;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/users/",
			get_with(get_users, get_users_docs).post_with(create_user, create_user_docs),
		)
		.api_route(
			"/users/:username",
			get_with(get_user, get_user_docs).delete_with(delete_user, delete_user_docs),
		)
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownUser(..) => StatusCode::NOT_FOUND,
			Self::UsernameTaken(..) | Self::AuthorsHavePosts(..) => StatusCode::CONFLICT,
		}
	}

	fn into_errors(self) -> Vec<error::Message<'static>> {
		let message = match self {
			Self::UnknownUser(username) => {
				error::Message::new("unknown_user").detail("user", username)
			}
			Self::UsernameTaken(username) => error::Message::new("username_taken")
				.field("username")
				.detail("username", username),
			Self::AuthorsHavePosts(username) => {
				error::Message::new("authors_have_posts").detail("user", username)
			}
		};

		message.into_vec()
	}
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[sqlx::test]
	async fn test_user_lifecycle(pool: Database) {
		let app = app(pool);

		let response = app
			.post("/users/")
			.json(&json!({ "username": "jane", "firstName": "Jane" }))
			.await;

		assert_eq!(response.status_code(), 200);

		let user = response.json::<Value>();

		assert_eq!(user["username"], "jane");
		assert_eq!(user["firstName"], "Jane");
		assert_eq!(user["id"].as_str().unwrap().len(), 12);

		let response = app.get("/users/jane").await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Value>()["id"], user["id"]);

		let response = app
			.post("/users/")
			.json(&json!({ "username": "jane", "firstName": "Other" }))
			.await;

		assert_eq!(response.status_code(), 409);

		let response = app.get("/users/").await;

		assert_eq!(response.json::<Vec<Value>>().len(), 1);

		let response = app.get("/users/nobody").await;

		assert_eq!(response.status_code(), 404);
		assert_eq!(response.json::<Value>()["detail"], "User not found");
	}

	#[sqlx::test]
	async fn test_overlong_username_is_not_found(pool: Database) {
		let app = app(pool);

		let response = app.get("/users/sixteen_chars_xx").await;

		assert_eq!(response.status_code(), 404);
		assert_eq!(response.json::<Value>()["errors"][0]["content"], "unknown_user");
		assert_eq!(app.delete("/users/sixteen_chars_xx").await.status_code(), 404);
	}

	#[sqlx::test]
	async fn test_delete_cascades_to_authors(pool: Database) {
		let app = app(pool);

		create_user(&app, "jane").await;
		create_author(&app, "jane_writes", "jane").await;
		create_author(&app, "jane_drafts", "jane").await;

		let response = app.delete("/users/jane").await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Value>()["detail"], "User deleted");

		assert_eq!(app.get("/users/jane").await.status_code(), 404);
		assert_eq!(app.get("/authors/jane_writes").await.status_code(), 404);
		assert_eq!(app.get("/authors/jane_drafts").await.status_code(), 404);

		assert_eq!(app.delete("/users/jane").await.status_code(), 404);
	}

	#[sqlx::test]
	async fn test_delete_is_atomic(pool: Database) {
		let app = app(pool);

		create_user(&app, "jane").await;
		create_author(&app, "jane_writes", "jane").await;
		create_category(&app, "news").await;
		create_post(&app, "jane_writes", "news", "Hello").await;

		let response = app.delete("/users/jane").await;

		assert_eq!(response.status_code(), 409);

		assert_eq!(app.get("/users/jane").await.status_code(), 200);
		assert_eq!(app.get("/authors/jane_writes").await.status_code(), 200);
	}
}
