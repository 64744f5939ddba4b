use aide::axum::{routing::get_with, ApiRouter};
use axum::http::StatusCode;

use crate::{error, AppState};

pub mod model;
pub mod route;

/// An error that can occur when managing hashtags.
///
/// The messages are presented to the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Hashtag not found")]
	UnknownHashtag(i32),
	#[error("Category does not exist")]
	UnknownCategory(String),
}

pub type RouteError = error::RouteError<Error>;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/hashtags/",
			get_with(get_hashtags, get_hashtags_docs)
				.post_with(create_hashtag, create_hashtag_docs),
		)
		.api_route(
			"/hashtags/latest",
			get_with(get_latest_hashtags, get_latest_hashtags_docs),
		)
		.api_route(
			"/hashtags/:id",
			get_with(get_hashtag, get_hashtag_docs)
				.delete_with(delete_hashtag, delete_hashtag_docs),
		)
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownHashtag(..) => StatusCode::NOT_FOUND,
			Self::UnknownCategory(..) => StatusCode::UNPROCESSABLE_ENTITY,
		}
	}

	fn into_errors(self) -> Vec<error::Message<'static>> {
		let message = match self {
			Self::UnknownHashtag(id) => {
				error::Message::new("unknown_hashtag").detail("hashtag", id)
			}
			Self::UnknownCategory(name) => error::Message::new("unknown_category")
				.field("category")
				.detail("category", name),
		};

		message.into_vec()
	}
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[sqlx::test]
	async fn test_hashtag_lifecycle(pool: Database) {
		let app = app(pool);

		create_category(&app, "news").await;

		let response = app
			.post("/hashtags/")
			.json(&json!({ "name": "breaking", "category": "news" }))
			.await;

		assert_eq!(response.status_code(), 200);

		let id = response.json::<Value>()["id"].as_i64().unwrap();
		let response = app.get(&format!("/hashtags/{id}")).await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Value>()["name"], "breaking");

		let response = app.delete(&format!("/hashtags/{id}")).await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Value>()["detail"], "Hashtag deleted");
		assert_eq!(app.get(&format!("/hashtags/{id}")).await.status_code(), 404);
	}

	#[sqlx::test]
	async fn test_unknown_category(pool: Database) {
		let app = app(pool);

		let response = app
			.post("/hashtags/")
			.json(&json!({ "name": "breaking", "category": "missing" }))
			.await;

		assert_eq!(response.status_code(), 422);
		assert_eq!(app.get("/hashtags/").await.json::<Vec<Value>>().len(), 0);
	}

	#[sqlx::test]
	async fn test_latest(pool: Database) {
		let app = app(pool);

		create_category(&app, "news").await;

		for i in 0..12 {
			let response = app
				.post("/hashtags/")
				.json(&json!({ "name": format!("tag{i}"), "category": "news" }))
				.await;

			assert_eq!(response.status_code(), 200);
		}

		let hashtags = app.get("/hashtags/latest").await.json::<Vec<Value>>();

		assert_eq!(hashtags.len(), 10);
		assert_eq!(hashtags[0]["name"], "tag11");
		assert_eq!(hashtags[9]["name"], "tag2");
	}
}
