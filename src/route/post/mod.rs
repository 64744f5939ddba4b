use aide::axum::{routing::get_with, ApiRouter};
use axum::http::StatusCode;

use crate::{error, AppState};

pub mod model;
pub mod route;

/// An error that can occur when managing posts.
///
/// The messages are presented to the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Post not found")]
	UnknownPost(i32),
	#[error("Author does not exist")]
	UnknownAuthor(String),
	#[error("Category does not exist")]
	UnknownCategory(String),
}

pub type RouteError = error::RouteError<Error>;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/posts/",
			get_with(get_posts, get_posts_docs).post_with(create_post, create_post_docs),
		)
		.api_route("/posts/latest", get_with(get_latest_posts, get_latest_posts_docs))
		.api_route(
			"/posts/:id",
			get_with(get_post, get_post_docs)
				.put_with(update_post, update_post_docs)
				.delete_with(delete_post, delete_post_docs),
		)
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownPost(..) => StatusCode::NOT_FOUND,
			Self::UnknownAuthor(..) | Self::UnknownCategory(..) => StatusCode::UNPROCESSABLE_ENTITY,
		}
	}

	fn into_errors(self) -> Vec<error::Message<'static>> {
		let message = match self {
			Self::UnknownPost(id) => error::Message::new("unknown_post").detail("post", id),
			Self::UnknownAuthor(username) => error::Message::new("unknown_author")
				.field("author")
				.detail("author", username),
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

	async fn setup(app: &TestServer) {
		create_user(app, "jane").await;
		create_author(app, "jane_writes", "jane").await;
		create_category(app, "news").await;
	}

	#[sqlx::test]
	async fn test_post_lifecycle(pool: Database) {
		let app = app(pool);

		setup(&app).await;

		let response = app
			.post("/posts/")
			.json(&json!({
				"author": "jane_writes",
				"category": "news",
				"title": "Hello",
				"body": "First post",
			}))
			.await;

		assert_eq!(response.status_code(), 200);

		let post = response.json::<Value>();
		let id = post["id"].as_i64().unwrap();

		assert_eq!(post["status"], false);
		assert!(post["created_at"].is_string());

		let response = app
			.put(&format!("/posts/{id}"))
			.json(&json!({ "status": true, "created_at": "2000-01-01T00:00:00Z" }))
			.await;

		assert_eq!(response.status_code(), 200);

		let updated = response.json::<Value>();

		assert_eq!(updated["status"], true);
		assert_eq!(updated["title"], "Hello");
		assert_eq!(updated["body"], "First post");
		assert_eq!(updated["created_at"], post["created_at"]);

		let response = app.put("/posts/999").json(&json!({ "title": "Nope" })).await;

		assert_eq!(response.status_code(), 404);

		let response = app.delete(&format!("/posts/{id}")).await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Value>()["detail"], "Post deleted");
		assert_eq!(app.get(&format!("/posts/{id}")).await.status_code(), 404);
	}

	#[sqlx::test]
	async fn test_references_must_exist(pool: Database) {
		let app = app(pool);

		setup(&app).await;

		let response = app
			.post("/posts/")
			.json(&json!({ "author": "ghost", "category": "news", "title": "Hello" }))
			.await;

		assert_eq!(response.status_code(), 422);

		let response = app
			.post("/posts/")
			.json(&json!({ "author": "jane_writes", "category": "missing", "title": "Hello" }))
			.await;

		assert_eq!(response.status_code(), 422);
		assert_eq!(app.get("/posts/").await.json::<Vec<Value>>().len(), 0);
	}

	#[sqlx::test]
	async fn test_latest(pool: Database) {
		let app = app(pool);

		setup(&app).await;

		for i in 0..11 {
			create_post(&app, "jane_writes", "news", &format!("Post {i}")).await;
		}

		let posts = app.get("/posts/latest").await.json::<Vec<Value>>();

		assert_eq!(posts.len(), 10);
		assert_eq!(posts[0]["title"], "Post 10");
		assert_eq!(posts[9]["title"], "Post 1");

		let created = posts
			.iter()
			.map(|post| {
				chrono::DateTime::parse_from_rfc3339(post["created_at"].as_str().unwrap()).unwrap()
			})
			.collect::<Vec<_>>();

		assert!(created.windows(2).all(|pair| pair[0] >= pair[1]));
	}
}
