pub use crate::route::model::{Deleted, IdInput, Paginate, LATEST_LIMIT};

use macros::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single post, written by an author.
#[model]
#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate, sqlx::FromRow)]
pub struct Post {
	/// The unique identifier of the post.
	#[serde(skip_deserializing)]
	pub id: i32,
	/// The username of the author that wrote the post.
	#[validate(length(min = 1, max = 15))]
	pub author: String,
	/// The name of the category the post belongs to.
	#[validate(length(min = 1, max = 50))]
	pub category: String,
	/// The creation time of the post.
	#[serde(skip_deserializing)]
	pub created_at: chrono::DateTime<chrono::Utc>,
	/// The title of the post.
	#[validate(length(min = 1, max = 200))]
	pub title: String,
	/// The content of the post.
	pub body: Option<String>,
	/// Whether the post is published.
	#[serde(default)]
	pub status: bool,
}

#[cfg(test)]
mod test {
	use serde_json::json;
	use validator::Validate;

	use super::{CreatePostInput, UpdatePostInput};

	#[test]
	fn test_status_defaults_to_unpublished() {
		let input: CreatePostInput = serde_json::from_value(json!({
			"author": "jane_writes",
			"category": "news",
			"title": "Hello",
		}))
		.unwrap();

		assert!(!input.status);
		assert_eq!(input.body, None);
	}

	#[test]
	fn test_created_at_is_not_an_input() {
		let input: UpdatePostInput = serde_json::from_value(json!({
			"created_at": "2020-01-01T00:00:00Z",
			"status": true,
		}))
		.unwrap();

		assert_eq!(input.status, Some(true));
		assert_eq!(input.title, None);
	}

	#[test]
	fn test_title_length() {
		let input = UpdatePostInput {
			author: None,
			category: None,
			title: Some("x".repeat(201)),
			body: None,
			status: None,
		};

		assert!(input.validate().is_err());
	}
}
