pub use crate::route::model::{Deleted, IdInput, Paginate, LATEST_LIMIT};

use macros::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A hashtag, grouped under a category.
#[model(no_update)]
#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate, sqlx::FromRow)]
pub struct Hashtag {
	/// The unique identifier of the hashtag.
	#[serde(skip_deserializing)]
	pub id: i32,
	#[validate(length(min = 1, max = 50))]
	pub name: String,
	/// The name of the category the hashtag belongs to.
	#[validate(length(min = 1, max = 50))]
	pub category: String,
}
