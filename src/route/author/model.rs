pub use crate::route::model::{short_id, Deleted, Paginate, UsernameInput, LATEST_LIMIT};

use macros::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::route::user::model::validate_username;

/// An author, writing posts on behalf of a user.
///
/// Author usernames are separate from user usernames.
#[model(no_update)]
#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Author {
	/// The unique identifier of the author.
	#[serde(skip_deserializing)]
	pub id: String,
	/// The unique name of the author.
	#[validate(length(min = 1, max = 15), custom(function = "validate_username"))]
	pub username: String,
	/// The username of the user the author belongs to.
	#[validate(length(min = 1, max = 15))]
	pub user: String,
	#[validate(length(min = 1, max = 50))]
	pub first_name: String,
	#[validate(length(max = 50))]
	pub second_name: Option<String>,
	#[validate(length(max = 50))]
	pub other_name: Option<String>,
	#[validate(length(max = 50))]
	pub nick_name: Option<String>,
	/// The creation time of the author.
	#[serde(skip_deserializing)]
	pub created_at: chrono::DateTime<chrono::Utc>,
}
