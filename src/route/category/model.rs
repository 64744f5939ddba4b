pub use crate::route::model::{Deleted, NameInput, Paginate};

use macros::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A category that posts and hashtags belong to.
#[model(no_update)]
#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate, sqlx::FromRow)]
pub struct Category {
	/// The unique name of the category.
	#[validate(length(min = 1, max = 50))]
	pub name: String,
}
