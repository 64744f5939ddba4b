pub use crate::route::model::{Deleted, IdInput, Paginate};

use macros::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A generic named item.
#[model]
#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate, sqlx::FromRow)]
pub struct Item {
	/// The unique identifier of the item.
	#[serde(skip_deserializing)]
	pub id: i32,
	/// The unique name of the item.
	#[validate(length(min = 1, max = 50))]
	pub name: String,
	/// An optional description of the item.
	#[validate(length(max = 255))]
	pub description: Option<String>,
}

#[cfg(test)]
mod test {
	use serde_json::json;
	use validator::Validate;

	use super::{CreateItemInput, UpdateItemInput};

	#[test]
	fn test_create_requires_name() {
		assert!(serde_json::from_value::<CreateItemInput>(json!({ "description": "x" })).is_err());

		let input: CreateItemInput = serde_json::from_value(json!({ "name": "lamp" })).unwrap();

		assert_eq!(input.name, "lamp");
		assert_eq!(input.description, None);
		assert!(input.validate().is_ok());
	}

	#[test]
	fn test_create_ignores_id() {
		let input: CreateItemInput =
			serde_json::from_value(json!({ "id": 7, "name": "lamp" })).unwrap();

		assert_eq!(input.name, "lamp");
	}

	#[test]
	fn test_name_length() {
		let input = CreateItemInput {
			name: "x".repeat(51),
			description: None,
		};

		assert!(input.validate().is_err());
	}

	#[test]
	fn test_update_is_partial() {
		let input: UpdateItemInput =
			serde_json::from_value(json!({ "description": "new" })).unwrap();

		assert_eq!(input.name, None);
		assert_eq!(input.description.as_deref(), Some("new"));
		assert!(input.validate().is_ok());
	}
}
