pub use crate::route::model::{short_id, Deleted, Paginate, UsernameInput};

use macros::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
	if username
		.chars()
		.any(|c| !(c.is_alphanumeric() || c == '_'))
	{
		return Err(ValidationError::new("username must be alphanumeric"));
	}

	Ok(())
}

/// A single user.
#[model(no_update)]
#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
	/// The unique identifier of the user.
	#[serde(skip_deserializing)]
	pub id: String,
	/// The unique name of the user.
	#[validate(length(min = 1, max = 15), custom(function = "validate_username"))]
	pub username: String,
	#[validate(length(min = 1, max = 50))]
	pub first_name: String,
	#[validate(length(max = 50))]
	pub second_name: Option<String>,
	#[validate(length(max = 50))]
	pub other_name: Option<String>,
	/// The creation time of the user.
	#[serde(skip_deserializing)]
	pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod test {
	use serde_json::json;
	use validator::Validate;

	use super::CreateUserInput;

	#[test]
	fn test_camel_case_fields() {
		let input: CreateUserInput = serde_json::from_value(json!({
			"username": "jane",
			"firstName": "Jane",
			"otherName": "J",
		}))
		.unwrap();

		assert_eq!(input.first_name, "Jane");
		assert_eq!(input.second_name, None);
		assert_eq!(input.other_name.as_deref(), Some("J"));
		assert!(input.validate().is_ok());
	}

	#[test]
	fn test_username_rules() {
		let input = |username: &str| CreateUserInput {
			username: username.into(),
			first_name: "Jane".into(),
			second_name: None,
			other_name: None,
		};

		assert!(input("jane_doe").validate().is_ok());
		assert!(input("").validate().is_err());
		assert!(input("sixteen_chars_xx").validate().is_err());
		assert!(input("jane doe").validate().is_err());
	}
}
