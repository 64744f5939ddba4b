use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// The largest page that can be requested at once.
pub const MAX_LIMIT: i64 = 100;

/// The number of rows returned by the `latest` routes.
pub const LATEST_LIMIT: i64 = 10;

/// The length of generated string identifiers.
pub const SHORT_ID_LENGTH: usize = 12;

/// These can be removed when [`serde`] supports
/// literal defaults: <https://github.com/serde-rs/serde/issues/368>
#[inline]
fn ten() -> i64 {
	10
}

#[derive(Debug, Deserialize, Validate, JsonSchema)]
pub struct Paginate {
	/// The number of rows to skip.
	#[validate(range(min = 0))]
	#[serde(default)]
	pub skip: i64,
	/// The maximum number of rows to return.
	#[validate(range(min = 0, max = "MAX_LIMIT"))]
	#[serde(default = "ten")]
	pub limit: i64,
}

impl Paginate {
	pub fn offset(&self) -> i64 {
		self.skip
	}

	pub fn limit(&self) -> i64 {
		self.limit
	}
}

#[derive(Deserialize, Validate, JsonSchema)]
pub struct IdInput {
	pub id: i32,
}

/// Path keys are not length checked, a key that cannot exist is not found.
#[derive(Deserialize, Validate, JsonSchema)]
pub struct UsernameInput {
	pub username: String,
}

#[derive(Deserialize, Validate, JsonSchema)]
pub struct NameInput {
	pub name: String,
}

/// Confirmation that a row was deleted.
#[derive(Debug, Serialize, JsonSchema)]
pub struct Deleted {
	/// A human-readable confirmation, such as "Item deleted".
	pub detail: String,
}

impl Deleted {
	pub fn new(detail: impl Into<String>) -> Self {
		Self {
			detail: detail.into(),
		}
	}
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct Welcome {
	pub message: String,
}

/// Generates an opaque identifier for rows without a serial key.
pub fn short_id() -> String {
	let mut id = Uuid::new_v4().simple().to_string();

	id.truncate(SHORT_ID_LENGTH);
	id
}

#[cfg(test)]
mod test {
	use validator::Validate;

	use super::{short_id, Paginate, MAX_LIMIT, SHORT_ID_LENGTH};

	#[test]
	fn test_paginate_defaults() {
		let paginate: Paginate = serde_json::from_value(serde_json::json!({})).unwrap();

		assert_eq!(paginate.offset(), 0);
		assert_eq!(paginate.limit(), 10);
	}

	#[test]
	fn test_paginate_offset() {
		let mut paginate = Paginate { skip: 0, limit: 10 };

		assert_eq!(paginate.offset(), 0);

		paginate.skip = 20;

		assert_eq!(paginate.offset(), 20);
		assert_eq!(paginate.limit(), 10);
	}

	#[test]
	fn test_paginate_bounds() {
		assert!(Paginate { skip: 0, limit: MAX_LIMIT }.validate().is_ok());
		assert!(Paginate { skip: 0, limit: 0 }.validate().is_ok());
		assert!(Paginate { skip: 0, limit: MAX_LIMIT + 1 }.validate().is_err());
		assert!(Paginate { skip: -1, limit: 10 }.validate().is_err());
	}

	#[test]
	fn test_short_id() {
		let a = short_id();
		let b = short_id();

		assert_eq!(a.len(), SHORT_ID_LENGTH);
		assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
		assert_ne!(a, b);
	}
}
