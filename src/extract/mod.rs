mod connection;

pub use connection::Connection;

use aide::OperationIo;
use axum::{
	body::Body,
	extract::{FromRequest, FromRequestParts, Request},
	http::{request, Response},
	response::IntoResponse,
};
use axum_jsonschema::JsonSchemaRejection;
use schemars::JsonSchema;
use serde::de;

use crate::error::{AppError, Message};

/// Extractor that deserializes a JSON body and validates it.
///
/// The body is first checked against the JSON schema of `T`, so missing
/// fields and wrong types are rejected before [`validator::Validate`] runs.
///
/// ```rust
/// async fn route(Json(item): Json<CreateItemInput>) {
///   // ...
/// }
/// ```
#[derive(OperationIo)]
#[aide(
	input_with = "axum_jsonschema::Json<T>",
	output_with = "axum_jsonschema::Json<T>",
	json_schema
)]
pub struct Json<T>(pub T);

impl<T> IntoResponse for Json<T>
where
	T: serde::Serialize,
{
	fn into_response(self) -> Response<Body> {
		axum::extract::Json(self.0).into_response()
	}
}

#[axum::async_trait]
impl<T, S> FromRequest<S> for Json<T>
where
	T: de::DeserializeOwned + validator::Validate + JsonSchema + 'static,
	S: Send + Sync,
{
	type Rejection = AppError;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let result = axum_jsonschema::Json::<T>::from_request(req, state)
			.await?
			.0;

		result.validate().map_err(Self::Rejection::Validation)?;
		Ok(Self(result))
	}
}

/// Turns a JSON pointer or serde path into a field name, or `None` for
/// the root of the body.
fn field_name(location: &str) -> Option<String> {
	let field = location.trim_start_matches(['/', '.']).replace('/', ".");

	(!field.is_empty()).then_some(field)
}

fn with_field(message: Message<'static>, location: &str) -> Message<'static> {
	match field_name(location) {
		Some(field) => message.field(field),
		None => message,
	}
}

impl From<JsonSchemaRejection> for AppError {
	fn from(rejection: JsonSchemaRejection) -> Self {
		match rejection {
			JsonSchemaRejection::Json(rejection) => Self::Json(rejection),
			JsonSchemaRejection::Serde(error) => {
				let message =
					Message::new("deserialize").detail("message", error.inner().to_string());

				Self::Body(vec![with_field(message, &error.path().to_string())])
			}
			JsonSchemaRejection::Schema(units) => Self::Body(
				units
					.into_iter()
					.map(|unit| {
						let message = Message::new("schema")
							.detail("keyword", unit.keyword_location().to_string())
							.detail("message", unit.error_description().to_string());

						with_field(message, &unit.instance_location().to_string())
					})
					.collect(),
			),
		}
	}
}

/// Extractor that deserializes a query string and validates it.
///
/// This is similar to [`Json<T>`], but does not consume the body.
#[derive(OperationIo)]
#[aide(
	input_with = "axum::extract::Query<T>",
	output_with = "axum_jsonschema::Json<T>",
	json_schema
)]
pub struct Query<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for Query<T>
where
	T: de::DeserializeOwned + validator::Validate,
	S: Send + Sync,
{
	type Rejection = AppError;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let result = axum::extract::Query::<T>::from_request_parts(parts, state)
			.await?
			.0;

		result.validate().map_err(Self::Rejection::Validation)?;
		Ok(Self(result))
	}
}

/// Extractor that deserializes path parameters and validates them.
#[derive(OperationIo)]
#[aide(
	input_with = "axum::extract::Path<T>",
	output_with = "axum_jsonschema::Json<T>",
	json_schema
)]
pub struct Path<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for Path<T>
where
	T: de::DeserializeOwned + validator::Validate + Send,
	S: Send + Sync,
{
	type Rejection = AppError;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let result = axum::extract::Path::<T>::from_request_parts(parts, state)
			.await?
			.0;

		result.validate().map_err(Self::Rejection::Validation)?;
		Ok(Self(result))
	}
}

#[cfg(test)]
mod test {
	use super::field_name;

	#[test]
	fn test_field_name() {
		assert_eq!(field_name(""), None);
		assert_eq!(field_name("."), None);
		assert_eq!(field_name("/name"), Some("name".to_owned()));
		assert_eq!(field_name("/tags/0"), Some("tags.0".to_owned()));
		assert_eq!(field_name("name"), Some("name".to_owned()));
	}
}
