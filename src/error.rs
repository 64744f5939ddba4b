use std::borrow::Cow;

use aide::OperationOutput;
use axum::{
	body::Body,
	extract::rejection::{JsonRejection, PathRejection, QueryRejection},
	http::{Response, StatusCode},
	response::IntoResponse,
};
use schemars::JsonSchema;
use serde::Serialize;

use crate::{config::ConfigError, extract::Json};

pub type Map = serde_json::Map<String, serde_json::Value>;

/// A single error message presented to the client.
#[derive(Debug, Serialize, JsonSchema)]
pub struct Message<'a> {
	/// A machine-readable error code, such as `unknown_item`.
	pub content: Cow<'a, str>,
	/// The request field the error relates to, if any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub field: Option<Cow<'a, str>>,
	/// Additional context, such as the identifier that was not found.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<Cow<'a, Map>>,
}

impl<'a> Message<'a> {
	pub fn new(content: impl Into<Cow<'a, str>>) -> Self {
		Self {
			content: content.into(),
			field: None,
			details: None,
		}
	}

	#[must_use]
	pub fn field(mut self, field: impl Into<Cow<'a, str>>) -> Self {
		self.field = Some(field.into());
		self
	}

	#[must_use]
	pub fn detail(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
		self.details
			.get_or_insert_with(|| Cow::Owned(Map::new()))
			.to_mut()
			.insert(key.into(), value.into());
		self
	}

	pub fn into_vec(self) -> Vec<Self> {
		vec![self]
	}
}

/// The body of every error response.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ErrorResponse {
	/// A human-readable description of the error.
	pub detail: Cow<'static, str>,
	pub errors: Vec<Message<'static>>,
}

/// Errors that are shared by every route.
///
/// The Display output is not sent to the client, so it can show
/// sensitive information.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	#[error("validation error: {0}")]
	Validation(#[from] validator::ValidationErrors),
	#[error("json error: {0}")]
	Json(#[from] JsonRejection),
	#[error("request body does not match the schema")]
	Body(Vec<Message<'static>>),
	#[error("query error: {0}")]
	Query(#[from] QueryRejection),
	#[error("path error: {0}")]
	Path(#[from] PathRejection),
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

fn respond(
	status: StatusCode,
	detail: impl Into<Cow<'static, str>>,
	errors: Vec<Message<'static>>,
) -> Response<Body> {
	(
		status,
		Json(ErrorResponse {
			detail: detail.into(),
			errors,
		}),
	)
		.into_response()
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response<Body> {
		match self {
			Self::Validation(errors) => respond(
				StatusCode::BAD_REQUEST,
				"Request validation failed",
				errors
					.field_errors()
					.into_iter()
					.flat_map(|(field, errors)| {
						errors.iter().map(move |error| {
							let message = Message::new(error.code.to_string()).field(field);

							match error.message {
								Some(ref text) => message.detail("message", text.to_string()),
								None => message,
							}
						})
					})
					.collect(),
			),
			Self::Json(rejection) => respond(
				StatusCode::BAD_REQUEST,
				rejection.body_text(),
				Message::new("invalid_json").into_vec(),
			),
			Self::Body(errors) => respond(
				StatusCode::BAD_REQUEST,
				"Request body does not match the schema",
				errors,
			),
			Self::Query(rejection) => respond(
				StatusCode::BAD_REQUEST,
				rejection.body_text(),
				Message::new("invalid_query").into_vec(),
			),
			Self::Path(rejection) => respond(
				StatusCode::BAD_REQUEST,
				rejection.body_text(),
				Message::new("invalid_path").into_vec(),
			),
			Self::Database(error) => {
				tracing::error!(%error, "unhandled database error");

				respond(
					StatusCode::INTERNAL_SERVER_ERROR,
					"Internal server error",
					Message::new("internal_error").into_vec(),
				)
			}
		}
	}
}

impl OperationOutput for AppError {
	type Inner = ErrorResponse;
}

/// Describes how a route-specific error is presented to the client.
///
/// The Display output of the error is used as the `detail` of the
/// response, so it must not contain sensitive information.
pub trait ErrorShape: std::error::Error {
	fn status(&self) -> StatusCode;

	fn into_errors(self) -> Vec<Message<'static>>;
}

/// Error returned by a route: either a shared [`AppError`] or an error
/// specific to the route's resource.
#[derive(Debug)]
pub enum RouteError<T> {
	App(AppError),
	Route(T),
}

impl<T: ErrorShape> RouteError<T> {
	/// Maps a violated database constraint to a route error.
	///
	/// The closure receives the name of the violated constraint. Errors that
	/// are not constraint violations, or that the closure does not recognise,
	/// are kept as database errors.
	pub fn constraint(error: sqlx::Error, map: impl FnOnce(&str) -> Option<T>) -> Self {
		if let sqlx::Error::Database(ref database) = error {
			if let Some(error) = database.constraint().and_then(map) {
				return Self::Route(error);
			}
		}

		Self::App(AppError::Database(error))
	}
}

impl<T: ErrorShape> From<T> for RouteError<T> {
	fn from(error: T) -> Self {
		Self::Route(error)
	}
}

impl<T> From<AppError> for RouteError<T> {
	fn from(error: AppError) -> Self {
		Self::App(error)
	}
}

impl<T> From<sqlx::Error> for RouteError<T> {
	fn from(error: sqlx::Error) -> Self {
		Self::App(AppError::Database(error))
	}
}

impl<T: ErrorShape> IntoResponse for RouteError<T> {
	fn into_response(self) -> Response<Body> {
		match self {
			Self::App(error) => error.into_response(),
			Self::Route(error) => {
				let status = error.status();
				let detail = error.to_string();

				respond(status, detail, error.into_errors())
			}
		}
	}
}

impl<T> OperationOutput for RouteError<T> {
	type Inner = ErrorResponse;
}

/// Errors that abort start-up.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
	#[error("configuration error: {0}")]
	Config(#[from] ConfigError),
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
	#[error("migration error: {0}")]
	Migrate(#[from] sqlx::migrate::MigrateError),
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

#[cfg(test)]
mod test {
	use axum::{http::StatusCode, response::IntoResponse};

	use super::{AppError, ErrorShape, Message, RouteError};

	#[derive(Debug, thiserror::Error)]
	enum TestError {
		#[error("Thing not found")]
		UnknownThing(i32),
	}

	impl ErrorShape for TestError {
		fn status(&self) -> StatusCode {
			StatusCode::NOT_FOUND
		}

		fn into_errors(self) -> Vec<Message<'static>> {
			let Self::UnknownThing(id) = self;

			Message::new("unknown_thing").detail("thing", id).into_vec()
		}
	}

	#[test]
	fn test_message_details() {
		let message = Message::new("unknown_thing")
			.field("name")
			.detail("thing", 3)
			.detail("other", "value");

		let value = serde_json::to_value(&message).unwrap();

		assert_eq!(value["content"], "unknown_thing");
		assert_eq!(value["field"], "name");
		assert_eq!(value["details"]["thing"], 3);
		assert_eq!(value["details"]["other"], "value");
	}

	#[test]
	fn test_message_skips_empty_fields() {
		let value = serde_json::to_value(Message::new("internal_error")).unwrap();

		assert!(value.get("field").is_none());
		assert!(value.get("details").is_none());
	}

	#[test]
	fn test_route_error_status() {
		let response = RouteError::from(TestError::UnknownThing(1)).into_response();

		assert_eq!(response.status(), StatusCode::NOT_FOUND);
	}

	#[test]
	fn test_database_error_is_internal() {
		let error: RouteError<TestError> = sqlx::Error::RowNotFound.into();

		assert!(matches!(error, RouteError::App(AppError::Database(..))));
		assert_eq!(
			error.into_response().status(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
	}

	#[tokio::test]
	async fn test_validation_errors_name_the_field() {
		#[derive(validator::Validate)]
		struct Input {
			#[validate(length(min = 1))]
			name: String,
		}

		let errors = validator::Validate::validate(&Input {
			name: String::new(),
		})
		.unwrap_err();

		let response = AppError::Validation(errors).into_response();

		assert_eq!(response.status(), StatusCode::BAD_REQUEST);

		let body = axum::body::to_bytes(response.into_body(), usize::MAX)
			.await
			.unwrap();
		let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

		assert_eq!(body["detail"], "Request validation failed");
		assert_eq!(body["errors"][0]["content"], "length");
		assert_eq!(body["errors"][0]["field"], "name");
	}

	#[test]
	fn test_constraint_passes_through_other_errors() {
		let error = RouteError::<TestError>::constraint(sqlx::Error::PoolTimedOut, |_| {
			Some(TestError::UnknownThing(1))
		});

		assert!(matches!(
			error,
			RouteError::App(AppError::Database(sqlx::Error::PoolTimedOut))
		));
	}
}
