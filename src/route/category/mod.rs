use aide::axum::{routing::get_with, ApiRouter};
use axum::http::StatusCode;

use crate::{error, AppState};

pub mod model;
pub mod route;

/// An error that can occur when managing categories.
///
/// The messages are presented to the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Category not found")]
	UnknownCategory(String),
	#[error("Category already exists")]
	NameTaken(String),
	#[error("Category is still used by hashtags or posts")]
	InUse(String),
}

pub type RouteError = error::RouteError<Error>;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/categories/",
			get_with(get_categories, get_categories_docs)
				.post_with(create_category, create_category_docs),
		)
		.api_route(
			"/categories/:name",
			get_with(get_category, get_category_docs)
				.delete_with(delete_category, delete_category_docs),
		)
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownCategory(..) => StatusCode::NOT_FOUND,
			Self::NameTaken(..) | Self::InUse(..) => StatusCode::CONFLICT,
		}
	}

	fn into_errors(self) -> Vec<error::Message<'static>> {
		let (content, name) = match self {
			Self::UnknownCategory(name) => ("unknown_category", name),
			Self::NameTaken(name) => ("name_taken", name),
			Self::InUse(name) => ("category_in_use", name),
		};

		error::Message::new(content)
			.detail("category", name)
			.into_vec()
	}
}
