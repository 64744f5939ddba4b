use aide::axum::{routing::get_with, ApiRouter};
use axum::http::StatusCode;

use crate::{error, AppState};

pub mod model;
pub mod route;

/// An error that can occur when managing authors.
///
/// The messages are presented to the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Author not found")]
	UnknownAuthor(String),
	#[error("Author username already taken")]
	UsernameTaken(String),
	#[error("User does not exist")]
	UnknownUser(String),
	#[error("Author still has posts")]
	HasPosts(String),
}

pub type RouteError = error::RouteError<Error>;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/authors/",
			get_with(get_authors, get_authors_docs).post_with(create_author, create_author_docs),
		)
		.api_route(
			"/authors/latest",
			get_with(get_latest_authors, get_latest_authors_docs),
		)
		.api_route(
			"/authors/:username",
			get_with(get_author, get_author_docs).delete_with(delete_author, delete_author_docs),
		)
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownAuthor(..) => StatusCode::NOT_FOUND,
			Self::UsernameTaken(..) | Self::HasPosts(..) => StatusCode::CONFLICT,
			Self::UnknownUser(..) => StatusCode::UNPROCESSABLE_ENTITY,
		}
	}

	fn into_errors(self) -> Vec<error::Message<'static>> {
		let message = match self {
			Self::UnknownAuthor(username) => {
				error::Message::new("unknown_author").detail("author", username)
			}
			Self::UsernameTaken(username) => error::Message::new("username_taken")
				.field("username")
				.detail("username", username),
			Self::UnknownUser(username) => error::Message::new("unknown_user")
				.field("user")
				.detail("user", username),
			Self::HasPosts(username) => {
				error::Message::new("author_has_posts").detail("author", username)
			}
		};

		message.into_vec()
	}
}
