use aide::axum::{routing::get_with, ApiRouter};
use axum::http::StatusCode;

use crate::{error, AppState};

pub mod model;
pub mod route;

/// An error that can occur when managing items.
///
/// The messages are presented to the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Item not found")]
	UnknownItem(i32),
	#[error("Item name already exists")]
	NameTaken(String),
}

pub type RouteError = error::RouteError<Error>;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/items/",
			get_with(get_items, get_items_docs).post_with(create_item, create_item_docs),
		)
		.api_route(
			"/items/:id",
			get_with(get_item, get_item_docs)
				.put_with(update_item, update_item_docs)
				.delete_with(delete_item, delete_item_docs),
		)
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownItem(..) => StatusCode::NOT_FOUND,
			Self::NameTaken(..) => StatusCode::CONFLICT,
		}
	}

	fn into_errors(self) -> Vec<error::Message<'static>> {
		let message = match self {
			Self::UnknownItem(id) => error::Message::new("unknown_item").detail("item", id),
			Self::NameTaken(name) => error::Message::new("name_taken")
				.field("name")
				.detail("name", name),
		};

		message.into_vec()
	}
}
