use std::ops::{Deref, DerefMut};

use aide::OperationInput;
use axum::{
	extract::{FromRef, FromRequestParts},
	http::request,
};
use sqlx::{pool::PoolConnection, PgConnection, Postgres};

use crate::{error::AppError, Database};

/// A database connection checked out of the pool for the duration of
/// a single request.
///
/// The connection goes back to the pool when the extractor is dropped,
/// whether the handler succeeded or not.
///
/// ```rust
/// async fn route(mut connection: Connection) {
///   sqlx::query("SELECT 1").execute(&mut *connection).await;
/// }
/// ```
#[derive(Debug)]
pub struct Connection(PoolConnection<Postgres>);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Connection
where
	Database: FromRef<S>,
	S: Sync + Send,
{
	type Rejection = AppError;

	async fn from_request_parts(
		_parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let database = Database::from_ref(state);

		Ok(Self(database.acquire().await?))
	}
}

impl Deref for Connection {
	type Target = PgConnection;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Connection {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl OperationInput for Connection {}
