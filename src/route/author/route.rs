use macros::route;

use crate::{
	extract::{Connection, Json, Path, Query},
	openapi::tag,
};

use super::{model, Error, RouteError};

/// Get all authors
/// Returns a paginated list of authors, oldest first.
#[route(tag = tag::AUTHOR)]
pub async fn get_authors(
	mut connection: Connection,
	Query(paginate): Query<model::Paginate>,
) -> Result<Json<Vec<model::Author>>, RouteError> {
	let authors = sqlx::query_as::<_, model::Author>(
		r#"
			SELECT * FROM authors
			ORDER BY created_at, id
			LIMIT $1 OFFSET $2
		"#,
	)
	.bind(paginate.limit())
	.bind(paginate.offset())
	.fetch_all(&mut *connection)
	.await?;

	Ok(Json(authors))
}

/// Get latest authors
/// Returns the ten newest authors, newest first.
#[route(tag = tag::AUTHOR)]
pub async fn get_latest_authors(
	mut connection: Connection,
) -> Result<Json<Vec<model::Author>>, RouteError> {
	let authors = sqlx::query_as::<_, model::Author>(
		r#"
			SELECT * FROM authors
			ORDER BY created_at DESC, id DESC
			LIMIT $1
		"#,
	)
	.bind(model::LATEST_LIMIT)
	.fetch_all(&mut *connection)
	.await?;

	Ok(Json(authors))
}

/// Get single author
/// Returns a single author by their username.
#[route(tag = tag::AUTHOR)]
pub async fn get_author(
	mut connection: Connection,
	Path(path): Path<model::UsernameInput>,
) -> Result<Json<model::Author>, RouteError> {
	let author = sqlx::query_as::<_, model::Author>("SELECT * FROM authors WHERE username = $1")
		.bind(&path.username)
		.fetch_optional(&mut *connection)
		.await?;

	Ok(Json(author.ok_or(Error::UnknownAuthor(path.username))?))
}

/// Create author
/// Creates a new author for an existing user. The username must not be used by another author.
#[route(tag = tag::AUTHOR)]
pub async fn create_author(
	mut connection: Connection,
	Json(input): Json<model::CreateAuthorInput>,
) -> Result<Json<model::Author>, RouteError> {
	let author = sqlx::query_as::<_, model::Author>(
		r#"
			INSERT INTO authors (id, username, "user", first_name, second_name, other_name, nick_name)
			VALUES ($1, $2, $3, $4, $5, $6, $7)
			RETURNING *
		"#,
	)
	.bind(model::short_id())
	.bind(&input.username)
	.bind(&input.user)
	.bind(&input.first_name)
	.bind(&input.second_name)
	.bind(&input.other_name)
	.bind(&input.nick_name)
	.fetch_one(&mut *connection)
	.await
	.map_err(|e| {
		RouteError::constraint(e, |constraint| match constraint {
			"authors_username_key" => Some(Error::UsernameTaken(input.username.clone())),
			"authors_user_fkey" => Some(Error::UnknownUser(input.user.clone())),
			_ => None,
		})
	})?;

	tracing::info!(author = %author.username, user = %author.user, "created author");

	Ok(Json(author))
}

/// Delete author
/// Deletes an author by their username. Authors with posts cannot be deleted.
#[route(tag = tag::AUTHOR)]
pub async fn delete_author(
	mut connection: Connection,
	Path(path): Path<model::UsernameInput>,
) -> Result<Json<model::Deleted>, RouteError> {
	let status = sqlx::query("DELETE FROM authors WHERE username = $1")
		.bind(&path.username)
		.execute(&mut *connection)
		.await
		.map_err(|e| {
			RouteError::constraint(e, |constraint| match constraint {
				"posts_author_fkey" => Some(Error::HasPosts(path.username.clone())),
				_ => None,
			})
		})?;

	if status.rows_affected() == 0 {
		return Err(Error::UnknownAuthor(path.username).into());
	}

	Ok(Json(model::Deleted::new("Author deleted")))
}
