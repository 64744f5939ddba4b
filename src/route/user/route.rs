use macros::route;
use sqlx::Connection as _;

use crate::{
	extract::{Connection, Json, Path, Query},
	openapi::tag,
};

use super::{model, Error, RouteError};

/// Get all users
/// Returns a paginated list of users, oldest first.
#[route(tag = tag::USER)]
pub async fn get_users(
	mut connection: Connection,
	Query(paginate): Query<model::Paginate>,
) -> Result<Json<Vec<model::User>>, RouteError> {
	let users = sqlx::query_as::<_, model::User>(
		r#"
			SELECT * FROM users
			ORDER BY created_at, id
			LIMIT $1 OFFSET $2
		"#,
	)
	.bind(paginate.limit())
	.bind(paginate.offset())
	.fetch_all(&mut *connection)
	.await?;

	Ok(Json(users))
}

/// Get single user
/// Returns a single user by their username.
#[route(tag = tag::USER)]
pub async fn get_user(
	mut connection: Connection,
	Path(path): Path<model::UsernameInput>,
) -> Result<Json<model::User>, RouteError> {
	let user = sqlx::query_as::<_, model::User>("SELECT * FROM users WHERE username = $1")
		.bind(&path.username)
		.fetch_optional(&mut *connection)
		.await?;

	Ok(Json(user.ok_or(Error::UnknownUser(path.username))?))
}

/// Create user
/// Creates a new user. The username must not be used by another user.
#[route(tag = tag::USER)]
pub async fn create_user(
	mut connection: Connection,
	Json(input): Json<model::CreateUserInput>,
) -> Result<Json<model::User>, RouteError> {
	let user = sqlx::query_as::<_, model::User>(
		r#"
			INSERT INTO users (id, username, first_name, second_name, other_name)
			VALUES ($1, $2, $3, $4, $5)
			RETURNING *
		"#,
	)
	.bind(model::short_id())
	.bind(&input.username)
	.bind(&input.first_name)
	.bind(&input.second_name)
	.bind(&input.other_name)
	.fetch_one(&mut *connection)
	.await
	.map_err(|e| {
		RouteError::constraint(e, |constraint| match constraint {
			"users_username_key" => Some(Error::UsernameTaken(input.username.clone())),
			_ => None,
		})
	})?;

	tracing::info!(user = %user.username, "created user");

	Ok(Json(user))
}

/// Delete user
/// Deletes a user by their username, together with all of their authors.
/// Fails without deleting anything if one of the authors still has posts.
#[route(tag = tag::USER)]
pub async fn delete_user(
	mut connection: Connection,
	Path(path): Path<model::UsernameInput>,
) -> Result<Json<model::Deleted>, RouteError> {
	let mut tx = connection.begin().await?;

	let authors = sqlx::query(r#"DELETE FROM authors WHERE "user" = $1"#)
		.bind(&path.username)
		.execute(&mut *tx)
		.await
		.map_err(|e| {
			RouteError::constraint(e, |constraint| match constraint {
				"posts_author_fkey" => Some(Error::AuthorsHavePosts(path.username.clone())),
				_ => None,
			})
		})?;

	let status = sqlx::query("DELETE FROM users WHERE username = $1")
		.bind(&path.username)
		.execute(&mut *tx)
		.await?;

	// Dropping the transaction rolls it back.
	if status.rows_affected() == 0 {
		return Err(Error::UnknownUser(path.username).into());
	}

	tx.commit().await?;

	tracing::info!(
		user = %path.username,
		authors = authors.rows_affected(),
		"deleted user"
	);

	Ok(Json(model::Deleted::new("User deleted")))
}
