use macros::route;

use crate::{
	extract::{Connection, Json, Path, Query},
	openapi::tag,
};

use super::{model, Error, RouteError};

/// Get all hashtags
/// Returns a paginated list of hashtags in insertion order.
#[route(tag = tag::HASHTAG)]
pub async fn get_hashtags(
	mut connection: Connection,
	Query(paginate): Query<model::Paginate>,
) -> Result<Json<Vec<model::Hashtag>>, RouteError> {
	let hashtags = sqlx::query_as::<_, model::Hashtag>(
		r#"
			SELECT * FROM hashtags
			ORDER BY id
			LIMIT $1 OFFSET $2
		"#,
	)
	.bind(paginate.limit())
	.bind(paginate.offset())
	.fetch_all(&mut *connection)
	.await?;

	Ok(Json(hashtags))
}

/// Get latest hashtags
/// Returns the ten newest hashtags, newest first.
#[route(tag = tag::HASHTAG)]
pub async fn get_latest_hashtags(
	mut connection: Connection,
) -> Result<Json<Vec<model::Hashtag>>, RouteError> {
	let hashtags = sqlx::query_as::<_, model::Hashtag>(
		r#"
			SELECT * FROM hashtags
			ORDER BY id DESC
			LIMIT $1
		"#,
	)
	.bind(model::LATEST_LIMIT)
	.fetch_all(&mut *connection)
	.await?;

	Ok(Json(hashtags))
}

/// Get single hashtag
/// Returns a single hashtag by its unique id.
#[route(tag = tag::HASHTAG)]
pub async fn get_hashtag(
	mut connection: Connection,
	Path(path): Path<model::IdInput>,
) -> Result<Json<model::Hashtag>, RouteError> {
	let hashtag = sqlx::query_as::<_, model::Hashtag>("SELECT * FROM hashtags WHERE id = $1")
		.bind(path.id)
		.fetch_optional(&mut *connection)
		.await?;

	Ok(Json(hashtag.ok_or(Error::UnknownHashtag(path.id))?))
}

/// Create hashtag
/// Creates a new hashtag in an existing category.
#[route(tag = tag::HASHTAG)]
pub async fn create_hashtag(
	mut connection: Connection,
	Json(input): Json<model::CreateHashtagInput>,
) -> Result<Json<model::Hashtag>, RouteError> {
	let hashtag = sqlx::query_as::<_, model::Hashtag>(
		r#"
			INSERT INTO hashtags (name, category)
			VALUES ($1, $2)
			RETURNING *
		"#,
	)
	.bind(&input.name)
	.bind(&input.category)
	.fetch_one(&mut *connection)
	.await
	.map_err(|e| {
		RouteError::constraint(e, |constraint| match constraint {
			"hashtags_category_fkey" => Some(Error::UnknownCategory(input.category.clone())),
			_ => None,
		})
	})?;

	Ok(Json(hashtag))
}

/// Delete hashtag
/// Deletes a hashtag by its unique id.
#[route(tag = tag::HASHTAG)]
pub async fn delete_hashtag(
	mut connection: Connection,
	Path(path): Path<model::IdInput>,
) -> Result<Json<model::Deleted>, RouteError> {
	let status = sqlx::query("DELETE FROM hashtags WHERE id = $1")
		.bind(path.id)
		.execute(&mut *connection)
		.await?;

	if status.rows_affected() == 0 {
		return Err(Error::UnknownHashtag(path.id).into());
	}

	Ok(Json(model::Deleted::new("Hashtag deleted")))
}
