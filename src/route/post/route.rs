use macros::route;

use crate::{
	extract::{Connection, Json, Path, Query},
	openapi::tag,
};

use super::{model, Error, RouteError};

/// Maps violated foreign keys of the `posts` table to the missing reference.
fn unknown_reference<'a>(
	author: Option<&'a str>,
	category: Option<&'a str>,
) -> impl FnOnce(&str) -> Option<Error> + 'a {
	move |constraint: &str| match constraint {
		"posts_author_fkey" => Some(Error::UnknownAuthor(author?.to_owned())),
		"posts_category_fkey" => Some(Error::UnknownCategory(category?.to_owned())),
		_ => None,
	}
}

/// Get all posts
/// Returns a paginated list of posts in insertion order.
#[route(tag = tag::POST)]
pub async fn get_posts(
	mut connection: Connection,
	Query(paginate): Query<model::Paginate>,
) -> Result<Json<Vec<model::Post>>, RouteError> {
	let posts = sqlx::query_as::<_, model::Post>(
		r#"
			SELECT * FROM posts
			ORDER BY id
			LIMIT $1 OFFSET $2
		"#,
	)
	.bind(paginate.limit())
	.bind(paginate.offset())
	.fetch_all(&mut *connection)
	.await?;

	Ok(Json(posts))
}

/// Get latest posts
/// Returns the ten newest posts, newest first.
#[route(tag = tag::POST)]
pub async fn get_latest_posts(
	mut connection: Connection,
) -> Result<Json<Vec<model::Post>>, RouteError> {
	let posts = sqlx::query_as::<_, model::Post>(
		r#"
			SELECT * FROM posts
			ORDER BY created_at DESC, id DESC
			LIMIT $1
		"#,
	)
	.bind(model::LATEST_LIMIT)
	.fetch_all(&mut *connection)
	.await?;

	Ok(Json(posts))
}

/// Get single post
/// Returns a single post by its unique id.
#[route(tag = tag::POST)]
pub async fn get_post(
	mut connection: Connection,
	Path(path): Path<model::IdInput>,
) -> Result<Json<model::Post>, RouteError> {
	let post = sqlx::query_as::<_, model::Post>("SELECT * FROM posts WHERE id = $1")
		.bind(path.id)
		.fetch_optional(&mut *connection)
		.await?;

	Ok(Json(post.ok_or(Error::UnknownPost(path.id))?))
}

/// Create post
/// Creates a new post for an existing author and category. Posts are unpublished unless `status` is set.
#[route(tag = tag::POST)]
pub async fn create_post(
	mut connection: Connection,
	Json(input): Json<model::CreatePostInput>,
) -> Result<Json<model::Post>, RouteError> {
	let post = sqlx::query_as::<_, model::Post>(
		r#"
			INSERT INTO posts (author, category, title, body, status)
			VALUES ($1, $2, $3, $4, $5)
			RETURNING *
		"#,
	)
	.bind(&input.author)
	.bind(&input.category)
	.bind(&input.title)
	.bind(&input.body)
	.bind(input.status)
	.fetch_one(&mut *connection)
	.await
	.map_err(|e| {
		RouteError::constraint(
			e,
			unknown_reference(Some(input.author.as_str()), Some(input.category.as_str())),
		)
	})?;

	tracing::info!(post = post.id, author = %post.author, "created post");

	Ok(Json(post))
}

/// Update post
/// Updates an existing post by its unique id. Fields that are missing or null are left unchanged.
#[route(tag = tag::POST)]
pub async fn update_post(
	mut connection: Connection,
	Path(path): Path<model::IdInput>,
	Json(input): Json<model::UpdatePostInput>,
) -> Result<Json<model::Post>, RouteError> {
	let post = sqlx::query_as::<_, model::Post>(
		r#"
			UPDATE posts
			SET author = COALESCE($1, author),
				category = COALESCE($2, category),
				title = COALESCE($3, title),
				body = COALESCE($4, body),
				status = COALESCE($5, status)
			WHERE id = $6
			RETURNING *
		"#,
	)
	.bind(&input.author)
	.bind(&input.category)
	.bind(&input.title)
	.bind(&input.body)
	.bind(input.status)
	.bind(path.id)
	.fetch_optional(&mut *connection)
	.await
	.map_err(|e| {
		RouteError::constraint(
			e,
			unknown_reference(input.author.as_deref(), input.category.as_deref()),
		)
	})?;

	Ok(Json(post.ok_or(Error::UnknownPost(path.id))?))
}

/// Delete post
/// Deletes a post by its unique id.
#[route(tag = tag::POST)]
pub async fn delete_post(
	mut connection: Connection,
	Path(path): Path<model::IdInput>,
) -> Result<Json<model::Deleted>, RouteError> {
	let status = sqlx::query("DELETE FROM posts WHERE id = $1")
		.bind(path.id)
		.execute(&mut *connection)
		.await?;

	if status.rows_affected() == 0 {
		return Err(Error::UnknownPost(path.id).into());
	}

	Ok(Json(model::Deleted::new("Post deleted")))
}
