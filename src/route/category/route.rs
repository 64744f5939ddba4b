use macros::route;

use crate::{
	extract::{Connection, Json, Path, Query},
	openapi::tag,
};

use super::{model, Error, RouteError};

/// Get all categories
/// Returns a paginated list of categories in insertion order.
#[route(tag = tag::CATEGORY)]
pub async fn get_categories(
	mut connection: Connection,
	Query(paginate): Query<model::Paginate>,
) -> Result<Json<Vec<model::Category>>, RouteError> {
	let categories = sqlx::query_as::<_, model::Category>(
		r#"
			SELECT name FROM categories
			ORDER BY seq
			LIMIT $1 OFFSET $2
		"#,
	)
	.bind(paginate.limit())
	.bind(paginate.offset())
	.fetch_all(&mut *connection)
	.await?;

	Ok(Json(categories))
}

/// Get single category
/// Returns a single category by its name.
#[route(tag = tag::CATEGORY)]
pub async fn get_category(
	mut connection: Connection,
	Path(path): Path<model::NameInput>,
) -> Result<Json<model::Category>, RouteError> {
	let category =
		sqlx::query_as::<_, model::Category>("SELECT name FROM categories WHERE name = $1")
			.bind(&path.name)
			.fetch_optional(&mut *connection)
			.await?;

	Ok(Json(category.ok_or(Error::UnknownCategory(path.name))?))
}

/// Create category
/// Creates a new category with a unique name.
#[route(tag = tag::CATEGORY)]
pub async fn create_category(
	mut connection: Connection,
	Json(input): Json<model::CreateCategoryInput>,
) -> Result<Json<model::Category>, RouteError> {
	let category = sqlx::query_as::<_, model::Category>(
		r#"
			INSERT INTO categories (name)
			VALUES ($1)
			RETURNING name
		"#,
	)
	.bind(&input.name)
	.fetch_one(&mut *connection)
	.await
	.map_err(|e| {
		RouteError::constraint(e, |constraint| match constraint {
			"categories_pkey" => Some(Error::NameTaken(input.name.clone())),
			_ => None,
		})
	})?;

	Ok(Json(category))
}

/// Delete category
/// Deletes a category by its name. Categories that are still used by hashtags or posts cannot be deleted.
#[route(tag = tag::CATEGORY)]
pub async fn delete_category(
	mut connection: Connection,
	Path(path): Path<model::NameInput>,
) -> Result<Json<model::Deleted>, RouteError> {
	let status = sqlx::query("DELETE FROM categories WHERE name = $1")
		.bind(&path.name)
		.execute(&mut *connection)
		.await
		.map_err(|e| {
			RouteError::constraint(e, |constraint| match constraint {
				"hashtags_category_fkey" | "posts_category_fkey" => {
					Some(Error::InUse(path.name.clone()))
				}
				_ => None,
			})
		})?;

	if status.rows_affected() == 0 {
		return Err(Error::UnknownCategory(path.name).into());
	}

	Ok(Json(model::Deleted::new("Category deleted")))
}
