use macros::route;

use crate::{
	extract::{Connection, Json, Path, Query},
	openapi::tag,
};

use super::{model, Error, RouteError};

fn name_taken(name: &str) -> impl FnOnce(&str) -> Option<Error> + '_ {
	move |constraint: &str| {
		(constraint == "items_name_key").then(|| Error::NameTaken(name.to_owned()))
	}
}

/// Get all items
/// Returns a paginated list of items in insertion order.
#[route(tag = tag::ITEM)]
pub async fn get_items(
	mut connection: Connection,
	Query(paginate): Query<model::Paginate>,
) -> Result<Json<Vec<model::Item>>, RouteError> {
	let items = sqlx::query_as::<_, model::Item>(
		r#"
			SELECT * FROM items
			ORDER BY id
			LIMIT $1 OFFSET $2
		"#,
	)
	.bind(paginate.limit())
	.bind(paginate.offset())
	.fetch_all(&mut *connection)
	.await?;

	Ok(Json(items))
}

/// Get single item
/// Returns a single item by its unique id.
#[route(tag = tag::ITEM)]
pub async fn get_item(
	mut connection: Connection,
	Path(path): Path<model::IdInput>,
) -> Result<Json<model::Item>, RouteError> {
	let item = sqlx::query_as::<_, model::Item>("SELECT * FROM items WHERE id = $1")
		.bind(path.id)
		.fetch_optional(&mut *connection)
		.await?;

	Ok(Json(item.ok_or(Error::UnknownItem(path.id))?))
}

/// Create item
/// Creates a new item. The name must not be used by another item.
#[route(tag = tag::ITEM)]
pub async fn create_item(
	mut connection: Connection,
	Json(input): Json<model::CreateItemInput>,
) -> Result<Json<model::Item>, RouteError> {
	let item = sqlx::query_as::<_, model::Item>(
		r#"
			INSERT INTO items (name, description)
			VALUES ($1, $2)
			RETURNING *
		"#,
	)
	.bind(&input.name)
	.bind(&input.description)
	.fetch_one(&mut *connection)
	.await
	.map_err(|e| RouteError::constraint(e, name_taken(&input.name)))?;

	tracing::info!(item = item.id, "created item");

	Ok(Json(item))
}

/// Update item
/// Updates an existing item by its unique id. Fields that are missing or null are left unchanged.
#[route(tag = tag::ITEM)]
pub async fn update_item(
	mut connection: Connection,
	Path(path): Path<model::IdInput>,
	Json(input): Json<model::UpdateItemInput>,
) -> Result<Json<model::Item>, RouteError> {
	let item = sqlx::query_as::<_, model::Item>(
		r#"
			UPDATE items
			SET name = COALESCE($1, name), description = COALESCE($2, description)
			WHERE id = $3
			RETURNING *
		"#,
	)
	.bind(&input.name)
	.bind(&input.description)
	.bind(path.id)
	.fetch_optional(&mut *connection)
	.await
	.map_err(|e| RouteError::constraint(e, name_taken(input.name.as_deref().unwrap_or_default())))?;

	Ok(Json(item.ok_or(Error::UnknownItem(path.id))?))
}

/// Delete item
/// Deletes an existing item by its unique id.
#[route(tag = tag::ITEM)]
pub async fn delete_item(
	mut connection: Connection,
	Path(path): Path<model::IdInput>,
) -> Result<Json<model::Deleted>, RouteError> {
	let status = sqlx::query("DELETE FROM items WHERE id = $1")
		.bind(path.id)
		.execute(&mut *connection)
		.await?;

	if status.rows_affected() == 0 {
		return Err(Error::UnknownItem(path.id).into());
	}

	Ok(Json(model::Deleted::new("Item deleted")))
}
