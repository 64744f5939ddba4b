use aide::{openapi::Tag, transform::TransformOpenApi};

use crate::{error, extract::Json};

pub mod tag {
	pub const ROOT: &str = "Root";
	pub const ITEM: &str = "Item";
	pub const USER: &str = "User";
	pub const CATEGORY: &str = "Category";
	pub const HASHTAG: &str = "Hashtag";
	pub const AUTHOR: &str = "Author";
	pub const POST: &str = "Post";
}

fn tag(name: &str, description: &str) -> Tag {
	Tag {
		name: name.into(),
		description: Some(description.into()),
		..Default::default()
	}
}

pub fn docs(api: TransformOpenApi) -> TransformOpenApi {
	api.title("Blog CMS Open API")
		.summary("CRUD endpoints for a blog content-management backend")
		.description(include_str!("../README.md"))
		.tag(tag(tag::ROOT, "Service information"))
		.tag(tag(tag::ITEM, "Generic item management"))
		.tag(tag(tag::USER, "User accounts"))
		.tag(tag(tag::CATEGORY, "Post and hashtag categories"))
		.tag(tag(tag::HASHTAG, "Hashtags"))
		.tag(tag(tag::AUTHOR, "Authors writing on behalf of users"))
		.tag(tag(tag::POST, "Blog posts"))
		.default_response_with::<Json<error::ErrorResponse>, _>(|res| {
			res.example(error::ErrorResponse {
				detail: "Item not found".into(),
				errors: error::Message::new("unknown_item")
					.detail("item", 1)
					.into_vec(),
			})
		})
}
