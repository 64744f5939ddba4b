mod model;
mod route;

use proc_macro::TokenStream;

/// Creates a new documentation function for the route, named after the original function with the suffix `_docs`.
///
/// The first line of the doc comment becomes the summary, the rest becomes the description.
#[proc_macro_attribute]
pub fn route(args: TokenStream, input: TokenStream) -> TokenStream {
	route::from_input(args, input)
}

/// Creates two new structs: `CreateXInput` and `UpdateXInput` for the model.
///
/// For both structs, fields with `#[serde(skip_deserializing)]` or `#[serde(skip)]`
/// are left out, and all other fields are included verbatim (including attributes).
/// In `UpdateXInput` every field is optional; fields that are already an `Option`
/// are not wrapped twice.
///
/// Pass `#[model(no_update)]` to only generate `CreateXInput`.
#[proc_macro_attribute]
pub fn model(args: TokenStream, input: TokenStream) -> TokenStream {
	model::from_input(args, input)
}
