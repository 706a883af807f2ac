//! Serde-backed model adapter for plain Rust structs.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::model::{AttributeMap, Model};
use crate::options::ProjectionOptions;

/// Adapter implementing [`Model`] for any serde-serializable value.
///
/// Attribute reads serialize the wrapped value to a JSON object on demand;
/// attribute writes merge into that object and deserialize the result back
/// into `T`. The wrapped type should serialize to a JSON object (a struct
/// with named fields, a map with string keys); anything else reads as
/// having no attributes at all.
///
/// A `SerdeModel` cannot hide attributes, so its raw and plain views are
/// identical. Writes that produce a value `T` no longer accepts — a wrong
/// type for a field, a removed variant — are discarded and the wrapped
/// value is left unchanged, the typed analog of an ORM rejecting an
/// out-of-domain assignment.
///
/// # Examples
///
/// ```
/// use projection::{serialize, ProjectionOptions, SerdeModel};
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
///
/// #[derive(Debug, Serialize, Deserialize)]
/// struct Article {
///     id: Option<i64>,
///     title: String,
///     draft: bool,
/// }
///
/// let article = SerdeModel::new(Article {
///     id: Some(7),
///     title: "Minor Swing".to_string(),
///     draft: false,
/// });
///
/// let options = ProjectionOptions::new().with_only(["id", "title"]);
/// let map = serialize(&article, Some(&options));
///
/// assert_eq!(map.get("title"), Some(&json!("Minor Swing")));
/// assert!(!map.contains_key("draft"));
/// ```
#[derive(Debug, Clone)]
pub struct SerdeModel<T> {
	inner: T,
	defaults: Option<ProjectionOptions>,
}

impl<T> SerdeModel<T> {
	/// Wrap a value.
	pub fn new(inner: T) -> Self {
		Self {
			inner,
			defaults: None,
		}
	}

	/// Declare the options used when an operation receives none.
	pub fn with_default_options(mut self, options: ProjectionOptions) -> Self {
		self.defaults = Some(options);
		self
	}

	/// A shared reference to the wrapped value.
	pub fn get(&self) -> &T {
		&self.inner
	}

	/// An exclusive reference to the wrapped value.
	pub fn get_mut(&mut self) -> &mut T {
		&mut self.inner
	}

	/// Consume the adapter and return the wrapped value.
	pub fn into_inner(self) -> T {
		self.inner
	}
}

impl<T> SerdeModel<T>
where
	T: Serialize + DeserializeOwned,
{
	fn as_object(&self) -> AttributeMap {
		match serde_json::to_value(&self.inner) {
			Ok(Value::Object(map)) => map,
			_ => AttributeMap::new(),
		}
	}

	fn store(&mut self, merged: AttributeMap) {
		match serde_json::from_value(Value::Object(merged)) {
			Ok(inner) => self.inner = inner,
			Err(error) => {
				tracing::debug!(
					"discarding attribute write the wrapped type does not accept: {}",
					error
				);
			}
		}
	}
}

impl<T> Model for SerdeModel<T>
where
	T: Serialize + DeserializeOwned,
{
	fn attributes(&self) -> AttributeMap {
		self.as_object()
	}

	fn to_map(&self) -> AttributeMap {
		self.as_object()
	}

	fn fill(&mut self, data: &AttributeMap) {
		let mut merged = self.as_object();
		for (name, value) in data {
			merged.insert(name.clone(), value.clone());
		}
		self.store(merged);
	}

	fn attribute(&self, name: &str) -> Option<Value> {
		self.as_object().get(name).cloned()
	}

	fn set_attribute(&mut self, name: &str, value: Value) {
		let mut merged = self.as_object();
		merged.insert(name.to_owned(), value);
		self.store(merged);
	}

	fn default_options(&self) -> Option<ProjectionOptions> {
		self.defaults.clone()
	}
}
