//! A map-backed model for dynamic attribute bags.

use std::collections::HashSet;

use serde_json::Value;

use crate::model::{AttributeMap, Model};
use crate::options::ProjectionOptions;

/// A model that carries its attributes as data rather than struct fields.
///
/// `MapModel` is the dynamic end of the [`Model`] spectrum: attributes are
/// stored in a plain [`AttributeMap`], so the schema is whatever the map
/// happens to contain. That makes it useful for prototyping, tests, and
/// callers whose attribute set is only known at runtime.
///
/// Names added to the hidden set stay readable through the raw
/// [`attributes`](Model::attributes) view but are omitted from the plain
/// [`to_map`](Model::to_map) view, the way ORM entities keep sensitive
/// columns out of their serialized form. Filling accepts every incoming
/// entry, known or not.
///
/// # Examples
///
/// ```
/// use projection::{serialize, MapModel};
/// use serde_json::json;
///
/// let user = MapModel::new()
///     .with_attribute("id", json!(1))
///     .with_attribute("name", json!("naguine"))
///     .with_attribute("secret", json!("s-42"))
///     .with_hidden(["secret"]);
///
/// let map = serialize(&user, None);
/// assert_eq!(map.get("name"), Some(&json!("naguine")));
/// assert!(!map.contains_key("secret"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapModel {
	attributes: AttributeMap,
	hidden: HashSet<String>,
	defaults: Option<ProjectionOptions>,
}

impl MapModel {
	/// Create a model with no attributes.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a model over an existing attribute map.
	pub fn from_map(attributes: AttributeMap) -> Self {
		Self {
			attributes,
			..Self::default()
		}
	}

	/// Set the attribute `name` to `value`.
	pub fn with_attribute<S: Into<String>>(mut self, name: S, value: Value) -> Self {
		self.attributes.insert(name.into(), value);
		self
	}

	/// Omit these attribute names from the plain serialized view.
	pub fn with_hidden<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.hidden.extend(names.into_iter().map(Into::into));
		self
	}

	/// Declare the options used when an operation receives none.
	pub fn with_default_options(mut self, options: ProjectionOptions) -> Self {
		self.defaults = Some(options);
		self
	}

	/// The attribute names hidden from the plain view.
	pub fn hidden(&self) -> &HashSet<String> {
		&self.hidden
	}
}

impl Model for MapModel {
	fn attributes(&self) -> AttributeMap {
		self.attributes.clone()
	}

	fn to_map(&self) -> AttributeMap {
		self.attributes
			.iter()
			.filter(|(name, _)| !self.hidden.contains(name.as_str()))
			.map(|(name, value)| (name.clone(), value.clone()))
			.collect()
	}

	fn fill(&mut self, data: &AttributeMap) {
		for (name, value) in data {
			self.attributes.insert(name.clone(), value.clone());
		}
	}

	fn attribute(&self, name: &str) -> Option<Value> {
		self.attributes.get(name).cloned()
	}

	fn set_attribute(&mut self, name: &str, value: Value) {
		self.attributes.insert(name.to_owned(), value);
	}

	fn default_options(&self) -> Option<ProjectionOptions> {
		self.defaults.clone()
	}
}
