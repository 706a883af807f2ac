//! The capability set required of projectable models.
//!
//! The projector never stores model state itself. Anything that can expose
//! its attributes as plain JSON values, accept a plain mapping back, and
//! read or write single attributes by name can be serialized and hydrated.
//! The trait is deliberately small so that implementations stay thin
//! adapters over the host object model: a typical ORM entity already knows
//! how to do everything listed here.

use serde_json::Value;

use crate::options::ProjectionOptions;

/// A plain mapping of attribute name to JSON value.
///
/// Every map exchanged with the projector uses this type: raw attribute
/// maps, serialized output, and hydration input alike.
pub type AttributeMap = serde_json::Map<String, Value>;

/// Capability set required of a projectable model.
///
/// The trait distinguishes two views of a model's data:
///
/// - [`attributes`](Model::attributes) is the *raw* view, every attribute
///   the model carries;
/// - [`to_map`](Model::to_map) is the *plain* view, what the model is
///   willing to show in serialized form.
///
/// Implementations that hide nothing return the same map from both. The
/// split exists so that hidden attributes (password hashes, tokens) stay
/// out of plain serialization yet remain reachable when the caller names
/// them explicitly in an `only` selection.
///
/// # Examples
///
/// ```
/// use projection::{MapModel, Model};
/// use serde_json::json;
///
/// let mut reed = MapModel::new()
///     .with_attribute("name", json!("reed"))
///     .with_attribute("api_key", json!("k-5150"))
///     .with_hidden(["api_key"]);
///
/// assert_eq!(reed.attribute("name"), Some(json!("reed")));
/// assert!(reed.attributes().contains_key("api_key"));
/// assert!(!reed.to_map().contains_key("api_key"));
///
/// reed.set_attribute("name", json!("ed"));
/// assert_eq!(reed.attribute("name"), Some(json!("ed")));
/// ```
pub trait Model {
	/// The raw attribute map, including attributes the plain view hides.
	fn attributes(&self) -> AttributeMap;

	/// The plain serialized view of the model.
	///
	/// Implementations may omit attributes here that are still present in
	/// [`attributes`](Model::attributes); they must not add any.
	fn to_map(&self) -> AttributeMap;

	/// Assign each entry in `data` onto the corresponding attribute.
	///
	/// How unknown names and out-of-domain values are handled is the
	/// implementation's policy; the projector neither requires nor checks
	/// that every assignment takes effect.
	fn fill(&mut self, data: &AttributeMap);

	/// Read a single attribute by name.
	///
	/// Returns `None` when the model has no such attribute. The projector
	/// feeds transforms [`Value::Null`] in that case.
	fn attribute(&self, name: &str) -> Option<Value>;

	/// Write a single attribute by name.
	fn set_attribute(&mut self, name: &str, value: Value);

	/// Options applied when an operation receives no explicit options.
	///
	/// The default implementation declares none. Models that carry a
	/// standing configuration return it here; an explicit, non-empty
	/// options value passed to an operation always wins over it.
	fn default_options(&self) -> Option<ProjectionOptions> {
		None
	}
}
