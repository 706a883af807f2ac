//! Options controlling projection and hydration.
//!
//! [`ProjectionOptions`] is the single configuration value accepted by
//! every projector operation. All of its parts are optional and
//! independent: attribute filtering (`only` / `except`), per-attribute
//! value transforms, and the row-matching key used by collection
//! hydration.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// A per-attribute value transform.
///
/// Transforms receive the untransformed source value and return the value
/// to store in its place. When serializing, the source is the model's
/// current attribute value; when hydrating, it is the value the attribute
/// holds after filling. A missing attribute reads as [`Value::Null`].
pub type Transform = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Options controlling how models are serialized and hydrated.
///
/// An all-default value is *empty*, and an empty value does not count as
/// an explicit configuration: operations that receive one fall back to
/// the model's [`default_options`](crate::Model::default_options), exactly
/// as if no options had been passed. A declared-but-empty attribute
/// selection, on the other hand, is meaningful: `with_only([])` selects
/// nothing at all.
///
/// # Examples
///
/// ```
/// use projection::ProjectionOptions;
/// use serde_json::json;
///
/// let options = ProjectionOptions::new()
///     .with_except(["password"])
///     .with_transform("name", |value| {
///         json!(value.as_str().unwrap_or_default().to_uppercase())
///     });
///
/// assert!(!options.is_empty());
/// assert!(options.except().is_some());
/// assert!(options.transforms().contains_key("name"));
/// ```
#[derive(Clone, Default)]
pub struct ProjectionOptions {
	only: Option<HashSet<String>>,
	except: Option<HashSet<String>>,
	transforms: HashMap<String, Transform>,
	match_by: Option<String>,
}

impl ProjectionOptions {
	/// Create an empty set of options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Restrict the operation to exactly these attribute names.
	///
	/// Takes precedence over [`with_except`](Self::with_except) when both
	/// are declared. Declaring an empty list selects nothing.
	pub fn with_only<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.only = Some(names.into_iter().map(Into::into).collect());
		self
	}

	/// Exclude these attribute names from the operation.
	///
	/// Ignored when [`with_only`](Self::with_only) is also declared.
	pub fn with_except<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.except = Some(names.into_iter().map(Into::into).collect());
		self
	}

	/// Override the value at `name` with the result of `transform`.
	///
	/// Transforms run after filtering and always insert their key into the
	/// result, whether or not filtering kept it. Registering a second
	/// transform for the same name replaces the first.
	pub fn with_transform<S, F>(mut self, name: S, transform: F) -> Self
	where
		S: Into<String>,
		F: Fn(Value) -> Value + Send + Sync + 'static,
	{
		self.transforms.insert(name.into(), Arc::new(transform));
		self
	}

	/// Pair data rows with models by equal value at `key` instead of by
	/// index during collection hydration.
	///
	/// Only [`deserialize_many`](crate::deserialize_many) consults this;
	/// the other operations ignore it.
	pub fn with_match_by<S: Into<String>>(mut self, key: S) -> Self {
		self.match_by = Some(key.into());
		self
	}

	/// The attribute names the operation is restricted to, if restricted.
	pub fn only(&self) -> Option<&HashSet<String>> {
		self.only.as_ref()
	}

	/// The excluded attribute names, if any were declared.
	pub fn except(&self) -> Option<&HashSet<String>> {
		self.except.as_ref()
	}

	/// The registered value transforms, keyed by attribute name.
	pub fn transforms(&self) -> &HashMap<String, Transform> {
		&self.transforms
	}

	/// The row-matching key for collection hydration, if set.
	pub fn match_by(&self) -> Option<&str> {
		self.match_by.as_deref()
	}

	/// Whether nothing at all has been configured.
	///
	/// Note the distinction from a declared-but-empty selection: options
	/// built with `with_only([])` are not empty.
	pub fn is_empty(&self) -> bool {
		self.only.is_none()
			&& self.except.is_none()
			&& self.transforms.is_empty()
			&& self.match_by.is_none()
	}
}

impl fmt::Debug for ProjectionOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		// Transforms are opaque closures; show their keys in stable order.
		let mut transform_names: Vec<&str> = self.transforms.keys().map(String::as_str).collect();
		transform_names.sort_unstable();
		f.debug_struct("ProjectionOptions")
			.field("only", &self.only)
			.field("except", &self.except)
			.field("transforms", &transform_names)
			.field("match_by", &self.match_by)
			.finish()
	}
}
