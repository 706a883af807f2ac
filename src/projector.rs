//! Projection and hydration operations.
//!
//! The four free functions in this module move model state across the
//! model/plain-data boundary: [`serialize`] and [`serialize_many`] turn
//! models into plain attribute maps, [`deserialize`] and
//! [`deserialize_many`] fill models back from plain data. All four accept
//! an optional [`ProjectionOptions`] and fall back to the model's own
//! [`default_options`](Model::default_options) when the caller passes
//! none (or an empty value).

use serde_json::Value;

use crate::error::{ProjectionError, ProjectionResult};
use crate::model::{AttributeMap, Model};
use crate::options::ProjectionOptions;

/// Serialize a single model to a plain attribute map.
///
/// Without effective options this is the model's plain view,
/// [`to_map`](Model::to_map), unchanged. With options, attribute filtering
/// runs first:
///
/// - `only` keeps exactly the named attributes, drawn from the *raw*
///   attribute map — naming a hidden attribute surfaces it;
/// - `except` (when no `only` is declared) starts from the raw map, drops
///   the named attributes, and then keeps only keys the plain view also
///   contains — hidden attributes stay hidden;
/// - with neither, the plain view is used as-is.
///
/// Transforms run last, against the model's untransformed attribute
/// values, and always insert their key into the result, even when
/// filtering had dropped it.
///
/// # Arguments
///
/// * `model` - The model to serialize
/// * `options` - Explicit options, or `None` to use the model's defaults
///
/// # Examples
///
/// ```
/// use projection::{serialize, MapModel, ProjectionOptions};
/// use serde_json::json;
///
/// let user = MapModel::new()
///     .with_attribute("id", json!(1))
///     .with_attribute("name", json!("stephane"))
///     .with_attribute("password", json!("hot-club"));
///
/// let options = ProjectionOptions::new().with_except(["password"]);
/// let map = serialize(&user, Some(&options));
///
/// assert_eq!(map.get("name"), Some(&json!("stephane")));
/// assert!(!map.contains_key("password"));
/// ```
pub fn serialize<M: Model>(model: &M, options: Option<&ProjectionOptions>) -> AttributeMap {
	let Some(options) = resolve_options(model, options) else {
		return model.to_map();
	};

	let mut result = if let Some(only) = options.only() {
		model
			.attributes()
			.into_iter()
			.filter(|(name, _)| only.contains(name))
			.collect()
	} else if let Some(except) = options.except() {
		let visible = model.to_map();
		model
			.attributes()
			.into_iter()
			.filter(|(name, _)| !except.contains(name) && visible.contains_key(name))
			.collect()
	} else {
		model.to_map()
	};

	for (name, transform) in options.transforms() {
		let source = model.attribute(name).unwrap_or(Value::Null);
		result.insert(name.clone(), transform.as_ref()(source));
	}

	result
}

/// Serialize a slice of models, preserving order.
///
/// Options are resolved per model, so models with different default
/// options can serialize differently within one call.
///
/// # Examples
///
/// ```
/// use projection::{serialize_many, MapModel};
/// use serde_json::json;
///
/// let tracks = [
///     MapModel::new().with_attribute("title", json!("Nuages")),
///     MapModel::new().with_attribute("title", json!("Manoir")),
/// ];
///
/// let maps = serialize_many(&tracks, None);
/// assert_eq!(maps.len(), 2);
/// assert_eq!(maps[0].get("title"), Some(&json!("Nuages")));
/// ```
pub fn serialize_many<M: Model>(models: &[M], options: Option<&ProjectionOptions>) -> Vec<AttributeMap> {
	models.iter().map(|model| serialize(model, options)).collect()
}

/// Hydrate a single model from a plain JSON object.
///
/// `data` must be a JSON object; anything else is a
/// [`TypeMismatch`](ProjectionError::TypeMismatch). The object's entries
/// are filtered by the effective options' `only`/`except` selection and
/// assigned onto the model through [`fill`](Model::fill). Transforms run
/// afterwards: each reads the attribute's freshly hydrated value (or
/// [`Value::Null`] when the model lacks the attribute) and writes the
/// transformed value back through
/// [`set_attribute`](Model::set_attribute), whether or not filtering let
/// the attribute through.
///
/// # Arguments
///
/// * `model` - The model to fill
/// * `data` - A JSON object of attribute values
/// * `options` - Explicit options, or `None` to use the model's defaults
///
/// # Errors
///
/// Returns [`ProjectionError::TypeMismatch`] when `data` is not an
/// object.
///
/// # Examples
///
/// ```
/// use projection::{deserialize, MapModel, Model};
/// use serde_json::json;
///
/// let mut user = MapModel::new().with_attribute("name", json!("joseph"));
/// deserialize(&mut user, &json!({"name": "django", "id": 42}), None).unwrap();
///
/// assert_eq!(user.attribute("name"), Some(json!("django")));
/// assert_eq!(user.attribute("id"), Some(json!(42)));
/// ```
pub fn deserialize<M: Model>(
	model: &mut M,
	data: &Value,
	options: Option<&ProjectionOptions>,
) -> ProjectionResult<()> {
	let data = data
		.as_object()
		.ok_or_else(|| ProjectionError::type_mismatch("an object", data))?;

	let Some(options) = resolve_options(model, options) else {
		model.fill(data);
		return Ok(());
	};

	if let Some(only) = options.only() {
		model.fill(&filter_entries(data, |name| only.contains(name)));
	} else if let Some(except) = options.except() {
		model.fill(&filter_entries(data, |name| !except.contains(name)));
	} else {
		model.fill(data);
	}

	for (name, transform) in options.transforms() {
		let current = model.attribute(name).unwrap_or(Value::Null);
		model.set_attribute(name, transform.as_ref()(current));
	}

	Ok(())
}

/// Hydrate a slice of models from a JSON array of objects.
///
/// `data` must be a JSON array; anything else is a
/// [`TypeMismatch`](ProjectionError::TypeMismatch). Rows pair with models
/// by index unless the effective options declare a
/// [`match_by`](ProjectionOptions::with_match_by) key.
///
/// In index-aligned mode every model consumes the row at its own index.
/// Surplus rows are ignored; running out of rows aborts with a
/// [`LengthMismatch`](ProjectionError::LengthMismatch), leaving models
/// before the shortfall hydrated.
///
/// In match mode each model looks up the first row whose value at the key
/// equals the model's own. Models whose key is absent or null, and models
/// with no matching row, are left untouched. The pairing mode is decided
/// once, from the explicit options or the first model's defaults.
///
/// # Errors
///
/// Returns [`ProjectionError::TypeMismatch`] when `data` is not an array
/// or a consumed row is not an object, and
/// [`ProjectionError::LengthMismatch`] when index-aligned hydration runs
/// out of rows. Hydration already performed when the error arises is not
/// rolled back.
///
/// # Examples
///
/// ```
/// use projection::{deserialize_many, MapModel, Model, ProjectionOptions};
/// use serde_json::json;
///
/// let mut sides = [
///     MapModel::new().with_attribute("id", json!(1)),
///     MapModel::new().with_attribute("id", json!(2)),
/// ];
/// let data = json!([
///     {"id": 2, "title": "B side"},
///     {"id": 1, "title": "A side"},
/// ]);
///
/// let options = ProjectionOptions::new().with_match_by("id");
/// deserialize_many(&mut sides, &data, Some(&options)).unwrap();
///
/// assert_eq!(sides[0].attribute("title"), Some(json!("A side")));
/// assert_eq!(sides[1].attribute("title"), Some(json!("B side")));
/// ```
pub fn deserialize_many<M: Model>(
	models: &mut [M],
	data: &Value,
	options: Option<&ProjectionOptions>,
) -> ProjectionResult<()> {
	let rows = data
		.as_array()
		.ok_or_else(|| ProjectionError::type_mismatch("an array", data))?;

	let match_key = models
		.first()
		.and_then(|model| resolve_options(model, options))
		.and_then(|options| options.match_by().map(str::to_owned));

	match match_key {
		Some(key) => {
			tracing::debug!(
				"hydrating {} models by matching rows on {:?}",
				models.len(),
				key
			);
			for row in rows {
				if !row.is_object() {
					return Err(ProjectionError::type_mismatch("an object", row));
				}
			}
			for model in models.iter_mut() {
				let Some(wanted) = model.attribute(&key).filter(|value| !value.is_null()) else {
					continue;
				};
				let matched = rows.iter().find(|row| row.get(key.as_str()) == Some(&wanted));
				if let Some(row) = matched {
					deserialize(model, row, options)?;
				}
			}
		}
		None => {
			let model_count = models.len();
			for (index, model) in models.iter_mut().enumerate() {
				let row = rows.get(index).ok_or(ProjectionError::LengthMismatch {
					models: model_count,
					rows: rows.len(),
				})?;
				deserialize(model, row, options)?;
			}
		}
	}

	Ok(())
}

/// Pick the options in effect for one operation on one model.
///
/// Explicit, non-empty options win; otherwise the model's own defaults
/// apply, themselves ignored when empty. Empty options are
/// indistinguishable from absent ones at every level.
fn resolve_options<M: Model>(
	model: &M,
	explicit: Option<&ProjectionOptions>,
) -> Option<ProjectionOptions> {
	match explicit {
		Some(options) if !options.is_empty() => Some(options.clone()),
		_ => {
			let defaults = model.default_options().filter(|options| !options.is_empty());
			if defaults.is_some() {
				tracing::trace!("no explicit options, using model defaults");
			}
			defaults
		}
	}
}

fn filter_entries<F>(data: &AttributeMap, keep: F) -> AttributeMap
where
	F: Fn(&str) -> bool,
{
	data.iter()
		.filter(|(name, _)| keep(name))
		.map(|(name, value)| (name.clone(), value.clone()))
		.collect()
}
