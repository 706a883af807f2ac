//! Options-driven projection and hydration between models and plain maps.
//!
//! This crate moves ORM-style model state across the typed/plain-data
//! boundary: models (and collections of models) serialize to plain JSON
//! attribute maps and hydrate back from them, with the shape of the
//! exchange controlled by a small options value.
//!
//! # Features
//!
//! - **Projection**: serialize a model to its plain attribute map,
//!   keeping `only` a chosen set of attributes or dropping an `except`
//!   set
//! - **Hydration**: fill a model back from a plain map through the same
//!   attribute filters
//! - **Transforms**: override single attribute values with caller-supplied
//!   functions, applied after filtering
//! - **Collections**: both directions over slices, index-aligned or
//!   matched by a key attribute
//! - **Model defaults**: models can declare the options used whenever a
//!   caller passes none
//!
//! The host object model stays in charge of storage. Anything
//! implementing the small [`Model`] capability trait can be projected;
//! two implementations ship with the crate, [`MapModel`] for dynamic
//! attribute bags and [`SerdeModel`] for plain serde-serializable
//! structs.
//!
//! # Quick Start
//!
//! ```
//! use projection::{deserialize, serialize, MapModel, Model, ProjectionOptions};
//! use serde_json::{json, Value};
//!
//! let user = MapModel::new()
//!     .with_attribute("id", json!(1))
//!     .with_attribute("name", json!("django"))
//!     .with_attribute("api_key", json!("k-123"))
//!     .with_hidden(["api_key"]);
//!
//! // Plain serialization honors the model's hidden attributes.
//! let map = serialize(&user, None);
//! assert!(!map.contains_key("api_key"));
//!
//! // Filter and transform on the way out.
//! let options = ProjectionOptions::new()
//!     .with_only(["id", "name"])
//!     .with_transform("name", |value| {
//!         json!(value.as_str().unwrap_or_default().to_uppercase())
//!     });
//! let map = serialize(&user, Some(&options));
//! assert_eq!(map.get("name"), Some(&json!("DJANGO")));
//!
//! // And hydrate back in.
//! let mut fresh = MapModel::new();
//! deserialize(&mut fresh, &Value::Object(map), None).unwrap();
//! assert_eq!(fresh.attribute("id"), Some(json!(1)));
//! ```
//!
//! # Architecture
//!
//! - [`model`]: the [`Model`] capability trait and the [`AttributeMap`]
//!   alias every operation exchanges
//! - [`options`]: [`ProjectionOptions`], attribute filtering and value
//!   transforms
//! - [`projector`]: the four operations, [`serialize`],
//!   [`serialize_many`], [`deserialize`] and [`deserialize_many`]
//! - [`map_model`] / [`serde_model`]: the two shipped [`Model`]
//!   implementations
//! - [`error`]: [`ProjectionError`] and the [`ProjectionResult`] alias

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod map_model;
pub mod model;
pub mod options;
pub mod prelude;
pub mod projector;
pub mod serde_model;

pub use error::{ProjectionError, ProjectionResult};
pub use map_model::MapModel;
pub use model::{AttributeMap, Model};
pub use options::{ProjectionOptions, Transform};
pub use projector::{deserialize, deserialize_many, serialize, serialize_many};
pub use serde_model::SerdeModel;
