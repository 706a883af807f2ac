//! Convenience re-exports for common usage.
//!
//! A single import for everything the typical caller touches:
//!
//! ```
//! use projection::prelude::*;
//! use serde_json::json;
//!
//! let model = MapModel::new().with_attribute("id", json!(1));
//! let map = serialize(&model, None);
//! assert_eq!(map.get("id"), Some(&json!(1)));
//! ```

// Error types
pub use crate::error::{ProjectionError, ProjectionResult};

// Model capability and implementations
pub use crate::map_model::MapModel;
pub use crate::model::{AttributeMap, Model};
pub use crate::serde_model::SerdeModel;

// Options
pub use crate::options::{ProjectionOptions, Transform};

// Operations
pub use crate::projector::{deserialize, deserialize_many, serialize, serialize_many};
