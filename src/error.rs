//! Error types for projection operations.
//!
//! Every fallible operation in this crate returns [`ProjectionResult`],
//! whose error side is [`ProjectionError`]. Model shape is checked by the
//! type system, so errors only arise from the dynamic data handed to the
//! hydration operations.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while hydrating models from plain data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
	/// The supplied data did not have the shape the operation requires.
	///
	/// Single-model hydration requires an object; collection hydration
	/// requires an array whose rows are objects.
	#[error("type mismatch: expected {expected}, got {actual}")]
	TypeMismatch {
		/// The shape the operation needed.
		expected: &'static str,
		/// The kind of value that was actually supplied.
		actual: &'static str,
	},

	/// Index-aligned collection hydration ran out of data rows.
	#[error("length mismatch: {models} models but only {rows} data rows")]
	LengthMismatch {
		/// Number of models awaiting hydration.
		models: usize,
		/// Number of data rows supplied.
		rows: usize,
	},
}

impl ProjectionError {
	/// Create a [`TypeMismatch`](Self::TypeMismatch) describing `actual`.
	pub fn type_mismatch(expected: &'static str, actual: &Value) -> Self {
		Self::TypeMismatch {
			expected,
			actual: value_kind(actual),
		}
	}
}

/// Short human-readable name for a JSON value's kind.
fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

/// Result type alias for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;
