//! Shared model fixtures.
//!
//! Provides a typed host model with one hidden attribute, adapted to the
//! projector the way an ORM entity would be: named access over typed
//! fields, with the password hash kept out of the plain view.

use projection::{AttributeMap, Model};
use serde_json::{Value, json};

/// A typed user model whose `password_hash` is hidden from serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
	pub id: Option<i64>,
	pub username: String,
	pub email: String,
	pub password_hash: String,
}

impl User {
	/// A populated fixture user.
	pub fn sample() -> Self {
		Self {
			id: Some(1),
			username: "django".to_string(),
			email: "django@example.com".to_string(),
			password_hash: "pbkdf2$1910".to_string(),
		}
	}

	/// An all-default fixture user awaiting hydration.
	pub fn blank() -> Self {
		Self {
			id: None,
			username: String::new(),
			email: String::new(),
			password_hash: String::new(),
		}
	}
}

impl Model for User {
	fn attributes(&self) -> AttributeMap {
		let mut map = AttributeMap::new();
		map.insert("id".to_owned(), json!(self.id));
		map.insert("username".to_owned(), json!(self.username));
		map.insert("email".to_owned(), json!(self.email));
		map.insert("password_hash".to_owned(), json!(self.password_hash));
		map
	}

	fn to_map(&self) -> AttributeMap {
		let mut map = self.attributes();
		map.remove("password_hash");
		map
	}

	fn fill(&mut self, data: &AttributeMap) {
		for (name, value) in data {
			self.set_attribute(name, value.clone());
		}
	}

	fn attribute(&self, name: &str) -> Option<Value> {
		match name {
			"id" => Some(json!(self.id)),
			"username" => Some(json!(self.username)),
			"email" => Some(json!(self.email)),
			"password_hash" => Some(json!(self.password_hash)),
			_ => None,
		}
	}

	fn set_attribute(&mut self, name: &str, value: Value) {
		match name {
			"id" => self.id = value.as_i64(),
			"username" => {
				if let Some(text) = value.as_str() {
					self.username = text.to_owned();
				}
			}
			"email" => {
				if let Some(text) = value.as_str() {
					self.email = text.to_owned();
				}
			}
			"password_hash" => {
				if let Some(text) = value.as_str() {
					self.password_hash = text.to_owned();
				}
			}
			// This host drops names it does not know.
			_ => {}
		}
	}
}
