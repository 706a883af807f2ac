//! Option resolution integration tests
//!
//! Tests how explicit options, empty options, and model-declared defaults
//! interact, plus the precedence between the two filtering modes.

use projection::{
	MapModel, Model, ProjectionOptions, deserialize, deserialize_many, serialize, serialize_many,
};
use rstest::rstest;
use serde_json::json;

mod helpers;
use helpers::test_models::User;

fn profile_with_defaults() -> MapModel {
	MapModel::new()
		.with_attribute("name", json!("django"))
		.with_attribute("role", json!("guitarist"))
		.with_default_options(ProjectionOptions::new().with_only(["name"]))
}

/// Test: Model defaults apply when the caller passes no options
#[rstest]
fn test_model_defaults_apply_without_explicit_options() {
	let map = serialize(&profile_with_defaults(), None);

	assert_eq!(map.len(), 1);
	assert_eq!(map.get("name"), Some(&json!("django")));
}

/// Test: Empty explicit options behave exactly like none at all
#[rstest]
fn test_empty_explicit_options_fall_back_to_defaults() {
	let model = profile_with_defaults();
	let empty = ProjectionOptions::new();

	assert_eq!(serialize(&model, Some(&empty)), serialize(&model, None));
}

/// Test: Non-empty explicit options replace the defaults wholesale
#[rstest]
fn test_explicit_options_replace_defaults_wholesale() {
	let model = MapModel::new()
		.with_attribute("name", json!("django"))
		.with_attribute("role", json!("guitarist"))
		.with_default_options(
			ProjectionOptions::new()
				.with_only(["name"])
				.with_transform("name", |value| {
					json!(value.as_str().unwrap_or_default().to_uppercase())
				}),
		);

	let explicit = ProjectionOptions::new().with_only(["role"]);
	let map = serialize(&model, Some(&explicit));

	// No merging: the default's transform is gone along with its filter.
	assert_eq!(map.len(), 1);
	assert_eq!(map.get("role"), Some(&json!("guitarist")));
}

/// Test: `only` wins over `except` when both are declared
#[rstest]
fn test_only_wins_over_except_when_serializing() {
	let user = User::sample();
	let options = ProjectionOptions::new()
		.with_only(["username"])
		.with_except(["username"]);

	let map = serialize(&user, Some(&options));

	assert_eq!(map.len(), 1);
	assert_eq!(map.get("username"), Some(&json!("django")));
}

/// Test: The same precedence holds when hydrating
#[rstest]
fn test_only_wins_over_except_when_hydrating() {
	let mut user = User::sample();
	let data = json!({"username": "grappelli", "email": "swapped@example.com"});
	let options = ProjectionOptions::new()
		.with_only(["username"])
		.with_except(["username"]);

	deserialize(&mut user, &data, Some(&options)).unwrap();

	assert_eq!(user.username, "grappelli");
	assert_eq!(user.email, "django@example.com");
}

/// Test: Defaults resolve per model within one collection call
#[rstest]
fn test_defaults_resolve_per_model_in_collections() {
	let models = [
		profile_with_defaults(),
		MapModel::new()
			.with_attribute("name", json!("stephane"))
			.with_attribute("role", json!("violinist")),
	];

	let maps = serialize_many(&models, None);

	assert_eq!(maps[0].len(), 1);
	assert_eq!(maps[1].len(), 2);
}

/// Test: Model defaults drive hydration too
#[rstest]
fn test_model_defaults_drive_hydration() {
	let mut model = MapModel::new()
		.with_attribute("name", json!("django"))
		.with_attribute("role", json!("guitarist"))
		.with_default_options(ProjectionOptions::new().with_except(["role"]));

	deserialize(
		&mut model,
		&json!({"name": "babik", "role": "impostor"}),
		None,
	)
	.unwrap();

	assert_eq!(model.attribute("name"), Some(json!("babik")));
	assert_eq!(model.attribute("role"), Some(json!("guitarist")));
}

/// Test: The pairing mode can come from the first model's defaults
#[rstest]
fn test_match_by_from_model_defaults() {
	let mut models = [
		MapModel::new()
			.with_attribute("id", json!(1))
			.with_default_options(ProjectionOptions::new().with_match_by("id")),
		MapModel::new().with_attribute("id", json!(2)),
	];
	let data = json!([
		{"id": 2, "name": "second"},
		{"id": 1, "name": "first"},
	]);

	deserialize_many(&mut models, &data, None).unwrap();

	assert_eq!(models[0].attribute("name"), Some(json!("first")));
	assert_eq!(models[1].attribute("name"), Some(json!("second")));
}
