use serde_json::Value;

/// Deep-merges `patch` into `base` and returns the new tree (additive only).
///
/// - Both sides plain objects: recurse per key.
/// - Anything else (arrays included): the patch value replaces the base value wholesale.
/// - Keys absent from `patch` are preserved; no key is ever deleted.
pub fn merge(base: &Value, patch: &Value) -> Value {
	match (base, patch) {
		(Value::Object(base_map), Value::Object(patch_map)) => {
			let mut merged = base_map.clone();

			for (key, patch_value) in patch_map {
				let new_value = match merged.get(key) {
					Some(base_value) => merge(base_value, patch_value),
					None => patch_value.clone(),
				};
				merged.insert(key.clone(), new_value);
			}

			Value::Object(merged)
		}
		_ => patch.clone(),
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;
	use serde_json::json;

	#[test]
	fn test_merge_deep_additive() -> Result<()> {
		// -- Setup & Fixtures
		let base = json!({"a": {"b": 1}});
		let patch = json!({"a": {"c": 2}});

		// -- Exec
		let merged = merge(&base, &patch);

		// -- Check
		assert_eq!(merged, json!({"a": {"b": 1, "c": 2}}));
		// base untouched
		assert_eq!(base, json!({"a": {"b": 1}}));

		Ok(())
	}

	#[test]
	fn test_merge_never_deletes() -> Result<()> {
		// -- Setup & Fixtures
		let base = json!({"keep": "me", "nested": {"keep": true}});
		let patch = json!({"nested": {"add": 1}});

		// -- Exec
		let merged = merge(&base, &patch);

		// -- Check
		assert_eq!(merged["keep"], "me");
		assert_eq!(merged["nested"]["keep"], true);
		assert_eq!(merged["nested"]["add"], 1);

		Ok(())
	}

	#[test]
	fn test_merge_arrays_replaced_wholesale() -> Result<()> {
		// -- Setup & Fixtures
		let base = json!({"locales": ["en", "pl"]});
		let patch = json!({"locales": ["ru"]});

		// -- Exec
		let merged = merge(&base, &patch);

		// -- Check
		assert_eq!(merged["locales"], json!(["ru"]));

		Ok(())
	}

	#[test]
	fn test_merge_scalar_overwrites_object() -> Result<()> {
		// -- Setup & Fixtures
		let base = json!({"a": {"b": 1}});
		let patch = json!({"a": 42});

		// -- Exec
		let merged = merge(&base, &patch);

		// -- Check
		assert_eq!(merged, json!({"a": 42}));

		Ok(())
	}
}

// endregion: --- Tests
