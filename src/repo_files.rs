use crate::{ApplyOutcome, Error, Hunk, PatchWriter, Result, applier, json_merge};
use serde_json::Value;
use simple_fs::SPath;
use std::fs;

/// A plaintext file without known structure.
/// It can only be patched via a series of find-replace/append-line hunks.
#[derive(Debug, Clone)]
pub struct PlainTextFile {
	pub path: SPath,
	pub contents: String,
}

impl PlainTextFile {
	pub fn new(path: impl Into<SPath>, contents: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			contents: contents.into(),
		}
	}

	pub fn load(path: impl Into<SPath>) -> Result<Self> {
		let path = path.into();
		let contents =
			fs::read_to_string(&path).map_err(|err| Error::io_read_file(path.as_str(), err))?;

		Ok(Self { path, contents })
	}

	/// Applies the hunks and stages the patched contents into `writer`.
	pub fn apply_hunks(&self, hunks: &[Hunk], writer: &PatchWriter) -> ApplyOutcome {
		let outcome = applier::apply_patch(&self.contents, hunks);
		writer.update_file(self.path.clone(), outcome.content.clone());

		outcome
	}
}

/// A file that stores JSON (message catalogs, catalog metadata).
/// It can be patched by merging new values into it; removing is not supported.
#[derive(Debug, Clone)]
pub struct JsonFile {
	pub path: SPath,
	pub json: Value,
}

impl JsonFile {
	/// Loads the file. A file that does not exist yet loads as `{}` (catalogs
	/// are created on first extraction); malformed JSON is a surfaced error.
	pub fn load(path: impl Into<SPath>) -> Result<Self> {
		let path = path.into();

		let json = if path.exists() {
			let contents =
				fs::read_to_string(&path).map_err(|err| Error::io_read_file(path.as_str(), err))?;
			serde_json::from_str(&contents)?
		} else {
			Value::Object(Default::default())
		};

		Ok(Self { path, json })
	}

	/// Deep-merges `patch` into the current JSON and stages the pretty-printed
	/// result into `writer`. A `null` patch is a no-op.
	pub fn merge_update(&self, patch: &Value, writer: &PatchWriter) -> Result<Value> {
		if patch.is_null() {
			return Ok(self.json.clone());
		}

		let merged = json_merge::merge(&self.json, patch);
		let mut contents = serde_json::to_string_pretty(&merged)?;
		contents.push('\n');
		writer.update_file(self.path.clone(), contents);

		Ok(merged)
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;
	use serde_json::json;

	#[test]
	fn test_json_file_load_missing_is_empty_object() -> Result<()> {
		// -- Exec
		let file = JsonFile::load(SPath::new("tests/.out/does-not-exist/en.json"))?;

		// -- Check
		assert_eq!(file.json, json!({}));

		Ok(())
	}

	#[test]
	fn test_json_file_merge_update_null_is_noop() -> Result<()> {
		// -- Setup & Fixtures
		let writer = PatchWriter::with_staging_dir("Test <t@t>", SPath::new("tests/.out/noop_staging"));
		let file = JsonFile {
			path: SPath::new("tests/.out/fake/en.json"),
			json: json!({"a": 1}),
		};

		// -- Exec
		let merged = file.merge_update(&Value::Null, &writer)?;

		// -- Check
		assert_eq!(merged, json!({"a": 1}));
		// close the scope explicitly so the test does not rely on Drop logging
		let _ = writer.close();

		Ok(())
	}
}

// endregion: --- Tests
