use serde::Deserialize;
use serde_json::Value;

/// One atomic edit instruction against a text buffer.
///
/// This is a closed set: the producer only ever emits these two shapes, and
/// dispatch is by exhaustive match so a new hunk kind is a compile-time change.
/// On the wire the producer emits no discriminator, so deserialization is
/// untagged (the field shapes are disjoint).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Hunk {
	/// Replaces the located span of `find` with `replace`.
	FindReplace { find: String, replace: String },

	/// Inserts `append_after` as a new line after the unique line
	/// containing `match_line`.
	#[serde(rename_all = "camelCase")]
	AppendLine { match_line: String, append_after: String },
}

/// The typed result shape of one patch-instruction producer call
/// (an LLM in the source system; opaque here).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractReply {
	/// Ordered edit operations for the source file.
	#[serde(default)]
	pub patch: Vec<Hunk>,

	/// Message-catalog fragment to deep-merge, rooted at the catalog root.
	#[serde(default)]
	pub messages: Value,

	/// Catalog metadata fragment to deep-merge.
	#[serde(default)]
	pub metadata: Value,

	/// Free-text notes for human review (not interpreted by this crate).
	#[serde(default, alias = "translatorNotes")]
	pub notes: String,
}

// region:    --- Tests


// endregion: --- Tests
