use crate::{Error, Result};
use serde::Deserialize;
use tracing::{debug, error};

/// A region of interest in a flagged source file (1-based line/column).
#[derive(Debug, Clone)]
pub struct SourceRegion {
	pub line: u32,
	pub column: u32,
	pub end_line: Option<u32>,
	pub end_column: Option<u32>,
}

/// One file flagged by the external lint scan, with its raw contents and
/// the regions the patch-instruction producer should look at.
#[derive(Debug, Clone)]
pub struct FlaggedFile {
	pub path: String,
	pub source: String,
	pub regions: Vec<SourceRegion>,
}

/// Parses a lint report (JSON array of per-file entries) and keeps the files
/// with at least one message for `rule_id`.
///
/// A matching message without line/column position is a caller-input defect:
/// that file is skipped (logged), sibling files are unaffected. A malformed
/// report is a surfaced parse error.
pub fn flagged_files(report_json: &str, rule_id: &str) -> Result<Vec<FlaggedFile>> {
	let entries: Vec<LintFileEntry> = serde_json::from_str(report_json)?;

	let mut files = Vec::new();

	for entry in entries {
		let matching: Vec<&LintMessage> = entry
			.messages
			.iter()
			.filter(|m| m.rule_id.as_deref() == Some(rule_id))
			.collect();

		if matching.is_empty() {
			continue;
		}

		let regions: Result<Vec<SourceRegion>> = matching
			.iter()
			.map(|m| match (m.line, m.column) {
				(Some(line), Some(column)) => Ok(SourceRegion {
					line,
					column,
					end_line: m.end_line,
					end_column: m.end_column,
				}),
				_ => Err(Error::rule_region_missing(&entry.file_path)),
			})
			.collect();

		match regions {
			Ok(regions) => files.push(FlaggedFile {
				path: entry.file_path,
				source: entry.source,
				regions,
			}),
			Err(err) => error!("Skipping flagged file: {err}"),
		}
	}

	debug!("Found flagged regions in {} files", files.len());

	Ok(files)
}

// region:    --- Wire Types

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LintFileEntry {
	file_path: String,
	#[serde(default)]
	messages: Vec<LintMessage>,
	#[serde(default)]
	source: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LintMessage {
	rule_id: Option<String>,
	line: Option<u32>,
	column: Option<u32>,
	end_line: Option<u32>,
	end_column: Option<u32>,
}

// endregion: --- Wire Types

// region:    --- Tests


// endregion: --- Tests
