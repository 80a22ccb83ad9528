use crate::{Error, Hunk, Result, matcher};
use tracing::{error, info};

/// Result of applying a list of hunks to one buffer.
#[derive(Debug, Clone)]
pub struct ApplyOutcome {
	/// The final buffer, with every successful hunk applied.
	pub content: String,
	pub hunks: Vec<HunkStatus>,
}

#[derive(Debug, Clone)]
pub struct HunkStatus {
	pub kind: &'static str,
	pub success: bool,
	pub error_msg: Option<String>,
}

impl ApplyOutcome {
	pub fn all_applied(&self) -> bool {
		self.hunks.iter().all(|h| h.success)
	}
}

/// Applies the hunks in list order against the progressively updated buffer.
///
/// Never fails as a whole: a hunk that does not apply leaves the buffer
/// unchanged for that step, gets its error recorded and logged, and
/// processing continues with the next hunk.
pub fn apply_patch(source: &str, hunks: &[Hunk]) -> ApplyOutcome {
	let mut content = source.to_string();
	let mut statuses = Vec::with_capacity(hunks.len());

	for hunk in hunks {
		let kind = hunk_kind(hunk);

		let res = apply_hunk(&content, hunk);

		let status = match res {
			Ok(new_content) => {
				info!("Applied {kind} hunk");
				content = new_content;
				HunkStatus {
					kind,
					success: true,
					error_msg: None,
				}
			}
			Err(err) => {
				error!("Hunk does not apply: {err}");
				HunkStatus {
					kind,
					success: false,
					error_msg: Some(err.to_string()),
				}
			}
		};

		statuses.push(status);
	}

	ApplyOutcome {
		content,
		hunks: statuses,
	}
}

// region:    --- Support

fn hunk_kind(hunk: &Hunk) -> &'static str {
	match hunk {
		Hunk::FindReplace { .. } => "find-replace",
		Hunk::AppendLine { .. } => "append-line",
	}
}

fn apply_hunk(content: &str, hunk: &Hunk) -> Result<String> {
	match hunk {
		Hunk::FindReplace { find, replace } => {
			let (start, end) = matcher::match_range(content, find)?;

			let mut next = String::with_capacity(content.len() + replace.len());
			next.push_str(&content[..start]);
			next.push_str(replace);
			next.push_str(&content[end..]);

			Ok(next)
		}

		Hunk::AppendLine {
			match_line,
			append_after,
		} => {
			let lines: Vec<&str> = content.split('\n').collect();

			let matched: Vec<usize> = lines
				.iter()
				.enumerate()
				.filter(|(_, line)| line.contains(match_line.as_str()))
				.map(|(idx, _)| idx)
				.collect();

			// Zero or multiple matches means the line reference is ambiguous.
			if matched.len() != 1 {
				return Err(Error::ambiguous_line(match_line, matched.len()));
			}
			let idx = matched[0];

			let mut new_lines: Vec<&str> = lines;
			new_lines.insert(idx + 1, append_after.trim());

			Ok(new_lines.join("\n"))
		}
	}
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
