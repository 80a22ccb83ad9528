use crate::Result;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc2822;

/// Column width for wrapping the patch body text.
pub const BODY_WRAP_WIDTH: usize = 72;

const PLACEHOLDER_IDENTITY_LINE: &str = "From 0000000000000000000000000000000000000000 Mon Sep 17 00:00:00 2001";

/// Metadata for one patch artifact. Omitted fields get non-empty placeholders
/// (the artifact must always be a well-formed mailbox document).
#[derive(Debug, Clone, Default)]
pub struct PatchMeta {
	pub author: Option<String>,
	pub subject: Option<String>,
	pub body: Option<String>,
	pub date: Option<OffsetDateTime>,
}

impl PatchMeta {
	pub fn subject_or_default(&self) -> &str {
		self.subject.as_deref().unwrap_or("automated changes")
	}
}

/// Assembles diffs and metadata into a single mailbox-format patch document,
/// applicable with standard mailbox tooling (`git am -3`).
pub fn format_patch(diffs: &[String], meta: &PatchMeta) -> Result<String> {
	let author = meta.author.as_deref().unwrap_or("Unknown <unknown@localhost>");
	let subject = meta.subject_or_default();
	let body = meta.body.as_deref().unwrap_or("(no description provided)");
	let date = meta.date.unwrap_or_else(OffsetDateTime::now_utc).format(&Rfc2822)?;

	let mut out = String::new();
	out.push_str(PLACEHOLDER_IDENTITY_LINE);
	out.push('\n');
	out.push_str(&format!("From: {author}\n"));
	out.push_str(&format!("Date: {date}\n"));
	out.push_str(&format!("Subject: [PATCH] {subject}\n"));
	out.push('\n');
	out.push_str(&wrap_text(body, BODY_WRAP_WIDTH));
	out.push('\n');
	out.push_str("---\n");

	for diff in diffs.iter().filter(|d| !d.is_empty()) {
		out.push_str(diff);
		if !diff.ends_with('\n') {
			out.push('\n');
		}
	}

	Ok(out)
}

// region:    --- Support

/// Greedy word wrap, breaking only at whitespace boundaries.
/// A single word longer than `width` is emitted unbroken.
/// Existing line breaks (and blank lines) in `text` are preserved.
fn wrap_text(text: &str, width: usize) -> String {
	let mut out_lines = Vec::new();

	for line in text.lines() {
		if line.trim().is_empty() {
			out_lines.push(String::new());
			continue;
		}

		let mut current = String::new();
		for word in line.split_whitespace() {
			if current.is_empty() {
				current.push_str(word);
			} else if current.len() + 1 + word.len() <= width {
				current.push(' ');
				current.push_str(word);
			} else {
				out_lines.push(std::mem::take(&mut current));
				current.push_str(word);
			}
		}
		if !current.is_empty() {
			out_lines.push(current);
		}
	}

	out_lines.join("\n")
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
