use crate::{Error, Result};
use simple_fs::SPath;
use std::fs;

/// Renders a unified diff between the current on-disk contents of `file_path`
/// and `patched_contents` (which is never materialized on disk).
///
/// The three header lines use the path relative to the enclosing repository
/// root, so the diff stays portable across checkouts. A file that does not
/// exist yet diffs against empty contents (new-file diff). Returns an empty
/// string when there is nothing to diff.
pub fn render_diff(file_path: &SPath, patched_contents: &str) -> Result<String> {
	let original = if file_path.exists() {
		fs::read_to_string(file_path).map_err(|err| Error::io_read_file(file_path.as_str(), err))?
	} else {
		String::new()
	};

	if original == patched_contents {
		return Ok(String::new());
	}

	let patch = diffy::create_patch(&original, patched_contents);

	let repo_root = resolve_repo_root(file_path)?;
	let rel_path = relative_to(file_path, &repo_root)?;

	// diffy emits `--- original` / `+++ modified`; replace with repo-relative headers.
	let diff_text = patch.to_string();
	let body = diff_text.splitn(3, '\n').nth(2).unwrap_or_default();

	Ok(format!(
		"diff --git a/{rel} b/{rel}\n--- a/{rel}\n+++ b/{rel}\n{body}",
		rel = rel_path
	))
}

/// Resolves the enclosing repository root for `path`: the nearest ancestor
/// directory containing version-control metadata (`.git`).
pub fn resolve_repo_root(path: &SPath) -> Result<SPath> {
	for ancestor in path.std_path().ancestors().skip(1) {
		if ancestor.join(".git").exists() {
			return Ok(SPath::from_std_path(ancestor.to_path_buf())?);
		}
	}

	Err(Error::repo_root_not_found(path.as_str()))
}

// region:    --- Support

fn relative_to(path: &SPath, base: &SPath) -> Result<String> {
	let rel = path
		.std_path()
		.strip_prefix(base.std_path())
		.map_err(|_| Error::custom(format!("Path '{path}' is not under repo root '{base}'")))?;

	Ok(rel.to_string_lossy().replace('\\', "/"))
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
