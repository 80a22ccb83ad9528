use crate::{Error, PatchMeta, Result, diff_render, patch_format};
use simple_fs::{SPath, ensure_file_dir};
use std::collections::BTreeMap;
use std::fs;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info};

/// Scoped staging area for repo writes.
///
/// All file mutations of one logical operation are recorded here (last write
/// wins per path, never written through to the working tree) and flushed on
/// release as one mailbox-format `.patch` artifact, so the whole unit can be
/// applied (`git apply --3way`) or discarded atomically.
///
/// Release runs exactly once on every exit path: explicitly via [`close`],
/// or from `Drop` otherwise. The `Drop` path logs failures instead of
/// raising them.
///
/// [`close`]: Self::close
pub struct PatchWriter {
	staging_dir: SPath,
	state: Mutex<WriterState>,
	released: AtomicBool,
}

#[derive(Debug, Default)]
struct WriterState {
	file_updates: BTreeMap<String, String>,
	meta: PatchMeta,
}

impl PatchWriter {
	pub fn new(author: impl Into<String>) -> Self {
		Self::with_staging_dir(author, default_staging_dir())
	}

	pub fn with_staging_dir(author: impl Into<String>, staging_dir: impl Into<SPath>) -> Self {
		let meta = PatchMeta {
			author: Some(author.into()),
			..Default::default()
		};

		Self {
			staging_dir: staging_dir.into(),
			state: Mutex::new(WriterState {
				file_updates: BTreeMap::new(),
				meta,
			}),
			released: AtomicBool::new(false),
		}
	}

	/// Records the final proposed contents for `path`. Does not touch disk;
	/// repeated calls for the same path keep the last contents.
	pub fn update_file(&self, path: impl Into<SPath>, new_contents: impl Into<String>) {
		let path = path.into();
		info!("Update file {path}");
		self.state_lock().file_updates.insert(path.to_string(), new_contents.into());
	}

	/// Records the commit-message-like summary for the whole scope
	/// (last call wins).
	pub fn provide_summary(&self, subject: impl Into<String>, body: Option<String>) {
		let mut state = self.state_lock();
		state.meta.subject = Some(subject.into());
		state.meta.body = body;
	}

	/// Releases the scope now, returning the path of the saved artifact.
	pub fn close(self) -> Result<SPath> {
		self.released.store(true, Ordering::Relaxed);
		self.save()
	}

	// -- Release

	fn save(&self) -> Result<SPath> {
		let (file_updates, meta) = {
			let mut state = self.state_lock();
			(std::mem::take(&mut state.file_updates), std::mem::take(&mut state.meta))
		};

		let mut diffs = Vec::new();
		for (path, new_contents) in &file_updates {
			match diff_render::render_diff(&SPath::new(path.as_str()), new_contents) {
				Ok(diff) if diff.is_empty() => (),
				Ok(diff) => diffs.push(diff),
				// A failing file degrades only its own diff, not the artifact.
				Err(err) => error!("Skipping diff for '{path}': {err}"),
			}
		}

		let file_name = format!("{}.patch", snake_case(meta.subject_or_default()));
		let save_path = self.staging_dir.join(file_name);
		let patch = patch_format::format_patch(&diffs, &meta)?;

		info!("Saving patch to {save_path}");
		ensure_file_dir(&save_path).map_err(Error::simple_fs)?;
		fs::write(&save_path, patch).map_err(|err| Error::io_write_file(save_path.as_str(), err))?;

		Ok(save_path)
	}

	fn state_lock(&self) -> std::sync::MutexGuard<'_, WriterState> {
		self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
	}
}

impl Drop for PatchWriter {
	fn drop(&mut self) {
		if self.released.swap(true, Ordering::Relaxed) {
			return;
		}
		if let Err(err) = self.save() {
			error!("Could not save patch: {err}");
		}
	}
}

// region:    --- Support

fn default_staging_dir() -> SPath {
	SPath::from_std_path(std::env::temp_dir()).unwrap_or_else(|_| SPath::new("/tmp"))
}

/// Lower-snake-case normalization of the subject, used for the staging file name.
/// Splits on non-alphanumeric runs and on case boundaries (`SideBar` → `side_bar`).
fn snake_case(s: &str) -> String {
	let mut words: Vec<String> = Vec::new();

	for run in s.split(|c: char| !c.is_alphanumeric()).filter(|run| !run.is_empty()) {
		let chars: Vec<char> = run.chars().collect();
		let mut word = String::new();

		for (i, &c) in chars.iter().enumerate() {
			// A new word starts at an uppercase char following a lowercase one,
			// or at the last uppercase char of an acronym run (`HTMLParser`).
			let starts_word = i > 0
				&& c.is_uppercase()
				&& (chars[i - 1].is_lowercase() || chars.get(i + 1).is_some_and(|next| next.is_lowercase()));

			if starts_word && !word.is_empty() {
				words.push(std::mem::take(&mut word));
			}
			word.extend(c.to_lowercase());
		}

		if !word.is_empty() {
			words.push(word);
		}
	}

	if words.is_empty() {
		"patch".to_string()
	} else {
		words.join("_")
	}
}

// endregion: --- Support

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;

	#[test]
	fn test_snake_case_subject() -> Result<()> {
		assert_eq!(
			snake_case("refactor(i18n): extract messages for SideBar"),
			"refactor_i18n_extract_messages_for_side_bar"
		);
		assert_eq!(snake_case("feat: HTMLParser cleanup"), "feat_html_parser_cleanup");
		assert_eq!(snake_case(""), "patch");
		assert_eq!(snake_case("---"), "patch");

		Ok(())
	}
}

// endregion: --- Tests
