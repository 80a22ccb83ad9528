use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
	#[from(String, &String, &str)]
	Custom(String),

	// -- Matcher
	#[display("No match found for pattern ({pattern_len} chars) in source")]
	NoMatch { pattern_len: usize },

	// -- Applier
	#[display("Line pattern '{match_line}' matched {count} lines (exactly one required)")]
	AmbiguousLine { match_line: String, count: usize },

	// -- Locator
	#[display("Lint message for '{file_path}' has no line/column position")]
	RuleRegionMissing { file_path: String },

	// -- Diff render
	#[display("No enclosing repository found for '{path}'")]
	RepoRootNotFound { path: String },

	// -- Io (with path context)
	#[display("Cannot read file '{path}'. Cause: {cause}")]
	IoReadFile { path: String, cause: std::io::Error },

	#[display("Cannot write file '{path}'. Cause: {cause}")]
	IoWriteFile { path: String, cause: std::io::Error },

	// -- Externals
	#[from]
	SimpleFs(simple_fs::Error),

	#[from]
	SerdeJson(serde_json::Error),

	#[from]
	TimeFormat(time::error::Format),
}

// region:    --- Constructors

impl Error {
	pub fn custom(msg: impl Into<String>) -> Self {
		Self::Custom(msg.into())
	}

	pub fn no_match(pattern: &str) -> Self {
		Self::NoMatch {
			pattern_len: pattern.chars().count(),
		}
	}

	pub fn ambiguous_line(match_line: impl Into<String>, count: usize) -> Self {
		Self::AmbiguousLine {
			match_line: match_line.into(),
			count,
		}
	}

	pub fn rule_region_missing(file_path: impl Into<String>) -> Self {
		Self::RuleRegionMissing {
			file_path: file_path.into(),
		}
	}

	pub fn repo_root_not_found(path: impl Into<String>) -> Self {
		Self::RepoRootNotFound { path: path.into() }
	}

	pub fn io_read_file(path: impl Into<String>, cause: std::io::Error) -> Self {
		Self::IoReadFile {
			path: path.into(),
			cause,
		}
	}

	pub fn io_write_file(path: impl Into<String>, cause: std::io::Error) -> Self {
		Self::IoWriteFile {
			path: path.into(),
			cause,
		}
	}

	pub fn simple_fs(err: simple_fs::Error) -> Self {
		Self::SimpleFs(err)
	}
}

// endregion: --- Constructors

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
