// region:    --- Modules

mod applier;
mod diff_render;
mod error;
mod hunk;
mod json_merge;
mod locator;
mod matcher;
mod patch_format;
mod patch_writer;
mod repo_files;

pub use applier::*;
pub use diff_render::*;
pub use error::*;
pub use hunk::*;
pub use json_merge::*;
pub use locator::*;
pub use matcher::*;
pub use patch_format::*;
pub use patch_writer::*;
pub use repo_files::*;

// endregion: --- Modules
