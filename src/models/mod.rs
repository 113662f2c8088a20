// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod entry;
pub mod file;
pub mod project;

pub use entry::{DirectoryEntry, EntryKind};
pub use file::{CatalogedFile, FileType};
pub use project::{Project, ProjectOrigin};
