// file: src/catalog/mod.rs
// description: file discovery and classification pipeline exports
// reference: internal module structure

pub mod classifier;
pub mod dates;
pub mod discovery;
pub mod patterns;
pub mod urls;

pub use classifier::{
    FileClassifier, SUPPORTED_EXTENSIONS, create_display_name, file_extension, file_type,
    is_supported,
};
pub use dates::{DatePattern, extract_date};
pub use discovery::Discovery;
pub use urls::UrlPolicy;
