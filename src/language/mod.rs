// Types representing outlines of Prodel source documents

mod document;
mod error;
mod types;

// Re-export all public symbols
pub use document::*;
pub use error::*;
pub use types::*;
