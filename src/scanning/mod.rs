//! Lexical outline scanner for the Prodel language
//!
//! Prodel is block-structured and case-insensitive: procedures and
//! sub-procedures delimit their bodies with `begin`/`end`, and documents
//! without procedures can instead be organized with `?section` and `?page`
//! directives. The scanner works line by line with no grammar behind it, so
//! it copes with whatever half-typed text an editor throws at it.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::language::{LoadingError, OutlineNode, SourceText};

pub mod comments;
pub mod declarations;
pub mod depth;
mod outline;

/// Cooperative cancellation flag polled by the scanner at every loop head.
/// Editors re-request an outline on each edit; the host cancels superseded
/// requests through a clone of this token.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.flag
            .store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag
            .load(Ordering::Relaxed)
    }
}

/// Read a file and return an owned String. Ownership passes back to the
/// caller so the scan and any later re-scans can borrow the same content.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => {
                    Err(LoadingError::new("File not found", String::new(), filename))
                }
                _ => Err(LoadingError::new(
                    "Failed reading",
                    error
                        .kind()
                        .to_string(),
                    filename,
                )),
            }
        }
    }
}

/// Scan document text into an outline forest. Returns None if the token was
/// cancelled before the scan finished; malformed input never fails, it just
/// produces a best-effort outline clamped to the end of the document.
pub fn outline(content: &str, cancel: &CancelToken) -> Option<Vec<OutlineNode>> {
    let text = SourceText::new(content);

    match outline::scan(&text, cancel) {
        Some(symbols) => {
            debug!(
                "Found {} top-level symbol{}",
                symbols.len(),
                if symbols.len() == 1 { "" } else { "s" }
            );
            Some(symbols)
        }
        None => {
            debug!("Scan cancelled");
            None
        }
    }
}
