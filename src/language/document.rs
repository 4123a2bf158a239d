//! Line-addressable view over an immutable snapshot of document text

use crate::language::{Position, Range};

/// The text of one document, split into lines once at construction. Scans
/// treat this as a read-only snapshot; an edited document gets a fresh
/// `SourceText` on the next request.
#[derive(Debug)]
pub struct SourceText {
    lines: Vec<String>,
}

impl SourceText {
    pub fn new(content: &str) -> SourceText {
        SourceText {
            lines: content
                .lines()
                .map(|line| line.to_string())
                .collect(),
        }
    }

    pub fn line_count(&self) -> u32 {
        self.lines
            .len() as u32
    }

    pub fn line_text(&self, index: u32) -> &str {
        &self.lines[index as usize]
    }

    /// Index of the final line, or None for an empty document.
    pub fn last_line(&self) -> Option<u32> {
        self.line_count()
            .checked_sub(1)
    }

    /// Position just past the final character of the given line.
    pub fn end_of_line(&self, index: u32) -> Position {
        let width = self.lines[index as usize]
            .chars()
            .count() as u32;
        Position::new(index, width)
    }

    /// Range covering the whole of one line.
    pub fn line_range(&self, index: u32) -> Range {
        Range::new(Position::new(index, 0), self.end_of_line(index))
    }
}
