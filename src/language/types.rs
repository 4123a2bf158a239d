//! Types representing the outline of a Prodel source document

use serde::Serialize;

/// A zero-based (line, character) location. Characters are counted in
/// Unicode scalar values, not bytes.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Position {
        Position { line, character }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Range {
        Range { start, end }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Procedure,
    SubProcedure,
    /// Synthesized trailing body of a procedure that also declares
    /// sub-procedures.
    MainBody,
    Section,
    Page,
}

/// One entry in the outline tree.
///
/// `range` covers the whole construct including its body; `selection_range`
/// covers the header line only. Children are ordered by start position and
/// contained within the parent's range.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct OutlineNode {
    pub name: String,
    pub kind: NodeKind,
    /// "forward" or "external" for declarations that have no body.
    pub detail: Option<String>,
    pub range: Range,
    pub selection_range: Range,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(name: impl Into<String>, kind: NodeKind, range: Range) -> OutlineNode {
        OutlineNode {
            name: name.into(),
            kind,
            detail: None,
            range,
            selection_range: range,
            children: vec![],
        }
    }
}
