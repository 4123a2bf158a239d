//! Outline builder
//!
//! One linear top-to-bottom pass over the document. Procedure headers hand
//! off to a body scan that owns its own depth counter and returns the built
//! node together with the line on which the outer scan resumes; nothing is
//! mutated in place across calls. Documents with procedures outline as a
//! procedure forest; documents without any fall back to `?section`/`?page`
//! organization.

use crate::language::{NodeKind, OutlineNode, Position, Range, SourceText};
use crate::scanning::comments::strip_comments;
use crate::scanning::declarations;
use crate::scanning::depth::BlockDepth;
use crate::scanning::CancelToken;

/// Scan the whole document. None means the token was cancelled; every other
/// input, including empty and malformed text, produces a forest.
pub(crate) fn scan(text: &SourceText, cancel: &CancelToken) -> Option<Vec<OutlineNode>> {
    let mut procedures: Vec<OutlineNode> = Vec::new();
    let mut sections: Vec<OutlineNode> = Vec::new();
    let mut open_section: Option<OutlineNode> = None;

    let mut line = 0;
    while line < text.line_count() {
        if cancel.is_cancelled() {
            return None;
        }

        let content = text.line_text(line);

        // Headers are matched against the original line; the anchored
        // pattern makes a comment-prefixed line a non-match anyway.
        if let Some(header) = declarations::procedure(content) {
            let name = header
                .name
                .to_string();
            let (node, resume) = scan_procedure(text, line, name, cancel)?;
            procedures.push(node);
            line = resume;
            continue;
        }

        if let Some(name) = declarations::section(content) {
            if let Some(mut section) = open_section.take() {
                section
                    .range
                    .end = text.end_of_line(line - 1);
                sections.push(section);
            }
            open_section = Some(OutlineNode::new(
                name,
                NodeKind::Section,
                text.line_range(line),
            ));
            line += 1;
            continue;
        }

        if let Some(heading) = declarations::page(content) {
            let page = OutlineNode::new(heading, NodeKind::Page, text.line_range(line));
            match open_section.as_mut() {
                Some(section) => section
                    .children
                    .push(page),
                None => sections.push(page),
            }
        }

        line += 1;
    }

    // A document organized by procedures suppresses the directive outline.
    if !procedures.is_empty() {
        return Some(procedures);
    }

    if let Some(mut section) = open_section.take() {
        if let Some(last) = text.last_line() {
            section
                .range
                .end = text.end_of_line(last);
        }
        sections.push(section);
    }

    Some(sections)
}

/// Scan one procedure starting at its header line. Returns the finished
/// node and the line on which the outer scan resumes.
fn scan_procedure(
    text: &SourceText,
    header: u32,
    name: String,
    cancel: &CancelToken,
) -> Option<(OutlineNode, u32)> {
    let mut node = OutlineNode::new(name.clone(), NodeKind::Procedure, text.line_range(header));

    // A forward or external marker on the header line means there is no
    // body to scan, even when the header is the last line of the document.
    if let Some(marker) = declarations::forward_marker(&strip_comments(text.line_text(header))) {
        node.detail = Some(marker);
        return Some((node, header + 1));
    }

    let mut tracker = BlockDepth::new();
    let mut last_subprocedure_end: Option<u32> = None;

    let mut line = header;
    let end = loop {
        if cancel.is_cancelled() {
            return None;
        }
        if line >= text.line_count() {
            // unterminated body: clamp to the last real line
            break text.line_count() - 1;
        }

        let stripped = strip_comments(text.line_text(line));

        if line > header {
            // Forward markers only count while no block has opened; past
            // the first begin the words are ordinary identifiers.
            if tracker.surface() {
                if let Some(marker) = declarations::forward_marker(&stripped) {
                    node.detail = Some(marker);
                    break line;
                }
            }

            // Sub-procedures are recognized at any depth. Their lines never
            // reach this procedure's tracker; the nested scan owns them.
            if let Some(sub) = declarations::subprocedure(&stripped) {
                let subname = sub
                    .name
                    .to_string();
                let (child, resume) = scan_subprocedure(text, line, subname, cancel)?;
                last_subprocedure_end = Some(resume - 1);
                node.children
                    .push(child);
                line = resume;
                continue;
            }
        }

        if tracker.feed(&stripped) {
            break line;
        }
        line += 1;
    };

    node.range
        .end = text.end_of_line(end);

    // A procedure with sub-procedures and body lines after the last one
    // gets a synthesized entry for that trailing main body.
    if let Some(last) = last_subprocedure_end {
        if end > last + 1 {
            let range = Range::new(Position::new(last + 1, 0), text.end_of_line(end));
            let mut main = OutlineNode::new(format!("main: {}", name), NodeKind::MainBody, range);
            main.selection_range = text.line_range(last + 1);
            node.children
                .push(main);
        }
    }

    Some((node, end + 1))
}

/// Scan one sub-procedure body. Same depth loop as a procedure, but with no
/// forward detection and no further nesting: sub-procedures do not declare
/// sub-procedures of their own.
fn scan_subprocedure(
    text: &SourceText,
    header: u32,
    name: String,
    cancel: &CancelToken,
) -> Option<(OutlineNode, u32)> {
    let mut node = OutlineNode::new(name, NodeKind::SubProcedure, text.line_range(header));

    let mut tracker = BlockDepth::new();
    let mut line = header;
    let end = loop {
        if cancel.is_cancelled() {
            return None;
        }
        if line >= text.line_count() {
            break text.line_count() - 1;
        }
        if tracker.feed(&strip_comments(text.line_text(line))) {
            break line;
        }
        line += 1;
    };

    node.range
        .end = text.end_of_line(end);

    Some((node, end + 1))
}
