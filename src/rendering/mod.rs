//! Renderers for presenting outlines in terminal output

use owo_colors::OwoColorize;

use crate::language::{NodeKind, OutlineNode};

/// Render a forest as an indented tree, one symbol per line, with one-based
/// line spans. Styling is suppressed unless `colors` is set.
pub fn render(nodes: &[OutlineNode], colors: bool) -> String {
    let mut result = String::new();
    for node in nodes {
        render_node(&mut result, node, 0, colors);
    }
    result
}

fn render_node(result: &mut String, node: &OutlineNode, indent: usize, colors: bool) {
    for _ in 0..indent {
        result.push_str("  ");
    }

    let label = label(node.kind);
    if colors {
        let styled = match node.kind {
            NodeKind::Procedure => label // entity.name.function - #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            NodeKind::SubProcedure => label // variable.parameter - #729fcf (light blue) bold
                .color(owo_colors::Rgb(0x72, 0x9f, 0xcf))
                .bold()
                .to_string(),
            NodeKind::MainBody => label // punctuation - #999999 bold
                .color(owo_colors::Rgb(153, 153, 153))
                .bold()
                .to_string(),
            NodeKind::Section => label // markup.heading - #75507b (plum) bold
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .bold()
                .to_string(),
            NodeKind::Page => label // string - #4e9a06 (green) bold
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .bold()
                .to_string(),
        };
        result.push_str(&styled);
    } else {
        result.push_str(label);
    }

    result.push(' ');
    result.push_str(&node.name);
    if let Some(detail) = &node.detail {
        result.push_str(" (");
        result.push_str(detail);
        result.push(')');
    }
    result.push_str(&format!(
        " [{}-{}]",
        node.range
            .start
            .line
            + 1,
        node.range
            .end
            .line
            + 1
    ));
    result.push('\n');

    for child in &node.children {
        render_node(result, child, indent + 1, colors);
    }
}

fn label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Procedure => "proc",
        NodeKind::SubProcedure => "subproc",
        NodeKind::MainBody => "main",
        NodeKind::Section => "section",
        NodeKind::Page => "page",
    }
}
