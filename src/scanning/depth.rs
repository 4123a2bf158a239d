//! Nesting counter deciding where a procedure body ends
//!
//! One `BlockDepth` lives for the duration of one body scan. Lines are fed
//! to it after comment stripping; it counts whole-word `begin` and `end`
//! occurrences, ignoring words adjacent to the `^` escape character and
//! words inside double-quoted strings on the same line.
//!
//! The counter is deliberately lenient: only a close keyword can complete a
//! body, and only when it brings the counter to zero or below. A line with
//! opens alone, however unbalanced, never terminates anything. Counting
//! stops at the completing close, so trailing keywords on that line are
//! irrelevant.

enum Keyword {
    Open,
    Close,
}

pub struct BlockDepth {
    depth: i32,
}

impl BlockDepth {
    pub fn new() -> BlockDepth {
        BlockDepth { depth: 0 }
    }

    /// True while no block has opened yet. Forward/external markers are only
    /// meaningful on this side of the first `begin`.
    pub fn surface(&self) -> bool {
        self.depth <= 0
    }

    /// Feed one comment-stripped line. Returns true when this line completes
    /// the body.
    pub fn feed(&mut self, line: &str) -> bool {
        for keyword in keywords(line) {
            match keyword {
                Keyword::Open => self.depth += 1,
                Keyword::Close => {
                    self.depth -= 1;
                    if self.depth <= 0 {
                        return true;
                    }
                }
            }
        }
        false
    }
}

impl Default for BlockDepth {
    fn default() -> Self {
        BlockDepth::new()
    }
}

/// Tokenize a line into words and report the block keywords among them, in
/// order. Words are runs of letters, digits, and underscores; a word
/// directly preceded or followed by the caret escape is an identifier that
/// merely looks like a keyword, and string literal content is skipped.
fn keywords(line: &str) -> Vec<Keyword> {
    let chars: Vec<char> = line
        .chars()
        .collect();
    let mut found = Vec::new();
    let mut in_string = false;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '"' {
            in_string = !in_string;
            i += 1;
            continue;
        }
        if in_string || !is_word_char(c) {
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && is_word_char(chars[i]) {
            i += 1;
        }

        let before = if start == 0 {
            None
        } else {
            Some(chars[start - 1])
        };
        let after = chars
            .get(i)
            .copied();
        if before == Some('^') || after == Some('^') {
            continue;
        }

        let word: String = chars[start..i]
            .iter()
            .collect();
        if word.eq_ignore_ascii_case("begin") {
            found.push(Keyword::Open);
        } else if word.eq_ignore_ascii_case("end") {
            found.push(Keyword::Close);
        }
    }

    found
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
