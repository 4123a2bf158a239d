//! Per-line comment removal
//!
//! Comments are handled strictly within a single line: `--` discards the
//! rest of the line, and a `/* ... */` pair is elided where it stands. An
//! unterminated `/*` consumes to the end of the line; block comments are
//! never tracked across lines.

/// Return a copy of the line with comment text removed. Pure; the result
/// may be shorter than the input but character positions before the first
/// comment marker are unchanged.
pub fn strip_comments(line: &str) -> String {
    let chars: Vec<char> = line
        .chars()
        .collect();
    let mut result = String::with_capacity(line.len());

    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '-' && chars.get(i + 1) == Some(&'-') {
            break;
        }
        if chars[i] == '/' && chars.get(i + 1) == Some(&'*') {
            match find_close(&chars, i + 2) {
                Some(after) => {
                    i = after;
                    continue;
                }
                None => break,
            }
        }
        result.push(chars[i]);
        i += 1;
    }

    result
}

/// Index just past the `*/` closing a block comment, scanning from `from`.
fn find_close(chars: &[char], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 1 < chars.len() {
        if chars[i] == '*' && chars[i + 1] == '/' {
            return Some(i + 2);
        }
        i += 1;
    }
    None
}
