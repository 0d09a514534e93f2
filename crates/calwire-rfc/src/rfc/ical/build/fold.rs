//! Content line folding (RFC 5545 §3.1).

/// Maximum line length in characters.
///
/// Counted in characters, not octets: folding must never split a
/// multi-byte UTF-8 sequence, and each character counts as one unit
/// regardless of its encoded width.
const MAX_LINE_CHARS: usize = 75;

/// Folds a logical line into physical lines of at most 75 characters.
///
/// Continuation lines are prefixed with a single space which does not
/// count against the 75-character budget. No terminator is appended to
/// the last physical line; the caller adds the final CRLF.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.chars().count() <= MAX_LINE_CHARS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_CHARS * 3);
    for (i, c) in line.chars().enumerate() {
        if i > 0 && i % MAX_LINE_CHARS == 0 {
            result.push_str("\r\n ");
        }
        result.push(c);
    }

    result
}
