//! Content value escaping (RFC 5545 §3.3.11).

/// Appends the escaped form of a content value to `out`.
///
/// TEXT escaping per RFC 5545: `;` and `,` gain a backslash prefix,
/// backslash doubles, and line breaks become the two-character sequence
/// `\n`. A CRLF pair collapses into a single `\n`, consuming both bytes.
/// A lone CR produces no output; the historical rule table only handles
/// the pair, likely a latent gap, but preserved here for compatibility.
///
/// Recurrence rules are themselves `;`-separated terms, so callers
/// disable separator escaping for them via `escape_separators`.
///
/// All special code points are ASCII and never appear inside a
/// multi-byte UTF-8 sequence, so a char-wise scan with one lookahead is
/// byte-exact; multi-byte characters pass through untouched.
pub(crate) fn escape_value(value: &str, escape_separators: bool, out: &mut String) {
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ';' | ',' => {
                if escape_separators {
                    out.push('\\');
                }
                out.push(c);
            }
            '\\' => out.push_str("\\\\"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                    out.push_str("\\n");
                }
                // Lone CR: dropped.
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
}
