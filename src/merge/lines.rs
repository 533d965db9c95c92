//! Line-set union merge for flat, ignore-style files.

use std::collections::HashSet;

const CRLF: &str = "\r\n";
const LF: &str = "\n";

/// Detect the newline style used by `text`. CRLF wins if it appears anywhere.
pub fn detect_newline(text: &str) -> &'static str {
    if text.contains(CRLF) {
        CRLF
    } else {
        LF
    }
}

/// Split on either `\r\n` or `\n`, keeping blank lines.
fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Merge an existing flat file into its replacement.
///
/// The replacement's lines come first, in order. Lines from the existing
/// file that do not appear verbatim in the replacement follow, in their
/// original relative order. Output uses the replacement's newline style.
pub fn merge_lines(existing: &str, replacement: &str) -> String {
    let newline = detect_newline(replacement);
    let replacement_lines = split_lines(replacement);
    let known: HashSet<&str> = replacement_lines.iter().copied().collect();

    let missing = split_lines(existing)
        .into_iter()
        .filter(|line| !known.contains(line));

    replacement_lines
        .iter()
        .copied()
        .chain(missing)
        .collect::<Vec<_>>()
        .join(newline)
}
