//! Merge strategies for managed files.
//!
//! Every strategy is a pure function of the existing text and the freshly
//! rendered template text. When no file exists yet, every strategy returns
//! the template text unchanged.

mod lines;
mod structured;

pub use lines::{detect_newline, merge_lines};
pub use structured::{merge_structured, MergeError, MergeSide, USER_OWNED_FIELDS};

use crate::manifest::MergeStrategy;

/// Combine `existing` with `replacement` according to `strategy`.
pub fn apply_strategy(
    strategy: MergeStrategy,
    existing: Option<&str>,
    replacement: &str,
) -> Result<String, MergeError> {
    let Some(existing) = existing else {
        return Ok(replacement.to_string());
    };

    match strategy {
        MergeStrategy::Overwrite | MergeStrategy::TemplateDefault => Ok(replacement.to_string()),
        MergeStrategy::StructuredMerge => merge_structured(existing, replacement),
        MergeStrategy::LineUnionMerge => Ok(merge_lines(existing, replacement)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [MergeStrategy; 4] = [
        MergeStrategy::Overwrite,
        MergeStrategy::StructuredMerge,
        MergeStrategy::LineUnionMerge,
        MergeStrategy::TemplateDefault,
    ];

    #[test]
    fn test_no_existing_file_returns_replacement() {
        // Not valid JSON, so StructuredMerge would fail if it parsed anything
        let replacement = "line one\r\nline two";
        for strategy in ALL {
            assert_eq!(apply_strategy(strategy, None, replacement).unwrap(), replacement);
        }
    }

    #[test]
    fn test_overwrite_discards_existing() {
        let merged = apply_strategy(MergeStrategy::Overwrite, Some("user edits"), "fresh").unwrap();
        assert_eq!(merged, "fresh");
    }

    #[test]
    fn test_template_default_discards_existing() {
        let merged =
            apply_strategy(MergeStrategy::TemplateDefault, Some("user edits"), "fresh").unwrap();
        assert_eq!(merged, "fresh");
    }

    #[test]
    fn test_line_union_dispatch() {
        let merged = apply_strategy(MergeStrategy::LineUnionMerge, Some("a\nb\nc"), "x\na").unwrap();
        assert_eq!(merged, "x\na\nb\nc");
    }

    #[test]
    fn test_structured_dispatch_reports_malformed() {
        let result = apply_strategy(MergeStrategy::StructuredMerge, Some("oops"), "{}");
        assert!(result.is_err());
    }
}
