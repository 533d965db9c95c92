use super::types::{ManagedFileEntry, MergeStrategy};

/// Templates the generator fully owns and overwrites on every upgrade.
///
/// The type-checker configs are listed here rather than merged: unioning
/// their arrays would duplicate values on each run.
const OVERWRITTEN_TEMPLATES: &[&str] = &[
    "karma.conf.js",
    "tsconfig.es5.json",
    "tsconfig.es2015.json",
    "tsconfig.json",
    "tsconfig.test.json",
    "tslint.json",
    "src/test.js",
    "tasks/build.js",
    "tasks/copy-build.js",
    "tasks/copy-globs.js",
    "tasks/inline-resources.js",
    "tasks/rollup.js",
    "tasks/test.js",
    "webpack/webpack.common.js",
    "webpack/webpack.dev.js",
    "webpack/webpack.test.js",
    "webpack/webpack.utils.js",
];

/// Get the built-in list of managed files, in display order.
pub fn get_managed_files() -> Vec<ManagedFileEntry> {
    let mut files = vec![
        ManagedFileEntry::new("__gitignore", MergeStrategy::LineUnionMerge)
            .with_destination(".gitignore"),
        ManagedFileEntry::new("__npmignore", MergeStrategy::LineUnionMerge)
            .with_destination(".npmignore"),
        ManagedFileEntry::new("DEVELOPMENT.md", MergeStrategy::TemplateDefault),
        ManagedFileEntry::new("package.json", MergeStrategy::StructuredMerge),
    ];

    files.extend(
        OVERWRITTEN_TEMPLATES
            .iter()
            .map(|name| ManagedFileEntry::new(*name, MergeStrategy::Overwrite)),
    );

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::Path;

    #[test]
    fn test_managed_files_have_unique_destinations() {
        let root = Path::new("/p");
        let files = get_managed_files();
        let destinations: HashSet<_> = files.iter().map(|f| f.destination_path(root)).collect();
        assert_eq!(destinations.len(), files.len());
    }

    #[test]
    fn test_package_manifest_is_structurally_merged() {
        let files = get_managed_files();
        let package = files
            .iter()
            .find(|f| f.template_name == "package.json")
            .unwrap();
        assert_eq!(package.strategy, MergeStrategy::StructuredMerge);
    }

    #[test]
    fn test_ignore_files_use_line_union() {
        let files = get_managed_files();
        let ignores: Vec<_> = files
            .iter()
            .filter(|f| f.strategy == MergeStrategy::LineUnionMerge)
            .map(|f| f.destination_path(Path::new("")))
            .collect();
        assert_eq!(
            ignores,
            vec![Path::new(".gitignore").to_path_buf(), Path::new(".npmignore").to_path_buf()]
        );
    }

    #[test]
    fn test_tsconfig_is_overwritten() {
        let files = get_managed_files();
        assert!(files
            .iter()
            .filter(|f| f.template_name.starts_with("tsconfig"))
            .all(|f| f.strategy == MergeStrategy::Overwrite));
    }
}
