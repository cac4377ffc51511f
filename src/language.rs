//! Language tags from file names.
//!
//! The tag is only passed through to the syntax highlighter; the diff engine
//! never looks at it.

use std::path::Path;

/// Maps a path's extension (case-insensitive) to a language tag.
pub fn detect_language(path: impl AsRef<Path>) -> Option<&'static str> {
    let extension = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();

    let language = match extension.as_str() {
        "py" => "python",
        "js" => "javascript",
        "ts" => "typescript",
        "jsx" => "jsx",
        "tsx" => "tsx",
        "php" => "php",
        "java" => "java",
        "cpp" => "cpp",
        "c" => "c",
        "cs" => "csharp",
        "rb" => "ruby",
        "go" => "go",
        "rs" => "rust",
        "swift" => "swift",
        "kt" => "kotlin",
        "html" => "html",
        "css" => "css",
        "scss" => "scss",
        "sql" => "sql",
        "sh" => "bash",
        "yaml" | "yml" => "yaml",
        "json" => "json",
        "xml" => "xml",
        "md" => "markdown",
        _ => return None,
    };

    Some(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(detect_language("src/main.rs"), Some("rust"));
        assert_eq!(detect_language("setup.py"), Some("python"));
        assert_eq!(detect_language("ci.yml"), Some("yaml"));
        assert_eq!(detect_language("ci.yaml"), Some("yaml"));
    }

    #[test]
    fn extension_case_is_ignored() {
        assert_eq!(detect_language("README.MD"), Some("markdown"));
    }

    #[test]
    fn unknown_or_missing_extension() {
        assert_eq!(detect_language("Makefile"), None);
        assert_eq!(detect_language("archive.tar.gz"), None);
        assert_eq!(detect_language("a"), None);
    }
}
