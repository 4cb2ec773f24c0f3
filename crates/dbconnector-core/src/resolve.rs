//! Configuration value resolution.
//!
//! A configuration value is either a literal, an environment indirection
//! (`env://NAME`) or a file indirection (`file:///absolute/path`). Secrets
//! such as passwords and PEM bundles are usually supplied through one of the
//! indirections so they never appear in plain configuration.
//!
//! Resolution is uncached and has no side effects beyond reading the
//! environment and the filesystem.

use url::Url;

const ENV_SCHEME: &str = "env";
const FILE_SCHEME: &str = "file";

/// Resolve a configuration value.
///
/// - empty input resolves to empty
/// - `env://NAME` resolves to the contents of `NAME` (empty when unset)
/// - `file:///path` resolves to the file contents with surrounding
///   whitespace trimmed (empty when the file cannot be read)
/// - anything else is returned unchanged
///
/// # Example
///
/// ```
/// use dbconnector_core::resolve;
///
/// assert_eq!(resolve("hunter2"), "hunter2");
/// assert_eq!(resolve(""), "");
/// ```
pub fn resolve(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    match parse_url(value) {
        Some(url) if url.scheme() == ENV_SCHEME => read_env(&url),
        Some(url) if url.scheme() == FILE_SCHEME => read_file(&url),
        _ => value.to_string(),
    }
}

fn parse_url(value: &str) -> Option<Url> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Url::parse(value).ok()
}

fn read_env(url: &Url) -> String {
    let name = url.host_str().unwrap_or_default();
    if name.is_empty() {
        return String::new();
    }
    std::env::var(name).unwrap_or_default()
}

fn read_file(url: &Url) -> String {
    let Ok(path) = url.to_file_path() else {
        tracing::debug!(url = %url, "file:// configuration value has no usable local path");
        return String::new();
    };

    match std::fs::read(&path) {
        Ok(raw) => String::from_utf8_lossy(&raw).trim().to_string(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Failed to read configuration value file");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Wrapper for env::set_var (unsafe in Rust 2024 edition).
    ///
    /// # Safety
    ///
    /// Every test uses its own variable name, so no two tests touch the
    /// same entry.
    #[allow(unsafe_code)]
    fn test_set_var(key: &str, value: &str) {
        // SAFETY: the key is unique to the calling test.
        unsafe { std::env::set_var(key, value) };
    }

    #[test]
    fn test_empty_resolves_to_empty() {
        assert_eq!(resolve(""), "");
    }

    #[test]
    fn test_literals_pass_through() {
        for literal in [
            "root",
            "hunter2",
            "127.0.0.1:3306",
            "localhost:3306",
            "/var/run/mysqld/mysqld.sock",
            "p@ss:word",
            "  padded  ",
            "https://example.com/secret",
        ] {
            assert_eq!(resolve(literal), literal);
        }
    }

    #[test]
    fn test_env_scheme_reads_variable() {
        test_set_var("DBCONNECTOR_RESOLVE_TEST_PASSWORD", "s3cret");
        assert_eq!(resolve("env://DBCONNECTOR_RESOLVE_TEST_PASSWORD"), "s3cret");
    }

    #[test]
    fn test_env_scheme_unset_is_empty() {
        assert_eq!(resolve("env://DBCONNECTOR_RESOLVE_TEST_NEVER_SET"), "");
    }

    #[test]
    fn test_env_scheme_without_name_is_empty() {
        assert_eq!(resolve("env://"), "");
    }

    #[test]
    fn test_file_scheme_reads_trimmed_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  s3cret\n\n").unwrap();

        let value = format!("file://{}", file.path().display());
        assert_eq!(resolve(&value), "s3cret");
    }

    #[test]
    fn test_file_scheme_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let value = format!("file://{}", missing.display());
        assert_eq!(resolve(&value), "");
    }
}
