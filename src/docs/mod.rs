//! File-backed documentation: context, registry data, and assembly.
//!
//! The XanoScript documentation lives on disk as a tree of markdown files
//! plus a `version.json` sidecar. [`DocsContext`] owns the resolved root and
//! the process-lifetime content cache; [`registry`] holds the generic topic
//! engine; [`assemble`] turns resolved topics into response text.

pub mod assemble;
pub mod registry;
pub mod xanoscript;

pub use assemble::{DocsMode, QUICK_REFERENCE_FALLBACK_LINES};
pub use registry::{TopicEntry, TopicRegistry};

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use crate::error::DocsError;

/// Version reported when `version.json` is missing or malformed.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Name of the version sidecar inside the docs root.
const VERSION_FILE: &str = "version.json";

/// Shape of the `version.json` sidecar.
#[derive(Debug, serde::Deserialize)]
struct VersionDescriptor {
    #[serde(default)]
    version: Option<String>,
}

/// Read-only documentation context: the resolved docs root plus
/// process-lifetime caches for file content and the version string.
///
/// Content is immutable for the life of the process, so the caches are
/// write-once per key and never invalidated. Both are guarded so the
/// at-most-once property holds even if requests are ever served from
/// multiple threads.
#[derive(Debug)]
pub struct DocsContext {
    root: PathBuf,
    content_cache: Mutex<HashMap<String, String>>,
    version: OnceLock<String>,
}

impl DocsContext {
    /// Creates a context rooted at an explicit directory.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            content_cache: Mutex::new(HashMap::new()),
            version: OnceLock::new(),
        }
    }

    /// Resolves the docs root across candidate locations.
    ///
    /// Candidates, in order: an explicit override, `xanoscript_docs` beside
    /// the executable, `xanoscript_docs` one level above it (source
    /// checkouts), and `./xanoscript_docs`. A candidate qualifies when its
    /// `version.json` is readable. When none qualify, the last candidate is
    /// used anyway; individual reads then surface descriptive errors.
    #[must_use]
    pub fn discover(override_path: Option<PathBuf>) -> Self {
        if let Some(root) = override_path {
            return Self::new(root);
        }

        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                candidates.push(dir.join("xanoscript_docs"));
                if let Some(parent) = dir.parent() {
                    candidates.push(parent.join("xanoscript_docs"));
                }
            }
        }
        candidates.push(PathBuf::from("xanoscript_docs"));

        for candidate in &candidates {
            if candidate.join(VERSION_FILE).is_file() {
                tracing::debug!(root = %candidate.display(), "Resolved docs root");
                return Self::new(candidate.clone());
            }
        }

        let fallback = candidates
            .pop()
            .unwrap_or_else(|| PathBuf::from("xanoscript_docs"));
        tracing::warn!(
            root = %fallback.display(),
            "No docs root with a version.json found; using fallback"
        );
        Self::new(fallback)
    }

    /// The resolved docs root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads a documentation file relative to the docs root, caching the
    /// content for the process lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::ReadError`] when the file cannot be read.
    pub fn read(&self, file: &str) -> Result<String, DocsError> {
        if let Ok(cache) = self.content_cache.lock() {
            if let Some(content) = cache.get(file) {
                return Ok(content.clone());
            }
        }

        let path = self.root.join(file);
        let content = std::fs::read_to_string(&path).map_err(|source| DocsError::ReadError {
            path: path.clone(),
            source,
        })?;

        if let Ok(mut cache) = self.content_cache.lock() {
            cache.insert(file.to_string(), content.clone());
        }

        Ok(content)
    }

    /// The documentation version from `version.json`, memoised.
    ///
    /// Degrades to [`UNKNOWN_VERSION`] when the sidecar is missing or
    /// malformed rather than failing the request.
    #[must_use]
    pub fn version(&self) -> &str {
        self.version.get_or_init(|| {
            let path = self.root.join(VERSION_FILE);
            std::fs::read_to_string(&path)
                .ok()
                .and_then(|raw| serde_json::from_str::<VersionDescriptor>(&raw).ok())
                .and_then(|descriptor| descriptor.version)
                .unwrap_or_else(|| UNKNOWN_VERSION.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn docs_fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("version.json"), r#"{"version":"1.4.2"}"#).unwrap();
        fs::write(dir.path().join("syntax.md"), "# Syntax\n\nBody.\n").unwrap();
        dir
    }

    #[test]
    fn reads_version_from_sidecar() {
        let dir = docs_fixture();
        let ctx = DocsContext::new(dir.path().to_path_buf());
        assert_eq!(ctx.version(), "1.4.2");
    }

    #[test]
    fn version_degrades_to_unknown_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = DocsContext::new(dir.path().to_path_buf());
        assert_eq!(ctx.version(), UNKNOWN_VERSION);
    }

    #[test]
    fn version_degrades_to_unknown_when_malformed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("version.json"), "not json").unwrap();
        let ctx = DocsContext::new(dir.path().to_path_buf());
        assert_eq!(ctx.version(), UNKNOWN_VERSION);
    }

    #[test]
    fn read_caches_content() {
        let dir = docs_fixture();
        let ctx = DocsContext::new(dir.path().to_path_buf());
        let first = ctx.read("syntax.md").unwrap();

        // Delete the backing file; the cached copy must still be served.
        fs::remove_file(dir.path().join("syntax.md")).unwrap();
        let second = ctx.read("syntax.md").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn read_missing_file_is_error() {
        let dir = docs_fixture();
        let ctx = DocsContext::new(dir.path().to_path_buf());
        assert!(ctx.read("nope.md").is_err());
    }

    #[test]
    fn discover_prefers_override() {
        let dir = docs_fixture();
        let ctx = DocsContext::discover(Some(dir.path().to_path_buf()));
        assert_eq!(ctx.root(), dir.path());
    }
}
