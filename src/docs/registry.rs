//! Generic topic registry with alias resolution and file-path matching.
//!
//! A registry is a write-once table of documentation topics. Each topic has a
//! stable identifier, a payload (a backing filename for the file-based docs,
//! or a structured document for the API docs), an optional set of glob
//! applicability patterns, and a short description. All documentation domains
//! (XanoScript, Meta API, Run API, CLI) share this one engine rather than
//! carrying their own copies of the lookup logic.

use glob::{MatchOptions, Pattern};
use indexmap::IndexMap;

use crate::error::DocsError;

/// Glob options for applicability patterns: `*` stays within one path
/// segment, `**` crosses segments. `tables/*.xs` must not match
/// `tables/sub/x.xs` while `apis/**/*.xs` must match `apis/users/create.xs`.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// One documentation topic and its payload.
#[derive(Debug)]
pub struct TopicEntry<T> {
    /// Unique identifier, stable across the registry.
    pub name: &'static str,
    /// Short human-readable description for listings and schema hints.
    pub description: &'static str,
    /// Compiled applicability patterns. Empty means the topic is only
    /// reachable by explicit identifier, never by file-path matching.
    patterns: Vec<Pattern>,
    /// Domain-specific payload.
    pub doc: T,
}

impl<T> TopicEntry<T> {
    /// Returns true if any applicability pattern matches the given path.
    fn applies_to(&self, path: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| p.matches_with(path, GLOB_OPTIONS))
    }
}

/// An ordered, immutable registry of documentation topics.
///
/// Construction happens once at startup from static configuration; the
/// registry is never mutated afterwards. Iteration and partial-match
/// tie-breaks follow declaration order.
#[derive(Debug)]
pub struct TopicRegistry<T> {
    entries: IndexMap<&'static str, TopicEntry<T>>,
    aliases: IndexMap<&'static str, &'static str>,
    /// Topic excluded from file-path matching (the overview/readme entry).
    overview: Option<&'static str>,
    /// Topic prepended to every file-path match set when absent.
    foundational: Option<&'static str>,
}

impl<T> TopicRegistry<T> {
    /// Starts building a registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder<T> {
        RegistryBuilder {
            entries: IndexMap::new(),
            aliases: IndexMap::new(),
            overview: None,
            foundational: None,
        }
    }

    /// Looks up a topic by exact identifier.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TopicEntry<T>> {
        self.entries.get(name)
    }

    /// The overview topic entry, if one was designated.
    #[must_use]
    pub fn overview(&self) -> Option<&TopicEntry<T>> {
        self.overview.and_then(|name| self.entries.get(name))
    }

    /// All topic identifiers in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// All entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TopicEntry<T>> {
        self.entries.values()
    }

    /// Number of registered topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry has no topics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `name (first sentence of description)` pairs joined for tool-schema
    /// hints.
    #[must_use]
    pub fn describe_topics(&self) -> String {
        self.entries
            .values()
            .map(|e| {
                let first = e.description.split('.').next().unwrap_or(e.description);
                format!("{} ({first})", e.name)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolves an informal topic name to a registry entry.
    ///
    /// Resolution order: normalise (lowercase, trim), exact match, alias
    /// substitution with a full retry, then substring partial matching in
    /// declaration order. Alias hops are capped at the registry size so a
    /// misconfigured alias cycle fails cleanly instead of looping.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::UnknownTopic`] carrying every registered
    /// identifier when nothing matches.
    pub fn resolve(&self, name: &str) -> Result<&TopicEntry<T>, DocsError> {
        let mut query = name.trim().to_lowercase();
        let max_hops = self.entries.len() + self.aliases.len();

        for _ in 0..=max_hops {
            if let Some(entry) = self.entries.get(query.as_str()) {
                return Ok(entry);
            }

            if let Some(target) = self.aliases.get(query.as_str()) {
                query = (*target).to_string();
                continue;
            }

            // Partial match: first key (declaration order) that contains the
            // query or is contained by it.
            let partial = self
                .entries
                .keys()
                .find(|key| key.contains(query.as_str()) || query.contains(*key));
            if let Some(key) = partial {
                return Ok(&self.entries[*key]);
            }

            break;
        }

        Err(DocsError::UnknownTopic {
            requested: name.to_string(),
            available: self.names().map(String::from).collect(),
        })
    }

    /// Returns the identifiers of every topic whose applicability patterns
    /// match the given file path, in declaration order.
    ///
    /// The overview topic is never auto-included. The foundational topic is
    /// prepended when it did not match naturally, so it is always first.
    #[must_use]
    pub fn topics_for_path(&self, path: &str) -> Vec<&'static str> {
        let mut matches: Vec<&'static str> = Vec::new();

        for entry in self.entries.values() {
            if Some(entry.name) == self.overview {
                continue;
            }
            if entry.applies_to(path) {
                matches.push(entry.name);
            }
        }

        if let Some(base) = self.foundational {
            if !matches.contains(&base) {
                matches.insert(0, base);
            }
        }

        matches
    }
}

/// Builder for [`TopicRegistry`].
pub struct RegistryBuilder<T> {
    entries: IndexMap<&'static str, TopicEntry<T>>,
    aliases: IndexMap<&'static str, &'static str>,
    overview: Option<&'static str>,
    foundational: Option<&'static str>,
}

impl<T> RegistryBuilder<T> {
    /// Adds a topic. Patterns are compiled up front; registries are built
    /// from static tables, so a malformed pattern is a startup failure.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already registered or a pattern is invalid.
    #[must_use]
    pub fn topic(
        mut self,
        name: &'static str,
        description: &'static str,
        apply_to: &[&'static str],
        doc: T,
    ) -> Self {
        let patterns = apply_to
            .iter()
            .map(|p| {
                Pattern::new(p).unwrap_or_else(|e| panic!("invalid pattern {p:?} for {name}: {e}"))
            })
            .collect();

        let previous = self.entries.insert(
            name,
            TopicEntry {
                name,
                description,
                patterns,
                doc,
            },
        );
        assert!(previous.is_none(), "duplicate topic identifier: {name}");
        self
    }

    /// Maps an informal keyword to a canonical topic identifier.
    #[must_use]
    pub fn alias(mut self, keyword: &'static str, target: &'static str) -> Self {
        self.aliases.insert(keyword, target);
        self
    }

    /// Designates the overview topic (excluded from file-path matching).
    #[must_use]
    pub const fn overview(mut self, name: &'static str) -> Self {
        self.overview = Some(name);
        self
    }

    /// Designates the foundational topic (always present in path matches).
    #[must_use]
    pub const fn foundational(mut self, name: &'static str) -> Self {
        self.foundational = Some(name);
        self
    }

    /// Finalises the registry.
    #[must_use]
    pub fn build(self) -> TopicRegistry<T> {
        TopicRegistry {
            entries: self.entries,
            aliases: self.aliases,
            overview: self.overview,
            foundational: self.foundational,
        }
    }
}
