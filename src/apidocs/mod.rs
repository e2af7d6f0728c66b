//! Structured documentation domains: Meta API, Run API, and CLI.
//!
//! Each domain is an instantiation of the shared
//! [`TopicRegistry`](crate::docs::TopicRegistry) engine whose payload is a
//! structured topic record rather than a backing file. Rendering happens at
//! request time via the domain's formatter.

pub mod cli;
pub mod cli_format;
pub mod format;
pub mod meta;
pub mod run;
pub mod types;

pub use format::{FormatConfig, META_API_CONFIG, RUN_API_CONFIG};
pub use types::DetailLevel;

use crate::docs::TopicRegistry;
use crate::error::DocsError;
use types::{CommandTopic, EndpointTopic};

/// A documentation domain backed by endpoint-style topics (Meta/Run API).
///
/// The registry entry's `description` doubles as the topic title.
#[derive(Debug)]
pub struct ApiDomain {
    registry: TopicRegistry<EndpointTopic>,
    config: FormatConfig,
}

impl ApiDomain {
    #[must_use]
    pub const fn new(registry: TopicRegistry<EndpointTopic>, config: FormatConfig) -> Self {
        Self { registry, config }
    }

    /// Resolves and renders a topic.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::UnknownTopic`] when the topic cannot be
    /// resolved; the error lists every valid identifier.
    pub fn handle(
        &self,
        topic: &str,
        detail_level: DetailLevel,
        include_schemas: bool,
    ) -> Result<String, DocsError> {
        let entry = self.registry.resolve(topic)?;
        Ok(format::format_topic(
            entry.description,
            &entry.doc,
            detail_level,
            include_schemas,
            &self.config,
        ))
    }

    /// All topic identifiers in declaration order.
    #[must_use]
    pub fn topic_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// `- key: title` lines for tool descriptions.
    #[must_use]
    pub fn describe_lines(&self) -> String {
        self.registry
            .iter()
            .map(|e| format!("- {}: {}", e.name, e.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A documentation domain backed by command-style topics (CLI).
#[derive(Debug)]
pub struct CliDomain {
    registry: TopicRegistry<CommandTopic>,
}

impl CliDomain {
    #[must_use]
    pub const fn new(registry: TopicRegistry<CommandTopic>) -> Self {
        Self { registry }
    }

    /// Resolves and renders a topic.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::UnknownTopic`] when the topic cannot be
    /// resolved.
    pub fn handle(&self, topic: &str, detail_level: DetailLevel) -> Result<String, DocsError> {
        let entry = self.registry.resolve(topic)?;
        Ok(cli_format::format_topic(entry.description, &entry.doc, detail_level))
    }

    /// All topic identifiers in declaration order.
    #[must_use]
    pub fn topic_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// `- key: title` lines for tool descriptions.
    #[must_use]
    pub fn describe_lines(&self) -> String {
        self.registry
            .iter()
            .map(|e| format!("- {}: {}", e.name, e.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
