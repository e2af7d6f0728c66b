//! Type definitions for structured API and CLI documentation topics.
//!
//! Unlike the file-backed XanoScript docs, these topics are structured
//! records (endpoints, parameters, commands) rendered to markdown at
//! request time according to the caller's detail level.

use serde::Deserialize;
use serde_json::Value;

/// Verbosity for structured documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    /// Brief summary of endpoints/commands and their purpose.
    Overview,
    /// Full reference with parameters, headers, and response formats.
    #[default]
    Detailed,
    /// Full reference plus inline usage examples.
    Examples,
}

/// HTTP method of a documented endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// One endpoint parameter (path, query, or header).
#[derive(Debug, Clone)]
pub struct ParameterDoc {
    pub name: &'static str,
    pub ty: &'static str,
    pub required: bool,
    pub default: Option<&'static str>,
    pub description: &'static str,
    /// Enumerated value set, when the parameter is constrained.
    pub options: &'static [&'static str],
}

impl ParameterDoc {
    #[must_use]
    pub const fn new(name: &'static str, ty: &'static str, description: &'static str) -> Self {
        Self {
            name,
            ty,
            required: false,
            default: None,
            description,
            options: &[],
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn default_value(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub const fn options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }
}

/// One property of a request body.
#[derive(Debug, Clone)]
pub struct PropertyDoc {
    pub name: &'static str,
    pub ty: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// Request body shape for an endpoint.
#[derive(Debug, Clone)]
pub struct RequestBodyDoc {
    pub ty: &'static str,
    pub properties: Vec<PropertyDoc>,
}

/// A literal request, used for inline endpoint examples and worked examples.
#[derive(Debug, Clone)]
pub struct RequestExampleDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub headers: &'static [(&'static str, &'static str)],
    pub body: Option<Value>,
}

/// One documented endpoint.
#[derive(Debug, Clone)]
pub struct EndpointDoc {
    pub method: HttpMethod,
    pub path: &'static str,
    /// Corresponding MCP tool name, when one exists.
    pub tool_name: Option<&'static str>,
    pub description: &'static str,
    pub parameters: Vec<ParameterDoc>,
    pub request_body: Option<RequestBodyDoc>,
    pub response: Option<&'static str>,
    pub example: Option<RequestExampleDoc>,
}

impl EndpointDoc {
    #[must_use]
    pub const fn new(method: HttpMethod, path: &'static str, description: &'static str) -> Self {
        Self {
            method,
            path,
            tool_name: None,
            description,
            parameters: Vec::new(),
            request_body: None,
            response: None,
            example: None,
        }
    }
}

/// A worked request/response example.
#[derive(Debug, Clone)]
pub struct ExampleDoc {
    pub title: &'static str,
    pub description: &'static str,
    pub request: RequestExampleDoc,
    pub response: Option<Value>,
}

/// A multi-step usage pattern (workflow).
#[derive(Debug, Clone)]
pub struct PatternDoc {
    pub name: &'static str,
    pub description: &'static str,
    pub steps: &'static [&'static str],
    pub example: Option<&'static str>,
}

/// A structured documentation topic for an HTTP API domain.
#[derive(Debug, Clone, Default)]
pub struct EndpointTopic {
    pub description: &'static str,
    pub ai_hints: Option<&'static str>,
    pub endpoints: Vec<EndpointDoc>,
    pub examples: Vec<ExampleDoc>,
    pub patterns: Vec<PatternDoc>,
    /// JSON schemas for request/response payloads, keyed by schema name.
    pub schemas: Option<Value>,
    pub related_topics: &'static [&'static str],
}

/// One CLI flag.
#[derive(Debug, Clone)]
pub struct FlagDoc {
    pub name: &'static str,
    pub short: Option<&'static str>,
    pub ty: &'static str,
    pub required: bool,
    pub default: Option<&'static str>,
    pub description: &'static str,
}

/// One positional CLI argument.
#[derive(Debug, Clone)]
pub struct ArgDoc {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// One documented CLI command.
#[derive(Debug, Clone)]
pub struct CommandDoc {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub flags: Vec<FlagDoc>,
    pub args: Vec<ArgDoc>,
    pub examples: &'static [&'static str],
}

impl CommandDoc {
    #[must_use]
    pub const fn new(name: &'static str, description: &'static str, usage: &'static str) -> Self {
        Self {
            name,
            description,
            usage,
            flags: Vec::new(),
            args: Vec::new(),
            examples: &[],
        }
    }
}

/// A structured documentation topic for the CLI domain.
#[derive(Debug, Clone, Default)]
pub struct CommandTopic {
    pub description: &'static str,
    pub ai_hints: Option<&'static str>,
    pub commands: Vec<CommandDoc>,
    pub workflows: Vec<PatternDoc>,
    pub related_topics: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_level_deserialises_snake_case() {
        let overview: DetailLevel = serde_json::from_str(r#""overview""#).unwrap();
        assert_eq!(overview, DetailLevel::Overview);
        let examples: DetailLevel = serde_json::from_str(r#""examples""#).unwrap();
        assert_eq!(examples, DetailLevel::Examples);
        assert!(serde_json::from_str::<DetailLevel>(r#""bogus""#).is_err());
    }

    #[test]
    fn detail_level_default_is_detailed() {
        assert_eq!(DetailLevel::default(), DetailLevel::Detailed);
    }

    #[test]
    fn parameter_builder_chains() {
        let p = ParameterDoc::new("page", "integer", "Page number")
            .default_value("1")
            .options(&["1", "2"]);
        assert!(!p.required);
        assert_eq!(p.default, Some("1"));
        assert_eq!(p.options.len(), 2);
    }

    #[test]
    fn http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
