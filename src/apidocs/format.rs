//! Markdown rendering for endpoint-style documentation topics.
//!
//! The same formatter serves both the Meta API and the Run API; per-domain
//! differences (base URL banner, owning tool name) live in [`FormatConfig`].

use serde_json::Value;

use super::types::{DetailLevel, EndpointDoc, EndpointTopic, ExampleDoc, RequestExampleDoc};

/// Per-domain formatting configuration.
#[derive(Debug, Clone, Copy)]
pub struct FormatConfig {
    /// Markdown block describing the domain's base URL, shown after the
    /// topic description.
    pub base_url_info: &'static str,
    /// Name of the MCP tool serving this domain, referenced in the
    /// related-topics footer.
    pub tool_name: &'static str,
}

/// Formatting configuration for the Meta API domain.
pub const META_API_CONFIG: FormatConfig = FormatConfig {
    base_url_info: "## Base URL\n```\nhttps://<your-instance-subdomain>.xano.io/api:meta/<endpoint>\n```",
    tool_name: "meta_api_docs",
};

/// Formatting configuration for the Run API domain.
pub const RUN_API_CONFIG: FormatConfig = FormatConfig {
    base_url_info: "## Base URL\n```\nhttps://<your-instance-subdomain>.xano.io/api:run/<endpoint>\n```",
    tool_name: "run_api_docs",
};

/// Renders a complete endpoint-style topic at the requested detail level.
#[must_use]
pub fn format_topic(
    title: &str,
    doc: &EndpointTopic,
    detail_level: DetailLevel,
    include_schemas: bool,
    config: &FormatConfig,
) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!("# {title}"));
    sections.push(String::new());
    sections.push(doc.description.to_string());
    sections.push(String::new());
    sections.push(config.base_url_info.to_string());

    // Hints help at overview/detailed; the examples level is for copy-paste.
    if let Some(hints) = doc.ai_hints {
        if matches!(detail_level, DetailLevel::Overview | DetailLevel::Detailed) {
            sections.push(String::new());
            sections.push("## AI Usage Hints".to_string());
            sections.push(hints.to_string());
        }
    }

    if !doc.endpoints.is_empty() {
        sections.push(String::new());
        sections.push("## Endpoints".to_string());
        for endpoint in &doc.endpoints {
            sections.push(String::new());
            sections.push(format_endpoint(endpoint, detail_level));
        }
    }

    if !doc.examples.is_empty() && detail_level != DetailLevel::Overview {
        sections.push(String::new());
        sections.push("## Examples".to_string());
        for example in &doc.examples {
            sections.push(String::new());
            sections.push(format_example(example));
        }
    }

    if !doc.patterns.is_empty() && detail_level != DetailLevel::Overview {
        sections.push(String::new());
        sections.push("## Workflows".to_string());
        for pattern in &doc.patterns {
            sections.push(String::new());
            sections.push(format!("### {}", pattern.name));
            if !pattern.description.is_empty() {
                sections.push(pattern.description.to_string());
            }
            sections.push("**Steps:**".to_string());
            for step in pattern.steps {
                sections.push((*step).to_string());
            }
            if let Some(example) = pattern.example {
                sections.push("**Example:**".to_string());
                sections.push(format!("```\n{example}\n```"));
            }
        }
    }

    if include_schemas && detail_level != DetailLevel::Overview {
        if let Some(schemas) = &doc.schemas {
            sections.push(String::new());
            sections.push("## Schemas".to_string());
            sections.push(format!("```json\n{}\n```", pretty(schemas)));
        }
    }

    if !doc.related_topics.is_empty() {
        sections.push(String::new());
        sections.push("## Related Topics".to_string());
        sections.push(format!(
            "Use `{}` with: {}",
            config.tool_name,
            doc.related_topics.join(", ")
        ));
    }

    sections.join("\n")
}

/// Renders one endpoint. Parameters, body, and response appear at
/// `detailed` and above; the inline example only at `examples`.
fn format_endpoint(endpoint: &EndpointDoc, detail_level: DetailLevel) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {} {}", endpoint.method, endpoint.path));
    if let Some(tool) = endpoint.tool_name {
        lines.push(format!("**Tool:** `{tool}`"));
    }
    lines.push(endpoint.description.to_string());

    if detail_level == DetailLevel::Overview {
        return lines.join("\n");
    }

    if !endpoint.parameters.is_empty() {
        lines.push(String::new());
        lines.push("**Parameters:**".to_string());
        for param in &endpoint.parameters {
            let mut line = format!("- `{}`: {}", param.name, param.ty);
            if param.required {
                line.push_str(" (required)");
            }
            if let Some(default) = param.default {
                line.push_str(&format!(" [default: {default}]"));
            }
            if !param.options.is_empty() {
                line.push_str(&format!(" [options: {}]", param.options.join(", ")));
            }
            line.push_str(&format!(" - {}", param.description));
            lines.push(line);
        }
    }

    if let Some(body) = &endpoint.request_body {
        lines.push(String::new());
        lines.push(format!("**Request Body:** `{}`", body.ty));
        for prop in &body.properties {
            let mut line = format!("- `{}`: {}", prop.name, prop.ty);
            if prop.required {
                line.push_str(" (required)");
            }
            line.push_str(&format!(" - {}", prop.description));
            lines.push(line);
        }
    }

    if let Some(response) = endpoint.response {
        lines.push(String::new());
        lines.push(format!("**Response:** {response}"));
    }

    if detail_level == DetailLevel::Examples {
        if let Some(example) = &endpoint.example {
            lines.push(String::new());
            lines.push("**Example:**".to_string());
            lines.push(format!("```\n{}\n```", render_request(example)));
        }
    }

    lines.join("\n")
}

/// Renders one worked example with request and response blocks.
fn format_example(example: &ExampleDoc) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}", example.title));
    lines.push(example.description.to_string());
    lines.push(String::new());
    lines.push("**Request:**".to_string());
    lines.push(format!("```\n{}\n```", render_request(&example.request)));

    if let Some(response) = &example.response {
        lines.push(String::new());
        lines.push("**Response:**".to_string());
        lines.push(format!("```json\n{}\n```", pretty(response)));
    }

    lines.join("\n")
}

/// Renders a literal HTTP request: method line, headers, then body JSON.
fn render_request(request: &RequestExampleDoc) -> String {
    let mut lines = vec![format!("{} {}", request.method, request.path)];
    for (name, value) in request.headers {
        lines.push(format!("{name}: {value}"));
    }
    if let Some(body) = &request.body {
        lines.push(String::new());
        lines.push(pretty(body));
    }
    lines.join("\n")
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apidocs::types::{HttpMethod, ParameterDoc, PropertyDoc, RequestBodyDoc};
    use serde_json::json;

    fn minimal_topic() -> EndpointTopic {
        EndpointTopic {
            description: "A test topic description",
            ..EndpointTopic::default()
        }
    }

    #[test]
    fn formats_minimal_topic() {
        let doc = minimal_topic();
        let out = format_topic("Test Topic", &doc, DetailLevel::Detailed, true, &META_API_CONFIG);
        assert!(out.contains("# Test Topic"));
        assert!(out.contains("A test topic description"));
        assert!(out.contains("api:meta"));
    }

    #[test]
    fn includes_ai_hints_at_detailed() {
        let doc = EndpointTopic {
            ai_hints: Some("Use this for testing purposes"),
            ..minimal_topic()
        };
        let out = format_topic("T", &doc, DetailLevel::Detailed, true, &META_API_CONFIG);
        assert!(out.contains("## AI Usage Hints"));
        assert!(out.contains("Use this for testing purposes"));
    }

    #[test]
    fn omits_ai_hints_at_examples_level() {
        let doc = EndpointTopic {
            ai_hints: Some("hint text"),
            ..minimal_topic()
        };
        let out = format_topic("T", &doc, DetailLevel::Examples, true, &META_API_CONFIG);
        assert!(!out.contains("## AI Usage Hints"));
    }

    fn endpoint_with_details() -> EndpointDoc {
        EndpointDoc {
            parameters: vec![
                ParameterDoc::new("id", "integer", "The test ID").required(),
                ParameterDoc::new("format", "string", "Output format")
                    .default_value("json")
                    .options(&["json", "xml", "csv"]),
            ],
            request_body: Some(RequestBodyDoc {
                ty: "object",
                properties: vec![PropertyDoc {
                    name: "name",
                    ty: "string",
                    required: true,
                    description: "The name",
                }],
            }),
            example: Some(RequestExampleDoc {
                method: "GET",
                path: "/test/1",
                headers: &[],
                body: None,
            }),
            ..EndpointDoc::new(HttpMethod::Get, "/test/{id}", "Get test by ID")
        }
    }

    #[test]
    fn overview_shows_minimal_endpoint_info() {
        let doc = EndpointTopic {
            endpoints: vec![endpoint_with_details()],
            ..minimal_topic()
        };
        let out = format_topic("T", &doc, DetailLevel::Overview, true, &META_API_CONFIG);
        assert!(out.contains("### GET /test/{id}"));
        assert!(out.contains("Get test by ID"));
        assert!(!out.contains("**Parameters:**"));
    }

    #[test]
    fn detailed_shows_parameters_but_not_inline_examples() {
        let doc = EndpointTopic {
            endpoints: vec![endpoint_with_details()],
            ..minimal_topic()
        };
        let out = format_topic("T", &doc, DetailLevel::Detailed, true, &META_API_CONFIG);
        assert!(out.contains("**Parameters:**"));
        assert!(out.contains("`id`: integer (required)"));
        assert!(out.contains("[default: json]"));
        assert!(out.contains("[options: json, xml, csv]"));
        assert!(out.contains("**Request Body:** `object`"));
        assert!(out.contains("`name`: string (required)"));
        assert!(!out.contains("**Example:**"));
    }

    #[test]
    fn examples_level_shows_inline_endpoint_example() {
        let doc = EndpointTopic {
            endpoints: vec![endpoint_with_details()],
            ..minimal_topic()
        };
        let out = format_topic("T", &doc, DetailLevel::Examples, true, &META_API_CONFIG);
        assert!(out.contains("**Example:**"));
        assert!(out.contains("GET /test/1"));
    }

    #[test]
    fn worked_examples_render_request_and_response() {
        let doc = EndpointTopic {
            examples: vec![ExampleDoc {
                title: "Basic Example",
                description: "A simple example",
                request: RequestExampleDoc {
                    method: "GET",
                    path: "/test",
                    headers: &[("Authorization", "Bearer token")],
                    body: Some(json!({"name": "test", "value": 42})),
                },
                response: Some(json!({"data": "test"})),
            }],
            ..minimal_topic()
        };
        let out = format_topic("T", &doc, DetailLevel::Detailed, true, &META_API_CONFIG);
        assert!(out.contains("## Examples"));
        assert!(out.contains("### Basic Example"));
        assert!(out.contains("**Request:**"));
        assert!(out.contains("GET /test"));
        assert!(out.contains("Authorization: Bearer token"));
        assert!(out.contains(r#""value": 42"#));
        assert!(out.contains("**Response:**"));
    }

    #[test]
    fn workflows_render_steps_and_example() {
        let doc = EndpointTopic {
            patterns: vec![crate::apidocs::types::PatternDoc {
                name: "Basic Workflow",
                description: "A simple workflow",
                steps: &["1. Do step 1", "2. Do step 2"],
                example: Some("example code here"),
            }],
            ..minimal_topic()
        };
        let out = format_topic("T", &doc, DetailLevel::Detailed, true, &META_API_CONFIG);
        assert!(out.contains("## Workflows"));
        assert!(out.contains("### Basic Workflow"));
        assert!(out.contains("**Steps:**"));
        assert!(out.contains("1. Do step 1"));
        assert!(out.contains("**Example:**"));
        assert!(out.contains("example code here"));
    }

    #[test]
    fn schemas_respect_include_flag() {
        let doc = EndpointTopic {
            schemas: Some(json!({"TestSchema": {"type": "object"}})),
            ..minimal_topic()
        };
        let with = format_topic("T", &doc, DetailLevel::Detailed, true, &META_API_CONFIG);
        assert!(with.contains("## Schemas"));
        assert!(with.contains("TestSchema"));

        let without = format_topic("T", &doc, DetailLevel::Detailed, false, &META_API_CONFIG);
        assert!(!without.contains("## Schemas"));
    }

    #[test]
    fn related_topics_name_the_owning_tool() {
        let doc = EndpointTopic {
            related_topics: &["topic1", "topic2", "topic3"],
            ..minimal_topic()
        };
        let out = format_topic("T", &doc, DetailLevel::Detailed, true, &META_API_CONFIG);
        assert!(out.contains("## Related Topics"));
        assert!(out.contains("topic1, topic2, topic3"));
        assert!(out.contains("meta_api_docs"));
    }

    #[test]
    fn run_api_config_uses_its_own_base_url() {
        let doc = minimal_topic();
        let out = format_topic("T", &doc, DetailLevel::Detailed, true, &RUN_API_CONFIG);
        assert!(out.contains("api:run"));
        assert!(!out.contains("api:meta"));
    }
}
