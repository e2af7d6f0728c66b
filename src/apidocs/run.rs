//! Topic data for the Xano Run API documentation domain.
//!
//! The Run API executes XanoScript directly: submit a document, track the
//! resulting session, and export its data.

use serde_json::json;

use super::format::RUN_API_CONFIG;
use super::types::{
    EndpointDoc, EndpointTopic, ExampleDoc, HttpMethod, ParameterDoc, PatternDoc, PropertyDoc,
    RequestBodyDoc, RequestExampleDoc,
};
use super::ApiDomain;
use crate::docs::TopicRegistry;

/// Builds the Run API documentation domain.
#[must_use]
pub fn build_domain() -> ApiDomain {
    let registry = TopicRegistry::builder()
        .topic("start", "Xano Run API - Getting Started", &[], start_doc())
        .topic("run", "Run Execution", &[], run_doc())
        .topic("session", "Session Management", &[], session_doc())
        .topic("history", "Run History and Document Analysis", &[], history_doc())
        .topic("data", "Session Data Export", &[], data_doc())
        .topic("workflows", "Common Workflows", &[], workflows_doc())
        .build();

    ApiDomain::new(registry, RUN_API_CONFIG)
}

const AUTH_HEADER: &[(&str, &str)] = &[("Authorization", "Bearer <token>")];

fn exec_body() -> RequestBodyDoc {
    RequestBodyDoc {
        ty: "application/json",
        properties: vec![
            PropertyDoc {
                name: "doc",
                ty: "text",
                required: true,
                description: "XanoScript document content",
            },
            PropertyDoc {
                name: "args",
                ty: "json",
                required: false,
                description: "Arguments passed to the execution, available as $args",
            },
            PropertyDoc {
                name: "env",
                ty: "json",
                required: false,
                description: "Environment variable overrides",
            },
            PropertyDoc {
                name: "template",
                ty: "text",
                required: false,
                description: "Execution template (default: small)",
            },
        ],
    }
}

fn start_doc() -> EndpointTopic {
    EndpointTopic {
        description: "The Xano Run API executes XanoScript, manages runtime sessions, and \
                      works with execution environments. A run is either a job (one-time \
                      execution that terminates) or a service (long-running process that \
                      persists until stopped). Each execution creates a session tracking \
                      state, timing metrics, and results. Authenticate with a bearer \
                      access token from Settings > Access Tokens.",
        ai_hints: Some(
            "- Use `POST /project/{id}/run/exec` to execute new XanoScript\n\
             - Sessions are created automatically from executions\n\
             - Use \"job\" for one-time tasks, \"service\" for long-running processes\n\
             - Check session state before operations (running, error, complete)\n\
             - Use `GET /session/{id}/sink` to export all data after hibernation",
        ),
        examples: vec![
            ExampleDoc {
                title: "Execute a simple XanoScript",
                description: "Run a XanoScript job and get the result",
                request: RequestExampleDoc {
                    method: "POST",
                    path: "/project/abc123-uuid/run/exec",
                    headers: AUTH_HEADER,
                    body: Some(json!({
                        "doc": "job hello {\n  response = \"Hello, World!\"\n}",
                        "args": {},
                        "template": "small"
                    })),
                },
                response: Some(json!({
                    "session_id": "session-uuid-here",
                    "state": "complete",
                    "response": "Hello, World!"
                })),
            },
            ExampleDoc {
                title: "Check session status",
                description: "Get details about a running or completed session",
                request: RequestExampleDoc {
                    method: "GET",
                    path: "/session/session-uuid-here",
                    headers: AUTH_HEADER,
                    body: None,
                },
                response: Some(json!({
                    "id": "session-uuid-here",
                    "state": "running",
                    "access": "private"
                })),
            },
        ],
        related_topics: &["run", "session", "workflows"],
        ..EndpointTopic::default()
    }
}

fn run_doc() -> EndpointTopic {
    EndpointTopic {
        description: "Execute XanoScript runs. A submitted document creates a session \
                      that progresses through pending, processing, running, and finally \
                      complete or error. The `template` field controls resource \
                      allocation; `small` suits most workloads.",
        ai_hints: Some(
            "- Include complete XanoScript in the `doc` field\n\
             - Use `args` to pass dynamic data, available as $args in XanoScript\n\
             - Re-executing a run reuses its stored configuration with overrides\n\
             - Check the session state after execution to verify success",
        ),
        endpoints: vec![
            EndpointDoc {
                tool_name: Some("run"),
                parameters: vec![
                    ParameterDoc::new("project_id", "uuid", "Project UUID").required(),
                ],
                request_body: Some(exec_body()),
                response: Some("Session object with id, state, and response"),
                example: Some(RequestExampleDoc {
                    method: "POST",
                    path: "/project/abc123-uuid/run/exec",
                    headers: AUTH_HEADER,
                    body: Some(json!({
                        "doc": "job double {\n  input { json items }\n  response = $input.items\n}",
                        "args": {"items": [1, 2, 3]},
                        "template": "small"
                    })),
                }),
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/project/{project_id}/run/exec",
                    "Execute a new XanoScript run; creates a session to track it",
                )
            },
            EndpointDoc {
                parameters: vec![
                    ParameterDoc::new("project_id", "uuid", "Project UUID").required(),
                    ParameterDoc::new("run_id", "uuid", "Run UUID to re-execute").required(),
                ],
                request_body: Some(RequestBodyDoc {
                    ty: "application/json",
                    properties: vec![
                        PropertyDoc {
                            name: "args",
                            ty: "json",
                            required: false,
                            description: "Override arguments",
                        },
                        PropertyDoc {
                            name: "env",
                            ty: "json",
                            required: false,
                            description: "Override environment variables",
                        },
                    ],
                }),
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/project/{project_id}/run/{run_id}/exec",
                    "Re-execute a stored run with optional overrides",
                )
            },
        ],
        related_topics: &["session", "history"],
        ..EndpointTopic::default()
    }
}

fn session_doc() -> EndpointTopic {
    EndpointTopic {
        description: "Sessions are active runtime execution contexts with isolated state. \
                      States are pending, processing, running, error, and complete. \
                      Access is private (authenticated) or public. Long-running services \
                      hibernate after the project timeout, which snapshots their data.",
        ai_hints: Some(
            "- Check session state before performing operations\n\
             - Only service-type sessions can be re-executed with new documents\n\
             - Use the stop endpoint to gracefully terminate running sessions\n\
             - Cannot stop sessions already in error or complete state",
        ),
        endpoints: vec![
            EndpointDoc {
                parameters: vec![
                    ParameterDoc::new("project_id", "uuid", "Project UUID").required(),
                    ParameterDoc::new("page", "integer", "Page number").default_value("1"),
                ],
                ..EndpointDoc::new(
                    HttpMethod::Get,
                    "/project/{project_id}/run/session",
                    "List active sessions for a project",
                )
            },
            EndpointDoc {
                parameters: vec![
                    ParameterDoc::new("session_id", "uuid", "Session UUID").required(),
                ],
                response: Some("Session object with state, access, and timing metrics"),
                ..EndpointDoc::new(
                    HttpMethod::Get,
                    "/session/{session_id}",
                    "Get one session's state and metrics",
                )
            },
            EndpointDoc {
                parameters: vec![
                    ParameterDoc::new("session_id", "uuid", "Session UUID").required(),
                ],
                request_body: Some(RequestBodyDoc {
                    ty: "application/json",
                    properties: vec![PropertyDoc {
                        name: "access",
                        ty: "text",
                        required: true,
                        description: "New access level: public or private",
                    }],
                }),
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/session/{session_id}/access",
                    "Change a session's access level",
                )
            },
            EndpointDoc {
                parameters: vec![
                    ParameterDoc::new("project_id", "uuid", "Project UUID").required(),
                    ParameterDoc::new("run_id", "uuid", "Run UUID").required(),
                    ParameterDoc::new("session_id", "uuid", "Session UUID").required(),
                ],
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/project/{project_id}/run/{run_id}/session/{session_id}/stop",
                    "Stop a running session",
                )
            },
        ],
        related_topics: &["run", "data"],
        ..EndpointTopic::default()
    }
}

fn history_doc() -> EndpointTopic {
    EndpointTopic {
        description: "View run execution history and analyze XanoScript documents before \
                      execution. History is sorted by creation time, newest first.",
        ai_hints: Some(
            "- Use doc/info to validate scripts before execution\n\
             - Check existing runs before creating duplicates of the same script\n\
             - Use pagination for large history sets (default 20 per page, max 100)",
        ),
        endpoints: vec![
            EndpointDoc {
                parameters: vec![
                    ParameterDoc::new("project_id", "uuid", "Project UUID").required(),
                    ParameterDoc::new("page", "integer", "Page number").default_value("1"),
                    ParameterDoc::new("per_page", "integer", "Items per page (1-100)")
                        .default_value("20"),
                ],
                example: Some(RequestExampleDoc {
                    method: "GET",
                    path: "/project/abc123-uuid/run?page=1&per_page=20",
                    headers: AUTH_HEADER,
                    body: None,
                }),
                ..EndpointDoc::new(
                    HttpMethod::Get,
                    "/project/{project_id}/run",
                    "List run execution history for a project",
                )
            },
            EndpointDoc {
                parameters: vec![
                    ParameterDoc::new("project_id", "uuid", "Project context").required(),
                ],
                request_body: Some(RequestBodyDoc {
                    ty: "application/json",
                    properties: vec![PropertyDoc {
                        name: "doc",
                        ty: "text",
                        required: true,
                        description: "XanoScript document content to analyze",
                    }],
                }),
                response: Some("Document metadata: defined functions, services, and jobs"),
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/project/{project_id}/doc/info",
                    "Parse and analyze a XanoScript document without executing it",
                )
            },
        ],
        related_topics: &["run", "workflows"],
        ..EndpointTopic::default()
    }
}

fn data_doc() -> EndpointTopic {
    EndpointTopic {
        description: "The sink endpoint exports a session's complete backup: every table \
                      schema and every record as a single JSON response. A backup exists \
                      once the session has hibernated at least once.",
        ai_hints: Some(
            "- Hibernation happens automatically after project timeout or via stop\n\
             - Data is read-only; the sink endpoint cannot modify anything\n\
             - Public sessions can export without authentication",
        ),
        endpoints: vec![EndpointDoc {
            parameters: vec![ParameterDoc::new("session_id", "uuid", "Session UUID").required()],
            example: Some(RequestExampleDoc {
                method: "GET",
                path: "/session/session-uuid-here/sink",
                headers: AUTH_HEADER,
                body: None,
            }),
            ..EndpointDoc::new(
                HttpMethod::Get,
                "/session/{session_id}/sink",
                "Export full backup data from a hibernated session",
            )
        }],
        schemas: Some(json!({
            "SinkResponse": {
                "type": "object",
                "properties": {
                    "tables": {
                        "type": "object",
                        "description": "Map of table names to schema and records"
                    }
                }
            }
        })),
        related_topics: &["session"],
        ..EndpointTopic::default()
    }
}

fn workflows_doc() -> EndpointTopic {
    EndpointTopic {
        description: "Step-by-step guides for common multi-request tasks with the Run API.",
        ai_hints: Some(
            "- Always validate scripts with doc/info before execution\n\
             - Monitor session state changes for long-running services\n\
             - Export data via /sink only after hibernation",
        ),
        patterns: vec![
            PatternDoc {
                name: "Execute New XanoScript",
                description: "Validate, execute, and monitor a XanoScript job",
                steps: &[
                    "1. `POST /project/{project_id}/doc/info` to validate script structure",
                    "2. `POST /project/{project_id}/run/exec` to execute",
                    "3. `GET /session/{session_id}` to check status",
                    "4. Poll the session until state is complete or error",
                ],
                example: Some(
                    "POST /project/abc123/run/exec\n{\"doc\": \"job p { response = 1 }\", \"args\": {}}",
                ),
            },
            PatternDoc {
                name: "Run a Persistent Service",
                description: "Start a long-running service and manage its lifecycle",
                steps: &[
                    "1. `POST /project/{project_id}/run/exec` with a service document",
                    "2. `GET /session/{session_id}` to verify the service is running",
                    "3. `POST /session/{session_id}/access` to optionally make it public",
                    "4. `POST .../session/{session_id}/stop` when done",
                ],
                example: None,
            },
            PatternDoc {
                name: "Export Session Data",
                description: "Export all data from a session after hibernation",
                steps: &[
                    "1. Execute a run (job or service)",
                    "2. Wait for the session to hibernate, automatically or via stop",
                    "3. `GET /session/{session_id}/sink` to export everything",
                ],
                example: None,
            },
        ],
        related_topics: &["start", "run", "session", "data"],
        ..EndpointTopic::default()
    }
}
