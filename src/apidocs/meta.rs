//! Topic data for the Xano Meta API documentation domain.
//!
//! The Meta API manages a Xano instance programmatically: workspaces,
//! tables, API groups, endpoints, functions, and scheduled tasks.

use serde_json::json;

use super::format::META_API_CONFIG;
use super::types::{
    EndpointDoc, EndpointTopic, ExampleDoc, HttpMethod, ParameterDoc, PatternDoc,
    PropertyDoc, RequestBodyDoc, RequestExampleDoc,
};
use super::ApiDomain;
use crate::docs::TopicRegistry;

/// Builds the Meta API documentation domain.
#[must_use]
pub fn build_domain() -> ApiDomain {
    let registry = TopicRegistry::builder()
        .topic("start", "Xano Meta API - Getting Started", &[], start_doc())
        .topic(
            "authentication",
            "Meta API Authentication",
            &[],
            authentication_doc(),
        )
        .topic("workspace", "Workspace Management", &[], workspace_doc())
        .topic("table", "Database Table Operations", &[], table_doc())
        .topic("api", "API Group and Endpoint Management", &[], api_doc())
        .topic("function", "Function Management", &[], function_doc())
        .topic("task", "Scheduled Task Management", &[], task_doc())
        .topic("branch", "Branch Management", &[], branch_doc())
        .topic("agent", "AI Agent Management", &[], agent_doc())
        .topic("tool", "Agent Tool Management", &[], tool_doc())
        .topic("mcp_server", "MCP Server Management", &[], mcp_server_doc())
        .topic("middleware", "Middleware Management", &[], middleware_doc())
        .topic("history", "Request and Execution History", &[], history_doc())
        .topic("workflows", "Step-by-Step Workflows", &[], workflows_doc())
        .build();

    ApiDomain::new(registry, META_API_CONFIG)
}

/// Shorthand for the standard bearer-token header pair.
const AUTH_HEADER: &[(&str, &str)] = &[("Authorization", "Bearer <token>")];

fn paging_parameters() -> Vec<ParameterDoc> {
    vec![
        ParameterDoc::new("page", "integer", "Page number").default_value("1"),
        ParameterDoc::new("per_page", "integer", "Items per page").default_value("50"),
        ParameterDoc::new("search", "string", "Filter by name"),
        ParameterDoc::new("sort", "string", "Sort field").options(&["id", "name", "created_at"]),
        ParameterDoc::new("order", "string", "Sort direction").options(&["asc", "desc"]),
    ]
}

fn start_doc() -> EndpointTopic {
    EndpointTopic {
        description: "The Xano Meta API provides programmatic access to manage your Xano \
                      instance: workspaces, databases, API groups and endpoints, functions, \
                      scheduled tasks, and more. Authenticate with a bearer access token \
                      created in the Xano dashboard under Settings > Access Tokens.",
        ai_hints: Some(
            "- Start by calling `GET /workspace` to get workspace IDs\n\
             - Always check existing resources before creating new ones\n\
             - Use `include_xanoscript=true` to see implementation details\n\
             - Changes are drafts until published",
        ),
        examples: vec![ExampleDoc {
            title: "List all workspaces",
            description: "Get a list of all accessible workspaces",
            request: RequestExampleDoc {
                method: "GET",
                path: "/workspace",
                headers: AUTH_HEADER,
                body: None,
            },
            response: Some(json!({
                "curPage": 1,
                "nextPage": null,
                "items": [{"id": 1, "name": "My App", "description": "Production workspace"}]
            })),
        }],
        related_topics: &["authentication", "workspace", "workflows"],
        ..EndpointTopic::default()
    }
}

fn authentication_doc() -> EndpointTopic {
    EndpointTopic {
        description: "All Meta API requests require a bearer access token in the \
                      Authorization header. Tokens are scoped per instance and can be \
                      restricted to specific capabilities when created.",
        ai_hints: Some(
            "- A 401 response means the token is missing or expired\n\
             - A 403 response means the token lacks the required scope",
        ),
        endpoints: vec![EndpointDoc {
            tool_name: Some("auth_me"),
            ..EndpointDoc::new(
                HttpMethod::Get,
                "/auth/me",
                "Return the identity and scopes of the current access token",
            )
        }],
        related_topics: &["start"],
        ..EndpointTopic::default()
    }
}

fn workspace_doc() -> EndpointTopic {
    EndpointTopic {
        description: "Workspaces are the top-level containers for tables, API groups, \
                      functions, and tasks. Most other endpoints are nested under a \
                      workspace id.",
        endpoints: vec![
            EndpointDoc {
                parameters: paging_parameters(),
                response: Some("Paged list of workspace objects"),
                example: Some(RequestExampleDoc {
                    method: "GET",
                    path: "/workspace?page=1&per_page=50",
                    headers: AUTH_HEADER,
                    body: None,
                }),
                ..EndpointDoc::new(HttpMethod::Get, "/workspace", "List accessible workspaces")
            },
            EndpointDoc {
                parameters: vec![ParameterDoc::new("id", "integer", "Workspace id").required()],
                response: Some("Workspace object with branch and datasource details"),
                ..EndpointDoc::new(HttpMethod::Get, "/workspace/{id}", "Get one workspace")
            },
            EndpointDoc {
                parameters: vec![
                    ParameterDoc::new("id", "integer", "Workspace id").required(),
                    ParameterDoc::new("format", "string", "Context output format")
                        .default_value("json")
                        .options(&["json", "markdown"]),
                ],
                response: Some("Full workspace map: tables, API groups, functions"),
                ..EndpointDoc::new(
                    HttpMethod::Get,
                    "/workspace/{id}/context",
                    "Generate a complete workspace context for AI understanding",
                )
            },
        ],
        schemas: Some(json!({
            "Workspace": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "name": {"type": "string"},
                    "description": {"type": "string"}
                }
            }
        })),
        related_topics: &["table", "api", "function"],
        ..EndpointTopic::default()
    }
}

fn table_doc() -> EndpointTopic {
    EndpointTopic {
        description: "Manage database tables: schema, indexes, and content. Schema \
                      changes are drafts until published.",
        endpoints: vec![
            EndpointDoc {
                parameters: {
                    let mut params =
                        vec![ParameterDoc::new("workspace_id", "integer", "Workspace id").required()];
                    params.extend(paging_parameters());
                    params
                },
                ..EndpointDoc::new(
                    HttpMethod::Get,
                    "/workspace/{workspace_id}/table",
                    "List tables in a workspace",
                )
            },
            EndpointDoc {
                request_body: Some(RequestBodyDoc {
                    ty: "object",
                    properties: vec![
                        PropertyDoc {
                            name: "name",
                            ty: "string",
                            required: true,
                            description: "Table name",
                        },
                        PropertyDoc {
                            name: "description",
                            ty: "string",
                            required: false,
                            description: "Human-readable description",
                        },
                    ],
                }),
                example: Some(RequestExampleDoc {
                    method: "POST",
                    path: "/workspace/1/table",
                    headers: AUTH_HEADER,
                    body: Some(json!({"name": "users", "description": "Application users"})),
                }),
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/workspace/{workspace_id}/table",
                    "Create a table",
                )
            },
            EndpointDoc {
                parameters: vec![
                    ParameterDoc::new("workspace_id", "integer", "Workspace id").required(),
                    ParameterDoc::new("table_id", "integer", "Table id").required(),
                ],
                ..EndpointDoc::new(
                    HttpMethod::Delete,
                    "/workspace/{workspace_id}/table/{table_id}",
                    "Delete a table and its content",
                )
            },
        ],
        related_topics: &["workspace", "workflows"],
        ..EndpointTopic::default()
    }
}

fn api_doc() -> EndpointTopic {
    EndpointTopic {
        description: "API groups collect related REST endpoints. Endpoints accept \
                      XanoScript for their logic via the `script` field; set \
                      `include_xanoscript=true` on reads to get it back.",
        endpoints: vec![
            EndpointDoc::new(
                HttpMethod::Get,
                "/workspace/{workspace_id}/apigroup",
                "List API groups",
            ),
            EndpointDoc {
                request_body: Some(RequestBodyDoc {
                    ty: "object",
                    properties: vec![
                        PropertyDoc {
                            name: "name",
                            ty: "string",
                            required: true,
                            description: "Endpoint name",
                        },
                        PropertyDoc {
                            name: "verb",
                            ty: "string",
                            required: true,
                            description: "HTTP verb (GET, POST, PUT, DELETE)",
                        },
                        PropertyDoc {
                            name: "script",
                            ty: "string",
                            required: false,
                            description: "XanoScript body for the endpoint",
                        },
                    ],
                }),
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/workspace/{workspace_id}/apigroup/{apigroup_id}/api",
                    "Create an endpoint in a group",
                )
            },
        ],
        related_topics: &["workspace", "function"],
        ..EndpointTopic::default()
    }
}

fn function_doc() -> EndpointTopic {
    EndpointTopic {
        description: "Functions are reusable XanoScript stacks callable from endpoints, \
                      tasks, and other functions.",
        endpoints: vec![
            EndpointDoc {
                parameters: vec![ParameterDoc::new(
                    "include_xanoscript",
                    "boolean",
                    "Include the XanoScript source in the response",
                )
                .default_value("false")],
                ..EndpointDoc::new(
                    HttpMethod::Get,
                    "/workspace/{workspace_id}/function",
                    "List functions",
                )
            },
            EndpointDoc {
                request_body: Some(RequestBodyDoc {
                    ty: "object",
                    properties: vec![
                        PropertyDoc {
                            name: "name",
                            ty: "string",
                            required: true,
                            description: "Function name",
                        },
                        PropertyDoc {
                            name: "script",
                            ty: "string",
                            required: true,
                            description: "XanoScript source",
                        },
                    ],
                }),
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/workspace/{workspace_id}/function",
                    "Create a function from XanoScript",
                )
            },
        ],
        related_topics: &["api", "task"],
        ..EndpointTopic::default()
    }
}

fn task_doc() -> EndpointTopic {
    EndpointTopic {
        description: "Scheduled tasks run XanoScript on a cron-style schedule.",
        endpoints: vec![
            EndpointDoc::new(
                HttpMethod::Get,
                "/workspace/{workspace_id}/task",
                "List scheduled tasks",
            ),
            EndpointDoc {
                request_body: Some(RequestBodyDoc {
                    ty: "object",
                    properties: vec![
                        PropertyDoc {
                            name: "name",
                            ty: "string",
                            required: true,
                            description: "Task name",
                        },
                        PropertyDoc {
                            name: "schedule",
                            ty: "string",
                            required: true,
                            description: "Cron expression",
                        },
                    ],
                }),
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/workspace/{workspace_id}/task",
                    "Create a scheduled task",
                )
            },
        ],
        related_topics: &["function"],
        ..EndpointTopic::default()
    }
}

fn branch_doc() -> EndpointTopic {
    EndpointTopic {
        description: "Branches separate development, staging, and production versions of \
                      a workspace. Branches are identified by label, not id; \"v1\" is \
                      the default branch and cannot be deleted or renamed. One branch is \
                      live at a time and serves production API traffic.",
        ai_hints: Some(
            "- Use \"v1\" as the source branch when cloning from the default\n\
             - Cannot delete the \"v1\" branch or the currently live branch\n\
             - Always verify which branch is live before making changes",
        ),
        endpoints: vec![
            EndpointDoc {
                parameters: vec![
                    ParameterDoc::new("workspace_id", "integer", "Workspace id").required(),
                ],
                ..EndpointDoc::new(
                    HttpMethod::Get,
                    "/workspace/{workspace_id}/branch",
                    "List branches, including the default \"v1\"",
                )
            },
            EndpointDoc {
                request_body: Some(RequestBodyDoc {
                    ty: "object",
                    properties: vec![
                        PropertyDoc {
                            name: "label",
                            ty: "string",
                            required: true,
                            description: "Label for the new branch",
                        },
                        PropertyDoc {
                            name: "source_branch",
                            ty: "string",
                            required: false,
                            description: "Branch to clone from (defaults to \"v1\")",
                        },
                        PropertyDoc {
                            name: "color",
                            ty: "string",
                            required: false,
                            description: "Color hex code, e.g. \"#ebc346\"",
                        },
                    ],
                }),
                example: Some(RequestExampleDoc {
                    method: "POST",
                    path: "/workspace/1/branch",
                    headers: AUTH_HEADER,
                    body: Some(json!({"source_branch": "v1", "label": "feature-auth"})),
                }),
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/workspace/{workspace_id}/branch",
                    "Create a branch by cloning an existing one",
                )
            },
            EndpointDoc {
                parameters: vec![
                    ParameterDoc::new("branch_label", "string", "Branch to promote").required(),
                ],
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/workspace/{workspace_id}/branch/{branch_label}/live",
                    "Set a branch as the live production branch",
                )
            },
            EndpointDoc::new(
                HttpMethod::Delete,
                "/workspace/{workspace_id}/branch/{branch_label}",
                "Delete a branch (not \"v1\" or the live branch)",
            ),
        ],
        schemas: Some(json!({
            "Branch": {
                "type": "object",
                "properties": {
                    "label": {"type": "string"},
                    "live": {"type": "boolean"},
                    "backup": {"type": "boolean"},
                    "created_at": {"type": "string", "format": "date-time"}
                }
            }
        })),
        related_topics: &["workspace", "table"],
        ..EndpointTopic::default()
    }
}

fn agent_doc() -> EndpointTopic {
    EndpointTopic {
        description: "Agents are AI-powered automation units that use an LLM to reason \
                      and call tools across multi-step workflows. The LLM block \
                      configures provider, model, system prompt, temperature, and a max \
                      step count to bound runaway loops.",
        ai_hints: Some(
            "- Create tools first, then the agent that references them\n\
             - The system prompt is the main lever on agent behaviour\n\
             - Lower temperature means more deterministic responses\n\
             - Use triggers to invoke agents on events such as table changes",
        ),
        endpoints: vec![
            EndpointDoc {
                parameters: {
                    let mut params = vec![
                        ParameterDoc::new("workspace_id", "integer", "Workspace id").required(),
                        ParameterDoc::new(
                            "include_xanoscript",
                            "boolean",
                            "Include the XanoScript definition",
                        )
                        .default_value("false"),
                    ];
                    params.extend(paging_parameters());
                    params
                },
                ..EndpointDoc::new(
                    HttpMethod::Get,
                    "/workspace/{workspace_id}/agent",
                    "List AI agents in a workspace",
                )
            },
            EndpointDoc {
                request_body: Some(agent_style_body("XanoScript agent definition")),
                example: Some(RequestExampleDoc {
                    method: "POST",
                    path: "/workspace/1/agent",
                    headers: AUTH_HEADER,
                    body: Some(json!({
                        "name": "support_agent",
                        "xanoscript": "agent support_agent {\n  llm {\n    type = \"anthropic\"\n    max_steps = 10\n  }\n  tools = [lookup_order]\n}"
                    })),
                }),
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/workspace/{workspace_id}/agent",
                    "Create an agent with its LLM configuration",
                )
            },
            EndpointDoc::new(
                HttpMethod::Put,
                "/workspace/{workspace_id}/agent/{agent_id}",
                "Update an agent",
            ),
            EndpointDoc::new(
                HttpMethod::Delete,
                "/workspace/{workspace_id}/agent/{agent_id}",
                "Delete an agent",
            ),
        ],
        schemas: Some(json!({
            "Agent": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "name": {"type": "string"},
                    "llm": {
                        "type": "object",
                        "properties": {
                            "type": {"type": "string"},
                            "model": {"type": "string"},
                            "system_prompt": {"type": "string"},
                            "max_steps": {"type": "integer"},
                            "temperature": {"type": "number"}
                        }
                    },
                    "tools": {"type": "array", "items": {"type": "string"}}
                }
            }
        })),
        related_topics: &["tool", "mcp_server", "function"],
        ..EndpointTopic::default()
    }
}

fn tool_doc() -> EndpointTopic {
    EndpointTopic {
        description: "Tools are callable functions agents use to perform actions. Each \
                      tool declares inputs and a response and carries XanoScript logic; \
                      tools can be shared across agents.",
        ai_hints: Some(
            "- Tool names should be descriptive verbs (lookup, create, send)\n\
             - Keep tools focused on a single responsibility\n\
             - Use `include_xanoscript=true` to see the implementation",
        ),
        endpoints: vec![
            EndpointDoc {
                parameters: {
                    let mut params = vec![
                        ParameterDoc::new("workspace_id", "integer", "Workspace id").required(),
                    ];
                    params.extend(paging_parameters());
                    params
                },
                ..EndpointDoc::new(
                    HttpMethod::Get,
                    "/workspace/{workspace_id}/tool",
                    "List tools in a workspace",
                )
            },
            EndpointDoc {
                request_body: Some(agent_style_body("XanoScript tool definition")),
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/workspace/{workspace_id}/tool",
                    "Create a tool for agents to use",
                )
            },
            EndpointDoc {
                parameters: vec![
                    ParameterDoc::new("publish", "boolean", "Publish changes immediately")
                        .default_value("true"),
                ],
                ..EndpointDoc::new(
                    HttpMethod::Put,
                    "/workspace/{workspace_id}/tool/{tool_id}",
                    "Update a tool",
                )
            },
            EndpointDoc::new(
                HttpMethod::Delete,
                "/workspace/{workspace_id}/tool/{tool_id}",
                "Delete a tool; ensure no agents depend on it",
            ),
        ],
        related_topics: &["agent", "mcp_server", "function"],
        ..EndpointTopic::default()
    }
}

fn mcp_server_doc() -> EndpointTopic {
    EndpointTopic {
        description: "MCP servers expose workspace tools to external AI clients over the \
                      Model Context Protocol. Clients such as desktop assistants and AI \
                      IDEs discover and call the exposed tools; authentication settings \
                      control access.",
        ai_hints: Some(
            "- Create tools first, then the MCP server that exposes them\n\
             - Authentication settings control who can reach the server\n\
             - The documentation endpoint returns client setup instructions",
        ),
        endpoints: vec![
            EndpointDoc {
                parameters: {
                    let mut params = vec![
                        ParameterDoc::new("workspace_id", "integer", "Workspace id").required(),
                    ];
                    params.extend(paging_parameters());
                    params
                },
                ..EndpointDoc::new(
                    HttpMethod::Get,
                    "/workspace/{workspace_id}/mcp_server",
                    "List MCP servers in a workspace",
                )
            },
            EndpointDoc {
                request_body: Some(agent_style_body("XanoScript MCP server definition")),
                example: Some(RequestExampleDoc {
                    method: "POST",
                    path: "/workspace/1/mcp_server",
                    headers: AUTH_HEADER,
                    body: Some(json!({
                        "name": "my_tools",
                        "xanoscript": "mcp_server my_tools {\n  tools = [lookup_order, update_ticket]\n}"
                    })),
                }),
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/workspace/{workspace_id}/mcp_server",
                    "Create an MCP server exposing tools",
                )
            },
            EndpointDoc::new(
                HttpMethod::Put,
                "/workspace/{workspace_id}/mcp_server/{mcp_server_id}",
                "Update an MCP server",
            ),
            EndpointDoc::new(
                HttpMethod::Delete,
                "/workspace/{workspace_id}/mcp_server/{mcp_server_id}",
                "Delete an MCP server",
            ),
            EndpointDoc {
                parameters: vec![ParameterDoc::new("type", "string", "Documentation type")
                    .options(&["start", "api", "function", "task", "mcp", "agent", "tool"])],
                ..EndpointDoc::new(
                    HttpMethod::Get,
                    "/mcp_server/documentation",
                    "Get MCP setup and syntax reference",
                )
            },
        ],
        related_topics: &["tool", "agent", "authentication"],
        ..EndpointTopic::default()
    }
}

fn middleware_doc() -> EndpointTopic {
    EndpointTopic {
        description: "Middleware intercepts requests before (pre) or after (post) API \
                      endpoints, for cross-cutting concerns such as auth checks, \
                      logging, rate limiting, and response transformation. \
                      Pre-middleware can halt execution.",
        ai_hints: Some(
            "- Middleware runs on every matching request, keep it fast\n\
             - Check existing middleware before creating duplicates\n\
             - Security settings control which endpoints use the middleware",
        ),
        endpoints: vec![
            EndpointDoc {
                parameters: {
                    let mut params = vec![
                        ParameterDoc::new("workspace_id", "integer", "Workspace id").required(),
                    ];
                    params.extend(paging_parameters());
                    params
                },
                ..EndpointDoc::new(
                    HttpMethod::Get,
                    "/workspace/{workspace_id}/middleware",
                    "List middleware in a workspace",
                )
            },
            EndpointDoc {
                request_body: Some(RequestBodyDoc {
                    ty: "application/json",
                    properties: vec![
                        PropertyDoc {
                            name: "name",
                            ty: "string",
                            required: true,
                            description: "Middleware name",
                        },
                        PropertyDoc {
                            name: "type",
                            ty: "string",
                            required: true,
                            description: "pre or post",
                        },
                        PropertyDoc {
                            name: "xanoscript",
                            ty: "string",
                            required: true,
                            description: "XanoScript middleware definition",
                        },
                    ],
                }),
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/workspace/{workspace_id}/middleware",
                    "Create a middleware",
                )
            },
            EndpointDoc::new(
                HttpMethod::Put,
                "/workspace/{workspace_id}/middleware/{middleware_id}",
                "Update a middleware",
            ),
            EndpointDoc::new(
                HttpMethod::Delete,
                "/workspace/{workspace_id}/middleware/{middleware_id}",
                "Delete a middleware",
            ),
        ],
        related_topics: &["api", "authentication"],
        ..EndpointTopic::default()
    }
}

fn history_doc() -> EndpointTopic {
    EndpointTopic {
        description: "History endpoints expose audit logs for API requests and \
                      background executions: requests, functions, tasks, middleware, \
                      tools, and triggers. Retention covers recent activity only, not \
                      permanent storage.",
        ai_hints: Some(
            "- Filter by status to find errors (4xx, 5xx)\n\
             - Use the branch filter to separate dev and prod logs\n\
             - Set `include_payload=true` for full request/response data",
        ),
        endpoints: vec![
            EndpointDoc {
                parameters: vec![
                    ParameterDoc::new("workspace_id", "integer", "Workspace id").required(),
                    ParameterDoc::new("branch", "string", "Filter by branch name"),
                    ParameterDoc::new("api_id", "integer", "Filter by API endpoint id"),
                    ParameterDoc::new(
                        "include_payload",
                        "boolean",
                        "Include request/response payloads",
                    )
                    .default_value("false"),
                ],
                ..EndpointDoc::new(
                    HttpMethod::Get,
                    "/workspace/{workspace_id}/request_history",
                    "Get API request history with pagination",
                )
            },
            EndpointDoc {
                request_body: Some(RequestBodyDoc {
                    ty: "application/json",
                    properties: vec![
                        PropertyDoc {
                            name: "status",
                            ty: "array",
                            required: false,
                            description: "Filter by status codes, e.g. [500, 502]",
                        },
                        PropertyDoc {
                            name: "from_date",
                            ty: "string",
                            required: false,
                            description: "Start date (ISO format)",
                        },
                        PropertyDoc {
                            name: "to_date",
                            ty: "string",
                            required: false,
                            description: "End date (ISO format)",
                        },
                    ],
                }),
                ..EndpointDoc::new(
                    HttpMethod::Post,
                    "/workspace/{workspace_id}/request_history/search",
                    "Search request history with advanced filters",
                )
            },
            EndpointDoc::new(
                HttpMethod::Get,
                "/workspace/{workspace_id}/function_history",
                "Get function execution history",
            ),
            EndpointDoc::new(
                HttpMethod::Get,
                "/workspace/{workspace_id}/task_history",
                "Get scheduled task execution history",
            ),
            EndpointDoc::new(
                HttpMethod::Get,
                "/workspace/{workspace_id}/middleware_history",
                "Get middleware execution history",
            ),
            EndpointDoc::new(
                HttpMethod::Get,
                "/workspace/{workspace_id}/tool_history",
                "Get agent tool execution history",
            ),
            EndpointDoc::new(
                HttpMethod::Get,
                "/workspace/{workspace_id}/trigger_history",
                "Get trigger execution history",
            ),
        ],
        schemas: Some(json!({
            "RequestHistoryItem": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "verb": {"type": "string"},
                    "path": {"type": "string"},
                    "status": {"type": "integer"},
                    "duration_ms": {"type": "integer"},
                    "branch": {"type": "string"},
                    "created_at": {"type": "string", "format": "date-time"}
                }
            }
        })),
        related_topics: &["api", "function", "task"],
        ..EndpointTopic::default()
    }
}

/// The create-body shared by the agent-platform resources: a name, an
/// optional description, and a XanoScript definition.
fn agent_style_body(definition: &'static str) -> RequestBodyDoc {
    RequestBodyDoc {
        ty: "application/json",
        properties: vec![
            PropertyDoc {
                name: "name",
                ty: "string",
                required: true,
                description: "Resource name",
            },
            PropertyDoc {
                name: "description",
                ty: "string",
                required: false,
                description: "Description shown to AI clients",
            },
            PropertyDoc {
                name: "xanoscript",
                ty: "string",
                required: true,
                description: definition,
            },
        ],
    }
}

fn workflows_doc() -> EndpointTopic {
    EndpointTopic {
        description: "Step-by-step guides for common multi-request operations.",
        patterns: vec![
            PatternDoc {
                name: "Create a CRUD API from scratch",
                description: "Table, endpoints, and publish in one pass",
                steps: &[
                    "1. `GET /workspace` to find the workspace id",
                    "2. `POST /workspace/{id}/table` to create the table",
                    "3. `POST /workspace/{id}/apigroup` to create an API group",
                    "4. `POST .../api` once per CRUD endpoint, with XanoScript bodies",
                    "5. Publish the draft branch",
                ],
                example: Some("POST /workspace/1/table\n{\"name\": \"users\"}"),
            },
            PatternDoc {
                name: "Inspect an existing workspace",
                description: "Build AI context before making changes",
                steps: &[
                    "1. `GET /workspace/{id}/context?format=json`",
                    "2. `GET /workspace/{id}/table` for schema detail",
                    "3. `GET /workspace/{id}/function?include_xanoscript=true`",
                ],
                example: None,
            },
        ],
        related_topics: &["start", "workspace", "table", "api"],
        ..EndpointTopic::default()
    }
}
