//! MCP server implementation for Xano developer tooling.
//!
//! This module implements the MCP server lifecycle:
//!
//! 1. **Initialisation**: Capability negotiation and version agreement
//! 2. **Operation**: Handling tool calls, resource reads, and pings
//! 3. **Shutdown**: Graceful connection termination
//!
//! # Architecture
//!
//! The server is a thin dispatch layer: documentation lookups go through
//! the topic registries in [`crate::docs`] and [`crate::apidocs`], and
//! XanoScript validation goes through [`crate::validate`]. All tool
//! outcomes, including failures, come back as text content with an
//! `isError` flag rather than protocol-level errors.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::apidocs::{self, ApiDomain, CliDomain, DetailLevel};
use crate::docs::assemble::{self, FileRegistry};
use crate::docs::{xanoscript, DocsContext, DocsMode};
use crate::mcp::protocol::{
    ErrorCode, IncomingMessage, JsonRpcError, JsonRpcErrorData, JsonRpcNotification,
    JsonRpcRequest, JsonRpcResponse, RequestId, MCP_PROTOCOL_VERSION, SERVER_NAME,
};
use crate::mcp::transport::StdioTransport;
use crate::validate::Validator;

/// URI scheme prefix for documentation resources.
const DOCS_URI_PREFIX: &str = "xanoscript://docs/";

/// Server state in the MCP lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Waiting for initialize request.
    AwaitingInit,
    /// Initialize received, waiting for initialized notification.
    Initialising,
    /// Ready for normal operation.
    Running,
    /// Shutdown in progress.
    ShuttingDown,
}

/// Server capabilities advertised during initialisation.
#[derive(Debug, Clone, Serialize)]
pub struct ServerCapabilities {
    /// Tool-related capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolCapabilities>,
    /// Resource-related capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceCapabilities>,
}

impl Default for ServerCapabilities {
    fn default() -> Self {
        Self {
            tools: Some(ToolCapabilities::default()),
            resources: Some(ResourceCapabilities::default()),
        }
    }
}

/// Tool-specific capabilities.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolCapabilities {
    /// Whether the tool list can change during the session.
    #[serde(rename = "listChanged", skip_serializing_if = "is_false")]
    pub list_changed: bool,
}

/// Resource-specific capabilities.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResourceCapabilities {
    /// Whether the resource list can change during the session.
    #[serde(rename = "listChanged", skip_serializing_if = "is_false")]
    pub list_changed: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's skip_serializing_if requires a predicate fn(&T) -> bool, so we must take &bool here
const fn is_false(b: &bool) -> bool {
    !*b
}

/// Server information for initialisation response.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Client information received during initialisation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    /// Client name.
    pub name: String,
    /// Client version.
    #[serde(default)]
    pub version: Option<String>,
}

/// Parameters for the initialize request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    /// Protocol version requested by client.
    pub protocol_version: String,
    /// Client capabilities.
    #[serde(default)]
    pub capabilities: Value,
    /// Client information.
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
}

/// A tool definition for tools/list response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Unique tool name.
    pub name: String,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: Value,
}

/// Parameters for tools/call request.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    /// Name of the tool to call.
    pub name: String,
    /// Arguments for the tool.
    #[serde(default)]
    pub arguments: Value,
}

/// Parameters for resources/read request.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceReadParams {
    /// URI of the resource to read.
    pub uri: String,
}

/// Content item in a tool call response.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
}

/// Result of a tool call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    /// Content returned by the tool.
    pub content: Vec<ToolContent>,
    /// Whether the tool call resulted in an error.
    #[serde(skip_serializing_if = "is_false")]
    pub is_error: bool,
}

impl ToolCallResult {
    /// Creates a successful text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Creates a successful result with one content block per text.
    #[must_use]
    pub fn texts(texts: Vec<String>) -> Self {
        Self {
            content: texts
                .into_iter()
                .map(|text| ToolContent::Text { text })
                .collect(),
            is_error: false,
        }
    }

    /// Creates an error text result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: true,
        }
    }
}

/// Arguments for the validate_xanoscript tool. Exactly one input source
/// must be provided; `pattern` only applies with `directory`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ValidateArgs {
    code: Option<String>,
    file_path: Option<String>,
    file_paths: Option<Vec<String>>,
    directory: Option<String>,
    pattern: Option<String>,
}

/// Arguments for the xanoscript_docs tool.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct XanoscriptDocsArgs {
    topic: Option<String>,
    file_path: Option<String>,
    #[serde(default)]
    mode: DocsMode,
    #[serde(default)]
    exclude_topics: Vec<String>,
}

/// Arguments for the meta_api_docs and run_api_docs tools.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ApiDocsArgs {
    topic: String,
    #[serde(default)]
    detail_level: DetailLevel,
    #[serde(default = "default_true")]
    include_schemas: bool,
}

/// Arguments for the cli_docs tool.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct CliDocsArgs {
    topic: String,
    #[serde(default)]
    detail_level: DetailLevel,
}

const fn default_true() -> bool {
    true
}

/// The MCP server for Xano documentation and XanoScript validation.
pub struct McpServer {
    /// Current server state.
    state: ServerState,
    /// The transport layer.
    transport: StdioTransport,
    /// Negotiated protocol version (set after initialisation).
    protocol_version: Option<String>,
    /// File-backed documentation context.
    docs: DocsContext,
    /// XanoScript topic registry.
    registry: FileRegistry,
    /// Meta API documentation domain.
    meta: ApiDomain,
    /// Run API documentation domain.
    run_api: ApiDomain,
    /// CLI documentation domain.
    cli: CliDomain,
    /// XanoScript validator.
    validator: Validator,
}

impl McpServer {
    /// Creates a new MCP server over the given documentation context.
    #[must_use]
    pub fn new(docs: DocsContext) -> Self {
        Self {
            state: ServerState::AwaitingInit,
            transport: StdioTransport::new(),
            protocol_version: None,
            docs,
            registry: xanoscript::build_registry(),
            meta: apidocs::meta::build_domain(),
            run_api: apidocs::run::build_domain(),
            cli: apidocs::cli::build_domain(),
            validator: Validator::new(),
        }
    }

    /// Returns the current server state.
    #[must_use]
    pub const fn state(&self) -> ServerState {
        self.state
    }

    /// Runs the MCP server main loop with graceful shutdown handling.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    pub async fn run(&mut self) -> std::io::Result<()> {
        self.run_with_shutdown().await
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(unix)]
    async fn run_with_shutdown(&mut self) -> std::io::Result<()> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt()).map_err(std::io::Error::other)?;
        let mut sigterm = signal(SignalKind::terminate()).map_err(std::io::Error::other)?;

        loop {
            tokio::select! {
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(windows)]
    async fn run_with_shutdown(&mut self) -> std::io::Result<()> {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    tracing::info!("Received Ctrl+C, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Handles the result from transport read.
    ///
    /// Returns `true` if the server should shut down.
    async fn handle_transport_result(
        &mut self,
        line_result: std::io::Result<Option<String>>,
    ) -> std::io::Result<bool> {
        let Some(line) = line_result? else {
            self.state = ServerState::ShuttingDown;
            return Ok(true);
        };

        if line.trim().is_empty() {
            return Ok(false);
        }

        self.handle_line(&line).await?;

        if self.state == ServerState::ShuttingDown {
            return Ok(true);
        }

        Ok(false)
    }

    /// Handles a single line of input.
    async fn handle_line(&mut self, line: &str) -> std::io::Result<()> {
        use crate::mcp::protocol::parse_message;

        match parse_message(line) {
            Ok(msg) => self.handle_message(msg).await,
            Err(error) => {
                self.transport.write_error(&error).await?;
                Ok(())
            }
        }
    }

    /// Handles a parsed incoming message.
    async fn handle_message(&mut self, msg: IncomingMessage) -> std::io::Result<()> {
        match msg {
            IncomingMessage::Request(req) => self.handle_request(req).await,
            IncomingMessage::Notification(ref notif) => {
                self.handle_notification(notif);
                Ok(())
            }
        }
    }

    /// Handles an incoming request.
    async fn handle_request(&mut self, req: JsonRpcRequest) -> std::io::Result<()> {
        let response = match req.method.as_str() {
            "initialize" => self.handle_initialize(&req),
            "tools/list" => self.handle_tools_list(&req),
            "tools/call" => self.handle_tools_call(&req),
            "resources/list" => self.handle_resources_list(&req),
            "resources/read" => self.handle_resources_read(&req),
            "ping" => Ok(Self::handle_ping(&req)),
            _ => Err(JsonRpcError::method_not_found(req.id.clone(), &req.method)),
        };

        match response {
            Ok(resp) => self.transport.write_response(&resp).await,
            Err(error) => self.transport.write_error(&error).await,
        }
    }

    /// Handles an incoming notification.
    fn handle_notification(&mut self, notif: &JsonRpcNotification) {
        if notif.method == "notifications/initialized" && self.state == ServerState::Initialising {
            self.state = ServerState::Running;
        }
    }

    /// Handles the initialize request.
    fn handle_initialize(&mut self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        if self.state != ServerState::AwaitingInit {
            return Err(JsonRpcError::new(
                Some(req.id.clone()),
                JsonRpcErrorData::with_message(
                    ErrorCode::InvalidRequest,
                    "Server already initialised",
                ),
            ));
        }

        let _params: InitializeParams = req
            .params
            .as_ref()
            .map(|p| serde_json::from_value(p.clone()))
            .transpose()
            .map_err(|e| {
                JsonRpcError::invalid_params(
                    req.id.clone(),
                    format!("Invalid initialize params: {e}"),
                )
            })?
            .ok_or_else(|| {
                JsonRpcError::invalid_params(req.id.clone(), "Missing initialize params")
            })?;

        let negotiated_version = MCP_PROTOCOL_VERSION.to_string();

        self.protocol_version = Some(negotiated_version.clone());
        self.state = ServerState::Initialising;

        let result = json!({
            "protocolVersion": negotiated_version,
            "capabilities": ServerCapabilities::default(),
            "serverInfo": ServerInfo::default(),
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the tools/list request.
    fn handle_tools_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let tools = self.get_tool_definitions();

        let result = json!({
            "tools": tools,
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the tools/call request.
    fn handle_tools_call(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let params: ToolCallParams = req
            .params
            .as_ref()
            .map(|p| serde_json::from_value(p.clone()))
            .transpose()
            .map_err(|e| {
                JsonRpcError::invalid_params(
                    req.id.clone(),
                    format!("Invalid tool call params: {e}"),
                )
            })?
            .ok_or_else(|| {
                JsonRpcError::invalid_params(req.id.clone(), "Missing tool call params")
            })?;

        let result = match params.name.as_str() {
            "validate_xanoscript" => self.call_validate_xanoscript(&params.arguments),
            "xanoscript_docs" => self.call_xanoscript_docs(&params.arguments),
            "meta_api_docs" => self.call_meta_api_docs(&params.arguments),
            "run_api_docs" => self.call_run_api_docs(&params.arguments),
            "cli_docs" => self.call_cli_docs(&params.arguments),
            "mcp_version" => Self::call_mcp_version(),
            _ => ToolCallResult::error(format!("Unknown tool: {}", params.name)),
        };

        let result_value = serde_json::to_value(&result).map_err(|e| {
            tracing::error!(error = %e, "Failed to serialise tool call result");
            JsonRpcError::new(
                Some(req.id.clone()),
                JsonRpcErrorData::with_message(
                    ErrorCode::InternalError,
                    "Internal error: failed to serialise result",
                ),
            )
        })?;

        Ok(JsonRpcResponse::success(req.id.clone(), result_value))
    }

    /// Handles the resources/list request. Every XanoScript topic is
    /// exposed as a markdown resource.
    fn handle_resources_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let resources: Vec<Value> = self
            .registry
            .iter()
            .map(|entry| {
                json!({
                    "uri": format!("{DOCS_URI_PREFIX}{}", entry.name),
                    "name": entry.name,
                    "description": entry.description,
                    "mimeType": "text/markdown",
                })
            })
            .collect();

        Ok(JsonRpcResponse::success(
            req.id.clone(),
            json!({ "resources": resources }),
        ))
    }

    /// Handles the resources/read request.
    fn handle_resources_read(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let params: ResourceReadParams = req
            .params
            .as_ref()
            .map(|p| serde_json::from_value(p.clone()))
            .transpose()
            .map_err(|e| {
                JsonRpcError::invalid_params(
                    req.id.clone(),
                    format!("Invalid resource read params: {e}"),
                )
            })?
            .ok_or_else(|| {
                JsonRpcError::invalid_params(req.id.clone(), "Missing resource read params")
            })?;

        let Some(topic) = params.uri.strip_prefix(DOCS_URI_PREFIX) else {
            return Err(JsonRpcError::invalid_params(
                req.id.clone(),
                format!("Unsupported resource URI: {}", params.uri),
            ));
        };

        let content = assemble::topic(&self.docs, &self.registry, topic, DocsMode::Full)
            .map_err(|e| JsonRpcError::invalid_params(req.id.clone(), e.to_string()))?;

        Ok(JsonRpcResponse::success(
            req.id.clone(),
            json!({
                "contents": [{
                    "uri": params.uri,
                    "mimeType": "text/markdown",
                    "text": content,
                }]
            }),
        ))
    }

    /// Handles the ping request.
    fn handle_ping(req: &JsonRpcRequest) -> JsonRpcResponse {
        JsonRpcResponse::success(req.id.clone(), json!({}))
    }

    /// Ensures the server is in the Running state.
    fn require_running(&self, id: &RequestId) -> Result<(), JsonRpcError> {
        if self.state != ServerState::Running {
            return Err(JsonRpcError::new(
                Some(id.clone()),
                JsonRpcErrorData::with_message(ErrorCode::InvalidRequest, "Server not initialised"),
            ));
        }
        Ok(())
    }

    /// Returns the list of available tools.
    #[allow(clippy::too_many_lines)]
    fn get_tool_definitions(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: "validate_xanoscript".to_string(),
                description: Some(
                    "Validate XanoScript code for syntax errors. Supports multiple input \
                     methods:\n\
                     - code: Raw XanoScript code as a string\n\
                     - file_path: Path to a single .xs file (easier than escaping code!)\n\
                     - file_paths: Array of file paths for batch validation\n\
                     - directory: Validate all .xs files in a directory\n\n\
                     Returns errors with line/column positions and helpful suggestions for \
                     common mistakes. The object type is auto-detected from the code syntax."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "code": {
                            "type": "string",
                            "description": "The XanoScript code to validate as a string. Use file_path instead if the code contains special characters that are hard to escape."
                        },
                        "file_path": {
                            "type": "string",
                            "description": "Path to a single XanoScript file to validate. Example: \"functions/utils/format.xs\""
                        },
                        "file_paths": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Array of file paths for batch validation. Returns a summary with per-file results."
                        },
                        "directory": {
                            "type": "string",
                            "description": "Directory path to validate. Validates all .xs files recursively. Use with 'pattern' to filter."
                        },
                        "pattern": {
                            "type": "string",
                            "description": "Glob pattern to filter files when using 'directory' (default: \"**/*.xs\"). Example: \"apis/**/*.xs\""
                        }
                    },
                    "required": []
                }),
            },
            ToolDefinition {
                name: "xanoscript_docs".to_string(),
                description: Some(
                    "Get XanoScript programming language documentation for AI code generation. \
                     Call without parameters for overview (README). \
                     Use 'topic' for specific documentation, or 'file_path' for context-aware \
                     docs based on the file you're editing. \
                     Use mode='quick_reference' for compact syntax reference (recommended for \
                     context efficiency) and mode='index' to list available topics."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "topic": {
                            "type": "string",
                            "description": format!("Documentation topic. Available:\n{}", self.registry.describe_topics())
                        },
                        "file_path": {
                            "type": "string",
                            "description": "File path being edited (e.g., 'apis/users/create.xs'). Returns all relevant docs based on file type pattern matching."
                        },
                        "mode": {
                            "type": "string",
                            "enum": ["full", "quick_reference", "index"],
                            "description": "full = complete documentation, quick_reference = compact Quick Reference sections only, index = topic catalogue with sizes."
                        },
                        "exclude_topics": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Topics to omit from a file_path response (e.g. ones already in context)."
                        }
                    },
                    "required": []
                }),
            },
            ToolDefinition {
                name: "meta_api_docs".to_string(),
                description: Some(format!(
                    "Get documentation for the Xano Meta API (instance management: \
                     workspaces, tables, API groups, functions, tasks). Available topics:\n{}",
                    self.meta.describe_lines()
                )),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "topic": {
                            "type": "string",
                            "description": "Documentation topic to fetch."
                        },
                        "detail_level": {
                            "type": "string",
                            "enum": ["overview", "detailed", "examples"],
                            "description": "overview = endpoint summaries, detailed = full parameter reference (default), examples = reference plus inline request examples."
                        },
                        "include_schemas": {
                            "type": "boolean",
                            "description": "Include JSON schemas in the output (default: true)."
                        }
                    },
                    "required": ["topic"]
                }),
            },
            ToolDefinition {
                name: "run_api_docs".to_string(),
                description: Some(format!(
                    "Get documentation for the Xano Run API (XanoScript execution: runs, \
                     sessions, data export). Available topics:\n{}",
                    self.run_api.describe_lines()
                )),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "topic": {
                            "type": "string",
                            "description": "Documentation topic to fetch."
                        },
                        "detail_level": {
                            "type": "string",
                            "enum": ["overview", "detailed", "examples"],
                            "description": "overview = endpoint summaries, detailed = full parameter reference (default), examples = reference plus inline request examples."
                        },
                        "include_schemas": {
                            "type": "boolean",
                            "description": "Include JSON schemas in the output (default: true)."
                        }
                    },
                    "required": ["topic"]
                }),
            },
            ToolDefinition {
                name: "cli_docs".to_string(),
                description: Some(format!(
                    "Get documentation for the Xano CLI (profiles, workspace sync, script \
                     execution). Available topics:\n{}",
                    self.cli.describe_lines()
                )),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "topic": {
                            "type": "string",
                            "description": "Documentation topic to fetch."
                        },
                        "detail_level": {
                            "type": "string",
                            "enum": ["overview", "detailed", "examples"],
                            "description": "overview = command summaries, detailed = full flag/argument reference (default)."
                        }
                    },
                    "required": ["topic"]
                }),
            },
            ToolDefinition {
                name: "mcp_version".to_string(),
                description: Some(
                    "Get the current version of the Xano developer MCP server.".to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {},
                    "required": []
                }),
            },
        ]
    }

    /// Validates XanoScript from one of the four input sources.
    fn call_validate_xanoscript(&self, arguments: &Value) -> ToolCallResult {
        let args: ValidateArgs = match parse_args(arguments) {
            Ok(args) => args,
            Err(message) => return ToolCallResult::error(message),
        };

        let sources = usize::from(args.code.is_some())
            + usize::from(args.file_path.is_some())
            + usize::from(args.file_paths.is_some())
            + usize::from(args.directory.is_some());
        if sources == 0 {
            return ToolCallResult::error(
                "Error: One of 'code', 'file_path', 'file_paths', or 'directory' parameter is required",
            );
        }
        if sources > 1 {
            return ToolCallResult::error(
                "Error: Provide exactly one of 'code', 'file_path', 'file_paths', or 'directory'",
            );
        }
        if args.pattern.is_some() && args.directory.is_none() {
            return ToolCallResult::error("Error: 'pattern' requires 'directory'");
        }

        if let Some(code) = &args.code {
            let outcome = self.validator.validate_code(code);
            return wrap_outcome(outcome.valid, outcome.message);
        }

        if let Some(file_path) = &args.file_path {
            let outcome = self.validator.validate_file(Path::new(file_path));
            return wrap_outcome(outcome.valid, outcome.message);
        }

        if let Some(file_paths) = &args.file_paths {
            let paths: Vec<PathBuf> = file_paths.iter().map(PathBuf::from).collect();
            let outcome = self.validator.validate_batch(&paths);
            return wrap_outcome(outcome.valid, outcome.message);
        }

        // Checked above: directory is the only remaining source.
        let directory = args.directory.as_deref().unwrap_or_default();
        let outcome = self
            .validator
            .validate_directory(Path::new(directory), args.pattern.as_deref());
        wrap_outcome(outcome.valid, outcome.message)
    }

    /// Serves file-backed XanoScript documentation.
    fn call_xanoscript_docs(&self, arguments: &Value) -> ToolCallResult {
        let args: XanoscriptDocsArgs = match parse_args(arguments) {
            Ok(args) => args,
            Err(message) => return ToolCallResult::error(message),
        };

        if args.topic.is_some() && args.file_path.is_some() {
            return ToolCallResult::error(
                "Error: 'topic' and 'file_path' are mutually exclusive",
            );
        }

        if let Some(file_path) = &args.file_path {
            let blocks = assemble::for_path(
                &self.docs,
                &self.registry,
                file_path,
                args.mode,
                &args.exclude_topics,
            );
            return ToolCallResult::texts(blocks);
        }

        if args.mode == DocsMode::Index {
            return ToolCallResult::text(assemble::index(&self.docs, &self.registry));
        }

        let result = match &args.topic {
            Some(topic) => assemble::topic(&self.docs, &self.registry, topic, args.mode),
            None => assemble::overview(&self.docs, &self.registry),
        };

        match result {
            Ok(content) => ToolCallResult::text(content),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Serves Meta API documentation.
    fn call_meta_api_docs(&self, arguments: &Value) -> ToolCallResult {
        let args: ApiDocsArgs = match parse_args(arguments) {
            Ok(args) => args,
            Err(message) => return ToolCallResult::error(message),
        };

        match self
            .meta
            .handle(&args.topic, args.detail_level, args.include_schemas)
        {
            Ok(content) => ToolCallResult::text(content),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Serves Run API documentation.
    fn call_run_api_docs(&self, arguments: &Value) -> ToolCallResult {
        let args: ApiDocsArgs = match parse_args(arguments) {
            Ok(args) => args,
            Err(message) => return ToolCallResult::error(message),
        };

        match self
            .run_api
            .handle(&args.topic, args.detail_level, args.include_schemas)
        {
            Ok(content) => ToolCallResult::text(content),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Serves CLI documentation.
    fn call_cli_docs(&self, arguments: &Value) -> ToolCallResult {
        let args: CliDocsArgs = match parse_args(arguments) {
            Ok(args) => args,
            Err(message) => return ToolCallResult::error(message),
        };

        match self.cli.handle(&args.topic, args.detail_level) {
            Ok(content) => ToolCallResult::text(content),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Reports the server version.
    fn call_mcp_version() -> ToolCallResult {
        ToolCallResult::text(env!("CARGO_PKG_VERSION"))
    }
}

/// Deserialises tool arguments, treating absent arguments as an empty
/// object. A shape mismatch becomes an error result, not a protocol error.
fn parse_args<T: serde::de::DeserializeOwned>(arguments: &Value) -> Result<T, String> {
    let value = if arguments.is_null() {
        json!({})
    } else {
        arguments.clone()
    };
    serde_json::from_value(value).map_err(|e| format!("Invalid arguments: {e}"))
}

fn wrap_outcome(valid: bool, message: String) -> ToolCallResult {
    if valid {
        ToolCallResult::text(message)
    } else {
        ToolCallResult::error(message)
    }
}
