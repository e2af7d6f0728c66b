//! xano-developer-mcp: MCP server for AI-assisted Xano development
//!
//! This library serves XanoScript language documentation and validates
//! XanoScript code over the Model Context Protocol, so AI assistants can
//! write correct XanoScript without guessing at the syntax.
//!
//! # Architecture
//!
//! The server provides documentation lookup and syntax checking. The AI
//! handles the intelligence:
//!
//! - **Documentation**: File-backed XanoScript language docs plus
//!   structured Meta API, Run API, and CLI references
//! - **Validation**: Structural syntax checking with line/column
//!   diagnostics and fix suggestions for common mistakes
//!
//! The AI (not this tool) handles:
//! - Writing and refactoring XanoScript programs
//! - Choosing which endpoints and patterns to use
//! - Deploying to a Xano instance
//!
//! # Modules
//!
//! - [`apidocs`] — Structured Meta API, Run API, and CLI documentation
//! - [`config`] — Configuration loading and validation
//! - [`docs`] — File-backed documentation registry and assembly
//! - [`error`] — Error types
//! - [`mcp`] — MCP protocol implementation
//! - [`validate`] — XanoScript validation

pub mod apidocs;
pub mod config;
pub mod docs;
pub mod error;
pub mod mcp;
pub mod validate;
