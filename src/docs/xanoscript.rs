//! Static registry data for the XanoScript documentation tree.
//!
//! Topic identifiers map to markdown files under the docs root. The
//! `applyTo` patterns drive context-aware matching for `file_path` queries;
//! the alias table accepts the informal keywords users actually type.

use super::assemble::FileRegistry;
use super::TopicRegistry;

/// Builds the XanoScript topic registry.
///
/// `readme` is the overview entry (never auto-matched by path); `syntax` is
/// the foundational topic guaranteed to be present in every path match.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn build_registry() -> FileRegistry {
    TopicRegistry::builder()
        .overview("readme")
        .foundational("syntax")
        .topic(
            "readme",
            "XanoScript overview, workspace structure, and quick reference",
            &[],
            "README.md",
        )
        .topic(
            "cheatsheet",
            "Quick reference for the most common XanoScript patterns",
            &["**/*.xs"],
            "cheatsheet.md",
        )
        .topic(
            "syntax",
            "Expressions, operators, and filters for all XanoScript code",
            &["**/*.xs"],
            "syntax.md",
        )
        .topic(
            "quickstart",
            "Common patterns, quick reference, and common mistakes to avoid",
            &["**/*.xs"],
            "quickstart.md",
        )
        .topic(
            "types",
            "Data types, input blocks, and validation",
            &[
                "functions/**/*.xs",
                "apis/**/*.xs",
                "tools/**/*.xs",
                "agents/**/*.xs",
            ],
            "types.md",
        )
        .topic(
            "tables",
            "Database schema definitions with indexes and relationships",
            &["tables/*.xs"],
            "tables.md",
        )
        .topic(
            "functions",
            "Reusable function stacks with inputs and responses",
            &["functions/**/*.xs"],
            "functions.md",
        )
        .topic(
            "apis",
            "HTTP endpoint definitions with authentication and CRUD patterns",
            &["apis/**/*.xs"],
            "apis.md",
        )
        .topic("tasks", "Scheduled and cron jobs", &["tasks/*.xs"], "tasks.md")
        .topic(
            "triggers",
            "Event-driven handlers (table, realtime, workspace, agent, MCP)",
            &["triggers/**/*.xs"],
            "triggers.md",
        )
        .topic(
            "database",
            "All db.* operations: query, get, add, edit, patch, delete",
            &[
                "functions/**/*.xs",
                "apis/**/*.xs",
                "tasks/*.xs",
                "tools/**/*.xs",
            ],
            "database.md",
        )
        .topic(
            "agents",
            "AI agent configuration with LLM providers and tools",
            &["agents/**/*.xs"],
            "agents.md",
        )
        .topic(
            "tools",
            "AI tools for agents and MCP servers",
            &["tools/**/*.xs"],
            "tools.md",
        )
        .topic(
            "mcp-servers",
            "MCP server definitions exposing tools",
            &["mcp_servers/**/*.xs"],
            "mcp-servers.md",
        )
        .topic(
            "unit-testing",
            "Unit tests, mocks, and assertions within functions, APIs, and middleware",
            &["functions/**/*.xs", "apis/**/*.xs", "middleware/**/*.xs"],
            "unit-testing.md",
        )
        .topic(
            "workflow-tests",
            "End-to-end workflow tests with data source selection and tags",
            &["workflow_test/**/*.xs"],
            "workflow-tests.md",
        )
        .topic(
            "integrations",
            "External service integrations index - see sub-topics for details",
            &["functions/**/*.xs", "apis/**/*.xs", "tasks/*.xs"],
            "integrations.md",
        )
        .topic(
            "integrations/cloud-storage",
            "AWS S3, Azure Blob, and GCP Storage operations",
            &[],
            "integrations/cloud-storage.md",
        )
        .topic(
            "integrations/search",
            "Elasticsearch, OpenSearch, and Algolia search operations",
            &[],
            "integrations/search.md",
        )
        .topic(
            "integrations/redis",
            "Redis caching, rate limiting, and queue operations",
            &[],
            "integrations/redis.md",
        )
        .topic(
            "integrations/external-apis",
            "HTTP requests with api.request patterns",
            &[],
            "integrations/external-apis.md",
        )
        .topic(
            "integrations/utilities",
            "Local storage, email, zip, and Lambda utilities",
            &[],
            "integrations/utilities.md",
        )
        .topic(
            "frontend",
            "Static frontend development and deployment",
            &["static/**/*"],
            "frontend.md",
        )
        .topic(
            "run",
            "Run job and service configurations for the Xano Job Runner",
            &["run/**/*.xs"],
            "run.md",
        )
        .topic(
            "addons",
            "Reusable subqueries for fetching related data",
            &["addons/*.xs", "functions/**/*.xs", "apis/**/*.xs"],
            "addons.md",
        )
        .topic(
            "debugging",
            "Logging, inspecting, and debugging XanoScript execution",
            &["**/*.xs"],
            "debugging.md",
        )
        .topic(
            "performance",
            "Performance optimization best practices",
            &["functions/**/*.xs", "apis/**/*.xs"],
            "performance.md",
        )
        .topic(
            "realtime",
            "Real-time channels and events for push updates",
            &["functions/**/*.xs", "apis/**/*.xs", "triggers/**/*.xs"],
            "realtime.md",
        )
        .topic(
            "schema",
            "Runtime schema parsing and validation",
            &["functions/**/*.xs", "apis/**/*.xs"],
            "schema.md",
        )
        .topic(
            "security",
            "Security best practices for authentication and authorization",
            &["functions/**/*.xs", "apis/**/*.xs"],
            "security.md",
        )
        .topic(
            "streaming",
            "Streaming data from files, requests, and responses",
            &["functions/**/*.xs", "apis/**/*.xs"],
            "streaming.md",
        )
        .topic(
            "middleware",
            "Request/response interceptors for functions, queries, tasks, and tools",
            &["middleware/**/*.xs"],
            "middleware.md",
        )
        .topic(
            "branch",
            "Branch-level settings: middleware, history retention, visual styling",
            &["branch.xs"],
            "branch.md",
        )
        .topic(
            "workspace",
            "Workspace-level settings: environment variables, preferences, realtime",
            &["workspace.xs"],
            "workspace.md",
        )
        // Informal keyword aliases. Many-to-one; targets are canonical
        // identifiers above (an alias may also point at another alias, the
        // resolver retries the full pipeline per hop).
        .alias("api", "apis")
        .alias("endpoint", "apis")
        .alias("endpoints", "apis")
        .alias("query", "apis")
        .alias("func", "functions")
        .alias("function", "functions")
        .alias("table", "tables")
        .alias("task", "tasks")
        .alias("cron", "tasks")
        .alias("scheduled", "tasks")
        .alias("tool", "tools")
        .alias("agent", "agents")
        .alias("ai_agent", "agents")
        .alias("mcp", "mcp-servers")
        .alias("mcp_server", "mcp-servers")
        .alias("mcp_servers", "mcp-servers")
        .alias("reference", "syntax")
        .alias("ref", "syntax")
        .alias("statements", "syntax")
        .alias("expressions", "syntax")
        .alias("expr", "syntax")
        .alias("filters", "syntax")
        .alias("operators", "syntax")
        .alias("input", "types")
        .alias("inputs", "types")
        .alias("params", "types")
        .alias("parameters", "types")
        .alias("type", "types")
        .alias("db", "database")
        .alias("db_query", "database")
        .alias("queries", "database")
        .alias("test", "unit-testing")
        .alias("tests", "unit-testing")
        .alias("testing", "unit-testing")
        .alias("unit_test", "unit-testing")
        .alias("trigger", "triggers")
        .alias("addon", "addons")
        .alias("debug", "debugging")
        .alias("logging", "debugging")
        .alias("perf", "performance")
        .alias("auth", "security")
        .alias("ui", "frontend")
        .alias("static", "frontend")
        .alias("overview", "readme")
        .alias("cheat", "cheatsheet")
        .alias("s3", "integrations/cloud-storage")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_unique_and_nonempty() {
        let reg = build_registry();
        assert!(!reg.is_empty());
        let names: Vec<_> = reg.names().collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn every_alias_resolves() {
        let reg = build_registry();
        for keyword in [
            "api", "func", "table", "cron", "mcp", "ref", "expr", "db", "test", "auth", "ui",
        ] {
            assert!(reg.resolve(keyword).is_ok(), "alias {keyword} failed");
        }
    }

    #[test]
    fn api_path_matches_apis_and_syntax() {
        let reg = build_registry();
        let topics = reg.topics_for_path("apis/users/create.xs");
        assert_eq!(topics.first(), Some(&"syntax"));
        assert!(topics.contains(&"apis"));
        assert!(topics.contains(&"database"));
        assert!(!topics.contains(&"readme"));
    }

    #[test]
    fn nested_table_path_does_not_match_tables() {
        let reg = build_registry();
        let topics = reg.topics_for_path("tables/sub/x.xs");
        assert!(!topics.contains(&"tables"));
        assert!(topics.contains(&"syntax"));
    }

    #[test]
    fn top_level_table_path_matches_tables() {
        let reg = build_registry();
        let topics = reg.topics_for_path("tables/users.xs");
        assert!(topics.contains(&"tables"));
    }

    #[test]
    fn workspace_file_matches_workspace_topic() {
        let reg = build_registry();
        let topics = reg.topics_for_path("workspace.xs");
        assert!(topics.contains(&"workspace"));
    }
}
