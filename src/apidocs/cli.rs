//! Topic data for the Xano CLI documentation domain.
//!
//! The CLI is an optional companion to the Meta and Run APIs; these topics
//! cover installation, profiles, workspace sync, and script execution.

use super::types::{ArgDoc, CommandDoc, CommandTopic, FlagDoc, PatternDoc};
use super::CliDomain;
use crate::docs::TopicRegistry;

/// Builds the CLI documentation domain.
#[must_use]
pub fn build_domain() -> CliDomain {
    let registry = TopicRegistry::builder()
        .topic("start", "Xano CLI - Getting Started", &[], start_doc())
        .topic("profile", "Xano CLI - Profile Management", &[], profile_doc())
        .topic("workspace", "Xano CLI - Workspace Operations", &[], workspace_doc())
        .topic("branch", "Xano CLI - Branch Management", &[], branch_doc())
        .topic("function", "Xano CLI - Function Management", &[], function_doc())
        .topic("run", "Xano CLI - Run API Commands", &[], run_doc())
        .topic("static_host", "Xano CLI - Static Hosting", &[], static_host_doc())
        .topic(
            "integration",
            "Xano CLI + Meta API Integration Guide",
            &[],
            integration_doc(),
        )
        .build();

    CliDomain::new(registry)
}

const fn flag(
    name: &'static str,
    short: Option<&'static str>,
    ty: &'static str,
    description: &'static str,
) -> FlagDoc {
    FlagDoc {
        name,
        short,
        ty,
        required: false,
        default: None,
        description,
    }
}

fn profile_flag() -> FlagDoc {
    flag("profile", Some("p"), "string", "Profile name to use")
}

fn start_doc() -> CommandTopic {
    CommandTopic {
        description: "The Xano CLI provides command-line access to manage workspaces, \
                      execute XanoScript, and interact with the Run API. Install with \
                      `npm install -g @xano/cli`, then run `xano profile:wizard` for \
                      interactive setup. Credentials live in `~/.xano/credentials.yaml`. \
                      Every command accepts `-p, --profile <name>` and `-v, --verbose`; \
                      the `XANO_PROFILE` environment variable overrides the default \
                      profile.",
        ai_hints: Some(
            "- The CLI is optional; not all users have it installed\n\
             - The Meta API can accomplish the same tasks programmatically\n\
             - Use the CLI for local development, code sync, and quick execution\n\
             - Profile selection priority: -p flag, then XANO_PROFILE, then default",
        ),
        commands: vec![
            CommandDoc {
                examples: &["xano profile:wizard"],
                ..CommandDoc::new(
                    "profile:wizard",
                    "Interactive setup wizard: token, instance, workspace, branch",
                    "xano profile:wizard",
                )
            },
            CommandDoc {
                examples: &["xano workspace:pull ./xano-code"],
                args: vec![ArgDoc {
                    name: "path",
                    required: true,
                    description: "Local directory to pull into",
                }],
                ..CommandDoc::new(
                    "workspace:pull",
                    "Download workspace code as organized .xs files",
                    "xano workspace:pull <path> [options]",
                )
            },
        ],
        workflows: vec![PatternDoc {
            name: "First-time setup",
            description: "Configure the CLI and sync a workspace",
            steps: &[
                "Install: `npm install -g @xano/cli`",
                "Run `xano profile:wizard` and paste your access token",
                "Pull code: `xano workspace:pull ./xano-code`",
                "Edit .xs files locally, then `xano workspace:push ./xano-code`",
            ],
            example: Some("npm install -g @xano/cli\nxano profile:wizard"),
        }],
        related_topics: &["profile", "workspace", "integration"],
    }
}

fn profile_doc() -> CommandTopic {
    CommandTopic {
        description: "Profiles store credentials and context (instance, workspace, \
                      branch, Run project) in `~/.xano/credentials.yaml`. Multiple \
                      profiles let you switch between instances and environments.",
        ai_hints: Some(
            "- Tokens are stored in plaintext; mind file permissions\n\
             - Switch contexts with `-p <profile>` or the XANO_PROFILE variable\n\
             - Use profile:set-default to change the default profile",
        ),
        commands: vec![
            CommandDoc {
                examples: &["xano profile:wizard"],
                ..CommandDoc::new(
                    "profile:wizard",
                    "Interactive setup wizard for creating a profile",
                    "xano profile:wizard",
                )
            },
            CommandDoc {
                args: vec![ArgDoc {
                    name: "name",
                    required: true,
                    description: "Profile name",
                }],
                flags: vec![
                    FlagDoc {
                        required: true,
                        ..flag("instance", Some("i"), "string", "Instance origin URL")
                    },
                    FlagDoc {
                        required: true,
                        ..flag("token", Some("t"), "string", "Access token")
                    },
                    flag("workspace", Some("w"), "number", "Workspace ID"),
                    flag("branch", Some("b"), "number", "Branch ID"),
                ],
                examples: &[
                    "xano profile:create staging -i https://staging.xano.io -t $TOKEN",
                ],
                ..CommandDoc::new(
                    "profile:create",
                    "Create a new profile with explicit flags",
                    "xano profile:create <name> -i <instance_origin> -t <token> [options]",
                )
            },
            CommandDoc {
                examples: &["xano profile:list"],
                ..CommandDoc::new(
                    "profile:list",
                    "List configured profiles",
                    "xano profile:list",
                )
            },
            CommandDoc {
                args: vec![ArgDoc {
                    name: "name",
                    required: true,
                    description: "Profile to make the default",
                }],
                examples: &["xano profile:set-default production"],
                ..CommandDoc::new(
                    "profile:set-default",
                    "Change the default profile",
                    "xano profile:set-default <name>",
                )
            },
        ],
        workflows: Vec::new(),
        related_topics: &["start", "integration"],
    }
}

fn workspace_doc() -> CommandTopic {
    CommandTopic {
        description: "Workspace commands sync XanoScript code between the local \
                      filesystem and Xano. Pull splits the workspace's multidoc \
                      stream into individual .xs files organized by type (functions/, \
                      apis/, tasks/); push recombines and uploads them.",
        ai_hints: Some(
            "- The pulled directory structure is git-friendly\n\
             - Use -b to pull from one branch and push to another\n\
             - Use workspace:pull/push for bulk edits, function:* for single items",
        ),
        commands: vec![
            CommandDoc {
                flags: vec![profile_flag()],
                examples: &["xano workspace:list", "xano workspace:list -p production"],
                ..CommandDoc::new(
                    "workspace:list",
                    "List all workspaces accessible to your account",
                    "xano workspace:list [-p <profile>]",
                )
            },
            CommandDoc {
                args: vec![ArgDoc {
                    name: "path",
                    required: true,
                    description: "Local directory to pull into",
                }],
                flags: vec![
                    profile_flag(),
                    flag("branch", Some("b"), "number", "Branch to pull from"),
                ],
                examples: &["xano workspace:pull ./xano-code"],
                ..CommandDoc::new(
                    "workspace:pull",
                    "Download workspace code and split into .xs files",
                    "xano workspace:pull <path> [options]",
                )
            },
            CommandDoc {
                args: vec![ArgDoc {
                    name: "path",
                    required: true,
                    description: "Local directory to push from",
                }],
                flags: vec![
                    profile_flag(),
                    flag("branch", Some("b"), "number", "Branch to push to"),
                ],
                examples: &["xano workspace:push ./xano-code"],
                ..CommandDoc::new(
                    "workspace:push",
                    "Combine local .xs files and upload to Xano",
                    "xano workspace:push <path> [options]",
                )
            },
        ],
        workflows: vec![PatternDoc {
            name: "Local editing loop",
            description: "Sync, edit, and deploy workspace code",
            steps: &[
                "`xano workspace:pull ./xano-code` to download",
                "Edit .xs files with your editor",
                "`xano workspace:push ./xano-code` to deploy",
            ],
            example: None,
        }],
        related_topics: &["start", "function", "integration"],
    }
}

fn branch_doc() -> CommandTopic {
    CommandTopic {
        description: "Branch commands manage workspace branches from the CLI. Branches \
                      are identified by label, not id; \"v1\" is the default branch and \
                      cannot be deleted or renamed. The live branch serves production \
                      API traffic.",
        ai_hints: Some(
            "- Use `branch:list` to see all branches before making changes\n\
             - Use `branch:set-live` carefully; it redirects production traffic\n\
             - Work on a cloned branch with the -b flag on pull/push",
        ),
        commands: vec![
            CommandDoc {
                args: vec![ArgDoc {
                    name: "workspace_id",
                    required: false,
                    description: "Workspace ID (uses profile workspace if omitted)",
                }],
                flags: vec![profile_flag()],
                examples: &["xano branch:list", "xano branch:list 123"],
                ..CommandDoc::new(
                    "branch:list",
                    "List all branches in a workspace",
                    "xano branch:list [workspace_id] [options]",
                )
            },
            CommandDoc {
                args: vec![ArgDoc {
                    name: "branch_label",
                    required: true,
                    description: "Branch label, e.g. \"v1\" or \"dev\"",
                }],
                flags: vec![profile_flag(), flag("workspace", Some("w"), "string", "Workspace ID")],
                examples: &["xano branch:get v1", "xano branch:get dev -w 123"],
                ..CommandDoc::new(
                    "branch:get",
                    "Get details for a specific branch",
                    "xano branch:get <branch_label> [options]",
                )
            },
            CommandDoc {
                flags: vec![
                    FlagDoc {
                        required: true,
                        ..flag("label", Some("l"), "string", "Label for the new branch")
                    },
                    FlagDoc {
                        default: Some("v1"),
                        ..flag("source", Some("s"), "string", "Source branch to clone from")
                    },
                    flag("description", Some("d"), "string", "Description for the new branch"),
                    flag("color", Some("c"), "string", "Color hex code, e.g. \"#ebc346\""),
                ],
                examples: &[
                    "xano branch:create --label dev",
                    "xano branch:create -l feature-auth -s dev -d 'Authentication feature'",
                ],
                ..CommandDoc::new(
                    "branch:create",
                    "Create a new branch by cloning an existing one",
                    "xano branch:create --label <label> [options]",
                )
            },
            CommandDoc {
                args: vec![ArgDoc {
                    name: "branch_label",
                    required: true,
                    description: "Branch to promote to live",
                }],
                examples: &["xano branch:set-live staging"],
                ..CommandDoc::new(
                    "branch:set-live",
                    "Set a branch as the live production branch",
                    "xano branch:set-live <branch_label> [options]",
                )
            },
            CommandDoc {
                args: vec![ArgDoc {
                    name: "branch_label",
                    required: true,
                    description: "Branch to delete (not \"v1\" or the live branch)",
                }],
                examples: &["xano branch:delete feature-auth"],
                ..CommandDoc::new(
                    "branch:delete",
                    "Delete a branch",
                    "xano branch:delete <branch_label> [options]",
                )
            },
        ],
        workflows: vec![PatternDoc {
            name: "Branch-based development",
            description: "Develop on a clone, then promote it",
            steps: &[
                "`xano branch:list` to see available branches",
                "`xano branch:create --label dev` to clone from v1",
                "Pull and push with `-b dev` while developing",
                "`xano branch:set-live dev` to promote to production",
            ],
            example: None,
        }],
        related_topics: &["workspace", "profile", "integration"],
    }
}

fn function_doc() -> CommandTopic {
    CommandTopic {
        description: "Function commands list, view, create, and edit individual Xano \
                      functions. Useful for quick edits without syncing the whole \
                      workspace.",
        ai_hints: Some(
            "- Output formats: summary (table), json (full metadata), xs (raw code)\n\
             - Commands honor $EDITOR; use --edit to open before create or update",
        ),
        commands: vec![
            CommandDoc {
                flags: vec![
                    flag("workspace", Some("w"), "string", "Workspace ID"),
                    FlagDoc {
                        default: Some("summary"),
                        ..flag("output", Some("o"), "string", "Output format: summary, json")
                    },
                    flag("search", None, "string", "Search by name"),
                    flag("include_draft", None, "boolean", "Include draft versions"),
                ],
                examples: &[
                    "xano function:list",
                    "xano function:list --search auth",
                    "xano function:list -o json --include_draft",
                ],
                ..CommandDoc::new(
                    "function:list",
                    "List all functions in the workspace",
                    "xano function:list [options]",
                )
            },
            CommandDoc {
                args: vec![ArgDoc {
                    name: "function_id",
                    required: false,
                    description: "Function ID (interactive selection if omitted)",
                }],
                flags: vec![FlagDoc {
                    default: Some("xs"),
                    ..flag("output", Some("o"), "string", "Output format: summary, json, xs")
                }],
                examples: &["xano function:get 42 -o xs"],
                ..CommandDoc::new(
                    "function:get",
                    "Get a specific function by ID",
                    "xano function:get [function_id] [options]",
                )
            },
            CommandDoc {
                args: vec![ArgDoc {
                    name: "path",
                    required: false,
                    description: "Path to a .xs file with the function body",
                }],
                flags: vec![flag("edit", None, "boolean", "Open in $EDITOR before upload")],
                examples: &["xano function:create ./functions/hello.xs"],
                ..CommandDoc::new(
                    "function:create",
                    "Create a function from a XanoScript file",
                    "xano function:create [path] [options]",
                )
            },
        ],
        workflows: Vec::new(),
        related_topics: &["workspace", "run"],
    }
}

fn run_doc() -> CommandTopic {
    CommandTopic {
        description: "Run commands execute XanoScript and manage Run projects, sessions, \
                      and environment variables. They talk to the central Run API base \
                      URL, not your instance URL.",
        ai_hints: Some(
            "- Most run commands require a project; set it in the profile or use -j\n\
             - Jobs execute once and return a result; services stay running\n\
             - Override environment variables at runtime with --env KEY=value",
        ),
        commands: vec![
            CommandDoc {
                args: vec![ArgDoc {
                    name: "path",
                    required: false,
                    description: "Path to .xs file, directory, or URL",
                }],
                flags: vec![
                    flag("project", Some("j"), "string", "Run project ID"),
                    flag("args", Some("a"), "string", "JSON file with input arguments"),
                    flag("env", None, "string", "Environment override KEY=value (repeatable)"),
                    flag("stdin", None, "boolean", "Read code from stdin"),
                ],
                examples: &[
                    "xano run:exec ./job.xs",
                    "xano run:exec ./job.xs -a inputs.json",
                    "xano run:exec ./job.xs --env API_KEY=secret",
                    "echo 'var:x = 1 + 1' | xano run:exec --stdin",
                ],
                ..CommandDoc::new(
                    "run:exec",
                    "Execute XanoScript code",
                    "xano run:exec [path] [options]",
                )
            },
            CommandDoc {
                args: vec![ArgDoc {
                    name: "path",
                    required: false,
                    description: "Path to .xs file",
                }],
                flags: vec![flag("stdin", None, "boolean", "Read from stdin")],
                examples: &["xano run:info ./job.xs", "cat script.xs | xano run:info --stdin"],
                ..CommandDoc::new(
                    "run:info",
                    "Analyze XanoScript without executing it",
                    "xano run:info [path] [options]",
                )
            },
            CommandDoc {
                examples: &["xano run:projects:list"],
                ..CommandDoc::new(
                    "run:projects:list",
                    "List all Run projects",
                    "xano run:projects:list",
                )
            },
            CommandDoc {
                flags: vec![
                    FlagDoc {
                        required: true,
                        ..flag("name", Some("n"), "string", "Project name")
                    },
                    flag("description", Some("d"), "string", "Project description"),
                ],
                examples: &["xano run:projects:create -n 'My Project'"],
                ..CommandDoc::new(
                    "run:projects:create",
                    "Create a new Run project",
                    "xano run:projects:create [options]",
                )
            },
        ],
        workflows: Vec::new(),
        related_topics: &["profile", "integration"],
    }
}

fn static_host_doc() -> CommandTopic {
    CommandTopic {
        description: "Static host commands deploy frontend builds to Xano's static \
                      hosting. Build the frontend locally, zip the output, and upload \
                      it as a named build.",
        ai_hints: Some(
            "- Builds are immutable; upload a new build per release\n\
             - Use descriptive build names such as a version number",
        ),
        commands: vec![
            CommandDoc {
                flags: vec![flag("workspace", Some("w"), "string", "Workspace ID")],
                examples: &["xano static_host:list"],
                ..CommandDoc::new(
                    "static_host:list",
                    "List all static hosts in the workspace",
                    "xano static_host:list [-w <workspace>]",
                )
            },
            CommandDoc {
                args: vec![ArgDoc {
                    name: "static_host",
                    required: true,
                    description: "Static host name or ID",
                }],
                flags: vec![
                    FlagDoc {
                        required: true,
                        ..flag("file", Some("f"), "string", "Path to ZIP file")
                    },
                    FlagDoc {
                        required: true,
                        ..flag("name", Some("n"), "string", "Build name or version")
                    },
                    flag("description", Some("d"), "string", "Build description"),
                ],
                examples: &[
                    "xano static_host:build:create my-app -f ./build.zip -n 'v1.0.0'",
                ],
                ..CommandDoc::new(
                    "static_host:build:create",
                    "Upload a new build for a static host",
                    "xano static_host:build:create <static_host> [options]",
                )
            },
            CommandDoc {
                args: vec![ArgDoc {
                    name: "static_host",
                    required: true,
                    description: "Static host name or ID",
                }],
                examples: &["xano static_host:build:list my-app"],
                ..CommandDoc::new(
                    "static_host:build:list",
                    "List all builds for a static host",
                    "xano static_host:build:list <static_host> [options]",
                )
            },
        ],
        workflows: vec![PatternDoc {
            name: "Deploy a frontend",
            description: "Build, zip, and upload a frontend release",
            steps: &[
                "Build the app: `npm run build`",
                "Create the archive: `zip -r build.zip dist/`",
                "Deploy: `xano static_host:build:create my-app -f build.zip -n 'v1.0.0'`",
            ],
            example: Some(
                "npm run build\nzip -r build.zip dist/\nxano static_host:build:create my-app -f build.zip -n 'v1.0.0'",
            ),
        }],
        related_topics: &["workspace"],
    }
}

fn integration_doc() -> CommandTopic {
    CommandTopic {
        description: "When to use the CLI versus the Meta API. The CLI suits local \
                      development, code sync, and quick edits; the Meta API suits \
                      programmatic management, table and schema creation, and \
                      integrations. Both authenticate with the same access token from \
                      the Xano dashboard, and everything the CLI does is also possible \
                      through the Meta and Run APIs directly.",
        ai_hints: Some(
            "- Before suggesting CLI commands, check whether the user has it installed\n\
             - CI/CD pipelines can use either surface; the CLI is simpler for code sync\n\
             - Table and API-group management is Meta API only",
        ),
        commands: Vec::new(),
        workflows: vec![PatternDoc {
            name: "CI/CD deployment",
            description: "Deploy workspace code from a pipeline",
            steps: &[
                "Store the access token as a pipeline secret",
                "`xano profile:create ci -i $INSTANCE -t $TOKEN`",
                "`xano workspace:push ./xano-code -p ci`",
            ],
            example: Some("xano workspace:push ./xano-code -p ci"),
        }],
        related_topics: &["start", "profile", "workspace"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apidocs::DetailLevel;

    #[test]
    fn registry_has_expected_topics() {
        let domain = build_domain();
        let names = domain.topic_names();
        for expected in [
            "start",
            "profile",
            "workspace",
            "branch",
            "function",
            "run",
            "static_host",
            "integration",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn branch_topic_renders_commands() {
        let domain = build_domain();
        let out = domain.handle("branch", DetailLevel::Detailed).unwrap();
        assert!(out.contains("### `branch:create`"));
        assert!(out.contains("### `branch:set-live`"));
    }

    #[test]
    fn static_host_topic_renders_build_commands() {
        let domain = build_domain();
        let out = domain.handle("static_host", DetailLevel::Detailed).unwrap();
        assert!(out.contains("### `static_host:build:create`"));
        assert!(out.contains("| `-f, --file` | string | Yes |"));
    }

    #[test]
    fn run_topic_renders_commands_with_flags() {
        let domain = build_domain();
        let out = domain.handle("run", DetailLevel::Detailed).unwrap();
        assert!(out.contains("### `run:exec`"));
        assert!(out.contains("| `-j, --project` | string | No |"));
        assert!(out.contains("xano run:exec ./job.xs"));
    }

    #[test]
    fn integration_topic_has_workflow_but_no_commands() {
        let domain = build_domain();
        let out = domain.handle("integration", DetailLevel::Detailed).unwrap();
        assert!(!out.contains("## Commands"));
        assert!(out.contains("CI/CD deployment"));
    }
}
