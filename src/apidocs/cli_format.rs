//! Markdown rendering for command-style (CLI) documentation topics.

use super::types::{CommandDoc, CommandTopic, DetailLevel};

/// Renders a complete CLI topic at the requested detail level.
#[must_use]
pub fn format_topic(title: &str, doc: &CommandTopic, detail_level: DetailLevel) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!("# {title}"));
    sections.push(String::new());
    sections.push(doc.description.to_string());

    if let Some(hints) = doc.ai_hints {
        if matches!(detail_level, DetailLevel::Overview | DetailLevel::Detailed) {
            sections.push(String::new());
            sections.push("## AI Usage Notes".to_string());
            sections.push(hints.to_string());
        }
    }

    if !doc.commands.is_empty() {
        sections.push(String::new());
        sections.push("## Commands".to_string());

        let detailed = detail_level != DetailLevel::Overview;
        for command in &doc.commands {
            sections.push(String::new());
            sections.push(format_command(command, detailed));
        }
    }

    if !doc.workflows.is_empty() && detail_level != DetailLevel::Overview {
        sections.push(String::new());
        sections.push("## Workflows".to_string());

        for workflow in &doc.workflows {
            sections.push(String::new());
            sections.push(format!("### {}", workflow.name));
            sections.push(workflow.description.to_string());
            sections.push(String::new());
            for (i, step) in workflow.steps.iter().enumerate() {
                sections.push(format!("{}. {step}", i + 1));
            }
            if let Some(example) = workflow.example {
                sections.push(String::new());
                sections.push(format!("```bash\n{example}\n```"));
            }
        }
    }

    if !doc.related_topics.is_empty() {
        sections.push(String::new());
        sections.push("## Related Topics".to_string());
        sections.push(
            doc.related_topics
                .iter()
                .map(|t| format!("- `{t}`"))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    sections.join("\n")
}

/// Renders one command: usage always, flag/argument tables when detailed,
/// usage examples whenever present.
fn format_command(cmd: &CommandDoc, detailed: bool) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### `{}`", cmd.name));
    lines.push(cmd.description.to_string());
    lines.push(String::new());
    lines.push(format!("```bash\n{}\n```", cmd.usage));

    if detailed && !cmd.flags.is_empty() {
        lines.push(String::new());
        lines.push("**Flags:**".to_string());
        lines.push("| Flag | Type | Required | Description |".to_string());
        lines.push("|------|------|----------|-------------|".to_string());
        for flag in &cmd.flags {
            let name = flag.short.map_or_else(
                || format!("--{}", flag.name),
                |short| format!("-{short}, --{}", flag.name),
            );
            let required = if flag.required { "Yes" } else { "No" };
            let description = flag.default.map_or_else(
                || flag.description.to_string(),
                |default| format!("{} (default: {default})", flag.description),
            );
            lines.push(format!(
                "| `{name}` | {} | {required} | {description} |",
                flag.ty
            ));
        }
    }

    if detailed && !cmd.args.is_empty() {
        lines.push(String::new());
        lines.push("**Arguments:**".to_string());
        lines.push("| Argument | Required | Description |".to_string());
        lines.push("|----------|----------|-------------|".to_string());
        for arg in &cmd.args {
            let required = if arg.required { "Yes" } else { "No" };
            lines.push(format!("| `{}` | {required} | {} |", arg.name, arg.description));
        }
    }

    if !cmd.examples.is_empty() {
        lines.push(String::new());
        lines.push("**Examples:**".to_string());
        lines.push(format!("```bash\n{}\n```", cmd.examples.join("\n")));
    }

    lines.join("\n")
}
