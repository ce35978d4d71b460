use std::fmt::Write;

use crate::domain::{CommitAnnotation, IssueSummary};

/// Checklist item every new note starts with under "Other Tasks"
const DEFAULT_OTHER_TASK: &str = "Review MRs";

/// Render the body of a new daily note.
///
/// Output depends only on the arguments, so the same date and issue list
/// always produce the same text.
pub fn render_base_note(date: &str, issues: &[IssueSummary]) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "# {}", date);
    out.push('\n');

    out.push_str("## Accomplishments\n");
    out.push_str("- \n");
    out.push('\n');

    out.push_str("## Jira Tasks\n");
    if issues.is_empty() {
        out.push('\n');
    }
    for issue in issues {
        render_issue(&mut out, issue);
    }

    out.push_str("## Other Tasks\n");
    let _ = writeln!(out, "- [ ] {}", DEFAULT_OTHER_TASK);
    out.push('\n');

    out.push_str("## Notes\n");
    out
}

fn render_issue(out: &mut String, issue: &IssueSummary) {
    let _ = writeln!(
        out,
        "[{}]({}) - {} - {}",
        issue.key, issue.url, issue.status, issue.summary
    );

    if !issue.components.is_empty() {
        let links: Vec<String> = issue
            .components
            .iter()
            .map(|c| format!("[[{} README]]", c))
            .collect();
        let _ = writeln!(out, "Readmes: {}", links.join(", "));
    }

    out.push_str("- [ ] \n");
    out.push('\n');
}

/// Render the single line appended for a commit: `* (<repo>): <message>`.
pub fn render_commit_bullet(commit: &CommitAnnotation) -> String {
    format!("* ({}): {}\n", commit.repo, commit.message)
}
