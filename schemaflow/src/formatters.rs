//! Ready-made error formatters.

use std::sync::Arc;

use crate::config::ErrorFormatter;
use crate::schema::FailureResult;

/// Renders every issue on its own line as `✖ <message>`, followed by
/// `  → at <path>` when the issue has a path.
#[must_use]
pub fn prettify_issues(failure: &FailureResult) -> String {
    let mut lines = Vec::with_capacity(failure.issues.len());
    for issue in &failure.issues {
        let mut line = format!("✖ {}", issue.message);
        if let Some(path) = issue.dotted_path() {
            line.push_str("\n  → at ");
            line.push_str(&path);
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Returns [`prettify_issues`] as an [`ErrorFormatter`].
#[must_use]
pub fn prettify() -> ErrorFormatter {
    Arc::new(prettify_issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Issue, PathSegment};

    #[test]
    fn test_single_issue_without_path() {
        let failure = FailureResult::new(vec![Issue::new(
            "Invalid input: expected string, received number",
        )]);
        assert_eq!(
            prettify_issues(&failure),
            "✖ Invalid input: expected string, received number"
        );
    }

    #[test]
    fn test_multiple_issues_with_paths() {
        let failure = FailureResult::new(vec![
            Issue::new("Required").with_path(["user", "name"]),
            Issue::new("Too small").with_path([PathSegment::from("tags"), PathSegment::from(0_u64)]),
        ]);
        assert_eq!(
            prettify_issues(&failure),
            "✖ Required\n  → at user.name\n✖ Too small\n  → at tags[0]"
        );
    }

    #[test]
    fn test_formatter_handle() {
        let formatter = prettify();
        let failure = FailureResult::new(vec![Issue::new("bad")]);
        assert_eq!(formatter(&failure), "✖ bad");
    }
}
