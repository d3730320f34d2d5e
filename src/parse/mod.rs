pub mod common;
pub mod factory;
pub mod git_log;
pub mod git_log_numstat;
pub mod git_log_numstat_raw;
pub mod git_log_raw;
pub mod svn_log;

use crate::format::InputFormat;
use chrono::{DateTime, FixedOffset};

/// Action recorded for one file in one commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    Add,
    #[default]
    Modify,
    Delete,
    Rename,
}

/// One file touched by one commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modification {
    pub path: String,
    pub added_lines: u64,
    pub deleted_lines: u64,
    pub action: Action,
}

impl Modification {
    pub fn new(path: impl Into<String>, action: Action) -> Self {
        Self::with_counts(path, 0, 0, action)
    }

    pub fn with_counts(
        path: impl Into<String>,
        added_lines: u64,
        deleted_lines: u64,
        action: Action,
    ) -> Self {
        Self {
            path: path.into(),
            added_lines,
            deleted_lines,
            action,
        }
    }
}

/// One parsed change record.
#[derive(Debug, Clone)]
pub struct Commit {
    pub author: String,
    pub date: Option<DateTime<FixedOffset>>,
    pub modifications: Vec<Modification>,
}

/// Parser strategy trait — each log export shape implements this.
pub trait LogParserStrategy {
    /// Format this strategy parses.
    fn format(&self) -> InputFormat;

    /// Whether `line` begins a new change record.
    fn is_commit_start(&self, line: &str) -> bool;

    /// Extract the author from the lines of one record.
    fn parse_author(&self, commit_lines: &[String]) -> Option<String>;

    /// Extract the commit date from the lines of one record.
    fn parse_date(&self, commit_lines: &[String]) -> Option<DateTime<FixedOffset>>;

    /// Extract the file modifications from the lines of one record.
    fn parse_modifications(&self, commit_lines: &[String]) -> Vec<Modification>;
}

/// Group `lines` into change records and parse each with `strategy`.
///
/// Records without an author or without modifications are dropped.
pub fn parse_commits(lines: &[String], strategy: &dyn LogParserStrategy) -> Vec<Commit> {
    let mut commits = Vec::new();
    let mut record: Vec<String> = Vec::new();

    for line in lines {
        if strategy.is_commit_start(line) && !record.is_empty() {
            finish_record(&mut commits, &record, strategy);
            record.clear();
        }
        record.push(line.clone());
    }
    if !record.is_empty() {
        finish_record(&mut commits, &record, strategy);
    }

    commits
}

fn finish_record(commits: &mut Vec<Commit>, record: &[String], strategy: &dyn LogParserStrategy) {
    let modifications = strategy.parse_modifications(record);
    match strategy.parse_author(record) {
        Some(author) if !modifications.is_empty() => commits.push(Commit {
            author,
            date: strategy.parse_date(record),
            modifications,
        }),
        _ => tracing::debug!(lines = record.len(), "dropping incomplete record"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::git_log::GitLogStrategy;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn groups_lines_into_records_at_commit_boundaries() {
        let log = lines(
            "commit aaa111\n\
             Author: Alice <alice@example.org>\n\
             Date:   Tue May 9 19:57:57 2017 +0200\n\
             \n\
                 first\n\
             \n\
             M\tsrc/main.rs\n\
             commit bbb222\n\
             Author: Bob <bob@example.org>\n\
             Date:   Wed May 10 08:12:01 2017 +0200\n\
             \n\
                 second\n\
             \n\
             A\tsrc/lib.rs\n\
             D\tsrc/old.rs",
        );

        let commits = parse_commits(&log, &GitLogStrategy);
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].author, "Alice");
        assert_eq!(commits[0].modifications.len(), 1);
        assert_eq!(commits[1].author, "Bob");
        assert_eq!(commits[1].modifications.len(), 2);
    }

    #[test]
    fn records_without_modifications_are_dropped() {
        let log = lines(
            "commit aaa111\n\
             Author: Alice <alice@example.org>\n\
             Date:   Tue May 9 19:57:57 2017 +0200\n\
             \n\
                 merge, no file entries",
        );

        let commits = parse_commits(&log, &GitLogStrategy);
        assert!(commits.is_empty());
    }
}
