use crate::format::InputFormat;
use crate::parse::common;
use crate::parse::{Action, LogParserStrategy, Modification};
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;

/// Strategy for `git log --numstat --raw --topo-order` output.
///
/// Each file appears twice per record: the raw entry carries the action, the
/// numstat entry the line counts. Both are merged per path.
#[derive(Debug, Default)]
pub struct GitLogNumstatRawStrategy;

impl LogParserStrategy for GitLogNumstatRawStrategy {
    fn format(&self) -> InputFormat {
        InputFormat::GitLogNumstatRaw
    }

    fn is_commit_start(&self, line: &str) -> bool {
        common::is_git_commit_start(line)
    }

    fn parse_author(&self, commit_lines: &[String]) -> Option<String> {
        common::parse_git_author(commit_lines)
    }

    fn parse_date(&self, commit_lines: &[String]) -> Option<DateTime<FixedOffset>> {
        common::parse_git_date(commit_lines)
    }

    fn parse_modifications(&self, commit_lines: &[String]) -> Vec<Modification> {
        let actions: HashMap<String, Action> = commit_lines
            .iter()
            .filter_map(|line| common::parse_raw_line(line))
            .map(|modification| (modification.path, modification.action))
            .collect();

        let mut modifications: Vec<Modification> = commit_lines
            .iter()
            .filter_map(|line| common::parse_numstat_line(line))
            .collect();
        for modification in &mut modifications {
            if let Some(action) = actions.get(&modification.path) {
                modification.action = *action;
            }
        }
        modifications
    }
}
