use crate::format::InputFormat;
use crate::parse::common;
use crate::parse::{LogParserStrategy, Modification};
use chrono::{DateTime, FixedOffset};

/// Strategy for `git log --numstat --topo-order` output.
#[derive(Debug, Default)]
pub struct GitLogNumstatStrategy;

impl LogParserStrategy for GitLogNumstatStrategy {
    fn format(&self) -> InputFormat {
        InputFormat::GitLogNumstat
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
        commit_lines
            .iter()
            .filter_map(|line| common::parse_numstat_line(line))
            .collect()
    }
}
