use crate::format::InputFormat;
use crate::parse::common;
use crate::parse::{LogParserStrategy, Modification};
use chrono::{DateTime, FixedOffset};

/// Strategy for `git log --raw --topo-order` output.
#[derive(Debug, Default)]
pub struct GitLogRawStrategy;

impl LogParserStrategy for GitLogRawStrategy {
    fn format(&self) -> InputFormat {
        InputFormat::GitLogRaw
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
            .filter_map(|line| common::parse_raw_line(line))
            .collect()
    }
}
