use crate::format::InputFormat;
use crate::parse::{Action, LogParserStrategy, Modification};
use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::Regex;

/// Metadata row: `r42 | jane | 2017-05-09 19:57:57 +0200 (Tue, 09 May 2017) | 1 line`
static METADATA_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^r\d+ \| ([^|]+) \| ([^|]+) \|").unwrap());

/// Changed-path row: `   M /trunk/src/main.c`
static PATH_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+([A-Z]) /(.+)$").unwrap());

/// Strategy for `svn log --verbose` output.
#[derive(Debug, Default)]
pub struct SvnLogStrategy;

impl LogParserStrategy for SvnLogStrategy {
    fn format(&self) -> InputFormat {
        InputFormat::SvnLog
    }

    fn is_commit_start(&self, line: &str) -> bool {
        // Records are separated by a 72-dash rule.
        line.len() >= 20 && line.bytes().all(|b| b == b'-')
    }

    fn parse_author(&self, commit_lines: &[String]) -> Option<String> {
        commit_lines.iter().find_map(|line| {
            METADATA_LINE
                .captures(line)
                .map(|captures| captures[1].trim().to_string())
        })
    }

    fn parse_date(&self, commit_lines: &[String]) -> Option<DateTime<FixedOffset>> {
        commit_lines.iter().find_map(|line| {
            let captures = METADATA_LINE.captures(line)?;
            let field = captures[2].trim();
            // Drop the trailing human-readable part: `... +0200 (Tue, 09 May 2017)`
            let date = field.split(" (").next()?;
            DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z").ok()
        })
    }

    fn parse_modifications(&self, commit_lines: &[String]) -> Vec<Modification> {
        commit_lines
            .iter()
            .filter_map(|line| {
                let captures = PATH_LINE.captures(line)?;
                let action = match &captures[1] {
                    "A" => Action::Add,
                    "D" => Action::Delete,
                    _ => Action::Modify,
                };
                Some(Modification::new(captures[2].to_string(), action))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Vec<String> {
        [
            "------------------------------------------------------------------------",
            "r42 | jane | 2017-05-09 19:57:57 +0200 (Tue, 09 May 2017) | 1 line",
            "Changed paths:",
            "   M /trunk/src/main.c",
            "   A /trunk/src/util.c",
            "   D /trunk/src/dead.c",
            "",
            "drop the dead module",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn detects_the_dashed_separator() {
        let strategy = SvnLogStrategy;
        assert!(strategy.is_commit_start(&"-".repeat(72)));
        assert!(!strategy.is_commit_start("---"));
        assert!(!strategy.is_commit_start("Changed paths:"));
    }

    #[test]
    fn parses_metadata_row() {
        assert_eq!(
            SvnLogStrategy.parse_author(&record()),
            Some("jane".to_string())
        );
        let date = SvnLogStrategy.parse_date(&record()).unwrap();
        assert_eq!(date.to_rfc3339(), "2017-05-09T19:57:57+02:00");
    }

    #[test]
    fn parses_changed_paths_without_leading_slash() {
        let modifications = SvnLogStrategy.parse_modifications(&record());
        assert_eq!(
            modifications,
            [
                Modification::new("trunk/src/main.c", Action::Modify),
                Modification::new("trunk/src/util.c", Action::Add),
                Modification::new("trunk/src/dead.c", Action::Delete),
            ]
        );
    }
}
