//! Line-level parsers shared by the git strategies.

use crate::parse::{Action, Modification};
use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::Regex;

static AUTHOR_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Author:\s+([^<]*?)\s*(?:<[^>]*>)?\s*$").unwrap());

static DATE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Date:\s+(.+?)\s*$").unwrap());

static NAME_STATUS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z])\d*\t(.+)$").unwrap());

static NUMSTAT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+|-)\t(\d+|-)\t(.+)$").unwrap());

static BRACED_RENAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(.*) => (.*)\}").unwrap());

pub fn is_git_commit_start(line: &str) -> bool {
    line.starts_with("commit ")
}

/// `Author: Jane Doe <jane@example.org>` → `Jane Doe`.
pub fn parse_git_author(commit_lines: &[String]) -> Option<String> {
    commit_lines.iter().find_map(|line| {
        AUTHOR_LINE
            .captures(line)
            .map(|captures| captures[1].to_string())
    })
}

/// `Date:   Tue May 9 19:57:57 2017 +0200` in git's default date format.
pub fn parse_git_date(commit_lines: &[String]) -> Option<DateTime<FixedOffset>> {
    commit_lines.iter().find_map(|line| {
        let captures = DATE_LINE.captures(line)?;
        DateTime::parse_from_str(&captures[1], "%a %b %e %H:%M:%S %Y %z").ok()
    })
}

/// Name-status entry: `M\tpath`, `A\tpath`, `R100\told\tnew`, ...
pub fn parse_name_status_line(line: &str) -> Option<Modification> {
    let captures = NAME_STATUS_LINE.captures(line)?;
    let action = action_from_status(captures[1].chars().next()?)?;
    let path = match action {
        // Renames and copies carry both paths; keep the new one.
        Action::Rename | Action::Add if captures[2].contains('\t') => {
            captures[2].rsplit('\t').next()?.to_string()
        }
        _ => captures[2].to_string(),
    };
    Some(Modification::new(path, action))
}

/// Numstat entry: `3\t1\tpath`, binary `-\t-\tpath`, or a rename form.
pub fn parse_numstat_line(line: &str) -> Option<Modification> {
    let captures = NUMSTAT_LINE.captures(line)?;
    let added = parse_count(&captures[1]);
    let deleted = parse_count(&captures[2]);
    let (path, action) = resolve_numstat_path(&captures[3]);
    Some(Modification::with_counts(path, added, deleted, action))
}

/// Raw entry: `:100644 100644 abc1234 def5678 M\tpath` (two paths for R/C).
pub fn parse_raw_line(line: &str) -> Option<Modification> {
    if !line.starts_with(':') {
        return None;
    }
    let mut fields = line.split('\t');
    let header = fields.next()?;
    let path = fields.next()?;
    let new_path = fields.next();

    let status = header.split_whitespace().last()?;
    let action = action_from_status(status.chars().next()?)?;
    let path = match (action, new_path) {
        (Action::Rename | Action::Add, Some(new_path)) => new_path,
        _ => path,
    };
    Some(Modification::new(path, action))
}

fn action_from_status(status: char) -> Option<Action> {
    match status {
        'A' => Some(Action::Add),
        'C' => Some(Action::Add),
        'D' => Some(Action::Delete),
        'M' | 'T' => Some(Action::Modify),
        'R' => Some(Action::Rename),
        _ => None,
    }
}

fn parse_count(field: &str) -> u64 {
    // `-` marks a binary file; git reports no line counts for it.
    field.parse().unwrap_or(0)
}

/// Numstat rename forms: `old => new` and `pre/{old => new}/post`.
fn resolve_numstat_path(path: &str) -> (String, Action) {
    if let Some(captures) = BRACED_RENAME.captures(path) {
        let resolved = BRACED_RENAME
            .replace(path, &captures[2])
            .replace("//", "/");
        return (resolved, Action::Rename);
    }
    if let Some((_, new_path)) = path.split_once(" => ") {
        return (new_path.to_string(), Action::Rename);
    }
    (path.to_string(), Action::Modify)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn author_with_email() {
        let lines = vec!["Author: Jane Doe <jane@example.org>".to_string()];
        assert_eq!(parse_git_author(&lines), Some("Jane Doe".to_string()));
    }

    #[test]
    fn author_without_email() {
        let lines = vec!["Author: buildbot".to_string()];
        assert_eq!(parse_git_author(&lines), Some("buildbot".to_string()));
    }

    #[test]
    fn date_in_git_default_format() {
        let lines = vec!["Date:   Tue May 9 19:57:57 2017 +0200".to_string()];
        let date = parse_git_date(&lines).unwrap();
        assert_eq!(date.to_rfc3339(), "2017-05-09T19:57:57+02:00");
    }

    #[test]
    fn name_status_entries() {
        assert_eq!(
            parse_name_status_line("M\tsrc/main.rs"),
            Some(Modification::new("src/main.rs", Action::Modify))
        );
        assert_eq!(
            parse_name_status_line("R100\told.rs\tnew.rs"),
            Some(Modification::new("new.rs", Action::Rename))
        );
        assert_eq!(parse_name_status_line("    message line"), None);
    }

    #[test]
    fn numstat_entries() {
        assert_eq!(
            parse_numstat_line("3\t1\tsrc/main.rs"),
            Some(Modification::with_counts("src/main.rs", 3, 1, Action::Modify))
        );
        assert_eq!(
            parse_numstat_line("-\t-\tassets/logo.png"),
            Some(Modification::with_counts("assets/logo.png", 0, 0, Action::Modify))
        );
    }

    #[test]
    fn numstat_rename_forms() {
        assert_eq!(
            parse_numstat_line("1\t1\told.rs => new.rs"),
            Some(Modification::with_counts("new.rs", 1, 1, Action::Rename))
        );
        assert_eq!(
            parse_numstat_line("2\t0\tsrc/{parser => parse}/mod.rs"),
            Some(Modification::with_counts(
                "src/parse/mod.rs",
                2,
                0,
                Action::Rename
            ))
        );
    }

    #[test]
    fn raw_entries() {
        assert_eq!(
            parse_raw_line(":100644 100644 bcd1234 0123456 M\tsrc/main.rs"),
            Some(Modification::new("src/main.rs", Action::Modify))
        );
        assert_eq!(
            parse_raw_line(":100644 100644 abcd123 1234567 R86\told.rs\tnew.rs"),
            Some(Modification::new("new.rs", Action::Rename))
        );
        assert_eq!(parse_raw_line("M\tsrc/main.rs"), None);
    }
}
