use crate::metrics::Metric;
use crate::parse::Commit;
use chrono::{DateTime, Datelike, FixedOffset};
use std::collections::BTreeSet;

/// ISO calendar week of a commit date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarWeek {
    year: i32,
    week: u32,
}

impl CalendarWeek {
    pub fn from_date(date: &DateTime<FixedOffset>) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Number of weeks from `self` to `other`, on a 52-week year.
    pub fn weeks_until(&self, other: &CalendarWeek) -> i64 {
        52 * i64::from(other.year - self.year) + i64::from(other.week) - i64::from(self.week)
    }
}

/// Distinct calendar weeks with at least one commit.
#[derive(Debug, Default)]
pub struct WeeksWithCommits {
    weeks: BTreeSet<CalendarWeek>,
}

impl Metric for WeeksWithCommits {
    fn name(&self) -> &'static str {
        "weeks_with_commits"
    }

    fn register_commit(&mut self, commit: &Commit) {
        if let Some(date) = &commit.date {
            self.weeks.insert(CalendarWeek::from_date(date));
        }
    }

    fn value(&self) -> u64 {
        self.weeks.len() as u64
    }
}

/// Weeks between the first and the last commit week, inclusive.
#[derive(Debug, Default)]
pub struct RangeOfWeeksWithCommits {
    weeks: BTreeSet<CalendarWeek>,
}

impl Metric for RangeOfWeeksWithCommits {
    fn name(&self) -> &'static str {
        "range_of_weeks_with_commits"
    }

    fn register_commit(&mut self, commit: &Commit) {
        if let Some(date) = &commit.date {
            self.weeks.insert(CalendarWeek::from_date(date));
        }
    }

    fn value(&self) -> u64 {
        match (self.weeks.first(), self.weeks.last()) {
            (Some(first), Some(last)) => (first.weeks_until(last) + 1).max(0) as u64,
            _ => 0,
        }
    }
}

/// Longest run of consecutive calendar weeks with commits.
#[derive(Debug, Default)]
pub struct SuccessiveWeeksOfCommits {
    weeks: BTreeSet<CalendarWeek>,
}

impl Metric for SuccessiveWeeksOfCommits {
    fn name(&self) -> &'static str {
        "successive_weeks_of_commits"
    }

    fn register_commit(&mut self, commit: &Commit) {
        if let Some(date) = &commit.date {
            self.weeks.insert(CalendarWeek::from_date(date));
        }
    }

    fn value(&self) -> u64 {
        let mut longest = 0u64;
        let mut run = 0u64;
        let mut previous: Option<CalendarWeek> = None;
        for week in &self.weeks {
            run = match previous {
                Some(prev) if prev.weeks_until(week) == 1 => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            previous = Some(*week);
        }
        longest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::testutil::commit;
    use pretty_assertions::assert_eq;

    fn register(metric: &mut impl Metric, dates: &[&str]) {
        for date in dates {
            metric.register_commit(&commit("jane", date, &["a"]));
        }
    }

    #[test]
    fn calendar_week_spans_year_boundaries() {
        // 2017-01-01 falls into ISO week 52 of 2016.
        let date = DateTime::parse_from_rfc3339("2017-01-01T12:00:00+00:00").unwrap();
        let january = CalendarWeek::from_date(&date);
        let date = DateTime::parse_from_rfc3339("2016-12-28T12:00:00+00:00").unwrap();
        let december = CalendarWeek::from_date(&date);
        assert_eq!(january, december);
    }

    #[test]
    fn weeks_with_commits_counts_distinct_weeks() {
        let mut metric = WeeksWithCommits::default();
        register(
            &mut metric,
            &[
                "2017-05-09T19:57:57+02:00",
                "2017-05-10T09:00:00+02:00",
                "2017-05-23T09:00:00+02:00",
            ],
        );
        assert_eq!(metric.value(), 2);
    }

    #[test]
    fn range_includes_empty_weeks_in_between() {
        let mut metric = RangeOfWeeksWithCommits::default();
        register(
            &mut metric,
            &["2017-05-09T19:57:57+02:00", "2017-05-30T09:00:00+02:00"],
        );
        assert_eq!(metric.value(), 4);
    }

    #[test]
    fn range_of_single_week_is_one() {
        let mut metric = RangeOfWeeksWithCommits::default();
        register(&mut metric, &["2017-05-09T19:57:57+02:00"]);
        assert_eq!(metric.value(), 1);
    }

    #[test]
    fn successive_weeks_tracks_the_longest_run() {
        let mut metric = SuccessiveWeeksOfCommits::default();
        register(
            &mut metric,
            &[
                "2017-05-02T09:00:00+02:00",
                "2017-05-09T09:00:00+02:00",
                "2017-05-16T09:00:00+02:00",
                "2017-06-06T09:00:00+02:00",
            ],
        );
        assert_eq!(metric.value(), 3);
    }

    #[test]
    fn successive_weeks_spans_a_year_boundary() {
        let mut metric = SuccessiveWeeksOfCommits::default();
        register(
            &mut metric,
            &["2016-12-28T09:00:00+00:00", "2017-01-04T09:00:00+00:00"],
        );
        assert_eq!(metric.value(), 2);
    }

    #[test]
    fn undated_commits_are_ignored() {
        let mut metric = WeeksWithCommits::default();
        let mut undated = commit("jane", "2017-05-09T19:57:57+02:00", &["a"]);
        undated.date = None;
        metric.register_commit(&undated);
        assert_eq!(metric.value(), 0);
    }
}
