pub mod authors;
pub mod churn;
pub mod commits;
pub mod weeks;

use crate::parse::{Commit, Modification};

/// Metric names computable without line-level churn data.
pub const NON_CHURN_METRICS: [&str; 5] = [
    "number_of_authors",
    "number_of_commits",
    "range_of_weeks_with_commits",
    "successive_weeks_of_commits",
    "weeks_with_commits",
];

/// A per-file metric accumulator.
pub trait Metric {
    fn name(&self) -> &'static str;

    fn register_commit(&mut self, _commit: &Commit) {}

    fn register_modification(&mut self, _modification: &Modification) {}

    fn value(&self) -> u64;
}

/// Creates the per-file metric set, optionally restricted by name.
#[derive(Debug, Clone)]
pub struct MetricsFactory {
    selection: Option<Vec<&'static str>>,
}

impl MetricsFactory {
    /// Factory for the full metric set.
    pub fn unrestricted() -> Self {
        Self { selection: None }
    }

    /// Factory restricted to the named metrics.
    pub fn restricted_to(names: &[&'static str]) -> Self {
        Self {
            selection: Some(names.to_vec()),
        }
    }

    /// Instantiate fresh accumulators for one file.
    pub fn create_metrics(&self) -> Vec<Box<dyn Metric>> {
        let all: Vec<Box<dyn Metric>> = vec![
            Box::new(authors::NumberOfAuthors::default()),
            Box::new(commits::NumberOfCommits::default()),
            Box::new(weeks::RangeOfWeeksWithCommits::default()),
            Box::new(weeks::SuccessiveWeeksOfCommits::default()),
            Box::new(weeks::WeeksWithCommits::default()),
            Box::new(churn::AddedLines::default()),
            Box::new(churn::DeletedLines::default()),
            Box::new(churn::AbsoluteCodeChurn::default()),
        ];
        match &self.selection {
            None => all,
            Some(names) => all
                .into_iter()
                .filter(|metric| names.contains(&metric.name()))
                .collect(),
        }
    }

    /// Names of the metrics this factory creates, in emission order.
    pub fn metric_names(&self) -> Vec<&'static str> {
        self.create_metrics()
            .iter()
            .map(|metric| metric.name())
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use crate::parse::{Action, Commit, Modification};
    use chrono::DateTime;

    pub fn commit(author: &str, date: &str, paths: &[&str]) -> Commit {
        Commit {
            author: author.to_string(),
            date: Some(DateTime::parse_from_rfc3339(date).unwrap()),
            modifications: paths
                .iter()
                .map(|path| Modification::new(*path, Action::Modify))
                .collect(),
        }
    }
}
