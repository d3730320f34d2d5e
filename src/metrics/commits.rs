use crate::metrics::Metric;
use crate::parse::Commit;

/// Number of commits that touched the file.
#[derive(Debug, Default)]
pub struct NumberOfCommits {
    count: u64,
}

impl Metric for NumberOfCommits {
    fn name(&self) -> &'static str {
        "number_of_commits"
    }

    fn register_commit(&mut self, _commit: &Commit) {
        self.count += 1;
    }

    fn value(&self) -> u64 {
        self.count
    }
}
