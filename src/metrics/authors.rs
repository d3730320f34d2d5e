use crate::metrics::Metric;
use crate::parse::Commit;
use std::collections::HashSet;

/// Distinct authors that touched the file.
#[derive(Debug, Default)]
pub struct NumberOfAuthors {
    authors: HashSet<String>,
}

impl Metric for NumberOfAuthors {
    fn name(&self) -> &'static str {
        "number_of_authors"
    }

    fn register_commit(&mut self, commit: &Commit) {
        self.authors.insert(commit.author.clone());
    }

    fn value(&self) -> u64 {
        self.authors.len() as u64
    }
}
