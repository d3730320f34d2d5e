use crate::metrics::{Metric, MetricsFactory};
use crate::parse::Commit;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Final report: one entry per file, attributes keyed by metric name.
#[derive(Debug, Serialize)]
pub struct ProjectReport {
    pub project_name: String,
    pub files: Vec<FileReport>,
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub attributes: BTreeMap<&'static str, u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
}

struct FileStats {
    metrics: Vec<Box<dyn Metric>>,
    authors: BTreeSet<String>,
}

/// Folds parsed commits into per-file metric accumulators.
pub struct ReportBuilder {
    factory: MetricsFactory,
    add_author: bool,
    files: BTreeMap<String, FileStats>,
}

impl ReportBuilder {
    pub fn new(factory: MetricsFactory, add_author: bool) -> Self {
        Self {
            factory,
            add_author,
            files: BTreeMap::new(),
        }
    }

    pub fn add_commit(&mut self, commit: &Commit) {
        let factory = &self.factory;
        for modification in &commit.modifications {
            let stats = self
                .files
                .entry(modification.path.clone())
                .or_insert_with(|| FileStats {
                    metrics: factory.create_metrics(),
                    authors: BTreeSet::new(),
                });
            for metric in &mut stats.metrics {
                metric.register_commit(commit);
                metric.register_modification(modification);
            }
            if self.add_author {
                stats.authors.insert(commit.author.clone());
            }
        }
    }

    /// Consume the builder; files are emitted in sorted path order.
    pub fn build(self, project_name: &str) -> ProjectReport {
        let add_author = self.add_author;
        let files = self
            .files
            .into_iter()
            .map(|(path, stats)| FileReport {
                path,
                attributes: stats
                    .metrics
                    .iter()
                    .map(|metric| (metric.name(), metric.value()))
                    .collect(),
                authors: add_author.then(|| stats.authors.into_iter().collect()),
            })
            .collect();
        ProjectReport {
            project_name: project_name.to_string(),
            files,
        }
    }
}
