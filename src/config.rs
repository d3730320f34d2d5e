use crate::cli::Cli;
use crate::errors::{Result, ScmLogError};
use crate::format::InputFormat;
use crate::metrics::{MetricsFactory, NON_CHURN_METRICS};
use crate::parse::factory::strategy_for;
use crate::parse::LogParserStrategy;
use std::path::PathBuf;

/// Fully resolved invocation configuration.
///
/// The selected format is normalized at construction: the legacy
/// `--git`/`--svn` flags and the explicit `--input-format` collapse into a
/// single [`InputFormat`], so strategy selection and metric selection can
/// never disagree.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub input_format: InputFormat,
    pub add_author: bool,
    pub output_file: Option<PathBuf>,
    pub project_name: String,
    pub files: Vec<PathBuf>,
}

impl ResolvedConfig {
    /// Normalize raw CLI options into a resolved configuration.
    ///
    /// The legacy flags take precedence over `--input-format`. Setting both
    /// legacy flags is an error; setting neither requires an explicit format.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let input_format = match (cli.git, cli.svn) {
            (true, true) => return Err(ScmLogError::AmbiguousVcsFlags),
            (true, false) => InputFormat::GitLog,
            (false, true) => InputFormat::SvnLog,
            (false, false) => cli.input_format.ok_or(ScmLogError::MissingFormat)?,
        };

        Ok(Self {
            input_format,
            add_author: cli.add_author,
            output_file: cli.output_file.clone(),
            project_name: cli.project_name.clone(),
            files: cli.files.clone(),
        })
    }

    /// Parser strategy for the selected format.
    pub fn parser_strategy(&self) -> Box<dyn LogParserStrategy> {
        strategy_for(self.input_format)
    }

    /// Metric set for the selected format.
    ///
    /// Formats without line-level churn detail are restricted to the
    /// non-churn metrics; the numstat variants get the full set.
    pub fn metrics_factory(&self) -> MetricsFactory {
        if self.input_format.carries_churn() {
            MetricsFactory::unrestricted()
        } else {
            MetricsFactory::restricted_to(&NON_CHURN_METRICS)
        }
    }
}
