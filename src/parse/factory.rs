use crate::format::InputFormat;
use crate::parse::git_log::GitLogStrategy;
use crate::parse::git_log_numstat::GitLogNumstatStrategy;
use crate::parse::git_log_numstat_raw::GitLogNumstatRawStrategy;
use crate::parse::git_log_raw::GitLogRawStrategy;
use crate::parse::svn_log::SvnLogStrategy;
use crate::parse::LogParserStrategy;

/// Create the parser strategy for a given input format.
pub fn strategy_for(format: InputFormat) -> Box<dyn LogParserStrategy> {
    match format {
        InputFormat::GitLog => Box::new(GitLogStrategy),
        InputFormat::GitLogNumstat => Box::new(GitLogNumstatStrategy),
        InputFormat::GitLogRaw => Box::new(GitLogRawStrategy),
        InputFormat::GitLogNumstatRaw => Box::new(GitLogNumstatRawStrategy),
        InputFormat::SvnLog => Box::new(SvnLogStrategy),
    }
}
