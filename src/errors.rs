use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ScmLogError {
    #[error("only one of --git or --svn may be set")]
    #[diagnostic(code(scmlog::ambiguous_vcs_flags))]
    AmbiguousVcsFlags,

    #[error("--git, --svn or --input-format must be specified")]
    #[diagnostic(code(scmlog::missing_format))]
    MissingFormat,

    #[error(transparent)]
    #[diagnostic(code(scmlog::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(scmlog::json))]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScmLogError>;
