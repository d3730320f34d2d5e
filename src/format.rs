use clap::ValueEnum;

/// Supported log export shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputFormat {
    GitLog,
    GitLogNumstat,
    GitLogRaw,
    GitLogNumstatRaw,
    SvnLog,
}

impl InputFormat {
    pub const ALL: [InputFormat; 5] = [
        InputFormat::GitLog,
        InputFormat::GitLogNumstat,
        InputFormat::GitLogRaw,
        InputFormat::GitLogNumstatRaw,
        InputFormat::SvnLog,
    ];

    /// VCS command that produces this log shape.
    pub fn creation_command(&self) -> &'static str {
        match self {
            InputFormat::GitLog => "git log --name-status --topo-order",
            InputFormat::GitLogNumstat => "git log --numstat --topo-order",
            InputFormat::GitLogRaw => "git log --raw --topo-order",
            InputFormat::GitLogNumstatRaw => "git log --numstat --raw --topo-order",
            InputFormat::SvnLog => "svn log --verbose",
        }
    }

    /// Whether the shape carries added/removed line counts per file.
    pub fn carries_churn(&self) -> bool {
        matches!(
            self,
            InputFormat::GitLogNumstat | InputFormat::GitLogNumstatRaw
        )
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::GitLog => write!(f, "GIT_LOG"),
            InputFormat::GitLogNumstat => write!(f, "GIT_LOG_NUMSTAT"),
            InputFormat::GitLogRaw => write!(f, "GIT_LOG_RAW"),
            InputFormat::GitLogNumstatRaw => write!(f, "GIT_LOG_NUMSTAT_RAW"),
            InputFormat::SvnLog => write!(f, "SVN_LOG"),
        }
    }
}
