use crate::config::ResolvedConfig;
use crate::errors::Result;
use crate::format::InputFormat;
use crate::report::ReportBuilder;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "scmlog",
    version,
    about = "Compute per-file evolution metrics from a git or svn log export",
    after_help = log_creation_help()
)]
pub struct Cli {
    /// Log files to read (stdin when omitted)
    pub files: Vec<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short = 'o', long)]
    pub output_file: Option<PathBuf>,

    /// Project name recorded in the report
    #[arg(short = 'p', long, default_value = "scmlog")]
    pub project_name: String,

    /// Analysis of a git log, equivalent to --input-format GIT_LOG
    #[arg(long)]
    pub git: bool,

    /// Analysis of an svn log, equivalent to --input-format SVN_LOG
    #[arg(long)]
    pub svn: bool,

    /// Shape of the log export
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Add the array of authors to every file entry
    #[arg(long)]
    pub add_author: bool,
}

fn log_creation_help() -> String {
    let mut help = String::from("Log creation via:\n");
    for format in InputFormat::ALL {
        help.push_str(&format!(
            "   -> {} : \"{}\"\n",
            format,
            format.creation_command()
        ));
    }
    help
}

/// Resolve the configuration and run the full parse/measure/report pipeline.
pub fn run(cli: &Cli) -> Result<()> {
    let config = ResolvedConfig::resolve(cli)?;
    let strategy = config.parser_strategy();

    let lines = crate::input::read_log_lines(&config.files)?;
    let commits = crate::parse::parse_commits(&lines, strategy.as_ref());
    tracing::info!(
        format = %config.input_format,
        lines = lines.len(),
        commits = commits.len(),
        "parsed log"
    );

    let mut builder = ReportBuilder::new(config.metrics_factory(), config.add_author);
    for commit in &commits {
        builder.add_commit(commit);
    }
    let report = builder.build(&config.project_name);
    tracing::info!(files = report.files.len(), "computed metrics");

    match &config.output_file {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            crate::output::json::write_report(&mut file, &report)?;
        }
        None => {
            let stdout = std::io::stdout();
            crate::output::json::write_report(&mut stdout.lock(), &report)?;
        }
    }

    Ok(())
}
