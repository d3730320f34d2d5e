use crate::metrics::Metric;
use crate::parse::Modification;

/// Sum of lines added to the file.
#[derive(Debug, Default)]
pub struct AddedLines {
    lines: u64,
}

impl Metric for AddedLines {
    fn name(&self) -> &'static str {
        "added_lines"
    }

    fn register_modification(&mut self, modification: &Modification) {
        self.lines += modification.added_lines;
    }

    fn value(&self) -> u64 {
        self.lines
    }
}

/// Sum of lines deleted from the file.
#[derive(Debug, Default)]
pub struct DeletedLines {
    lines: u64,
}

impl Metric for DeletedLines {
    fn name(&self) -> &'static str {
        "deleted_lines"
    }

    fn register_modification(&mut self, modification: &Modification) {
        self.lines += modification.deleted_lines;
    }

    fn value(&self) -> u64 {
        self.lines
    }
}

/// Total churn: lines added plus lines deleted.
#[derive(Debug, Default)]
pub struct AbsoluteCodeChurn {
    lines: u64,
}

impl Metric for AbsoluteCodeChurn {
    fn name(&self) -> &'static str {
        "abs_code_churn"
    }

    fn register_modification(&mut self, modification: &Modification) {
        self.lines += modification.added_lines + modification.deleted_lines;
    }

    fn value(&self) -> u64 {
        self.lines
    }
}
