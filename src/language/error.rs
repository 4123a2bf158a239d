use std::{fmt, path::Path};

/// Failure to read a source file from disk. The scanner itself never fails;
/// this is the only error surfaced to the command-line user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> LoadingError<'i> {
    pub fn new(problem: &str, details: String, filename: &'i Path) -> LoadingError<'i> {
        LoadingError {
            problem: problem.to_string(),
            details,
            filename,
        }
    }
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self
            .details
            .is_empty()
        {
            write!(f, "{}: {}", self.problem, self.filename.display())
        } else {
            write!(f, "{}: {}", self.problem, self.details)
        }
    }
}
