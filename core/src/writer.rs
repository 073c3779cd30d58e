use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::{header, problem::Problem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Created(PathBuf),
    /// Nothing was written; the existing file is kept untouched.
    AlreadyExists(PathBuf),
}

/// Create `{dir}/{id}.{extension}` containing only the rendered header.
/// An existing file is never overwritten.
pub fn write_problem_file(
    problem: &Problem,
    dir: impl AsRef<Path>,
    created_at: DateTime<Local>,
) -> fsutil::Result<WriteOutcome> {
    let filepath = dir.as_ref().join(problem.filename());
    if filepath.exists() {
        log::info!("Skip writing: {:?} already exists", filepath);
        return Ok(WriteOutcome::AlreadyExists(filepath));
    }

    let contents = header::render(problem, created_at);
    match fsutil::create_new(&filepath, contents) {
        Ok(()) => Ok(WriteOutcome::Created(filepath)),
        Err(fsutil::Error::AlreadyExists(path)) => Ok(WriteOutcome::AlreadyExists(path)),
        Err(e) => Err(e),
    }
}
