pub mod error {
    #[allow(unused_imports)]
    pub(crate) use anyhow::{anyhow, bail, ensure, Context as _};
    pub use anyhow::{Error, Result};
}
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use boj_webclient::{Client, ProblemId};
use chrono::{DateTime, Local};
use colored::Colorize as _;
use error::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::lang::Lang;
use crate::problem::Problem;
use crate::writer::{self, WriteOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewProblemOutcome {
    Created { problem: Problem, path: PathBuf },
    AlreadyExists { problem: Problem, path: PathBuf },
    ProblemNotFound(ProblemId),
}

fn spinner(msg: String) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    let bar = ProgressBar::new_spinner()
        .with_style(style)
        .with_message(msg);
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Download the problem page once and bind it to `lang`.
pub async fn fetch_problem(
    cli: &dyn Client,
    id: ProblemId,
    lang: Lang,
) -> boj_webclient::Result<Problem> {
    let bar = self::spinner(format!("Downloading problem {} ...", id));
    let started_at = Instant::now();

    match cli.fetch_problem_info(id).await {
        Ok(info) => {
            bar.finish_with_message(
                format!(
                    "Downloaded problem {} ({:.2} sec, {})",
                    id,
                    started_at.elapsed().as_secs_f64(),
                    info.url
                )
                .green()
                .to_string(),
            );
            Ok(Problem::new(info, lang))
        }
        Err(e) => {
            bar.finish_and_clear();
            log::debug!("Failed to download problem {}: {:?}", id, e);
            Err(e)
        }
    }
}

/// Fetch the problem and create `{id}.{extension}` in `dir`.
/// A missing problem or an existing file is reported as an outcome, not as an error.
pub async fn create_problem_file(
    cli: &dyn Client,
    id: ProblemId,
    lang: Lang,
    dir: impl AsRef<Path>,
    now: DateTime<Local>,
) -> Result<NewProblemOutcome> {
    let problem = match self::fetch_problem(cli, id, lang).await {
        Ok(p) => p,
        Err(boj_webclient::Error::ProblemNotFound { problem_id, .. }) => {
            return Ok(NewProblemOutcome::ProblemNotFound(problem_id))
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to fetch problem {}", id))
        }
    };

    let outcome = writer::write_problem_file(&problem, &dir, now)
        .with_context(|| format!("Failed to write {}", problem.filename()))?;

    log::debug!("{:?}", outcome);
    Ok(match outcome {
        WriteOutcome::Created(path) => NewProblemOutcome::Created { problem, path },
        WriteOutcome::AlreadyExists(path) => NewProblemOutcome::AlreadyExists { problem, path },
    })
}
