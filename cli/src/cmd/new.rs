use anyhow::{anyhow, Context as _};
use boj_core::{
    action::{self, NewProblemOutcome},
    print_failure, print_success, Lang,
};
use boj_webclient::ProblemId;
use chrono::Local;

use super::{langs, GlobalArgs, SubcmdResult};
use crate::{config::GlobalConfig, util};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg()] // positional argument
    pub problem_id: String,

    #[arg()] // positional argument
    pub lang: String,
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let id: ProblemId = args
        .problem_id
        .parse()
        .with_context(|| format!("Invalid problem id '{}'", args.problem_id))?;
    let lang: Lang = args
        .lang
        .parse()
        .map_err(|e| anyhow!("{} (supported: {})", e, langs::supported_ids()))?;

    let cfg = GlobalConfig::from_file_and_args(global_args)?;
    let cli = cfg.judge_client()?;

    let outcome =
        action::create_problem_file(&cli, id, lang, util::current_dir(), Local::now()).await?;

    match outcome {
        NewProblemOutcome::Created { problem, path } => {
            print_success!(
                "Created {} file for problem {} ({}): {}",
                problem.lang,
                problem.id,
                problem.title_or_unknown(),
                path.to_string_lossy(),
            );
            log::info!(
                "Time limit: {}, Memory limit: {}",
                problem.time_limit.as_deref().unwrap_or("-"),
                problem.memory_limit.as_deref().unwrap_or("-"),
            );
        }
        NewProblemOutcome::AlreadyExists { problem, path } => {
            print_failure!(
                "File {} already exists. Skipped creating {} file for problem {} ({})",
                path.to_string_lossy(),
                problem.lang,
                problem.id,
                problem.title_or_unknown(),
            );
        }
        NewProblemOutcome::ProblemNotFound(id) => {
            print_failure!("Problem {} does not exist", id);
        }
    }
    Ok(())
}
