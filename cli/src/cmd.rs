pub mod langs;
pub mod new;

use url::Url;

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct GlobalArgs {
    #[command(subcommand)]
    pub subcmd: Subcommand,

    /// Origin of the judge which serves `/problem/<ID>` (default: https://www.acmicpc.net)
    #[arg(long, global = true)]
    pub judge_url: Option<Url>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    #[command(alias("n"))]
    New(new::Args),
    Langs(langs::Args),
}

pub type SubcmdResult = anyhow::Result<()>;

impl GlobalArgs {
    pub async fn exec_subcmd(&self) -> SubcmdResult {
        use Subcommand::*;
        match &self.subcmd {
            New(args) => new::exec(args, self).await,
            Langs(args) => langs::exec(args, self),
        }
    }
}
