use boj_core::Lang;
use strum::IntoEnumIterator as _;

use super::{GlobalArgs, SubcmdResult};

#[derive(Debug, clap::Args)]
pub struct Args {}

pub fn supported_ids() -> String {
    Lang::iter()
        .map(|lang| lang.id())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn exec(_args: &Args, _global_args: &GlobalArgs) -> SubcmdResult {
    for lang in Lang::iter() {
        let desc = lang.descriptor();
        println!(
            "{:<8} {:<4} (aliases: {})",
            lang.to_string(),
            desc.id,
            desc.aliases.join(", ")
        );
    }
    Ok(())
}
