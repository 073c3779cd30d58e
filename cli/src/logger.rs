use std::io::Write as _;

use boj_core::style::ColorTheme as _;
use colored::Colorize as _;

/// Log filter is taken from `RUST_LOG` (default: `warn`).
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let level = record.level();
            writeln!(
                buf,
                "[{}] {}",
                level.to_string().color(level.color()).bold(),
                record.args()
            )
        })
        .init();
}
