use anyhow::Context as _;
use boj_webclient::BojClient;
use serde::{Deserialize, Serialize};
use std::{io, path::PathBuf};
use url::Url;

use crate::{cmd::GlobalArgs, util};

pub const APP_NAME: &str = "boj-cli";
pub const ENV_PREFIX: &str = "BOJ_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// `None` means the official judge.
    #[serde(default)]
    pub judge_url: Option<Url>,
}

/// Overrides read from `BOJ_*` environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
struct EnvOverrides {
    judge_url: Option<Url>,
}

impl GlobalConfig {
    pub const FILENAME: &str = "boj-cli.toml";

    pub fn filepath() -> Option<PathBuf> {
        let dir = dirs::config_dir()?;
        Some(dir.join(APP_NAME).join(Self::FILENAME))
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn from_file_or_default() -> anyhow::Result<Self> {
        let Some(path) = Self::filepath() else {
            log::debug!("No config dir on this platform; using default config");
            return Ok(GlobalConfig::default());
        };
        let toml_str = match fsutil::read_to_string(&path) {
            Ok(toml) => toml,
            Err(fsutil::Error::SingleIO(_, _, e)) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(GlobalConfig::default())
            }
            Err(e) => return Err(e.into()),
        };
        Self::from_toml(&toml_str).with_context(|| {
            format!(
                "Invalid config '{}'",
                util::replace_homedir_to_tilde(path).to_string_lossy()
            )
        })
    }

    pub fn with_env(mut self) -> anyhow::Result<Self> {
        let env: EnvOverrides = envy::prefixed(ENV_PREFIX)
            .from_env()
            .with_context(|| format!("Invalid environment variable {}JUDGE_URL", ENV_PREFIX))?;
        if let Some(u) = env.judge_url {
            self.judge_url = Some(u);
        }
        Ok(self)
    }

    pub fn with_args(mut self, args: &GlobalArgs) -> Self {
        let GlobalArgs {
            subcmd: _,
            judge_url,
        } = args;

        if let Some(u) = judge_url {
            self.judge_url = Some(u.clone());
        }
        self
    }

    /// Precedence: config file < environment variables < command line arguments.
    pub fn from_file_and_args(args: &GlobalArgs) -> anyhow::Result<Self> {
        Ok(Self::from_file_or_default()?.with_env()?.with_args(args))
    }

    pub fn judge_client(&self) -> anyhow::Result<BojClient> {
        let cli = match &self.judge_url {
            Some(u) => BojClient::with_judge_url(u.clone()),
            None => BojClient::new(),
        };
        cli.context("Failed to build HTTP client")
    }
}
