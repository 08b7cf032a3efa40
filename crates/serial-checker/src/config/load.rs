use anyhow::Result;

use super::args::CliArgs;
use super::types::CheckerConfig;

impl CheckerConfig {
    pub fn load(args: &CliArgs) -> Result<Self> {
        let mut cfg = Self::default();
        cfg.apply_file_config(args.config.as_deref())?;
        cfg.apply_env_overrides();
        cfg.apply_cli(args);
        Ok(cfg)
    }
}
