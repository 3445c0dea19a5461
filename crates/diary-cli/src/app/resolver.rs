//! Path resolution for config and diary files.

use std::path::PathBuf;

use log::debug;

use crate::cli::Cli;
use crate::config::{default_config_path, DiaryConfig};

/// Diary file used when neither the CLI nor the config names one.
pub const DEFAULT_DIARY_FILE: &str = "diary.db";

/// Resolve the config file path from `--config`/`DIARY_CONFIG`, else the
/// XDG default.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the diary database path from CLI args, then config, then the
/// working-directory default.
pub fn resolve_diary_path(cli: &Cli, config: &DiaryConfig) -> PathBuf {
    if let Some(path) = cli.db.as_deref().filter(|value| !value.trim().is_empty()) {
        debug!("diary path from command line: {}", path);
        return PathBuf::from(path);
    }

    if let Some(path) = config
        .storage
        .path
        .as_deref()
        .filter(|value| !value.trim().is_empty())
    {
        debug!("diary path from config: {}", path);
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_DIARY_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["diary"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn config_with_path(path: Option<&str>) -> DiaryConfig {
        let mut config = DiaryConfig::default();
        config.storage.path = path.map(str::to_string);
        config
    }

    #[test]
    fn test_cli_path_wins() {
        let path = resolve_diary_path(
            &cli(&["--db", "/cli/diary.db"]),
            &config_with_path(Some("/config/diary.db")),
        );
        assert_eq!(path, PathBuf::from("/cli/diary.db"));
    }

    #[test]
    fn test_config_path_used_without_flag() {
        let mut args = cli(&[]);
        args.db = None;
        let path = resolve_diary_path(&args, &config_with_path(Some("/config/diary.db")));
        assert_eq!(path, PathBuf::from("/config/diary.db"));
    }

    #[test]
    fn test_falls_back_to_working_directory() {
        let mut args = cli(&[]);
        args.db = None;
        let path = resolve_diary_path(&args, &config_with_path(Some("  ")));
        assert_eq!(path, PathBuf::from(DEFAULT_DIARY_FILE));
    }

    #[test]
    fn test_explicit_config_path() {
        let path = resolve_config_path(&cli(&["--config", "/etc/diary.toml"])).unwrap();
        assert_eq!(path, PathBuf::from("/etc/diary.toml"));
    }
}
