//! Diary CLI - a small interactive personal journal
//!
//! Add free-text entries, browse them newest first and search them by
//! substring. Entries live in a local SQLite file.

mod app;
mod cli;
mod commands;
mod config;
mod ui;

use std::io::IsTerminal;

use anyhow::Context;
use clap::Parser;
use log::debug;

use diary_core::{EntryRepository, SqliteStorage, StorageEngine};

use crate::app::{init_logging, resolve_config_path, resolve_diary_path, Session};
use crate::cli::Cli;
use crate::commands::default_menu;
use crate::config::read_config;
use crate::ui::IoTerminal;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = resolve_config_path(&cli)?;
    debug!("config path: {}", config_path.display());
    let config = read_config(&config_path)?;

    let diary_path = resolve_diary_path(&cli, &config);
    let storage = SqliteStorage::open(&diary_path)
        .with_context(|| format!("Failed to open diary at {}", diary_path.display()))?;

    let clear_screen = config.ui.clear_screen && !cli.no_clear && std::io::stdout().is_terminal();
    let mut terminal = IoTerminal::stdio(clear_screen);

    let mut session = Session::new(EntryRepository::new(storage), default_menu());
    session.run(&mut terminal)?;

    Ok(())
}
