//! Add entry action.

use diary_core::{EntryRepository, StorageEngine};

use crate::ui::prompt::accepts;
use crate::ui::Terminal;

pub fn handle_add<S: StorageEngine>(
    repo: &mut EntryRepository<S>,
    term: &mut dyn Terminal,
) -> anyhow::Result<()> {
    term.write_line("Enter your entry. Press ctrl+D when finished")?;
    let data = term.read_block()?;
    let data = data.trim();

    if data.is_empty() {
        return Ok(());
    }

    let answer = term.read_line("Save this data? [Y/n] ")?;
    if !accepts(answer.as_deref()) {
        return Ok(());
    }

    repo.create(data)?;
    term.write_line("Saved successfully")?;
    Ok(())
}
