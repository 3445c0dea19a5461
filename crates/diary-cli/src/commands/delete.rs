//! Delete confirmation flow, reached from the browse view.

use diary_core::{Entry, EntryRepository, StorageEngine};

use crate::ui::prompt::confirms;
use crate::ui::Terminal;

/// Ask before deleting `entry`. Returns whether the entry was deleted.
pub fn confirm_delete<S: StorageEngine>(
    repo: &mut EntryRepository<S>,
    term: &mut dyn Terminal,
    entry: &Entry,
) -> anyhow::Result<bool> {
    let answer = term.read_line("Are you sure you want to delete the entry? [Yn] ")?;
    if !confirms(answer.as_deref()) {
        return Ok(false);
    }

    repo.delete(entry)?;
    term.write_line("Entry was deleted")?;
    Ok(true)
}
