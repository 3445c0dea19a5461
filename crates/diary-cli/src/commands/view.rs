//! View/browse action.
//!
//! Shows the newest matching entry and waits for `n`, `d` or `q`. Browsing
//! stops after a delete attempt, and `n` redraws the same entry rather than
//! moving on.

use chrono::Local;

use diary_core::{Entry, EntryRepository, StorageEngine};

use super::delete::confirm_delete;
use crate::ui::format::{entry_lines, format_timestamp};
use crate::ui::prompt::normalize_choice;
use crate::ui::Terminal;

/// Browse state over the filtered entry sequence.
#[derive(Debug)]
enum BrowseState {
    Showing(Entry),
    Done,
}

pub fn handle_view<S: StorageEngine>(
    repo: &mut EntryRepository<S>,
    term: &mut dyn Terminal,
) -> anyhow::Result<()> {
    browse(repo, term, None)
}

/// Browse entries newest first, restricted to those containing `filter`.
pub fn browse<S: StorageEngine>(
    repo: &mut EntryRepository<S>,
    term: &mut dyn Terminal,
    filter: Option<&str>,
) -> anyhow::Result<()> {
    let mut cursor = repo.list(filter)?.into_iter();
    let mut state = match cursor.next() {
        Some(entry) => BrowseState::Showing(entry),
        None => BrowseState::Done,
    };

    while let BrowseState::Showing(entry) = state {
        show_entry(term, &entry)?;

        let choice = term.read_line("Action: [Ndq] ")?;
        state = match choice.as_deref().map(normalize_choice).as_deref() {
            None | Some("q") => BrowseState::Done,
            Some("d") => {
                confirm_delete(repo, term, &entry)?;
                BrowseState::Done
            }
            _ => BrowseState::Showing(entry),
        };
    }

    Ok(())
}

fn show_entry(term: &mut dyn Terminal, entry: &Entry) -> anyhow::Result<()> {
    let header = format_timestamp(&entry.created_at.with_timezone(&Local));

    term.clear()?;
    for line in entry_lines(&header, &entry.content) {
        term.write_line(&line)?;
    }
    Ok(())
}
