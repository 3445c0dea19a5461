//! Search action: ask for a substring, then browse matching entries.

use diary_core::{EntryRepository, StorageEngine};

use super::view::browse;
use crate::ui::Terminal;

pub fn handle_search<S: StorageEngine>(
    repo: &mut EntryRepository<S>,
    term: &mut dyn Terminal,
) -> anyhow::Result<()> {
    let query = term.read_line("Search query: ")?.unwrap_or_default();
    browse(repo, term, Some(&query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{repo, run};

    #[test]
    fn test_search_shows_match_only() {
        let mut repo = repo();
        repo.create("Morning jog").unwrap();
        repo.create("Team meeting notes").unwrap();

        let out = run(&mut repo, "jog\nq\n", handle_search);
        assert!(out.starts_with("Search query: "));
        assert!(out.contains("Morning jog"));
        assert!(!out.contains("Team meeting notes"));
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let mut repo = repo();
        repo.create("Morning jog").unwrap();

        let out = run(&mut repo, "JOG\nq\n", handle_search);
        assert_eq!(out, "Search query: ");
    }

    #[test]
    fn test_search_can_delete_match() {
        let mut repo = repo();
        repo.create("Morning jog").unwrap();
        repo.create("Team meeting notes").unwrap();

        run(&mut repo, "meeting\nd\ny\n", handle_search);
        let remaining: Vec<String> = repo
            .list(None)
            .unwrap()
            .into_iter()
            .map(|e| e.content)
            .collect();
        assert_eq!(remaining, vec!["Morning jog"]);
    }

    #[test]
    fn test_empty_query_browses_everything() {
        let mut repo = repo();
        repo.create("Morning jog").unwrap();

        let out = run(&mut repo, "\nq\n", handle_search);
        assert!(out.contains("Morning jog"));
    }
}
