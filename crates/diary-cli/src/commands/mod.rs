//! Menu actions and their registry.

pub mod add;
pub mod delete;
pub mod search;
pub mod view;

use diary_core::{EntryRepository, StorageEngine};

use crate::ui::Terminal;

/// Signature shared by every menu action.
pub type Handler<S> = fn(&mut EntryRepository<S>, &mut dyn Terminal) -> anyhow::Result<()>;

/// One entry of the main menu.
pub struct MenuAction<S: StorageEngine> {
    pub key: &'static str,
    pub description: &'static str,
    pub handler: Handler<S>,
}

/// Ordered mapping from menu key to action.
pub struct Menu<S: StorageEngine> {
    actions: Vec<MenuAction<S>>,
}

impl<S: StorageEngine> Menu<S> {
    pub fn new(actions: Vec<MenuAction<S>>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[MenuAction<S>] {
        &self.actions
    }

    /// Position of the action registered under `key`.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.actions.iter().position(|action| action.key == key)
    }
}

/// The standard menu: add, view, search.
pub fn default_menu<S: StorageEngine>() -> Menu<S> {
    Menu::new(vec![
        MenuAction {
            key: "a",
            description: "Add entry",
            handler: add::handle_add,
        },
        MenuAction {
            key: "v",
            description: "View previous entries",
            handler: view::handle_view,
        },
        MenuAction {
            key: "s",
            description: "Search entries for a string",
            handler: search::handle_search,
        },
    ])
}


#[cfg(test)]
mod tests {
    use super::*;
    use diary_core::SqliteStorage;

    #[test]
    fn test_default_menu_order() {
        let menu = default_menu::<SqliteStorage>();
        let keys: Vec<&str> = menu.actions().iter().map(|a| a.key).collect();
        assert_eq!(keys, vec!["a", "v", "s"]);
    }

    #[test]
    fn test_position_by_key() {
        let menu = default_menu::<SqliteStorage>();

        assert_eq!(menu.position("s"), Some(2));
        assert_eq!(menu.actions()[2].description, "Search entries for a string");
        assert_eq!(menu.position("q"), None);
        assert_eq!(menu.position("x"), None);
    }
}
