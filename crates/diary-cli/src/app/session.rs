//! Interactive session: the main menu state machine.
//!
//! `MainMenu` shows the registered actions and reads a choice. A known key
//! moves to `Running`, which executes the action and returns to the menu.
//! `q`, or end of input, moves to `Quit`.

use log::{debug, error};

use diary_core::{DiaryError, EntryRepository, StorageEngine};

use crate::commands::Menu;
use crate::ui::prompt::normalize_choice;
use crate::ui::Terminal;

/// Key that leaves the main menu.
const QUIT_KEY: &str = "q";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MainMenu,
    Running(usize),
    Quit,
}

pub struct Session<S: StorageEngine> {
    repo: EntryRepository<S>,
    menu: Menu<S>,
}

impl<S: StorageEngine> Session<S> {
    pub fn new(repo: EntryRepository<S>, menu: Menu<S>) -> Self {
        Self { repo, menu }
    }

    #[cfg(test)]
    pub fn repository(&self) -> &EntryRepository<S> {
        &self.repo
    }

    /// Run until the user quits.
    pub fn run(&mut self, term: &mut dyn Terminal) -> anyhow::Result<()> {
        debug!("session started");
        let mut state = SessionState::MainMenu;
        while state != SessionState::Quit {
            state = self.step(state, term)?;
        }
        debug!("session finished");
        Ok(())
    }

    /// Advance the state machine by one transition.
    pub fn step(
        &mut self,
        state: SessionState,
        term: &mut dyn Terminal,
    ) -> anyhow::Result<SessionState> {
        match state {
            SessionState::MainMenu => self.main_menu(term),
            SessionState::Running(index) => {
                self.run_action(index, term)?;
                Ok(SessionState::MainMenu)
            }
            SessionState::Quit => Ok(SessionState::Quit),
        }
    }

    fn main_menu(&mut self, term: &mut dyn Terminal) -> anyhow::Result<SessionState> {
        term.clear()?;
        term.write_line(&format!("Enter '{}' to quit", QUIT_KEY))?;
        for action in self.menu.actions() {
            term.write_line(&format!("{}) {}", action.key, action.description))?;
        }

        let Some(choice) = term.read_line("Action: ")? else {
            return Ok(SessionState::Quit);
        };
        let choice = normalize_choice(&choice);
        if choice == QUIT_KEY {
            return Ok(SessionState::Quit);
        }

        Ok(self
            .menu
            .position(&choice)
            .map_or(SessionState::MainMenu, SessionState::Running))
    }

    fn run_action(&mut self, index: usize, term: &mut dyn Terminal) -> anyhow::Result<()> {
        let Some(action) = self.menu.actions().get(index) else {
            return Ok(());
        };
        let handler = action.handler;
        debug!("running action '{}'", action.key);

        term.clear()?;
        match handler(&mut self.repo, term) {
            Ok(()) => Ok(()),
            Err(err) => match err.downcast_ref::<DiaryError>() {
                // Storage trouble is reported and the menu comes back.
                Some(diary_err) => {
                    error!("action failed: {}", diary_err);
                    term.write_line(&format!("Error: {}", diary_err))?;
                    Ok(())
                }
                None => Err(err),
            },
        }
    }
}
