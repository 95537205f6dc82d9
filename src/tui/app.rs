use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::DefaultTerminal;

use crate::config::Config;
use crate::store::{Item, Store};

use super::event::{self, AppEvent};
use super::form::TextInput;
use super::keymap::{Action, KeyMap};
use super::list::ItemList;
use super::theme::Theme;
use super::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Home,
    New,
    Check,
    Edit,
}

/// Entries of the home menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateNew,
    CheckOld,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 2] = [MenuChoice::CreateNew, MenuChoice::CheckOld];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::CreateNew => "Create new item",
            MenuChoice::CheckOld => "Check old items",
        }
    }

    /// Screen this choice leads to.
    pub fn target(self) -> Mode {
        match self {
            MenuChoice::CreateNew => Mode::New,
            MenuChoice::CheckOld => Mode::Check,
        }
    }
}

pub struct App {
    pub store: Store,
    pub should_quit: bool,
    pub mode: Mode,

    // Home menu cursor, index into `MenuChoice::ALL`
    pub menu_index: usize,

    // Data
    pub list: ItemList<Item>,

    // Shared by the New and Edit screens
    pub input: TextInput,
    // Item being edited in Edit mode
    pub edit_index: usize,

    pub keymap: KeyMap,
    pub theme: Theme,
    pub list_height: u16,
}

impl App {
    pub fn new(store: Store, config: &Config) -> Result<Self> {
        let items = store.load()?;

        Ok(App {
            store,
            should_quit: false,
            mode: Mode::Home,
            menu_index: 0,
            list: ItemList::new(items),
            input: TextInput::new(
                config.input.char_limit,
                config.input.placeholder.clone(),
                config.input.width,
            ),
            edit_index: 0,
            keymap: KeyMap::default_keymap(),
            theme: config.theme.build(),
            list_height: config.list.height,
        })
    }

    pub fn selected_choice(&self) -> MenuChoice {
        MenuChoice::ALL[self.menu_index.min(MenuChoice::ALL.len() - 1)]
    }

    /// Items per page on the check screen. Title, blank line and
    /// pagination take three of the configured rows.
    pub fn page_rows(&self) -> u16 {
        self.list_height.saturating_sub(3).max(1)
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            match event::next()? {
                AppEvent::Key(key) => self.handle_key(key)?,
                AppEvent::Resize | AppEvent::Other => {}
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.mode {
            Mode::Home => self.handle_home_key(key.code, key.modifiers)?,
            Mode::Check => self.handle_check_key(key.code, key.modifiers),
            Mode::New => self.handle_new_key(key.code, key.modifiers),
            Mode::Edit => self.handle_edit_key(key.code, key.modifiers),
        }
        Ok(())
    }

    fn set_mode(&mut self, mode: Mode) {
        tracing::debug!("mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    fn handle_home_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        match self.keymap.lookup_home(code, modifiers) {
            Some(Action::MoveUp) => {
                self.menu_index = self.menu_index.saturating_sub(1);
            }
            Some(Action::MoveDown) => {
                self.menu_index = (self.menu_index + 1).min(MenuChoice::ALL.len() - 1);
            }
            Some(Action::Select) => {
                self.set_mode(self.selected_choice().target());
            }
            Some(Action::Quit) => {
                self.store.save(self.list.items())?;
                self.should_quit = true;
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_check_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match self.keymap.lookup_check(code, modifiers) {
            Some(Action::MoveUp) => self.list.move_up(),
            Some(Action::MoveDown) => self.list.move_down(),
            Some(Action::PrevPage) => self.list.page_up(usize::from(self.page_rows())),
            Some(Action::NextPage) => self.list.page_down(usize::from(self.page_rows())),
            Some(Action::GoToStart) => self.list.select_first(),
            Some(Action::GoToEnd) => self.list.select_last(),
            Some(Action::ToggleMark) => {
                let index = self.list.index();
                if let Some(toggled) = self.list.current().map(Item::toggled) {
                    self.list.set(index, toggled);
                }
            }
            Some(Action::EditItem) => {
                if let Some(title) = self.list.current().map(|item| item.title.clone()) {
                    self.edit_index = self.list.index();
                    self.input.set_value(&title);
                    self.set_mode(Mode::Edit);
                }
            }
            Some(Action::DeleteMarked) => {
                let before = self.list.len();
                let kept: Vec<Item> = self
                    .list
                    .items()
                    .iter()
                    .filter(|item| !item.is_marked())
                    .cloned()
                    .collect();
                tracing::info!("removed {} marked items", before - kept.len());
                // set_items clamps the cursor to the shorter list.
                self.list.set_items(kept);
                self.set_mode(Mode::Home);
            }
            Some(Action::Back) => self.set_mode(Mode::Home),
            _ => {}
        }
    }

    fn handle_new_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match self.keymap.lookup_input(code, modifiers) {
            Some(Action::Submit) => {
                self.list.push(Item::new(self.input.value()));
                self.input.reset();
                self.set_mode(Mode::Home);
            }
            Some(Action::Cancel) => {
                self.input.reset();
                self.set_mode(Mode::Home);
            }
            _ => {
                self.input.handle_key(code, modifiers);
            }
        }
    }

    fn handle_edit_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match self.keymap.lookup_input(code, modifiers) {
            Some(Action::Submit) => {
                if let Some(edited) = self
                    .list
                    .get(self.edit_index)
                    .map(|item| item.retitled(self.input.value()))
                {
                    self.list.set(self.edit_index, edited);
                }
                self.input.reset();
                self.set_mode(Mode::Check);
            }
            Some(Action::Cancel) => {
                self.input.reset();
                self.set_mode(Mode::Check);
            }
            _ => {
                self.input.handle_key(code, modifiers);
            }
        }
    }
}
