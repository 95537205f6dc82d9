use crossterm::event::{KeyCode, KeyModifiers};

// ── Actions ──────────────────────────────────────────────────────────

/// Every discrete action the TUI can perform in response to a key press.
///
/// Actions are context-free identifiers; the *execution* code in `App`
/// decides what actually happens based on the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Home
    Quit,
    Select,

    // Navigation
    MoveUp,
    MoveDown,
    PrevPage,
    NextPage,
    GoToStart,
    GoToEnd,

    // Check
    ToggleMark,
    EditItem,
    DeleteMarked,
    Back,

    // Text input (New / Edit)
    Submit,
    Cancel,
}

// ── Keybinding ───────────────────────────────────────────────────────

/// A single key → action mapping with metadata for the footer hints.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: Action,
    /// Human-readable key label shown in the footer (e.g. `"esc"`).
    /// Empty for aliases that should not be listed.
    pub label: &'static str,
    pub description: &'static str,
}

/// A single footer hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub label: &'static str,
    pub description: &'static str,
}

// ── KeyMap ────────────────────────────────────────────────────────────

/// Declarative registry of every key binding in the TUI.
///
/// One table per screen family: `home`, `check`, and `input` (shared by
/// the New and Edit screens; unbound keys there go to the text input).
pub struct KeyMap {
    pub home: Vec<KeyBinding>,
    pub check: Vec<KeyBinding>,
    pub input: Vec<KeyBinding>,
}

impl KeyMap {
    /// Build the default key map encoding all current bindings.
    pub fn default_keymap() -> Self {
        Self {
            home: default_home_bindings(),
            check: default_check_bindings(),
            input: default_input_bindings(),
        }
    }

    pub fn lookup_home(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        lookup(&self.home, code, modifiers)
    }

    pub fn lookup_check(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        lookup(&self.check, code, modifiers)
    }

    pub fn lookup_input(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        lookup(&self.input, code, modifiers)
    }
}

/// Footer hints for a binding table, in declaration order, skipping
/// unlabelled aliases.
pub fn hints(bindings: &[KeyBinding]) -> Vec<HelpEntry> {
    let mut out: Vec<HelpEntry> = Vec::new();
    for kb in bindings {
        if !kb.label.is_empty() && !out.iter().any(|e| e.label == kb.label) {
            out.push(HelpEntry {
                label: kb.label,
                description: kb.description,
            });
        }
    }
    out
}

// ── Lookup helper ────────────────────────────────────────────────────

fn lookup(bindings: &[KeyBinding], code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    bindings
        .iter()
        .find(|kb| kb.code == code && kb.modifiers == modifiers)
        .map(|kb| kb.action)
}

fn bind(
    code: KeyCode,
    modifiers: KeyModifiers,
    action: Action,
    label: &'static str,
    description: &'static str,
) -> KeyBinding {
    KeyBinding {
        code,
        modifiers,
        action,
        label,
        description,
    }
}

fn alias(code: KeyCode, modifiers: KeyModifiers, action: Action) -> KeyBinding {
    bind(code, modifiers, action, "", "")
}

// ── Default bindings ─────────────────────────────────────────────────

#[allow(clippy::enum_glob_use)]
fn default_home_bindings() -> Vec<KeyBinding> {
    use Action::*;
    const NONE: KeyModifiers = KeyModifiers::NONE;

    vec![
        bind(KeyCode::Char('k'), NONE, MoveUp, "↑/k", " up  "),
        alias(KeyCode::Up, NONE, MoveUp),
        bind(KeyCode::Char('j'), NONE, MoveDown, "↓/j", " down  "),
        alias(KeyCode::Down, NONE, MoveDown),
        bind(KeyCode::Enter, NONE, Select, "enter", " choose  "),
        alias(KeyCode::Char(' '), NONE, Select),
        bind(KeyCode::Char('q'), NONE, Quit, "q", " save & quit"),
        alias(KeyCode::Char('c'), KeyModifiers::CONTROL, Quit),
    ]
}

#[allow(clippy::enum_glob_use)]
fn default_check_bindings() -> Vec<KeyBinding> {
    use Action::*;
    const NONE: KeyModifiers = KeyModifiers::NONE;

    vec![
        bind(KeyCode::Char('k'), NONE, MoveUp, "↑/k", " up  "),
        alias(KeyCode::Up, NONE, MoveUp),
        bind(KeyCode::Char('j'), NONE, MoveDown, "↓/j", " down  "),
        alias(KeyCode::Down, NONE, MoveDown),
        bind(KeyCode::Enter, NONE, ToggleMark, "enter", " mark  "),
        bind(KeyCode::Char('e'), NONE, EditItem, "e", " edit  "),
        bind(KeyCode::Char('s'), NONE, DeleteMarked, "s", " remove marked  "),
        bind(KeyCode::Esc, NONE, Back, "esc/q", " back  "),
        alias(KeyCode::Char('q'), NONE, Back),
        alias(KeyCode::Char('c'), KeyModifiers::CONTROL, Back),
        bind(KeyCode::Left, NONE, PrevPage, "←/h", " prev page  "),
        alias(KeyCode::Char('h'), NONE, PrevPage),
        alias(KeyCode::PageUp, NONE, PrevPage),
        bind(KeyCode::Right, NONE, NextPage, "→/l", " next page  "),
        alias(KeyCode::Char('l'), NONE, NextPage),
        alias(KeyCode::PageDown, NONE, NextPage),
        bind(KeyCode::Char('g'), NONE, GoToStart, "g/G", " first/last"),
        alias(KeyCode::Home, NONE, GoToStart),
        alias(KeyCode::Char('G'), NONE, GoToEnd),
        // Terminals report shifted letters with SHIFT set.
        alias(KeyCode::Char('G'), KeyModifiers::SHIFT, GoToEnd),
        alias(KeyCode::End, NONE, GoToEnd),
    ]
}

#[allow(clippy::enum_glob_use)]
fn default_input_bindings() -> Vec<KeyBinding> {
    use Action::*;
    const NONE: KeyModifiers = KeyModifiers::NONE;

    vec![
        bind(KeyCode::Enter, NONE, Submit, "enter", " confirm  "),
        bind(KeyCode::Esc, NONE, Cancel, "esc", " cancel"),
        alias(KeyCode::Char('c'), KeyModifiers::CONTROL, Cancel),
    ]
}

// ── Tests ────────────────────────────────────────────────────────────
