use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme::Theme;

// ── Text editing helpers ──────────────────────────────────────────────

/// Find the byte offset of the previous word boundary (for word-left navigation).
pub fn word_boundary_left(s: &str, pos: usize) -> usize {
    let before = &s[..pos];
    let trimmed = before.trim_end();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.char_indices().rev().find(|(_, c)| c.is_whitespace()) {
        Some((idx, ch)) => idx + ch.len_utf8(),
        None => 0,
    }
}

/// Find the byte offset of the next word boundary (for word-right navigation).
pub fn word_boundary_right(s: &str, pos: usize) -> usize {
    let after = &s[pos..];
    match after.find(char::is_whitespace) {
        None => s.len(),
        Some(offset) => {
            let from_ws = &after[offset..];
            match from_ws.find(|c: char| !c.is_whitespace()) {
                None => s.len(),
                Some(word_start) => pos + offset + word_start,
            }
        }
    }
}

/// Apply standard text-editing shortcuts to a string buffer with cursor tracking.
/// `cursor` is a byte offset. Insertion is refused once the buffer holds
/// `char_limit` characters.
/// Returns `true` if the key event was consumed.
pub fn apply_text_edit(
    buf: &mut String,
    cursor: &mut usize,
    char_limit: usize,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> bool {
    *cursor = (*cursor).min(buf.len());

    match code {
        // --- Cursor movement ---
        KeyCode::Left if modifiers.contains(KeyModifiers::ALT) => {
            *cursor = word_boundary_left(buf, *cursor);
            true
        }
        KeyCode::Left => {
            if let Some(ch) = buf[..*cursor].chars().next_back() {
                *cursor -= ch.len_utf8();
            }
            true
        }
        KeyCode::Right if modifiers.contains(KeyModifiers::ALT) => {
            *cursor = word_boundary_right(buf, *cursor);
            true
        }
        KeyCode::Right => {
            if let Some(ch) = buf[*cursor..].chars().next() {
                *cursor += ch.len_utf8();
            }
            true
        }
        KeyCode::Home => {
            *cursor = 0;
            true
        }
        KeyCode::End => {
            *cursor = buf.len();
            true
        }

        // --- Deletion ---
        KeyCode::Backspace if modifiers.contains(KeyModifiers::ALT) => {
            let new_pos = word_boundary_left(buf, *cursor);
            buf.drain(new_pos..*cursor);
            *cursor = new_pos;
            true
        }
        KeyCode::Char('w') if modifiers.contains(KeyModifiers::CONTROL) => {
            let new_pos = word_boundary_left(buf, *cursor);
            buf.drain(new_pos..*cursor);
            *cursor = new_pos;
            true
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            buf.drain(..*cursor);
            *cursor = 0;
            true
        }
        KeyCode::Backspace => {
            if let Some(ch) = buf[..*cursor].chars().next_back() {
                let new_pos = *cursor - ch.len_utf8();
                buf.drain(new_pos..*cursor);
                *cursor = new_pos;
            }
            true
        }
        KeyCode::Delete => {
            if let Some(ch) = buf[*cursor..].chars().next() {
                buf.drain(*cursor..*cursor + ch.len_utf8());
            }
            true
        }

        // --- Character insertion ---
        KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            if buf.chars().count() < char_limit {
                buf.insert(*cursor, c);
                *cursor += c.len_utf8();
            }
            true
        }
        _ => false,
    }
}

// ── Text input widget ─────────────────────────────────────────────────

/// Single-line editable text with a character limit and a placeholder.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    /// Byte offset into `value`.
    cursor: usize,
    char_limit: usize,
    placeholder: String,
    /// Visible columns for the value.
    width: u16,
}

pub const PROMPT: &str = "> ";
const CURSOR: &str = "\u{2588}";

impl TextInput {
    pub fn new(char_limit: usize, placeholder: impl Into<String>, width: u16) -> Self {
        TextInput {
            value: String::new(),
            cursor: 0,
            char_limit,
            placeholder: placeholder.into(),
            width: width.max(1),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the buffer, truncated to the char limit, with the cursor at the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().take(self.char_limit).collect();
        self.cursor = self.value.len();
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Feed a key event to the buffer. Returns `true` if it was consumed.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        apply_text_edit(
            &mut self.value,
            &mut self.cursor,
            self.char_limit,
            code,
            modifiers,
        )
    }

    /// The slice of the value that fits in `width` columns while keeping the
    /// cursor in view, split at the cursor.
    fn visible(&self) -> (&str, &str) {
        let width = usize::from(self.width);
        let (before, after) = self.value.split_at(self.cursor.min(self.value.len()));

        // One column is reserved for the block cursor.
        let before_chars = before.chars().count();
        let skip = before_chars.saturating_sub(width.saturating_sub(1));
        let start = before
            .char_indices()
            .nth(skip)
            .map_or(before.len(), |(i, _)| i);
        let before = &before[start..];

        let room = width.saturating_sub(before.chars().count() + 1);
        let end = after.char_indices().nth(room).map_or(after.len(), |(i, _)| i);
        (before, &after[..end])
    }

    /// Render as a single line: prompt, value and block cursor, or the
    /// placeholder when empty.
    pub fn line(&self, theme: &Theme) -> Line<'_> {
        let mut spans = vec![Span::styled(PROMPT, theme.prompt_style())];
        if self.value.is_empty() {
            spans.push(Span::styled(CURSOR, theme.cursor_style()));
            spans.push(Span::styled(
                self.placeholder.as_str(),
                theme.placeholder_style(),
            ));
        } else {
            let (before, after) = self.visible();
            spans.push(Span::styled(before, theme.item_style()));
            spans.push(Span::styled(CURSOR, theme.cursor_style()));
            spans.push(Span::styled(after, theme.item_style()));
        }
        Line::from(spans)
    }
}

// ── Rendering helpers ─────────────────────────────────────────────────

/// Render a horizontal hint bar: alternating key/description spans.
pub fn render_hints(
    frame: &mut Frame,
    area: Rect,
    hints: &[(&str, &str)],
    key_style: Style,
    desc_style: Style,
) {
    let spans: Vec<Span<'_>> = hints
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(*key, key_style),
                Span::styled(*desc, desc_style),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn typed(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    fn key(input: &mut TextInput, code: KeyCode, modifiers: KeyModifiers) -> bool {
        input.handle_key(code, modifiers)
    }

    #[test]
    fn typing_then_reset() {
        let mut input = TextInput::new(32, "Buy milk", 32);
        typed(&mut input, "Call dentist");
        assert_eq!(input.value(), "Call dentist");
        input.reset();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn char_limit_counts_characters_not_bytes() {
        let mut input = TextInput::new(5, "", 32);
        typed(&mut input, "crème brûlée");
        assert_eq!(input.value(), "crème");
        assert_eq!(input.value().len(), 6);
        assert_eq!(input.cursor(), input.value().len());

        // Full buffer still accepts edits that do not grow it.
        key(&mut input, KeyCode::Backspace, KeyModifiers::NONE);
        typed(&mut input, "é");
        assert_eq!(input.value(), "crèmé");
    }

    #[test]
    fn insert_in_the_middle_of_a_title() {
        let mut input = TextInput::new(32, "", 32);
        input.set_value("Buy mlk");
        key(&mut input, KeyCode::Left, KeyModifiers::NONE);
        key(&mut input, KeyCode::Left, KeyModifiers::NONE);
        typed(&mut input, "i");
        assert_eq!(input.value(), "Buy milk");
        assert_eq!(input.cursor(), 6);
    }

    #[test]
    fn word_edits_on_a_title() {
        let mut input = TextInput::new(32, "", 32);
        input.set_value("Call the dentist");

        key(&mut input, KeyCode::Left, KeyModifiers::ALT);
        assert_eq!(input.cursor(), 9);
        key(&mut input, KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(input.value(), "Call dentist");

        key(&mut input, KeyCode::End, KeyModifiers::NONE);
        key(&mut input, KeyCode::Backspace, KeyModifiers::ALT);
        assert_eq!(input.value(), "Call ");

        key(&mut input, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn control_chords_are_not_typed() {
        let mut input = TextInput::new(32, "", 32);
        input.set_value("milk");
        assert!(!key(&mut input, KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert!(!key(&mut input, KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(input.value(), "milk");
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut input = TextInput::new(32, "", 32);
        input.set_value("Buy  milk");
        key(&mut input, KeyCode::Home, KeyModifiers::NONE);
        key(&mut input, KeyCode::Right, KeyModifiers::ALT);
        key(&mut input, KeyCode::Left, KeyModifiers::NONE);
        key(&mut input, KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(input.value(), "Buy milk");
    }

    #[test]
    fn set_value_truncates_and_moves_cursor_to_end() {
        let mut input = TextInput::new(4, "", 32);
        input.set_value("abcdef");
        assert_eq!(input.value(), "abcd");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn empty_input_renders_placeholder() {
        let input = TextInput::new(32, "Buy milk", 32);
        let text = line_text(&input.line(&Theme::default()));
        assert_eq!(text, format!("{PROMPT}{CURSOR}Buy milk"));
    }

    #[test]
    fn value_renders_with_cursor() {
        let mut input = TextInput::new(32, "Buy milk", 32);
        input.set_value("Buy bread");
        key(&mut input, KeyCode::Left, KeyModifiers::NONE);
        let text = line_text(&input.line(&Theme::default()));
        assert_eq!(text, format!("{PROMPT}Buy brea{CURSOR}d"));
    }

    #[test]
    fn long_value_scrolls_to_keep_cursor_visible() {
        let mut input = TextInput::new(32, "", 5);
        input.set_value("abcdefghij");
        let (before, after) = input.visible();
        assert_eq!(before, "ghij");
        assert_eq!(after, "");

        key(&mut input, KeyCode::Home, KeyModifiers::NONE);
        let (before, after) = input.visible();
        assert_eq!(before, "");
        assert_eq!(after, "abcd");
    }

    #[test]
    fn window_in_the_middle_of_a_long_value() {
        let mut input = TextInput::new(32, "", 5);
        input.set_value("abcdefghij");
        for _ in 0..3 {
            key(&mut input, KeyCode::Left, KeyModifiers::NONE);
        }
        // Cursor sits before 'h'; the window ends on the cursor column.
        let (before, after) = input.visible();
        assert_eq!(before, "defg");
        assert_eq!(after, "");
        let text = line_text(&input.line(&Theme::default()));
        assert_eq!(text, format!("{PROMPT}defg{CURSOR}"));
    }

    #[test]
    fn window_counts_multibyte_chars_as_one_column() {
        let mut input = TextInput::new(32, "", 4);
        input.set_value("ééééé");
        let (before, after) = input.visible();
        assert_eq!(before, "ééé");
        assert_eq!(after, "");
    }
}
