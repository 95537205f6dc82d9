use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Semantic colour theme for the entire TUI.
///
/// Every colour used by the renderer is stored here so the user can
/// override any of them via `[theme]` in `config.toml`.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Text ──────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_secondary: Color,
    pub heading: Color,

    // ── Items ─────────────────────────────────────────────────
    pub marked: Color,
    pub selected: Color,

    // ── Menu ──────────────────────────────────────────────────
    pub menu_cursor: Color,

    // ── Text input ────────────────────────────────────────────
    pub prompt: Color,
    pub placeholder: Color,
    pub cursor: Color,

    // ── Footer ────────────────────────────────────────────────
    pub hint_key: Color,
    pub hint_desc: Color,

    // ── Pagination ────────────────────────────────────────────
    pub page_active: Color,
    pub page_inactive: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            heading: Color::Cyan,

            marked: Color::Rgb(0x00, 0xff, 0x33),
            selected: Color::Rgb(0xdd, 0x00, 0xff),

            menu_cursor: Color::Cyan,

            prompt: Color::Cyan,
            placeholder: Color::DarkGray,
            cursor: Color::Cyan,

            hint_key: Color::Cyan,
            hint_desc: Color::DarkGray,

            page_active: Color::White,
            page_inactive: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Style for an unmarked, unselected item.
    pub fn item_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for an item queued for deletion.
    pub fn marked_style(&self) -> Style {
        Style::default().fg(self.marked)
    }

    /// Style for the item under the cursor. Applied after the marked style.
    pub fn selected_style(&self) -> Style {
        Style::default().fg(self.selected).add_modifier(Modifier::BOLD)
    }

    pub fn heading_style(&self) -> Style {
        Style::default().fg(self.heading).add_modifier(Modifier::BOLD)
    }

    pub fn secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn menu_cursor_style(&self) -> Style {
        Style::default().fg(self.menu_cursor).add_modifier(Modifier::BOLD)
    }

    pub fn prompt_style(&self) -> Style {
        Style::default().fg(self.prompt)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(self.placeholder)
    }

    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.cursor)
    }

    pub fn hint_key_style(&self) -> Style {
        Style::default().fg(self.hint_key).add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc_style(&self) -> Style {
        Style::default().fg(self.hint_desc)
    }

    pub fn page_dot_style(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.page_active)
        } else {
            Style::default().fg(self.page_inactive)
        }
    }
}

// ── Config deserialization ────────────────────────────────────────────

/// All-optional mirror of [`Theme`] for `config.toml` `[theme]` section.
///
/// Only `Some` fields override the default; everything else keeps its default.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct ThemeConfig {
    pub text_primary: Option<String>,
    pub text_secondary: Option<String>,
    pub heading: Option<String>,

    pub marked: Option<String>,
    pub selected: Option<String>,

    pub menu_cursor: Option<String>,

    pub prompt: Option<String>,
    pub placeholder: Option<String>,
    pub cursor: Option<String>,

    pub hint_key: Option<String>,
    pub hint_desc: Option<String>,

    pub page_active: Option<String>,
    pub page_inactive: Option<String>,
}

/// Parse a colour string into a ratatui `Color`.
///
/// Supports named colours (`"cyan"`, `"red"`, `"dark_gray"`, etc.),
/// `"rgb(R,G,B)"` and `"#rrggbb"`.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    // Named colours (case-insensitive, with underscore tolerance)
    let lower = s.to_lowercase().replace('-', "_");
    match lower.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "light_red" | "lightred" => Some(Color::LightRed),
        "light_green" | "lightgreen" => Some(Color::LightGreen),
        "light_yellow" | "lightyellow" => Some(Color::LightYellow),
        "light_blue" | "lightblue" => Some(Color::LightBlue),
        "light_magenta" | "lightmagenta" => Some(Color::LightMagenta),
        "light_cyan" | "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => None,
    }
}

/// Apply an optional config field: if the string parses to a valid colour,
/// overwrite `target`.
fn apply(target: &mut Color, source: Option<&String>) {
    if let Some(s) = source {
        match parse_color(s) {
            Some(color) => *target = color,
            None => tracing::warn!("ignoring unknown theme colour {s:?}"),
        }
    }
}

impl ThemeConfig {
    /// Build a `Theme` starting from defaults, overriding any fields that were
    /// set in the config file.
    pub fn build(&self) -> Theme {
        let mut t = Theme::default();

        apply(&mut t.text_primary, self.text_primary.as_ref());
        apply(&mut t.text_secondary, self.text_secondary.as_ref());
        apply(&mut t.heading, self.heading.as_ref());
        apply(&mut t.marked, self.marked.as_ref());
        apply(&mut t.selected, self.selected.as_ref());
        apply(&mut t.menu_cursor, self.menu_cursor.as_ref());
        apply(&mut t.prompt, self.prompt.as_ref());
        apply(&mut t.placeholder, self.placeholder.as_ref());
        apply(&mut t.cursor, self.cursor.as_ref());
        apply(&mut t.hint_key, self.hint_key.as_ref());
        apply(&mut t.hint_desc, self.hint_desc.as_ref());
        apply(&mut t.page_active, self.page_active.as_ref());
        apply(&mut t.page_inactive, self.page_inactive.as_ref());

        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_has_expected_colors() {
        let t = Theme::default();
        assert_eq!(t.marked, Color::Rgb(0, 255, 51));
        assert_eq!(t.selected, Color::Rgb(221, 0, 255));
        assert_eq!(t.text_primary, Color::White);
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!(parse_color("cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("dark_gray"), Some(Color::DarkGray));
        assert_eq!(parse_color("DarkGray"), Some(Color::DarkGray));
        assert_eq!(parse_color("light-red"), Some(Color::LightRed));
        assert_eq!(parse_color("nope"), None);
    }

    #[test]
    fn parse_rgb_color() {
        assert_eq!(
            parse_color("rgb(255, 165, 0)"),
            Some(Color::Rgb(255, 165, 0))
        );
        assert_eq!(parse_color("rgb(256,0,0)"), None); // overflow
        assert_eq!(parse_color("rgb(1,2)"), None); // too few
    }

    #[test]
    fn parse_hex_color() {
        assert_eq!(parse_color("#00ff33"), Some(Color::Rgb(0, 255, 51)));
        assert_eq!(parse_color("#DD00FF"), Some(Color::Rgb(221, 0, 255)));
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("#gg0000"), None);
    }

    #[test]
    fn theme_config_overrides() {
        let cfg = ThemeConfig {
            marked: Some("red".into()),
            selected: Some("#102030".into()),
            heading: Some("not-a-colour".into()),
            ..Default::default()
        };
        let t = cfg.build();
        assert_eq!(t.marked, Color::Red);
        assert_eq!(t.selected, Color::Rgb(0x10, 0x20, 0x30));
        // Unparseable and absent fields keep defaults
        assert_eq!(t.heading, Color::Cyan);
        assert_eq!(t.text_primary, Color::White);
    }

    #[test]
    fn selected_style_is_bold() {
        let t = Theme::default();
        let style = t.selected_style();
        assert_eq!(style.fg, Some(t.selected));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn marked_and_item_styles_differ() {
        let t = Theme::default();
        assert_eq!(t.marked_style(), Style::default().fg(t.marked));
        assert_ne!(t.marked_style(), t.item_style());
    }

    #[test]
    fn page_dot_styles() {
        let t = Theme::default();
        assert_eq!(t.page_dot_style(true).fg, Some(t.page_active));
        assert_eq!(t.page_dot_style(false).fg, Some(t.page_inactive));
    }
}
