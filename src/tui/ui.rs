use chrono::{Local, NaiveDate};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::store::ListEntry;

use super::app::{App, MenuChoice, Mode};
use super::form::render_hints;
use super::keymap::{KeyBinding, hints};
use super::list::ItemList;
use super::theme::Theme;

const MARGIN: u16 = 2;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = inset(frame.area());
    match app.mode {
        Mode::Home => draw_home(frame, app, area),
        Mode::New => draw_input(frame, app, area, "What's the plan for today?"),
        Mode::Check => draw_check(frame, app, area),
        Mode::Edit => draw_input(frame, app, area, "Edit your plan:"),
    }
}

fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + MARGIN.min(area.width),
        y: area.y + 1.min(area.height),
        width: area.width.saturating_sub(MARGIN),
        height: area.height.saturating_sub(1),
    }
}

/// Date shown in the home footer, e.g. `October-19-2026`.
pub fn footer_date(date: NaiveDate) -> String {
    date.format("%B-%-d-%Y").to_string()
}

fn draw_home(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut lines = vec![
        Line::styled("What to do next?", theme.heading_style()),
        Line::raw(""),
    ];
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        if i == app.menu_index {
            lines.push(Line::from(vec![
                Span::styled("> ", theme.menu_cursor_style()),
                Span::styled(choice.label(), theme.menu_cursor_style()),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(choice.label(), theme.item_style()),
            ]));
        }
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!(
            "Press q to quit. Date: {}",
            footer_date(Local::now().date_naive())
        ),
        theme.secondary_style(),
    ));

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect, prompt: &str) {
    let theme = &app.theme;
    let [heading, _, input, _, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(prompt, theme.heading_style())),
        heading,
    );
    frame.render_widget(Paragraph::new(app.input.line(theme)), input);
    draw_hints(frame, &app.keymap.input, theme, footer);
}

fn draw_check(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let rows = app.page_rows().min(area.height.saturating_sub(3).max(1));

    let [title, _, body, pager, _, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(rows),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled("Existing ToDo items:", theme.heading_style())),
        title,
    );

    if app.list.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled("    No items.", theme.secondary_style())),
            body,
        );
    } else {
        let layout = app.list.page_layout(usize::from(body.height));
        frame.render_widget(List::new(entry_lines(&app.list, layout.visible, theme)), body);
        if layout.pages > 1 {
            frame.render_widget(
                Paragraph::new(pagination_line(layout.page, layout.pages, theme)),
                pager,
            );
        }
    }

    draw_hints(frame, &app.keymap.check, theme, footer);
}

fn entry_lines<T: ListEntry>(
    list: &ItemList<T>,
    visible: std::ops::Range<usize>,
    theme: &Theme,
) -> Vec<ListItem<'static>> {
    visible
        .filter_map(|i| list.get(i).map(|entry| (i, entry)))
        .map(|(i, entry)| ListItem::new(entry_line(i, entry, i == list.index(), theme)))
        .collect()
}

/// One list row: `N. title`, marked style first, then the selected style
/// on top when the row is under the cursor.
fn entry_line<T: ListEntry>(index: usize, entry: &T, selected: bool, theme: &Theme) -> Line<'static> {
    let text = format!("{}. {}", index + 1, entry.title());

    let mut prefix = "    ";
    let mut style = if entry.is_marked() {
        theme.marked_style()
    } else {
        theme.item_style()
    };
    if selected {
        prefix = "  > ";
        style = theme.selected_style();
    }
    Line::styled(format!("{prefix}{text}"), style)
}

fn pagination_line(page: usize, pages: usize, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::raw("    ")];
    for p in 0..pages {
        let (dot, active) = if p == page { ("•", true) } else { ("○", false) };
        spans.push(Span::styled(dot, theme.page_dot_style(active)));
    }
    Line::from(spans)
}

fn draw_hints(frame: &mut Frame, bindings: &[KeyBinding], theme: &Theme, area: Rect) {
    let entries = hints(bindings);
    let pairs: Vec<(&str, &str)> = entries.iter().map(|e| (e.label, e.description)).collect();
    render_hints(
        frame,
        area,
        &pairs,
        theme.hint_key_style(),
        theme.hint_desc_style(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::app_with;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    const WIDTH: u16 = 60;
    const HEIGHT: u16 = 20;

    fn render(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn row_with<'a>(rows: &'a [String], needle: &str) -> Option<(usize, &'a String)> {
        rows.iter().enumerate().find(|(_, r)| r.contains(needle))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn footer_date_format() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 9).unwrap();
        assert_eq!(footer_date(date), "October-9-2026");
    }

    #[test]
    fn home_shows_menu_with_cursor_and_footer() {
        let (_dir, app) = app_with(&[]);
        let rows = rows(&render(&app));
        assert!(row_with(&rows, "What to do next?").is_some());
        assert!(row_with(&rows, "> Create new item").is_some());
        let (_, check) = row_with(&rows, "Check old items").unwrap();
        assert!(!check.contains('>'));
        assert!(row_with(&rows, "Press q to quit. Date: ").is_some());
    }

    #[test]
    fn new_screen_shows_prompt_and_placeholder() {
        let (_dir, mut app) = app_with(&[]);
        press(&mut app, KeyCode::Enter);
        let rows = rows(&render(&app));
        assert!(row_with(&rows, "What's the plan for today?").is_some());
        assert!(row_with(&rows, "Buy milk").is_some());
        assert!(row_with(&rows, "esc cancel").is_some());
    }

    #[test]
    fn edit_screen_is_prefilled() {
        let (_dir, mut app) = app_with(&["Water plants"]);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('e'));
        let rows = rows(&render(&app));
        assert!(row_with(&rows, "Edit your plan:").is_some());
        assert!(row_with(&rows, "> Water plants").is_some());
    }

    #[test]
    fn check_screen_numbers_items_and_marks_selection() {
        let (_dir, mut app) = app_with(&["Buy milk", "Call dentist", "Walk dog"]);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter); // mark "Buy milk"
        press(&mut app, KeyCode::Down);

        let buffer = render(&app);
        let rows = rows(&buffer);
        assert!(row_with(&rows, "Existing ToDo items:").is_some());
        assert!(row_with(&rows, "e edit").is_some());

        let (marked_y, marked) = row_with(&rows, "1. Buy milk").unwrap();
        assert!(!marked.contains('>'));
        let (selected_y, selected) = row_with(&rows, "2. Call dentist").unwrap();
        assert!(selected.contains("> 2. Call dentist"));
        assert!(row_with(&rows, "3. Walk dog").is_some());

        let theme = Theme::default();
        let x = marked.find('1').unwrap() as u16;
        assert_eq!(buffer[(x, marked_y as u16)].fg, theme.marked);
        let x = selected.find('2').unwrap() as u16;
        assert_eq!(buffer[(x, selected_y as u16)].fg, theme.selected);
    }

    #[test]
    fn selected_style_wins_over_marked() {
        let (_dir, mut app) = app_with(&["Buy milk"]);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert!(app.list.get(0).unwrap().is_marked());

        let buffer = render(&app);
        let rows = rows(&buffer);
        let (y, row) = row_with(&rows, "> 1. Buy milk").unwrap();
        let x = row.find('1').unwrap() as u16;
        assert_eq!(buffer[(x, y as u16)].fg, Theme::default().selected);
    }

    #[test]
    fn check_screen_paginates() {
        let titles: Vec<String> = (1..=30).map(|i| format!("task {i}")).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let (_dir, mut app) = app_with(&refs);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        let rows_first = rows(&render(&app));
        assert!(row_with(&rows_first, "1. task 1").is_some());
        assert!(row_with(&rows_first, "30. task 30").is_none());
        assert!(row_with(&rows_first, "•○").is_some());

        press(&mut app, KeyCode::End);
        let rows_last = rows(&render(&app));
        assert!(row_with(&rows_last, "> 30. task 30").is_some());
        assert!(row_with(&rows_last, " 1. task 1").is_none());
    }

    #[test]
    fn empty_check_screen() {
        let (_dir, mut app) = app_with(&[]);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        let rows = rows(&render(&app));
        assert!(row_with(&rows, "No items.").is_some());
    }

    #[test]
    fn rendering_does_not_mutate_state() {
        let (_dir, mut app) = app_with(&["a", "b"]);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        let before = (app.mode, app.list.index(), app.list.items().to_vec());
        render(&app);
        render(&app);
        assert_eq!(before, (app.mode, app.list.index(), app.list.items().to_vec()));
    }
}
