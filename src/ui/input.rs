use crate::ui::app::App;
use crate::ui::form::{CursorMove, FormFocus, FormIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl+C quits as well
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 's') {
        app.submit();
        return;
    }

    let intent = match key.code {
        KeyCode::Esc => FormIntent::DismissError,
        KeyCode::Tab => FormIntent::FocusNext,
        KeyCode::BackTab => FormIntent::FocusPrev,
        KeyCode::Enter if app.form().focus() == FormFocus::Submit => {
            app.submit();
            return;
        }
        KeyCode::Enter => FormIntent::Newline,
        KeyCode::Backspace => FormIntent::Backspace,
        KeyCode::Delete => FormIntent::Delete,
        KeyCode::Left => FormIntent::MoveCursor(CursorMove::Left),
        KeyCode::Right => FormIntent::MoveCursor(CursorMove::Right),
        KeyCode::Up => FormIntent::MoveCursor(CursorMove::Up),
        KeyCode::Down => FormIntent::MoveCursor(CursorMove::Down),
        KeyCode::Home => FormIntent::MoveCursor(CursorMove::Home),
        KeyCode::PageDown => {
            app.scroll_results_down();
            return;
        }
        KeyCode::PageUp => {
            app.scroll_results_up();
            return;
        }
        KeyCode::End => FormIntent::MoveCursor(CursorMove::End),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            FormIntent::Insert(ch)
        }
        _ => return,
    };

    app.dispatch_form(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
