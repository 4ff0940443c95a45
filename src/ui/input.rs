use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::api::ProductsApi;
use crate::manager::ProductManager;
use crate::model::{DraftField, ProductId};
use crate::ui::app::App;

/// Remote work a key press asks the runtime to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Handled synchronously; nothing to await.
    None,
    Refresh,
    SubmitAdd,
    SubmitEdit,
    /// Ask for confirmation, then delete.
    Delete(ProductId),
}

pub fn handle_key<A: ProductsApi>(
    app: &mut App,
    manager: &mut ProductManager<A>,
    key: KeyEvent,
) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    if manager.state().is_modal_open() {
        return handle_form_key(app, manager, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
            InputAction::None
        }
        KeyCode::Char('a') => {
            manager.begin_add();
            app.focus_field(DraftField::Name);
            InputAction::None
        }
        KeyCode::Char('r') => InputAction::Refresh,
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection(-1, manager.state().products.len());
            InputAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection(1, manager.state().products.len());
            InputAction::None
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(product) = manager.state().product(app.selected()).cloned() {
                manager.begin_edit(product);
                app.focus_field(DraftField::Name);
            }
            InputAction::None
        }
        KeyCode::Char('d') | KeyCode::Delete => match manager.state().product(app.selected()) {
            Some(product) => InputAction::Delete(product.id.clone()),
            None => InputAction::None,
        },
        _ => InputAction::None,
    }
}

fn handle_form_key<A: ProductsApi>(
    app: &mut App,
    manager: &mut ProductManager<A>,
    key: KeyEvent,
) -> InputAction {
    match key.code {
        KeyCode::Esc => {
            manager.close_modal();
            InputAction::None
        }
        KeyCode::Enter => {
            if manager.state().show_add_modal {
                InputAction::SubmitAdd
            } else {
                InputAction::SubmitEdit
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next_field();
            InputAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev_field();
            InputAction::None
        }
        KeyCode::Backspace => {
            let field = app.focused_field();
            let mut value = manager.state().draft.field(field).to_string();
            if value.pop().is_some() {
                manager.update_draft_field(field, value);
            }
            InputAction::None
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let field = app.focused_field();
            let mut value = manager.state().draft.field(field).to_string();
            value.push(ch);
            manager.update_draft_field(field, value);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

/// Answer to the delete confirmation, or `None` for keys that don't answer.
pub fn confirm_answer(key: KeyEvent) -> Option<bool> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(false),
        _ if is_ctrl_char(key, 'c') => Some(false),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
