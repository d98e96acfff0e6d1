//! 事件映射 (Input -> Action)
//!
//! 将按键和鼠标事件转换为 Action

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::state::{Focus, TodoList};
use super::view::semantics::{Role, Screen};

/// 根据当前焦点和按键获取对应的 Action
pub fn get_action(focus: Focus, key: KeyCode) -> Option<Action> {
    match focus {
        Focus::Entry => match key {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab | KeyCode::BackTab => Some(Action::FocusNext),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        Focus::Submit => match key {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Submit),
            KeyCode::Tab | KeyCode::BackTab => Some(Action::FocusNext),
            _ => None,
        },
    }
}

/// 根据上一帧的语义树获取鼠标对应的 Action
pub fn get_mouse_action(screen: &Screen, mouse: MouseEvent) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    match screen.hit_test(mouse.column, mouse.row)?.role {
        Role::Button => Some(Action::Submit),
        Role::TextBox => Some(Action::FocusEntry),
        _ => None,
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut TodoList, key: KeyCode) -> bool {
    match get_action(app.focus(), key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

/// 处理鼠标事件
pub fn handle_mouse_event(app: &mut TodoList, screen: &Screen, mouse: MouseEvent) -> bool {
    match get_mouse_action(screen, mouse) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
