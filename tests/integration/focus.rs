//! Moving focus between the field and the button, and quitting.

use crossterm::event::KeyCode;
use todo_tui::Focus;
use todo_tui::testing::Harness;
use todo_tui::ui::view::semantics::Role;

#[test]
fn tab_then_enter_activates_button() {
    let mut harness = Harness::default();
    harness.type_text("water plants");
    harness.press(KeyCode::Tab);
    assert_eq!(harness.app().focus(), Focus::Submit);

    harness.press(KeyCode::Enter);
    assert_eq!(harness.app().items().len(), 1);
    assert_eq!(harness.app().focus(), Focus::Entry);
}

#[test]
fn space_on_button_submits() {
    let mut harness = Harness::default();
    harness.type_text("sweep");
    harness.press(KeyCode::BackTab);
    harness.press(KeyCode::Char(' '));

    let items = harness.screen().all_by_role(Role::ListItem);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "sweep");
}

#[test]
fn typing_while_button_focused_is_ignored() {
    let mut harness = Harness::default();
    harness.press(KeyCode::Tab);
    harness.press(KeyCode::Char('x'));

    assert_eq!(harness.app().pending(), "");
}

#[test]
fn clicking_field_restores_focus() {
    let mut harness = Harness::default();
    harness.press(KeyCode::Tab);
    assert!(harness.click(Role::TextBox, ""));
    assert_eq!(harness.app().focus(), Focus::Entry);
}

#[test]
fn q_is_text_in_field_but_quits_on_button() {
    let mut harness = Harness::default();
    harness.press(KeyCode::Char('q'));
    assert!(!harness.quit_requested());
    assert_eq!(harness.app().pending(), "q");

    harness.press(KeyCode::Tab);
    harness.press(KeyCode::Char('q'));
    assert!(harness.quit_requested());
}

#[test]
fn escape_quits() {
    let mut harness = Harness::default();
    harness.press(KeyCode::Esc);
    assert!(harness.quit_requested());
}

#[test]
fn clicking_missing_control_does_nothing() {
    let mut harness = Harness::default();
    assert!(!harness.click(Role::Button, "delete"));
    assert!(harness.app().items().is_empty());
}
