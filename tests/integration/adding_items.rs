//! Typing into the entry field and submitting the form.

use crossterm::event::KeyCode;
use todo_tui::testing::Harness;
use todo_tui::ui::view::semantics::Role;

fn item_names(harness: &Harness) -> Vec<String> {
    harness
        .screen()
        .all_by_role(Role::ListItem)
        .iter()
        .map(|n| n.name.clone())
        .collect()
}

#[test]
fn two_submissions_appear_in_order() {
    let mut harness = Harness::default();

    harness.type_text("take out the trash");
    harness.submit();
    harness.type_text("walk the dog");
    harness.submit();

    assert_eq!(item_names(&harness), vec!["take out the trash", "walk the dog"]);
    assert!(harness.contains_text("take out the trash"));
    assert!(harness.contains_text("walk the dog"));
}

#[test]
fn submitting_empty_field_adds_blank_item() {
    let mut harness = Harness::default();
    harness.submit();

    assert_eq!(item_names(&harness), vec![String::new()]);
    assert_eq!(harness.app().items().len(), 1);
}

#[test]
fn field_is_cleared_after_submit() {
    let mut harness = Harness::default();
    harness.type_text("call mom");
    harness.submit();

    let field = harness.screen().by_placeholder("add to-do").unwrap();
    assert_eq!(field.value, "");
    assert_eq!(harness.app().pending(), "");
    assert!(harness.contains_text("Add to-do"));
}

#[test]
fn every_submission_adds_exactly_one_item() {
    let batches: [&[&str]; 3] = [
        &["a"],
        &["x", "y", "z", "x"],
        &["groceries", "", "  spaced  ", "Ünïcödé"],
    ];

    for batch in batches {
        let mut harness = Harness::default();
        for (n, text) in batch.iter().enumerate() {
            harness.type_text(text);
            harness.submit();
            assert_eq!(harness.screen().all_by_role(Role::ListItem).len(), n + 1);
        }
        assert_eq!(item_names(&harness), batch.to_vec());
        assert_eq!(harness.app().items().len(), batch.len());
    }
}

#[test]
fn enter_key_submits_the_form() {
    let mut harness = Harness::default();
    harness.type_text("pay bills");
    harness.press(KeyCode::Enter);

    assert_eq!(item_names(&harness), vec!["pay bills"]);
    assert!(!harness.quit_requested());
}

#[test]
fn backspace_edits_pending_text() {
    let mut harness = Harness::default();
    harness.type_text("feed cats");
    harness.press(KeyCode::Backspace);
    harness.press(KeyCode::Char('t'));
    harness.press(KeyCode::Enter);

    assert_eq!(item_names(&harness), vec!["feed catt"]);
}
