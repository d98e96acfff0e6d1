//! Labels and initial items coming from a config file.

use std::fs;

use todo_tui::TodoList;
use todo_tui::config::load_config;
use todo_tui::testing::Harness;
use todo_tui::ui::view::semantics::Role;

#[test]
fn config_labels_and_items_reach_the_screen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
heading = "Weekend"
placeholder = "What needs doing?"
submit_label = "Add"
items = ["mow lawn"]
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    let app = TodoList::with_state(config.labels(), config.initial_items(), "");
    let mut harness = Harness::new(app);

    let screen = harness.screen();
    assert!(screen.by_role_and_name(Role::Heading, "weekend").is_some());
    assert!(screen.by_placeholder("what needs doing").is_some());
    assert!(screen.by_role_and_name(Role::Button, "add").is_some());
    assert_eq!(screen.all_by_role(Role::ListItem).len(), 1);

    harness.type_text("clean gutters");
    harness.submit();

    let names: Vec<String> = harness
        .screen()
        .all_by_role(Role::ListItem)
        .iter()
        .map(|n| n.name.clone())
        .collect();
    assert_eq!(names, vec!["mow lawn", "clean gutters"]);
}
