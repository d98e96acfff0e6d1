//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod semantics;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{Focus, TodoList};
use components::{item_view, render_button, render_input_widget};
use semantics::{Node, Role, Screen};

/// 渲染 UI，返回本帧的语义树
pub fn render(frame: &mut Frame, app: &TodoList) -> Screen {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(3),    // 列表
            Constraint::Length(3), // 表单
            Constraint::Length(1), // 帮助
        ])
        .split(frame.area());

    let heading = render_heading(frame, app, chunks[0]);
    let list = render_list(frame, app, chunks[1]);
    let form = render_form(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    let mut nodes = vec![heading, list];
    nodes.extend(form);
    Screen::new(nodes)
}

fn render_heading(frame: &mut Frame, app: &TodoList, area: Rect) -> Node {
    let heading = &app.labels().heading;
    let title = Paragraph::new(heading.as_str())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);

    Node::new(Role::Heading, heading.as_str(), area)
}

fn render_list(frame: &mut Frame, app: &TodoList, area: Rect) -> Node {
    let block = Block::default()
        .title(format!("条目 ({})", app.items().len()))
        .borders(Borders::ALL);
    let inner = block.inner(area);

    // 放不下时滚动到最新的条目
    let visible = inner.height as usize;
    let offset = app.items().len().saturating_sub(visible);

    let items: Vec<ListItem> = app.items().iter().map(item_view).collect();
    let list = List::new(items).block(block);
    let mut state = ListState::default().with_offset(offset);
    frame.render_stateful_widget(list, area, &mut state);

    let children = app
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let row_area = if i >= offset && i - offset < visible {
                Rect::new(inner.x, inner.y + (i - offset) as u16, inner.width, 1)
            } else {
                Rect::default()
            };
            Node::new(Role::ListItem, item.text(), row_area)
        })
        .collect();

    Node::new(Role::List, "", area).with_children(children)
}

fn render_form(frame: &mut Frame, app: &TodoList, area: Rect) -> [Node; 2] {
    let labels = app.labels();
    let button_width = Line::from(labels.submit.as_str()).width() as u16 + 6;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(button_width)])
        .split(area);

    render_input_widget(
        frame,
        chunks[0],
        "新条目",
        app.pending(),
        &labels.placeholder,
        app.focus() == Focus::Entry,
    );
    render_button(
        frame,
        chunks[1],
        &labels.submit,
        app.focus() == Focus::Submit,
    );

    [
        Node::new(Role::TextBox, "", chunks[0])
            .with_value(app.pending())
            .with_placeholder(labels.placeholder.as_str()),
        Node::new(Role::Button, labels.submit.as_str(), chunks[1]),
    ]
}

fn render_help(frame: &mut Frame, app: &TodoList, area: Rect) {
    let help_text = match app.focus() {
        Focus::Entry => "[Enter] 提交  [Tab] 切换到按钮  [Esc] 退出",
        Focus::Submit => "[Enter/Space] 提交  [Tab] 切换到输入框  [q/Esc] 退出",
    };

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::Gray));
    frame.render_widget(help, area);
}
