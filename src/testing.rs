//! 测试辅助工具
//!
//! [`Harness`] 把 [`TodoList`] 渲染到 ratatui 的 `TestBackend`，
//! 每次事件之后重新渲染，并按角色查询渲染结果：
//!
//! ```
//! use todo_tui::testing::Harness;
//! use todo_tui::ui::view::semantics::Role;
//!
//! let mut harness = Harness::default();
//! harness.type_text("walk the dog");
//! harness.submit();
//!
//! let items = harness.screen().all_by_role(Role::ListItem);
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].name, "walk the dog");
//! ```

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};

use crate::ui::view::semantics::{Role, Screen};
use crate::ui::{TodoList, handle_key_event, handle_mouse_event, render};

/// 驱动真实视图和事件映射的测试终端
pub struct Harness {
    terminal: Terminal<TestBackend>,
    app: TodoList,
    screen: Screen,
    quit: bool,
}

impl Harness {
    pub const WIDTH: u16 = 60;
    pub const HEIGHT: u16 = 20;

    pub fn new(app: TodoList) -> Self {
        Self::with_size(app, Self::WIDTH, Self::HEIGHT)
    }

    pub fn with_size(app: TodoList, width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend is infallible");
        let mut harness = Self {
            terminal,
            app,
            screen: Screen::default(),
            quit: false,
        };
        harness.render();
        harness
    }

    /// 重新渲染一帧
    pub fn render(&mut self) -> &Screen {
        let app = &self.app;
        let mut screen = Screen::default();
        self.terminal
            .draw(|frame| screen = render(frame, app))
            .expect("test backend is infallible");
        self.screen = screen;
        &self.screen
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn app(&self) -> &TodoList {
        &self.app
    }

    /// 是否收到过退出操作
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn press(&mut self, key: KeyCode) {
        self.quit |= handle_key_event(&mut self.app, key);
        self.render();
    }

    /// 在按钮或输入框等控件中心单击，找不到控件时返回 false
    pub fn click(&mut self, role: Role, name: &str) -> bool {
        let target = match self.screen.by_role_and_name(role, name) {
            Some(node) if !node.area.is_empty() => node.area,
            _ => return false,
        };
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: target.x + target.width / 2,
            row: target.y + target.height / 2,
            modifiers: KeyModifiers::NONE,
        };
        self.quit |= handle_mouse_event(&mut self.app, &self.screen, mouse);
        self.render();
        true
    }

    /// 先点击输入框获得焦点，再逐个字符输入
    pub fn type_text(&mut self, text: &str) {
        self.click(Role::TextBox, "");
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// 点击提交按钮
    pub fn submit(&mut self) {
        let label = self.app.labels().submit.clone();
        let clicked = self.click(Role::Button, &label);
        assert!(clicked, "submit button `{label}` is not on screen");
    }

    /// 终端缓冲区的每一行
    pub fn lines(&self) -> Vec<String> {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.lines().iter().any(|line| line.contains(text))
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(TodoList::default())
    }
}
