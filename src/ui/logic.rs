//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和两个状态变更命令

use super::actions::Action;
use super::state::{Focus, TodoList};
use crate::models::Item;

impl TodoList {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::FocusNext => self.focus_next(),
            Action::FocusEntry => self.focus = Focus::Entry,

            Action::Submit => {
                self.on_submit();
            }

            Action::Input(c) => {
                if self.focus == Focus::Entry {
                    let mut text = self.pending.clone();
                    text.push(c);
                    self.on_entry_changed(text);
                }
            }

            Action::DeleteChar => {
                if self.focus == Focus::Entry {
                    let mut text = self.pending.clone();
                    text.pop();
                    self.on_entry_changed(text);
                }
            }
        }
        false
    }

    // ============ 表单命令 ============

    /// 输入框内容变化：整体替换待提交文本
    pub fn on_entry_changed(&mut self, text: impl Into<String>) -> &Self {
        self.pending = text.into();
        tracing::trace!(pending = %self.pending, "entry changed");
        self
    }

    /// 提交表单：追加条目并清空输入
    ///
    /// 不做任何校验，空文本也会作为条目追加。
    pub fn on_submit(&mut self) -> &Self {
        let text = std::mem::take(&mut self.pending);
        let index = self.items.push(Item::new(text));
        self.focus = Focus::Entry;
        tracing::debug!(index, count = self.items.len(), "item added");
        self
    }

    // ============ 焦点 ============

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Entry => Focus::Submit,
            Focus::Submit => Focus::Entry,
        };
    }
}
