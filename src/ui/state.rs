//! 列表状态定义 (Model)
//!
//! 包含列表容器结构体及相关枚举

use crate::models::ItemList;

/// 列表容器：持有条目列表和正在输入的文本
///
/// 所有可变状态都在这一个实例里，测试可以各自构造互不影响的实例。
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    pub(super) items: ItemList,
    pub(super) pending: String,
    pub(super) focus: Focus,
    pub(super) labels: Labels,
}

/// 当前获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Entry,
    Submit,
}

/// 界面上的固定文案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub heading: String,
    pub placeholder: String,
    pub submit: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            heading: "To-Do List".to_string(),
            placeholder: "Add to-do".to_string(),
            submit: "Submit".to_string(),
        }
    }
}

impl TodoList {
    /// 创建空列表
    pub fn new(labels: Labels) -> Self {
        Self::with_state(labels, ItemList::new(), String::new())
    }

    /// 以给定的初始条目和输入文本创建
    pub fn with_state(labels: Labels, items: ItemList, pending: impl Into<String>) -> Self {
        Self {
            items,
            pending: pending.into(),
            focus: Focus::Entry,
            labels,
        }
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }
}
