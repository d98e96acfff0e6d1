//! 终端待办列表
//!
//! 一个列表容器 (`ui::TodoList`) 持有条目和正在输入的文本，
//! 每个条目由无状态的 `item_view` 渲染。

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod testing;
pub mod ui;

pub use error::{AppError, Result};
pub use models::{Item, ItemList};
pub use ui::{Focus, Labels, TodoList};
