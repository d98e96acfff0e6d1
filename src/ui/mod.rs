//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): TodoList 结构体及其状态数据
//! - View (view/): 纯函数，将 State 映射为 UI 和语义树
//! - Intent (actions.rs): 用户交互转化为明确的语义化 Action

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::{handle_key_event, handle_mouse_event};
pub use state::{Focus, Labels, TodoList};
pub use view::render;
