//! 日志初始化
//!
//! 终端由界面独占，日志写入文件 (~/.local/share/todo-tui/todo-tui.log)。

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;

use crate::config::APP_DIR;
use crate::error::{AppError, Result};

/// 默认日志文件路径，必要时创建目录
pub fn default_log_path() -> Result<PathBuf> {
    let dir = dirs::data_dir().ok_or(AppError::NoDataDir)?.join(APP_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir.join("todo-tui.log"))
}

/// 安装全局订阅器，以追加方式写入 `path`
pub fn init(path: &Path, level: Level) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
