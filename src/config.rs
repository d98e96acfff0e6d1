//! 配置加载
//!
//! 配置文件为 TOML 格式，默认位于 `~/.config/todo-tui/config.toml`。
//! 文件不存在时使用默认值，所有字段均可省略。

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::Level;

use crate::error::{AppError, Result};
use crate::models::{Item, ItemList};
use crate::ui::state::Labels;

pub const APP_DIR: &str = "todo-tui";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub heading: String,
    pub placeholder: String,
    pub submit_label: String,
    /// 启动时预置的条目
    pub items: Vec<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let labels = Labels::default();
        Self {
            heading: labels.heading,
            placeholder: labels.placeholder,
            submit_label: labels.submit,
            items: Vec::new(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn labels(&self) -> Labels {
        Labels {
            heading: self.heading.clone(),
            placeholder: self.placeholder.clone(),
            submit: self.submit_label.clone(),
        }
    }

    pub fn initial_items(&self) -> ItemList {
        self.items.iter().map(|text| Item::new(text.as_str())).collect()
    }

    pub fn log_level(&self) -> Result<Level> {
        Level::from_str(self.log_level.trim())
            .map_err(|_| AppError::InvalidLogLevel(self.log_level.clone()))
    }
}

/// 默认配置文件路径 (~/.config/todo-tui/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// 从 TOML 文件加载配置
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
