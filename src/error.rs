//! 应用错误类型

use std::path::PathBuf;

use thiserror::Error;

/// 终端程序运行过程中可能出现的错误
///
/// 列表组件本身的操作不会失败，这里只覆盖配置、日志和终端 IO。
#[derive(Debug, Error)]
pub enum AppError {
    /// 终端或文件 IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 配置文件格式错误
    #[error("Failed to parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// 无法识别的日志级别
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// 无法获取用户数据目录
    #[error("User data directory is unavailable")]
    NoDataDir,

    /// 日志订阅器初始化失败
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
