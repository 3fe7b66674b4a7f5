// ==========================================
// TecDoc 零件目录 - 配置层
// ==========================================
// 职责: 语言 / 表名前缀 / 文件服务地址,支持多级覆写
// ==========================================

pub mod config_manager;
pub mod tecdoc_config;

// 重导出核心配置
pub use config_manager::ConfigManager;
pub use tecdoc_config::{ConfigError, ConfigField, TecdocConfig, DEFAULT_LANG_ID};
