// ==========================================
// TecDoc 零件目录 - 运行配置
// ==========================================
// 配置项: LANG_ID / DB_PREFIX / FILE_HOST
// 以显式值传入仓储,不使用全局状态
// ==========================================

use crate::domain::types::LanguageId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 默认显示语言 (TecDoc 语言表中的俄语)
pub const DEFAULT_LANG_ID: LanguageId = 16;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置值无效 (key={key}): {value}")]
    InvalidValue { key: String, value: String },

    #[error("表名前缀只允许字母、数字和下划线: {0}")]
    InvalidPrefix(String),

    #[error("配置读取失败: {0}")]
    Storage(String),
}

impl From<rusqlite::Error> for ConfigError {
    fn from(err: rusqlite::Error) -> Self {
        ConfigError::Storage(err.to_string())
    }
}

// ==========================================
// ConfigField - 配置项
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    LangId,
    DbPrefix,
    FileHost,
}

impl ConfigField {
    pub const ALL: [ConfigField; 3] = [ConfigField::LangId, ConfigField::DbPrefix, ConfigField::FileHost];

    /// config_kv 表中的键
    pub fn kv_key(&self) -> &'static str {
        match self {
            ConfigField::LangId => "tecdoc/lang_id",
            ConfigField::DbPrefix => "tecdoc/db_prefix",
            ConfigField::FileHost => "tecdoc/file_host",
        }
    }

    /// 环境变量名
    pub fn env_var(&self) -> &'static str {
        match self {
            ConfigField::LangId => "TECDOC_LANG_ID",
            ConfigField::DbPrefix => "TECDOC_DB_PREFIX",
            ConfigField::FileHost => "TECDOC_FILE_HOST",
        }
    }
}

// ==========================================
// TecdocConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TecdocConfig {
    pub lang_id: LanguageId,
    pub db_prefix: String,
    pub file_host: String,
}

impl Default for TecdocConfig {
    fn default() -> Self {
        Self {
            lang_id: DEFAULT_LANG_ID,
            db_prefix: String::new(),
            file_host: String::new(),
        }
    }
}

impl TecdocConfig {
    /// 写入单个配置项 (`key` 仅用于错误信息)
    pub fn set_field(&mut self, field: ConfigField, key: &str, raw: &str) -> Result<(), ConfigError> {
        match field {
            ConfigField::LangId => {
                let lang_id = raw
                    .trim()
                    .parse::<LanguageId>()
                    .ok()
                    .filter(|id| *id > 0)
                    .ok_or_else(|| ConfigError::InvalidValue {
                        key: key.to_string(),
                        value: raw.to_string(),
                    })?;
                self.lang_id = lang_id;
            }
            ConfigField::DbPrefix => self.db_prefix = raw.trim().to_string(),
            ConfigField::FileHost => self.file_host = raw.trim().to_string(),
        }
        Ok(())
    }

    /// 用环境变量覆写
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// 用任意查找函数覆写 (空值视为未设置)
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        for field in ConfigField::ALL {
            if let Some(raw) = lookup(field.env_var()).filter(|v| !v.trim().is_empty()) {
                self.set_field(field, field.env_var(), &raw)?;
            }
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lang_id <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "lang_id".to_string(),
                value: self.lang_id.to_string(),
            });
        }
        // 前缀会直接拼接进 SQL
        if !self
            .db_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ConfigError::InvalidPrefix(self.db_prefix.clone()));
        }
        Ok(())
    }
}
