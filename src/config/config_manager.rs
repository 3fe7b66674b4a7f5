// ==========================================
// TecDoc 零件目录 - 配置管理器
// ==========================================
// 职责: 多级覆写加载配置
// 优先级: 默认值 < config_kv 表 (scope_id='global') < 环境变量
// config_kv 表不存在时跳过该层
// ==========================================

use crate::config::tecdoc_config::{ConfigError, ConfigField, TecdocConfig};
use crate::db::table_exists;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

/// 配置表名 (不加 DB_PREFIX)
pub const CONFIG_TABLE: &str = "config_kv";

pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 读取 global scope 的配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在或 config_kv 表不存在
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| ConfigError::Storage(format!("锁获取失败: {}", e)))?;

        if !table_exists(&conn, CONFIG_TABLE)? {
            return Ok(None);
        }

        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    /// 默认值 + config_kv
    pub fn load_stored(&self) -> Result<TecdocConfig, ConfigError> {
        let mut config = TecdocConfig::default();
        for field in ConfigField::ALL {
            if let Some(raw) = self.get_global_config_value(field.kv_key())? {
                config.set_field(field, field.kv_key(), &raw)?;
            }
        }
        Ok(config)
    }

    /// 完整加载: 默认值 + config_kv + 环境变量, 并校验
    pub fn load(&self) -> Result<TecdocConfig, ConfigError> {
        let config = self.load_stored()?.apply_env()?;
        config.validate()?;
        tracing::info!(
            lang_id = config.lang_id,
            db_prefix = %config.db_prefix,
            file_host = %config.file_host,
            "配置加载完成"
        );
        Ok(config)
    }
}
