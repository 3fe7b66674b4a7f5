// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: config_kv 覆写与校验
// ==========================================


use tecdoc_catalog::config::{ConfigError, ConfigManager, DEFAULT_LANG_ID};
use test_helpers::{create_test_db, insert_config, open_shared};

#[test]
fn test_load_stored_without_config_table() {
    let (_temp_file, db_path) = create_test_db("").expect("Failed to create test db");
    let manager = ConfigManager::from_connection(open_shared(&db_path).unwrap());

    let config = manager.load_stored().unwrap();
    assert_eq!(config.lang_id, DEFAULT_LANG_ID);
    assert_eq!(config.db_prefix, "");
}

#[test]
fn test_load_stored_overrides() {
    let (_temp_file, db_path) = create_test_db("").expect("Failed to create test db");
    let conn = open_shared(&db_path).unwrap();
    {
        let c = conn.lock().unwrap();
        insert_config(&c, "tecdoc/lang_id", "4").unwrap();
        insert_config(&c, "tecdoc/db_prefix", "TD_").unwrap();
        insert_config(&c, "tecdoc/file_host", "http://cdn.example.com/").unwrap();
    }
    let manager = ConfigManager::from_connection(conn);

    let config = manager.load_stored().unwrap();
    assert_eq!(config.lang_id, 4);
    assert_eq!(config.db_prefix, "TD_");
    assert_eq!(config.file_host, "http://cdn.example.com/");

    // 环境变量优先于 config_kv
    let config = config
        .apply_env_with(|name| (name == "TECDOC_LANG_ID").then(|| "1".to_string()))
        .unwrap();
    assert_eq!(config.lang_id, 1);
    assert_eq!(config.db_prefix, "TD_");
}

#[test]
fn test_stored_prefix_is_validated() {
    let (_temp_file, db_path) = create_test_db("").expect("Failed to create test db");
    let conn = open_shared(&db_path).unwrap();
    insert_config(&conn.lock().unwrap(), "tecdoc/db_prefix", "x'; --").unwrap();
    let manager = ConfigManager::from_connection(conn);

    let config = manager.load_stored().unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::InvalidPrefix(_))));
}
