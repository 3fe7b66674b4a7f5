// ==========================================
// 单元测试辅助: 内存库建表与数据填充
// ==========================================

use crate::repository::tables::TableNames;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

pub fn create_reference_schema(conn: &Connection, tables: &TableNames) {
    conn.execute_batch(&format!(
        r#"
        CREATE TABLE {des_texts} (
            TEX_ID INTEGER PRIMARY KEY,
            TEX_TEXT TEXT
        );
        CREATE TABLE {designations} (
            DES_ID INTEGER NOT NULL,
            DES_LNG_ID INTEGER NOT NULL,
            DES_TEX_ID INTEGER,
            PRIMARY KEY (DES_ID, DES_LNG_ID)
        );
        CREATE TABLE {criteria} (
            CRI_ID INTEGER PRIMARY KEY,
            CRI_DES_ID INTEGER,
            CRI_SHORT_DES_ID INTEGER,
            CRI_UNIT_DES_ID INTEGER,
            CRI_TYPE TEXT,
            CRI_IS_INTERVAL INTEGER,
            CRI_SUCCESSOR INTEGER
        );
        CREATE TABLE {article_criteria} (
            ACR_ART_ID INTEGER NOT NULL,
            ACR_GA_ID INTEGER NOT NULL,
            ACR_SORT INTEGER,
            ACR_CRI_ID INTEGER NOT NULL,
            ACR_VALUE TEXT,
            ACR_KV_DES_ID INTEGER,
            ACR_KV_KT_ID INTEGER,
            ACR_DISPLAY INTEGER
        );
        CREATE TABLE {doc_types} (
            DOC_TYPE INTEGER PRIMARY KEY,
            DOC_EXTENSION TEXT
        );
        CREATE TABLE {graphics} (
            GRA_ID INTEGER PRIMARY KEY,
            GRA_DOC_TYPE INTEGER NOT NULL,
            GRA_TAB_NR INTEGER NOT NULL,
            GRA_GRD_ID INTEGER NOT NULL
        );
        CREATE TABLE {link_gra_art} (
            LGA_ART_ID INTEGER NOT NULL,
            LGA_GRA_ID INTEGER NOT NULL
        );
        "#,
        des_texts = tables.des_texts(),
        designations = tables.designations(),
        criteria = tables.criteria(),
        article_criteria = tables.article_criteria(),
        doc_types = tables.doc_types(),
        graphics = tables.graphics(),
        link_gra_art = tables.link_gra_art(),
    ))
    .unwrap();
}

pub fn setup_test_db(tables: &TableNames) -> Arc<Mutex<Connection>> {
    let conn = Connection::open_in_memory().unwrap();
    crate::db::configure_sqlite_connection(&conn).unwrap();
    create_reference_schema(&conn, tables);
    Arc::new(Mutex::new(conn))
}

pub fn insert_designation(conn: &Connection, tables: &TableNames, des_id: i64, lang: i64, text: &str) {
    conn.execute(
        &format!("INSERT INTO {} (TEX_TEXT) VALUES (?1)", tables.des_texts()),
        params![text],
    )
    .unwrap();
    let tex_id = conn.last_insert_rowid();
    conn.execute(
        &format!(
            "INSERT INTO {} (DES_ID, DES_LNG_ID, DES_TEX_ID) VALUES (?1, ?2, ?3)",
            tables.designations()
        ),
        params![des_id, lang, tex_id],
    )
    .unwrap();
}

#[allow(clippy::too_many_arguments)]
pub fn insert_criteria(
    conn: &Connection,
    tables: &TableNames,
    id: i64,
    des_id: Option<i64>,
    short_des_id: Option<i64>,
    unit_des_id: Option<i64>,
    cri_type: &str,
    successor: Option<i64>,
) {
    conn.execute(
        &format!(
            "INSERT INTO {} (CRI_ID, CRI_DES_ID, CRI_SHORT_DES_ID, CRI_UNIT_DES_ID, CRI_TYPE, CRI_IS_INTERVAL, CRI_SUCCESSOR) \
             VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6)",
            tables.criteria()
        ),
        params![id, des_id, short_des_id, unit_des_id, cri_type, successor],
    )
    .unwrap();
}

pub fn insert_part_criteria(
    conn: &Connection,
    tables: &TableNames,
    part_id: i64,
    criteria_id: i64,
    sort: i64,
    value: Option<&str>,
    kv_des_id: Option<i64>,
) {
    conn.execute(
        &format!(
            "INSERT INTO {} (ACR_ART_ID, ACR_GA_ID, ACR_SORT, ACR_CRI_ID, ACR_VALUE, ACR_KV_DES_ID, ACR_DISPLAY) \
             VALUES (?1, 1, ?2, ?3, ?4, ?5, 1)",
            tables.article_criteria()
        ),
        params![part_id, sort, criteria_id, value, kv_des_id],
    )
    .unwrap();
}

pub fn insert_graphic(
    conn: &Connection,
    tables: &TableNames,
    gra_id: i64,
    doc_type: i64,
    tab_nr: i64,
    grd_id: i64,
) {
    conn.execute(
        &format!(
            "INSERT INTO {} (GRA_ID, GRA_DOC_TYPE, GRA_TAB_NR, GRA_GRD_ID) VALUES (?1, ?2, ?3, ?4)",
            tables.graphics()
        ),
        params![gra_id, doc_type, tab_nr, grd_id],
    )
    .unwrap();
}

pub fn insert_doc_type(conn: &Connection, tables: &TableNames, doc_type: i64, ext: &str) {
    conn.execute(
        &format!(
            "INSERT INTO {} (DOC_TYPE, DOC_EXTENSION) VALUES (?1, ?2)",
            tables.doc_types()
        ),
        params![doc_type, ext],
    )
    .unwrap();
}

pub fn link_graphic(conn: &Connection, tables: &TableNames, part_id: i64, gra_id: i64) {
    conn.execute(
        &format!(
            "INSERT INTO {} (LGA_ART_ID, LGA_GRA_ID) VALUES (?1, ?2)",
            tables.link_gra_art()
        ),
        params![part_id, gra_id],
    )
    .unwrap();
}

/// 表改名为 `{table}_RAW`,原表名改为指向它的视图
pub fn move_behind_view(conn: &Connection, table: &str) {
    conn.execute_batch(&format!(
        "ALTER TABLE {table} RENAME TO {table}_RAW; CREATE VIEW {table} AS SELECT * FROM {table}_RAW;"
    ))
    .unwrap();
}
