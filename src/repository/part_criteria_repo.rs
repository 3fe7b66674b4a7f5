// ==========================================
// TecDoc 零件目录 - 零件特征数据仓储
// ==========================================
// 职责: 读取 ARTICLE_CRITERIA,连同特征与描述文本一次查询返回
// 不指定 ORDER BY,按数据源返回顺序;排序与过滤由解析引擎负责
// ==========================================

use crate::domain::criteria::PartCriteria;
use crate::domain::types::{DescriptionRef, LanguageId, PartId};
use crate::repository::criteria_repo::{
    criteria_columns, criteria_joins, map_criteria, CRITERIA_COLUMN_COUNT,
};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::tables::{designation_text_column, TableNames};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

pub struct PartCriteriaRepository {
    conn: Arc<Mutex<Connection>>,
    tables: TableNames,
}

impl PartCriteriaRepository {
    pub fn new(conn: Arc<Mutex<Connection>>, tables: TableNames) -> Self {
        Self { conn, tables }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 查询零件的全部特征行
    ///
    /// 特征行引用的 CRITERIA 不存在时该行不返回;名称文本按 `language_id` 关联,
    /// 不存在时为 None。
    pub fn find_by_part(
        &self,
        part_id: PartId,
        language_id: LanguageId,
    ) -> RepositoryResult<Vec<PartCriteria>> {
        let conn = self.get_conn()?;
        let sql = format!(
            r#"
            SELECT {criteria_columns},
                   acr.ACR_ART_ID, acr.ACR_GA_ID, acr.ACR_VALUE,
                   acr.ACR_KV_DES_ID, {kv_text}, acr.ACR_KV_KT_ID,
                   acr.ACR_SORT, acr.ACR_DISPLAY
            FROM {article_criteria} acr
            JOIN {criteria} c ON c.CRI_ID = acr.ACR_CRI_ID
            {criteria_joins}
            {kv_join}
            WHERE acr.ACR_ART_ID = ?2
            "#,
            criteria_columns = criteria_columns(),
            kv_text = designation_text_column("acr_kv"),
            article_criteria = self.tables.article_criteria(),
            criteria = self.tables.criteria(),
            criteria_joins = criteria_joins(&self.tables),
            kv_join = self.tables.designation_join("acr_kv", "acr.ACR_KV_DES_ID"),
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![language_id, part_id], map_part_criteria)?
            .collect::<SqliteResult<Vec<_>>>()?;

        tracing::debug!(part_id, language_id, rows = rows.len(), "零件特征行查询完成");
        Ok(rows)
    }
}

fn map_part_criteria(row: &Row<'_>) -> SqliteResult<PartCriteria> {
    let criteria = map_criteria(row, 0)?;
    let base = CRITERIA_COLUMN_COUNT;
    let sorting: Option<i64> = row.get(base + 6)?;
    let display: Option<i64> = row.get(base + 7)?;

    Ok(PartCriteria {
        part_id: row.get(base)?,
        group_id: row.get(base + 1)?,
        value: value_as_text(row.get_ref(base + 2)?),
        description: DescriptionRef::from_column(row.get(base + 3)?),
        description_text: row.get(base + 4)?,
        key_table_id: row.get(base + 5)?,
        sorting: sorting.unwrap_or(0),
        // 未设置显示标志时视为显示
        display: display.map_or(true, |v| v != 0),
        criteria,
    })
}

/// ACR_VALUE 按原始字符串读取
///
/// 外部库的列亲和性可能把数值存成 INTEGER / REAL,统一转为文本。
fn value_as_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
