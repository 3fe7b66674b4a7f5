// ==========================================
// TecDoc 零件目录 - 特征数据仓储
// ==========================================
// 职责: 读取 CRITERIA 表,按语言一次性关联全称/简称/单位文本
// 红线: Repository 只做数据映射
// ==========================================

use crate::domain::catalog::CriteriaCatalog;
use crate::domain::criteria::Criteria;
use crate::domain::types::{CriteriaId, CriteriaType, LanguageId};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::tables::{designation_text_column, TableNames};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

// ===== 特征列映射 (与 part_criteria_repo 共用) =====

/// `criteria_columns()` 产生的列数
pub(crate) const CRITERIA_COLUMN_COUNT: usize = 10;

/// 特征列, CRITERIA 别名固定为 `c`
pub(crate) fn criteria_columns() -> String {
    format!(
        "c.CRI_ID, c.CRI_DES_ID, {}, c.CRI_SHORT_DES_ID, {}, c.CRI_UNIT_DES_ID, {}, \
         c.CRI_TYPE, c.CRI_IS_INTERVAL, c.CRI_SUCCESSOR",
        designation_text_column("cri_des"),
        designation_text_column("cri_sdes"),
        designation_text_column("cri_udes"),
    )
}

pub(crate) fn criteria_joins(tables: &TableNames) -> String {
    [
        tables.designation_join("cri_des", "c.CRI_DES_ID"),
        tables.designation_join("cri_sdes", "c.CRI_SHORT_DES_ID"),
        tables.designation_join("cri_udes", "c.CRI_UNIT_DES_ID"),
    ]
    .join(" ")
}

/// 从 `offset` 列开始映射一条特征
pub(crate) fn map_criteria(row: &Row<'_>, offset: usize) -> SqliteResult<Criteria> {
    let criteria_type: Option<String> = row.get(offset + 7)?;
    let is_interval: Option<i64> = row.get(offset + 8)?;
    let successor_id: Option<CriteriaId> = row.get(offset + 9)?;

    Ok(Criteria {
        id: row.get(offset)?,
        designation_id: row.get(offset + 1)?,
        designation: row.get(offset + 2)?,
        short_designation_id: row.get(offset + 3)?,
        short_designation: row.get(offset + 4)?,
        unit_designation_id: row.get(offset + 5)?,
        unit: row.get(offset + 6)?,
        criteria_type: CriteriaType::from_db_str(criteria_type.as_deref().unwrap_or("")),
        is_interval: is_interval.unwrap_or(0) != 0,
        // 0 表示无后继
        successor_id: successor_id.filter(|id| *id > 0),
    })
}

// ==========================================
// CriteriaRepository - 特征仓储
// ==========================================
pub struct CriteriaRepository {
    conn: Arc<Mutex<Connection>>,
    tables: TableNames,
}

impl CriteriaRepository {
    pub fn new(conn: Arc<Mutex<Connection>>, tables: TableNames) -> Self {
        Self { conn, tables }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn select_sql(&self, where_clause: &str) -> String {
        format!(
            "SELECT {columns} FROM {criteria} c {joins} {where_clause} ORDER BY c.CRI_ID",
            columns = criteria_columns(),
            criteria = self.tables.criteria(),
            joins = criteria_joins(&self.tables),
            where_clause = where_clause,
        )
    }

    /// 查询当前语言下的特征列表
    ///
    /// 仅返回简称存在于 `language_id` 的特征;全称、简称、单位文本随查询一并返回。
    pub fn list_criteria(&self, language_id: LanguageId) -> RepositoryResult<Vec<Criteria>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&self.select_sql("WHERE cri_sdes.DES_ID IS NOT NULL"))?;

        let criteria = stmt
            .query_map(params![language_id], |row| map_criteria(row, 0))?
            .collect::<SqliteResult<Vec<_>>>()?;

        tracing::debug!(language_id, count = criteria.len(), "特征列表查询完成");
        Ok(criteria)
    }

    /// 按 id 查询 (不按简称语言过滤, 缺失文本为 None)
    pub fn find_by_id(
        &self,
        id: CriteriaId,
        language_id: LanguageId,
    ) -> RepositoryResult<Option<Criteria>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&self.select_sql("WHERE c.CRI_ID = ?2"))?;

        let criteria = stmt
            .query_row(params![language_id, id], |row| map_criteria(row, 0))
            .optional()?;

        Ok(criteria)
    }

    /// 加载全部特征为按 id 索引的目录
    pub fn load_catalog(&self, language_id: LanguageId) -> RepositoryResult<CriteriaCatalog> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&self.select_sql(""))?;

        let criteria = stmt
            .query_map(params![language_id], |row| map_criteria(row, 0))?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(CriteriaCatalog::new(criteria))
    }
}
