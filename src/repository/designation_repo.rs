// ==========================================
// TecDoc 零件目录 - 名称数据仓储
// ==========================================
// 职责: 按 (DES_ID, 语言) 读取名称文本
// 缺失引用按空文本处理,不报错
// ==========================================

use crate::domain::designation::Designation;
use crate::domain::types::{DesignationId, LanguageId};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::tables::TableNames;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

pub struct DesignationRepository {
    conn: Arc<Mutex<Connection>>,
    tables: TableNames,
}

impl DesignationRepository {
    pub fn new(conn: Arc<Mutex<Connection>>, tables: TableNames) -> Self {
        Self { conn, tables }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 查询某语言下的名称
    ///
    /// # 返回
    /// - Ok(Some(Designation)): 找到
    /// - Ok(None): 该 id 在此语言下不存在
    pub fn find(
        &self,
        id: DesignationId,
        language_id: LanguageId,
    ) -> RepositoryResult<Option<Designation>> {
        let conn = self.get_conn()?;
        let sql = format!(
            r#"
            SELECT d.DES_ID, d.DES_LNG_ID, COALESCE(t.TEX_TEXT, '')
            FROM {des} d
            LEFT JOIN {tex} t ON t.TEX_ID = d.DES_TEX_ID
            WHERE d.DES_ID = ?1 AND d.DES_LNG_ID = ?2
            "#,
            des = self.tables.designations(),
            tex = self.tables.des_texts(),
        );

        let designation = conn
            .query_row(&sql, params![id, language_id], |row| {
                Ok(Designation {
                    id: row.get(0)?,
                    language_id: row.get(1)?,
                    text: row.get(2)?,
                })
            })
            .optional()?;

        Ok(designation)
    }

    /// 名称文本,引用为空或缺失时返回空串
    pub fn text_or_empty(
        &self,
        id: Option<DesignationId>,
        language_id: LanguageId,
    ) -> RepositoryResult<String> {
        let Some(id) = id else {
            return Ok(String::new());
        };

        match self.find(id, language_id)? {
            Some(designation) => Ok(designation.text),
            None => {
                tracing::debug!(designation_id = id, language_id, "名称缺失, 按空文本处理");
                Ok(String::new())
            }
        }
    }
}
