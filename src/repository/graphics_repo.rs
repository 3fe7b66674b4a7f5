// ==========================================
// TecDoc 零件目录 - 图形文件数据仓储
// ==========================================
// 职责: GRAPHICS + DOC_TYPES + LINK_GRA_ART 读取
// 图片与 PDF 共用 LINK_GRA_ART,按文件类型区分
// ==========================================

use crate::domain::graphics::{FileRecord, FileType, GraphicFile, PartFile};
use crate::domain::types::{GraphicId, PartId};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::tables::TableNames;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

pub struct GraphicsRepository {
    conn: Arc<Mutex<Connection>>,
    tables: TableNames,
}

impl GraphicsRepository {
    pub fn new(conn: Arc<Mutex<Connection>>, tables: TableNames) -> Self {
        Self { conn, tables }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 按 GRA_ID 查询文件 (文件类型缺失时扩展名为空)
    pub fn find_file(&self, id: GraphicId) -> RepositoryResult<Option<GraphicFile>> {
        let conn = self.get_conn()?;
        let sql = format!(
            r#"
            SELECT g.GRA_ID, g.GRA_DOC_TYPE, COALESCE(t.DOC_EXTENSION, ''), g.GRA_TAB_NR, g.GRA_GRD_ID
            FROM {graphics} g
            LEFT JOIN {doc_types} t ON t.DOC_TYPE = g.GRA_DOC_TYPE
            WHERE g.GRA_ID = ?1
            "#,
            graphics = self.tables.graphics(),
            doc_types = self.tables.doc_types(),
        );

        let record = conn
            .query_row(&sql, params![id], |row| map_file_record(row, 0))
            .optional()?;

        Ok(record.map(GraphicFile::classify))
    }

    /// 零件关联的全部文件 (按 LGA_GRA_ID 排序)
    pub fn list_part_files(&self, part_id: PartId) -> RepositoryResult<Vec<PartFile>> {
        let conn = self.get_conn()?;
        let sql = format!(
            r#"
            SELECT l.LGA_ART_ID,
                   g.GRA_ID, g.GRA_DOC_TYPE, COALESCE(t.DOC_EXTENSION, ''), g.GRA_TAB_NR, g.GRA_GRD_ID
            FROM {link} l
            JOIN {graphics} g ON g.GRA_ID = l.LGA_GRA_ID
            LEFT JOIN {doc_types} t ON t.DOC_TYPE = g.GRA_DOC_TYPE
            WHERE l.LGA_ART_ID = ?1
            ORDER BY l.LGA_GRA_ID
            "#,
            link = self.tables.link_gra_art(),
            graphics = self.tables.graphics(),
            doc_types = self.tables.doc_types(),
        );

        let mut stmt = conn.prepare(&sql)?;
        let files = stmt
            .query_map(params![part_id], |row| {
                Ok(PartFile {
                    part_id: row.get(0)?,
                    file: GraphicFile::classify(map_file_record(row, 1)?),
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        tracing::debug!(part_id, count = files.len(), "零件文件查询完成");
        Ok(files)
    }

    /// 零件图片 (非 PDF 类型)
    pub fn list_part_images(&self, part_id: PartId) -> RepositoryResult<Vec<GraphicFile>> {
        Ok(self
            .list_part_files(part_id)?
            .into_iter()
            .map(|link| link.file)
            .filter(|file| matches!(file, GraphicFile::Image(_)))
            .collect())
    }

    /// 零件 PDF 文档
    pub fn list_part_pdfs(&self, part_id: PartId) -> RepositoryResult<Vec<GraphicFile>> {
        Ok(self
            .list_part_files(part_id)?
            .into_iter()
            .map(|link| link.file)
            .filter(|file| matches!(file, GraphicFile::PdfFile(_)))
            .collect())
    }
}

fn map_file_record(row: &Row<'_>, offset: usize) -> SqliteResult<FileRecord> {
    Ok(FileRecord {
        id: row.get(offset)?,
        file_type: FileType {
            id: row.get(offset + 1)?,
            ext: row.get(offset + 2)?,
        },
        db_number: row.get(offset + 3)?,
        filename: row.get(offset + 4)?,
    })
}
