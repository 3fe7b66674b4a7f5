// ==========================================
// TecDoc 零件目录 - 目录查询 API
// ==========================================
// 职责: 绑定配置与仓储,按配置语言提供查询
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::TecdocConfig;
use crate::domain::catalog::CriteriaCatalog;
use crate::domain::criteria::{Criteria, CriteriaValue};
use crate::domain::graphics::GraphicFile;
use crate::domain::types::{DesignationId, GraphicId, PartId};
use crate::engine::PartCriteriaResolver;
use crate::repository::{
    CriteriaRepository, DesignationRepository, GraphicsRepository, PartCriteriaRepository,
    TableNames,
};
use rusqlite::Connection;
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// 零件文件展示项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartFileView {
    pub id: GraphicId,
    pub kind: &'static str,
    pub relative_path: String,
    pub url: String,
}

impl PartFileView {
    fn new(file: &GraphicFile, file_host: &str) -> Self {
        Self {
            id: file.record().id,
            kind: file.kind(),
            relative_path: file.relative_path(),
            url: file.absolute_path(file_host),
        }
    }
}

pub struct CatalogApi {
    config: TecdocConfig,
    designation_repo: Arc<DesignationRepository>,
    criteria_repo: Arc<CriteriaRepository>,
    graphics_repo: Arc<GraphicsRepository>,
    resolver: PartCriteriaResolver,
}

impl CatalogApi {
    /// 校验配置并创建仓储
    pub fn new(conn: Arc<Mutex<Connection>>, config: TecdocConfig) -> ApiResult<Self> {
        config.validate()?;
        let tables = TableNames::new(config.db_prefix.clone());

        let part_criteria_repo = Arc::new(PartCriteriaRepository::new(conn.clone(), tables.clone()));

        Ok(Self {
            designation_repo: Arc::new(DesignationRepository::new(conn.clone(), tables.clone())),
            criteria_repo: Arc::new(CriteriaRepository::new(conn.clone(), tables.clone())),
            graphics_repo: Arc::new(GraphicsRepository::new(conn, tables)),
            resolver: PartCriteriaResolver::new(part_criteria_repo),
            config,
        })
    }

    pub fn config(&self) -> &TecdocConfig {
        &self.config
    }

    pub fn list_criteria(&self) -> ApiResult<Vec<Criteria>> {
        Ok(self.criteria_repo.list_criteria(self.config.lang_id)?)
    }

    pub fn criteria_catalog(&self) -> ApiResult<CriteriaCatalog> {
        Ok(self.criteria_repo.load_catalog(self.config.lang_id)?)
    }

    pub fn designation_text(&self, id: Option<DesignationId>) -> ApiResult<String> {
        Ok(self.designation_repo.text_or_empty(id, self.config.lang_id)?)
    }

    pub fn list_part_criteria(&self, part_id: PartId) -> ApiResult<Vec<CriteriaValue>> {
        validate_part_id(part_id)?;
        Ok(self.resolver.list_for_part(part_id, self.config.lang_id)?)
    }

    /// 零件文件: 先图片后 PDF
    pub fn list_part_files(&self, part_id: PartId) -> ApiResult<Vec<PartFileView>> {
        validate_part_id(part_id)?;
        let host = &self.config.file_host;

        let images = self.graphics_repo.list_part_images(part_id)?;
        let pdfs = self.graphics_repo.list_part_pdfs(part_id)?;

        Ok(images
            .iter()
            .chain(pdfs.iter())
            .map(|file| PartFileView::new(file, host))
            .collect())
    }
}

fn validate_part_id(part_id: PartId) -> ApiResult<()> {
    if part_id <= 0 {
        return Err(ApiError::InvalidInput(format!("part_id 必须为正数: {}", part_id)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::setup_test_db;

    #[test]
    fn test_rejects_invalid_prefix() {
        let conn = setup_test_db(&TableNames::default());
        let config = TecdocConfig {
            db_prefix: "bad-prefix".to_string(),
            ..TecdocConfig::default()
        };
        assert!(matches!(CatalogApi::new(conn, config), Err(ApiError::Config(_))));
    }

    #[test]
    fn test_rejects_non_positive_part_id() {
        let conn = setup_test_db(&TableNames::default());
        let api = CatalogApi::new(conn, TecdocConfig::default()).unwrap();
        assert!(matches!(api.list_part_criteria(0), Err(ApiError::InvalidInput(_))));
        assert!(matches!(api.list_part_files(-3), Err(ApiError::InvalidInput(_))));
    }
}
