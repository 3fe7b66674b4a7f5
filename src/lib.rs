// ==========================================
// TecDoc 零件目录 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 只读参考数据访问层
// ==========================================

// 领域层 - 实体与派生值
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 特征值解析
pub mod engine;

// 配置层
pub mod config;

// 数据库基础设施
pub mod db;

// 日志系统
pub mod logging;

// API 层
pub mod api;

#[cfg(test)]
pub(crate) mod test_support;

// ==========================================
// 重导出核心类型
// ==========================================

pub use api::{ApiError, ApiResult, CatalogApi, PartFileView};
pub use config::{ConfigManager, TecdocConfig};
pub use domain::{
    Criteria, CriteriaCatalog, CriteriaType, CriteriaValue, DescriptionRef, FileRecord, FileType,
    GraphicFile, PartCriteria,
};
pub use engine::PartCriteriaResolver;
pub use repository::{RepositoryError, RepositoryResult};

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "TecDoc 零件目录";
