// ==========================================
// TecDoc 零件目录 - API 层
// ==========================================
// 职责: 对外查询接口,配置显式传入
// ==========================================

pub mod catalog_api;
pub mod error;

pub use catalog_api::{CatalogApi, PartFileView};
pub use error::{ApiError, ApiResult};
