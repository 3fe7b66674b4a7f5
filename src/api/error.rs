// ==========================================
// TecDoc 零件目录 - API层错误类型
// ==========================================
// 职责: 汇总配置错误与仓储错误
// ==========================================

use crate::config::ConfigError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("数据访问失败: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ApiResult<T> = Result<T, ApiError>;
