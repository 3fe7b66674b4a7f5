// ==========================================
// TecDoc 零件目录 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 缺失引用 / 退化行 / 语言不匹配 均在本地消化,不作为错误上报
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("数据源不可用: {0}")]
    DataUnavailable(String),

    #[error("数据库锁获取失败: {0}")]
    LockError(String),

    #[error("字段值错误 (field={field}): {message}")]
    FieldValueError { field: String, message: String },
}

// 实现 From<rusqlite::Error>
impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::InvalidColumnType(_, name, ty) => RepositoryError::FieldValueError {
                field: name,
                message: format!("unexpected column type {}", ty),
            },
            rusqlite::Error::FromSqlConversionFailure(idx, ty, e) => {
                RepositoryError::FieldValueError {
                    field: format!("#{}", idx),
                    message: format!("{} ({})", e, ty),
                }
            }
            _ => RepositoryError::DataUnavailable(err.to_string()),
        }
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
