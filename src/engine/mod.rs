// ==========================================
// TecDoc 零件目录 - 引擎层
// ==========================================
// 职责: 特征值解析规则,不拼 SQL
// ==========================================

pub mod part_criteria_resolver;

// 重导出核心引擎
pub use part_criteria_resolver::{resolve_rows, PartCriteriaResolver};
