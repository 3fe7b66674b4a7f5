// ==========================================
// TecDoc 零件目录 - 领域模型层
// ==========================================
// 职责: 定义参考数据实体与派生值规则
// 红线: 不含数据访问逻辑
// ==========================================

pub mod catalog;
pub mod criteria;
pub mod designation;
pub mod graphics;
pub mod types;

// 重导出核心类型
pub use catalog::CriteriaCatalog;
pub use criteria::{Criteria, CriteriaValue, PartCriteria};
pub use designation::Designation;
pub use graphics::{FileRecord, FileType, GraphicFile, PartFile};
pub use types::{
    CriteriaId, CriteriaType, DescriptionRef, DesignationId, FileTypeId, GraphicId, GroupId,
    LanguageId, PartId, ValueLocation,
};
