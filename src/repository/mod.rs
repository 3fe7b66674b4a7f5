// ==========================================
// TecDoc 零件目录 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供参考数据只读访问,屏蔽表结构细节
// 约束: 所有值参数化绑定,表名前缀在配置层校验
// ==========================================

pub mod criteria_repo;
pub mod designation_repo;
pub mod error;
pub mod graphics_repo;
pub mod part_criteria_repo;
pub mod tables;

// 重导出核心仓储
pub use criteria_repo::CriteriaRepository;
pub use designation_repo::DesignationRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use graphics_repo::GraphicsRepository;
pub use part_criteria_repo::PartCriteriaRepository;
pub use tables::TableNames;
