// ==========================================
// TecDoc 零件目录 - 名称 (Designation) 领域模型
// ==========================================
// 对齐: DESIGNATIONS + DES_TEXTS 表
// 只读参考数据
// ==========================================

use crate::domain::types::{DesignationId, LanguageId};
use serde::Serialize;

/// 某语言下的名称文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Designation {
    pub id: DesignationId,          // DES_ID
    pub language_id: LanguageId,    // DES_LNG_ID
    pub text: String,               // DES_TEXTS.TEX_TEXT
}
