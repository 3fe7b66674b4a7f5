// ==========================================
// TecDoc 零件目录 - 特征领域模型
// ==========================================
// 对齐: CRITERIA / ARTICLE_CRITERIA 表
// 名称文本在查询时按语言一次性关联,不做逐行二次查询
// ==========================================

use crate::domain::types::{
    CriteriaId, CriteriaType, DescriptionRef, DesignationId, GroupId, PartId, ValueLocation,
};
use serde::Serialize;

// ==========================================
// Criteria - 特征
// ==========================================
// 文本字段为 None 表示该名称在当前语言下不存在
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Criteria {
    pub id: CriteriaId,                              // CRI_ID
    pub designation_id: Option<DesignationId>,       // CRI_DES_ID
    pub designation: Option<String>,
    pub short_designation_id: Option<DesignationId>, // CRI_SHORT_DES_ID
    pub short_designation: Option<String>,
    pub unit_designation_id: Option<DesignationId>,  // CRI_UNIT_DES_ID
    pub unit: Option<String>,
    pub criteria_type: CriteriaType,                 // CRI_TYPE
    pub is_interval: bool,                           // CRI_IS_INTERVAL
    pub successor_id: Option<CriteriaId>,            // CRI_SUCCESSOR
}

impl Criteria {
    /// 显示名称: 简称优先,其次全称,都没有则为空
    pub fn display_value(&self) -> &str {
        non_empty(self.short_designation.as_deref())
            .or_else(|| non_empty(self.designation.as_deref()))
            .unwrap_or("")
    }

    /// 单位文本: 无单位引用或文本缺失时为空
    pub fn unit_label(&self) -> &str {
        match self.unit_designation_id {
            Some(_) => self.unit.as_deref().unwrap_or(""),
            None => "",
        }
    }

    /// 全称与简称均存在于当前语言
    pub fn has_language_texts(&self) -> bool {
        self.designation.is_some() && self.short_designation.is_some()
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

// ==========================================
// PartCriteria - 零件特征值
// ==========================================
// 实际身份为 (part_id, criteria_id, group_id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartCriteria {
    pub part_id: PartId,                  // ACR_ART_ID
    pub group_id: GroupId,                // ACR_GA_ID
    pub value: Option<String>,            // ACR_VALUE
    pub description: DescriptionRef,      // ACR_KV_DES_ID
    pub description_text: Option<String>,
    pub key_table_id: Option<i64>,        // ACR_KV_KT_ID
    pub sorting: i64,                     // ACR_SORT
    pub display: bool,                    // ACR_DISPLAY
    pub criteria: Criteria,               // ACR_CRI_ID (预加载)
}

impl PartCriteria {
    pub fn identity(&self) -> (PartId, CriteriaId, GroupId) {
        (self.part_id, self.criteria.id, self.group_id)
    }

    pub fn is_degenerate(&self) -> bool {
        self.description.is_degenerate()
    }

    /// 行值: 原始值非空时优先,否则取描述文本
    pub fn value_for_row(&self) -> &str {
        non_empty(self.value.as_deref())
            .or(self.description_text.as_deref())
            .unwrap_or("")
    }

    /// 已填充的列是否与特征类型码一致
    pub fn matches_type(&self) -> bool {
        let has_value = non_empty(self.value.as_deref()).is_some();
        let has_description = self.description.designation_id().is_some();
        match self.criteria.criteria_type.value_location() {
            ValueLocation::RawValue => has_value,
            ValueLocation::Description => has_description,
            ValueLocation::Implicit => !has_value && !has_description,
            ValueLocation::Unspecified => true,
        }
    }
}

// ==========================================
// CriteriaValue - 零件特征展示项
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriteriaValue {
    pub criteria_id: CriteriaId,
    pub criteria_display: String,
    pub value: String,
    pub unit: String,
    pub criteria_type: CriteriaType,
    pub key_table_id: Option<i64>, // 仅 K 类特征携带
    pub sorting: i64,
    pub display: bool,
}

impl From<&PartCriteria> for CriteriaValue {
    fn from(row: &PartCriteria) -> Self {
        Self {
            criteria_id: row.criteria.id,
            criteria_display: row.criteria.display_value().to_string(),
            value: row.value_for_row().to_string(),
            unit: row.criteria.unit_label().to_string(),
            criteria_type: row.criteria.criteria_type.clone(),
            key_table_id: row
                .key_table_id
                .filter(|_| row.criteria.criteria_type == CriteriaType::KeyValue),
            sorting: row.sorting,
            display: row.display,
        }
    }
}
