// ==========================================
// TecDoc 零件目录 - 领域类型定义
// ==========================================
// 对齐: CRITERIA.CRI_TYPE / ARTICLE_CRITERIA.ACR_KV_DES_ID
// ==========================================

use serde::{Serialize, Serializer};
use std::fmt;

// ===== 主键类型 (对齐 TecDoc 数值主键) =====
pub type DesignationId = i64;
pub type LanguageId = i64;
pub type CriteriaId = i64;
pub type PartId = i64;
pub type GroupId = i64;
pub type GraphicId = i64;
pub type FileTypeId = i64;

// ==========================================
// 特征类型 (Criteria Type)
// ==========================================
// 单字符类型码,决定特征值存放位置
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CriteriaType {
    Alphanumeric,   // A: 值为自由文本 (ACR_VALUE)
    Informational,  // B: 信息性数值 (ACR_VALUE)
    ProductionYear, // D: 生产年份区间文本 (ACR_VALUE)
    KeyValue,       // K: 值经描述引用给出 (ACR_KV_DES_ID)
    Numeric,        // N: 数值文本 (ACR_VALUE)
    NoValue,        // V: 特征本身即值,两列均为空
    Unknown(String),
}

/// 特征值的存放位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueLocation {
    RawValue,
    Description,
    Implicit,
    Unspecified,
}

impl CriteriaType {
    /// 从数据库字符串解析 (大小写不敏感,忽略首尾空白)
    pub fn from_db_str(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => CriteriaType::Alphanumeric,
            "B" => CriteriaType::Informational,
            "D" => CriteriaType::ProductionYear,
            "K" => CriteriaType::KeyValue,
            "N" => CriteriaType::Numeric,
            "V" => CriteriaType::NoValue,
            _ => CriteriaType::Unknown(s.trim().to_string()),
        }
    }

    pub fn to_db_str(&self) -> &str {
        match self {
            CriteriaType::Alphanumeric => "A",
            CriteriaType::Informational => "B",
            CriteriaType::ProductionYear => "D",
            CriteriaType::KeyValue => "K",
            CriteriaType::Numeric => "N",
            CriteriaType::NoValue => "V",
            CriteriaType::Unknown(raw) => raw,
        }
    }

    pub fn value_location(&self) -> ValueLocation {
        match self {
            CriteriaType::Alphanumeric
            | CriteriaType::Informational
            | CriteriaType::ProductionYear
            | CriteriaType::Numeric => ValueLocation::RawValue,
            CriteriaType::KeyValue => ValueLocation::Description,
            CriteriaType::NoValue => ValueLocation::Implicit,
            CriteriaType::Unknown(_) => ValueLocation::Unspecified,
        }
    }
}

impl fmt::Display for CriteriaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// 序列化为原始类型码,与数据库一致
impl Serialize for CriteriaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_db_str())
    }
}

// ==========================================
// 描述引用 (Description Reference)
// ==========================================
// ACR_KV_DES_ID 的三种状态:
// - NULL          -> Absent
// - 0 (哨兵值)     -> Degenerate (错误关联,必须剔除)
// - 其他          -> Designation(id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionRef {
    Absent,
    Degenerate,
    Designation(DesignationId),
}

impl DescriptionRef {
    pub const DEGENERATE_ID: DesignationId = 0;

    /// 从数据库列值解码
    pub fn from_column(raw: Option<DesignationId>) -> Self {
        match raw {
            None => DescriptionRef::Absent,
            Some(Self::DEGENERATE_ID) => DescriptionRef::Degenerate,
            Some(id) => DescriptionRef::Designation(id),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, DescriptionRef::Degenerate)
    }

    pub fn designation_id(&self) -> Option<DesignationId> {
        match self {
            DescriptionRef::Designation(id) => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_type_from_db_str() {
        assert_eq!(CriteriaType::from_db_str("A"), CriteriaType::Alphanumeric);
        assert_eq!(CriteriaType::from_db_str(" k "), CriteriaType::KeyValue);
        assert_eq!(CriteriaType::from_db_str("V"), CriteriaType::NoValue);
        assert_eq!(
            CriteriaType::from_db_str("Z"),
            CriteriaType::Unknown("Z".to_string())
        );
    }

    #[test]
    fn test_value_location() {
        assert_eq!(CriteriaType::Numeric.value_location(), ValueLocation::RawValue);
        assert_eq!(CriteriaType::KeyValue.value_location(), ValueLocation::Description);
        assert_eq!(CriteriaType::NoValue.value_location(), ValueLocation::Implicit);
        assert_eq!(
            CriteriaType::Unknown(String::new()).value_location(),
            ValueLocation::Unspecified
        );
    }

    #[test]
    fn test_criteria_type_serializes_as_tag() {
        let json = serde_json::to_string(&CriteriaType::ProductionYear).unwrap();
        assert_eq!(json, "\"D\"");
    }

    #[test]
    fn test_description_ref_from_column() {
        assert_eq!(DescriptionRef::from_column(None), DescriptionRef::Absent);
        assert_eq!(DescriptionRef::from_column(Some(0)), DescriptionRef::Degenerate);
        assert_eq!(
            DescriptionRef::from_column(Some(1234)),
            DescriptionRef::Designation(1234)
        );
        assert!(DescriptionRef::Degenerate.is_degenerate());
        assert_eq!(DescriptionRef::Designation(5).designation_id(), Some(5));
        assert_eq!(DescriptionRef::Degenerate.designation_id(), None);
    }
}
