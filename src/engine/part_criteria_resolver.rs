// ==========================================
// TecDoc 零件目录 - 零件特征解析引擎
// ==========================================
// 职责: 零件特征行 -> 有序的 (特征名称, 值) 列表
// 规则:
// 1. 全称与简称都必须存在于当前语言
// 2. 描述 id 为哨兵值 0 的退化行一律剔除
// 3. 按 ACR_SORT 升序稳定排序 (同序保持读取顺序)
// 4. 值: 原始值非空优先,否则取描述文本
// ==========================================
// 红线: Engine 不拼 SQL
// ==========================================

use crate::domain::criteria::{CriteriaValue, PartCriteria};
use crate::domain::types::{LanguageId, PartId};
use crate::repository::{PartCriteriaRepository, RepositoryResult};
use std::sync::Arc;
use tracing::instrument;

// ==========================================
// PartCriteriaResolver - 零件特征解析引擎
// ==========================================
pub struct PartCriteriaResolver {
    part_criteria_repo: Arc<PartCriteriaRepository>,
}

impl PartCriteriaResolver {
    pub fn new(part_criteria_repo: Arc<PartCriteriaRepository>) -> Self {
        Self { part_criteria_repo }
    }

    /// 查询并解析零件特征
    ///
    /// 数据源不可用时返回错误,不做重试。
    #[instrument(skip(self))]
    pub fn list_for_part(
        &self,
        part_id: PartId,
        language_id: LanguageId,
    ) -> RepositoryResult<Vec<CriteriaValue>> {
        let rows = self.part_criteria_repo.find_by_part(part_id, language_id)?;
        Ok(resolve_rows(rows))
    }
}

/// 对已读取的特征行执行过滤、排序与取值
pub fn resolve_rows(rows: Vec<PartCriteria>) -> Vec<CriteriaValue> {
    let fetched = rows.len();

    let mut kept: Vec<PartCriteria> = rows
        .into_iter()
        .filter(|row| row.criteria.has_language_texts())
        .filter(|row| {
            if row.is_degenerate() {
                tracing::trace!(identity = ?row.identity(), "剔除退化特征行");
                return false;
            }
            true
        })
        .collect();

    // sort_by_key 为稳定排序
    kept.sort_by_key(|row| row.sorting);

    for row in kept.iter().filter(|row| !row.matches_type()) {
        tracing::debug!(
            identity = ?row.identity(),
            criteria_type = %row.criteria.criteria_type,
            "特征行填充列与类型码不一致"
        );
    }

    tracing::debug!(fetched, resolved = kept.len(), "零件特征解析完成");
    kept.iter().map(CriteriaValue::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::Criteria;
    use crate::domain::types::{CriteriaType, DescriptionRef};

    fn make_criteria(id: i64, designation: Option<&str>, short: Option<&str>) -> Criteria {
        Criteria {
            id,
            designation_id: Some(id * 10),
            designation: designation.map(str::to_string),
            short_designation_id: Some(id * 10 + 1),
            short_designation: short.map(str::to_string),
            unit_designation_id: None,
            unit: None,
            criteria_type: CriteriaType::Numeric,
            is_interval: false,
            successor_id: None,
        }
    }

    fn make_row(criteria_id: i64, sorting: i64, value: Option<&str>) -> PartCriteria {
        PartCriteria {
            part_id: 1,
            group_id: 1,
            value: value.map(str::to_string),
            description: DescriptionRef::Absent,
            description_text: None,
            key_table_id: None,
            sorting,
            display: true,
            criteria: make_criteria(criteria_id, Some("Weight"), Some("Wt")),
        }
    }

    #[test]
    fn test_orders_by_sorting() {
        let rows = vec![
            make_row(1, 3, Some("c")),
            make_row(2, 1, Some("a")),
            make_row(3, 2, Some("b")),
        ];

        let values: Vec<_> = resolve_rows(rows).into_iter().map(|v| v.value).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ties_keep_fetch_order() {
        let rows = vec![
            make_row(1, 5, Some("first")),
            make_row(2, 1, Some("zero")),
            make_row(3, 5, Some("second")),
            make_row(4, 5, Some("third")),
        ];

        let values: Vec<_> = resolve_rows(rows).into_iter().map(|v| v.value).collect();
        assert_eq!(values, vec!["zero", "first", "second", "third"]);
    }

    #[test]
    fn test_excludes_degenerate_rows_idempotently() {
        crate::logging::init_test();

        let mut degenerate = make_row(2, 1, Some("bad"));
        degenerate.description = DescriptionRef::Degenerate;
        let rows = vec![make_row(1, 2, Some("ok")), degenerate];

        let once = resolve_rows(rows.clone());
        let twice = resolve_rows(rows);
        assert_eq!(once.len(), 1);
        assert_eq!(once[0].value, "ok");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_excludes_rows_without_language_texts() {
        let mut no_short = make_row(2, 1, Some("x"));
        no_short.criteria.short_designation = None;
        let mut no_full = make_row(3, 1, Some("y"));
        no_full.criteria.designation = None;

        let resolved = resolve_rows(vec![make_row(1, 1, Some("ok")), no_short, no_full]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].criteria_id, 1);
    }

    #[test]
    fn test_value_and_display_fallbacks() {
        let mut described = make_row(1, 1, None);
        described.criteria.criteria_type = CriteriaType::KeyValue;
        described.description = DescriptionRef::Designation(77);
        described.description_text = Some("Chrome".to_string());

        let mut raw_wins = make_row(2, 2, Some("12"));
        raw_wins.description = DescriptionRef::Designation(78);
        raw_wins.description_text = Some("ignored".to_string());
        raw_wins.criteria.short_designation = Some(String::new());

        let mut empty = make_row(3, 3, None);
        empty.criteria.criteria_type = CriteriaType::NoValue;

        let resolved = resolve_rows(vec![described, raw_wins, empty]);
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0].value, "Chrome");
        assert_eq!(resolved[0].criteria_display, "Wt");
        assert_eq!(resolved[1].value, "12");
        assert_eq!(resolved[1].criteria_display, "Weight");
        // 两列都为空仍然输出
        assert_eq!(resolved[2].value, "");
        assert_eq!(resolved[2].criteria_type, CriteriaType::NoValue);
    }
}
