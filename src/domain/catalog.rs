// ==========================================
// TecDoc 零件目录 - 特征目录 (按 id 索引)
// ==========================================
// 后继特征 (CRI_SUCCESSOR) 只保存 id,按需解析
// 与加载顺序无关
// ==========================================

use crate::domain::criteria::Criteria;
use crate::domain::types::CriteriaId;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct CriteriaCatalog {
    by_id: BTreeMap<CriteriaId, Criteria>,
}

impl CriteriaCatalog {
    pub fn new(criteria: impl IntoIterator<Item = Criteria>) -> Self {
        Self {
            by_id: criteria.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn get(&self, id: CriteriaId) -> Option<&Criteria> {
        self.by_id.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criteria> {
        self.by_id.values()
    }

    /// 后继特征 (后继 id 不在目录中时为 None)
    pub fn successor(&self, id: CriteriaId) -> Option<&Criteria> {
        self.get(id)
            .and_then(|c| c.successor_id)
            .and_then(|next| self.get(next))
    }

    /// 以 `id` 为后继的所有特征
    pub fn parents(&self, id: CriteriaId) -> Vec<&Criteria> {
        self.by_id
            .values()
            .filter(|c| c.successor_id == Some(id))
            .collect()
    }

    /// 从 `id` 开始沿后继链展开
    ///
    /// 遇到缺失 id 或重复 id 即停止,损坏数据不会导致死循环。
    pub fn chain(&self, id: CriteriaId) -> Vec<&Criteria> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = self.get(id);

        while let Some(criteria) = current {
            if !seen.insert(criteria.id) {
                tracing::warn!(criteria_id = criteria.id, "后继链出现环, 截断");
                break;
            }
            chain.push(criteria);
            current = criteria.successor_id.and_then(|next| self.get(next));
        }

        chain
    }
}
