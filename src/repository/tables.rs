// ==========================================
// TecDoc 零件目录 - 表名绑定
// ==========================================
// 所有表名统一加 DB_PREFIX 前缀
// 前缀已在配置层校验为 [A-Za-z0-9_]*,可安全拼接进 SQL
// ==========================================

pub const DESIGNATIONS: &str = "DESIGNATIONS";
pub const DES_TEXTS: &str = "DES_TEXTS";
pub const CRITERIA: &str = "CRITERIA";
pub const ARTICLE_CRITERIA: &str = "ARTICLE_CRITERIA";
pub const DOC_TYPES: &str = "DOC_TYPES";
pub const GRAPHICS: &str = "GRAPHICS";
pub const LINK_GRA_ART: &str = "LINK_GRA_ART";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableNames {
    prefix: String,
}

impl TableNames {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn table(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    pub fn designations(&self) -> String {
        self.table(DESIGNATIONS)
    }

    pub fn des_texts(&self) -> String {
        self.table(DES_TEXTS)
    }

    pub fn criteria(&self) -> String {
        self.table(CRITERIA)
    }

    pub fn article_criteria(&self) -> String {
        self.table(ARTICLE_CRITERIA)
    }

    pub fn doc_types(&self) -> String {
        self.table(DOC_TYPES)
    }

    pub fn graphics(&self) -> String {
        self.table(GRAPHICS)
    }

    pub fn link_gra_art(&self) -> String {
        self.table(LINK_GRA_ART)
    }

    /// 某个名称列在指定语言下的 LEFT JOIN 片段
    ///
    /// 生成别名 `{alias}` (DESIGNATIONS) 与 `{alias}_tex` (DES_TEXTS)。
    /// 语言参数固定为 `?1`。
    pub(crate) fn designation_join(&self, alias: &str, des_id_column: &str) -> String {
        format!(
            "LEFT JOIN {des} {a} ON {a}.DES_ID = {col} AND {a}.DES_LNG_ID = ?1 \
             LEFT JOIN {tex} {a}_tex ON {a}_tex.TEX_ID = {a}.DES_TEX_ID",
            des = self.designations(),
            tex = self.des_texts(),
            a = alias,
            col = des_id_column,
        )
    }
}

/// 名称文本列: 语言行不存在为 NULL, 语言行存在但文本缺失为空串
pub(crate) fn designation_text_column(alias: &str) -> String {
    format!(
        "CASE WHEN {a}.DES_ID IS NULL THEN NULL ELSE COALESCE({a}_tex.TEX_TEXT, '') END",
        a = alias
    )
}
