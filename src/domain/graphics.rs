// ==========================================
// TecDoc 零件目录 - 图形文件领域模型
// ==========================================
// 对齐: DOC_TYPES / GRAPHICS / LINK_GRA_ART 表
// 图片与 PDF 共用 GRAPHICS 存储,仅路径规则不同
// ==========================================

use crate::domain::types::{FileTypeId, GraphicId, PartId};
use serde::Serialize;

/// JPEG2000 原图扩展名,对外以 JPEG 提供
pub const JPEG2000_EXT: &str = "jp2";
pub const SERVED_JPEG_EXT: &str = "jpg";
pub const PDF_EXT: &str = "pdf";

/// 文件类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileType {
    pub id: FileTypeId, // DOC_TYPE
    pub ext: String,    // DOC_EXTENSION (类型行缺失时为空)
}

impl FileType {
    pub fn is_pdf(&self) -> bool {
        self.ext.eq_ignore_ascii_case(PDF_EXT)
    }
}

/// GRAPHICS 表一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub id: GraphicId,       // GRA_ID
    pub file_type: FileType, // GRA_DOC_TYPE
    pub db_number: i64,      // GRA_TAB_NR
    pub filename: i64,       // GRA_GRD_ID
}

// ==========================================
// GraphicFile - 图形文件 (按类型区分路径规则)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicFile {
    Image(FileRecord),
    PdfFile(FileRecord),
}

impl GraphicFile {
    /// 按文件扩展名归类 (扩展名按原样比较,不去除空白)
    pub fn classify(record: FileRecord) -> Self {
        if record.file_type.is_pdf() {
            GraphicFile::PdfFile(record)
        } else {
            GraphicFile::Image(record)
        }
    }

    pub fn record(&self) -> &FileRecord {
        match self {
            GraphicFile::Image(record) | GraphicFile::PdfFile(record) => record,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            GraphicFile::Image(_) => "image",
            GraphicFile::PdfFile(_) => "pdf",
        }
    }

    /// 相对路径
    ///
    /// - 图片: `images/{db_number}/{filename}.{ext}` (扩展名小写, jp2 改写为 jpg)
    /// - PDF: `/pdf/000{filename}.pdf` (固定三个 0 前缀,文件名本身不补位)
    pub fn relative_path(&self) -> String {
        match self {
            GraphicFile::Image(record) => {
                let ext = record.file_type.ext.to_lowercase();
                let ext = if ext == JPEG2000_EXT {
                    SERVED_JPEG_EXT.to_string()
                } else {
                    ext
                };
                format!("images/{}/{}.{}", record.db_number, record.filename, ext)
            }
            GraphicFile::PdfFile(record) => format!("/pdf/000{}.{}", record.filename, PDF_EXT),
        }
    }

    /// 绝对地址 = 文件服务地址 + 相对路径 (直接拼接)
    pub fn absolute_path(&self, file_host: &str) -> String {
        format!("{}{}", file_host, self.relative_path())
    }
}

/// 零件与图形文件的关联 (LINK_GRA_ART)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartFile {
    pub part_id: PartId, // LGA_ART_ID
    pub file: GraphicFile, // LGA_GRA_ID
}
